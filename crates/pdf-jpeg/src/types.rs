use crate::constants::{DEFAULT_PAGE_HEIGHT_PT, DEFAULT_PAGE_WIDTH_PT};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("No JPG files selected")]
    EmptySelection,
    #[error("Failed to read file {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to embed {name}: {reason}")]
    Embed { name: String, reason: String },
    #[error("Failed to serialize PDF: {0}")]
    Serialization(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl ConvertError {
    /// Name of the file that caused the failure, if the error is tied to one
    pub fn file_name(&self) -> Option<&str> {
        match self {
            ConvertError::Read { name, .. } | ConvertError::Embed { name, .. } => {
                Some(name.as_str())
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width for every standard size
    #[default]
    Portrait,
    /// Landscape: width and height swapped
    Landscape,
}

/// Standard paper sizes, in PDF points (1/72 inch)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    #[default]
    Letter,
    Legal,
    Tabloid,
    A3,
    A4,
    A5,
    Custom { width_pt: f32, height_pt: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait for standard sizes)
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PaperSize::Letter => (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT),
            PaperSize::Legal => (612.0, 1008.0),
            PaperSize::Tabloid => (792.0, 1224.0),
            PaperSize::A3 => (841.89, 1190.55),
            PaperSize::A4 => (595.28, 841.89),
            PaperSize::A5 => (419.53, 595.28),
            PaperSize::Custom {
                width_pt,
                height_pt,
            } => (width_pt, height_pt),
        }
    }

    /// Get dimensions with orientation applied
    pub fn page_size(self, orientation: Orientation) -> PageSize {
        let (w, h) = self.dimensions_pt();
        match orientation {
            Orientation::Portrait => PageSize::new(w, h),
            Orientation::Landscape => PageSize::new(h, w),
        }
    }
}

/// Size of an output page in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PaperSize::Letter.page_size(Orientation::Portrait)
    }
}
