//! Conversion options
//!
//! Page setup and document metadata, loadable from a JSON file.

use crate::constants::DEFAULT_TITLE;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Conversion configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConvertOptions {
    // Page setup
    pub paper_size: PaperSize,
    pub orientation: Orientation,

    // Document metadata
    pub title: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::Letter,
            orientation: Orientation::Portrait,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ConvertOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ConvertError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConvertError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Page size every image is fitted onto
    pub fn page_size(&self) -> PageSize {
        self.paper_size.page_size(self.orientation)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.paper_size.dimensions_pt();
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ConvertError::Config(format!(
                "Page dimensions must be positive, got {} x {} pt",
                width, height
            )));
        }
        Ok(())
    }
}
