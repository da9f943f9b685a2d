//! Selection filter
//!
//! Turns a raw list of user-chosen files into the ordered set of JPEGs
//! that a conversion run will consume.

use crate::constants::{JPEG_MIME_TYPES, UNKNOWN_MIME_TYPE};
use crate::types::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where a selected file's bytes live
#[derive(Debug, Clone)]
pub enum FileSource {
    /// A file on disk, read when the conversion reaches it
    Path(PathBuf),
    /// Bytes already held in memory
    Memory(Arc<[u8]>),
}

/// A user-chosen file with its declared MIME type
#[derive(Debug, Clone)]
pub struct SelectedFile {
    name: String,
    mime_type: String,
    source: FileSource,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, source: FileSource) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            source,
        }
    }

    /// Create a file handle for a path, declaring its type from the extension
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = mime_for_path(&path);
        Self::new(name, mime_type, FileSource::Path(path))
    }

    /// Create a file handle for in-memory bytes
    pub fn from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self::new(name, mime_type, FileSource::Memory(bytes.into()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn source(&self) -> &FileSource {
        &self.source
    }

    pub fn is_jpeg(&self) -> bool {
        is_jpeg_mime(&self.mime_type)
    }
}

/// True exactly for the declared types treated as JPEG
pub fn is_jpeg_mime(mime_type: &str) -> bool {
    JPEG_MIME_TYPES.contains(&mime_type)
}

/// Declared MIME type for a path, based on its extension
pub fn mime_for_path(path: impl AsRef<Path>) -> &'static str {
    let extension = path
        .as_ref()
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg" | "jpeg" | "jpe" | "jfif") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("tif" | "tiff") => "image/tiff",
        Some("pdf") => "application/pdf",
        _ => UNKNOWN_MIME_TYPE,
    }
}

/// Ordered, non-empty set of JPEG files ready for conversion
#[derive(Debug, Clone)]
pub struct Selection {
    files: Vec<SelectedFile>,
}

impl Selection {
    /// Keep only JPEG files, preserving their order.
    ///
    /// Returns `EmptySelection` when nothing survives the filter.
    pub fn filter(files: impl IntoIterator<Item = SelectedFile>) -> Result<Self> {
        let files: Vec<SelectedFile> = files
            .into_iter()
            .filter(|file| {
                let keep = file.is_jpeg();
                if !keep {
                    log::debug!(
                        "Skipping {} (declared type {})",
                        file.name(),
                        file.mime_type()
                    );
                }
                keep
            })
            .collect();

        if files.is_empty() {
            return Err(ConvertError::EmptySelection);
        }

        Ok(Self { files })
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectedFile> {
        self.files.iter()
    }
}

/// Holds the current selection between selection events and conversion runs
#[derive(Debug, Default)]
pub struct FileSelector {
    current: Option<Selection>,
}

impl FileSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current selection with the JPEGs among `files`.
    ///
    /// An empty result clears the selection and returns `EmptySelection`.
    pub fn select(&mut self, files: impl IntoIterator<Item = SelectedFile>) -> Result<usize> {
        match Selection::filter(files) {
            Ok(selection) => {
                let count = selection.len();
                self.current = Some(selection);
                Ok(count)
            }
            Err(e) => {
                self.current = None;
                Err(e)
            }
        }
    }

    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    /// Number of files in the current selection (zero when nothing is selected)
    pub fn count(&self) -> usize {
        self.current.as_ref().map_or(0, Selection::len)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
