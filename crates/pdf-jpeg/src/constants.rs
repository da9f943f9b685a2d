//! Shared constants for JPEG to PDF conversion

// =============================================================================
// MIME Types
// =============================================================================

/// Declared MIME types accepted by the selection filter
pub const JPEG_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/jpg"];

/// Fallback for files whose type cannot be determined
pub const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

// =============================================================================
// Document
// =============================================================================

/// PDF version written to the file header
pub const PDF_VERSION: &str = "1.7";

/// Default document title
pub const DEFAULT_TITLE: &str = "Converted Images";

/// Value of the Info dictionary's Producer entry
pub const PRODUCER: &str = concat!("pdf-jpeg ", env!("CARGO_PKG_VERSION"));

/// Prefix for image XObject resource names (`/Im1`, `/Im2`, ...)
pub const IMAGE_RESOURCE_PREFIX: &str = "Im";
