pub mod compose;
pub mod constants;
mod geometry;
mod jpeg;
mod options;
mod selection;
mod types;

pub use compose::{ConvertProgress, PagePlan, convert, convert_with_progress, plan_layout, save_pdf};
pub use geometry::{Placement, fit_centered};
pub use jpeg::{ColorSpace, JpegImage};
pub use options::*;
pub use selection::{FileSelector, FileSource, SelectedFile, Selection, is_jpeg_mime, mime_for_path};
pub use types::*;
