use std::fmt;
use std::path::PathBuf;

mod worker;

pub use worker::{spawn_worker, worker_task};

// Re-export types from library crates
pub use pdf_jpeg::{ConvertOptions, SelectedFile};

/// Commands sent from the host to the worker
#[derive(Debug)]
pub enum PdfCommand {
    /// Replace the current selection with the JPEGs among `files`
    SelectFiles { files: Vec<SelectedFile> },
    /// Convert the current selection and write the result to `output_path`
    Convert {
        options: ConvertOptions,
        output_path: PathBuf,
    },
}

/// Updates sent from worker to host
#[derive(Debug, Clone, PartialEq)]
pub enum PdfUpdate {
    FilesSelected {
        count: usize,
    },
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    ConvertComplete {
        path: PathBuf,
        page_count: usize,
        byte_len: usize,
    },
    Error {
        message: String,
    },
}

impl fmt::Display for PdfUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfUpdate::FilesSelected { count } => write!(f, "{count} JPG file(s) selected."),
            PdfUpdate::Progress {
                operation,
                current,
                total,
            } => write!(f, "[{current}/{total}] {operation}"),
            PdfUpdate::ConvertComplete {
                path, page_count, ..
            } => write!(
                f,
                "Conversion successful! {page_count} page(s) → {}",
                path.display()
            ),
            PdfUpdate::Error { message } => f.write_str(message),
        }
    }
}
