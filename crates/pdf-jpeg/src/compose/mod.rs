//! Page composition - turning selected JPEGs into one PDF
//!
//! Files are handled strictly in order, one at a time:
//! 1. Read the file's bytes
//! 2. Validate the JPEG and read its frame parameters
//! 3. Fit and center the image on a new page
//!
//! The first failure aborts the run and the partly built document is
//! dropped. Only a fully successful run is serialized.

mod builder;
mod io;

pub use io::save_pdf;

use crate::geometry::{Placement, fit_centered};
use crate::jpeg::JpegImage;
use crate::options::ConvertOptions;
use crate::selection::SelectedFile;
use crate::types::*;
use builder::PdfBuilder;
use io::read_file;

/// Progress of a conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertProgress {
    /// Files finished so far
    pub current: usize,
    /// Files in the run
    pub total: usize,
    /// File about to be processed, `None` once the run is complete
    pub file_name: Option<String>,
}

/// Computed layout for one input file
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    pub file_name: String,
    pub image_width: u32,
    pub image_height: u32,
    pub page: PageSize,
    pub placement: Placement,
}

/// Convert JPEG files into a PDF with one page per file
pub async fn convert(files: &[SelectedFile], options: &ConvertOptions) -> Result<Vec<u8>> {
    convert_with_progress(files, options, |_| {}).await
}

/// Like [`convert`], reporting progress before each file and at completion
pub async fn convert_with_progress<F>(
    files: &[SelectedFile],
    options: &ConvertOptions,
    mut on_progress: F,
) -> Result<Vec<u8>>
where
    F: FnMut(ConvertProgress) + Send,
{
    options.validate()?;
    if files.is_empty() {
        return Err(ConvertError::EmptySelection);
    }

    let page = options.page_size();
    let total = files.len();
    log::info!(
        "Converting {} JPG file(s) onto {} x {} pt pages",
        total,
        page.width,
        page.height
    );

    let mut builder = PdfBuilder::new(&options.title);

    for (index, file) in files.iter().enumerate() {
        on_progress(ConvertProgress {
            current: index,
            total,
            file_name: Some(file.name().to_string()),
        });

        let image = load_image(file).await?;
        let placement = fit_centered(image.width() as f32, image.height() as f32, page);
        log::debug!(
            "{}: {}x{} px, scale {:.4}, placed at ({:.2}, {:.2}) size {:.2} x {:.2}",
            file.name(),
            image.width(),
            image.height(),
            placement.scale,
            placement.x,
            placement.y,
            placement.width,
            placement.height
        );

        builder.add_jpeg_page(image, page, &placement);
    }

    let page_count = builder.page_count();
    let bytes = tokio::task::spawn_blocking(move || builder.finish()).await??;

    on_progress(ConvertProgress {
        current: total,
        total,
        file_name: None,
    });
    log::info!("Converted {} page(s), {} bytes", page_count, bytes.len());

    Ok(bytes)
}

/// Compute the placement of every file without building a document
pub async fn plan_layout(
    files: &[SelectedFile],
    options: &ConvertOptions,
) -> Result<Vec<PagePlan>> {
    options.validate()?;
    if files.is_empty() {
        return Err(ConvertError::EmptySelection);
    }

    let page = options.page_size();
    let mut plans = Vec::with_capacity(files.len());
    for file in files {
        let image = load_image(file).await?;
        plans.push(PagePlan {
            file_name: file.name().to_string(),
            image_width: image.width(),
            image_height: image.height(),
            page,
            placement: fit_centered(image.width() as f32, image.height() as f32, page),
        });
    }
    Ok(plans)
}

async fn load_image(file: &SelectedFile) -> Result<JpegImage> {
    let bytes = read_file(file).await?;
    let name = file.name().to_string();

    // Header decoding is CPU-bound, spawn blocking
    tokio::task::spawn_blocking(move || JpegImage::parse(&name, bytes)).await?
}
