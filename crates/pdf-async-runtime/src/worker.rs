use crate::{PdfCommand, PdfUpdate};
use pdf_jpeg::{ConvertOptions, FileSelector, SelectedFile};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Spawn the worker on the current runtime and return its channels
pub fn spawn_worker() -> (
    mpsc::UnboundedSender<PdfCommand>,
    mpsc::UnboundedReceiver<PdfUpdate>,
    JoinHandle<()>,
) {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, update_rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(worker_task(command_rx, update_tx));
    (command_tx, update_rx, handle)
}

/// Async worker task that processes commands one at a time and sends updates.
///
/// Commands are never interleaved, so a conversion cannot start while
/// another is still running.
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<PdfCommand>,
    update_tx: mpsc::UnboundedSender<PdfUpdate>,
) {
    let mut selector = FileSelector::new();

    while let Some(cmd) = command_rx.recv().await {
        match cmd {
            PdfCommand::SelectFiles { files } => {
                handle_select(files, &mut selector, &update_tx);
            }
            PdfCommand::Convert {
                options,
                output_path,
            } => {
                handle_convert(options, output_path, &selector, &update_tx).await;
            }
        }
    }

    log::debug!("Command channel closed, worker exiting");
}

fn handle_select(
    files: Vec<SelectedFile>,
    selector: &mut FileSelector,
    update_tx: &mpsc::UnboundedSender<PdfUpdate>,
) {
    match selector.select(files) {
        Ok(count) => {
            log::info!("{count} JPG file(s) selected");
            let _ = update_tx.send(PdfUpdate::FilesSelected { count });
        }
        Err(e) => {
            log::warn!("Selection rejected: {e}");
            let _ = update_tx.send(PdfUpdate::Error {
                message: "Please select one or more JPG files.".to_string(),
            });
        }
    }
}

async fn handle_convert(
    options: ConvertOptions,
    output_path: PathBuf,
    selector: &FileSelector,
    update_tx: &mpsc::UnboundedSender<PdfUpdate>,
) {
    let Some(selection) = selector.current() else {
        let _ = update_tx.send(PdfUpdate::Error {
            message: "No JPG files selected for conversion.".to_string(),
        });
        return;
    };

    let result = pdf_jpeg::convert_with_progress(selection.files(), &options, |progress| {
        let operation = match progress.file_name {
            Some(name) => format!("Embedding {name}"),
            None => "Finalizing PDF".to_string(),
        };
        let _ = update_tx.send(PdfUpdate::Progress {
            operation,
            current: progress.current,
            total: progress.total,
        });
    })
    .await;

    let outcome = match result {
        Ok(bytes) => pdf_jpeg::save_pdf(&bytes, &output_path)
            .await
            .map(|()| bytes.len()),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(byte_len) => {
            let _ = update_tx.send(PdfUpdate::ConvertComplete {
                path: output_path,
                page_count: selection.len(),
                byte_len,
            });
        }
        Err(e) => {
            log::warn!("PDF conversion failed: {e}");
            let _ = update_tx.send(PdfUpdate::Error {
                message: format!("Error during PDF conversion: {e}"),
            });
        }
    }
}
