use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use pdf_async_runtime::*;
use std::path::Path;

fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb([200, 120, 40]));
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, 75)
        .encode_image(&image)
        .unwrap();
    bytes
}

fn jpeg(name: &str) -> SelectedFile {
    SelectedFile::from_bytes(name, "image/jpeg", jpeg_bytes(20, 10))
}

/// Send `commands`, close the channel and collect every update
async fn run(commands: Vec<PdfCommand>) -> Vec<PdfUpdate> {
    let (command_tx, mut update_rx, handle) = spawn_worker();
    for cmd in commands {
        command_tx.send(cmd).unwrap();
    }
    drop(command_tx);

    let mut updates = Vec::new();
    while let Some(update) = update_rx.recv().await {
        updates.push(update);
    }
    handle.await.unwrap();
    updates
}

fn convert_to(path: &Path) -> PdfCommand {
    PdfCommand::Convert {
        options: ConvertOptions::default(),
        output_path: path.to_path_buf(),
    }
}

#[tokio::test]
async fn test_select_then_convert_writes_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.pdf");

    let updates = run(vec![
        PdfCommand::SelectFiles {
            files: vec![
                jpeg("a.jpg"),
                SelectedFile::from_bytes("b.png", "image/png", vec![1, 2, 3]),
                jpeg("c.jpg"),
            ],
        },
        convert_to(&output),
    ])
    .await;

    assert_eq!(updates[0], PdfUpdate::FilesSelected { count: 2 });
    assert_eq!(updates[0].to_string(), "2 JPG file(s) selected.");

    let progress: Vec<_> = updates
        .iter()
        .filter_map(|u| match u {
            PdfUpdate::Progress { operation, .. } => Some(operation.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        progress,
        vec!["Embedding a.jpg", "Embedding c.jpg", "Finalizing PDF"]
    );

    let bytes = std::fs::read(&output).unwrap();
    match updates.last().unwrap() {
        PdfUpdate::ConvertComplete {
            path,
            page_count,
            byte_len,
        } => {
            assert_eq!(path, &output);
            assert_eq!(*page_count, 2);
            assert_eq!(*byte_len, bytes.len());
        }
        other => panic!("Expected ConvertComplete, got {other:?}"),
    }
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_convert_without_selection() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.pdf");

    let updates = run(vec![convert_to(&output)]).await;

    assert_eq!(
        updates,
        vec![PdfUpdate::Error {
            message: "No JPG files selected for conversion.".to_string(),
        }]
    );
    assert!(!output.exists());
}

#[tokio::test]
async fn test_non_jpeg_selection_clears_previous_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.pdf");

    let updates = run(vec![
        PdfCommand::SelectFiles {
            files: vec![jpeg("a.jpg")],
        },
        PdfCommand::SelectFiles {
            files: vec![SelectedFile::from_bytes("b.gif", "image/gif", vec![0])],
        },
        convert_to(&output),
    ])
    .await;

    assert_eq!(
        updates,
        vec![
            PdfUpdate::FilesSelected { count: 1 },
            PdfUpdate::Error {
                message: "Please select one or more JPG files.".to_string(),
            },
            PdfUpdate::Error {
                message: "No JPG files selected for conversion.".to_string(),
            },
        ]
    );
    assert!(!output.exists());
}

#[tokio::test]
async fn test_failed_conversion_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.pdf");

    let updates = run(vec![
        PdfCommand::SelectFiles {
            files: vec![
                jpeg("a.jpg"),
                SelectedFile::from_bytes("bad.jpg", "image/jpeg", b"garbage".to_vec()),
                jpeg("c.jpg"),
            ],
        },
        convert_to(&output),
    ])
    .await;

    match updates.last().unwrap() {
        PdfUpdate::Error { message } => {
            assert!(message.starts_with("Error during PDF conversion:"));
            assert!(message.contains("bad.jpg"));
        }
        other => panic!("Expected Error, got {other:?}"),
    }
    assert!(!updates.iter().any(|u| matches!(
        u,
        PdfUpdate::Progress { operation, .. } if operation == "Embedding c.jpg"
    )));
    assert!(!output.exists());
}
