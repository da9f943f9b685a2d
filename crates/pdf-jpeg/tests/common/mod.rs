#![allow(dead_code)]

use image::codecs::jpeg::JpegEncoder;
use image::{GrayImage, Luma, Rgb, RgbImage};
use lopdf::content::Content;
use lopdf::Document;
use pdf_jpeg::SelectedFile;

pub fn rgb_jpeg(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, 80)
        .encode_image(&image)
        .unwrap();
    bytes
}

pub fn gray_jpeg(width: u32, height: u32) -> Vec<u8> {
    let image = GrayImage::from_fn(width, height, |x, _| Luma([(x % 256) as u8]));
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, 80)
        .encode_image(&image)
        .unwrap();
    bytes
}

pub fn jpeg_file(name: &str, width: u32, height: u32) -> SelectedFile {
    SelectedFile::from_bytes(name, "image/jpeg", rgb_jpeg(width, height))
}

/// What a single output page draws, as read back from the PDF
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnPage {
    pub page_width: f32,
    pub page_height: f32,
    pub image_width: i64,
    pub image_height: i64,
    pub color_space: Vec<u8>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub fn load_pdf(bytes: &[u8]) -> Document {
    Document::load_mem(bytes).unwrap()
}

pub fn drawn_pages(bytes: &[u8]) -> Vec<DrawnPage> {
    let doc = load_pdf(bytes);
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let page = doc.get_dictionary(page_id).unwrap();

            let media_box: Vec<f32> = page
                .get(b"MediaBox")
                .unwrap()
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_float().unwrap())
                .collect();

            let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
            let cm = content
                .operations
                .iter()
                .find(|op| op.operator == "cm")
                .unwrap();
            let matrix: Vec<f32> = cm.operands.iter().map(|v| v.as_float().unwrap()).collect();

            let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
            let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
            let (_, image_ref) = xobjects.iter().next().unwrap();
            let image = doc
                .get_object(image_ref.as_reference().unwrap())
                .unwrap()
                .as_stream()
                .unwrap();

            DrawnPage {
                page_width: media_box[2],
                page_height: media_box[3],
                image_width: image.dict.get(b"Width").unwrap().as_i64().unwrap(),
                image_height: image.dict.get(b"Height").unwrap().as_i64().unwrap(),
                color_space: image
                    .dict
                    .get(b"ColorSpace")
                    .unwrap()
                    .as_name()
                    .unwrap()
                    .to_vec(),
                x: matrix[4],
                y: matrix[5],
                width: matrix[0],
                height: matrix[3],
            }
        })
        .collect()
}

pub fn info_string(bytes: &[u8], key: &[u8]) -> Option<String> {
    let doc = load_pdf(bytes);
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let info = doc.get_dictionary(info_id).ok()?;
    lopdf::decode_text_string(info.get(key).ok()?).ok()
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-2,
        "expected {expected}, got {actual}"
    );
}
