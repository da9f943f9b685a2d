//! JPEG header inspection
//!
//! Images are embedded without re-encoding, so all we need from the bytes is
//! proof that they decode as a JPEG plus the frame parameters a PDF image
//! dictionary requires.

use crate::types::*;
use image::ImageDecoder;
use image::codecs::jpeg::JpegDecoder;
use std::io::Cursor;

/// PDF color space matching the JPEG's component count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    DeviceGray,
    DeviceRgb,
    DeviceCmyk,
}

impl ColorSpace {
    fn from_components(components: u8) -> Option<Self> {
        match components {
            1 => Some(ColorSpace::DeviceGray),
            3 => Some(ColorSpace::DeviceRgb),
            4 => Some(ColorSpace::DeviceCmyk),
            _ => None,
        }
    }

    pub fn pdf_name(self) -> &'static str {
        match self {
            ColorSpace::DeviceGray => "DeviceGray",
            ColorSpace::DeviceRgb => "DeviceRGB",
            ColorSpace::DeviceCmyk => "DeviceCMYK",
        }
    }

    pub fn components(self) -> usize {
        match self {
            ColorSpace::DeviceGray => 1,
            ColorSpace::DeviceRgb => 3,
            ColorSpace::DeviceCmyk => 4,
        }
    }
}

/// A validated JPEG, ready to embed as-is
#[derive(Debug, Clone)]
pub struct JpegImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
    bits_per_component: u8,
    color_space: ColorSpace,
}

impl JpegImage {
    /// Validate `data` as a JPEG and read its frame parameters.
    ///
    /// `name` identifies the source file in the returned error.
    pub fn parse(name: &str, data: Vec<u8>) -> Result<Self> {
        let embed_error = |reason: String| ConvertError::Embed {
            name: name.to_string(),
            reason,
        };

        let (width, height) = {
            let decoder = JpegDecoder::new(Cursor::new(data.as_slice()))
                .map_err(|e| embed_error(e.to_string()))?;
            decoder.dimensions()
        };

        if width == 0 || height == 0 {
            return Err(embed_error(format!(
                "invalid image size {}x{}",
                width, height
            )));
        }

        let frame = read_frame_header(&data)
            .ok_or_else(|| embed_error("no frame header found".to_string()))?;
        let color_space = ColorSpace::from_components(frame.components).ok_or_else(|| {
            embed_error(format!(
                "unsupported number of color components: {}",
                frame.components
            ))
        })?;

        Ok(Self {
            data,
            width,
            height,
            bits_per_component: frame.bits_per_component,
            color_space,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bits_per_component(&self) -> u8 {
        self.bits_per_component
    }

    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    pub(crate) fn into_data(self) -> Vec<u8> {
        self.data
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        data: Vec<u8>,
        width: u32,
        height: u32,
        color_space: ColorSpace,
    ) -> Self {
        Self {
            data,
            width,
            height,
            bits_per_component: 8,
            color_space,
        }
    }
}

// =============================================================================
// Marker Scanning
// =============================================================================

struct FrameHeader {
    bits_per_component: u8,
    components: u8,
}

const SOI: u8 = 0xD8;
const EOI: u8 = 0xD9;
const SOS: u8 = 0xDA;

/// Start-of-frame markers: C0 through CF, minus DHT (C4), JPG (C8) and DAC (CC)
fn is_start_of_frame(marker: u8) -> bool {
    matches!(marker, 0xC0..=0xCF) && !matches!(marker, 0xC4 | 0xC8 | 0xCC)
}

/// Markers that carry no length field
fn is_standalone(marker: u8) -> bool {
    matches!(marker, SOI | 0x01 | 0xD0..=0xD7)
}

fn read_frame_header(data: &[u8]) -> Option<FrameHeader> {
    if data.get(..2)? != [0xFF, SOI] {
        return None;
    }

    let mut pos = 2;
    while pos + 1 < data.len() {
        if data[pos] != 0xFF {
            return None;
        }
        let marker = data[pos + 1];

        if marker == 0xFF {
            // fill byte
            pos += 1;
            continue;
        }
        if is_standalone(marker) {
            pos += 2;
            continue;
        }
        if marker == EOI || marker == SOS {
            return None;
        }

        let length = u16::from_be_bytes([*data.get(pos + 2)?, *data.get(pos + 3)?]) as usize;
        if length < 2 {
            return None;
        }

        if is_start_of_frame(marker) {
            // precision, height (2), width (2), component count
            let segment = data.get(pos + 4..pos + 2 + length)?;
            if segment.len() < 6 {
                return None;
            }
            return Some(FrameHeader {
                bits_per_component: segment[0],
                components: segment[5],
            });
        }

        pos += 2 + length;
    }

    None
}
