//! Image placement on a page
//!
//! Every image is scaled uniformly so it fits inside the page, then
//! centered. The axis that limits the scale (the binding axis) fills the
//! page exactly; the other axis is padded equally on both sides.

use crate::types::PageSize;

/// Where and how large an image is drawn on its page, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Uniform scale applied to the image's intrinsic size
    pub scale: f32,
    /// Left edge of the image
    pub x: f32,
    /// Bottom edge of the image
    pub y: f32,
    /// Scaled width
    pub width: f32,
    /// Scaled height
    pub height: f32,
}

/// Fit an image of the given intrinsic size onto `page`, preserving aspect
/// ratio, and center it.
///
/// Both image dimensions must be positive.
pub fn fit_centered(image_width: f32, image_height: f32, page: PageSize) -> Placement {
    debug_assert!(image_width > 0.0 && image_height > 0.0);

    let scale_x = page.width / image_width;
    let scale_y = page.height / image_height;

    // Pin the binding axis to the page edge so rounding can never overflow it
    let (scale, width, height) = if scale_x <= scale_y {
        (
            scale_x,
            page.width,
            (image_height * scale_x).min(page.height),
        )
    } else {
        (
            scale_y,
            (image_width * scale_y).min(page.width),
            page.height,
        )
    };

    Placement {
        scale,
        x: (page.width - width) / 2.0,
        y: (page.height - height) / 2.0,
        width,
        height,
    }
}
