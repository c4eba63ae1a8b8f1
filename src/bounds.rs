//! Content bounding-box detection
//!
//! Finds the smallest rectangle enclosing every pixel whose alpha is above a
//! threshold. With the default threshold of 0 this is every pixel that is not
//! fully transparent.

use crate::types::BoundingBox;
use image::RgbaImage;

/// Compute the bounding box of all pixels with alpha strictly greater than `alpha_threshold`
///
/// Returns `None` if no pixel qualifies, including for zero-sized images.
///
/// # Examples
/// ```rust
/// use image::{Rgba, RgbaImage};
/// use imgtrim::bounds::content_bounds;
///
/// let mut image = RgbaImage::new(4, 4);
/// image.put_pixel(1, 2, Rgba([255, 0, 0, 255]));
/// let bounds = content_bounds(&image, 0).unwrap();
/// assert_eq!((bounds.left, bounds.top, bounds.right, bounds.bottom), (1, 2, 2, 3));
/// ```
#[must_use]
pub fn content_bounds(image: &RgbaImage, alpha_threshold: u8) -> Option<BoundingBox> {
    let (width, height) = image.dimensions();

    let mut left = width;
    let mut top = height;
    let mut right = 0;
    let mut bottom = 0;

    for (x, y, pixel) in image.enumerate_pixels() {
        let [_, _, _, alpha] = pixel.0;
        if alpha > alpha_threshold {
            left = left.min(x);
            top = top.min(y);
            right = right.max(x + 1);
            bottom = bottom.max(y + 1);
        }
    }

    // right stays 0 only when nothing matched
    if right == 0 {
        return None;
    }

    Some(BoundingBox {
        left,
        top,
        right,
        bottom,
    })
}
