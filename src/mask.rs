//! Opacity mask construction
//!
//! Masks are single-channel bitmaps (0 = excluded, 255 = included) at
//! canvas resolution. The border mask is the outer shape with the inner
//! shape carved out; the inner mask is the inner shape alone, and is
//! absent entirely when the inner shape has no area.

use image::GrayImage;

use crate::geometry::{fill_shape, Shape};

/// Build the border mask: outer shape at full opacity, inner shape (when
/// present) painted back to zero over it.
pub fn build_border_mask(
    width: u32,
    height: u32,
    outer: &Shape,
    inner: Option<&Shape>,
) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    fill_shape(&mut mask, outer, 255);
    if let Some(inner) = inner {
        fill_shape(&mut mask, inner, 0);
    }
    mask
}

/// Build the inner mask, or `None` when there is no inner shape; callers
/// skip all inner-dependent drawing in that case.
pub fn build_inner_mask(width: u32, height: u32, inner: Option<&Shape>) -> Option<GrayImage> {
    let inner = inner?;
    let mut mask = GrayImage::new(width, height);
    fill_shape(&mut mask, inner, 255);
    Some(mask)
}
