//! Bordered card compositing pipeline
//!
//! ## Architecture
//!
//! `create_bordered_image` is a fixed sequence of drawing stages over one
//! freshly allocated RGBA canvas:
//!
//! 1. validate geometry (fatal on bad canvas / negative inner size)
//! 2. derive centered inner box and visibility flags
//! 3. build the border and inner opacity masks
//! 4. paint the border fill through the border mask
//! 5. paint the inner fill through the inner mask
//! 6. draw the inner stroke, centered on the inner boundary
//! 7. draw the outer stroke on the canvas bounding box
//!
//! Fills go down before strokes so an outline is never occluded by paint.
//! Pattern fills are rendered into a full-canvas transparent layer and
//! clipped by the mask, so the pattern code never needs shape math.
//! Stroke problems are logged and skipped; the image still comes back.

use image::{GrayImage, RgbaImage};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{RendererError, RendererResult};
use crate::geometry::{stroke_shape, Shape};
use crate::mask::{build_border_mask, build_inner_mask};
use crate::pattern::{draw_checkerboard, draw_diagonal_lines};
use crate::types::{is_paintable, Color, FillKind, Rect, ShapeKind};

/// Pixel geometry of one card
///
/// Dimensions are signed so that negative input (from negative physical
/// measurements upstream) reaches validation and is rejected rather than
/// silently clamped away.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CardGeometry {
    pub outer_width_px: i64,
    pub outer_height_px: i64,
    pub inner_width_px: i64,
    pub inner_height_px: i64,
    /// Corner radius of the inner shape; rectangles only.
    pub inner_corner_radius_px: i64,
    pub outer_shape: ShapeKind,
    pub inner_shape: ShapeKind,
}

/// Pixel-resolved style bundle consumed by the compositor
///
/// A fill kind of `None` (an unrecognized kind upstream) disables that
/// fill; so does an absent or alpha-0 primary color.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResolvedStyle {
    pub outer_border_fill: Option<FillKind>,
    pub outer_border_color1: Option<Color>,
    pub outer_border_color2: Option<Color>,
    pub outer_border_pattern_spacing_px: u32,
    pub outer_stroke_color: Option<Color>,
    pub outer_stroke_width_px: u32,
    pub inner_fill: Option<FillKind>,
    pub inner_fill_color1: Option<Color>,
    pub inner_fill_color2: Option<Color>,
    pub inner_fill_pattern_spacing_px: u32,
    pub inner_stroke_color: Option<Color>,
    pub inner_stroke_width_px: u32,
    pub diagonal_line_width_px: u32,
}

/// Render one bordered card image.
///
/// Returns the finished RGBA canvas, or an error on unrecoverable
/// geometry. There are no partial results: degraded stages (unknown fill,
/// degenerate stroke box) are skipped with a log line instead.
pub fn create_bordered_image(
    geometry: &CardGeometry,
    style: &ResolvedStyle,
) -> RendererResult<RgbaImage> {
    // Stage 1: validate and clamp
    if geometry.outer_width_px <= 0 || geometry.outer_height_px <= 0 {
        return Err(RendererError::InvalidGeometry(format!(
            "canvas size must be positive, got {}x{}",
            geometry.outer_width_px, geometry.outer_height_px
        )));
    }
    if geometry.inner_width_px < 0 || geometry.inner_height_px < 0 {
        return Err(RendererError::InvalidGeometry(format!(
            "inner size must not be negative, got {}x{}",
            geometry.inner_width_px, geometry.inner_height_px
        )));
    }
    let outer_w = geometry.outer_width_px as u32;
    let outer_h = geometry.outer_height_px as u32;
    let inner_w = geometry.inner_width_px as f64;
    let inner_h = geometry.inner_height_px as f64;
    let has_inner_area = geometry.inner_width_px > 0 && geometry.inner_height_px > 0;
    let corner_radius = if has_inner_area {
        (geometry.inner_corner_radius_px.max(0) as f64).min(inner_w.min(inner_h) / 2.0)
    } else {
        0.0
    };
    let outer_stroke_width = style.outer_stroke_width_px.max(1);
    let inner_stroke_width = style.inner_stroke_width_px.max(1);
    let diagonal_line_width = style.diagonal_line_width_px.max(1);

    // Stage 2: derived geometry
    let inner_x = ((outer_w as f64 - inner_w) / 2.0).round();
    let inner_y = ((outer_h as f64 - inner_h) / 2.0).round();
    let inner_rect = Rect::new(inner_x, inner_y, inner_w, inner_h);
    let has_visible_border =
        geometry.outer_width_px > geometry.inner_width_px
            || geometry.outer_height_px > geometry.inner_height_px;
    debug!(
        "compositing {}x{} canvas, inner box {}x{} at ({}, {}), radius {}",
        outer_w, outer_h, inner_w, inner_h, inner_x, inner_y, corner_radius
    );

    // Stage 3: masks
    let outer_shape = Shape::new(
        geometry.outer_shape,
        Rect::new(0.0, 0.0, outer_w as f64, outer_h as f64),
        0.0,
    );
    let inner_shape =
        has_inner_area.then(|| Shape::new(geometry.inner_shape, inner_rect, corner_radius));
    let border_mask = build_border_mask(outer_w, outer_h, &outer_shape, inner_shape.as_ref());
    let inner_mask = build_inner_mask(outer_w, outer_h, inner_shape.as_ref());

    let mut canvas = RgbaImage::new(outer_w, outer_h);

    // Stage 4: border fill
    if has_visible_border && is_paintable(style.outer_border_color1) {
        paint_fill(
            &mut canvas,
            &border_mask,
            style.outer_border_fill,
            style.outer_border_color1,
            style.outer_border_color2,
            style.outer_border_pattern_spacing_px,
            diagonal_line_width,
            "border",
        );
    }

    // Stage 5: inner fill
    if let Some(mask) = &inner_mask {
        if is_paintable(style.inner_fill_color1) {
            paint_fill(
                &mut canvas,
                mask,
                style.inner_fill,
                style.inner_fill_color1,
                style.inner_fill_color2,
                style.inner_fill_pattern_spacing_px,
                diagonal_line_width,
                "inner fill",
            );
        }
    }

    // Stage 6: inner stroke, centered on the inner boundary
    if inner_mask.is_some() {
        if let Some(color) = style.inner_stroke_color.filter(|c| c.is_visible()) {
            let half = inner_stroke_width as f64 / 2.0;
            let stroke_rect = inner_rect.expand(half);
            if stroke_rect.is_empty() {
                warn!(
                    "skipping inner stroke: degenerate stroke box {}x{}",
                    stroke_rect.width, stroke_rect.height
                );
            } else {
                let stroke_radius = match geometry.inner_shape {
                    ShapeKind::Rectangle => (corner_radius + half).max(0.0),
                    ShapeKind::Ellipse => 0.0,
                };
                let shape = Shape::new(geometry.inner_shape, stroke_rect, stroke_radius);
                stroke_shape(&mut canvas, &shape, inner_stroke_width as f64, color);
            }
        }
    }

    // Stage 7: outer stroke on the canvas bounding box, no expansion
    if let Some(color) = style.outer_stroke_color.filter(|c| c.is_visible()) {
        stroke_shape(&mut canvas, &outer_shape, outer_stroke_width as f64, color);
    }

    Ok(canvas)
}

/// Paint a solid or patterned fill onto the canvas, restricted by a mask.
fn paint_fill(
    canvas: &mut RgbaImage,
    mask: &GrayImage,
    fill: Option<FillKind>,
    color1: Option<Color>,
    color2: Option<Color>,
    pattern_spacing_px: u32,
    diagonal_line_width_px: u32,
    what: &str,
) {
    match fill {
        Some(FillKind::Solid) => {
            if let Some(color) = color1 {
                composite_solid(canvas, color, mask);
            }
        }
        Some(FillKind::Diagonal) => {
            let mut layer = RgbaImage::new(canvas.width(), canvas.height());
            draw_diagonal_lines(&mut layer, pattern_spacing_px, diagonal_line_width_px, color1, color2);
            composite_layer(canvas, &layer, mask);
        }
        Some(FillKind::Checkerboard) => {
            let mut layer = RgbaImage::new(canvas.width(), canvas.height());
            draw_checkerboard(&mut layer, pattern_spacing_px, color1, color2);
            composite_layer(canvas, &layer, mask);
        }
        None => {
            warn!("no usable fill kind for {}, skipping", what);
        }
    }
}

/// Replace canvas pixels with a uniform color wherever the mask is set.
fn composite_solid(canvas: &mut RgbaImage, color: Color, mask: &GrayImage) {
    let pixel = image::Rgba::from(color);
    for (x, y, m) in mask.enumerate_pixels() {
        if m.0[0] > 0 {
            canvas.put_pixel(x, y, pixel);
        }
    }
}

/// Replace canvas pixels with the layer's pixels wherever the mask is set.
///
/// Masks are binary, so this is a straight paste: transparent layer pixels
/// inside the mask stay transparent on the canvas (the gaps between
/// pattern lines are see-through).
fn composite_layer(canvas: &mut RgbaImage, layer: &RgbaImage, mask: &GrayImage) {
    for (x, y, m) in mask.enumerate_pixels() {
        if m.0[0] > 0 {
            canvas.put_pixel(x, y, *layer.get_pixel(x, y));
        }
    }
}
