//! Shape geometry primitives
//!
//! All shape-membership math lives here: mask building and stroke drawing
//! both go through `Shape`, so rectangle/rounded-rectangle/ellipse
//! knowledge is never duplicated in the fill or pattern code.

use image::{GrayImage, Luma, RgbaImage};

use crate::types::{Color, Rect, ShapeKind};

/// A concrete shape placed on the pixel grid
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    pub kind: ShapeKind,
    pub rect: Rect,
    pub corner_radius: f64,
}

impl Shape {
    /// Build a shape, clamping the corner radius to half of the smaller
    /// dimension. The radius only applies to rectangles; ellipses ignore it.
    pub fn new(kind: ShapeKind, rect: Rect, corner_radius: f64) -> Self {
        let max_radius = (rect.width.min(rect.height) / 2.0).max(0.0);
        let corner_radius = match kind {
            ShapeKind::Rectangle => corner_radius.clamp(0.0, max_radius),
            ShapeKind::Ellipse => 0.0,
        };
        Self { kind, rect, corner_radius }
    }

    /// Membership test for the point (px, py), typically a pixel center.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        match self.kind {
            ShapeKind::Rectangle => self.rounded_rect_contains(px, py),
            ShapeKind::Ellipse => self.ellipse_contains(px, py),
        }
    }

    fn rect_contains(&self, px: f64, py: f64) -> bool {
        px >= self.rect.x && px < self.rect.right() && py >= self.rect.y && py < self.rect.bottom()
    }

    fn rounded_rect_contains(&self, px: f64, py: f64) -> bool {
        if !self.rect_contains(px, py) {
            return false;
        }
        let r = self.corner_radius;
        if r <= 0.0 {
            return true;
        }
        // Points in an edge band are inside; only the four corner squares
        // need the circle test against their corner center.
        let cx = if px < self.rect.x + r {
            self.rect.x + r
        } else if px > self.rect.right() - r {
            self.rect.right() - r
        } else {
            return true;
        };
        let cy = if py < self.rect.y + r {
            self.rect.y + r
        } else if py > self.rect.bottom() - r {
            self.rect.bottom() - r
        } else {
            return true;
        };
        let (dx, dy) = (px - cx, py - cy);
        dx * dx + dy * dy <= r * r
    }

    fn ellipse_contains(&self, px: f64, py: f64) -> bool {
        let rx = self.rect.width / 2.0;
        let ry = self.rect.height / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let nx = (px - (self.rect.x + rx)) / rx;
        let ny = (py - (self.rect.y + ry)) / ry;
        nx * nx + ny * ny <= 1.0
    }

    /// Shrink the shape by `d` on every side, reducing the corner radius by
    /// the same amount. Returns `None` when the result has no area, which
    /// callers treat as "the outline covers the whole shape".
    pub fn inset(&self, d: f64) -> Option<Shape> {
        let rect = self.rect.expand(-d);
        if rect.is_empty() {
            return None;
        }
        Some(Shape::new(self.kind, rect, (self.corner_radius - d).max(0.0)))
    }
}

/// Intersection of a rect's pixel bounding box with an image of the given size.
fn clipped_bounds(rect: &Rect, width: u32, height: u32) -> (u32, u32, u32, u32) {
    let x0 = (rect.x.floor().max(0.0) as i64).min(width as i64) as u32;
    let y0 = (rect.y.floor().max(0.0) as i64).min(height as i64) as u32;
    let x1 = (rect.right().ceil().max(0.0) as i64).min(width as i64) as u32;
    let y1 = (rect.bottom().ceil().max(0.0) as i64).min(height as i64) as u32;
    (x0, y0, x1, y1)
}

/// Paint a shape into a single-channel mask at the given opacity value.
pub fn fill_shape(mask: &mut GrayImage, shape: &Shape, value: u8) {
    let (x0, y0, x1, y1) = clipped_bounds(&shape.rect, mask.width(), mask.height());
    for y in y0..y1 {
        for x in x0..x1 {
            if shape.contains(x as f64 + 0.5, y as f64 + 0.5) {
                mask.put_pixel(x, y, Luma([value]));
            }
        }
    }
}

/// Draw a shape outline of the given pixel width onto the canvas.
///
/// The outline runs inward from the shape boundary: a pixel is painted when
/// it is inside the shape but outside the shape inset by `width`. A
/// degenerate inset means the outline fills the whole shape.
pub fn stroke_shape(canvas: &mut RgbaImage, shape: &Shape, width: f64, color: Color) {
    if !color.is_visible() || width <= 0.0 {
        return;
    }
    let inset = shape.inset(width);
    let pixel = image::Rgba::from(color);
    let (x0, y0, x1, y1) = clipped_bounds(&shape.rect, canvas.width(), canvas.height());
    for y in y0..y1 {
        for x in x0..x1 {
            let (px, py) = (x as f64 + 0.5, y as f64 + 0.5);
            if shape.contains(px, py) && !inset.map_or(false, |s| s.contains(px, py)) {
                canvas.put_pixel(x, y, pixel);
            }
        }
    }
}
