//! Type definitions for card rendering

use log::warn;
use serde::{Deserialize, Serialize};

/// Color representation (RGBA, 8 bits per channel)
///
/// A color with alpha 0 is invisible: any drawing operation that would
/// use it is skipped instead. An absent color (`Option::None`) is treated
/// the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn is_visible(&self) -> bool {
        self.a > 0
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        image::Rgba([color.r, color.g, color.b, color.a])
    }
}

/// Returns true when the optional color would actually paint something.
pub fn is_paintable(color: Option<Color>) -> bool {
    color.map_or(false, |c| c.is_visible())
}

/// Outer/inner shape of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
}

impl ShapeKind {
    /// Parse a form-parameter value.
    ///
    /// Unrecognized values fall back to rectangle with a warning rather
    /// than failing the whole request.
    pub fn from_param(value: &str) -> Self {
        match value {
            "rectangle" => ShapeKind::Rectangle,
            "ellipse" => ShapeKind::Ellipse,
            other => {
                warn!("Unsupported shape type '{}', falling back to rectangle", other);
                ShapeKind::Rectangle
            }
        }
    }
}

/// How a region is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillKind {
    Solid,
    Diagonal,
    Checkerboard,
}

impl FillKind {
    /// Parse a host-supplied fill-kind value.
    ///
    /// The preset pipeline carries `FillKind` directly and never goes
    /// through here; this is for hosts that take fill kinds as strings.
    /// Unrecognized values suppress the fill (return `None`) with a
    /// warning instead of failing the request.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "solid" => Some(FillKind::Solid),
            "diagonal" => Some(FillKind::Diagonal),
            "checkerboard" => Some(FillKind::Checkerboard),
            other => {
                warn!("Unsupported fill type '{}', skipping this fill", other);
                None
            }
        }
    }
}

/// Rectangle with position and size, in pixel coordinates (y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Grow the rectangle by `d` on every side (negative `d` shrinks it).
    pub fn expand(&self, d: f64) -> Rect {
        Rect::new(self.x - d, self.y - d, self.width + 2.0 * d, self.height + 2.0 * d)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_zero_is_invisible() {
        assert!(!Color::rgba(255, 0, 0, 0).is_visible());
        assert!(Color::rgba(255, 0, 0, 1).is_visible());
        assert!(!is_paintable(None));
        assert!(!is_paintable(Some(Color::rgba(10, 20, 30, 0))));
        assert!(is_paintable(Some(Color::rgb(10, 20, 30))));
    }

    #[test]
    fn test_shape_kind_fallback() {
        assert_eq!(ShapeKind::from_param("rectangle"), ShapeKind::Rectangle);
        assert_eq!(ShapeKind::from_param("ellipse"), ShapeKind::Ellipse);
        // Unknown kinds never fail; they degrade to rectangle
        assert_eq!(ShapeKind::from_param("triangle"), ShapeKind::Rectangle);
        assert_eq!(ShapeKind::from_param(""), ShapeKind::Rectangle);
    }

    #[test]
    fn test_fill_kind_fallback() {
        assert_eq!(FillKind::from_param("solid"), Some(FillKind::Solid));
        assert_eq!(FillKind::from_param("diagonal"), Some(FillKind::Diagonal));
        assert_eq!(FillKind::from_param("checkerboard"), Some(FillKind::Checkerboard));
        assert_eq!(FillKind::from_param("plaid"), None);
    }

    #[test]
    fn test_rect_expand() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0).expand(1.5);
        assert_eq!(r.x, 8.5);
        assert_eq!(r.y, 18.5);
        assert_eq!(r.width, 33.0);
        assert_eq!(r.height, 43.0);
        assert!(!r.is_empty());
        assert!(Rect::new(0.0, 0.0, 5.0, 5.0).expand(-2.5).is_empty());
    }
}
