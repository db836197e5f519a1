//! Pattern rasterization
//!
//! Both patterns draw into a caller-supplied rectangular RGBA layer and
//! know nothing about shapes; the compositor clips them to shape
//! boundaries afterwards with an opacity mask.

use image::RgbaImage;

use crate::types::Color;

/// Fill the layer with a family of parallel 45° lines.
///
/// Lines are `line_width_px` wide (clamped to at least 1) and spaced
/// `spacing_px` apart (clamped to at least the line width), covering the
/// layer's full negative-to-positive diagonal extent. Width and spacing
/// are measured along the x axis, so the perpendicular thickness of a
/// band is `line_width_px / sqrt(2)`. Only `color1` paints, and only when
/// visible; `color2` is accepted but unused because the diagonal fill is
/// single-color by design.
pub fn draw_diagonal_lines(
    layer: &mut RgbaImage,
    spacing_px: u32,
    line_width_px: u32,
    color1: Option<Color>,
    _color2: Option<Color>,
) {
    let (width, height) = layer.dimensions();
    if width == 0 || height == 0 {
        return;
    }
    let color = match color1.filter(|c| c.is_visible()) {
        Some(c) => c,
        None => return,
    };
    let line_width = line_width_px.max(1) as i64;
    let spacing = (spacing_px as i64).max(line_width);
    let pixel = image::Rgba::from(color);
    // Pixels on the same down-right diagonal share x - y; a band test per
    // pixel draws every line in one pass regardless of layer size.
    for y in 0..height {
        for x in 0..width {
            if (x as i64 - y as i64).rem_euclid(spacing) < line_width {
                layer.put_pixel(x, y, pixel);
            }
        }
    }
}

/// Fill the layer with a checkerboard of `check_size_px` squares.
///
/// The tile at grid cell (row, col) uses `color1` when `row + col` is
/// even, otherwise `color2`; invisible colors leave their tiles
/// untouched. Edge tiles clip to the layer boundary.
pub fn draw_checkerboard(
    layer: &mut RgbaImage,
    check_size_px: u32,
    color1: Option<Color>,
    color2: Option<Color>,
) {
    let (width, height) = layer.dimensions();
    if width == 0 || height == 0 {
        return;
    }
    let check = check_size_px.max(1);
    for (row, y0) in (0..height).step_by(check as usize).enumerate() {
        for (col, x0) in (0..width).step_by(check as usize).enumerate() {
            let tile_color = if (row + col) % 2 == 0 { color1 } else { color2 };
            let color = match tile_color.filter(|c| c.is_visible()) {
                Some(c) => c,
                None => continue,
            };
            let pixel = image::Rgba::from(color);
            for y in y0..(y0 + check).min(height) {
                for x in x0..(x0 + check).min(width) {
                    layer.put_pixel(x, y, pixel);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };
    const BLUE: Color = Color { r: 0, g: 0, b: 255, a: 255 };

    #[test]
    fn test_diagonal_band_layout() {
        let mut layer = RgbaImage::new(8, 8);
        draw_diagonal_lines(&mut layer, 4, 1, Some(RED), None);
        // x - y ≡ 0 (mod 4) pixels are on a line
        assert_eq!(layer.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(layer.get_pixel(4, 0).0, [255, 0, 0, 255]);
        assert_eq!(layer.get_pixel(5, 1).0, [255, 0, 0, 255]);
        assert_eq!(layer.get_pixel(0, 4).0, [255, 0, 0, 255]);
        // Between-line pixels stay transparent
        assert_eq!(layer.get_pixel(1, 0).0, [0, 0, 0, 0]);
        assert_eq!(layer.get_pixel(2, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_diagonal_covers_every_diagonal_at_width_equals_spacing() {
        let mut layer = RgbaImage::new(6, 6);
        draw_diagonal_lines(&mut layer, 1, 3, Some(RED), None);
        // Spacing is clamped up to the line width, so everything paints
        assert!(layer.pixels().all(|p| p.0 == [255, 0, 0, 255]));
    }

    #[test]
    fn test_diagonal_invisible_color_is_noop() {
        let mut layer = RgbaImage::new(8, 8);
        draw_diagonal_lines(&mut layer, 4, 1, Some(Color::rgba(255, 0, 0, 0)), None);
        assert!(layer.pixels().all(|p| p.0 == [0, 0, 0, 0]));
        draw_diagonal_lines(&mut layer, 4, 1, None, Some(BLUE));
        assert!(layer.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn test_checkerboard_parity() {
        let mut layer = RgbaImage::new(8, 8);
        draw_checkerboard(&mut layer, 4, Some(RED), Some(BLUE));
        assert_eq!(layer.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(layer.get_pixel(3, 3).0, [255, 0, 0, 255]);
        assert_eq!(layer.get_pixel(4, 0).0, [0, 0, 255, 255]);
        assert_eq!(layer.get_pixel(0, 4).0, [0, 0, 255, 255]);
        assert_eq!(layer.get_pixel(4, 4).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_checkerboard_clips_last_tiles() {
        // 10 wide with 4px checks leaves a clipped 2px column
        let mut layer = RgbaImage::new(10, 4);
        draw_checkerboard(&mut layer, 4, Some(RED), Some(BLUE));
        assert_eq!(layer.get_pixel(8, 0).0, [255, 0, 0, 255]);
        assert_eq!(layer.get_pixel(9, 3).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_checkerboard_transparent_squares_untouched() {
        let mut layer = RgbaImage::new(8, 8);
        draw_checkerboard(&mut layer, 4, Some(RED), None);
        assert_eq!(layer.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(layer.get_pixel(4, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_zero_size_check_clamped() {
        let mut layer = RgbaImage::new(4, 4);
        draw_checkerboard(&mut layer, 0, Some(RED), Some(BLUE));
        // 1px checks: plain parity per pixel
        assert_eq!(layer.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(layer.get_pixel(1, 0).0, [0, 0, 255, 255]);
    }
}
