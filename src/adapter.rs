//! Request adapter boundary
//!
//! Converts physical-unit form input (millimeters, points, DPI) into the
//! compositor's pixel parameter set, runs the pipeline, and serializes the
//! result as a PNG byte stream with DPI-adjusted save metadata. This is
//! the crate's outermost surface; HTTP routing and form decoding live in
//! the host.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::compositor::{create_bordered_image, CardGeometry};
use crate::encode::encode_png;
use crate::error::{RendererError, RendererResult};
use crate::style::StylePreset;
use crate::types::ShapeKind;
use crate::units::{mm_to_pixels, MM_PER_INCH};

/// Physical-unit parameters of one render request
///
/// Field names and defaults match the original card-generator form: a
/// 60x92 mm rectangle with a 54x86 mm rounded-rectangle inner box at
/// 300 DPI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderRequest {
    pub dpi: u32,
    pub outer_width_mm: f64,
    pub outer_height_mm: f64,
    pub outer_shape_type: String,
    pub inner_width_mm: f64,
    pub inner_height_mm: f64,
    pub inner_shape_type: String,
    pub inner_corner_radius_mm: f64,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            dpi: 300,
            outer_width_mm: 60.0,
            outer_height_mm: 92.0,
            outer_shape_type: "rectangle".to_string(),
            inner_width_mm: 54.0,
            inner_height_mm: 86.0,
            inner_shape_type: "rectangle".to_string(),
            inner_corner_radius_mm: 3.18,
        }
    }
}

impl RenderRequest {
    /// Parse a request from a JSON document; absent fields take the form
    /// defaults.
    pub fn from_json(json: &str) -> RendererResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Enforce the form's input ranges before any conversion happens.
    pub fn validate(&self) -> RendererResult<()> {
        if !(72..=1200).contains(&self.dpi) {
            return Err(RendererError::InvalidValue(
                "dpi".to_string(),
                format!("must be between 72 and 1200, got {}", self.dpi),
            ));
        }
        check_dimension("outer_width_mm", self.outer_width_mm, true)?;
        check_dimension("outer_height_mm", self.outer_height_mm, true)?;
        check_dimension("inner_width_mm", self.inner_width_mm, false)?;
        check_dimension("inner_height_mm", self.inner_height_mm, false)?;
        check_dimension("inner_corner_radius_mm", self.inner_corner_radius_mm, false)?;
        Ok(())
    }
}

fn check_dimension(field: &str, value: f64, strictly_positive: bool) -> RendererResult<()> {
    if !value.is_finite() {
        return Err(RendererError::InvalidValue(
            field.to_string(),
            format!("must be a finite number, got {}", value),
        ));
    }
    if strictly_positive && value <= 0.0 {
        return Err(RendererError::InvalidValue(
            field.to_string(),
            format!("must be > 0, got {}", value),
        ));
    }
    if !strictly_positive && value < 0.0 {
        return Err(RendererError::InvalidValue(
            field.to_string(),
            format!("must be >= 0, got {}", value),
        ));
    }
    Ok(())
}

/// Render one card with the given style preset and return encoded PNG
/// bytes.
///
/// The PNG is tagged with per-axis DPI recomputed from the integer pixel
/// size (`px * 25.4 / mm`), falling back to the requested DPI when a
/// physical dimension is zero, so the saved image prints at exactly the
/// requested physical size.
pub fn render_card_png(style: &StylePreset, request: &RenderRequest) -> RendererResult<Vec<u8>> {
    request.validate()?;
    let dpi = request.dpi;

    let outer_shape = ShapeKind::from_param(&request.outer_shape_type);
    let inner_shape = ShapeKind::from_param(&request.inner_shape_type);

    let outer_width_px = mm_to_pixels(Some(request.outer_width_mm), dpi);
    let outer_height_px = mm_to_pixels(Some(request.outer_height_mm), dpi);
    let inner_width_px = mm_to_pixels(Some(request.inner_width_mm), dpi);
    let inner_height_px = mm_to_pixels(Some(request.inner_height_mm), dpi);
    // The corner radius only applies to a rectangular inner shape
    let inner_corner_radius_px = match inner_shape {
        ShapeKind::Rectangle => mm_to_pixels(Some(request.inner_corner_radius_mm), dpi),
        ShapeKind::Ellipse => 0,
    };
    debug!(
        "computed pixels: outer={}x{}, inner={}x{}, radius={}",
        outer_width_px, outer_height_px, inner_width_px, inner_height_px, inner_corner_radius_px
    );

    // Recompute per-axis DPI from the rounded pixel dimensions so the
    // saved physical size matches the request exactly
    let adjusted_dpi_w = if request.outer_width_mm > 0.0 {
        outer_width_px as f64 * MM_PER_INCH / request.outer_width_mm
    } else {
        dpi as f64
    };
    let adjusted_dpi_h = if request.outer_height_mm > 0.0 {
        outer_height_px as f64 * MM_PER_INCH / request.outer_height_mm
    } else {
        dpi as f64
    };

    let geometry = CardGeometry {
        outer_width_px,
        outer_height_px,
        inner_width_px,
        inner_height_px,
        inner_corner_radius_px,
        outer_shape,
        inner_shape,
    };
    let resolved = style.resolve(dpi);
    let image = create_bordered_image(&geometry, &resolved)?;
    let bytes = encode_png(&image, (adjusted_dpi_w, adjusted_dpi_h))?;
    info!(
        "generated {} image: {}x{} px, {} bytes, save DPI ({:.2}, {:.2})",
        style.name,
        image.width(),
        image.height(),
        bytes.len(),
        adjusted_dpi_w,
        adjusted_dpi_h
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let request = RenderRequest::from_json("{}").expect("parse");
        assert_eq!(request.dpi, 300);
        assert_eq!(request.outer_width_mm, 60.0);
        assert_eq!(request.outer_height_mm, 92.0);
        assert_eq!(request.inner_corner_radius_mm, 3.18);
        assert_eq!(request.outer_shape_type, "rectangle");
        request.validate().expect("defaults are valid");
    }

    #[test]
    fn test_validate_rejects_out_of_range_dpi() {
        let mut request = RenderRequest::default();
        request.dpi = 71;
        assert!(request.validate().is_err());
        request.dpi = 1201;
        assert!(request.validate().is_err());
        request.dpi = 72;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_dimensions() {
        let mut request = RenderRequest::default();
        request.outer_width_mm = 0.0;
        assert!(request.validate().is_err());

        let mut request = RenderRequest::default();
        request.inner_height_mm = -1.0;
        let err = request.validate().expect_err("negative inner height");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_invalid_json_is_a_client_error() {
        let err = RenderRequest::from_json("{not json").expect_err("parse failure");
        assert!(matches!(err, RendererError::JsonError(_)));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_style1_default_request_dimensions() {
        // 60x92 mm at 300 DPI comes out at 709x1087 px
        let bytes =
            render_card_png(&StylePreset::style1(), &RenderRequest::default()).expect("png");
        let image = image::load_from_memory(&bytes).expect("decode").to_rgba8();
        assert_eq!(image.dimensions(), (709, 1087));
    }

    #[test]
    fn test_style2_border_band_and_transparent_inner() {
        let request = RenderRequest {
            inner_width_mm: 0.0,
            inner_height_mm: 0.0,
            ..RenderRequest::default()
        };
        let bytes = render_card_png(&StylePreset::style2(), &request).expect("png");
        let image = image::load_from_memory(&bytes).expect("decode").to_rgba8();
        // No inner shape: the whole canvas is the solid border color
        assert!(image.pixels().all(|p| p.0 == [211, 211, 211, 255]));

        let bytes =
            render_card_png(&StylePreset::style2(), &RenderRequest::default()).expect("png");
        let image = image::load_from_memory(&bytes).expect("decode").to_rgba8();
        assert_eq!(image.get_pixel(0, 0).0, [211, 211, 211, 255]);
        assert_eq!(image.get_pixel(354, 543).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_unknown_shape_kind_still_renders() {
        let request = RenderRequest {
            outer_shape_type: "triangle".to_string(),
            inner_shape_type: "hexagon".to_string(),
            ..RenderRequest::default()
        };
        let bytes = render_card_png(&StylePreset::style2(), &request).expect("png");
        let image = image::load_from_memory(&bytes).expect("decode").to_rgba8();
        // Falls back to rectangle behavior: square corners are painted
        assert_eq!(image.get_pixel(0, 0).0, [211, 211, 211, 255]);
    }

    #[test]
    fn test_ellipse_inner_ignores_corner_radius() {
        let request = RenderRequest {
            inner_shape_type: "ellipse".to_string(),
            inner_corner_radius_mm: 50.0,
            ..RenderRequest::default()
        };
        render_card_png(&StylePreset::style1(), &request).expect("png");
    }

    #[test]
    fn test_adjusted_dpi_in_phys_chunk() {
        // 709 px over 60 mm: round(709 * 25.4 / 60 / 0.0254) = 11817 dots/m
        let bytes =
            render_card_png(&StylePreset::style2(), &RenderRequest::default()).expect("png");
        let phys_pos = bytes
            .windows(4)
            .position(|w| w == b"pHYs")
            .expect("pHYs chunk present");
        let data = &bytes[phys_pos + 4..phys_pos + 13];
        let xppu = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
        let yppu = u32::from_be_bytes([data[4], data[5], data[6], data[7]]);
        assert_eq!(xppu, 11817);
        assert_eq!(yppu, 11815);
    }
}
