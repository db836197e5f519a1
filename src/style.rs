//! Named style presets
//!
//! A preset is an immutable bundle of fill kinds, colors, pattern spacings
//! and stroke widths in physical units (mm / pt). It is resolved to pixel
//! values per request, so presets are never mutated across calls.

use serde::{Deserialize, Serialize};

use crate::compositor::ResolvedStyle;
use crate::types::{Color, FillKind};
use crate::units::{mm_to_pixels, pt_to_pixels};

/// Physical-unit style bundle for a bordered card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StylePreset {
    pub name: String,
    pub outer_border_fill: Option<FillKind>,
    pub outer_border_color1: Option<Color>,
    pub outer_border_color2: Option<Color>,
    pub outer_border_pattern_spacing_mm: f64,
    pub outer_stroke_color: Option<Color>,
    pub inner_fill: Option<FillKind>,
    pub inner_fill_color1: Option<Color>,
    pub inner_fill_color2: Option<Color>,
    pub inner_fill_pattern_spacing_mm: f64,
    pub inner_stroke_color: Option<Color>,
    pub stroke_width_pt: f64,
    pub diagonal_line_width_pt: f64,
}

impl StylePreset {
    /// Style 1: diagonal red hatching in the border band, transparent
    /// inner fill with a red stroke on the inner boundary.
    pub fn style1() -> Self {
        Self {
            name: "style1".to_string(),
            outer_border_fill: Some(FillKind::Diagonal),
            outer_border_color1: Some(Color::rgb(255, 0, 0)),
            outer_border_color2: None,
            outer_border_pattern_spacing_mm: 1.0,
            outer_stroke_color: None,
            inner_fill: Some(FillKind::Solid),
            inner_fill_color1: None,
            inner_fill_color2: None,
            inner_fill_pattern_spacing_mm: 0.0,
            inner_stroke_color: Some(Color::rgb(255, 0, 0)),
            stroke_width_pt: 0.5,
            diagonal_line_width_pt: 0.5,
        }
    }

    /// Style 2: solid light-gray border band, fully transparent inner
    /// region, no strokes.
    pub fn style2() -> Self {
        Self {
            name: "style2".to_string(),
            outer_border_fill: Some(FillKind::Solid),
            outer_border_color1: Some(Color::rgb(211, 211, 211)),
            outer_border_color2: None,
            outer_border_pattern_spacing_mm: 0.0,
            outer_stroke_color: None,
            inner_fill: Some(FillKind::Solid),
            inner_fill_color1: None,
            inner_fill_color2: None,
            inner_fill_pattern_spacing_mm: 0.0,
            inner_stroke_color: None,
            stroke_width_pt: 0.5,
            diagonal_line_width_pt: 0.5,
        }
    }

    /// Look up a preset by its public identifier.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "style1" => Some(Self::style1()),
            "style2" => Some(Self::style2()),
            _ => None,
        }
    }

    /// Resolve the preset to pixel values at the given resolution.
    ///
    /// Pattern spacings keep a 1 px floor whenever the physical spacing is
    /// positive, so very low resolutions cannot collapse a pattern to zero.
    pub fn resolve(&self, dpi: u32) -> ResolvedStyle {
        let stroke_width_px = pt_to_pixels(Some(self.stroke_width_pt), dpi).max(0) as u32;
        ResolvedStyle {
            outer_border_fill: self.outer_border_fill,
            outer_border_color1: self.outer_border_color1,
            outer_border_color2: self.outer_border_color2,
            outer_border_pattern_spacing_px: spacing_px(self.outer_border_pattern_spacing_mm, dpi),
            outer_stroke_color: self.outer_stroke_color,
            outer_stroke_width_px: stroke_width_px,
            inner_fill: self.inner_fill,
            inner_fill_color1: self.inner_fill_color1,
            inner_fill_color2: self.inner_fill_color2,
            inner_fill_pattern_spacing_px: spacing_px(self.inner_fill_pattern_spacing_mm, dpi),
            inner_stroke_color: self.inner_stroke_color,
            inner_stroke_width_px: stroke_width_px,
            diagonal_line_width_px: pt_to_pixels(Some(self.diagonal_line_width_pt), dpi).max(0)
                as u32,
        }
    }
}

fn spacing_px(spacing_mm: f64, dpi: u32) -> u32 {
    let px = mm_to_pixels(Some(spacing_mm), dpi).max(0) as u32;
    if spacing_mm > 0.0 && px < 1 {
        1
    } else {
        px
    }
}
