//! PNG serialization
//!
//! Uses the `png` crate directly instead of `image`'s high-level encoder
//! because the output must carry per-axis pixel density (pHYs) so viewers
//! reproduce the requested physical size.

use image::RgbaImage;

use crate::error::RendererResult;

/// Encode an RGBA canvas as PNG bytes tagged with per-axis DPI metadata.
pub fn encode_png(image: &RgbaImage, dpi: (f64, f64)) -> RendererResult<Vec<u8>> {
    let (width, height) = image.dimensions();
    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: dots_per_meter(dpi.0),
        yppu: dots_per_meter(dpi.1),
        unit: png::Unit::Meter,
    }));
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;
    Ok(out)
}

/// pHYs stores pixels per meter; DPI is pixels per 25.4 mm.
fn dots_per_meter(dpi: f64) -> u32 {
    (dpi / 0.0254).round().max(0.0) as u32
}
