//! Physical-unit to pixel conversion
//!
//! All downstream geometry is integer pixels; these helpers are the only
//! place millimeters and points are interpreted. Invalid input degrades to
//! a safe fallback value with an error log instead of aborting generation.

use log::error;

pub const MM_PER_INCH: f64 = 25.4;
pub const PT_PER_INCH: f64 = 72.0;

/// Convert millimeters to pixels at the given resolution: `round(mm / 25.4 * dpi)`.
///
/// Absent input converts to 0 silently; a non-finite value converts to 0
/// with an error log. Negative input yields a negative pixel count on
/// purpose: the compositor rejects negative geometry, and clamping here
/// would hide that error from the caller.
pub fn mm_to_pixels(mm: Option<f64>, dpi: u32) -> i64 {
    let mm = match mm {
        Some(value) => value,
        None => return 0,
    };
    if !mm.is_finite() {
        error!("Cannot interpret millimeter value {:?} as a number, using 0", mm);
        return 0;
    }
    (mm / MM_PER_INCH * dpi as f64).round() as i64
}

/// Convert points to pixels at the given resolution: `ceil(pt / 72 * dpi)`,
/// floored to a minimum of 1.
///
/// Absent input converts to 0 silently; a non-finite value converts to the
/// 1-pixel minimum with an error log.
pub fn pt_to_pixels(pt: Option<f64>, dpi: u32) -> i64 {
    let pt = match pt {
        Some(value) => value,
        None => return 0,
    };
    if !pt.is_finite() {
        error!("Cannot interpret point value {:?} as a number, using 1", pt);
        return 1;
    }
    ((pt / PT_PER_INCH * dpi as f64).ceil() as i64).max(1)
}
