//! Bordered card image renderer
//!
//! Renders parametric "bordered card" rasters: a rectangular or elliptical
//! outer shape with a centered, optionally rounded inner shape, each
//! filled with a solid color or a repeating pattern and optionally
//! outlined. Input arrives in physical units (millimeters, points, DPI);
//! output is an RGBA canvas or PNG bytes carrying pixel-density metadata.
//!
//! ## Pipeline
//!
//! ```text
//! physical units -> units -> pixel geometry -> compositor -> RGBA canvas -> encode -> PNG
//!                                                 |
//!                          mask (shape clipping) + pattern (hatching/checkerboard)
//! ```
//!
//! The adapter module ties the stages together for a host service; the
//! compositor is the synchronous, allocation-per-call core with no shared
//! state between invocations.

pub mod adapter;
pub mod compositor;
pub mod encode;
pub mod error;
pub mod geometry;
pub mod mask;
pub mod pattern;
pub mod style;
pub mod types;
pub mod units;

pub use adapter::{render_card_png, RenderRequest};
pub use compositor::{create_bordered_image, CardGeometry, ResolvedStyle};
pub use error::{RendererError, RendererResult};
pub use style::StylePreset;
pub use types::{Color, FillKind, ShapeKind};
