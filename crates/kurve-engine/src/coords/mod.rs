//! Coordinate types shared by renderers and the demo binaries.
//!
//! Canonical CPU drawing space:
//! - Logical pixels (DPI-aware)
//! - Origin bottom-left
//! - +X right, +Y up
//!
//! Platform pointer input is top-left origin; the curve editor flips it
//! before comparing against drawn geometry.
//! Renderers convert to NDC in shaders using a viewport uniform.

mod viewport;

pub use kurve_geom::Vec2;
pub use viewport::Viewport;
