//! Shape renderers.

mod common;

pub mod circle;
pub mod polyline;

pub use circle::CircleRenderer;
pub use polyline::PolylineRenderer;
