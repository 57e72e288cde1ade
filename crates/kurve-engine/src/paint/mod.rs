//! Paint model shared between the demos and renderers.
//!
//! Only solid fills exist; colors are linear premultiplied alpha.

pub mod color;

pub use color::Color;
