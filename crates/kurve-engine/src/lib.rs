//! Kurve engine crate.
//!
//! Owns the platform + GPU runtime pieces the demo binaries are built on:
//! a single winit window, a wgpu surface, platform-agnostic input, and a
//! small draw-list renderer for discs and polylines.
//!
//! Geometry and editing rules live in `kurve-geom`; this crate only hosts them.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
