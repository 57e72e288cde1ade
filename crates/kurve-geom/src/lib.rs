//! Geometry and editing core for the **kurve** demos.
//!
//! No dependencies; everything here runs without a window or a GPU.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`vec2`] | `Vec2` |
//! | [`bezier`] | `de_casteljau`, `CurveSampler`, `sample_curve` |
//! | [`editor`] | `ControlPointSet`, `CurveEditor`, `PointerHandler` |
//! | [`bounce`] | `AnimatedDisc`, `Bounds`, `BounceConfig`, `ShaderParams` |
//!
//! # Quick start
//!
//! ```rust
//! use kurve_geom::{de_casteljau, Vec2};
//!
//! let pts = [Vec2::new(0.0, 0.0), Vec2::new(50.0, 100.0), Vec2::new(100.0, 0.0)];
//! assert_eq!(de_casteljau(&pts, 0.5), Some(Vec2::new(50.0, 50.0)));
//! ```
//!
//! Coordinates are pixels with a bottom-left origin unless stated otherwise.
//! Pointer input arrives top-left and is flipped by [`CurveEditor`].

pub mod bezier;
pub mod bounce;
pub mod editor;
pub mod vec2;

pub use bezier::{de_casteljau, sample_curve, CurveSampler};
pub use bounce::{AnimatedDisc, Bounce, BounceConfig, Bounds, ShaderParams};
pub use editor::{
    ControlPointSet, CurveEditor, EditOutcome, EditorConfig, PointerButton, PointerHandler,
};
pub use vec2::Vec2;
