//! Time subsystem.
//!
//! One `FrameClock` per window; the runtime calls `tick()` once per redraw and
//! hands the resulting `FrameTime` to the app.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
