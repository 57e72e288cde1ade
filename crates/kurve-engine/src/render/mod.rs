//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer owns its GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in logical pixels (bottom-left origin, +Y up).
//! - Vertex shaders convert to NDC using a viewport uniform.

mod ctx;
mod shader;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use shader::{create_checked_shader, ShaderDiagnostics};
