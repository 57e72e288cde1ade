use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::polyline::PolylineCmd;

/// Renderer-agnostic draw command stream.
///
/// Adding a shape: a module under `scene::shapes`, a variant here, and a
/// renderer under `render::shapes`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    Polyline(PolylineCmd),
}
