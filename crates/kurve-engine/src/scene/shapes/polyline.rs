use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Open polyline: consecutive points are joined by straight segments.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineCmd {
    pub points: Vec<Vec2>,
    pub width: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a polyline. Fewer than two points draws nothing and is dropped.
    pub fn push_polyline(&mut self, z: ZIndex, points: Vec<Vec2>, width: f32, color: Color) {
        if points.len() < 2 {
            return;
        }
        self.push(z, DrawCmd::Polyline(PolylineCmd { points, width, color }));
    }
}
