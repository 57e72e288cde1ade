pub(crate) mod circle;
pub(crate) mod polyline;

pub use circle::CircleCmd;
pub use polyline::PolylineCmd;
