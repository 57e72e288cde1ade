//! One-dimensional bouncing disc.

use crate::vec2::Vec2;

/// Horizontal walls in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
}

impl Bounds {
    #[inline]
    pub const fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    #[inline]
    pub fn center(&self) -> f32 {
        (self.left + self.right) * 0.5
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }
}

/// Wall hit during a step.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Bounce {
    None,
    Left,
    Right,
}

/// Disc moving along X with a fixed per-frame velocity.
///
/// After every [`step`](Self::step) the center stays within
/// `[left + radius, right - radius]`, provided the travel per frame is
/// smaller than the free span. Collisions are perfectly elastic.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimatedDisc {
    pub center: Vec2,
    pub radius: f32,
    /// Signed horizontal velocity in pixels per frame.
    pub velocity: f32,
}

impl AnimatedDisc {
    #[inline]
    pub const fn new(center: Vec2, radius: f32, velocity: f32) -> Self {
        Self { center, radius, velocity }
    }

    /// Advances one frame.
    ///
    /// Overshoot past a wall is reflected back into bounds rather than clamped
    /// to the wall, and the velocity sign flips. The right wall is checked first.
    pub fn step(&mut self, bounds: Bounds) -> Bounce {
        let mut next = self.center.x + self.velocity;
        let mut hit = Bounce::None;

        if next + self.radius > bounds.right {
            let over = next + self.radius - bounds.right;
            self.velocity = -self.velocity;
            next = bounds.right - self.radius - over;
            hit = Bounce::Right;
        } else if next - self.radius < bounds.left {
            let over = bounds.left + self.radius - next;
            self.velocity = -self.velocity;
            next = bounds.left + self.radius + over;
            hit = Bounce::Left;
        }

        self.center.x = next;
        hit
    }
}

/// Bounce demo settings.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BounceConfig {
    pub width: f32,
    pub height: f32,
    pub radius: f32,
    /// Pixels per frame; the disc starts moving right.
    pub speed: f32,
    pub line_length: f32,
    pub line_thickness: f32,
}

impl Default for BounceConfig {
    fn default() -> Self {
        let width = 600.0;
        Self {
            width,
            height: 600.0,
            radius: 50.0,
            speed: 5.0,
            line_length: width / 3.0,
            line_thickness: 3.0,
        }
    }
}

impl BounceConfig {
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(0.0, self.width)
    }

    /// Disc at the canvas center.
    pub fn initial_disc(&self) -> AnimatedDisc {
        AnimatedDisc::new(
            Vec2::new(self.width * 0.5, self.height * 0.5),
            self.radius,
            self.speed,
        )
    }
}

/// Values handed to the fragment shader each frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShaderParams {
    /// Disc center, pixels, bottom-left origin.
    pub center: Vec2,
    /// Disc radius in pixels.
    pub radius: f32,
    /// Half the bar length in NDC units.
    pub half_segment: f32,
    /// Bar thickness in pixels.
    pub line_thickness: f32,
}

impl ShaderParams {
    pub fn new(disc: &AnimatedDisc, config: &BounceConfig) -> Self {
        Self {
            center: disc.center,
            radius: disc.radius,
            // (length / 2) / (width / 2)
            half_segment: config.line_length / config.width,
            line_thickness: config.line_thickness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disc(x: f32, v: f32) -> AnimatedDisc {
        AnimatedDisc::new(Vec2::new(x, 300.0), 50.0, v)
    }

    const WALLS: Bounds = Bounds::new(0.0, 600.0);

    #[test]
    fn free_motion_is_unmodified() {
        let mut d = disc(300.0, 5.0);
        assert_eq!(d.step(WALLS), Bounce::None);
        assert_eq!(d.center.x, 305.0);
        assert_eq!(d.velocity, 5.0);
    }

    #[test]
    fn right_wall_reflects_overshoot() {
        let mut d = disc(595.0, 5.0);
        assert_eq!(d.step(WALLS), Bounce::Right);
        assert_eq!(d.velocity, -5.0);
        assert_eq!(d.center.x, 500.0);
    }

    #[test]
    fn right_wall_small_overshoot() {
        let mut d = disc(548.0, 5.0);
        d.step(WALLS);
        // 553 + 50 = 603 → over 3 → 600 - 50 - 3
        assert_eq!(d.center.x, 547.0);
        assert_eq!(d.velocity, -5.0);
    }

    #[test]
    fn left_wall_reflects_overshoot() {
        let mut d = disc(52.0, -5.0);
        assert_eq!(d.step(WALLS), Bounce::Left);
        // 47 - 50 = -3 → over 3 → 50 + 3
        assert_eq!(d.center.x, 53.0);
        assert_eq!(d.velocity, 5.0);
    }

    #[test]
    fn touching_the_wall_is_not_a_bounce() {
        let mut d = disc(545.0, 5.0);
        assert_eq!(d.step(WALLS), Bounce::None);
        assert_eq!(d.center.x, 550.0);
    }

    #[test]
    fn stays_in_bounds_over_many_frames() {
        let cfg = BounceConfig::default();
        let mut d = cfg.initial_disc();
        let half_span = cfg.bounds().width() / 2.0;
        let mut bounces = 0;

        for _ in 0..10_000 {
            if d.step(cfg.bounds()) != Bounce::None {
                bounces += 1;
                assert_eq!(d.velocity.abs(), cfg.speed);
            }
            assert!(d.center.x - d.radius >= 0.0);
            assert!(d.center.x + d.radius <= cfg.width);
            assert!((d.center.x - cfg.bounds().center()).abs() <= half_span);
            assert_eq!(d.center.y, cfg.height / 2.0);
        }
        assert!(bounces > 0);
    }

    #[test]
    fn shader_params_for_default_config() {
        let cfg = BounceConfig::default();
        let p = ShaderParams::new(&cfg.initial_disc(), &cfg);
        assert_eq!(p.center, Vec2::new(300.0, 300.0));
        assert_eq!(p.radius, 50.0);
        assert!((p.half_segment - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(p.line_thickness, 3.0);
    }
}
