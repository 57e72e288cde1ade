//! Bézier curve evaluation.
//!
//! Curves are evaluated with De Casteljau's algorithm: repeated linear
//! interpolation between neighbouring control points until one point is left.
//! Unlike summing Bernstein polynomials directly, this never forms binomial
//! coefficients, so it stays stable for long control polygons.

use crate::vec2::Vec2;

/// Evaluates the Bézier curve defined by `points` at parameter `t`.
///
/// - empty input → `None`
/// - one point → that point, for every `t`
/// - otherwise `n - 1` interpolation passes over a scratch copy
///
/// `points` is never modified. `t` is expected in `[0, 1]` but is not clamped.
pub fn de_casteljau(points: &[Vec2], t: f32) -> Option<Vec2> {
    let (&first, _) = points.split_first()?;
    if points.len() == 1 {
        return Some(first);
    }

    let mut work = points.to_vec();
    let n = work.len();
    for pass in 1..n {
        for i in 0..n - pass {
            work[i] = Vec2::lerp(work[i], work[i + 1], t);
        }
    }
    Some(work[0])
}

/// Parameter stepping used to approximate a curve by a polyline.
///
/// Produces `t = 0, 1/k, 2/k, …, 1` with `k = round(1 / step)`. Deriving each
/// `t` from an integer index keeps the final sample exactly at `t = 1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CurveSampler {
    step: f32,
}

impl CurveSampler {
    pub const DEFAULT_STEP: f32 = 0.01;

    /// Creates a sampler. Non-finite or non-positive steps fall back to
    /// [`Self::DEFAULT_STEP`]; steps above 1 are treated as 1.
    pub fn new(step: f32) -> Self {
        let step = if step.is_finite() && step > 0.0 {
            step.min(1.0)
        } else {
            Self::DEFAULT_STEP
        };
        Self { step }
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Number of segments between `t = 0` and `t = 1`.
    #[inline]
    pub fn segments(&self) -> usize {
        ((1.0 / self.step).round() as usize).max(1)
    }

    /// Parameter values, both ends inclusive.
    pub fn params(&self) -> impl Iterator<Item = f32> {
        let k = self.segments();
        (0..=k).map(move |i| i as f32 / k as f32)
    }
}

impl Default for CurveSampler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}

/// Samples the curve into an ordered polyline.
///
/// Returns an empty vector for fewer than two control points; a single point
/// has no curve to draw.
pub fn sample_curve(points: &[Vec2], sampler: CurveSampler) -> Vec<Vec2> {
    if points.len() < 2 {
        return Vec::new();
    }
    sampler
        .params()
        .filter_map(|t| de_casteljau(points, t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    fn polygon() -> Vec<Vec2> {
        vec![
            Vec2::new(12.0, 40.0),
            Vec2::new(80.0, 310.0),
            Vec2::new(240.0, -20.0),
            Vec2::new(410.0, 190.0),
            Vec2::new(530.0, 75.0),
        ]
    }

    // ── de_casteljau ──────────────────────────────────────────────────────

    #[test]
    fn empty_input_has_no_point() {
        assert_eq!(de_casteljau(&[], 0.3), None);
    }

    #[test]
    fn single_point_is_constant() {
        let p = Vec2::new(7.0, -3.0);
        for t in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(de_casteljau(&[p], t), Some(p));
        }
    }

    #[test]
    fn endpoints_are_interpolated() {
        let pts = polygon();
        assert_eq!(de_casteljau(&pts, 0.0), Some(pts[0]));
        assert_eq!(de_casteljau(&pts, 1.0), Some(pts[pts.len() - 1]));
    }

    #[test]
    fn linear_midpoint() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)];
        assert_eq!(de_casteljau(&pts, 0.5), Some(Vec2::new(50.0, 0.0)));
    }

    #[test]
    fn quadratic_midpoint() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(50.0, 100.0), Vec2::new(100.0, 0.0)];
        assert_eq!(de_casteljau(&pts, 0.5), Some(Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn input_is_untouched() {
        let pts = polygon();
        let before = pts.clone();
        let _ = de_casteljau(&pts, 0.42);
        assert_eq!(pts, before);
    }

    #[test]
    fn affine_invariance() {
        // Rotate by ~30°, scale, and translate.
        let (s, c) = (0.5f32, 0.866_025_4f32);
        let map = |p: Vec2| {
            Vec2::new(1.5 * (c * p.x - s * p.y) + 20.0, 1.5 * (s * p.x + c * p.y) - 35.0)
        };

        let pts = polygon();
        let mapped: Vec<Vec2> = pts.iter().copied().map(map).collect();

        for t in [0.0, 0.1, 0.37, 0.5, 0.8, 1.0] {
            let a = de_casteljau(&mapped, t).unwrap();
            let b = map(de_casteljau(&pts, t).unwrap());
            assert!(close(a, b), "t={t}: {a:?} vs {b:?}");
        }
    }

    // ── sampling ──────────────────────────────────────────────────────────

    #[test]
    fn default_sampler_covers_both_ends() {
        let params: Vec<f32> = CurveSampler::default().params().collect();
        assert_eq!(params.len(), 101);
        assert_eq!(params[0], 0.0);
        assert_eq!(params[100], 1.0);
    }

    #[test]
    fn invalid_step_falls_back() {
        assert_eq!(CurveSampler::new(0.0).step(), CurveSampler::DEFAULT_STEP);
        assert_eq!(CurveSampler::new(-1.0).step(), CurveSampler::DEFAULT_STEP);
        assert_eq!(CurveSampler::new(f32::NAN).step(), CurveSampler::DEFAULT_STEP);
        assert_eq!(CurveSampler::new(4.0).segments(), 1);
    }

    #[test]
    fn curve_needs_two_points() {
        assert!(sample_curve(&[], CurveSampler::default()).is_empty());
        assert!(sample_curve(&[Vec2::new(1.0, 1.0)], CurveSampler::default()).is_empty());
    }

    #[test]
    fn sampled_curve_starts_and_ends_on_endpoints() {
        let pts = polygon();
        let line = sample_curve(&pts, CurveSampler::new(0.05));
        assert_eq!(line.len(), 21);
        assert_eq!(line[0], pts[0]);
        assert_eq!(line[20], pts[4]);
    }
}
