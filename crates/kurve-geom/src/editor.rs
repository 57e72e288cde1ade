//! Interactive control-point editing.
//!
//! [`ControlPointSet`] is the ordered point list; [`CurveEditor`] is the
//! editing session that turns pointer events into edits on that list.

use crate::bezier::{sample_curve, CurveSampler};
use crate::vec2::Vec2;

/// Ordered control points. Order defines the curve's basis, so it is never
/// rearranged; points are addressed only by their current index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPointSet {
    points: Vec<Vec2>,
}

impl ControlPointSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point and returns its index.
    pub fn push(&mut self, p: Vec2) -> usize {
        self.points.push(p);
        self.points.len() - 1
    }

    /// Removes the point at `index`; later points shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<Vec2> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }

    /// Replaces the point at `index` in place. Returns `false` when out of range.
    pub fn replace(&mut self, index: usize, p: Vec2) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = p;
                true
            }
            None => false,
        }
    }

    /// Index of the first point within `radius` of `pos`, in sequence order.
    pub fn hit_test(&self, pos: Vec2, radius: f32) -> Option<usize> {
        let r2 = radius * radius;
        self.points.iter().position(|p| p.distance_squared(pos) <= r2)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }
}

/// Pointer button as seen by the editor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

/// What a pointer event did to the editor state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EditOutcome {
    Added(usize),
    Selected(usize),
    Moved(usize),
    Removed(usize),
    Released,
    Ignored,
}

/// Pointer callbacks invoked by the windowing layer.
///
/// Positions are window pixels, top-left origin.
pub trait PointerHandler {
    fn press(&mut self, button: PointerButton, window_pos: Vec2) -> EditOutcome;
    fn release(&mut self, button: PointerButton, window_pos: Vec2) -> EditOutcome;
    fn moved(&mut self, window_pos: Vec2) -> EditOutcome;
}

/// Editor tuning.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EditorConfig {
    /// Drawn diameter of a control point in pixels; also the pick size.
    pub point_diameter: f32,
    /// Parameter step used when sampling the curve for drawing.
    pub sample_step: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            point_diameter: 7.0,
            sample_step: CurveSampler::DEFAULT_STEP,
        }
    }
}

impl EditorConfig {
    #[inline]
    pub fn pick_radius(&self) -> f32 {
        self.point_diameter * 0.5
    }
}

/// Editing session: the point set plus drag state.
///
/// Stored points use a bottom-left origin. Incoming pointer positions are
/// flipped with the current canvas height before any comparison or storage.
/// Neither new nor dragged points are clamped to the canvas.
#[derive(Debug, Clone)]
pub struct CurveEditor {
    config: EditorConfig,
    points: ControlPointSet,
    selected: Option<usize>,
    canvas_height: f32,
}

impl CurveEditor {
    pub fn new(config: EditorConfig, canvas_height: f32) -> Self {
        Self {
            config,
            points: ControlPointSet::new(),
            selected: None,
            canvas_height,
        }
    }

    #[inline]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[inline]
    pub fn points(&self) -> &ControlPointSet {
        &self.points
    }

    /// Index of the point being dragged, if any.
    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.selected.is_some()
    }

    /// Keeps the Y flip in sync with the window's logical height.
    pub fn set_canvas_height(&mut self, height: f32) {
        self.canvas_height = height;
    }

    /// Converts a top-left window position to canvas space.
    #[inline]
    pub fn to_canvas(&self, window_pos: Vec2) -> Vec2 {
        Vec2::new(window_pos.x, self.canvas_height - window_pos.y)
    }

    /// Removes every point and ends any drag.
    pub fn clear(&mut self) {
        self.points.clear();
        self.selected = None;
    }

    /// Polyline approximation of the current curve.
    pub fn curve(&self) -> Vec<Vec2> {
        sample_curve(self.points.as_slice(), CurveSampler::new(self.config.sample_step))
    }
}

impl PointerHandler for CurveEditor {
    fn press(&mut self, button: PointerButton, window_pos: Vec2) -> EditOutcome {
        let pos = self.to_canvas(window_pos);
        let hit = self.points.hit_test(pos, self.config.pick_radius());

        match button {
            PointerButton::Primary => match hit {
                Some(i) => {
                    self.selected = Some(i);
                    EditOutcome::Selected(i)
                }
                None => EditOutcome::Added(self.points.push(pos)),
            },
            PointerButton::Secondary => match hit {
                Some(i) => {
                    self.points.remove(i);
                    // The drag target may have shifted or vanished.
                    self.selected = match self.selected {
                        Some(s) if s == i => None,
                        Some(s) if s > i => Some(s - 1),
                        other => other,
                    };
                    EditOutcome::Removed(i)
                }
                None => EditOutcome::Ignored,
            },
            PointerButton::Other => EditOutcome::Ignored,
        }
    }

    fn release(&mut self, button: PointerButton, _window_pos: Vec2) -> EditOutcome {
        if button != PointerButton::Primary {
            return EditOutcome::Ignored;
        }
        self.selected = None;
        EditOutcome::Released
    }

    fn moved(&mut self, window_pos: Vec2) -> EditOutcome {
        let Some(i) = self.selected else {
            return EditOutcome::Ignored;
        };
        let pos = self.to_canvas(window_pos);
        if self.points.replace(i, pos) {
            EditOutcome::Moved(i)
        } else {
            self.selected = None;
            EditOutcome::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f32 = 600.0;

    fn editor() -> CurveEditor {
        CurveEditor::new(EditorConfig::default(), H)
    }

    /// Press + release with the primary button at a top-left window position.
    fn click(ed: &mut CurveEditor, x: f32, y: f32) -> EditOutcome {
        let out = ed.press(PointerButton::Primary, Vec2::new(x, y));
        ed.release(PointerButton::Primary, Vec2::new(x, y));
        out
    }

    // ── ControlPointSet ───────────────────────────────────────────────────

    #[test]
    fn hit_test_picks_first_in_order() {
        let mut set = ControlPointSet::new();
        set.push(Vec2::new(10.0, 10.0));
        set.push(Vec2::new(11.0, 10.0));
        assert_eq!(set.hit_test(Vec2::new(10.6, 10.0), 3.5), Some(0));
    }

    #[test]
    fn hit_test_boundary_is_inclusive() {
        let mut set = ControlPointSet::new();
        set.push(Vec2::new(0.0, 0.0));
        assert_eq!(set.hit_test(Vec2::new(3.0, 4.0), 5.0), Some(0));
        assert_eq!(set.hit_test(Vec2::new(3.0, 4.1), 5.0), None);
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let mut set = ControlPointSet::new();
        set.push(Vec2::new(1.0, 2.0));
        assert_eq!(set.remove(3), None);
        assert_eq!(set.len(), 1);
        assert!(!set.replace(1, Vec2::zero()));
    }

    // ── CurveEditor ───────────────────────────────────────────────────────

    #[test]
    fn press_on_empty_canvas_adds_flipped_point() {
        let mut ed = editor();
        assert_eq!(click(&mut ed, 10.0, 10.0), EditOutcome::Added(0));
        assert_eq!(ed.points().as_slice(), &[Vec2::new(10.0, H - 10.0)]);
    }

    #[test]
    fn press_away_from_points_appends() {
        let mut ed = editor();
        click(&mut ed, 10.0, 10.0);
        click(&mut ed, 200.0, 300.0);
        assert_eq!(click(&mut ed, 400.0, 50.0), EditOutcome::Added(2));
        assert_eq!(ed.points().len(), 3);
    }

    #[test]
    fn press_on_point_selects_instead_of_adding() {
        let mut ed = editor();
        click(&mut ed, 100.0, 100.0);
        let out = ed.press(PointerButton::Primary, Vec2::new(102.0, 101.0));
        assert_eq!(out, EditOutcome::Selected(0));
        assert!(ed.is_dragging());
        assert_eq!(ed.points().len(), 1);
    }

    #[test]
    fn drag_moves_selected_point_without_clamping() {
        let mut ed = editor();
        click(&mut ed, 100.0, 100.0);
        ed.press(PointerButton::Primary, Vec2::new(100.0, 100.0));

        assert_eq!(ed.moved(Vec2::new(150.0, 80.0)), EditOutcome::Moved(0));
        assert_eq!(ed.points().as_slice()[0], Vec2::new(150.0, H - 80.0));

        // Off-canvas positions are stored as-is.
        ed.moved(Vec2::new(-40.0, 900.0));
        assert_eq!(ed.points().as_slice()[0], Vec2::new(-40.0, H - 900.0));
    }

    #[test]
    fn release_ends_drag() {
        let mut ed = editor();
        click(&mut ed, 100.0, 100.0);
        ed.press(PointerButton::Primary, Vec2::new(100.0, 100.0));
        assert_eq!(ed.release(PointerButton::Primary, Vec2::zero()), EditOutcome::Released);
        assert_eq!(ed.selected(), None);
        assert_eq!(ed.moved(Vec2::new(5.0, 5.0)), EditOutcome::Ignored);
        assert_eq!(ed.points().as_slice()[0], Vec2::new(100.0, H - 100.0));
    }

    #[test]
    fn other_buttons_leave_drag_and_points_alone() {
        let mut ed = editor();
        click(&mut ed, 100.0, 100.0);
        ed.press(PointerButton::Primary, Vec2::new(100.0, 100.0));

        assert_eq!(ed.release(PointerButton::Secondary, Vec2::new(100.0, 100.0)), EditOutcome::Ignored);
        assert_eq!(ed.release(PointerButton::Other, Vec2::new(100.0, 100.0)), EditOutcome::Ignored);
        assert_eq!(ed.press(PointerButton::Other, Vec2::new(300.0, 300.0)), EditOutcome::Ignored);
        assert_eq!(ed.press(PointerButton::Other, Vec2::new(100.0, 100.0)), EditOutcome::Ignored);

        assert_eq!(ed.selected(), Some(0));
        assert_eq!(ed.points().as_slice(), &[Vec2::new(100.0, H - 100.0)]);
        assert_eq!(ed.moved(Vec2::new(120.0, 100.0)), EditOutcome::Moved(0));
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut ed = editor();
        click(&mut ed, 100.0, 100.0);
        assert_eq!(ed.moved(Vec2::new(100.0, 100.0)), EditOutcome::Ignored);
    }

    #[test]
    fn secondary_press_removes_exactly_the_hit_point() {
        let mut ed = editor();
        click(&mut ed, 10.0, 10.0);
        click(&mut ed, 100.0, 100.0);
        click(&mut ed, 200.0, 200.0);

        let out = ed.press(PointerButton::Secondary, Vec2::new(101.0, 99.0));
        assert_eq!(out, EditOutcome::Removed(1));
        assert_eq!(
            ed.points().as_slice(),
            &[Vec2::new(10.0, H - 10.0), Vec2::new(200.0, H - 200.0)]
        );
    }

    #[test]
    fn secondary_press_on_empty_space_is_noop() {
        let mut ed = editor();
        click(&mut ed, 10.0, 10.0);
        assert_eq!(ed.press(PointerButton::Secondary, Vec2::new(300.0, 300.0)), EditOutcome::Ignored);
        assert_eq!(ed.points().len(), 1);
    }

    #[test]
    fn removal_below_drag_target_keeps_dragging_same_point() {
        let mut ed = editor();
        click(&mut ed, 10.0, 10.0);
        click(&mut ed, 100.0, 100.0);
        ed.press(PointerButton::Primary, Vec2::new(100.0, 100.0));
        ed.press(PointerButton::Secondary, Vec2::new(10.0, 10.0));

        assert_eq!(ed.selected(), Some(0));
        ed.moved(Vec2::new(120.0, 120.0));
        assert_eq!(ed.points().as_slice(), &[Vec2::new(120.0, H - 120.0)]);
    }

    #[test]
    fn canvas_height_change_updates_flip() {
        let mut ed = editor();
        ed.set_canvas_height(400.0);
        click(&mut ed, 0.0, 0.0);
        assert_eq!(ed.points().as_slice()[0], Vec2::new(0.0, 400.0));
    }

    #[test]
    fn clear_drops_points_and_drag() {
        let mut ed = editor();
        click(&mut ed, 10.0, 10.0);
        ed.press(PointerButton::Primary, Vec2::new(10.0, 10.0));
        ed.clear();
        assert!(ed.points().is_empty());
        assert!(!ed.is_dragging());
    }

    #[test]
    fn curve_follows_point_count() {
        let mut ed = editor();
        click(&mut ed, 0.0, 600.0);
        assert!(ed.curve().is_empty());
        click(&mut ed, 100.0, 600.0);
        let curve = ed.curve();
        assert_eq!(curve.len(), 101);
        assert_eq!(curve[50], Vec2::new(50.0, 0.0));
    }
}
