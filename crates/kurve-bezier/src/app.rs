use kurve_engine::core::{App, AppControl, FrameCtx};
use kurve_engine::input::{InputEvent, Key, KeyState, MouseButtonState};
use kurve_engine::paint::Color;
use kurve_engine::render::shapes::{CircleRenderer, PolylineRenderer};
use kurve_engine::scene::{DrawList, ZIndex};
use kurve_geom::{CurveEditor, EditOutcome, EditorConfig, PointerHandler};

// Control points first, curve on top.
const POINT_Z: ZIndex = ZIndex(0);
const CURVE_Z: ZIndex = ZIndex(1);

const CURVE_WIDTH: f32 = 2.0;
const CURVE_COLOR: Color = Color::RED;
const POINT_COLOR: Color = Color::WHITE;
const BACKGROUND: Color = Color::BLACK;

/// Editor window state.
pub struct EditorApp {
    editor: CurveEditor,
    draw_list: DrawList,
    circles: CircleRenderer,
    polylines: PolylineRenderer,
}

impl EditorApp {
    pub fn new(config: EditorConfig, canvas_height: f32) -> Self {
        Self {
            editor: CurveEditor::new(config, canvas_height),
            draw_list: DrawList::new(),
            circles: CircleRenderer::new(),
            polylines: PolylineRenderer::new(),
        }
    }

    /// Routes one input event to the editor. Returns `Exit` on Escape.
    fn handle_event(&mut self, ev: &InputEvent) -> AppControl {
        let outcome = match ev {
            InputEvent::PointerButton(b) => match b.state {
                MouseButtonState::Pressed => self.editor.press(b.button.into(), b.pos()),
                MouseButtonState::Released => self.editor.release(b.button.into(), b.pos()),
            },
            InputEvent::PointerMoved(m) => self.editor.moved(m.pos()),
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                repeat: false,
            } => match key {
                Key::Escape => return AppControl::Exit,
                Key::C => {
                    self.editor.clear();
                    log::info!("cleared all control points");
                    EditOutcome::Ignored
                }
                _ => EditOutcome::Ignored,
            },
            _ => EditOutcome::Ignored,
        };

        match outcome {
            EditOutcome::Ignored | EditOutcome::Moved(_) => {}
            other => log::debug!(
                "{other:?} ({} point(s), selected {:?})",
                self.editor.points().len(),
                self.editor.selected()
            ),
        }

        AppControl::Continue
    }

    /// Records the curve and its control points for this frame.
    fn build_scene(&mut self) {
        self.draw_list.clear();

        let radius = self.editor.config().pick_radius();
        for &p in self.editor.points().iter() {
            self.draw_list.push_solid_circle(POINT_Z, p, radius, POINT_COLOR);
        }

        let curve = self.editor.curve();
        if !curve.is_empty() {
            self.draw_list
                .push_polyline(CURVE_Z, curve, CURVE_WIDTH, CURVE_COLOR);
        }
    }
}

impl App for EditorApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.editor.set_canvas_height(ctx.window.viewport().height);

        for ev in &ctx.input_frame.events {
            if self.handle_event(ev) == AppControl::Exit {
                return AppControl::Exit;
            }
        }

        self.build_scene();

        let Self {
            draw_list,
            circles,
            polylines,
            ..
        } = self;
        ctx.render(BACKGROUND, |rctx, target| {
            circles.render(rctx, target, draw_list);
            polylines.render(rctx, target, draw_list);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurve_engine::input::{
        InputFrame, InputState, MouseButton, PointerButtonEvent, PointerMoveEvent,
    };
    use kurve_engine::scene::DrawCmd;
    use kurve_geom::Vec2;

    fn app() -> EditorApp {
        EditorApp::new(EditorConfig::default(), 600.0)
    }

    fn button(button: MouseButton, state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button, state, x, y })
    }

    fn click(app: &mut EditorApp, button: MouseButton, x: f32, y: f32) {
        app.handle_event(&self::button(button, MouseButtonState::Pressed, x, y));
        app.handle_event(&self::button(button, MouseButtonState::Released, x, y));
    }

    fn key(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            repeat: false,
        }
    }

    #[test]
    fn left_clicks_add_flipped_points() {
        let mut app = app();
        click(&mut app, MouseButton::Left, 10.0, 10.0);
        click(&mut app, MouseButton::Left, 200.0, 300.0);
        assert_eq!(
            app.editor.points().as_slice(),
            &[Vec2::new(10.0, 590.0), Vec2::new(200.0, 300.0)]
        );
    }

    #[test]
    fn drag_sequence_moves_point() {
        let mut app = app();
        click(&mut app, MouseButton::Left, 100.0, 100.0);

        app.handle_event(&button(MouseButton::Left, MouseButtonState::Pressed, 101.0, 101.0));
        app.handle_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 250.0, y: 50.0 }));
        app.handle_event(&button(MouseButton::Left, MouseButtonState::Released, 250.0, 50.0));
        app.handle_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 0.0, y: 0.0 }));

        assert_eq!(app.editor.points().as_slice(), &[Vec2::new(250.0, 550.0)]);
    }

    #[test]
    fn release_outside_window_ends_drag() {
        let mut app = app();
        click(&mut app, MouseButton::Left, 100.0, 100.0);

        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, InputEvent::PointerMoved(PointerMoveEvent { x: 100.0, y: 100.0 }));
        if let Some(ev) = st.pointer_button(MouseButton::Left, MouseButtonState::Pressed) {
            st.apply_event(&mut fr, ev);
        }
        st.apply_event(&mut fr, InputEvent::PointerMoved(PointerMoveEvent { x: 599.0, y: 100.0 }));
        st.apply_event(&mut fr, InputEvent::PointerLeft);
        if let Some(ev) = st.pointer_button(MouseButton::Left, MouseButtonState::Released) {
            st.apply_event(&mut fr, ev);
        }

        for ev in &fr.events {
            app.handle_event(ev);
        }
        assert!(!app.editor.is_dragging());

        // Re-entering the window with no button held moves nothing.
        app.handle_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 300.0, y: 300.0 }));
        assert_eq!(app.editor.points().as_slice(), &[Vec2::new(599.0, 500.0)]);
    }

    #[test]
    fn first_click_before_any_motion_adds_point() {
        let mut app = app();
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        for state in [MouseButtonState::Pressed, MouseButtonState::Released] {
            if let Some(ev) = st.pointer_button(MouseButton::Left, state) {
                st.apply_event(&mut fr, ev);
            }
        }
        st.apply_event(&mut fr, InputEvent::PointerMoved(PointerMoveEvent { x: 10.0, y: 10.0 }));

        for ev in &fr.events {
            app.handle_event(ev);
        }
        assert_eq!(app.editor.points().as_slice(), &[Vec2::new(10.0, 590.0)]);
        assert!(!app.editor.is_dragging());
    }

    #[test]
    fn right_click_removes_point() {
        let mut app = app();
        click(&mut app, MouseButton::Left, 100.0, 100.0);
        click(&mut app, MouseButton::Left, 300.0, 300.0);
        click(&mut app, MouseButton::Right, 100.0, 100.0);
        assert_eq!(app.editor.points().as_slice(), &[Vec2::new(300.0, 300.0)]);
    }

    #[test]
    fn c_clears_and_escape_exits() {
        let mut app = app();
        click(&mut app, MouseButton::Left, 100.0, 100.0);
        assert_eq!(app.handle_event(&key(Key::C)), AppControl::Continue);
        assert!(app.editor.points().is_empty());
        assert_eq!(app.handle_event(&key(Key::Escape)), AppControl::Exit);
    }

    #[test]
    fn scene_has_curve_above_points() {
        let mut app = app();
        click(&mut app, MouseButton::Left, 100.0, 100.0);
        app.build_scene();
        // A lone point has no curve.
        assert_eq!(app.draw_list.items().len(), 1);

        click(&mut app, MouseButton::Left, 300.0, 300.0);
        app.build_scene();

        let cmds: Vec<&DrawCmd> = app
            .draw_list
            .iter_in_paint_order()
            .map(|item| &item.cmd)
            .collect();
        assert_eq!(cmds.len(), 3);
        for cmd in &cmds[..2] {
            match cmd {
                DrawCmd::Circle(c) => {
                    assert_eq!(c.radius, 3.5);
                    assert_eq!(c.color, POINT_COLOR);
                }
                other => panic!("expected control point, got {other:?}"),
            }
        }
        match cmds[2] {
            DrawCmd::Polyline(line) => {
                assert_eq!(line.points.len(), 101);
                assert_eq!(line.width, CURVE_WIDTH);
                assert_eq!(line.color, CURVE_COLOR);
            }
            other => panic!("expected curve last, got {other:?}"),
        }
    }
}
