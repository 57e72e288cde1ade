use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{
    InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for the window.
///
/// Holds "is down" information and the pointer position; transitions are
/// recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,

    /// Last known pointer position in logical pixels, top-left origin.
    ///
    /// Kept after the pointer leaves the window so a release outside the
    /// window still carries a position.
    pub pointer_pos: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,

    /// Button transitions seen before any pointer position was reported.
    queued_buttons: Vec<(MouseButton, MouseButtonState)>,
}

impl InputState {
    /// Builds a button event at the last known pointer position.
    ///
    /// winit 0.30 has no cursor query, so a button pressed before the first
    /// motion has no position yet. Such transitions are queued and replayed,
    /// in order, right after the first `PointerMoved` is applied.
    pub fn pointer_button(
        &mut self,
        button: MouseButton,
        state: MouseButtonState,
    ) -> Option<InputEvent> {
        match self.pointer_pos {
            Some((x, y)) => Some(InputEvent::PointerButton(PointerButtonEvent {
                button,
                state,
                x,
                y,
            })),
            None => {
                log::trace!("queueing {button:?} {state:?} until the pointer position is known");
                self.queued_buttons.push((button, state));
                None
            }
        }
    }

    /// Applies an event to the current state and records deltas into `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases that happen while unfocused are never delivered.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {}

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(key) {
                        frame.keys_released.insert(*key);
                    }
                }
            },

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((*x, *y));

                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }
        }

        let replay = matches!(ev, InputEvent::PointerMoved(_)) && !self.queued_buttons.is_empty();
        frame.push_event(ev);

        if replay {
            for (button, state) in std::mem::take(&mut self.queued_buttons) {
                if let Some(ev) = self.pointer_button(button, state) {
                    self.apply_event(frame, ev);
                }
            }
        }
    }
}
