//! Input handling for the UI.
//!
//! The host feeds raw events between frames through the `input_*` setters on
//! [`Context`](crate::Context); this module keeps the resulting per-frame
//! snapshot. "Pressed" masks only hold the edges seen since the last frame.

use crate::constants::INPUT_TEXT_SIZE;
use crate::geometry::Vec2;

bitflags::bitflags! {
    /// Mouse buttons as a bitmask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButton: u8 {
        /// Left mouse button.
        const LEFT = 1 << 0;
        /// Right mouse button.
        const RIGHT = 1 << 1;
        /// Middle mouse button (scroll wheel click).
        const MIDDLE = 1 << 2;
    }
}

bitflags::bitflags! {
    /// Keys the engine itself reacts to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Key: u8 {
        /// Shift modifier.
        const SHIFT = 1 << 0;
        /// Control modifier.
        const CTRL = 1 << 1;
        /// Alt modifier.
        const ALT = 1 << 2;
        /// Backspace.
        const BACKSPACE = 1 << 3;
        /// Enter/Return.
        const RETURN = 1 << 4;
    }
}

/// Input state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current mouse position.
    pub mouse_pos: Vec2,
    /// Mouse position at the end of the previous frame.
    last_mouse_pos: Vec2,
    /// Movement since the previous frame.
    pub mouse_delta: Vec2,
    /// Accumulated wheel delta.
    pub scroll_delta: Vec2,
    /// Buttons currently held.
    pub mouse_down: MouseButton,
    /// Buttons pressed since the previous frame.
    pub mouse_pressed: MouseButton,
    /// Keys currently held.
    pub key_down: Key,
    /// Keys pressed since the previous frame.
    pub key_pressed: Key,
    /// UTF-8 text typed since the previous frame.
    text: String,
}

impl InputState {
    /// Creates an empty input state with the text queue pre-allocated.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: String::with_capacity(INPUT_TEXT_SIZE),
            ..Self::default()
        }
    }

    /// Computes the per-frame mouse delta.
    pub(crate) fn begin_frame(&mut self) {
        self.mouse_delta = Vec2::new(
            self.mouse_pos.x - self.last_mouse_pos.x,
            self.mouse_pos.y - self.last_mouse_pos.y,
        );
    }

    /// Drops edge-triggered state once the frame is consumed.
    pub(crate) fn end_frame(&mut self) {
        self.key_pressed = Key::empty();
        self.mouse_pressed = MouseButton::empty();
        self.scroll_delta = Vec2::ZERO;
        self.last_mouse_pos = self.mouse_pos;
        self.text.clear();
    }

    /// Records a pointer move.
    pub fn mouse_move(&mut self, x: i32, y: i32) {
        self.mouse_pos = Vec2::new(x, y);
    }

    /// Records a button press at a position.
    pub fn mouse_down(&mut self, x: i32, y: i32, button: MouseButton) {
        self.mouse_move(x, y);
        self.mouse_down |= button;
        self.mouse_pressed |= button;
    }

    /// Records a button release at a position.
    pub fn mouse_up(&mut self, x: i32, y: i32, button: MouseButton) {
        self.mouse_move(x, y);
        self.mouse_down &= !button;
    }

    /// Accumulates a wheel movement.
    pub fn scroll(&mut self, x: i32, y: i32) {
        self.scroll_delta.x += x;
        self.scroll_delta.y += y;
    }

    /// Records a key press.
    pub fn key_down(&mut self, key: Key) {
        self.key_pressed |= key;
        self.key_down |= key;
    }

    /// Records a key release.
    pub fn key_up(&mut self, key: Key) {
        self.key_down &= !key;
    }

    /// Appends typed text.
    ///
    /// # Panics
    ///
    /// Panics if the frame's text exceeds the fixed queue size.
    #[track_caller]
    pub fn push_text(&mut self, text: &str) {
        assert!(
            self.text.len() + text.len() <= INPUT_TEXT_SIZE,
            "input text overflow: more than {INPUT_TEXT_SIZE} bytes this frame"
        );
        self.text.push_str(text);
    }

    /// Returns the text typed this frame.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if `button` went down this frame.
    #[inline]
    #[must_use]
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.mouse_pressed.intersects(button)
    }

    /// Returns true if `button` is held.
    #[inline]
    #[must_use]
    pub fn is_down(&self, button: MouseButton) -> bool {
        self.mouse_down.intersects(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_delta_spans_one_frame() {
        let mut input = InputState::new();
        input.mouse_move(10, 10);
        input.begin_frame();
        assert_eq!(input.mouse_delta, Vec2::new(10, 10));
        input.end_frame();

        input.mouse_move(15, 8);
        input.begin_frame();
        assert_eq!(input.mouse_delta, Vec2::new(5, -2));
    }

    #[test]
    fn test_pressed_is_edge_triggered() {
        let mut input = InputState::new();
        input.mouse_down(0, 0, MouseButton::LEFT);
        input.key_down(Key::SHIFT);
        assert!(input.is_pressed(MouseButton::LEFT));
        assert!(input.key_pressed.contains(Key::SHIFT));

        input.end_frame();
        assert!(!input.is_pressed(MouseButton::LEFT));
        assert!(input.is_down(MouseButton::LEFT));
        assert!(input.key_down.contains(Key::SHIFT));

        input.mouse_up(0, 0, MouseButton::LEFT);
        input.key_up(Key::SHIFT);
        assert!(!input.is_down(MouseButton::LEFT));
        assert!(input.key_down.is_empty());
    }

    #[test]
    fn test_text_queue_clears_each_frame() {
        let mut input = InputState::new();
        input.push_text("ab");
        input.push_text("ç");
        assert_eq!(input.text(), "abç");
        input.end_frame();
        assert_eq!(input.text(), "");
    }

    #[test]
    #[should_panic(expected = "input text overflow")]
    fn test_text_overflow_is_fatal() {
        let mut input = InputState::new();
        input.push_text(&"x".repeat(INPUT_TEXT_SIZE));
        input.push_text("y");
    }
}
