//! # Control State Machine
//!
//! Hover and focus for every interactive widget are resolved by one routine,
//! [`Context::update_control`], called once per widget per frame.
//!
//! ```text
//!            pointer over, no button held
//!   idle ───────────────────────────────► hover
//!    ▲  ◄─────────────────────────────── │
//!    │         pointer left              │ button pressed
//!    │                                   ▼
//!    └──────────────────────────────── focus
//!      pressed elsewhere, or released
//!      without HOLD_FOCUS, or not
//!      refreshed during a frame
//! ```
//!
//! Hover is only granted inside the root container that was under the
//! pointer last frame, so widgets of a window hidden behind another never
//! light up.

use crate::context::Context;
use crate::geometry::{Rect, Vec2};
use crate::id::Id;
use crate::options::Options;
use crate::style::ColorId;

impl Context {
    /// Returns true if the pointer is over `rect`, inside the current clip
    /// and within the hovered root container.
    #[must_use]
    pub fn mouse_over(&self, rect: Rect) -> bool {
        let pos = self.input.mouse_pos;
        rect.contains(pos) && self.clips.current().contains(pos) && self.in_hover_root()
    }

    /// Walks the container stack down to the nearest root and checks whether
    /// it (or a container inside it) is the hover root.
    fn in_hover_root(&self) -> bool {
        let Some(hover_root) = self.hover_root else {
            return false;
        };
        for &handle in self.container_stack.iter().rev() {
            if handle == hover_root {
                return true;
            }
            if self.containers.get(handle).head.is_some() {
                break;
            }
        }
        false
    }

    /// Gives keyboard/pointer focus to `id`, or clears it.
    pub fn set_focus(&mut self, id: Option<Id>) {
        self.focus = id;
        self.updated_focus = true;
    }

    /// Advances hover/focus for the control `id` occupying `rect`.
    pub fn update_control(&mut self, id: Id, rect: Rect, opt: Options) {
        let mouse_over = self.mouse_over(rect);

        if self.focus == Some(id) {
            self.updated_focus = true;
        }
        if opt.contains(Options::NO_INTERACT) {
            return;
        }
        if mouse_over && self.input.mouse_down.is_empty() {
            self.hover = Some(id);
        }

        if self.focus == Some(id) {
            if !self.input.mouse_pressed.is_empty() && !mouse_over {
                self.set_focus(None);
            }
            if self.input.mouse_down.is_empty() && !opt.contains(Options::HOLD_FOCUS) {
                self.set_focus(None);
            }
        }

        if self.hover == Some(id) {
            if !self.input.mouse_pressed.is_empty() {
                self.set_focus(Some(id));
            } else if !mouse_over {
                self.hover = None;
            }
        }
    }

    /// Draws a control frame, shifting `color` to its hover or focus
    /// variant.
    pub fn draw_control_frame(&mut self, id: Id, rect: Rect, color: ColorId, opt: Options) {
        if opt.contains(Options::NO_FRAME) {
            return;
        }
        let shift = if self.focus == Some(id) {
            2
        } else if self.hover == Some(id) {
            1
        } else {
            0
        };
        self.draw_frame(rect, color.shifted(shift));
    }

    /// Draws `text` vertically centered in `rect`, aligned per `opt`, and
    /// clipped to `rect`.
    pub fn draw_control_text(&mut self, text: &str, rect: Rect, color: ColorId, opt: Options) {
        let font = self.style.font;
        let text_width = self.backend().text_width(font, text);
        let text_height = self.backend().text_height(font);

        self.push_clip_rect(rect);
        let y = rect.y + (rect.height - text_height) / 2;
        let x = if opt.contains(Options::ALIGN_CENTER) {
            rect.x + (rect.width - text_width) / 2
        } else if opt.contains(Options::ALIGN_RIGHT) {
            rect.x + rect.width - text_width - self.style.padding
        } else {
            rect.x + self.style.padding
        };
        self.draw_text(font, text, Vec2::new(x, y), self.style.color(color));
        self.pop_clip_rect();
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{context, full_window};
    use crate::{Id, MouseButton, Options, Rect};

    const CONTROL: Rect = Rect::new(10, 10, 50, 20);

    fn frame(ctx: &mut crate::Context, id: Id, opt: Options) {
        ctx.begin();
        assert!(full_window(ctx));
        ctx.update_control(id, CONTROL, opt);
        ctx.end_window();
        ctx.end();
    }

    #[test]
    fn test_hover_then_press_focuses() {
        let mut ctx = context();
        let id = Id(7);
        ctx.input_mouse_move(20, 20);

        // First frame only discovers the hover root.
        frame(&mut ctx, id, Options::empty());
        frame(&mut ctx, id, Options::empty());
        assert_eq!(ctx.hover(), Some(id));

        ctx.input_mouse_down(20, 20, MouseButton::LEFT);
        frame(&mut ctx, id, Options::empty());
        assert_eq!(ctx.focus(), Some(id));

        // Release without HOLD_FOCUS drops focus.
        ctx.input_mouse_up(20, 20, MouseButton::LEFT);
        frame(&mut ctx, id, Options::empty());
        assert_eq!(ctx.focus(), None);
    }

    #[test]
    fn test_no_interact_never_hovers() {
        let mut ctx = context();
        let id = Id(9);
        ctx.input_mouse_move(20, 20);
        frame(&mut ctx, id, Options::NO_INTERACT);
        frame(&mut ctx, id, Options::NO_INTERACT);
        assert_eq!(ctx.hover(), None);
    }

    #[test]
    fn test_press_elsewhere_drops_focus() {
        let mut ctx = context();
        let id = Id(11);
        ctx.input_mouse_move(20, 20);
        frame(&mut ctx, id, Options::HOLD_FOCUS);
        frame(&mut ctx, id, Options::HOLD_FOCUS);
        ctx.input_mouse_down(20, 20, MouseButton::LEFT);
        frame(&mut ctx, id, Options::HOLD_FOCUS);
        ctx.input_mouse_up(20, 20, MouseButton::LEFT);
        frame(&mut ctx, id, Options::HOLD_FOCUS);
        assert_eq!(ctx.focus(), Some(id));

        ctx.input_mouse_down(150, 150, MouseButton::LEFT);
        frame(&mut ctx, id, Options::HOLD_FOCUS);
        assert_eq!(ctx.focus(), None);
    }
}
