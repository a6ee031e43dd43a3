//! Single-line text input.

use crate::context::Context;
use crate::geometry::{Rect, Vec2};
use crate::id::Id;
use crate::input::Key;
use crate::options::{Options, Response};
use crate::style::ColorId;

/// Appends as much of `text` to `buf` as fits in `max_len` bytes without
/// splitting a character. Returns true if anything was appended.
fn append_fitting(buf: &mut String, text: &str, max_len: usize) -> bool {
    let room = max_len.saturating_sub(buf.len());
    let mut cut = room.min(text.len());
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    buf.push_str(&text[..cut]);
    cut > 0
}

impl Context {
    /// A textbox with an explicit id and rect.
    ///
    /// While focused it takes typed text (up to `max_len` bytes), removes the
    /// last character on backspace, and on return drops focus and reports
    /// [`Response::SUBMIT`]. Edits report [`Response::CHANGE`].
    pub fn textbox_raw(
        &mut self,
        buf: &mut String,
        max_len: usize,
        id: Id,
        rect: Rect,
        opt: Options,
    ) -> Response {
        let mut response = Response::empty();
        self.update_control(id, rect, opt | Options::HOLD_FOCUS);

        if self.focus == Some(id) {
            if append_fitting(buf, self.input.text(), max_len) {
                response |= Response::CHANGE;
            }
            if self.input.key_pressed.contains(Key::BACKSPACE) && buf.pop().is_some() {
                response |= Response::CHANGE;
            }
            if self.input.key_pressed.contains(Key::RETURN) {
                self.set_focus(None);
                response |= Response::SUBMIT;
            }
        }

        self.draw_control_frame(id, rect, ColorId::Base, opt);
        if self.focus == Some(id) {
            let color = self.style.color(ColorId::Text);
            let font = self.style.font;
            let text_width = self.backend().text_width(font, buf.as_str());
            let text_height = self.backend().text_height(font);
            // Keep the caret in view by sliding long text to the left.
            let overflow = rect.width - self.style.padding - text_width - 1;
            let x = rect.x + overflow.min(self.style.padding);
            let y = rect.y + (rect.height - text_height) / 2;
            self.push_clip_rect(rect);
            self.draw_text(font, buf.as_str(), Vec2::new(x, y), color);
            self.draw_rect(Rect::new(x + text_width, y, 1, text_height), color);
            self.pop_clip_rect();
        } else {
            self.draw_control_text(buf.as_str(), rect, ColorId::Text, opt);
        }
        response
    }

    /// A textbox in the next layout slot, identified by the address of
    /// `buf`.
    #[track_caller]
    pub fn textbox_ex(&mut self, buf: &mut String, max_len: usize, opt: Options) -> Response {
        let id = self.get_id_of(buf);
        let rect = self.layout_next();
        self.textbox_raw(buf, max_len, id, rect, opt)
    }

    /// A textbox with default options.
    #[track_caller]
    pub fn textbox(&mut self, buf: &mut String, max_len: usize) -> Response {
        self.textbox_ex(buf, max_len, Options::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::append_fitting;
    use crate::test_support::{context, full_window};
    use crate::{Key, MouseButton, Response};

    #[test]
    fn test_append_respects_char_boundaries() {
        let mut buf = String::from("ab");
        assert!(!append_fitting(&mut buf, "çd", 3));
        // 'ç' is two bytes and does not fit in the one byte left.
        assert_eq!(buf, "ab");

        let mut buf = String::new();
        assert!(append_fitting(&mut buf, "çd", 3));
        assert_eq!(buf, "çd");
    }

    #[test]
    fn test_typing_backspace_and_submit() {
        let mut ctx = context();
        let mut buf = String::from("hi");
        ctx.input_mouse_move(20, 10);

        let frame = |ctx: &mut crate::Context, buf: &mut String| {
            ctx.begin();
            assert!(full_window(ctx));
            let response = ctx.textbox(buf, 16);
            ctx.end_window();
            ctx.end();
            response
        };

        let _ = frame(&mut ctx, &mut buf);
        let _ = frame(&mut ctx, &mut buf);
        ctx.input_mouse_down(20, 10, MouseButton::LEFT);
        let _ = frame(&mut ctx, &mut buf);
        ctx.input_mouse_up(20, 10, MouseButton::LEFT);

        ctx.input_text("!?");
        assert_eq!(frame(&mut ctx, &mut buf), Response::CHANGE);
        assert_eq!(buf, "hi!?");

        ctx.input_key_down(Key::BACKSPACE);
        assert_eq!(frame(&mut ctx, &mut buf), Response::CHANGE);
        ctx.input_key_up(Key::BACKSPACE);
        assert_eq!(buf, "hi!");

        ctx.input_key_down(Key::RETURN);
        assert_eq!(frame(&mut ctx, &mut buf), Response::SUBMIT);
        ctx.input_key_up(Key::RETURN);
        assert_eq!(ctx.focus(), None);
    }
}
