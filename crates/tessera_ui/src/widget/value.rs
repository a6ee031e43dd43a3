//! Sliders and drag-to-edit number boxes.
//!
//! Both widgets bind to an `f32` by address and can be shift-clicked into a
//! textbox for typing an exact value.

use std::fmt::Write;

use crate::constants::MAX_FMT;
use crate::context::Context;
use crate::geometry::Rect;
use crate::id::Id;
use crate::input::{Key, MouseButton};
use crate::options::{Options, Response};
use crate::style::ColorId;
use crate::widget::EditMode;

impl Context {
    /// Runs the textbox stand-in for a numeric widget.
    ///
    /// Returns true while the widget is being typed into, in which case the
    /// caller skips its normal behavior for this frame. Text that does not
    /// parse leaves `value` unchanged.
    fn number_textbox(&mut self, value: &mut f32, rect: Rect, id: Id) -> bool {
        if self.input.mouse_pressed == MouseButton::LEFT
            && self.input.key_down.contains(Key::SHIFT)
            && self.hover == Some(id)
        {
            self.edit = EditMode::TextEditing(id);
            self.edit_buffer.clear();
            let _ = write!(self.edit_buffer, "{value}");
        }

        if self.edit != EditMode::TextEditing(id) {
            return false;
        }

        let mut buf = std::mem::take(&mut self.edit_buffer);
        let response = self.textbox_raw(&mut buf, MAX_FMT, id, rect, Options::empty());
        let finished = response.contains(Response::SUBMIT) || self.focus != Some(id);
        if finished {
            match buf.trim().parse::<f32>() {
                Ok(parsed) => *value = parsed,
                Err(err) => tracing::debug!(input = %buf, %err, "discarded numeric edit"),
            }
            self.edit = EditMode::Normal;
        }
        self.edit_buffer = buf;
        !finished
    }

    /// Draws `value` with `precision` decimals centered per `opt`.
    fn draw_value_text(&mut self, value: f32, precision: usize, rect: Rect, opt: Options) {
        let mut buf = std::mem::take(&mut self.format_buffer);
        buf.clear();
        let _ = write!(buf, "{value:.precision$}");
        self.draw_control_text(&buf, rect, ColorId::Text, opt);
        self.format_buffer = buf;
    }

    /// A horizontal slider over `low..=high`.
    ///
    /// Dragging with the left button maps the pointer x onto the range.
    /// A nonzero `step` snaps the value to multiples of `step`. The value is
    /// always clamped to the range. Reports [`Response::CHANGE`] whenever
    /// the value moved this frame.
    #[track_caller]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn slider_ex(
        &mut self,
        value: &mut f32,
        low: f32,
        high: f32,
        step: f32,
        precision: usize,
        opt: Options,
    ) -> Response {
        let mut response = Response::empty();
        let last = *value;
        let mut v = last;
        let id = self.get_id_of(&*value);
        let base = self.layout_next();

        if self.number_textbox(&mut v, base, id) {
            return response;
        }

        self.update_control(id, base, opt);
        if self.focus == Some(id)
            && (self.input.mouse_down | self.input.mouse_pressed) == MouseButton::LEFT
        {
            v = low + (self.input.mouse_pos.x - base.x) as f32 * (high - low) / base.width as f32;
            if step != 0.0 {
                v = (((v + step / 2.0) / step) as i64) as f32 * step;
            }
        }
        // A reversed range collapses to `high`.
        v = v.max(low).min(high);
        *value = v;
        if last != v {
            response |= Response::CHANGE;
        }

        self.draw_control_frame(id, base, ColorId::Base, opt);
        let thumb_width = self.style.thumb_size;
        let offset = ((v - low) * (base.width - thumb_width) as f32 / (high - low)) as i32;
        let thumb = Rect::new(base.x + offset, base.y, thumb_width, base.height);
        self.draw_control_frame(id, thumb, ColorId::Button, opt);
        self.draw_value_text(v, precision, base, opt);
        response
    }

    /// A centered slider with no snapping and two decimals.
    #[track_caller]
    pub fn slider(&mut self, value: &mut f32, low: f32, high: f32) -> Response {
        self.slider_ex(value, low, high, 0.0, 2, Options::ALIGN_CENTER)
    }

    /// A number box: dragging horizontally adds `step` per pixel moved.
    #[track_caller]
    #[allow(clippy::cast_precision_loss)]
    pub fn number_ex(
        &mut self,
        value: &mut f32,
        step: f32,
        precision: usize,
        opt: Options,
    ) -> Response {
        let mut response = Response::empty();
        let id = self.get_id_of(&*value);
        let base = self.layout_next();
        let last = *value;

        if self.number_textbox(value, base, id) {
            return response;
        }

        self.update_control(id, base, opt);
        if self.focus == Some(id) && self.input.mouse_down == MouseButton::LEFT {
            *value += self.input.mouse_delta.x as f32 * step;
        }
        if *value != last {
            response |= Response::CHANGE;
        }

        self.draw_control_frame(id, base, ColorId::Base, opt);
        self.draw_value_text(*value, precision, base, opt);
        response
    }

    /// A centered number box with two decimals.
    #[track_caller]
    pub fn number(&mut self, value: &mut f32, step: f32) -> Response {
        self.number_ex(value, step, 2, Options::ALIGN_CENTER)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{context, full_window};
    use crate::widget::EditMode;
    use crate::{Command, Context, Key, MouseButton, Response};

    fn slider_frame(ctx: &mut Context, value: &mut f32) -> Response {
        ctx.begin();
        assert!(full_window(ctx));
        let response = ctx.slider(value, 0.0, 100.0);
        ctx.end_window();
        ctx.end();
        response
    }

    fn number_frame(ctx: &mut Context, value: &mut f32) -> Response {
        ctx.begin();
        assert!(full_window(ctx));
        let response = ctx.number(value, 0.5);
        ctx.end_window();
        ctx.end();
        response
    }

    fn texts(ctx: &Context) -> Vec<String> {
        ctx.commands()
            .filter_map(|cmd| match cmd {
                Command::Text { text, .. } => Some(text.to_owned()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_slider_drag_maps_and_clamps() {
        let mut ctx = context();
        let mut value = 0.0_f32;
        // Slot spans x 5..83; x = 44 is the middle.
        ctx.input_mouse_move(44, 10);
        assert_eq!(slider_frame(&mut ctx, &mut value), Response::empty());
        assert_eq!(slider_frame(&mut ctx, &mut value), Response::empty());

        ctx.input_mouse_down(44, 10, MouseButton::LEFT);
        assert_eq!(slider_frame(&mut ctx, &mut value), Response::CHANGE);
        assert!((value - 50.0).abs() < 1e-4);
        assert!(texts(&ctx).iter().any(|text| text == "50.00"));

        ctx.input_mouse_move(83, 10);
        assert_eq!(slider_frame(&mut ctx, &mut value), Response::CHANGE);
        assert!((value - 100.0).abs() < 1e-4);

        ctx.input_mouse_move(150, 10);
        assert_eq!(slider_frame(&mut ctx, &mut value), Response::empty());
        assert!((value - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_reversed_slider_range_does_not_panic() {
        let mut ctx = context();
        let mut value = 50.0_f32;
        ctx.begin();
        assert!(full_window(&mut ctx));
        let response = ctx.slider(&mut value, 100.0, 0.0);
        ctx.end_window();
        ctx.end();
        assert_eq!(response, Response::CHANGE);
        assert!(value.abs() < 1e-4);
    }

    #[test]
    fn test_slider_step_snaps() {
        let mut ctx = context();
        let mut value = 0.0_f32;
        ctx.input_mouse_move(30, 10);
        for _ in 0..2 {
            ctx.begin();
            assert!(full_window(&mut ctx));
            let _ = ctx.slider_ex(&mut value, 0.0, 100.0, 25.0, 0, crate::Options::empty());
            ctx.end_window();
            ctx.end();
        }
        ctx.input_mouse_down(30, 10, MouseButton::LEFT);
        ctx.begin();
        assert!(full_window(&mut ctx));
        let _ = ctx.slider_ex(&mut value, 0.0, 100.0, 25.0, 0, crate::Options::empty());
        ctx.end_window();
        ctx.end();
        // (30 - 5) * 100 / 78 = 32.05, which snaps to 25.
        assert!((value - 25.0).abs() < 1e-4);
    }

    #[test]
    fn test_number_drag_adds_step_per_pixel() {
        let mut ctx = context();
        let mut value = 1.0_f32;
        ctx.input_mouse_move(20, 10);
        let _ = number_frame(&mut ctx, &mut value);
        let _ = number_frame(&mut ctx, &mut value);
        ctx.input_mouse_down(20, 10, MouseButton::LEFT);
        assert_eq!(number_frame(&mut ctx, &mut value), Response::empty());

        ctx.input_mouse_move(30, 10);
        assert_eq!(number_frame(&mut ctx, &mut value), Response::CHANGE);
        assert!((value - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_shift_click_types_a_value() {
        let mut ctx = context();
        let mut value = 1.0_f32;
        ctx.input_mouse_move(20, 10);
        let _ = number_frame(&mut ctx, &mut value);
        let _ = number_frame(&mut ctx, &mut value);

        ctx.input_key_down(Key::SHIFT);
        ctx.input_mouse_down(20, 10, MouseButton::LEFT);
        assert_eq!(number_frame(&mut ctx, &mut value), Response::empty());
        assert!(matches!(ctx.edit, EditMode::TextEditing(_)));
        ctx.input_mouse_up(20, 10, MouseButton::LEFT);
        ctx.input_key_up(Key::SHIFT);

        ctx.input_text("2");
        assert_eq!(number_frame(&mut ctx, &mut value), Response::empty());
        assert!(texts(&ctx).iter().any(|text| text == "12"));

        ctx.input_key_down(Key::RETURN);
        assert_eq!(number_frame(&mut ctx, &mut value), Response::CHANGE);
        ctx.input_key_up(Key::RETURN);
        assert!((value - 12.0).abs() < 1e-4);
        assert_eq!(ctx.edit, EditMode::Normal);
    }

    #[test]
    fn test_unparsable_edit_keeps_value() {
        let mut ctx = context();
        let mut value = 3.0_f32;
        ctx.input_mouse_move(20, 10);
        let _ = number_frame(&mut ctx, &mut value);
        let _ = number_frame(&mut ctx, &mut value);

        ctx.input_key_down(Key::SHIFT);
        ctx.input_mouse_down(20, 10, MouseButton::LEFT);
        let _ = number_frame(&mut ctx, &mut value);
        ctx.input_mouse_up(20, 10, MouseButton::LEFT);
        ctx.input_key_up(Key::SHIFT);

        ctx.input_text("x");
        let _ = number_frame(&mut ctx, &mut value);
        ctx.input_key_down(Key::RETURN);
        assert_eq!(number_frame(&mut ctx, &mut value), Response::empty());
        assert!((value - 3.0).abs() < 1e-4);
        assert_eq!(ctx.edit, EditMode::Normal);
    }
}
