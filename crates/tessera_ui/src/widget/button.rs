//! Buttons and checkboxes.

use crate::command::Icon;
use crate::context::Context;
use crate::geometry::Rect;
use crate::input::MouseButton;
use crate::options::{Options, Response};
use crate::style::ColorId;

impl Context {
    /// A push button with a label, an icon, or both.
    ///
    /// Reports [`Response::SUBMIT`] on the frame it is clicked. Without a
    /// label the id comes from the icon, so icon-only buttons in the same
    /// scope need distinct icons.
    #[track_caller]
    pub fn button_ex(&mut self, label: &str, icon: Option<Icon>, opt: Options) -> Response {
        let mut response = Response::empty();
        let id = if label.is_empty() {
            let icon = icon.unwrap_or_default();
            self.get_id(&icon.0.to_le_bytes())
        } else {
            self.get_id(label.as_bytes())
        };
        let rect = self.layout_next();
        self.update_control(id, rect, opt);
        if self.input.mouse_pressed == MouseButton::LEFT && self.focus == Some(id) {
            response |= Response::SUBMIT;
        }

        self.draw_control_frame(id, rect, ColorId::Button, opt);
        if !label.is_empty() {
            self.draw_control_text(label, rect, ColorId::Text, opt);
        }
        if let Some(icon) = icon {
            let color = self.style.color(ColorId::Text);
            self.draw_icon(icon, rect, color);
        }
        response
    }

    /// A centered text button.
    #[track_caller]
    pub fn button(&mut self, label: &str) -> Response {
        self.button_ex(label, None, Options::ALIGN_CENTER)
    }

    /// A checkbox bound to `state`; toggles it when clicked and reports
    /// [`Response::CHANGE`].
    ///
    /// The id is derived from the address of `state`.
    #[track_caller]
    pub fn checkbox(&mut self, label: &str, state: &mut bool) -> Response {
        let mut response = Response::empty();
        let id = self.get_id_of(state);
        let rect = self.layout_next();
        let check = Rect::new(rect.x, rect.y, rect.height, rect.height);

        self.update_control(id, rect, Options::empty());
        if self.input.mouse_pressed == MouseButton::LEFT && self.focus == Some(id) {
            response |= Response::CHANGE;
            *state = !*state;
        }

        self.draw_control_frame(id, check, ColorId::Base, Options::empty());
        if *state {
            let color = self.style.color(ColorId::Text);
            self.draw_icon(Icon::CHECK, check, color);
        }
        let text_rect = Rect::new(
            rect.x + check.width,
            rect.y,
            rect.width - check.width,
            rect.height,
        );
        self.draw_control_text(label, text_rect, ColorId::Text, Options::empty());
        response
    }
}
