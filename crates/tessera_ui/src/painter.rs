//! Renderer seam and the low-level draw primitives.
//!
//! A [`Backend`] answers text metrics and may restyle control frames. The
//! [`Painter`] is what it draws with: a short-lived view over the command
//! buffer, the clip stack and the style.

use crate::clip::{Clip, ClipStack};
use crate::command::{CommandBuffer, Icon};
use crate::geometry::{Color, Rect, Vec2};
use crate::style::{ColorId, FontId, Style};

/// Host-side services the engine needs but cannot provide itself.
///
/// # Example
///
/// ```rust
/// use tessera_ui::{Backend, FontId};
///
/// struct Monospace;
///
/// impl Backend for Monospace {
///     fn text_width(&self, _font: FontId, text: &str) -> i32 {
///         8 * i32::try_from(text.chars().count()).unwrap_or(i32::MAX)
///     }
///
///     fn text_height(&self, _font: FontId) -> i32 {
///         16
///     }
/// }
/// ```
pub trait Backend {
    /// Width in pixels of `text` rendered with `font`.
    fn text_width(&self, font: FontId, text: &str) -> i32;

    /// Line height in pixels of `font`.
    fn text_height(&self, font: FontId) -> i32;

    /// Draws a control or container frame. Override to restyle frames.
    fn draw_frame(&self, painter: &mut Painter<'_>, rect: Rect, color: ColorId) {
        painter.draw_default_frame(rect, color);
    }
}

/// Draw access handed to [`Backend::draw_frame`].
pub struct Painter<'a> {
    commands: &'a mut CommandBuffer,
    clips: &'a ClipStack,
    style: &'a Style,
    backend: &'a dyn Backend,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(
        commands: &'a mut CommandBuffer,
        clips: &'a ClipStack,
        style: &'a Style,
        backend: &'a dyn Backend,
    ) -> Self {
        Self {
            commands,
            clips,
            style,
            backend,
        }
    }

    /// Returns the active style.
    #[inline]
    #[must_use]
    pub fn style(&self) -> &Style {
        self.style
    }

    /// Returns the current clip rect.
    #[inline]
    #[must_use]
    pub fn clip_rect(&self) -> Rect {
        self.clips.current()
    }

    pub(crate) fn backend(&self) -> &'a dyn Backend {
        self.backend
    }

    /// Emits a raw clip command.
    pub fn set_clip(&mut self, rect: Rect) {
        self.commands.push_clip(rect);
    }

    /// Fills `rect`, clipped; nothing is recorded if the result is empty.
    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        let visible = rect.intersect(&self.clips.current());
        if !visible.is_empty() {
            self.commands.push_rect(visible, color);
        }
    }

    /// Draws a one pixel outline just inside `rect`.
    pub fn draw_box(&mut self, rect: Rect, color: Color) {
        self.draw_rect(Rect::new(rect.x + 1, rect.y, rect.width - 2, 1), color);
        self.draw_rect(
            Rect::new(rect.x + 1, rect.bottom() - 1, rect.width - 2, 1),
            color,
        );
        self.draw_rect(Rect::new(rect.x, rect.y, 1, rect.height), color);
        self.draw_rect(Rect::new(rect.right() - 1, rect.y, 1, rect.height), color);
    }

    /// Draws text with its top-left at `pos`.
    pub fn draw_text(&mut self, font: FontId, text: &str, pos: Vec2, color: Color) {
        let bounds = Rect::new(
            pos.x,
            pos.y,
            self.backend.text_width(font, text),
            self.backend.text_height(font),
        );
        self.clipped(bounds, |commands| {
            commands.push_text(font, pos, color, text);
        });
    }

    /// Draws an icon centered in `rect`.
    pub fn draw_icon(&mut self, icon: Icon, rect: Rect, color: Color) {
        self.clipped(rect, |commands| commands.push_icon(icon, rect, color));
    }

    /// The stock frame: a fill plus a border for everything but scrollbars
    /// and title bars.
    pub fn draw_default_frame(&mut self, rect: Rect, color: ColorId) {
        self.draw_rect(rect, self.style.color(color));
        if matches!(
            color,
            ColorId::ScrollBase | ColorId::ScrollThumb | ColorId::TitleBg
        ) {
            return;
        }
        let border = self.style.color(ColorId::Border);
        if border.a > 0 {
            self.draw_box(rect.expand(1), border);
        }
    }

    /// Records `emit` unless `bounds` is fully clipped; partially clipped
    /// output is bracketed by clip commands.
    fn clipped(&mut self, bounds: Rect, emit: impl FnOnce(&mut CommandBuffer)) {
        match self.clips.check(bounds) {
            Clip::Outside => {}
            Clip::Inside => emit(&mut *self.commands),
            Clip::Partial => {
                self.commands.push_clip(self.clips.current());
                emit(&mut *self.commands);
                self.commands.push_clip(Rect::UNBOUNDED);
            }
        }
    }
}
