//! Static text.

use crate::context::Context;
use crate::options::Options;
use crate::style::ColorId;

impl Context {
    /// Draws a single line of text in the next layout slot.
    #[track_caller]
    pub fn label(&mut self, text: &str) {
        let rect = self.layout_next();
        self.draw_control_text(text, rect, ColorId::Text, Options::empty());
    }

    /// Draws `text` word-wrapped to the container width, one layout row per
    /// line. Newlines force a break.
    #[track_caller]
    pub fn text(&mut self, text: &str) {
        let font = self.style.font;
        let color = self.style.color(ColorId::Text);
        let line_height = self.backend().text_height(font);

        self.layout_begin_column();
        self.layout_row(1, Some(&[-1]), line_height);

        let bytes = text.as_bytes();
        let len = bytes.len();
        let is_break = |at: usize| bytes[at] == b' ' || bytes[at] == b'\n';

        let mut p = 0;
        loop {
            let rect = self.layout_next();
            let start = p;
            let mut end = p;
            let mut width = 0;
            loop {
                let word = p;
                while p < len && !is_break(p) {
                    p += 1;
                }
                width += self.backend().text_width(font, &text[word..p]);
                if width > rect.width && end != start {
                    break;
                }
                width += self.backend().text_width(font, &text[p..(p + 1).min(len)]);
                end = p;
                p += 1;
                if end >= len || bytes[end] == b'\n' {
                    break;
                }
            }
            self.draw_text(font, &text[start..end], rect.origin(), color);
            p = end + 1;
            if end >= len {
                break;
            }
        }

        self.layout_end_column();
    }
}
