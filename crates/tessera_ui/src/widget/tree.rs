//! Collapsible headers and tree nodes.
//!
//! Expansion state lives in the context's treenode pool: a header is
//! expanded while its id holds a slot, so state survives across frames
//! without the caller storing anything.

use crate::command::Icon;
use crate::context::Context;
use crate::geometry::Rect;
use crate::input::MouseButton;
use crate::options::{Options, Response};
use crate::style::ColorId;

impl Context {
    /// Shared header logic. Returns [`Response::ACTIVE`] while expanded.
    ///
    /// With [`Options::EXPANDED`] the pool slot means "collapsed" instead,
    /// so the header starts open.
    #[track_caller]
    fn collapsible(&mut self, label: &str, is_treenode: bool, opt: Options) -> Response {
        let id = self.get_id(label.as_bytes());
        let slot = self.treenodes.get(id);
        self.layout_row(1, Some(&[-1]), 0);

        let mut active = slot.is_some();
        let expanded = if opt.contains(Options::EXPANDED) {
            !active
        } else {
            active
        };
        let mut rect = self.layout_next();
        self.update_control(id, rect, Options::empty());

        if self.input.mouse_pressed == MouseButton::LEFT && self.focus == Some(id) {
            active = !active;
            tracing::debug!(label, active, "toggled header");
        }
        match slot {
            Some(index) if active => self.treenodes.update(index, self.frame),
            Some(index) => self.treenodes.release(index),
            None if active => {
                let _ = self.treenodes.init(id, self.frame);
            }
            None => {}
        }

        if is_treenode {
            if self.hover == Some(id) {
                self.draw_frame(rect, ColorId::ButtonHover);
            }
        } else {
            self.draw_control_frame(id, rect, ColorId::Button, Options::empty());
        }
        let icon = if expanded {
            Icon::EXPANDED
        } else {
            Icon::COLLAPSED
        };
        let color = self.style.color(ColorId::Text);
        self.draw_icon(icon, Rect::new(rect.x, rect.y, rect.height, rect.height), color);

        let shift = rect.height - self.style.padding;
        rect.x += shift;
        rect.width -= shift;
        self.draw_control_text(label, rect, ColorId::Text, Options::empty());

        if expanded {
            Response::ACTIVE
        } else {
            Response::empty()
        }
    }

    /// A full-width collapsible header. Lay out the section's contents only
    /// while it reports [`Response::ACTIVE`].
    #[track_caller]
    pub fn header_ex(&mut self, label: &str, opt: Options) -> Response {
        self.collapsible(label, false, opt)
    }

    /// A header that starts collapsed.
    #[track_caller]
    pub fn header(&mut self, label: &str) -> Response {
        self.header_ex(label, Options::empty())
    }

    /// Opens a tree node. While it reports [`Response::ACTIVE`] the layout
    /// is indented and an id scope is open; close both with
    /// [`end_treenode`](Self::end_treenode).
    #[track_caller]
    pub fn begin_treenode_ex(&mut self, label: &str, opt: Options) -> Response {
        let response = self.collapsible(label, true, opt);
        if response.contains(Response::ACTIVE) {
            let indent = self.style.indent;
            self.layout().indent += indent;
            let id = self.last_id;
            self.push_raw_id(id);
        }
        response
    }

    /// Opens a tree node that starts collapsed.
    #[track_caller]
    pub fn begin_treenode(&mut self, label: &str) -> Response {
        self.begin_treenode_ex(label, Options::empty())
    }

    /// Closes a tree node opened by [`begin_treenode`](Self::begin_treenode).
    #[track_caller]
    pub fn end_treenode(&mut self) {
        let indent = self.style.indent;
        self.layout().indent -= indent;
        self.pop_id();
    }
}
