//! # Windows, Popups and Panels
//!
//! Root containers (windows and popups) own a head/tail jump pair in the
//! command stream and take part in z-ordering. Panels are plain containers
//! nested in the current layout.
//!
//! Every `begin_*` that returns true must be matched by its `end_*` in the
//! same frame.

use crate::command::Icon;
use crate::container::ContainerHandle;
use crate::context::Context;
use crate::geometry::{Rect, Vec2};
use crate::input::MouseButton;
use crate::options::Options;
use crate::style::ColorId;

/// Smallest size a window can be resized to.
const MIN_WINDOW_SIZE: Vec2 = Vec2::new(96, 64);

/// Scrollbar orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// Maps a rect into "vertical" space; its own inverse.
    fn orient(self, rect: Rect) -> Rect {
        match self {
            Self::Vertical => rect,
            Self::Horizontal => rect.transposed(),
        }
    }

    fn orient_vec(self, v: Vec2) -> Vec2 {
        match self {
            Self::Vertical => v,
            Self::Horizontal => v.transposed(),
        }
    }

    fn id_label(self) -> &'static [u8] {
        match self {
            Self::Vertical => b"!scrollbary",
            Self::Horizontal => b"!scrollbarx",
        }
    }
}

impl Context {
    // =========================================================================
    // ROOT CONTAINERS
    // =========================================================================

    #[track_caller]
    fn begin_root_container(&mut self, handle: ContainerHandle) {
        self.container_stack.push(handle);
        self.root_list.push(handle);

        let head = self.commands.push_jump(0);
        let container = self.containers.get_mut(handle);
        container.head = Some(head);
        container.tail = None;

        let container = *self.containers.get(handle);
        let on_top = self
            .next_hover_root
            .map_or(true, |root| container.zindex > self.containers.get(root).zindex);
        if container.rect.contains(self.input.mouse_pos) && on_top {
            self.next_hover_root = Some(handle);
        }

        // Nested roots must not inherit the enclosing root's clip.
        self.clips.push_unclipped(Rect::UNBOUNDED);
    }

    #[track_caller]
    fn end_root_container(&mut self) {
        let handle = self.current_container_handle();
        let tail = self.commands.push_jump(0);
        let after = self.commands.len();
        let container = self.containers.get_mut(handle);
        container.tail = Some(tail);
        if let Some(head) = container.head {
            // Reached linearly (from an enclosing root) the block is skipped.
            self.commands.set_jump(head, after);
        }
        self.pop_clip_rect();
        self.pop_container();
    }

    /// Records the content size from the container's layout and closes both.
    #[track_caller]
    pub(crate) fn pop_container(&mut self) {
        let handle = self.current_container_handle();
        let layout = *self.layout();
        let container = self.containers.get_mut(handle);
        container.content_size = Vec2::new(
            layout.max.x - layout.body.x,
            layout.max.y - layout.body.y,
        );
        let _ = self.container_stack.pop();
        let _ = self.layout_stack.pop();
        self.pop_id();
    }

    #[track_caller]
    fn push_container_body(&mut self, handle: ContainerHandle, body: Rect, opt: Options) {
        let mut body = body;
        if !opt.contains(Options::NO_SCROLL) {
            body = self.scrollbars(handle, body);
        }
        let scroll = self.containers.get(handle).scroll;
        self.push_layout(body.expand(-self.style.padding), scroll);
        self.containers.get_mut(handle).body = body;
    }

    // =========================================================================
    // SCROLLBARS
    // =========================================================================

    /// Draws whichever scrollbars the content needs and returns the body
    /// shrunk to make room for them.
    fn scrollbars(&mut self, handle: ContainerHandle, body: Rect) -> Rect {
        let size = self.style.scrollbar_size;
        let padding = self.style.padding;
        let container = *self.containers.get(handle);
        let content = Vec2::new(
            container.content_size.x + padding * 2,
            container.content_size.y + padding * 2,
        );

        self.push_clip_rect(body);
        let mut body = body;
        if content.y > container.body.height {
            body.width -= size;
        }
        if content.x > container.body.width {
            body.height -= size;
        }
        self.scrollbar(handle, body, content, Axis::Vertical);
        self.scrollbar(handle, body, content, Axis::Horizontal);
        self.pop_clip_rect();
        body
    }

    fn scrollbar(&mut self, handle: ContainerHandle, body: Rect, content: Vec2, axis: Axis) {
        let b = axis.orient(body);
        let content = axis.orient_vec(content);
        let mut scroll = axis.orient_vec(self.containers.get(handle).scroll);
        let max_scroll = content.y - b.height;

        if max_scroll > 0 && b.height > 0 {
            let id = self.get_id(axis.id_label());
            let base = Rect::new(b.right(), b.y, self.style.scrollbar_size, b.height);
            let screen_base = axis.orient(base);

            self.update_control(id, screen_base, Options::empty());
            if self.focus == Some(id) && self.input.mouse_down == MouseButton::LEFT {
                let delta = axis.orient_vec(self.input.mouse_delta).y;
                scroll.y += delta * content.y / base.height;
            }
            scroll.y = scroll.y.clamp(0, max_scroll);

            self.draw_frame(screen_base, ColorId::ScrollBase);
            let mut thumb = base;
            thumb.height = self
                .style
                .thumb_size
                .max(base.height * b.height / content.y);
            thumb.y += scroll.y * (base.height - thumb.height) / max_scroll;
            self.draw_frame(axis.orient(thumb), ColorId::ScrollThumb);

            if self.mouse_over(body) {
                self.scroll_target = Some(handle);
            }
        } else {
            scroll.y = 0;
        }
        self.containers.get_mut(handle).scroll = axis.orient_vec(scroll);
    }

    // =========================================================================
    // WINDOWS
    // =========================================================================

    /// Begins a window titled `title`, first shown at `rect`.
    ///
    /// Returns false (and nothing must be ended) if the window is closed.
    #[track_caller]
    pub fn begin_window_ex(&mut self, title: &str, rect: Rect, opt: Options) -> bool {
        let id = self.get_id(title.as_bytes());
        let Some(handle) = self.find_container(id, opt) else {
            return false;
        };
        if !self.containers.get(handle).open {
            return false;
        }
        self.push_raw_id(id);

        if self.containers.get(handle).rect.width == 0 {
            self.containers.get_mut(handle).rect = rect;
        }
        self.begin_root_container(handle);
        let rect = self.containers.get(handle).rect;
        let mut body = rect;

        if !opt.contains(Options::NO_FRAME) {
            self.draw_frame(rect, ColorId::WindowBg);
        }

        if !opt.contains(Options::NO_TITLE) {
            let title_rect = Rect::new(rect.x, rect.y, rect.width, self.style.title_height);
            self.draw_frame(title_rect, ColorId::TitleBg);

            let title_id = self.get_id(b"!title");
            self.update_control(title_id, title_rect, opt);
            self.draw_control_text(title, title_rect, ColorId::TitleText, opt);
            if self.focus == Some(title_id) && self.input.mouse_down == MouseButton::LEFT {
                let delta = self.input.mouse_delta;
                let container = self.containers.get_mut(handle);
                container.rect.x += delta.x;
                container.rect.y += delta.y;
            }
            body.y += title_rect.height;
            body.height -= title_rect.height;

            if !opt.contains(Options::NO_CLOSE) {
                let close_id = self.get_id(b"!close");
                let close = Rect::new(
                    title_rect.right() - title_rect.height,
                    title_rect.y,
                    title_rect.height,
                    title_rect.height,
                );
                let color = self.style.color(ColorId::TitleText);
                self.draw_icon(Icon::CLOSE, close, color);
                self.update_control(close_id, close, opt);
                if self.input.mouse_pressed == MouseButton::LEFT && self.focus == Some(close_id) {
                    self.containers.get_mut(handle).open = false;
                    tracing::debug!(title, "window closed");
                }
            }
        }

        self.push_container_body(handle, body, opt);

        if !opt.contains(Options::NO_RESIZE) {
            let size = self.style.title_height;
            let resize_id = self.get_id(b"!resize");
            let grip = Rect::new(rect.right() - size, rect.bottom() - size, size, size);
            self.update_control(resize_id, grip, opt);
            if self.focus == Some(resize_id) && self.input.mouse_down == MouseButton::LEFT {
                let delta = self.input.mouse_delta;
                let container = self.containers.get_mut(handle);
                container.rect.width = MIN_WINDOW_SIZE.x.max(container.rect.width + delta.x);
                container.rect.height = MIN_WINDOW_SIZE.y.max(container.rect.height + delta.y);
            }
        }

        if opt.contains(Options::AUTO_SIZE) {
            let inner = self.layout().body;
            let container = self.containers.get_mut(handle);
            container.rect.width = container.content_size.x + (container.rect.width - inner.width);
            container.rect.height =
                container.content_size.y + (container.rect.height - inner.height);
        }

        if opt.contains(Options::POPUP)
            && !self.input.mouse_pressed.is_empty()
            && self.hover_root != Some(handle)
        {
            self.containers.get_mut(handle).open = false;
            tracing::debug!(title, "popup dismissed");
        }

        let body = self.containers.get(handle).body;
        self.push_clip_rect(body);
        true
    }

    /// Begins a window with default options.
    #[track_caller]
    pub fn begin_window(&mut self, title: &str, rect: Rect) -> bool {
        self.begin_window_ex(title, rect, Options::empty())
    }

    /// Ends the window begun last.
    #[track_caller]
    pub fn end_window(&mut self) {
        self.pop_clip_rect();
        self.end_root_container();
    }

    // =========================================================================
    // POPUPS
    // =========================================================================

    /// Opens the popup `name` at the pointer, on top of everything.
    #[track_caller]
    pub fn open_popup(&mut self, name: &str) {
        let handle = self.container_handle(name);
        // Hover root now, so the popup is not dismissed by the opening click.
        self.hover_root = Some(handle);
        self.next_hover_root = Some(handle);
        let pos = self.input.mouse_pos;
        let container = self.containers.get_mut(handle);
        container.rect = Rect::new(pos.x, pos.y, 1, 1);
        container.open = true;
        self.bring_to_front(handle);
    }

    /// Begins the popup `name` if it is open.
    #[track_caller]
    pub fn begin_popup(&mut self, name: &str) -> bool {
        let opt = Options::POPUP
            | Options::AUTO_SIZE
            | Options::NO_RESIZE
            | Options::NO_SCROLL
            | Options::NO_TITLE
            | Options::CLOSED;
        self.begin_window_ex(name, Rect::ZERO, opt)
    }

    /// Ends the popup begun last.
    #[track_caller]
    pub fn end_popup(&mut self) {
        self.end_window();
    }

    // =========================================================================
    // PANELS
    // =========================================================================

    /// Begins a panel filling the next layout item.
    #[track_caller]
    pub fn begin_panel_ex(&mut self, name: &str, opt: Options) {
        self.push_id(name.as_bytes());
        let id = self.last_id;
        let handle = self.ensure_container(id);
        let rect = self.layout_next();
        self.containers.get_mut(handle).rect = rect;
        if !opt.contains(Options::NO_FRAME) {
            self.draw_frame(rect, ColorId::PanelBg);
        }
        self.container_stack.push(handle);
        self.push_container_body(handle, rect, opt);
        let body = self.containers.get(handle).body;
        self.push_clip_rect(body);
    }

    /// Begins a panel with default options.
    #[track_caller]
    pub fn begin_panel(&mut self, name: &str) {
        self.begin_panel_ex(name, Options::empty());
    }

    /// Ends the panel begun last.
    #[track_caller]
    pub fn end_panel(&mut self) {
        self.pop_clip_rect();
        self.pop_container();
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::context;
    use crate::{Command, MouseButton, Options, Rect};

    #[test]
    fn test_window_first_rect_then_retained() {
        let mut ctx = context();
        ctx.begin();
        assert!(ctx.begin_window("w", Rect::new(10, 10, 200, 150)));
        let handle = ctx.current_container().unwrap();
        ctx.end_window();
        ctx.end();

        ctx.container_mut(handle).rect.x = 40;
        ctx.begin();
        assert!(ctx.begin_window("w", Rect::new(10, 10, 200, 150)));
        ctx.end_window();
        ctx.end();
        assert_eq!(ctx.container(handle).rect, Rect::new(40, 10, 200, 150));
    }

    #[test]
    fn test_content_size_is_recorded() {
        let mut ctx = context();
        ctx.begin();
        assert!(ctx.begin_window_ex("w", Rect::new(0, 0, 300, 300), Options::NO_TITLE));
        ctx.layout_row(1, Some(&[100]), 40);
        let _ = ctx.layout_next();
        let handle = ctx.current_container().unwrap();
        ctx.end_window();
        ctx.end();
        assert_eq!(ctx.container(handle).content_size, crate::Vec2::new(100, 40));
    }

    #[test]
    fn test_scrollbar_appears_for_tall_content() {
        let mut ctx = context();
        let opt = Options::NO_TITLE | Options::NO_RESIZE;
        for _ in 0..2 {
            ctx.begin();
            assert!(ctx.begin_window_ex("w", Rect::new(0, 0, 100, 100), opt));
            ctx.layout_row(1, Some(&[-1]), 400);
            let _ = ctx.layout_next();
            ctx.end_window();
            ctx.end();
        }
        let handle = {
            ctx.begin();
            let h = ctx.container_handle("w");
            ctx.end();
            h
        };
        // Body narrowed by the vertical scrollbar.
        let style_size = ctx.style().scrollbar_size;
        assert_eq!(ctx.container(handle).body.width, 100 - style_size);
    }

    #[test]
    fn test_wheel_scrolls_hovered_container() {
        let mut ctx = context();
        let opt = Options::NO_TITLE | Options::NO_RESIZE;
        ctx.input_mouse_move(50, 50);
        let mut handle = None;
        for frame in 0..4 {
            if frame == 3 {
                ctx.input_scroll(0, 30);
            }
            ctx.begin();
            assert!(ctx.begin_window_ex("w", Rect::new(0, 0, 100, 100), opt));
            handle = ctx.current_container();
            ctx.layout_row(1, Some(&[-1]), 400);
            let _ = ctx.layout_next();
            ctx.end_window();
            ctx.end();
        }
        let handle = handle.unwrap();
        assert_eq!(ctx.container(handle).scroll.y, 30);
    }

    #[test]
    fn test_close_button_closes_window() {
        let mut ctx = context();
        let rect = Rect::new(0, 0, 200, 100);
        let title_height = ctx.style().title_height;
        // Pointer on the close button in the title bar's right end.
        let (x, y) = (200 - title_height / 2, title_height / 2);
        ctx.input_mouse_move(x, y);

        let run = |ctx: &mut crate::Context| {
            ctx.begin();
            let shown = ctx.begin_window("w", rect);
            if shown {
                ctx.end_window();
            }
            ctx.end();
            shown
        };

        assert!(run(&mut ctx));
        assert!(run(&mut ctx));
        // The press closes the window at the end of this frame.
        ctx.input_mouse_down(x, y, MouseButton::LEFT);
        assert!(run(&mut ctx));
        ctx.input_mouse_up(x, y, MouseButton::LEFT);
        assert!(!run(&mut ctx));
    }

    #[test]
    fn test_popup_opens_at_cursor_and_dismisses() {
        let mut ctx = context();
        let host = Rect::new(0, 0, 300, 300);
        ctx.input_mouse_move(30, 40);

        ctx.begin();
        assert!(ctx.begin_window("host", host));
        assert!(!ctx.begin_popup("menu"));
        ctx.open_popup("menu");
        ctx.end_window();
        ctx.end();

        ctx.begin();
        assert!(ctx.begin_window("host", host));
        assert!(ctx.begin_popup("menu"));
        let popup = ctx.current_container().unwrap();
        ctx.label("item");
        ctx.end_popup();
        ctx.end_window();
        ctx.end();
        assert_eq!(ctx.container(popup).rect.x, 30);
        assert_eq!(ctx.container(popup).rect.y, 40);
        assert!(ctx.container(popup).rect.width > 1);

        // Move away so the host becomes the hover root, then click.
        let run = |ctx: &mut crate::Context| {
            ctx.begin();
            assert!(ctx.begin_window("host", host));
            if ctx.begin_popup("menu") {
                ctx.end_popup();
            }
            ctx.end_window();
            ctx.end();
        };
        ctx.input_mouse_move(250, 250);
        run(&mut ctx);
        assert!(ctx.container(popup).open);
        ctx.input_mouse_down(250, 250, MouseButton::LEFT);
        run(&mut ctx);
        assert!(!ctx.container(popup).open);
    }

    #[test]
    fn test_panel_is_clipped_into_window() {
        let mut ctx = context();
        ctx.begin();
        assert!(ctx.begin_window_ex("w", Rect::new(0, 0, 200, 200), Options::NO_TITLE));
        ctx.layout_row(1, Some(&[-1]), 50);
        ctx.begin_panel_ex("p", Options::NO_SCROLL);
        let clip = ctx.get_clip_rect();
        ctx.end_panel();
        ctx.end_window();
        ctx.end();

        assert!(clip.width > 0 && clip.width < 200);
        assert_eq!(clip.height, 50);
        assert!(ctx
            .commands()
            .all(|cmd| !matches!(cmd, Command::Text { .. })));
    }
}
