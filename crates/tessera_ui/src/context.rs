//! # Frame Driver
//!
//! [`Context`] owns every piece of engine state. A frame is always:
//!
//! ```text
//! input_*()  →  begin()  →  windows / panels / widgets  →  end()  →  commands()
//! ```
//!
//! ## Architecture Rules
//!
//! 1. **Nothing global** - two contexts never share state
//! 2. **Allocate once** - buffers, stacks and pools are sized at construction
//! 3. **Balanced scopes** - every id, clip, container and column scope opened
//!    during a frame is closed before `end()`, or `end()` panics

use tessera_core::{BoundedStack, LruPool};

use crate::clip::{Clip, ClipStack};
use crate::command::{Command, CommandBuffer, Commands, Icon, JUMP_SIZE};
use crate::constants::{
    CONTAINER_STACK_SIZE, ID_STACK_SIZE, LAYOUT_STACK_SIZE, MAX_FMT, ROOT_LIST_SIZE,
    TREENODE_POOL_SIZE,
};
use crate::container::{ContainerHandle, ContainerPool};
use crate::geometry::{Color, Rect, Vec2};
use crate::id::Id;
use crate::input::{InputState, Key, MouseButton};
use crate::layout::LayoutFrame;
use crate::painter::{Backend, Painter};
use crate::style::{ColorId, FontId, Style};
use crate::widget::EditMode;

/// Depth of each scoped stack, for balance checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StackDepths {
    /// Open id scopes.
    pub ids: usize,
    /// Pushed clip rects.
    pub clips: usize,
    /// Open containers.
    pub containers: usize,
    /// Open layouts (container bodies and columns).
    pub layouts: usize,
}

/// The UI engine: persistent widget state plus one frame's command stream.
///
/// # Thread Safety
///
/// A context belongs to one thread. Run independent contexts for
/// independent UIs.
///
/// # Example
///
/// ```rust
/// use tessera_ui::{Backend, Context, FontId, Rect};
///
/// struct Metrics;
///
/// impl Backend for Metrics {
///     fn text_width(&self, _: FontId, text: &str) -> i32 {
///         8 * i32::try_from(text.len()).unwrap_or(i32::MAX)
///     }
///     fn text_height(&self, _: FontId) -> i32 {
///         14
///     }
/// }
///
/// let mut ctx = Context::default().with_backend(Metrics);
/// ctx.begin();
/// if ctx.begin_window("Demo", Rect::new(10, 10, 200, 120)) {
///     ctx.label("hello");
///     ctx.end_window();
/// }
/// ctx.end();
///
/// for command in ctx.commands() {
///     // hand `command` to the renderer
///     let _ = command;
/// }
/// ```
pub struct Context {
    pub(crate) backend: Option<Box<dyn Backend>>,
    pub(crate) style: Style,

    pub(crate) hover: Option<Id>,
    pub(crate) focus: Option<Id>,
    pub(crate) updated_focus: bool,
    pub(crate) last_id: Id,
    pub(crate) last_rect: Rect,
    pub(crate) last_zindex: i32,
    pub(crate) frame: u64,
    pub(crate) hover_root: Option<ContainerHandle>,
    pub(crate) next_hover_root: Option<ContainerHandle>,
    pub(crate) scroll_target: Option<ContainerHandle>,

    pub(crate) edit: EditMode,
    pub(crate) edit_buffer: String,
    pub(crate) format_buffer: String,

    pub(crate) commands: CommandBuffer,
    pub(crate) root_list: BoundedStack<ContainerHandle, ROOT_LIST_SIZE>,
    pub(crate) container_stack: BoundedStack<ContainerHandle, CONTAINER_STACK_SIZE>,
    pub(crate) clips: ClipStack,
    pub(crate) id_stack: BoundedStack<Id, ID_STACK_SIZE>,
    pub(crate) layout_stack: BoundedStack<LayoutFrame, LAYOUT_STACK_SIZE>,

    pub(crate) containers: ContainerPool,
    pub(crate) treenodes: LruPool<Id, TREENODE_POOL_SIZE>,

    pub(crate) input: InputState,
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Style::default())
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("frame", &self.frame)
            .field("hover", &self.hover)
            .field("focus", &self.focus)
            .field("command_bytes", &self.commands.len())
            .field("has_backend", &self.backend.is_some())
            .finish_non_exhaustive()
    }
}

impl Context {
    /// Creates a context with `style`. A [`Backend`] must be installed
    /// before the first [`begin`](Self::begin).
    #[must_use]
    pub fn new(style: Style) -> Self {
        Self {
            backend: None,
            style,
            hover: None,
            focus: None,
            updated_focus: false,
            last_id: Id::default(),
            last_rect: Rect::ZERO,
            last_zindex: 0,
            frame: 0,
            hover_root: None,
            next_hover_root: None,
            scroll_target: None,
            edit: EditMode::Normal,
            edit_buffer: String::with_capacity(MAX_FMT),
            format_buffer: String::with_capacity(MAX_FMT),
            commands: CommandBuffer::new(),
            root_list: BoundedStack::new(),
            container_stack: BoundedStack::new(),
            clips: ClipStack::new(),
            id_stack: BoundedStack::new(),
            layout_stack: BoundedStack::new(),
            containers: ContainerPool::new(),
            treenodes: LruPool::new(),
            input: InputState::new(),
        }
    }

    /// Installs `backend`, builder style.
    #[must_use]
    pub fn with_backend(mut self, backend: impl Backend + 'static) -> Self {
        self.set_backend(backend);
        self
    }

    /// Installs or replaces the backend.
    pub fn set_backend(&mut self, backend: impl Backend + 'static) {
        self.backend = Some(Box::new(backend));
    }

    /// Returns the active style.
    #[inline]
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Returns the active style for in-place edits.
    #[inline]
    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    #[track_caller]
    pub(crate) fn backend(&self) -> &dyn Backend {
        match self.backend.as_deref() {
            Some(backend) => backend,
            None => panic!("no backend installed: call set_backend before begin"),
        }
    }

    #[track_caller]
    pub(crate) fn painter(&mut self) -> Painter<'_> {
        let backend = match self.backend.as_deref() {
            Some(backend) => backend,
            None => panic!("no backend installed: call set_backend before begin"),
        };
        Painter::new(&mut self.commands, &self.clips, &self.style, backend)
    }

    // =========================================================================
    // FRAME
    // =========================================================================

    /// Starts a frame: clears the command stream and root list and adopts
    /// the hover root found during the previous frame.
    ///
    /// # Panics
    ///
    /// Panics if no backend is installed.
    #[track_caller]
    pub fn begin(&mut self) {
        assert!(
            self.backend.is_some(),
            "no backend installed: call set_backend before begin"
        );
        self.commands.clear();
        self.root_list.clear();
        self.scroll_target = None;
        self.hover_root = self.next_hover_root.take();
        self.input.begin_frame();
        self.frame += 1;
        // Lead jump; retargeted to the lowest root in `end`.
        let _ = self.commands.push_jump(JUMP_SIZE);
    }

    /// Finishes a frame and z-orders the command stream.
    ///
    /// # Panics
    ///
    /// Panics if any id, clip, container or layout scope is still open.
    #[track_caller]
    pub fn end(&mut self) {
        let depths = self.stack_depths();
        assert!(
            depths == StackDepths::default(),
            "unbalanced scopes at end of frame: {depths:?}"
        );

        if let Some(target) = self.scroll_target {
            let delta = self.input.scroll_delta;
            let container = self.containers.get_mut(target);
            container.scroll.x += delta.x;
            container.scroll.y += delta.y;
        }

        if !self.updated_focus {
            self.focus = None;
        }
        self.updated_focus = false;

        if !self.input.mouse_pressed.is_empty() {
            if let Some(root) = self.next_hover_root {
                let zindex = self.containers.get(root).zindex;
                if (0..self.last_zindex).contains(&zindex) {
                    self.bring_to_front(root);
                    tracing::debug!(zindex, "raised clicked root container");
                }
            }
        }

        self.input.end_frame();

        let containers = &self.containers;
        self.root_list
            .as_mut_slice()
            .sort_by_key(|&handle| containers.get(handle).zindex);

        let mut previous_tail = 0;
        for &handle in self.root_list.iter() {
            let container = self.containers.get(handle);
            let (Some(head), Some(tail)) = (container.head, container.tail) else {
                panic!("root container closed without its jump entries");
            };
            self.commands.set_jump(previous_tail, head + JUMP_SIZE);
            previous_tail = tail;
        }
        if !self.root_list.is_empty() {
            let end = self.commands.len();
            self.commands.set_jump(previous_tail, end);
        }

        tracing::trace!(
            frame = self.frame,
            roots = self.root_list.len(),
            command_bytes = self.commands.len(),
            "frame complete"
        );
    }

    /// Returns the current depth of every scoped stack.
    #[must_use]
    pub fn stack_depths(&self) -> StackDepths {
        StackDepths {
            ids: self.id_stack.len(),
            clips: self.clips.len(),
            containers: self.container_stack.len(),
            layouts: self.layout_stack.len(),
        }
    }

    // =========================================================================
    // IDENTITY
    // =========================================================================

    /// Hashes `data` within the current id scope.
    pub fn get_id(&mut self, data: &[u8]) -> Id {
        let id = Id::hash(self.id_stack.top().copied(), data);
        self.last_id = id;
        id
    }

    /// Hashes the address of `value`, for widgets bound to a variable.
    ///
    /// The variable must stay at the same address across frames for the
    /// widget to keep its state.
    pub fn get_id_of<T>(&mut self, value: &T) -> Id {
        let address = (value as *const T).cast::<()>() as usize;
        self.get_id(&address.to_ne_bytes())
    }

    /// Opens an id scope named by `data`.
    #[track_caller]
    pub fn push_id(&mut self, data: &[u8]) {
        let id = self.get_id(data);
        self.id_stack.push(id);
    }

    #[track_caller]
    pub(crate) fn push_raw_id(&mut self, id: Id) {
        self.id_stack.push(id);
    }

    /// Closes the innermost id scope.
    #[track_caller]
    pub fn pop_id(&mut self) {
        let _ = self.id_stack.pop();
    }

    /// Returns the id most recently produced by [`get_id`](Self::get_id).
    #[inline]
    #[must_use]
    pub fn last_id(&self) -> Id {
        self.last_id
    }

    // =========================================================================
    // CLIPPING
    // =========================================================================

    /// Pushes `rect` intersected with the current clip rect.
    #[track_caller]
    pub fn push_clip_rect(&mut self, rect: Rect) {
        self.clips.push(rect);
    }

    /// Pops the innermost clip rect.
    #[track_caller]
    pub fn pop_clip_rect(&mut self) {
        self.clips.pop();
    }

    /// Returns the current clip rect.
    #[must_use]
    pub fn get_clip_rect(&self) -> Rect {
        self.clips.current()
    }

    /// Classifies `rect` against the current clip rect.
    #[must_use]
    pub fn check_clip(&self, rect: Rect) -> Clip {
        self.clips.check(rect)
    }

    // =========================================================================
    // DRAWING
    // =========================================================================

    /// Emits a raw clip command.
    pub fn set_clip(&mut self, rect: Rect) {
        self.painter().set_clip(rect);
    }

    /// Fills a rect, clipped.
    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.painter().draw_rect(rect, color);
    }

    /// Outlines a rect.
    pub fn draw_box(&mut self, rect: Rect, color: Color) {
        self.painter().draw_box(rect, color);
    }

    /// Draws text at `pos`.
    pub fn draw_text(&mut self, font: FontId, text: &str, pos: Vec2, color: Color) {
        self.painter().draw_text(font, text, pos, color);
    }

    /// Draws an icon centered in `rect`.
    pub fn draw_icon(&mut self, icon: Icon, rect: Rect, color: Color) {
        self.painter().draw_icon(icon, rect, color);
    }

    /// Draws a frame through the backend's [`Backend::draw_frame`].
    pub fn draw_frame(&mut self, rect: Rect, color: ColorId) {
        let mut painter = self.painter();
        let backend = painter.backend();
        backend.draw_frame(&mut painter, rect, color);
    }

    // =========================================================================
    // INPUT
    // =========================================================================

    /// Moves the pointer.
    pub fn input_mouse_move(&mut self, x: i32, y: i32) {
        self.input.mouse_move(x, y);
    }

    /// Presses `button` at a position.
    pub fn input_mouse_down(&mut self, x: i32, y: i32, button: MouseButton) {
        self.input.mouse_down(x, y, button);
    }

    /// Releases `button` at a position.
    pub fn input_mouse_up(&mut self, x: i32, y: i32, button: MouseButton) {
        self.input.mouse_up(x, y, button);
    }

    /// Scrolls the wheel.
    pub fn input_scroll(&mut self, x: i32, y: i32) {
        self.input.scroll(x, y);
    }

    /// Presses a key.
    pub fn input_key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    /// Releases a key.
    pub fn input_key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// Queues typed text.
    ///
    /// # Panics
    ///
    /// Panics if more than the per-frame text capacity is queued.
    #[track_caller]
    pub fn input_text(&mut self, text: &str) {
        self.input.push_text(text);
    }

    /// Returns the input snapshot.
    #[inline]
    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    // =========================================================================
    // OUTPUT & STATE
    // =========================================================================

    /// Iterates this frame's draw commands in z order.
    #[must_use]
    pub fn commands(&self) -> Commands<'_> {
        self.commands.iter()
    }

    /// Decodes the command after `cursor` (`None` for the first).
    #[must_use]
    pub fn next_command(&self, cursor: Option<usize>) -> Option<(usize, Command<'_>)> {
        self.commands.next_command(cursor)
    }

    /// Returns the raw command buffer.
    #[inline]
    #[must_use]
    pub fn command_buffer(&self) -> &CommandBuffer {
        &self.commands
    }

    /// Returns the hovered control.
    #[inline]
    #[must_use]
    pub fn hover(&self) -> Option<Id> {
        self.hover
    }

    /// Returns the focused control.
    #[inline]
    #[must_use]
    pub fn focus(&self) -> Option<Id> {
        self.focus
    }

    /// Returns the root container receiving hover this frame.
    #[inline]
    #[must_use]
    pub fn hover_root(&self) -> Option<ContainerHandle> {
        self.hover_root
    }

    /// Returns the rect most recently produced by the layout.
    #[inline]
    #[must_use]
    pub fn last_rect(&self) -> Rect {
        self.last_rect
    }

    /// Returns the number of frames begun so far.
    #[inline]
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{context, FixedMetrics};

    #[test]
    #[should_panic(expected = "no backend installed")]
    fn test_begin_without_backend_is_fatal() {
        let mut ctx = Context::default();
        ctx.begin();
    }

    #[test]
    fn test_empty_frame_has_no_commands() {
        let mut ctx = context();
        ctx.begin();
        ctx.end();
        assert_eq!(ctx.commands().count(), 0);
        assert_eq!(ctx.frame(), 1);
    }

    #[test]
    fn test_draws_outside_roots_are_kept_without_roots() {
        let mut ctx = context();
        ctx.begin();
        ctx.draw_rect(Rect::new(0, 0, 10, 10), Color::WHITE);
        ctx.end();
        assert_eq!(ctx.commands().count(), 1);
    }

    #[test]
    fn test_id_scopes() {
        let mut ctx = Context::default().with_backend(FixedMetrics);
        let bare = ctx.get_id(b"ok");
        ctx.push_id(b"window");
        let scoped = ctx.get_id(b"ok");
        assert_eq!(ctx.last_id(), scoped);
        ctx.pop_id();
        assert_ne!(bare, scoped);
        assert_eq!(ctx.get_id(b"ok"), bare);
    }

    #[test]
    fn test_id_of_tracks_address() {
        let mut ctx = context();
        let a = 1.0_f32;
        let b = 1.0_f32;
        assert_eq!(ctx.get_id_of(&a), ctx.get_id_of(&a));
        assert_ne!(ctx.get_id_of(&a), ctx.get_id_of(&b));
    }

    #[test]
    #[should_panic(expected = "unbalanced scopes")]
    fn test_unbalanced_id_scope_is_fatal() {
        let mut ctx = context();
        ctx.begin();
        ctx.push_id(b"leak");
        ctx.end();
    }

    #[test]
    fn test_dead_draw_is_elided() {
        let mut ctx = context();
        ctx.begin();
        ctx.push_clip_rect(Rect::new(0, 0, 50, 50));
        let before = ctx.command_buffer().len();
        ctx.draw_rect(Rect::new(100, 100, 10, 10), Color::WHITE);
        assert_eq!(ctx.command_buffer().len(), before);
        ctx.pop_clip_rect();
        ctx.end();
    }

    #[test]
    fn test_scroll_and_pressed_reset_after_end() {
        let mut ctx = context();
        ctx.input_scroll(0, 30);
        ctx.input_key_down(Key::RETURN);
        ctx.begin();
        ctx.end();
        assert_eq!(ctx.input().scroll_delta, Vec2::ZERO);
        assert!(ctx.input().key_pressed.is_empty());
        assert!(ctx.input().key_down.contains(Key::RETURN));
    }
}
