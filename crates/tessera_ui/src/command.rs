//! # Command Buffer
//!
//! Every draw call of a frame is appended to one pre-allocated byte buffer as
//! a size-prefixed entry. Windows are z-ordered after the fact: each root
//! container is bracketed by a head and a tail `Jump` entry, and `end()` only
//! rewrites jump targets to chain the roots in z order. No bytes move.
//!
//! ```text
//! [lead jump] ... [head A][A draws][tail A] [head B][B draws][tail B]
//!      │                                    ▲                  │
//!      └────────────────────────────────────┘    (B below A)   │
//!                 ▲                                            │
//!                 └────────────────────────────────────────────┘
//! ```
//!
//! Consumers never see jumps; [`CommandBuffer::next_command`] follows them.

use bytemuck::{Pod, Zeroable};
use tessera_core::Arena;

use crate::constants::COMMAND_BUFFER_SIZE;
use crate::geometry::{Color, Rect, Vec2};
use crate::style::FontId;

// =============================================================================
// WIRE FORMAT
// =============================================================================

const KIND_JUMP: u32 = 1;
const KIND_CLIP: u32 = 2;
const KIND_RECT: u32 = 3;
const KIND_TEXT: u32 = 4;
const KIND_ICON: u32 = 5;

/// Entry prefix: kind tag and total entry size in bytes.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Header {
    kind: u32,
    size: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct JumpPayload {
    target: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct ClipPayload {
    rect: Rect,
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct RectPayload {
    rect: Rect,
    color: Color,
}

/// Fixed part of a text entry; `len` UTF-8 bytes follow it.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct TextPayload {
    font: u32,
    pos: Vec2,
    color: Color,
    len: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct IconPayload {
    icon: u32,
    rect: Rect,
    color: Color,
}

const HEADER_SIZE: usize = std::mem::size_of::<Header>();

/// Total size of a jump entry.
pub const JUMP_SIZE: usize = HEADER_SIZE + std::mem::size_of::<JumpPayload>();

// =============================================================================
// PUBLIC TYPES
// =============================================================================

/// Built-in icon identifier. Backends map these to glyphs; values above
/// [`Icon::EXPANDED`] are free for application use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Icon(pub u32);

impl Icon {
    /// Window close cross.
    pub const CLOSE: Self = Self(1);
    /// Checkbox tick.
    pub const CHECK: Self = Self(2);
    /// Collapsed tree node arrow.
    pub const COLLAPSED: Self = Self(3);
    /// Expanded tree node arrow.
    pub const EXPANDED: Self = Self(4);
}

/// One decoded draw command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Set the scissor rect for following commands.
    Clip {
        /// New clip rect.
        rect: Rect,
    },
    /// Fill a rectangle.
    Rect {
        /// Area to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Draw a run of text.
    Text {
        /// Font to draw with.
        font: FontId,
        /// Top-left of the text.
        pos: Vec2,
        /// Text color.
        color: Color,
        /// The text itself, borrowed from the buffer.
        text: &'a str,
    },
    /// Draw an icon centered in a rect.
    Icon {
        /// Which icon.
        icon: Icon,
        /// Area to center it in.
        rect: Rect,
        /// Icon color.
        color: Color,
    },
}

/// Append-only command stream for one frame.
#[derive(Debug)]
pub struct CommandBuffer {
    arena: Arena,
}

impl Default for CommandBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandBuffer {
    /// Allocates a buffer of the standard size.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(COMMAND_BUFFER_SIZE)
    }

    /// Allocates a buffer of `bytes` bytes.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            arena: Arena::new(bytes),
        }
    }

    /// Drops every command.
    #[inline]
    pub fn clear(&mut self) {
        self.arena.reset();
    }

    /// Returns the number of bytes written.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.arena.used()
    }

    /// Returns true if nothing has been written.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the fixed capacity in bytes.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Reserves an entry of `kind` with `payload` bytes after the header and
    /// returns the entry offset.
    #[track_caller]
    fn push_command(&mut self, kind: u32, payload: usize) -> usize {
        let size = HEADER_SIZE + payload;
        let at = match self.arena.try_alloc(size) {
            Ok(at) => at,
            Err(err) => panic!("command buffer overflow: {err}"),
        };
        self.arena.write(
            at,
            &Header {
                kind,
                size: to_u32(size),
            },
        );
        at
    }

    /// Appends a jump to `target` and returns the jump's offset.
    #[track_caller]
    pub fn push_jump(&mut self, target: usize) -> usize {
        let at = self.push_command(KIND_JUMP, std::mem::size_of::<JumpPayload>());
        self.set_jump(at, target);
        at
    }

    /// Retargets the jump entry at `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at` is not the offset of a jump entry.
    #[track_caller]
    pub fn set_jump(&mut self, at: usize, target: usize) {
        let header: Header = self.arena.read(at);
        assert_eq!(header.kind, KIND_JUMP, "no jump entry at offset {at}");
        self.arena.write(
            at + HEADER_SIZE,
            &JumpPayload {
                target: to_u32(target),
            },
        );
    }

    /// Appends a clip command.
    #[track_caller]
    pub fn push_clip(&mut self, rect: Rect) {
        let at = self.push_command(KIND_CLIP, std::mem::size_of::<ClipPayload>());
        self.arena.write(at + HEADER_SIZE, &ClipPayload { rect });
    }

    /// Appends a filled rectangle.
    #[track_caller]
    pub fn push_rect(&mut self, rect: Rect, color: Color) {
        let at = self.push_command(KIND_RECT, std::mem::size_of::<RectPayload>());
        self.arena.write(at + HEADER_SIZE, &RectPayload { rect, color });
    }

    /// Appends a text run; the string is copied into the buffer.
    #[track_caller]
    pub fn push_text(&mut self, font: FontId, pos: Vec2, color: Color, text: &str) {
        let fixed = std::mem::size_of::<TextPayload>();
        let at = self.push_command(KIND_TEXT, fixed + text.len());
        self.arena.write(
            at + HEADER_SIZE,
            &TextPayload {
                font: font.0,
                pos,
                color,
                len: to_u32(text.len()),
            },
        );
        self.arena
            .write_bytes(at + HEADER_SIZE + fixed, text.as_bytes());
    }

    /// Appends an icon.
    #[track_caller]
    pub fn push_icon(&mut self, icon: Icon, rect: Rect, color: Color) {
        let at = self.push_command(KIND_ICON, std::mem::size_of::<IconPayload>());
        self.arena.write(
            at + HEADER_SIZE,
            &IconPayload {
                icon: icon.0,
                rect,
                color,
            },
        );
    }

    /// Decodes the next visible command.
    ///
    /// Pass `None` to start at the beginning, then the returned cursor.
    /// Jumps are followed transparently; `None` is returned at the end of the
    /// written region.
    ///
    /// # Panics
    ///
    /// Panics if a jump points outside the written region.
    #[must_use]
    pub fn next_command(&self, cursor: Option<usize>) -> Option<(usize, Command<'_>)> {
        let end = self.len();
        let mut at = cursor.unwrap_or(0);
        while at < end {
            let header: Header = self.arena.read(at);
            let body = at + HEADER_SIZE;
            let next = at + header.size as usize;
            let command = match header.kind {
                KIND_JUMP => {
                    let jump: JumpPayload = self.arena.read(body);
                    let target = jump.target as usize;
                    assert!(
                        target <= end,
                        "jump target {target} beyond command buffer end {end}"
                    );
                    at = target;
                    continue;
                }
                KIND_CLIP => {
                    let clip: ClipPayload = self.arena.read(body);
                    Command::Clip { rect: clip.rect }
                }
                KIND_RECT => {
                    let fill: RectPayload = self.arena.read(body);
                    Command::Rect {
                        rect: fill.rect,
                        color: fill.color,
                    }
                }
                KIND_TEXT => {
                    let text: TextPayload = self.arena.read(body);
                    let bytes = self.arena.bytes(
                        body + std::mem::size_of::<TextPayload>(),
                        text.len as usize,
                    );
                    Command::Text {
                        font: FontId(text.font),
                        pos: text.pos,
                        color: text.color,
                        text: std::str::from_utf8(bytes).unwrap_or_default(),
                    }
                }
                KIND_ICON => {
                    let icon: IconPayload = self.arena.read(body);
                    Command::Icon {
                        icon: Icon(icon.icon),
                        rect: icon.rect,
                        color: icon.color,
                    }
                }
                kind => panic!("corrupt command buffer: unknown kind {kind} at offset {at}"),
            };
            return Some((next, command));
        }
        None
    }

    /// Iterates visible commands in draw order.
    #[must_use]
    pub fn iter(&self) -> Commands<'_> {
        Commands {
            buffer: self,
            cursor: None,
        }
    }
}

/// Iterator over a [`CommandBuffer`] in z order.
#[derive(Debug, Clone)]
pub struct Commands<'a> {
    buffer: &'a CommandBuffer,
    cursor: Option<usize>,
}

impl<'a> Iterator for Commands<'a> {
    type Item = Command<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (next, command) = self.buffer.next_command(self.cursor)?;
        self.cursor = Some(next);
        Some(command)
    }
}

impl<'a> IntoIterator for &'a CommandBuffer {
    type Item = Command<'a>;
    type IntoIter = Commands<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Offsets and lengths are bounded by the buffer size, which fits in `u32`.
#[track_caller]
fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| panic!("command offset {value} exceeds u32"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_colors(buffer: &CommandBuffer) -> Vec<u8> {
        buffer
            .iter()
            .filter_map(|cmd| match cmd {
                Command::Rect { color, .. } => Some(color.r),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_commands_decode_in_order() {
        let mut buffer = CommandBuffer::new();
        buffer.push_clip(Rect::new(0, 0, 10, 10));
        buffer.push_rect(Rect::new(1, 2, 3, 4), Color::WHITE);
        buffer.push_text(FontId(3), Vec2::new(5, 6), Color::BLACK, "héllo");
        buffer.push_icon(Icon::CHECK, Rect::new(7, 8, 9, 10), Color::WHITE);

        let commands: Vec<_> = buffer.iter().collect();
        assert_eq!(
            commands,
            vec![
                Command::Clip {
                    rect: Rect::new(0, 0, 10, 10)
                },
                Command::Rect {
                    rect: Rect::new(1, 2, 3, 4),
                    color: Color::WHITE
                },
                Command::Text {
                    font: FontId(3),
                    pos: Vec2::new(5, 6),
                    color: Color::BLACK,
                    text: "héllo"
                },
                Command::Icon {
                    icon: Icon::CHECK,
                    rect: Rect::new(7, 8, 9, 10),
                    color: Color::WHITE
                },
            ]
        );
    }

    #[test]
    fn test_jumps_are_hidden_and_followed() {
        let mut buffer = CommandBuffer::new();
        let lead = buffer.push_jump(0);
        let skipped = buffer.len();
        buffer.push_rect(Rect::new(0, 0, 1, 1), Color::rgb(1, 0, 0));
        let shown = buffer.len();
        buffer.push_rect(Rect::new(0, 0, 1, 1), Color::rgb(2, 0, 0));
        assert!(skipped > lead);

        buffer.set_jump(lead, shown);
        assert_eq!(rect_colors(&buffer), vec![2]);
    }

    #[test]
    fn test_reordering_two_blocks() {
        let mut buffer = CommandBuffer::new();
        let lead = buffer.push_jump(JUMP_SIZE);

        let head_a = buffer.push_jump(0);
        buffer.push_rect(Rect::ZERO, Color::rgb(10, 0, 0));
        let tail_a = buffer.push_jump(0);

        let head_b = buffer.push_jump(0);
        buffer.push_rect(Rect::ZERO, Color::rgb(20, 0, 0));
        let tail_b = buffer.push_jump(0);

        // B first, then A.
        buffer.set_jump(lead, head_b + JUMP_SIZE);
        buffer.set_jump(tail_b, head_a + JUMP_SIZE);
        buffer.set_jump(tail_a, buffer.len());

        assert_eq!(rect_colors(&buffer), vec![20, 10]);
    }

    #[test]
    fn test_clear_resets() {
        let mut buffer = CommandBuffer::new();
        buffer.push_rect(Rect::ZERO, Color::WHITE);
        assert!(!buffer.is_empty());
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.iter().count(), 0);
    }

    #[test]
    #[should_panic(expected = "command buffer overflow")]
    fn test_overflow_is_fatal() {
        let mut buffer = CommandBuffer::with_capacity(32);
        buffer.push_rect(Rect::ZERO, Color::WHITE);
        buffer.push_rect(Rect::ZERO, Color::WHITE);
    }

    #[test]
    #[should_panic(expected = "beyond command buffer end")]
    fn test_out_of_bounds_jump_is_fatal() {
        let mut buffer = CommandBuffer::new();
        let _ = buffer.push_jump(4096);
        let _ = buffer.next_command(None);
    }
}
