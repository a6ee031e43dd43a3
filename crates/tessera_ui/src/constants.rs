//! # Engine Limits
//!
//! Fixed capacities for every pre-allocated structure in a [`Context`].
//!
//! **CRITICAL:** These are compile-time limits. Exceeding any of them at
//! runtime is fatal; raise the constant instead.
//!
//! [`Context`]: crate::Context

// =============================================================================
// COMMAND STREAM
// =============================================================================

/// Bytes reserved for one frame's command buffer.
pub const COMMAND_BUFFER_SIZE: usize = 256 * 1024;

/// Maximum root containers (windows, popups) per frame.
pub const ROOT_LIST_SIZE: usize = 32;

// =============================================================================
// SCOPED STACKS
// =============================================================================

/// Maximum container nesting depth.
pub const CONTAINER_STACK_SIZE: usize = 32;

/// Maximum clip rect nesting depth.
pub const CLIP_STACK_SIZE: usize = 32;

/// Maximum id scope nesting depth.
pub const ID_STACK_SIZE: usize = 32;

/// Maximum layout (column) nesting depth.
pub const LAYOUT_STACK_SIZE: usize = 16;

// =============================================================================
// RETAINED STATE
// =============================================================================

/// Containers retained across frames.
pub const CONTAINER_POOL_SIZE: usize = 48;

/// Expanded tree nodes / headers retained across frames.
pub const TREENODE_POOL_SIZE: usize = 48;

// =============================================================================
// LAYOUT & INPUT
// =============================================================================

/// Maximum columns in one layout row.
pub const MAX_WIDTHS: usize = 16;

/// Bytes of text input accepted per frame.
pub const INPUT_TEXT_SIZE: usize = 32;

/// Maximum length of a formatted number.
pub const MAX_FMT: usize = 127;

/// Extent used for "unbounded" rectangles on each axis.
pub const UNBOUNDED_EXTENT: i32 = 0x100_0000;
