//! # Tessera UI
//!
//! Immediate-mode interface engine that turns per-frame widget calls into a
//! compact draw-command stream:
//! - Widget state (hover, focus, scroll, open/closed) keyed by hashed ids
//! - Every draw call is one record in a single pre-allocated buffer
//! - Windows are z-ordered after the fact by patching jump records
//! - The renderer is external and only needs text metrics
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        FRAME PIPELINE                      │
//! ├────────────────────────────────────────────────────────────┤
//! │  input_*() → begin() → windows/widgets → end() → commands()│
//! │      ↓           ↓             ↓            ↓        ↓     │
//! │  InputState  hover root   Layout + ids   z-sort   renderer │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Philosophy
//!
//! - The caller owns the data, the context owns only what must persist
//! - Fixed capacities everywhere; exhaustion is a fatal bug
//! - One thread, one context

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod clip;
pub mod command;
pub mod constants;
pub mod container;
pub mod context;
mod control;
pub mod error;
pub mod geometry;
pub mod id;
pub mod input;
mod layout;
pub mod options;
pub mod painter;
pub mod style;
pub mod widget;
mod window;

pub use clip::{Clip, ClipStack};
pub use command::{Command, CommandBuffer, Commands, Icon, JUMP_SIZE};
pub use container::{Container, ContainerHandle};
pub use context::{Context, StackDepths};
pub use error::{StyleError, StyleResult};
pub use geometry::{Color, Rect, Vec2};
pub use id::Id;
pub use input::{InputState, Key, MouseButton};
pub use options::{Options, Response};
pub use painter::{Backend, Painter};
pub use style::{ColorId, FontId, Style};
pub use widget::EditMode;
