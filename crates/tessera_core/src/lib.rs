//! # Tessera Core
//!
//! Fixed-capacity memory primitives for the Tessera immediate-mode UI engine:
//! - Bounded stacks for every scoped begin/end pair
//! - LRU slot pools that retain per-id state across frames
//! - A byte arena addressed by offset, backing the command stream
//!
//! ## Architecture Rules
//!
//! 1. **No growth after construction** - capacities are fixed up front
//! 2. **Exhaustion is fatal** - the `push`/`init`/`alloc` entry points panic,
//!    the `try_*` variants report a [`CapacityError`] instead
//! 3. **Offsets, not pointers** - arena positions stay valid wherever the
//!    storage lives

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod memory;

pub use error::CapacityError;
pub use memory::{Arena, BoundedStack, LruPool, PoolItem};
