//! # Memory Management
//!
//! Pre-allocated stacks, pools and arenas.
//!
//! ## Design Philosophy
//!
//! All memory is allocated once when the owning context is built. During a
//! frame:
//! - No heap allocations
//! - No reallocation, so offsets captured mid-frame stay valid
//! - Exhaustion is reported, never absorbed

mod arena;
mod pool;
mod stack;

pub use arena::Arena;
pub use pool::{LruPool, PoolItem};
pub use stack::BoundedStack;
