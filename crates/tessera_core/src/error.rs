//! # Capacity Error Types
//!
//! Every way a fixed-capacity structure can be exhausted or misused.

use thiserror::Error;

/// Errors raised by the fixed-capacity containers.
///
/// The engine treats all of these as programmer error: undersized limits or
/// unbalanced begin/end pairs. The fallible `try_*` entry points return them,
/// the plain entry points panic with their `Display` text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    /// A push found the stack already full.
    #[error("stack overflow: all {capacity} slots in use")]
    Overflow {
        /// Fixed capacity of the stack.
        capacity: usize,
    },

    /// A pop or peek found the stack empty.
    #[error("stack underflow: pop from an empty stack")]
    Underflow,

    /// No pool slot was old enough to evict.
    #[error("pool exhausted: all {capacity} slots were touched this frame")]
    PoolExhausted {
        /// Fixed capacity of the pool.
        capacity: usize,
    },

    /// The arena cannot fit the requested allocation.
    #[error("arena full: requested {requested} bytes with {remaining} remaining")]
    ArenaFull {
        /// Bytes requested.
        requested: usize,
        /// Bytes still available.
        remaining: usize,
    },
}
