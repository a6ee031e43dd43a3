//! # Arena Allocator
//!
//! A bump allocator over a fixed byte buffer. Allocations are addressed by
//! offset and freed all at once by [`Arena::reset`].

use bytemuck::Pod;

use crate::error::CapacityError;

/// A bump-pointer byte arena.
///
/// Values are stored as raw bytes through [`bytemuck`], so reads and writes
/// need no alignment and no unsafe code. Every access is bounds-checked
/// against the allocated region.
///
/// # Thread Safety
///
/// This arena is NOT thread-safe. Use one arena per context.
///
/// # Example
///
/// ```rust
/// use tessera_core::Arena;
///
/// let mut arena = Arena::new(64);
/// let at = arena.alloc(4);
/// arena.write(at, &0xdead_beef_u32);
/// assert_eq!(arena.read::<u32>(at), 0xdead_beef);
///
/// arena.reset();
/// assert_eq!(arena.used(), 0);
/// ```
#[derive(Debug)]
pub struct Arena {
    /// The backing storage, allocated once.
    storage: Box<[u8]>,
    /// Current allocation offset.
    offset: usize,
}

impl Arena {
    /// Creates a new arena with the specified capacity in bytes.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            storage: vec![0u8; capacity].into_boxed_slice(),
            offset: 0,
        }
    }

    /// Returns the total capacity in bytes.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the current used space in bytes.
    #[inline]
    #[must_use]
    pub const fn used(&self) -> usize {
        self.offset
    }

    /// Returns the remaining free space in bytes.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.offset
    }

    /// Reserves `size` bytes and returns their offset.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::ArenaFull`] if fewer than `size` bytes remain.
    pub fn try_alloc(&mut self, size: usize) -> Result<usize, CapacityError> {
        if size > self.remaining() {
            return Err(CapacityError::ArenaFull {
                requested: size,
                remaining: self.remaining(),
            });
        }
        let at = self.offset;
        self.offset += size;
        Ok(at)
    }

    /// Reserves `size` bytes and returns their offset.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `size` bytes remain.
    #[track_caller]
    pub fn alloc(&mut self, size: usize) -> usize {
        match self.try_alloc(size) {
            Ok(at) => at,
            Err(err) => panic!("{err}"),
        }
    }

    /// Writes `value` at offset `at`.
    ///
    /// # Panics
    ///
    /// Panics if the write extends past the allocated region.
    #[track_caller]
    pub fn write<T: Pod>(&mut self, at: usize, value: &T) {
        self.write_bytes(at, bytemuck::bytes_of(value));
    }

    /// Copies `bytes` to offset `at`.
    ///
    /// # Panics
    ///
    /// Panics if the write extends past the allocated region.
    #[track_caller]
    pub fn write_bytes(&mut self, at: usize, bytes: &[u8]) {
        let end = self.checked_end(at, bytes.len());
        self.storage[at..end].copy_from_slice(bytes);
    }

    /// Reads a `T` stored at offset `at`.
    ///
    /// # Panics
    ///
    /// Panics if the read extends past the allocated region.
    #[track_caller]
    #[must_use]
    pub fn read<T: Pod>(&self, at: usize) -> T {
        bytemuck::pod_read_unaligned(self.bytes(at, std::mem::size_of::<T>()))
    }

    /// Returns `len` bytes starting at offset `at`.
    ///
    /// # Panics
    ///
    /// Panics if the range extends past the allocated region.
    #[track_caller]
    #[must_use]
    pub fn bytes(&self, at: usize, len: usize) -> &[u8] {
        let end = self.checked_end(at, len);
        &self.storage[at..end]
    }

    /// Resets the arena, invalidating all previous offsets.
    ///
    /// This is a **zero-cost** operation - no memory is freed or reallocated.
    #[inline]
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    #[track_caller]
    fn checked_end(&self, at: usize, len: usize) -> usize {
        let end = at.saturating_add(len);
        assert!(
            end <= self.offset,
            "arena access out of bounds: {at}..{end} beyond {} used bytes",
            self.offset
        );
        end
    }
}
