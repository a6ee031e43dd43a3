//! # LRU Slot Pool
//!
//! Fixed set of `(key, last-used-frame)` slots. Callers keep their per-key
//! state in a parallel array indexed by slot, and the pool decides which slot
//! a new key may take over.

/// One pool slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolItem<K> {
    /// Key bound to this slot, `None` when the slot was never claimed or was
    /// released.
    pub key: Option<K>,
    /// Frame number of the last [`LruPool::update`] on this slot.
    pub last_update: u64,
}

/// A pool of `N` slots with least-recently-used eviction.
///
/// Lookups are a linear scan; `N` is small (tens of slots) so this beats any
/// hashed structure and keeps the pool allocation-free.
///
/// # Thread Safety
///
/// This pool is NOT thread-safe. It belongs to one UI context.
///
/// # Example
///
/// ```rust
/// use tessera_core::LruPool;
///
/// let mut pool: LruPool<u32, 2> = LruPool::new();
/// let slot = pool.init(42, 1);
/// assert_eq!(pool.get(42), Some(slot));
/// ```
#[derive(Clone, Debug)]
pub struct LruPool<K, const N: usize> {
    /// The slot array.
    items: [PoolItem<K>; N],
}

impl<K: Copy + Eq, const N: usize> LruPool<K, N> {
    /// Creates a pool with every slot empty and never touched.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: [PoolItem {
                key: None,
                last_update: 0,
            }; N],
        }
    }

    /// Returns the total capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Finds the slot bound to `key`.
    #[must_use]
    pub fn get(&self, key: K) -> Option<usize> {
        self.items.iter().position(|item| item.key == Some(key))
    }

    /// Binds `key` to the least recently touched slot and stamps it with
    /// `frame`.
    ///
    /// Only slots last touched before `frame` are candidates; ties resolve to
    /// the lowest index.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::PoolExhausted`](crate::CapacityError::PoolExhausted)
    /// if every slot was touched during `frame`.
    pub fn try_init(&mut self, key: K, frame: u64) -> Result<usize, crate::CapacityError> {
        let mut oldest = frame;
        let mut slot = None;
        for (index, item) in self.items.iter().enumerate() {
            if item.last_update < oldest {
                oldest = item.last_update;
                slot = Some(index);
            }
        }

        let index = slot.ok_or(crate::CapacityError::PoolExhausted { capacity: N })?;
        if self.items[index].key.is_some() {
            tracing::trace!(slot = index, last_update = oldest, "evicting pool slot");
        }
        self.items[index].key = Some(key);
        self.update(index, frame);
        Ok(index)
    }

    /// Binds `key` to the least recently touched slot.
    ///
    /// # Panics
    ///
    /// Panics if every slot was touched during `frame`.
    #[track_caller]
    pub fn init(&mut self, key: K, frame: u64) -> usize {
        match self.try_init(key, frame) {
            Ok(index) => index,
            Err(err) => panic!("{err}"),
        }
    }

    /// Marks `index` as used during `frame`.
    #[inline]
    pub fn update(&mut self, index: usize, frame: u64) {
        self.items[index].last_update = frame;
    }

    /// Unbinds `index` and makes it the first eviction candidate.
    #[inline]
    pub fn release(&mut self, index: usize) {
        self.items[index] = PoolItem {
            key: None,
            last_update: 0,
        };
    }

    /// Returns the slot at `index`.
    #[inline]
    #[must_use]
    pub fn item(&self, index: usize) -> &PoolItem<K> {
        &self.items[index]
    }
}

impl<K: Copy + Eq, const N: usize> Default for LruPool<K, N> {
    fn default() -> Self {
        Self::new()
    }
}
