//! # Bounded Stack
//!
//! Fixed-capacity LIFO used for every scoped stack in the engine (ids, clip
//! rects, containers, layouts, root lists).

use crate::error::CapacityError;

/// A stack with a compile-time capacity of `N` items.
///
/// Storage is an inline array, so pushing never allocates. Overflow and
/// underflow are fatal through [`push`](Self::push) / [`pop`](Self::pop);
/// [`try_push`](Self::try_push) / [`try_pop`](Self::try_pop) report them
/// instead.
///
/// # Example
///
/// ```rust
/// use tessera_core::BoundedStack;
///
/// let mut stack: BoundedStack<u32, 4> = BoundedStack::new();
/// stack.push(7);
/// assert_eq!(stack.top(), Some(&7));
/// assert_eq!(stack.pop(), 7);
/// assert!(stack.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct BoundedStack<T, const N: usize> {
    /// Inline storage; only `items[..len]` is live.
    items: [T; N],
    /// Number of live items.
    len: usize,
}

impl<T: Copy + Default, const N: usize> BoundedStack<T, N> {
    /// Creates an empty stack with every slot default-initialized.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: [T::default(); N],
            len: 0,
        }
    }
}

impl<T: Copy + Default, const N: usize> Default for BoundedStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize> BoundedStack<T, N> {
    /// Returns the fixed capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of live items.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing is on the stack.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pushes a value, reporting overflow instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::Overflow`] if the stack is full.
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityError> {
        if self.len == N {
            return Err(CapacityError::Overflow { capacity: N });
        }
        self.items[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Pushes a value.
    ///
    /// # Panics
    ///
    /// Panics if the stack is full.
    #[track_caller]
    pub fn push(&mut self, value: T) {
        if let Err(err) = self.try_push(value) {
            panic!("{err}");
        }
    }

    /// Pops the top value, reporting underflow instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::Underflow`] if the stack is empty.
    pub fn try_pop(&mut self) -> Result<T, CapacityError> {
        if self.len == 0 {
            return Err(CapacityError::Underflow);
        }
        self.len -= 1;
        Ok(self.items[self.len])
    }

    /// Pops the top value.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[track_caller]
    pub fn pop(&mut self) -> T {
        match self.try_pop() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the top value, if any.
    #[inline]
    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the top value mutably, if any.
    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Drops every item. No memory is released.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Live items, bottom first.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.len]
    }

    /// Live items mutably, bottom first.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items[..self.len]
    }

    /// Iterates live items, bottom first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.as_slice().iter()
    }
}
