//! # Containers
//!
//! Windows, popups and panels keep a [`Container`] alive across frames. The
//! container array is fixed; an [`LruPool`] decides which slot an id owns and
//! recycles slots nobody has touched for the longest time.
//!
//! ## Architecture Rules
//!
//! 1. **Handles, not references** - callers hold a [`ContainerHandle`] (a slot
//!    index) and go through the [`Context`] to read or write the container
//! 2. **One slot per id** - a lookup either finds the live slot or claims a
//!    fresh one
//! 3. **Z-index is monotonic** - [`Context::bring_to_front`] always hands out
//!    a higher value than any before it

use tessera_core::LruPool;

use crate::constants::CONTAINER_POOL_SIZE;
use crate::context::Context;
use crate::geometry::{Rect, Vec2};
use crate::id::Id;
use crate::options::Options;

/// Persistent state of one window, popup or panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Container {
    /// Outer rect, including title bar and frame.
    pub rect: Rect,
    /// Content area, after title bar and scrollbars.
    pub body: Rect,
    /// Extent of the content laid out last frame.
    pub content_size: Vec2,
    /// Scroll offset of the content.
    pub scroll: Vec2,
    /// Draw order among root containers; higher is on top.
    pub zindex: i32,
    /// False once closed; a closed container is skipped until reopened.
    pub open: bool,
    /// Offset of the head jump; set only on root containers.
    pub(crate) head: Option<usize>,
    /// Offset of the tail jump; set only on root containers.
    pub(crate) tail: Option<usize>,
}

/// Slot index of a container in the [`Context`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ContainerHandle(usize);

/// Fixed container storage plus the LRU slot map.
#[derive(Debug)]
pub(crate) struct ContainerPool {
    slots: LruPool<Id, CONTAINER_POOL_SIZE>,
    items: [Container; CONTAINER_POOL_SIZE],
}

impl ContainerPool {
    pub(crate) fn new() -> Self {
        Self {
            slots: LruPool::new(),
            items: [Container::default(); CONTAINER_POOL_SIZE],
        }
    }

    fn find(&self, id: Id) -> Option<ContainerHandle> {
        self.slots.get(id).map(ContainerHandle)
    }

    fn touch(&mut self, handle: ContainerHandle, frame: u64) {
        self.slots.update(handle.0, frame);
    }

    /// Binds `id` to a recycled slot and resets it to a fresh open container.
    #[track_caller]
    fn claim(&mut self, id: Id, frame: u64) -> ContainerHandle {
        let index = self.slots.init(id, frame);
        self.items[index] = Container {
            open: true,
            ..Container::default()
        };
        ContainerHandle(index)
    }

    #[inline]
    pub(crate) fn get(&self, handle: ContainerHandle) -> &Container {
        &self.items[handle.0]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: ContainerHandle) -> &mut Container {
        &mut self.items[handle.0]
    }
}

impl Context {
    /// Looks up the container for `id`, creating it if it does not exist.
    ///
    /// An existing container is marked as used unless it is closed and
    /// `opt` contains [`Options::CLOSED`]. A missing container is created
    /// open and on top, except with [`Options::CLOSED`], which yields `None`.
    #[track_caller]
    pub(crate) fn find_container(&mut self, id: Id, opt: Options) -> Option<ContainerHandle> {
        if let Some(handle) = self.containers.find(id) {
            if self.containers.get(handle).open || !opt.contains(Options::CLOSED) {
                self.containers.touch(handle, self.frame);
            }
            return Some(handle);
        }
        if opt.contains(Options::CLOSED) {
            return None;
        }
        Some(self.claim_container(id))
    }

    #[track_caller]
    fn claim_container(&mut self, id: Id) -> ContainerHandle {
        let handle = self.containers.claim(id, self.frame);
        self.bring_to_front(handle);
        handle
    }

    /// Like [`find_container`](Self::find_container) without the closed case.
    #[track_caller]
    pub(crate) fn ensure_container(&mut self, id: Id) -> ContainerHandle {
        match self.find_container(id, Options::empty()) {
            Some(handle) => handle,
            None => self.claim_container(id),
        }
    }

    /// Returns the handle of the container named `name` in the current id
    /// scope, creating the container if needed.
    ///
    /// # Panics
    ///
    /// Panics if the container pool is exhausted this frame.
    #[track_caller]
    pub fn container_handle(&mut self, name: &str) -> ContainerHandle {
        let id = self.get_id(name.as_bytes());
        self.ensure_container(id)
    }

    /// Reads a container.
    #[inline]
    #[must_use]
    pub fn container(&self, handle: ContainerHandle) -> &Container {
        self.containers.get(handle)
    }

    /// Mutates a container, e.g. to move a window or reopen it.
    #[inline]
    pub fn container_mut(&mut self, handle: ContainerHandle) -> &mut Container {
        self.containers.get_mut(handle)
    }

    /// Returns the innermost container being built, if any.
    #[must_use]
    pub fn current_container(&self) -> Option<ContainerHandle> {
        self.container_stack.top().copied()
    }

    #[track_caller]
    pub(crate) fn current_container_handle(&self) -> ContainerHandle {
        match self.current_container() {
            Some(handle) => handle,
            None => panic!("no container is active"),
        }
    }

    /// Raises a container above every other root container.
    pub fn bring_to_front(&mut self, handle: ContainerHandle) {
        self.last_zindex += 1;
        self.containers.get_mut(handle).zindex = self.last_zindex;
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::context;
    use crate::Options;

    #[test]
    fn test_same_name_same_container() {
        let mut ctx = context();
        ctx.begin();
        let a = ctx.container_handle("panel");
        let b = ctx.container_handle("panel");
        let c = ctx.container_handle("other");
        ctx.end();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(ctx.container(a).open);
    }

    #[test]
    fn test_bring_to_front_is_monotonic() {
        let mut ctx = context();
        ctx.begin();
        let a = ctx.container_handle("a");
        let b = ctx.container_handle("b");
        ctx.end();
        assert!(ctx.container(b).zindex > ctx.container(a).zindex);

        ctx.bring_to_front(a);
        assert!(ctx.container(a).zindex > ctx.container(b).zindex);
    }

    #[test]
    fn test_closed_option_does_not_create() {
        let mut ctx = context();
        ctx.begin();
        let id = ctx.get_id(b"popup");
        assert_eq!(ctx.find_container(id, Options::CLOSED), None);
        let handle = ctx.ensure_container(id);
        assert_eq!(ctx.find_container(id, Options::CLOSED), Some(handle));
        ctx.end();
    }
}
