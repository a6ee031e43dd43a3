//! Nested clip rectangles.

use tessera_core::BoundedStack;

use crate::constants::CLIP_STACK_SIZE;
use crate::geometry::Rect;

/// How a rectangle relates to the current clip rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    /// Entirely visible.
    Inside,
    /// Straddles the clip edge.
    Partial,
    /// Entirely hidden.
    Outside,
}

/// Stack of clip rects; each entry is already intersected with its parent.
#[derive(Debug, Clone, Default)]
pub struct ClipStack {
    stack: BoundedStack<Rect, CLIP_STACK_SIZE>,
}

impl ClipStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `rect` intersected with the current clip.
    #[track_caller]
    pub fn push(&mut self, rect: Rect) {
        let clipped = rect.intersect(&self.current());
        self.stack.push(clipped);
    }

    /// Pushes `rect` as-is, ignoring the current clip.
    #[track_caller]
    pub fn push_unclipped(&mut self, rect: Rect) {
        self.stack.push(rect);
    }

    /// Pops the innermost clip rect.
    #[track_caller]
    pub fn pop(&mut self) {
        let _ = self.stack.pop();
    }

    /// Returns the innermost clip rect, or [`Rect::UNBOUNDED`] when empty.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Rect {
        self.stack.top().copied().unwrap_or(Rect::UNBOUNDED)
    }

    /// Classifies `rect` against the current clip rect.
    #[must_use]
    pub fn check(&self, rect: Rect) -> Clip {
        let clip = self.current();
        if rect.x > clip.right()
            || rect.right() < clip.x
            || rect.y > clip.bottom()
            || rect.bottom() < clip.y
        {
            return Clip::Outside;
        }
        if rect.x >= clip.x
            && rect.right() <= clip.right()
            && rect.y >= clip.y
            && rect.bottom() <= clip.bottom()
        {
            return Clip::Inside;
        }
        Clip::Partial
    }

    /// Returns the nesting depth.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns true if no clip rect is pushed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_clips_intersect() {
        let mut clips = ClipStack::new();
        clips.push(Rect::new(0, 0, 100, 100));
        clips.push(Rect::new(50, 50, 100, 100));
        assert_eq!(clips.current(), Rect::new(50, 50, 50, 50));

        clips.pop();
        assert_eq!(clips.current(), Rect::new(0, 0, 100, 100));
        clips.pop();
        assert_eq!(clips.current(), Rect::UNBOUNDED);
    }

    #[test]
    fn test_unclipped_push_escapes_parent() {
        let mut clips = ClipStack::new();
        clips.push(Rect::new(0, 0, 10, 10));
        clips.push_unclipped(Rect::UNBOUNDED);
        assert_eq!(clips.current(), Rect::UNBOUNDED);
    }

    #[test]
    fn test_check_classifies() {
        let mut clips = ClipStack::new();
        clips.push(Rect::new(0, 0, 100, 100));

        assert_eq!(clips.check(Rect::new(10, 10, 20, 20)), Clip::Inside);
        assert_eq!(clips.check(Rect::new(90, 90, 20, 20)), Clip::Partial);
        assert_eq!(clips.check(Rect::new(200, 10, 20, 20)), Clip::Outside);
        assert_eq!(clips.check(Rect::new(10, -50, 20, 20)), Clip::Outside);
    }

    #[test]
    #[should_panic(expected = "stack underflow")]
    fn test_pop_empty_is_fatal() {
        let mut clips = ClipStack::new();
        clips.pop();
    }
}
