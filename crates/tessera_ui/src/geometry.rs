//! Integer geometry and colors.
//!
//! All positions are in whole pixels; rectangles are `x, y, width, height`.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::constants::UNBOUNDED_EXTENT;

/// A 2D integer vector (positions, deltas, sizes).
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Vec2 {
    /// X component.
    pub x: i32,
    /// Y component.
    pub y: i32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Swaps the components.
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self::new(self.y, self.x)
    }
}

/// A rectangle in screen coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rect {
    /// X position (left edge).
    pub x: i32,
    /// Y position (top edge).
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Stand-in for "no clipping".
    pub const UNBOUNDED: Self = Self::new(0, 0, UNBOUNDED_EXTENT, UNBOUNDED_EXTENT);

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Returns the top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns true if either extent is zero or negative.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns true if the point is inside the rectangle (right/bottom edges
    /// excluded).
    #[must_use]
    pub const fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Returns the overlap of two rectangles.
    ///
    /// Disjoint inputs yield a zero-area rect pinned at the clamped corner,
    /// never a negative extent.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right()).max(x1);
        let y2 = self.bottom().min(other.bottom()).max(y1);
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Grows the rectangle by `amount` on every side (shrinks when negative).
    #[must_use]
    pub const fn expand(&self, amount: i32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2,
            self.height + amount * 2,
        )
    }

    /// Swaps the x/y axes.
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self::new(self.y, self.x, self.height, self.width)
    }
}

/// 8-bit RGBA color.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component.
    pub a: u8,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    /// Creates a color from RGBA components.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
}
