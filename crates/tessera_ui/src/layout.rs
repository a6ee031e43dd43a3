//! # Layout Engine
//!
//! Row/column cursor placement. Each container body gets a [`LayoutFrame`];
//! widgets ask for their rect with [`Context::layout_next`] and the frame
//! advances along the current row, wrapping to a new row of the same shape
//! when the row is used up.
//!
//! ## Sizing Rules
//!
//! - `0` means the style default: `style.size + 2 * padding`
//! - a negative size `-n` fills what is left of the body, minus `n - 1`
//! - anything else is taken literally
//!
//! Rects are produced relative to the body and offset by its origin, which
//! already has the container scroll subtracted.

use crate::constants::{MAX_WIDTHS, UNBOUNDED_EXTENT};
use crate::context::Context;
use crate::geometry::{Rect, Vec2};
use crate::style::Style;

/// How a [`Context::layout_set_next`] override is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// Body-relative; the cursor still advances past it.
    Relative,
    /// Screen coordinates; returned untouched.
    Absolute,
}

/// Cursor state for one container body or column.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LayoutFrame {
    pub(crate) body: Rect,
    next: Rect,
    position: Vec2,
    size: Vec2,
    pub(crate) max: Vec2,
    widths: [i32; MAX_WIDTHS],
    items: usize,
    item_index: usize,
    next_row: i32,
    next_type: Option<Placement>,
    pub(crate) indent: i32,
}

impl LayoutFrame {
    /// Starts a frame over `body` scrolled by `scroll`, with one default-width
    /// column.
    pub(crate) fn new(body: Rect, scroll: Vec2) -> Self {
        let mut frame = Self {
            body: Rect::new(body.x - scroll.x, body.y - scroll.y, body.width, body.height),
            max: Vec2::new(-UNBOUNDED_EXTENT, -UNBOUNDED_EXTENT),
            ..Self::default()
        };
        frame.row(1, Some(&[0]), 0);
        frame
    }

    /// Begins a row of `items` columns. `None` keeps the previous widths.
    #[track_caller]
    pub(crate) fn row(&mut self, items: usize, widths: Option<&[i32]>, height: i32) {
        assert!(
            items <= MAX_WIDTHS,
            "layout row of {items} items exceeds the {MAX_WIDTHS} column limit"
        );
        if let Some(widths) = widths {
            assert!(
                widths.len() >= items,
                "layout row of {items} items given only {} widths",
                widths.len()
            );
            self.widths[..items].copy_from_slice(&widths[..items]);
        }
        self.items = items;
        self.position = Vec2::new(self.indent, self.next_row);
        self.size.y = height;
        self.item_index = 0;
    }

    pub(crate) fn set_width(&mut self, width: i32) {
        self.size.x = width;
    }

    pub(crate) fn set_height(&mut self, height: i32) {
        self.size.y = height;
    }

    pub(crate) fn set_next(&mut self, rect: Rect, placement: Placement) {
        self.next = rect;
        self.next_type = Some(placement);
    }

    /// Places the next item and advances the cursor.
    pub(crate) fn next(&mut self, style: &Style) -> Rect {
        let mut rect = match self.next_type.take() {
            Some(Placement::Absolute) => return self.next,
            Some(Placement::Relative) => self.next,
            None => {
                if self.item_index == self.items {
                    self.row(self.items, None, self.size.y);
                }
                let mut rect = Rect::new(
                    self.position.x,
                    self.position.y,
                    if self.items > 0 {
                        self.widths[self.item_index]
                    } else {
                        self.size.x
                    },
                    self.size.y,
                );
                if rect.width == 0 {
                    rect.width = style.size.x + style.padding * 2;
                }
                if rect.height == 0 {
                    rect.height = style.size.y + style.padding * 2;
                }
                if rect.width < 0 {
                    rect.width += self.body.width - rect.x + 1;
                }
                if rect.height < 0 {
                    rect.height += self.body.height - rect.y + 1;
                }
                self.item_index += 1;
                rect
            }
        };

        self.position.x += rect.width + style.spacing;
        self.next_row = self.next_row.max(rect.bottom() + style.spacing);

        rect.x += self.body.x;
        rect.y += self.body.y;

        self.max.x = self.max.x.max(rect.right());
        self.max.y = self.max.y.max(rect.bottom());
        rect
    }

    /// Folds a finished column back into its parent.
    pub(crate) fn absorb_column(&mut self, column: &Self) {
        self.position.x = self
            .position
            .x
            .max(column.position.x + column.body.x - self.body.x);
        self.next_row = self
            .next_row
            .max(column.next_row + column.body.y - self.body.y);
        self.max.x = self.max.x.max(column.max.x);
        self.max.y = self.max.y.max(column.max.y);
    }
}

impl Context {
    #[track_caller]
    pub(crate) fn layout(&mut self) -> &mut LayoutFrame {
        match self.layout_stack.top_mut() {
            Some(frame) => frame,
            None => panic!("no layout frame is active: widgets must be inside a container"),
        }
    }

    #[track_caller]
    pub(crate) fn push_layout(&mut self, body: Rect, scroll: Vec2) {
        self.layout_stack.push(LayoutFrame::new(body, scroll));
    }

    /// Starts a row of `items` columns of the given `widths` (or the previous
    /// row's widths) and `height`.
    ///
    /// # Panics
    ///
    /// Panics if `items` exceeds the column limit or `widths` is too short.
    #[track_caller]
    pub fn layout_row(&mut self, items: usize, widths: Option<&[i32]>, height: i32) {
        self.layout().row(items, widths, height);
    }

    /// Sets the width used by rows with zero items.
    #[track_caller]
    pub fn layout_width(&mut self, width: i32) {
        self.layout().set_width(width);
    }

    /// Sets the height of following items.
    #[track_caller]
    pub fn layout_height(&mut self, height: i32) {
        self.layout().set_height(height);
    }

    /// Overrides the rect of the next item. A relative rect is offset by the
    /// body origin; an absolute one is used as-is.
    #[track_caller]
    pub fn layout_set_next(&mut self, rect: Rect, relative: bool) {
        let placement = if relative {
            Placement::Relative
        } else {
            Placement::Absolute
        };
        self.layout().set_next(rect, placement);
    }

    /// Returns the rect for the next item and advances the cursor.
    #[track_caller]
    pub fn layout_next(&mut self) -> Rect {
        let style = &self.style;
        let frame = match self.layout_stack.top_mut() {
            Some(frame) => frame,
            None => panic!("no layout frame is active: widgets must be inside a container"),
        };
        let rect = frame.next(style);
        self.last_rect = rect;
        rect
    }

    /// Opens a nested column occupying the next item.
    #[track_caller]
    pub fn layout_begin_column(&mut self) {
        let rect = self.layout_next();
        self.push_layout(rect, Vec2::ZERO);
    }

    /// Closes the innermost column.
    ///
    /// # Panics
    ///
    /// Panics if no column is open.
    #[track_caller]
    pub fn layout_end_column(&mut self) {
        let column = self.layout_stack.pop();
        self.layout().absorb_column(&column);
    }
}
