//! Inclusive-corner rectangles on the integer grid
//!
//! A rectangle is identified purely by its corners. Both corners are part of the
//! rectangle, so a single cell is `(x, y, x, y)` with width and height 1. Construction
//! is the only place the corner ordering is checked; every other operation in the
//! crate relies on it.

use crate::io::error::{Result, invalid_rectangle};
use std::fmt;

/// Axis-aligned rectangle with inclusive upper-left and lower-right corners
///
/// The y axis grows downward, so `y0` is the top row and `y1` the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rectangle {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

impl Rectangle {
    /// Create a rectangle from its upper-left `(x0, y0)` and lower-right `(x1, y1)` corners
    ///
    /// # Errors
    ///
    /// Returns `InvalidRectangle` if the corners are inverted
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Result<Self> {
        if x0 > x1 {
            return Err(invalid_rectangle([x0, y0, x1, y1], "x0 must not exceed x1"));
        }
        if y0 > y1 {
            return Err(invalid_rectangle([x0, y0, x1, y1], "y0 must not exceed y1"));
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    /// Build a rectangle whose corners are already known to be ordered
    pub(crate) const fn from_ordered(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        debug_assert!(x0 <= x1 && y0 <= y1);
        Self { x0, y0, x1, y1 }
    }

    /// Square of the given side anchored at `(x0, y0)`
    ///
    /// `side` must be at least 1 and the square must fit on the grid.
    pub(crate) const fn square(x0: i32, y0: i32, side: u64) -> Self {
        Self::from_ordered(
            x0,
            y0,
            offset(x0, side - 1),
            offset(y0, side - 1),
        )
    }

    /// Upper-left column
    pub const fn x0(&self) -> i32 {
        self.x0
    }

    /// Upper-left row
    pub const fn y0(&self) -> i32 {
        self.y0
    }

    /// Lower-right column
    pub const fn x1(&self) -> i32 {
        self.x1
    }

    /// Lower-right row
    pub const fn y1(&self) -> i32 {
        self.y1
    }

    /// Number of columns covered
    ///
    /// A side may span the whole `i32` range, which is one more than `u32::MAX`.
    pub const fn width(&self) -> u64 {
        self.x1.abs_diff(self.x0) as u64 + 1
    }

    /// Number of rows covered
    pub const fn height(&self) -> u64 {
        self.y1.abs_diff(self.y0) as u64 + 1
    }

    /// Number of cells covered
    pub const fn area(&self) -> u128 {
        self.width() as u128 * self.height() as u128
    }

    /// Check whether width equals height
    pub const fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    /// Check whether a cell lies inside the rectangle
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Check whether another rectangle lies entirely inside this one
    pub const fn encloses(&self, other: &Self) -> bool {
        self.contains(other.x0, other.y0) && self.contains(other.x1, other.y1)
    }

    /// Fuse with an edge-adjacent rectangle of matching span
    ///
    /// Returns `None` when the rectangles do not share a full edge.
    pub fn merge(&self, other: &Self) -> Option<Self> {
        crate::algorithm::merge::merge_pair(Some(*self), Some(*other))
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}

/// Move a coordinate forward by `by` cells
///
/// Callers only step within an existing rectangle, so the result never leaves `i32`.
pub(crate) const fn offset(coordinate: i32, by: u64) -> i32 {
    let step = if by > u32::MAX as u64 {
        u32::MAX
    } else {
        by as u32
    };
    coordinate.saturating_add_unsigned(step)
}
