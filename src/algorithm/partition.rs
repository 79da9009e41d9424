//! Greedy power-of-two square partitioning
//!
//! Each step places the largest power-of-two square that fits the shorter side of
//! the current rectangle at its upper-left corner. What is left over is split into
//! two remainders:
//!
//! ```text
//! +-------+-----------+
//! | n x n |           |
//! |       |   right   |
//! +-------+           |
//! |bottom |           |
//! +-------+-----------+
//! ```
//!
//! The right remainder spans the full height of the parent, so the bottom
//! remainder only has to cover the strip under the square. Remainders go on a LIFO
//! work stack; emission order is a traversal artifact.

use tracing::{debug, trace};

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::rectangle::{Rectangle, offset};

/// Ordered squares produced for one input rectangle
///
/// Order carries no meaning; compare partitions as sets.
pub type PartitionSet = Vec<Rectangle>;

/// Tile `rect` exactly with power-of-two squares
pub fn partition(rect: Rectangle) -> PartitionSet {
    split(rect, None)
}

/// Validate raw corners and partition the resulting rectangle
///
/// # Errors
///
/// Returns `InvalidRectangle` if the corners do not form a rectangle
pub fn partition_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Result<PartitionSet> {
    Rectangle::new(x0, y0, x1, y1).map(partition)
}

/// Tile `rect` with power-of-two squares no larger than `max_side`
///
/// # Errors
///
/// Returns `InvalidParameter` if `max_side` is not a power of two
pub fn partition_bounded(rect: Rectangle, max_side: u64) -> Result<PartitionSet> {
    if !max_side.is_power_of_two() {
        return Err(invalid_parameter(
            "max_side",
            &max_side,
            &"must be a power of two",
        ));
    }
    Ok(split(rect, Some(max_side)))
}

/// Side of the square placed at the corner of `rect`
///
/// Largest power of two not exceeding the shorter side, optionally capped.
pub const fn square_side(rect: &Rectangle, max_side: Option<u64>) -> u64 {
    let shorter = if rect.width() < rect.height() {
        rect.width()
    } else {
        rect.height()
    };
    let side = 1_u64 << shorter.ilog2();
    match max_side {
        Some(cap) if cap < side => cap,
        _ => side,
    }
}

fn split(rect: Rectangle, max_side: Option<u64>) -> PartitionSet {
    let mut squares = Vec::new();
    let mut remaining = vec![rect];

    while let Some(current) = remaining.pop() {
        let side = square_side(&current, max_side);
        let square = Rectangle::square(current.x0(), current.y0(), side);
        trace!(%current, %square, "placed square");
        squares.push(square);

        if square.x1() != current.x1() {
            remaining.push(Rectangle::from_ordered(
                offset(current.x0(), side),
                current.y0(),
                current.x1(),
                current.y1(),
            ));
        }

        if square.y1() != current.y1() {
            remaining.push(Rectangle::from_ordered(
                current.x0(),
                offset(current.y0(), side),
                square.x1(),
                current.y1(),
            ));
        }
    }

    debug!(%rect, squares = squares.len(), ?max_side, "partitioned rectangle");
    squares
}
