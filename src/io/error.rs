//! Error types for rectangle construction, partitioning and tiling verification

use crate::spatial::rectangle::Rectangle;
use std::fmt;

/// Main error type for all tiling operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TilingError {
    /// Corner coordinates do not describe a valid rectangle
    ///
    /// Occurs when the corners are inverted (`x0 > x1` or `y0 > y1`)
    InvalidRectangle {
        /// Upper-left column
        x0: i32,
        /// Upper-left row
        y0: i32,
        /// Lower-right column
        x1: i32,
        /// Lower-right row
        y1: i32,
        /// Explanation of why the corners were rejected
        reason: &'static str,
    },

    /// Operation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Tile reaches outside the region being tiled
    TileOutOfBounds {
        /// The offending tile
        tile: Rectangle,
        /// The region being tiled
        bounds: Rectangle,
    },

    /// Tile covers a cell that another tile already covers
    TileOverlap {
        /// The tile that was being placed
        tile: Rectangle,
        /// First doubly covered cell as `[x, y]`
        cell: [i32; 2],
    },

    /// Tiles leave part of the region uncovered
    IncompleteTiling {
        /// First uncovered cell as `[x, y]`
        cell: [i32; 2],
        /// Number of cells the tiles cover
        covered: u64,
        /// Number of cells in the region
        expected: u128,
    },

    /// Log subscriber could not be installed
    LoggingSetup {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRectangle {
                x0,
                y0,
                x1,
                y1,
                reason,
            } => {
                write!(f, "Invalid rectangle ({x0}, {y0}, {x1}, {y1}): {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::TileOutOfBounds { tile, bounds } => {
                write!(f, "Tile {tile} extends outside of {bounds}")
            }
            Self::TileOverlap { tile, cell } => {
                write!(
                    f,
                    "Tile {tile} overlaps an earlier tile at cell ({}, {})",
                    cell[0], cell[1]
                )
            }
            Self::IncompleteTiling {
                cell,
                covered,
                expected,
            } => {
                write!(
                    f,
                    "Tiling covers {covered} of {expected} cells, first gap at ({}, {})",
                    cell[0], cell[1]
                )
            }
            Self::LoggingSetup { reason } => {
                write!(f, "Failed to initialize logging: {reason}")
            }
        }
    }
}

impl std::error::Error for TilingError {}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid rectangle error from raw corners
pub const fn invalid_rectangle(
    corners: [i32; 4],
    reason: &'static str,
) -> TilingError {
    let [x0, y0, x1, y1] = corners;
    TilingError::InvalidRectangle {
        x0,
        y0,
        x1,
        y1,
        reason,
    }
}
