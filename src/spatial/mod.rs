//! Spatial data structures on the integer grid
//!
//! This module contains spatial-related functionality including:
//! - Inclusive-corner rectangles
//! - Cell coverage tracking for tiling verification
//! - Label grids for rendering tilings

/// Cell occupancy tracking and tiling verification
pub mod coverage;
/// Cell-to-tile label grids
pub mod grid;
/// Inclusive-corner rectangle value type
pub mod rectangle;

pub use rectangle::Rectangle;
