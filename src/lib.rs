//! Greedy power-of-two square tiling for integer grid rectangles
//!
//! A rectangle is split into disjoint squares whose sides are powers of two by
//! repeatedly placing the largest square that fits its shorter side. Adjacent
//! rectangles sharing a full edge can be fused back together, and partitions can be
//! tallied by tile area, verified cell by cell, or rendered as label grids.

#![forbid(unsafe_code)]

/// Partitioning and merging algorithms
pub mod algorithm;
/// Reporting over partition results
pub mod analysis;
/// Command-line interface, configuration constants and error handling
pub mod io;
/// Rectangles, coverage tracking and label grids
pub mod spatial;

pub use algorithm::merge::{Adjacency, merge_pair, reduce_all};
pub use algorithm::partition::{PartitionSet, partition, partition_bounded, partition_corners};
pub use analysis::survey::{AreaHistogram, survey};
pub use io::error::{Result, TilingError};
pub use spatial::coverage::verify_tiling;
pub use spatial::rectangle::Rectangle;
