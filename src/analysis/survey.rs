//! Tile area tallies for partition reporting

use std::collections::BTreeMap;
use std::fmt;

use crate::spatial::rectangle::Rectangle;

/// Number of tiles observed for each tile area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaHistogram {
    counts: BTreeMap<u128, usize>,
}

impl AreaHistogram {
    /// Create an empty histogram
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Count one more tile
    pub fn record(&mut self, tile: &Rectangle) {
        *self.counts.entry(tile.area()).or_insert(0) += 1;
    }

    /// Number of tiles with the given area
    pub fn count(&self, area: u128) -> usize {
        self.counts.get(&area).copied().unwrap_or(0)
    }

    /// `(area, count)` pairs in ascending area order
    pub fn buckets(&self) -> impl Iterator<Item = (u128, usize)> + '_ {
        self.counts.iter().map(|(&area, &count)| (area, count))
    }

    /// Number of distinct areas
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether no tile was recorded
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of tiles recorded
    pub fn total_tiles(&self) -> usize {
        self.counts.values().sum()
    }

    /// Sum of all recorded tile areas
    pub fn total_area(&self) -> u128 {
        self.counts
            .iter()
            .map(|(&area, &count)| area * count as u128)
            .sum()
    }
}

impl FromIterator<Rectangle> for AreaHistogram {
    fn from_iter<I: IntoIterator<Item = Rectangle>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for tile in iter {
            histogram.record(&tile);
        }
        histogram
    }
}

impl fmt::Display for AreaHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (area, count) in self.buckets() {
            writeln!(f, "{area}: {count}")?;
        }
        Ok(())
    }
}

/// Tally how many tiles of each area a partition holds
pub fn survey(partitions: &[Rectangle]) -> AreaHistogram {
    partitions.iter().copied().collect()
}
