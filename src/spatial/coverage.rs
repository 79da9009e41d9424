//! Cell occupancy tracking for verifying that tiles exactly cover a region

use bitvec::prelude::*;

use crate::io::configuration::MAX_COVERAGE_CELLS;
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::spatial::rectangle::{Rectangle, offset};

/// One bit per cell of a bounding rectangle
///
/// Bits are stored row-major relative to the upper-left corner of the bounds.
#[derive(Clone, Debug)]
pub struct CoverageMap {
    bounds: Rectangle,
    cells: BitVec,
}

impl CoverageMap {
    /// Create an empty coverage map over `bounds`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the bounds hold more than `MAX_COVERAGE_CELLS` cells
    pub fn new(bounds: Rectangle) -> Result<Self> {
        let area = bounds.area();
        if area > u128::from(MAX_COVERAGE_CELLS) {
            return Err(invalid_parameter(
                "bounds",
                &bounds,
                &format!("covers {area} cells, limit is {MAX_COVERAGE_CELLS}"),
            ));
        }

        Ok(Self {
            bounds,
            cells: bitvec![0; area as usize],
        })
    }

    /// Region this map tracks
    pub const fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Mark every cell of `tile` as covered
    ///
    /// The map is left untouched when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns `TileOutOfBounds` if the tile leaves the bounds, or `TileOverlap`
    /// with the first already covered cell
    pub fn mark(&mut self, tile: &Rectangle) -> Result<()> {
        if !self.bounds.encloses(tile) {
            return Err(TilingError::TileOutOfBounds {
                tile: *tile,
                bounds: self.bounds,
            });
        }

        for (x, y, index) in tile_cells(self.bounds, *tile) {
            if self.cells.get(index).as_deref() == Some(&true) {
                return Err(TilingError::TileOverlap {
                    tile: *tile,
                    cell: [x, y],
                });
            }
        }

        for (_, _, index) in tile_cells(self.bounds, *tile) {
            self.cells.set(index, true);
        }
        Ok(())
    }

    /// Check whether a cell has been covered
    pub fn is_covered(&self, x: i32, y: i32) -> bool {
        self.bounds.contains(x, y)
            && self
                .cells
                .get(cell_index(self.bounds, x, y))
                .as_deref()
                .is_some_and(|&bit| bit)
    }

    /// Number of covered cells
    pub fn covered_cells(&self) -> u64 {
        self.cells.count_ones() as u64
    }

    /// Check whether every cell of the bounds is covered
    pub fn is_complete(&self) -> bool {
        self.cells.all()
    }

    /// First uncovered cell in row-major order
    pub fn first_gap(&self) -> Option<[i32; 2]> {
        self.cells.first_zero().map(|index| self.cell_at(index))
    }

    const fn cell_at(&self, index: usize) -> [i32; 2] {
        let width = self.bounds.width() as usize;
        [
            offset(self.bounds.x0(), (index % width) as u64),
            offset(self.bounds.y0(), (index / width) as u64),
        ]
    }
}

/// Cells of `tile` with their bit index inside `bounds`
fn tile_cells(bounds: Rectangle, tile: Rectangle) -> impl Iterator<Item = (i32, i32, usize)> {
    (0..tile.height()).flat_map(move |dy| {
        let y = offset(tile.y0(), dy);
        (0..tile.width()).map(move |dx| {
            let x = offset(tile.x0(), dx);
            (x, y, cell_index(bounds, x, y))
        })
    })
}

const fn cell_index(bounds: Rectangle, x: i32, y: i32) -> usize {
    let column = x.abs_diff(bounds.x0()) as usize;
    let row = y.abs_diff(bounds.y0()) as usize;
    row * bounds.width() as usize + column
}

/// Check that `tiles` cover every cell of `bounds` exactly once
///
/// # Errors
///
/// Returns the first placement failure from [`CoverageMap::mark`], or
/// `IncompleteTiling` naming the first uncovered cell
pub fn verify_tiling(bounds: Rectangle, tiles: &[Rectangle]) -> Result<()> {
    let mut coverage = CoverageMap::new(bounds)?;
    for tile in tiles {
        coverage.mark(tile)?;
    }

    coverage.first_gap().map_or(Ok(()), |cell| {
        Err(TilingError::IncompleteTiling {
            cell,
            covered: coverage.covered_cells(),
            expected: bounds.area(),
        })
    })
}
