//! Label grids mapping each cell of a region to the tile that covers it
//!
//! Rows follow the y axis and columns the x axis, both relative to the upper-left
//! corner of the rendered bounds. Labels use 1-based tile references so that 0 can
//! mark an uncovered cell.

use ndarray::Array2;
use std::fmt;

use crate::io::configuration::{LABEL_GLYPH_RADIX, MAX_RENDER_DIMENSION, UNCOVERED_GLYPH};
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::spatial::rectangle::Rectangle;

/// Cell-by-cell tile labels over a bounding rectangle
#[derive(Debug, Clone)]
pub struct TileGrid {
    bounds: Rectangle,
    labels: Array2<usize>,
}

impl TileGrid {
    /// Label every cell of `bounds` with the 1-based index of the tile covering it
    ///
    /// Where tiles overlap, the later tile wins.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either side of the bounds exceeds
    /// `MAX_RENDER_DIMENSION`, or `TileOutOfBounds` if a tile leaves the bounds
    pub fn from_tiles(bounds: Rectangle, tiles: &[Rectangle]) -> Result<Self> {
        if bounds.width() > MAX_RENDER_DIMENSION || bounds.height() > MAX_RENDER_DIMENSION {
            return Err(invalid_parameter(
                "bounds",
                &bounds,
                &format!("render size is limited to {MAX_RENDER_DIMENSION} cells per side"),
            ));
        }

        let mut labels = Array2::<usize>::zeros((bounds.height() as usize, bounds.width() as usize));

        for (index, tile) in tiles.iter().enumerate() {
            if !bounds.encloses(tile) {
                return Err(TilingError::TileOutOfBounds {
                    tile: *tile,
                    bounds,
                });
            }

            let row_start = tile.y0().abs_diff(bounds.y0()) as usize;
            let col_start = tile.x0().abs_diff(bounds.x0()) as usize;
            for row in row_start..row_start + tile.height() as usize {
                for col in col_start..col_start + tile.width() as usize {
                    if let Some(cell) = labels.get_mut([row, col]) {
                        *cell = index + 1;
                    }
                }
            }
        }

        Ok(Self { bounds, labels })
    }

    /// Region the grid covers
    pub const fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.labels.dim()
    }

    /// Raw label matrix
    pub const fn labels(&self) -> &Array2<usize> {
        &self.labels
    }

    /// Label of the cell at grid coordinates `(x, y)`, `None` outside the bounds
    pub fn label_at(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let row = y.abs_diff(self.bounds.y0()) as usize;
        let col = x.abs_diff(self.bounds.x0()) as usize;
        self.labels.get([row, col]).copied()
    }

    /// Check whether some cell is left without a tile
    pub fn has_gaps(&self) -> bool {
        self.labels.iter().any(|&label| label == 0)
    }
}

const fn glyph(label: usize) -> char {
    if label == 0 {
        return UNCOVERED_GLYPH;
    }
    let digit = (label % LABEL_GLYPH_RADIX as usize) as u32;
    match char::from_digit(digit, LABEL_GLYPH_RADIX) {
        Some(glyph) => glyph,
        None => '?',
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.labels.rows() {
            for &label in row {
                write!(f, "{}", glyph(label))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
