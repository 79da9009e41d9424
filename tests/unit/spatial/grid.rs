//! Tests for label grid construction and text rendering

#[cfg(test)]
mod tests {
    use squaretile::spatial::grid::TileGrid;
    use squaretile::{Rectangle, Result, TilingError, partition};

    // Tests labels follow tile order and uncovered cells stay zero
    // Fails if labels are written 0-based
    #[test]
    fn test_labels_and_rendering() -> Result<()> {
        let bounds = Rectangle::new(0, 0, 2, 1)?;
        let tiles = [Rectangle::new(0, 0, 1, 1)?, Rectangle::new(2, 0, 2, 0)?];
        let grid = TileGrid::from_tiles(bounds, &tiles)?;

        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.label_at(0, 1), Some(1));
        assert_eq!(grid.label_at(2, 0), Some(2));
        assert_eq!(grid.label_at(2, 1), Some(0));
        assert_eq!(grid.label_at(3, 0), None);
        assert!(grid.has_gaps());
        assert_eq!(grid.to_string(), "112\n11.\n");
        Ok(())
    }

    // Tests rows track y and columns track x for offset bounds
    #[test]
    fn test_offset_bounds_orientation() -> Result<()> {
        let bounds = Rectangle::new(5, -3, 5, -1)?;
        let tiles = [Rectangle::new(5, -1, 5, -1)?];
        let grid = TileGrid::from_tiles(bounds, &tiles)?;

        assert_eq!(grid.dimensions(), (3, 1));
        assert_eq!(grid.labels().get([2, 0]).copied(), Some(1));
        assert_eq!(grid.to_string(), ".\n.\n1\n");
        Ok(())
    }

    #[test]
    fn test_partition_has_no_gaps() -> Result<()> {
        let bounds = Rectangle::new(0, 0, 6, 4)?;
        let grid = TileGrid::from_tiles(bounds, &partition(bounds))?;
        assert!(!grid.has_gaps());
        assert_eq!(grid.bounds(), bounds);
        Ok(())
    }

    #[test]
    fn test_tile_outside_bounds_rejected() -> Result<()> {
        let bounds = Rectangle::new(0, 0, 1, 1)?;
        let tile = Rectangle::new(0, 0, 2, 0)?;
        assert_eq!(
            TileGrid::from_tiles(bounds, &[tile]).err(),
            Some(TilingError::TileOutOfBounds { tile, bounds })
        );
        Ok(())
    }

    #[test]
    fn test_oversized_render_rejected() -> Result<()> {
        let bounds = Rectangle::new(0, 0, 1000, 0)?;
        assert!(TileGrid::from_tiles(bounds, &[]).is_err());
        Ok(())
    }
}
