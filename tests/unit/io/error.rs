//! Tests for error message formatting

#[cfg(test)]
mod tests {
    use squaretile::io::error::invalid_parameter;
    use squaretile::{Rectangle, Result, TilingError};
    use std::error::Error;

    // Tests InvalidRectangle names the corners and the reason
    #[test]
    fn test_invalid_rectangle_message() {
        let message = Rectangle::new(3, 0, 1, 2)
            .err()
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();

        assert!(message.contains("(3, 0, 1, 2)"));
        assert!(message.contains("x0 must not exceed x1"));
    }

    // Tests InvalidParameter error contains all fields
    #[test]
    fn test_invalid_parameter_message() {
        let error = invalid_parameter("max_side", &3, &"must be a power of two");
        let message = error.to_string();
        assert!(message.contains("max_side"));
        assert!(message.contains('3'));
        assert!(message.contains("must be a power of two"));
    }

    #[test]
    fn test_tiling_failure_messages() -> Result<()> {
        let tile = Rectangle::new(0, 0, 1, 1)?;
        let bounds = Rectangle::new(0, 0, 0, 0)?;

        let out_of_bounds = TilingError::TileOutOfBounds { tile, bounds }.to_string();
        assert!(out_of_bounds.contains("(0, 0, 1, 1)"));
        assert!(out_of_bounds.contains("(0, 0, 0, 0)"));

        let overlap = TilingError::TileOverlap { tile, cell: [1, 0] }.to_string();
        assert!(overlap.contains("(1, 0)"));

        let gap = TilingError::IncompleteTiling {
            cell: [4, 2],
            covered: 7,
            expected: 9,
        }
        .to_string();
        assert!(gap.contains("7 of 9"));
        assert!(gap.contains("(4, 2)"));
        Ok(())
    }

    #[test]
    fn test_errors_have_no_source() {
        let error = TilingError::LoggingSetup {
            reason: "already set".to_string(),
        };
        assert!(error.source().is_none());
        assert!(error.to_string().contains("already set"));
    }
}
