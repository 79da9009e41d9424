//! Command-line interface for partitioning a single rectangle and reporting the result

use crate::algorithm::merge::reduce_all;
use crate::algorithm::partition::{PartitionSet, partition, partition_bounded};
use crate::analysis::survey::{AreaHistogram, survey};
use crate::io::configuration::DEFAULT_LOG_LEVEL;
use crate::io::error::{Result, TilingError};
use crate::spatial::coverage::verify_tiling;
use crate::spatial::grid::TileGrid;
use crate::spatial::rectangle::Rectangle;
use clap::{ArgAction, Parser};
use std::fmt;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "squaretile")]
#[command(
    author,
    version,
    about = "Split a grid rectangle into power-of-two squares",
    allow_negative_numbers = true
)]
/// Command-line arguments for the partitioning tool
// Each report section is an independent switch
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Upper-left column (inclusive)
    #[arg(value_name = "X0")]
    pub x0: i32,

    /// Upper-left row (inclusive)
    #[arg(value_name = "Y0")]
    pub y0: i32,

    /// Lower-right column (inclusive)
    #[arg(value_name = "X1")]
    pub x1: i32,

    /// Lower-right row (inclusive)
    #[arg(value_name = "Y1")]
    pub y1: i32,

    /// Largest square side allowed (power of two)
    #[arg(short = 's', long)]
    pub max_side: Option<u64>,

    /// Fuse adjacent squares back into larger rectangles and list them
    #[arg(short, long)]
    pub merge: bool,

    /// Check that the squares cover the rectangle exactly once
    #[arg(short = 'c', long)]
    pub verify: bool,

    /// Print a cell map labelling each cell with its square
    #[arg(short, long)]
    pub render: bool,

    /// List every square
    #[arg(short, long)]
    pub list: bool,

    /// Suppress the summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Rectangle described by the corner arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidRectangle` if the corners are inverted
    pub const fn rectangle(&self) -> Result<Rectangle> {
        Rectangle::new(self.x0, self.y0, self.x1, self.y1)
    }

    /// Log level selected by the verbosity count
    pub const fn log_level(&self) -> Level {
        match self.verbose {
            0 => DEFAULT_LOG_LEVEL,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Check if the summary line should be printed
    pub const fn should_show_summary(&self) -> bool {
        !self.quiet
    }
}

/// Install a stderr log subscriber at the given level
///
/// # Errors
///
/// Returns `LoggingSetup` if a global subscriber is already installed
pub fn init_logging(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| TilingError::LoggingSetup {
            reason: error.to_string(),
        })
}

/// Everything computed for one invocation
#[derive(Debug, Clone)]
pub struct PartitionReport {
    /// Rectangle that was partitioned
    pub rectangle: Rectangle,
    /// Squares sorted by corner coordinates
    pub squares: PartitionSet,
    /// Square counts by area
    pub histogram: AreaHistogram,
    /// Fused rectangles when merging was requested
    pub merged: Option<Vec<Rectangle>>,
    /// Whether the tiling was checked cell by cell
    pub verified: bool,
    /// Label grid when rendering was requested
    pub grid: Option<TileGrid>,
    /// List every square in the output
    pub list_squares: bool,
    /// Include the summary line in the output
    pub show_summary: bool,
}

impl PartitionReport {
    /// Run the partition and every requested follow-up step
    ///
    /// # Errors
    ///
    /// Returns an error if the corners are invalid, `max_side` is not a power of two,
    /// verification finds a defect, or the render bounds are too large
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let rectangle = cli.rectangle()?;

        let mut squares = match cli.max_side {
            Some(max_side) => partition_bounded(rectangle, max_side)?,
            None => partition(rectangle),
        };
        squares.sort_unstable();

        let histogram = survey(&squares);

        if cli.verify {
            verify_tiling(rectangle, &squares)?;
        }

        let merged = cli.merge.then(|| {
            let mut merged = reduce_all(&squares);
            merged.sort_unstable();
            merged
        });

        let grid = cli
            .render
            .then(|| TileGrid::from_tiles(rectangle, &squares))
            .transpose()?;

        Ok(Self {
            rectangle,
            squares,
            histogram,
            merged,
            verified: cli.verify,
            grid,
            list_squares: cli.list,
            show_summary: cli.should_show_summary(),
        })
    }
}

impl fmt::Display for PartitionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.histogram)?;

        if self.show_summary {
            writeln!(
                f,
                "{} -> {} squares covering {} cells",
                self.rectangle,
                self.squares.len(),
                self.histogram.total_area()
            )?;
        }

        if self.list_squares {
            for square in &self.squares {
                writeln!(f, "square {square} side {}", square.width())?;
            }
        }

        if let Some(merged) = &self.merged {
            writeln!(f, "merged into {} rectangles", merged.len())?;
            for rectangle in merged {
                writeln!(
                    f,
                    "rectangle {rectangle} {}x{}",
                    rectangle.width(),
                    rectangle.height()
                )?;
            }
        }

        if self.verified {
            writeln!(f, "verified: tiling is exact")?;
        }

        if let Some(grid) = &self.grid {
            write!(f, "{grid}")?;
        }

        Ok(())
    }
}
