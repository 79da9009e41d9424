//! CLI entry point for power-of-two square partitioning

use clap::Parser;
use squaretile::io::cli::{Cli, PartitionReport, init_logging};

// Allow print for the report, which is the program's output
#[allow(clippy::print_stdout)]
fn main() -> squaretile::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level())?;

    let report = PartitionReport::from_cli(&cli)?;
    print!("{report}");
    Ok(())
}
