/// Command-line argument parsing and report output
pub mod cli;
/// Limits and defaults
pub mod configuration;
/// Error types
pub mod error;
