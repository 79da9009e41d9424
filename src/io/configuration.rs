//! Tiling limits and runtime configuration defaults

// Safety limits to prevent excessive memory allocation
/// Maximum number of cells a coverage map may track
pub const MAX_COVERAGE_CELLS: u64 = 1 << 28;

/// Maximum side length of a rendered label grid
pub const MAX_RENDER_DIMENSION: u64 = 256;

// Rendering settings
/// Glyph used for cells no tile covers
pub const UNCOVERED_GLYPH: char = '.';
/// Number of distinct glyphs before labels wrap around
pub const LABEL_GLYPH_RADIX: u32 = 36;

// Default values for configurable parameters
/// Log level used when no verbosity flag is given
pub const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;
