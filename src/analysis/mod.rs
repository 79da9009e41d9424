//! Reporting over partition results

/// Area histograms for tile sets
pub mod survey;
