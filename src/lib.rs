//! Compound Growth - projections of an asset under fixed-rate compounding or
//! fixed-dividend accumulation
//!
//! This library provides:
//! - Period-by-period growth series at 1, 2, 4 or 12 periods per year
//! - Side-by-side comparison of compounding frequencies
//! - CSV export of series
//! - SVG comparison charts with yearly value annotations

pub mod error;
pub mod growth;
pub mod chart;

// Re-export commonly used types
pub use error::{ChartError, GrowthError};
pub use growth::{
    simulate, simulate_frequencies, CompoundingFrequency, GrowthConfig, GrowthMode, GrowthRow,
    GrowthSeries, GrowthSimulator,
};
pub use chart::{ChartOptions, ChartRenderer};
