//! Growth simulation for single and multi-frequency comparisons

mod config;
mod series;
mod engine;

pub use config::{CompoundingFrequency, GrowthConfig, GrowthMode};
pub use series::{GrowthRow, GrowthSeries};
pub use engine::{effective_annual_rate, simulate, simulate_frequencies, GrowthSimulator};

// ============================================================================
// Default Parameters
// ============================================================================
// Used when a config omits a field: 5% nominal rate over a 30-year horizon,
// compounded quarterly in rate mode.

/// Default nominal annual rate (5%)
pub const DEFAULT_ANNUAL_RATE: f64 = 0.05;

/// Default projection horizon in years
pub const DEFAULT_YEARS: u32 = 30;
