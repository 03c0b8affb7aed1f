//! Error types for simulation and chart rendering

use thiserror::Error;

/// Errors raised while configuring or running a growth simulation
#[derive(Debug, Error)]
pub enum GrowthError {
    #[error("unknown growth mode '{0}' (expected 'rate' or 'dividend')")]
    UnknownMode(String),

    #[error("unsupported compounding frequency '{0}' (expected 1, 2, 4 or 12 periods per year)")]
    UnsupportedFrequency(String),

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{years} years at {periods_per_year} periods per year exceeds the supported period count")]
    PeriodOverflow { years: u32, periods_per_year: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to write series: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors raised while rendering a comparison chart
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no series to plot")]
    NoSeries,

    #[error("chart backend error: {0}")]
    Backend(String),

    #[error("failed to write chart: {0}")]
    Io(#[from] std::io::Error),
}
