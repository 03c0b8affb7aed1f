//! Simulation parameters: compounding frequency, growth mode and defaults

use crate::error::GrowthError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::{DEFAULT_ANNUAL_RATE, DEFAULT_YEARS};

/// Number of compounding periods per year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum CompoundingFrequency {
    Annual,
    SemiAnnual,
    #[default]
    Quarterly,
    Monthly,
}

impl CompoundingFrequency {
    /// All supported frequencies, least to most frequent
    pub const ALL: [CompoundingFrequency; 4] = [
        CompoundingFrequency::Annual,
        CompoundingFrequency::SemiAnnual,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
    ];

    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Annual => 1,
            CompoundingFrequency::SemiAnnual => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
        }
    }

    /// Display tag used for legends and CSV output, e.g. "4x/year"
    pub fn label(self) -> String {
        format!("{}x/year", self.periods_per_year())
    }
}

impl TryFrom<u32> for CompoundingFrequency {
    type Error = GrowthError;

    fn try_from(periods: u32) -> Result<Self, Self::Error> {
        match periods {
            1 => Ok(CompoundingFrequency::Annual),
            2 => Ok(CompoundingFrequency::SemiAnnual),
            4 => Ok(CompoundingFrequency::Quarterly),
            12 => Ok(CompoundingFrequency::Monthly),
            other => Err(GrowthError::UnsupportedFrequency(other.to_string())),
        }
    }
}

impl From<CompoundingFrequency> for u32 {
    fn from(frequency: CompoundingFrequency) -> Self {
        frequency.periods_per_year()
    }
}

impl FromStr for CompoundingFrequency {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let numeric = normalized.strip_suffix("x/year").unwrap_or(normalized.as_str());
        if let Ok(periods) = numeric.parse::<u32>() {
            return Self::try_from(periods);
        }
        match normalized.as_str() {
            "annual" | "annually" | "yearly" => Ok(CompoundingFrequency::Annual),
            "semiannual" | "semi-annual" | "semiannually" => Ok(CompoundingFrequency::SemiAnnual),
            "quarterly" => Ok(CompoundingFrequency::Quarterly),
            "monthly" => Ok(CompoundingFrequency::Monthly),
            _ => Err(GrowthError::UnsupportedFrequency(s.to_string())),
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// How each period's increment is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GrowthMode {
    /// Increment is a fraction of the current value: `value * rate / periods_per_year`
    #[default]
    Rate,
    /// Increment is the constant `dividend_per_period`
    Dividend,
}

impl FromStr for GrowthMode {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rate" => Ok(GrowthMode::Rate),
            "dividend" => Ok(GrowthMode::Dividend),
            _ => Err(GrowthError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for GrowthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowthMode::Rate => f.write_str("rate"),
            GrowthMode::Dividend => f.write_str("dividend"),
        }
    }
}

/// Parameters for a growth simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Nominal annual rate, used only in `Rate` mode (0.05 = 5%)
    #[serde(default = "default_annual_rate")]
    pub annual_rate: f64,

    /// Fixed amount added every period, used only in `Dividend` mode
    #[serde(default)]
    pub dividend_per_period: f64,

    #[serde(default)]
    pub frequency: CompoundingFrequency,

    /// Horizon in whole years
    #[serde(default = "default_years")]
    pub years: u32,

    #[serde(default)]
    pub mode: GrowthMode,
}

fn default_annual_rate() -> f64 { DEFAULT_ANNUAL_RATE }
fn default_years() -> u32 { DEFAULT_YEARS }

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            annual_rate: DEFAULT_ANNUAL_RATE,
            dividend_per_period: 0.0,
            frequency: CompoundingFrequency::Quarterly,
            years: DEFAULT_YEARS,
            mode: GrowthMode::Rate,
        }
    }
}

impl GrowthConfig {
    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, GrowthError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, GrowthError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Same parameters at a different compounding frequency
    pub fn with_frequency(&self, frequency: CompoundingFrequency) -> Self {
        Self { frequency, ..self.clone() }
    }

    /// Total number of simulated periods
    pub fn total_periods(&self) -> Result<u32, GrowthError> {
        let periods_per_year = self.frequency.periods_per_year();
        self.years
            .checked_mul(periods_per_year)
            .ok_or(GrowthError::PeriodOverflow { years: self.years, periods_per_year })
    }
}
