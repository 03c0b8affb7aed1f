//! Growth series produced by a simulation run

use crate::error::GrowthError;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::CompoundingFrequency;

/// Asset value at the end of one period
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthRow {
    /// 0-based period index
    pub period: u32,
    /// `period / periods_per_year`
    pub year: f64,
    pub asset_value: f64,
}

impl GrowthRow {
    /// True when the row falls on a whole-year boundary
    pub fn is_year_end(&self) -> bool {
        self.year == self.year.round()
    }
}

/// One CSV line, laid out as `Period,Year,Asset Value,Frequency`
#[derive(Serialize)]
struct CsvRecord<'a> {
    #[serde(rename = "Period")]
    period: u32,
    #[serde(rename = "Year")]
    year: f64,
    #[serde(rename = "Asset Value")]
    asset_value: f64,
    #[serde(rename = "Frequency")]
    frequency: &'a str,
}

/// Ordered rows from period 0 to the horizon for a single frequency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthSeries {
    frequency: CompoundingFrequency,
    frequency_label: String,
    rows: Vec<GrowthRow>,
}

impl GrowthSeries {
    pub(crate) fn new(frequency: CompoundingFrequency, rows: Vec<GrowthRow>) -> Self {
        Self {
            frequency,
            frequency_label: frequency.label(),
            rows,
        }
    }

    pub fn rows(&self) -> &[GrowthRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn frequency(&self) -> CompoundingFrequency {
        self.frequency
    }

    pub fn periods_per_year(&self) -> u32 {
        self.frequency.periods_per_year()
    }

    pub fn frequency_label(&self) -> &str {
        &self.frequency_label
    }

    /// Principal at period 0
    pub fn initial_value(&self) -> f64 {
        self.rows.first().map(|r| r.asset_value).unwrap_or(0.0)
    }

    pub fn final_value(&self) -> f64 {
        self.rows.last().map(|r| r.asset_value).unwrap_or(0.0)
    }

    /// Final value less principal
    pub fn total_growth(&self) -> f64 {
        self.final_value() - self.initial_value()
    }

    /// Rows on whole-year boundaries, used for chart annotations
    pub fn yearly_rows(&self) -> impl Iterator<Item = &GrowthRow> + '_ {
        self.rows.iter().filter(|r| r.is_year_end())
    }

    /// Asset value at a given (possibly fractional) year, if a period lands on it
    pub fn value_at_year(&self, year: f64) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| (r.year - year).abs() < 1e-9)
            .map(|r| r.asset_value)
    }

    /// Write the series as CSV with a header row
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), GrowthError> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in &self.rows {
            wtr.serialize(CsvRecord {
                period: row.period,
                year: row.year,
                asset_value: row.asset_value,
                frequency: &self.frequency_label,
            })?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GrowthError> {
        let file = File::create(path.as_ref())?;
        self.write_csv(file)?;
        log::info!("Wrote {} rows to {}", self.rows.len(), path.as_ref().display());
        Ok(())
    }
}
