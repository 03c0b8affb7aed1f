//! Period-by-period growth engine

use crate::error::GrowthError;
use rayon::prelude::*;

use super::{CompoundingFrequency, GrowthConfig, GrowthMode, GrowthRow, GrowthSeries};

/// Runs growth simulations for a fixed set of parameters
#[derive(Debug, Clone, Default)]
pub struct GrowthSimulator {
    config: GrowthConfig,
}

impl GrowthSimulator {
    pub fn new(config: GrowthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// Project `principal` forward over `years * periods_per_year` periods.
    ///
    /// Row 0 holds the principal unchanged; each later row adds one period's
    /// increment to the previous value.
    pub fn simulate(&self, principal: f64) -> Result<GrowthSeries, GrowthError> {
        let config = &self.config;
        ensure_finite("principal", principal)?;
        ensure_finite("annual_rate", config.annual_rate)?;
        ensure_finite("dividend_per_period", config.dividend_per_period)?;

        let periods_per_year = config.frequency.periods_per_year();
        let periods = config.total_periods()?;
        let periodic_rate = config.annual_rate / periods_per_year as f64;

        log::debug!(
            "Simulating {} mode: principal={:.2}, {}, {} periods",
            config.mode, principal, config.frequency, periods
        );

        let mut rows = Vec::with_capacity(periods as usize + 1);
        let mut value = principal;
        rows.push(GrowthRow { period: 0, year: 0.0, asset_value: value });

        for period in 1..=periods {
            let growth = match config.mode {
                GrowthMode::Rate => value * periodic_rate,
                GrowthMode::Dividend => config.dividend_per_period,
            };
            value += growth;
            rows.push(GrowthRow {
                period,
                year: period as f64 / periods_per_year as f64,
                asset_value: value,
            });
        }

        Ok(GrowthSeries::new(config.frequency, rows))
    }
}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), GrowthError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GrowthError::NonFinite { field, value })
    }
}

/// Simulate a single series with the given parameters
pub fn simulate(principal: f64, config: &GrowthConfig) -> Result<GrowthSeries, GrowthError> {
    GrowthSimulator::new(config.clone()).simulate(principal)
}

/// Simulate the same parameters at several compounding frequencies.
///
/// Series are returned in the order of `frequencies`.
pub fn simulate_frequencies(
    principal: f64,
    config: &GrowthConfig,
    frequencies: &[CompoundingFrequency],
) -> Result<Vec<GrowthSeries>, GrowthError> {
    frequencies
        .par_iter()
        .map(|&frequency| simulate(principal, &config.with_frequency(frequency)))
        .collect()
}

/// Annual yield of a nominal rate compounded `frequency` times a year
pub fn effective_annual_rate(annual_rate: f64, frequency: CompoundingFrequency) -> f64 {
    let n = frequency.periods_per_year() as f64;
    (1.0 + annual_rate / n).powf(n) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rate_config(annual_rate: f64, frequency: CompoundingFrequency, years: u32) -> GrowthConfig {
        GrowthConfig {
            annual_rate,
            frequency,
            years,
            mode: GrowthMode::Rate,
            ..Default::default()
        }
    }

    #[test]
    fn test_row_count_and_principal() {
        for frequency in CompoundingFrequency::ALL {
            for years in [0u32, 1, 7, 30] {
                let series = simulate(2500.0, &rate_config(0.05, frequency, years)).unwrap();
                assert_eq!(series.len(), (years * frequency.periods_per_year()) as usize + 1);
                assert_eq!(series.rows()[0].asset_value, 2500.0);
                assert!(series.rows().iter().all(|r| r.asset_value.is_finite()));
            }
        }
    }

    #[test]
    fn test_zero_years_is_principal_only() {
        let series = simulate(1000.0, &rate_config(0.05, CompoundingFrequency::Monthly, 0)).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.final_value(), 1000.0);
    }

    #[test]
    fn test_periods_and_years() {
        let series = simulate(1000.0, &rate_config(0.05, CompoundingFrequency::Monthly, 3)).unwrap();
        for (i, row) in series.rows().iter().enumerate() {
            assert_eq!(row.period, i as u32);
            assert_eq!(row.year, row.period as f64 / 12.0);
        }
        assert_eq!(series.rows().last().map(|r| r.year), Some(3.0));
    }

    #[test]
    fn test_zero_rate_is_flat() {
        let series = simulate(750.0, &rate_config(0.0, CompoundingFrequency::Quarterly, 10)).unwrap();
        assert!(series.rows().iter().all(|r| r.asset_value == 750.0));
    }

    #[test]
    fn test_rate_matches_closed_form() {
        let principal = 1234.5;
        let rate = 0.07;
        for frequency in CompoundingFrequency::ALL {
            let n = frequency.periods_per_year() as f64;
            let series = simulate(principal, &rate_config(rate, frequency, 30)).unwrap();
            for row in series.rows() {
                let expected = principal * (1.0 + rate / n).powi(row.period as i32);
                assert_relative_eq!(row.asset_value, expected, max_relative = 1e-10);
            }
        }
    }

    #[test]
    fn test_rate_is_non_decreasing() {
        let series = simulate(100.0, &GrowthConfig::default()).unwrap();
        assert!(series.rows().windows(2).all(|w| w[1].asset_value >= w[0].asset_value));
    }

    #[test]
    fn test_quarterly_scenario() {
        // 8% nominal, quarterly, 2 years: 1000 * 1.02^8
        let series = simulate(1000.0, &rate_config(0.08, CompoundingFrequency::Quarterly, 2)).unwrap();
        assert_eq!(series.len(), 9);
        let last = series.rows()[8];
        assert_eq!(last.period, 8);
        assert_eq!(last.year, 2.0);
        assert_relative_eq!(last.asset_value, 1000.0 * 1.02_f64.powi(8), max_relative = 1e-12);
        assert!((last.asset_value - 1171.66).abs() < 0.005);
    }

    #[test]
    fn test_dividend_scenario() {
        let config = GrowthConfig {
            dividend_per_period: 10.0,
            frequency: CompoundingFrequency::Annual,
            years: 3,
            mode: GrowthMode::Dividend,
            ..Default::default()
        };
        let series = simulate(500.0, &config).unwrap();
        let values: Vec<f64> = series.rows().iter().map(|r| r.asset_value).collect();
        assert_eq!(values, vec![500.0, 510.0, 520.0, 530.0]);
    }

    #[test]
    fn test_dividend_is_linear_and_ignores_rate() {
        let config = GrowthConfig {
            annual_rate: 0.25,
            dividend_per_period: 2.5,
            frequency: CompoundingFrequency::Monthly,
            years: 5,
            mode: GrowthMode::Dividend,
        };
        let series = simulate(40.0, &config).unwrap();
        for row in series.rows() {
            assert_relative_eq!(row.asset_value, 40.0 + row.period as f64 * 2.5, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_rate_mode_ignores_dividend() {
        let config = GrowthConfig {
            dividend_per_period: 1_000.0,
            ..rate_config(0.0, CompoundingFrequency::Annual, 5)
        };
        let series = simulate(10.0, &config).unwrap();
        assert_eq!(series.final_value(), 10.0);
    }

    #[test]
    fn test_negative_principal_is_accepted() {
        let series = simulate(-100.0, &rate_config(0.04, CompoundingFrequency::Annual, 1)).unwrap();
        assert_relative_eq!(series.final_value(), -104.0, max_relative = 1e-12);
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        let err = simulate(f64::NAN, &GrowthConfig::default()).unwrap_err();
        assert!(matches!(err, GrowthError::NonFinite { field: "principal", .. }));

        let config = GrowthConfig { annual_rate: f64::INFINITY, ..Default::default() };
        let err = simulate(100.0, &config).unwrap_err();
        assert!(matches!(err, GrowthError::NonFinite { field: "annual_rate", .. }));
    }

    #[test]
    fn test_more_frequent_compounding_grows_more() {
        let series = simulate_frequencies(
            1000.0,
            &rate_config(0.05, CompoundingFrequency::Annual, 30),
            &CompoundingFrequency::ALL,
        )
        .unwrap();

        let labels: Vec<&str> = series.iter().map(|s| s.frequency_label()).collect();
        assert_eq!(labels, vec!["1x/year", "2x/year", "4x/year", "12x/year"]);
        assert!(series.windows(2).all(|w| w[1].final_value() > w[0].final_value()));

        // Same horizon, same year-30 point for every frequency
        for s in &series {
            assert!(s.value_at_year(30.0).is_some());
        }
    }

    #[test]
    fn test_period_overflow_is_an_error() {
        let config = rate_config(0.05, CompoundingFrequency::Monthly, u32::MAX / 2);
        let simulator = GrowthSimulator::new(config.clone());
        assert_eq!(simulator.config(), &config);

        let err = simulator.simulate(1000.0).unwrap_err();
        assert!(matches!(err, GrowthError::PeriodOverflow { periods_per_year: 12, .. }));
    }

    #[test]
    fn test_effective_annual_rate() {
        assert_relative_eq!(effective_annual_rate(0.05, CompoundingFrequency::Annual), 0.05, max_relative = 1e-12);
        assert_relative_eq!(
            effective_annual_rate(0.12, CompoundingFrequency::Monthly),
            1.01_f64.powi(12) - 1.0,
            max_relative = 1e-12
        );

        // One year of simulation matches the effective rate
        let series = simulate(1.0, &rate_config(0.08, CompoundingFrequency::Quarterly, 1)).unwrap();
        assert_relative_eq!(
            series.final_value() - 1.0,
            effective_annual_rate(0.08, CompoundingFrequency::Quarterly),
            max_relative = 1e-12
        );
    }
}
