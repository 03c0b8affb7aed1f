//! Compare compound growth across compounding frequencies
//!
//! Simulates one series per requested frequency, optionally writes each series
//! to CSV, and renders all of them onto a single SVG chart.

use anyhow::{Context, Result};
use clap::Parser;
use compound_growth::growth::effective_annual_rate;
use compound_growth::{
    simulate_frequencies, ChartRenderer, CompoundingFrequency, GrowthConfig, GrowthMode,
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "compare_growth", about = "Compare compound growth across compounding frequencies")]
struct Args {
    /// Starting asset value
    #[arg(short, long, default_value_t = 1000.0)]
    principal: f64,

    /// JSON config file; command line options override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Nominal annual rate for rate mode (0.05 = 5%)
    #[arg(long)]
    rate: Option<f64>,

    /// Amount added every period in dividend mode
    #[arg(long)]
    dividend: Option<f64>,

    /// Growth mode: rate or dividend
    #[arg(long)]
    mode: Option<GrowthMode>,

    /// Horizon in years
    #[arg(long)]
    years: Option<u32>,

    /// Periods per year to compare (1, 2, 4, 12)
    #[arg(long, value_delimiter = ',', default_values_t = CompoundingFrequency::ALL)]
    frequencies: Vec<CompoundingFrequency>,

    /// Output chart path
    #[arg(long, default_value = "compound_growth.svg")]
    chart: PathBuf,

    /// Directory for per-frequency CSV output
    #[arg(long)]
    csv_dir: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<GrowthConfig> {
    let mut config = match &args.config {
        Some(path) => GrowthConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GrowthConfig::default(),
    };

    if let Some(rate) = args.rate {
        config.annual_rate = rate;
    }
    if let Some(dividend) = args.dividend {
        config.dividend_per_period = dividend;
    }
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(years) = args.years {
        config.years = years;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let config = load_config(&args)?;
    log::info!("Using config: {:?}", config);

    println!(
        "Simulating {} mode from {:.2} over {} years at {} frequencies...",
        config.mode,
        args.principal,
        config.years,
        args.frequencies.len()
    );

    let series = simulate_frequencies(args.principal, &config, &args.frequencies)
        .context("Simulation failed")?;

    if let Some(dir) = &args.csv_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        for s in &series {
            let path = dir.join(format!("growth_{}x.csv", s.periods_per_year()));
            s.to_csv_file(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        println!("Series written to {}", dir.display());
    }

    ChartRenderer::default()
        .render(&series, &args.chart)
        .with_context(|| format!("Failed to render chart to {}", args.chart.display()))?;
    println!("Chart written to {}", args.chart.display());

    println!("\nSummary:");
    println!("{:<10} {:>16} {:>16} {:>12}", "Frequency", "Final Value", "Total Growth", "Eff. Rate");
    for s in &series {
        let effective = match config.mode {
            GrowthMode::Rate => format!("{:.4}%", effective_annual_rate(config.annual_rate, s.frequency()) * 100.0),
            GrowthMode::Dividend => "-".to_string(),
        };
        println!(
            "{:<10} {:>16.2} {:>16.2} {:>12}",
            s.frequency_label(),
            s.final_value(),
            s.total_growth(),
            effective
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_compare_all_frequencies() {
        let args = Args::try_parse_from(["compare_growth"]).unwrap();
        assert_eq!(args.frequencies, CompoundingFrequency::ALL.to_vec());
        assert_eq!(load_config(&args).unwrap(), GrowthConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "compare_growth", "--mode", "dividend", "--dividend", "10", "--years", "3",
            "--frequencies", "1,12",
        ])
        .unwrap();
        assert_eq!(args.frequencies, vec![CompoundingFrequency::Annual, CompoundingFrequency::Monthly]);

        let config = load_config(&args).unwrap();
        assert_eq!(config.mode, GrowthMode::Dividend);
        assert_eq!(config.dividend_per_period, 10.0);
        assert_eq!(config.years, 3);
    }

    #[test]
    fn test_rejects_unknown_mode_and_frequency() {
        assert!(Args::try_parse_from(["compare_growth", "--mode", "interest"]).is_err());
        assert!(Args::try_parse_from(["compare_growth", "--frequencies", "3"]).is_err());
    }
}
