//! # forecast_demo
//!
//! Command-line front end for the forecasting engine. Reads a series from a
//! JSON array file, or generates a sample shipment series, and prints the
//! forecast report or a comparison of all methods.

use clap::Parser;
use forecast_engine::{
    build_report, compare_models, generate_sample_shipment_data, ForecastMethod, ForecastOptions,
    SampleConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "forecast_demo")]
#[command(about = "Shipment volume forecasting demo", long_about = None)]
struct Cli {
    /// Forecasting method (ma, es, lr)
    #[arg(short, long, default_value = "es")]
    method: ForecastMethod,

    /// Number of future periods to forecast
    #[arg(short, long, default_value_t = forecast_engine::config::DEFAULT_PERIODS)]
    periods: usize,

    /// Moving average window
    #[arg(short, long, default_value_t = forecast_engine::config::DEFAULT_WINDOW)]
    window: usize,

    /// Exponential smoothing factor
    #[arg(short, long, default_value_t = forecast_engine::config::DEFAULT_ALPHA)]
    alpha: f64,

    /// Input file holding a JSON array of observations
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Length of the generated sample series when no input is given
    #[arg(long, default_value_t = forecast_engine::sample::DEFAULT_MONTHS)]
    months: usize,

    /// Seed for the generated sample series
    #[arg(long)]
    seed: Option<u64>,

    /// Score every method instead of forecasting with one
    #[arg(long)]
    compare: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn load_series(cli: &Cli) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    if let Some(path) = &cli.input {
        let raw = fs::read_to_string(path)?;
        let series: Vec<f64> = serde_json::from_str(&raw)?;
        tracing::info!("loaded {} observations from {}", series.len(), path.display());
        return Ok(series);
    }

    let series = match cli.seed {
        Some(seed) => {
            SampleConfig::default().generate_with(cli.months, &mut StdRng::seed_from_u64(seed))?
        }
        None => generate_sample_shipment_data(cli.months),
    };
    tracing::info!("generated {} sample observations", series.len());
    Ok(series)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forecast_engine=info,forecast_demo=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let options = ForecastOptions::new(cli.method)
        .with_periods(cli.periods)
        .with_window(cli.window)
        .with_alpha(cli.alpha);
    let series = load_series(&cli)?;

    if cli.compare {
        let summaries = compare_models(&series, &options)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
            return Ok(());
        }

        println!("{:<24} {:>12} {:>12} {:>10} {:>10}", "Model", "MAE", "RMSE", "MAPE", "Accuracy");
        for summary in &summaries {
            let accuracy = summary
                .accuracy
                .map(|a| format!("{:.2}%", a))
                .unwrap_or_else(|| "n/a".to_string());
            println!(
                "{:<24} {:>12.2} {:>12.2} {:>10} {:>10}",
                summary.name,
                summary.metrics.mae,
                summary.metrics.rmse,
                summary.metrics.mape.to_string(),
                accuracy
            );
        }
        return Ok(());
    }

    let report = build_report(&series, &options)?;
    if cli.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!("Forecast using {}:", report.method);
    for point in &report.forecasts {
        println!(
            "  {:<10} {:>12.2}  [{:.2}, {:.2}]",
            point.label, point.predicted, point.confidence.lower, point.confidence.upper
        );
    }
    println!();
    print!("{}", report.metrics);

    Ok(())
}
