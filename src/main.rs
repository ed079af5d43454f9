mod config;
mod error;
mod models;
mod services;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::services::clock::SystemClock;
use crate::services::estimator::SolarEstimator;
use crate::services::sun_times::SunriseSunsetClient;

#[derive(Parser)]
#[command(
    name = "solar-radiation",
    about = "Clear-sky solar irradiance estimate for a configured location"
)]
struct Cli {
    /// Path to the JSON config file (keys LATITUDE, LONGITUDE, TIME_ZONE)
    #[arg(long, default_value = "solar_radiation.json")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "solar_radiation=info".into()),
        )
        .init();

    let cli = Cli::parse();

    // 1. Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("failed to load {}: {e}", cli.config.display());
            return ExitCode::FAILURE;
        }
    };
    match &config {
        Some(c) => println!(
            "Parsed config: latitude {}, longitude {}, timezone {}",
            c.latitude, c.longitude, c.timezone
        ),
        None => println!("Parsed config: none"),
    }

    // 2. Run one estimation pass against the live service and system clock
    let mut estimator = SolarEstimator::new(config, SunriseSunsetClient::new(), SystemClock);

    match estimator.sunrise_sunset().await {
        Ok(Some((sunrise, sunset))) => {
            println!("Sunrise: {}", sunrise.format("%Y-%m-%d %H:%M:%S %Z"));
            println!("Sunset: {}", sunset.format("%Y-%m-%d %H:%M:%S %Z"));
        }
        Ok(None) => {
            println!("Sunrise: n/a");
            println!("Sunset: n/a");
        }
        Err(e) => {
            error!("sunrise/sunset refresh failed: {e}");
            return ExitCode::FAILURE;
        }
    }

    match estimator.is_daytime() {
        Some(day) => println!("Day time: {day}"),
        None => println!("Day time: n/a"),
    }
    println!("Day of year: {}", estimator.day_of_year());

    match estimator.estimate_irradiance().await {
        Ok(Some(w)) => println!("Solar radiation: {w:.1} W/m2"),
        Ok(None) => println!("Solar radiation: n/a"),
        Err(e) => {
            error!("irradiance estimate failed: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
