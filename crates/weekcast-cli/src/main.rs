use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use weekcast_client::config::DEFAULT_BASE_URL;
use weekcast_client::{FetchConfig, WeatherService, weather_service};
use weekcast_core::{City, ForecastEntry, ForecastSet};

#[derive(Parser)]
#[command(name = "weekcast", version, about = "Seven-day city forecast from the command line")]
struct Cli {
    /// Upstream forecast host
    #[arg(long, global = true, env = "WEEKCAST_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "WEEKCAST_TIMEOUT_SECS", default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the forecast for the next seven days
    Week {
        /// City name as used by the upstream (e.g. "minsk")
        city: String,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Show the forecast for one date
    Day {
        /// City name as used by the upstream (e.g. "minsk")
        city: String,

        /// Date label exactly as the upstream renders it (e.g. "21 Mar")
        date: String,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Csv,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("weekcast=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = FetchConfig::new(&cli.base_url, Duration::from_secs(cli.timeout))
        .map_err(|e| anyhow::anyhow!(e))?;
    let service = weather_service(config).map_err(|e| anyhow::anyhow!(e))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Week { city, format } => cmd_week(&service, &city, format, &mut out).await?,
        Commands::Day { city, date, format } => {
            cmd_day(&service, &city, &date, format, &mut out).await?
        }
    }

    Ok(())
}

async fn cmd_week(
    service: &WeatherService,
    city: &str,
    format: Format,
    out: &mut impl Write,
) -> Result<()> {
    let city = City::new(city).map_err(|e| anyhow::anyhow!(e))?;
    let forecast = service
        .week(&city)
        .await
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("Failed to get weekly forecast for {city}"))?;

    write_week(&city, &forecast, format, out)
}

async fn cmd_day(
    service: &WeatherService,
    city: &str,
    date: &str,
    format: Format,
    out: &mut impl Write,
) -> Result<()> {
    let city = City::new(city).map_err(|e| anyhow::anyhow!(e))?;
    let entry = service
        .day(&city, date)
        .await
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("Failed to get forecast for {city} on {date}"))?;

    write_day(&entry, format, out)
}

fn write_week(
    city: &City,
    forecast: &ForecastSet,
    format: Format,
    out: &mut impl Write,
) -> Result<()> {
    match format {
        Format::Text => {
            writeln!(out, "Weather in {city} for week:")?;
            for line in forecast.display_lines() {
                writeln!(out, "  {line}")?;
            }
        }
        Format::Json => {
            let body = serde_json::json!({ "city": city, "days": forecast });
            writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
        }
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for entry in forecast {
                writer.serialize(entry)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

fn write_day(entry: &ForecastEntry, format: Format, out: &mut impl Write) -> Result<()> {
    match format {
        Format::Text => writeln!(out, "{}", entry.summary())?,
        Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(entry)?)?,
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.serialize(entry)?;
            writer.flush()?;
        }
    }
    Ok(())
}
