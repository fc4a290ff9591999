use clap::{Parser, Subcommand};
use price_forecast::config::{DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILTER};
use price_forecast::{Dashboard, DashboardConfig, ForecastError, Result};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// National food price history and forecast
#[derive(Debug, Parser)]
#[command(name = "pangan", version, about = "National food price history and forecast")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Price dataset, overrides `data_path`
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Fitted model artifact, overrides `model_path`
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List commodities in the dataset
    Commodities,
    /// List years in the dataset
    Years,
    /// Show the price history and summary of a commodity
    History {
        #[arg(long)]
        commodity: String,
        /// Year to include; repeat for several, omit for all
        #[arg(long = "year")]
        years: Vec<i32>,
    },
    /// Forecast the price for a month
    Forecast {
        /// Target month, 1-12
        #[arg(long)]
        month: u32,
        /// Target year
        #[arg(long)]
        year: i32,
        /// Commodity, defaults to the configured forecast commodity
        #[arg(long)]
        commodity: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_user_correctable() => {
            eprintln!("warning: {}", user_message(&err));
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // The configured filter is not known until the config is loaded
    let startup = tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_LOG_FILTER))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let mut config = tracing::subscriber::with_default(startup, || {
        DashboardConfig::load_or_default(&cli.config)
    })?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    if let Some(model) = cli.model {
        config.model_path = model;
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.log_filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let dashboard = Dashboard::load(config)?;

    match cli.command {
        Command::Commodities => {
            for commodity in dashboard.commodities() {
                println!("{commodity}");
            }
        }
        Command::Years => {
            for year in dashboard.years() {
                println!("{year}");
            }
        }
        Command::History { commodity, years } => {
            let years = selected_years(years, || dashboard.years());
            let commodity = dashboard
                .store()
                .resolve_commodity(&commodity)
                .unwrap_or(commodity);
            print_history(&dashboard, &commodity, &years)?;
        }
        Command::Forecast {
            month,
            year,
            commodity,
        } => {
            let commodity =
                commodity.unwrap_or_else(|| dashboard.forecast_commodity().to_string());
            let forecast = dashboard.forecast(&commodity, month, year)?;
            println!(
                "Perkiraan harga {} pada {:02}-{} adalah {}",
                forecast.commodity,
                forecast.query.target_month(),
                forecast.query.target_year(),
                rupiah(forecast.value)
            );
        }
    }

    Ok(())
}

fn print_history(dashboard: &Dashboard, commodity: &str, years: &BTreeSet<i32>) -> Result<()> {
    let history = dashboard.history(commodity, years)?;

    println!("Tren Harga {}", history.view.commodity());
    match history.summary {
        Some(summary) => {
            println!("  Harga Rata-rata : {}", rupiah(summary.mean));
            println!("  Harga Tertinggi : {}", rupiah(summary.max));
            println!("  Harga Terendah  : {}", rupiah(summary.min));
        }
        None => {
            println!("Data tidak tersedia untuk parameter yang dipilih.");
            return Ok(());
        }
    }

    println!();
    for record in history.view.iter() {
        println!(
            "  {}  {:<9} {}  {}",
            record.timestamp().format("%Y-%m"),
            record.month_label(),
            record.year(),
            rupiah(record.price())
        );
    }

    if !dashboard.is_forecastable(commodity) {
        println!();
        println!(
            "Prediksi hanya tersedia untuk komoditas {}.",
            dashboard.forecast_commodity()
        );
    }

    Ok(())
}

/// `RUST_LOG` when set, otherwise `fallback`
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// The `--year` values, or every year in the data when none were given
fn selected_years<F>(years: Vec<i32>, all_years: F) -> BTreeSet<i32>
where
    F: FnOnce() -> BTreeSet<i32>,
{
    if years.is_empty() {
        all_years()
    } else {
        years.into_iter().collect()
    }
}

/// Whole rupiah, dropping the fractional part
fn rupiah(value: f64) -> String {
    format!("Rp {}", value.trunc() as i64)
}

fn user_message(err: &ForecastError) -> String {
    match err {
        ForecastError::NonFuturePeriod { .. } => {
            "Periode prediksi harus setelah data terakhir.".to_string()
        }
        ForecastError::ForecastUnavailable(commodity) => {
            format!("Prediksi hanya tersedia untuk komoditas {}.", commodity)
        }
        ForecastError::InvalidMonth(month) => {
            format!("Bulan prediksi harus antara 1 dan 12, bukan {}.", month)
        }
        ForecastError::OutsideHorizon { year, min, max } => {
            format!(
                "Tahun prediksi harus antara {} dan {}, bukan {}.",
                min, max, year
            )
        }
        ForecastError::UnknownCommodity(commodity) => {
            format!("Komoditas {} tidak ditemukan dalam data.", commodity)
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupiah_truncates() {
        assert_eq!(rupiah(14_999.99), "Rp 14999");
        assert_eq!(rupiah(15_000.0), "Rp 15000");
    }

    #[test]
    fn test_cli_parses_repeated_years() {
        let cli = Cli::try_parse_from([
            "pangan", "history", "--commodity", "Gula Pasir", "--year", "2023", "--year", "2024",
        ])
        .unwrap();

        match cli.command {
            Command::History { commodity, years } => {
                assert_eq!(commodity, "Gula Pasir");
                assert_eq!(years, vec![2023, 2024]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_non_future_message() {
        let message = user_message(&ForecastError::NonFuturePeriod { months_ahead: 0 });
        assert!(message.contains("setelah data terakhir"));
    }

    #[test]
    fn test_policy_messages_are_indonesian() {
        let horizon = user_message(&ForecastError::OutsideHorizon {
            year: 2030,
            min: 2024,
            max: 2026,
        });
        assert_eq!(horizon, "Tahun prediksi harus antara 2024 dan 2026, bukan 2030.");

        let unknown = user_message(&ForecastError::UnknownCommodity("Kedelai".to_string()));
        assert_eq!(unknown, "Komoditas Kedelai tidak ditemukan dalam data.");
    }

    #[test]
    fn test_no_year_flag_selects_every_year() {
        let all: BTreeSet<i32> = [2022, 2023, 2024].into_iter().collect();

        assert_eq!(selected_years(Vec::new(), || all.clone()), all);
        assert_eq!(
            selected_years(vec![2024, 2023, 2024], || all.clone()),
            [2023, 2024].into_iter().collect::<BTreeSet<i32>>()
        );
    }
}
