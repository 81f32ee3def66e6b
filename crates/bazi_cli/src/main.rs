use std::path::PathBuf;

use anyhow::Context;
use bazi_calendar::{lunar_year_months, to_lunar};
use bazi_config::BaziConfig;
use bazi_core::{BirthInput, ChartOptions, CorrectedTime, Gender, ZiHourPolicy};
use bazi_remote::ChartService;
use bazi_tables::{SexagenaryPair, nayin_of};
use bazi_time::to_true_solar_time;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod parse;
mod render;

use render::CycleEntry;

#[derive(Parser)]
#[command(name = "bazi", version, about = "Four Pillars (BaZi) chart calculator")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart for a birth
    Chart {
        /// Civil birth date (YYYY-MM-DD)
        #[arg(long, value_parser = parse::date)]
        date: NaiveDate,
        /// Civil clock time (HH:MM)
        #[arg(long, value_parser = parse::clock)]
        time: (u32, u32),
        /// Birthplace longitude, degrees east
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// male or female
        #[arg(long)]
        gender: Gender,
        /// Civil zone in minutes east of UTC (overrides config)
        #[arg(long, allow_negative_numbers = true)]
        utc_offset: Option<i32>,
        /// Day pillar rule for 23:00-23:59 (overrides config)
        #[arg(long, value_enum)]
        zi_hour: Option<ZiHour>,
        /// Never contact the remote source
        #[arg(long)]
        local: bool,
    },
    /// True solar time for a civil clock time
    SolarTime {
        /// Civil date (YYYY-MM-DD)
        #[arg(long, value_parser = parse::date)]
        date: NaiveDate,
        /// Civil clock time (HH:MM)
        #[arg(long, value_parser = parse::clock)]
        time: (u32, u32),
        /// Longitude, degrees east
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Civil zone in minutes east of UTC (overrides config)
        #[arg(long, allow_negative_numbers = true)]
        utc_offset: Option<i32>,
    },
    /// Lunar date of a civil date
    Lunar {
        /// Civil date (YYYY-MM-DD)
        #[arg(long, value_parser = parse::date)]
        date: NaiveDate,
        /// Also list the months of that lunar year
        #[arg(long)]
        months: bool,
    },
    /// Na Yin of a stem-branch pair
    Nayin {
        /// Pair as 甲子, Jia-Zi or a cycle index 0-59
        #[arg(value_parser = parse::pair)]
        pair: SexagenaryPair,
    },
    /// The sixty-pair cycle, or one entry of it
    Cycle {
        /// Pair as 甲子, Jia-Zi or a cycle index 0-59
        #[arg(value_parser = parse::pair)]
        pair: Option<SexagenaryPair>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ZiHour {
    SameDay,
    NextDay,
}

impl From<ZiHour> for ZiHourPolicy {
    fn from(z: ZiHour) -> Self {
        match z {
            ZiHour::SameDay => Self::SameDay,
            ZiHour::NextDay => Self::NextDay,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = BaziConfig::load(cli.config.as_deref()).context("loading configuration")?;
    init_tracing(&config.logging.level);
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Chart {
            date,
            time: (hour, minute),
            lon,
            gender,
            utc_offset,
            zi_hour,
            local,
        } => {
            let mut options = config.chart;
            if let Some(offset) = utc_offset {
                options.utc_offset_minutes = offset;
            }
            if let Some(z) = zi_hour {
                options.zi_hour = z.into();
            }
            let input = BirthInput {
                birth_date: date,
                birth_hour: hour,
                birth_minute: minute,
                longitude: lon,
                gender,
            };

            let service: ChartService = if local {
                ChartService::local(options)
            } else {
                ChartService::from_config(&config.remote, options)?
            };
            let chart = service.chart(&input).await?;

            if cli.json {
                print_json(&chart)?;
            } else {
                render::chart(&chart);
            }
        }

        Commands::SolarTime {
            date,
            time: (hour, minute),
            lon,
            utc_offset,
        } => {
            let offset = utc_offset.unwrap_or(config.chart.utc_offset_minutes);
            let t = CorrectedTime::from(to_true_solar_time(date, hour, minute, lon, offset)?);
            if cli.json {
                print_json(&t)?;
            } else {
                render::solar_time(&t);
            }
        }

        Commands::Lunar { date, months } => {
            let lunar = to_lunar(date)?;
            let year_months = if months {
                Some(lunar_year_months(lunar.year)?)
            } else {
                None
            };
            if cli.json {
                print_json(&serde_json::json!({ "lunar_date": lunar, "months": year_months }))?;
            } else {
                render::lunar(&lunar, year_months.as_deref());
            }
        }

        Commands::Nayin { pair } => {
            let n = nayin_of(pair);
            if cli.json {
                print_json(&serde_json::json!({ "pair": pair.chinese(), "nayin": n }))?;
            } else {
                println!(
                    "{} ({}): {} ({}), {}",
                    pair.chinese(),
                    pair.name(),
                    n.chinese,
                    n.pinyin,
                    n.element.name()
                );
            }
        }

        Commands::Cycle { pair } => {
            let entries: Vec<CycleEntry> = match pair {
                Some(p) => vec![p.into()],
                None => (0..60).map(|i| SexagenaryPair::from_offset(i).into()).collect(),
            };
            if cli.json {
                print_json(&entries)?;
            } else {
                render::cycle(&entries);
            }
        }
    }

    Ok(())
}

/// `RUST_LOG` wins over the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
