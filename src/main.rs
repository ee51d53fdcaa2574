//! Command line front end for the date code codecs.
//!
//! ```bash
//! datecode encode --era late-1980 --factory fr --year 1987 --period 11
//! datecode encode --era 2007 --factory AA --date 2012-08-20
//! datecode decode --era 1990 SD0934
//! datecode lookup sd --json
//! ```

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use datecode::clock::Clock;
use datecode::codec::{DecodedDateCode, Era};
use datecode::configuration::get_configuration;
use datecode::domain::{lookup_countries, ManufacturingPeriod};
use datecode::telemetry::{get_subscriber, init_subscriber};

#[derive(Parser)]
#[command(name = "datecode", version)]
#[command(about = "Encode and decode the date codes stamped on manufactured goods")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Build the date code for a factory and manufacturing period
    Encode {
        /// early-1980, late-1980, 1990 or 2007
        #[arg(long)]
        era: Era,

        /// Two-letter factory location code (not used by early-1980)
        #[arg(long, short)]
        factory: Option<String>,

        /// Manufacturing date, YYYY-MM-DD
        #[arg(long, conflicts_with_all = ["year", "period"])]
        date: Option<NaiveDate>,

        #[arg(long, required_unless_present = "date", requires = "period")]
        year: Option<i32>,

        /// Month (before 2007) or ISO week (2007 on)
        #[arg(long, requires = "year")]
        period: Option<u32>,
    },

    /// Read the factory and manufacturing period back from a date code
    Decode {
        /// early-1980, late-1980, 1990 or 2007
        #[arg(long)]
        era: Era,

        code: String,
    },

    /// List the countries using a factory location code
    Lookup { code: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let configuration = get_configuration().context("Failed to read configuration.")?;

    // stdout carries results, logs go to stderr
    let subscriber = get_subscriber(
        "datecode".into(),
        configuration.telemetry.level.clone(),
        std::io::stderr,
    );
    init_subscriber(subscriber)?;

    let clock = configuration.clock.clock();
    tracing::debug!(today = %clock.today(), "Using reference date");

    run(cli, &clock)
}

fn run(cli: Cli, clock: &impl Clock) -> anyhow::Result<()> {
    match cli.command {
        Command::Encode {
            era,
            factory,
            date,
            year,
            period,
        } => {
            let factory = factory.as_deref();
            let code = match (date, year, period) {
                (Some(date), _, _) => era.encode_date(factory, date, clock),
                (None, Some(year), Some(period)) => era.encode(factory, year, period, clock),
                _ => anyhow::bail!("Either --date or both --year and --period are required."),
            }
            .with_context(|| format!("Failed to encode a {} date code.", era))?;

            if cli.json {
                let output = serde_json::json!({ "era": era, "code": code });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", code);
            }
        }
        Command::Decode { era, code } => {
            let decoded = era
                .decode(&code, clock)
                .with_context(|| format!("Failed to decode '{}' as a {} date code.", code, era))?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&decoded)?);
            } else {
                print_decoded(&decoded);
            }
        }
        Command::Lookup { code } => {
            let countries = lookup_countries(&code)
                .with_context(|| format!("Failed to look up factory location '{}'.", code))?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&countries)?);
            } else {
                println!("{}", countries);
            }
        }
    }

    Ok(())
}

fn print_decoded(decoded: &DecodedDateCode) {
    println!("year:      {}", decoded.period.year());
    match decoded.period {
        ManufacturingPeriod::Month(ym) => println!("month:     {}", ym.month),
        ManufacturingPeriod::IsoWeek(yw) => println!("week:      {}", yw.week),
    }

    if let Some(factory) = &decoded.factory {
        println!("factory:   {}", factory.code());
        println!("countries: {}", factory.countries());
    }
}
