//! Roteiro CLI
//!
//! Asks a Gemini model for a city itinerary, or replays saved model output
//! through the extractor, and prints the result.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cmd;
mod config;
mod output;
mod prompt;

use config::Config;
use prompt::{DEFAULT_DAYS, MAX_DAYS, MIN_DAYS};

#[derive(Parser)]
#[command(name = "roteiro")]
#[command(about = "Generate travel itineraries and recover them from LLM output")]
#[command(version)]
struct Cli {
    /// Print the selected view as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Treat malformed routes as plain text instead of rendering what fits
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the model for an itinerary
    Generate {
        /// Destination city
        #[arg(short, long)]
        city: String,

        /// Length of stay in days
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_DAYS,
            value_parser = clap::value_parser!(u32).range(MIN_DAYS as i64..=MAX_DAYS as i64)
        )]
        days: u32,
    },

    /// Run the extractor over saved model output
    ///
    /// Reads FILE, or stdin when FILE is omitted or `-`.
    Extract {
        /// File holding the raw model text
        file: Option<PathBuf>,

        /// City to show when the output does not name one
        #[arg(long)]
        city: Option<String>,

        /// Day count to show when the output does not give one
        #[arg(long)]
        days: Option<u32>,

        /// Print how the result was recovered (to stderr)
        #[arg(long)]
        explain: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout stays clean for --json
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,itinerary_extract=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if cli.strict {
        config.extractor.strict_shape = true;
    }

    match cli.command {
        Commands::Generate { city, days } => cmd::generate::run(&config, &city, days, cli.json).await,
        Commands::Extract {
            file,
            city,
            days,
            explain,
        } => cmd::extract::run(
            &config,
            cmd::extract::ExtractArgs {
                input: file.as_deref(),
                city,
                days,
                json: cli.json,
                explain,
            },
        ),
    }
}
