//! Funding CLI - discount factors from a funding curve definition
//!
//! Loads a base (OIS) curve and optional credit spread from a TOML file and
//! answers discount factor queries against the composed curve.
//!
//! # Commands
//!
//! - `funding discount -d <DATE> [-d <DATE> ...]` - Discount factors for given dates
//! - `funding table [--step-months N] [--horizon-months N]` - Discount factor grid
//! - `funding check` - Validate the curve definition and summarise it
//!
//! Tables are written to stdout; logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use curve_core::types::Date;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::AppConfig;

/// Funding curve discount factor CLI
#[derive(Parser)]
#[command(name = "funding")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "funding.toml")]
    config: PathBuf,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Discount factors for one or more dates
    Discount {
        /// Target date (YYYY-MM-DD); repeat for several dates
        #[arg(short, long = "date", required = true)]
        dates: Vec<Date>,
    },

    /// Discount factors on a monthly grid from the valuation date
    Table {
        /// Months between grid dates
        #[arg(long, default_value = "6")]
        step_months: u32,

        /// Months from the valuation date to the last grid date
        #[arg(long, default_value = "120")]
        horizon_months: u32,
    },

    /// Validate the curve definition and print a summary
    Check,
}

/// Initialise tracing; `RUST_LOG` takes precedence over `level` when set.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config, cli.log_level.as_deref())?;
    init_tracing(config.log_level.as_filter_str());

    info!(
        config = %cli.config.display(),
        log_level = %config.log_level,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Discount { dates } => commands::discount::run(&config.curve, &dates),
        Commands::Table {
            step_months,
            horizon_months,
        } => commands::table::run(&config.curve, step_months, horizon_months),
        Commands::Check => commands::check::run(&config.curve),
    }
}
