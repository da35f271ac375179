mod commands;
mod config;
mod content;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use eventcal_core::calendar::require_day;
use eventcal_core::{Mode, Snapshot};
use tracing_subscriber::EnvFilter;

use crate::config::EventcalConfig;

#[derive(Parser)]
#[command(name = "eventcal")]
#[command(about = "Build a day-by-day event calendar from a directory of content files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Content directory (overrides config)
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Fail on duplicate slugs
    #[arg(long, global = true, conflicts_with = "lenient")]
    strict: bool,

    /// Report duplicate slugs but keep going
    #[arg(long, global = true)]
    lenient: bool,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Show debug diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List normalized events
    Events {
        /// Only events with this tag
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// List calendar days and the events active on each
    Days {
        /// First day to show (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        from: Option<NaiveDate>,

        /// Last day to show (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        to: Option<NaiveDate>,
    },
    /// Show events active today
    Today {
        /// Use this day instead of today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },
    /// List every tag in use
    Tags,
    /// Check content for duplicate slugs
    Check,
    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommand>,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Create a default config file
    Init,
    /// Print the config file location
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = EventcalConfig::load()?;
    if let Some(content) = cli.content {
        config.content_dir = content;
    }
    if let Some(mode) = mode_override(cli.strict, cli.lenient) {
        config.mode = mode;
    }

    match cli.command {
        Commands::Events { tag } => {
            let snapshot = derive(&config)?;
            commands::events::run(&snapshot, tag.as_deref(), cli.json)
        }
        Commands::Days { from, to } => {
            let snapshot = derive(&config)?;
            commands::days::run(&snapshot, from, to, cli.json)
        }
        Commands::Today { date } => {
            let snapshot = derive(&config)?;
            commands::today::run(&snapshot, date, cli.json)
        }
        Commands::Tags => {
            let snapshot = derive(&config)?;
            commands::tags::run(&snapshot, cli.json)
        }
        Commands::Check => {
            let records = content::load_records(&config.content_path())?;
            commands::check::run(&records, cli.json)
        }
        Commands::Config { command } => match command {
            Some(ConfigCommand::Init) => commands::config::init(),
            Some(ConfigCommand::Path) => commands::config::path(),
            None => commands::config::show(&config),
        },
    }
}

/// Diagnostics go to stderr so command output stays pipeable.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn mode_override(strict: bool, lenient: bool) -> Option<Mode> {
    match (strict, lenient) {
        (true, _) => Some(Mode::Strict),
        (false, true) => Some(Mode::Lenient),
        (false, false) => None,
    }
}

fn derive(config: &EventcalConfig) -> Result<Snapshot> {
    let records = content::load_records(&config.content_path())?;
    Ok(Snapshot::derive(Some(records.as_slice()), config.mode)?)
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    require_day(s).map_err(|e| e.to_string())
}
