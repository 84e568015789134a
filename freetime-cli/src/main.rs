mod commands;
mod logger;
mod render;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use freetime_core::config::FreetimeConfig;
use freetime_core::{DisplayMode, FileStorage, ScheduleState, ScheduleStore};
use slog::{Logger, debug};

#[derive(Parser)]
#[command(name = "freetime")]
#[command(about = "Record your weekly classes and see when you are free")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the timetable
    Show {
        /// Highlight free slots instead of classes
        #[arg(short, long, conflicts_with = "normal")]
        free: bool,

        /// Highlight classes even if free time is the configured default
        #[arg(short, long)]
        normal: bool,
    },
    /// Add a class. Prompts for the day and times when none are given.
    Add {
        /// Weekday (MON..FRI, or a name like "monday")
        day: Option<String>,

        /// First slot, as a label ("10:00") or an index (0-18)
        start: Option<String>,

        /// Last slot, inclusive
        end: Option<String>,
    },
    /// Remove every class
    Reset,
    /// Show config and data paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = FreetimeConfig::load()?;
    let level = if cli.verbose {
        slog::Level::Debug
    } else {
        config.log_level()?
    };
    let logger = logger::create_root_logger(level);

    match cli.command {
        Commands::Show { free, normal } => {
            let mode = match (free, normal) {
                (true, _) => DisplayMode::FreeTime,
                (_, true) => DisplayMode::Normal,
                _ => config.initial_mode(),
            };
            let state = load_state(&config, &logger);
            commands::show::run(&state, mode)
        }
        Commands::Add { day, start, end } => {
            let mut store = open_store(&config, &logger);
            let entry = match (day, start, end) {
                (None, None, None) => commands::form::prompt()?,
                (Some(day), Some(start), Some(end)) => commands::add::parse_entry(&day, &start, &end)?,
                _ => anyhow::bail!(
                    "Give a day, a start and an end, or nothing to pick them interactively.\n\n\
                    Example:\n  \
                    freetime add mon 09:30 11:00"
                ),
            };
            commands::add::run(&mut store, entry, config.initial_mode()).await
        }
        Commands::Reset => {
            let mut store = open_store(&config, &logger);
            commands::reset::run(&mut store).await
        }
        Commands::Config => commands::config::run(&config),
    }
}

fn open_store(config: &FreetimeConfig, logger: &Logger) -> ScheduleStore {
    let path = config.data_path();
    debug!(logger, "Opening timetable"; "path" => %path.display());
    ScheduleStore::open(Arc::new(FileStorage::new(path)), logger.clone())
}

/// Read the timetable without starting a writer.
fn load_state(config: &FreetimeConfig, logger: &Logger) -> ScheduleState {
    let path = config.data_path();
    debug!(logger, "Reading timetable"; "path" => %path.display());
    ScheduleStore::load(&FileStorage::new(path), logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_state_needs_no_runtime_and_writes_nothing() {
        let config = FreetimeConfig {
            data_file: std::env::temp_dir().join("freetime-missing/timetable.toml"),
            ..FreetimeConfig::default()
        };
        let logger = Logger::root(slog::Discard, slog::o!());

        let state = load_state(&config, &logger);

        assert!(state.is_empty());
        assert!(!config.data_path().exists());
    }
}
