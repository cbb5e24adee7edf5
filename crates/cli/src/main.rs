//! Bakeoff command line
//!
//! Reads and selects the active semester and shows the headers a
//! passcode-scoped backend client sends.

mod output;

use anyhow::{Context, Result};
use bakeoff_core::calendar::{self, DEFAULT_RANGE_YEARS};
use bakeoff_core::{client, FileStorage, SemesterPreferenceStore, TermCode};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Bakeoff - semester selection and scoped backend access
#[derive(Parser, Debug)]
#[command(name = "bakeoff")]
#[command(author = "Bakeoff Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Semester selection and passcode-scoped backend access", long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Directory holding the stored semester (defaults to the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Run without a storage context
    #[arg(long, default_value = "false", global = true)]
    no_storage: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the term code for a date (today by default)
    Current {
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List selectable terms, newest first
    Options {
        /// Number of years to cover, starting last year
        #[arg(short, long, default_value_t = DEFAULT_RANGE_YEARS, allow_negative_numbers = true)]
        range: i32,

        /// Print JSON instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Print the active term code
    Active,

    /// Store a term code as the active one
    Select {
        /// Term code, e.g. W25
        code: TermCode,
    },

    /// Print the headers for requests made outside the backend client
    Headers {
        /// Access passcode (none by default)
        #[arg(short, long, default_value = "")]
        passcode: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args.log_level)?;

    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => return Err(e).context("Failed to load .env file"),
    }

    match args.command {
        Command::Current { date } => {
            let code = match date {
                Some(date) => calendar::current_term_code(&date),
                None => calendar::current_term_code_now(),
            };
            println!("{}", code);
        }
        Command::Options { range, json } => {
            let options = calendar::enumerate_term_options(range);
            if json {
                println!("{}", serde_json::to_string_pretty(&options)?);
            } else {
                print!("{}", output::options_table(&options));
            }
        }
        Command::Active => {
            let store = open_store(args.no_storage, args.data_dir)?;
            println!("{}", store.active_term_code());
        }
        Command::Select { code } => {
            let store = open_store(args.no_storage, args.data_dir)?;
            if !store.has_storage() {
                info!("No storage context, selection not saved");
            }
            store.set_active_term_code(&code.to_string());
            println!("{}", store.active_term_code());
        }
        Command::Headers { passcode } => {
            let client = client::ensure_client(&passcode)
                .context("Failed to set up backend client")?;
            info!("Backend client {} for {}", client.id(), client.url());
            println!("{}", serde_json::to_string_pretty(&client::headers_for_scope())?);
        }
    }

    Ok(())
}

/// Preference store for the requested storage context
fn open_store(no_storage: bool, data_dir: Option<PathBuf>) -> Result<SemesterPreferenceStore> {
    if no_storage {
        return Ok(SemesterPreferenceStore::detached());
    }

    let storage = match data_dir {
        Some(dir) => FileStorage::at(&dir)
            .with_context(|| format!("Invalid data directory: {}", dir.display()))?,
        None => FileStorage::new().context("Failed to open preference storage")?,
    };
    debug!("Preference storage at {}", storage.data_dir().display());

    Ok(SemesterPreferenceStore::new(storage))
}

/// Setup logging with tracing
fn setup_logging(level: &str) -> Result<()> {
    let log_level = level
        .parse::<Level>()
        .unwrap_or(Level::INFO);

    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_select_validates_code() {
        let args = Args::try_parse_from(["bakeoff", "select", "S25"]).unwrap();
        match args.command {
            Command::Select { code } => assert_eq!(code.to_string(), "S25"),
            other => panic!("unexpected command {other:?}"),
        }

        assert!(Args::try_parse_from(["bakeoff", "select", "X25"]).is_err());
    }

    #[test]
    fn test_parse_options_defaults() {
        let args = Args::try_parse_from(["bakeoff", "options"]).unwrap();
        match args.command {
            Command::Options { range, json } => {
                assert_eq!(range, DEFAULT_RANGE_YEARS);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_current_date() {
        let args = Args::try_parse_from(["bakeoff", "current", "--date", "2024-11-01"]).unwrap();
        match args.command {
            Command::Current { date: Some(date) } => {
                assert_eq!(calendar::current_term_code(&date).to_string(), "F24")
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["bakeoff", "active", "--no-storage"]).unwrap();
        assert!(args.no_storage);
        let store = open_store(args.no_storage, args.data_dir).unwrap();
        assert!(!store.has_storage());
    }

    #[test]
    fn test_open_store_with_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(false, Some(dir.path().to_path_buf())).unwrap();
        store.set_active_term_code("F25");
        assert_eq!(store.active_term_code(), "F25");
    }
}
