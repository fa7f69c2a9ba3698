//! # Recap CLI Library
//!
//! Argument parsing, logging setup and command dispatch for `recap`.
//!
//! ## Module Structure
//! ```text
//! recap_cli/
//! ├── lib.rs       ◄─── You are here (Cli, init_tracing, run)
//! ├── main.rs      ◄─── Thin entry point
//! ├── error.rs     ◄─── CliError
//! ├── state/       ◄─── ConfigState, SessionState
//! └── commands/    ◄─── One function per subcommand
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::commands::CommandOutput;
use crate::error::CliResult;
use crate::state::{ConfigState, SessionState};

/// Python fundamentals recap, one exercise per subcommand
#[derive(Debug, Parser)]
#[command(name = "recap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Every arithmetic operator applied to two numbers
    #[command(allow_negative_numbers = true)]
    Arithmetic { a: f64, b: f64 },

    /// Case, length, words and first/last letter of a text
    String { text: String },

    /// Length, ends and first two items of a list
    List { items: Vec<String> },

    /// Age group for an age in years
    #[command(allow_negative_numbers = true)]
    Age { age: i64 },

    /// Multiplication table for a number
    Table {
        n: i64,

        /// Last multiplier (defaults to the configured value)
        #[arg(long)]
        up_to: Option<i64>,
    },

    /// Body Mass Index and its category
    Bmi {
        /// Weight in kilograms
        weight: f64,
        /// Height in meters
        height: f64,
    },

    /// The FizzBuzz sequence
    Fizzbuzz {
        /// Length of the sequence (defaults to the configured value)
        #[arg(long)]
        up_to: Option<i64>,
    },

    /// Session inventory, optionally updated first
    Inventory {
        /// Product line to set, e.g. `pears=12`; may be repeated
        #[arg(long = "add", value_name = "NAME=QTY")]
        adds: Vec<String>,
    },

    /// The five comprehension exercises
    Comprehensions,

    /// Set operations on {1..5} and {4..8}
    Sets,

    /// Distinct items of a list, in no particular order
    Dedupe { items: Vec<String> },

    /// Totals and average of the sample sales
    Sales,

    /// Letter frequencies of delimiter-separated words
    Words {
        text: String,

        /// How many letters to rank (defaults to the configured value)
        #[arg(long)]
        top: Option<usize>,
    },

    /// The fixed walkthroughs from the tutorial chapters
    Examples,
}

// =============================================================================
// Startup
// =============================================================================

/// Runs a parsed command line and returns what should go to stdout.
///
/// ## Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load ConfigState (defaults → config.toml → RECAP_* env)             │
/// │  2. Create SessionState seeded with the configured inventory            │
/// │  3. Dispatch to commands::*                                             │
/// │  4. Render text lines, or pretty JSON with --json                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: &Cli) -> CliResult<String> {
    let config = ConfigState::load(cli.config.as_deref())?;
    debug!(?config, "Configuration loaded");

    let mut session = SessionState::new(config.inventory.clone());
    info!(started_at = %session.started_at, "Session started");

    let output = execute(&cli.command, &config, &mut session)?;
    output.render(cli.json)
}

/// Dispatches one subcommand.
pub fn execute(
    command: &Commands,
    config: &ConfigState,
    session: &mut SessionState,
) -> CliResult<CommandOutput> {
    use crate::commands::{basics, control_flow, data};

    match command {
        Commands::Arithmetic { a, b } => basics::arithmetic(*a, *b),
        Commands::String { text } => basics::string(text),
        Commands::List { items } => basics::list(items),
        Commands::Age { age } => control_flow::age(*age),
        Commands::Table { n, up_to } => {
            control_flow::table(*n, up_to.unwrap_or(config.table_up_to))
        }
        Commands::Bmi { weight, height } => control_flow::bmi(*weight, *height),
        Commands::Fizzbuzz { up_to } => {
            control_flow::fizzbuzz(up_to.unwrap_or(config.fizzbuzz_up_to))
        }
        Commands::Inventory { adds } => data::inventory(session, adds),
        Commands::Comprehensions => data::comprehensions(),
        Commands::Sets => data::sets(),
        Commands::Dedupe { items } => data::dedupe(items),
        Commands::Sales => data::sales(),
        Commands::Words { text, top } => data::words(config, text, *top),
        Commands::Examples => data::examples(),
    }
}

/// Initializes the tracing subscriber on stderr.
///
/// ## Log Levels
/// - `RUST_LOG` set: used as is
/// - Otherwise: `warn,recap=info`, raised by `-v` (debug) and `-vv` (trace)
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,recap=info",
        1 => "warn,recap=debug",
        _ => "warn,recap=trace",
    }
}
