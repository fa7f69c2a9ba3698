//! # Configuration State
//!
//! Exercise limits and the seed inventory, loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     RECAP_TABLE_UP_TO=12                                               │
//! │     RECAP_WORD_DELIMITER=";"                                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, else                                              │
//! │     ~/.config/recap/config.toml (Linux)                                │
//! │     ~/Library/Application Support/com.recap.recap/config.toml (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! table_up_to = 10
//! fizzbuzz_up_to = 30
//! top_letters = 5
//! word_delimiter = ","
//!
//! [[inventory]]
//! product = "apples"
//! quantity = 50
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after loading, so no locking is needed.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use recap_core::data_structures::inventory::{default_inventory, Inventory};
use recap_core::validation::{validate_up_to, ValidationResult};
use recap_core::{DEFAULT_FIZZBUZZ_UP_TO, DEFAULT_TABLE_UP_TO, DEFAULT_TOP_LETTERS};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Last multiplier of the multiplication table.
    pub table_up_to: i64,

    /// Length of the FizzBuzz sequence.
    pub fizzbuzz_up_to: i64,

    /// Letters shown by the word game.
    pub top_letters: usize,

    /// Separator for the word game's free-text input.
    pub word_delimiter: String,

    /// Stock a new session starts with.
    pub inventory: Inventory,
}

impl Default for ConfigState {
    /// The values used by the tutorial chapters.
    fn default() -> Self {
        ConfigState {
            table_up_to: DEFAULT_TABLE_UP_TO,
            fizzbuzz_up_to: DEFAULT_FIZZBUZZ_UP_TO,
            top_letters: DEFAULT_TOP_LETTERS,
            word_delimiter: ",".to_string(),
            inventory: default_inventory(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from file and environment.
    ///
    /// ## Behavior
    /// - `explicit` path given: the file must exist
    /// - No path: the platform config file is used when present,
    ///   defaults otherwise
    /// - `RECAP_*` variables override whatever the file said
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    ConfigState::default()
                }
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml(&contents).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;

        info!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Checks the sequence limits against the exercise bounds.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_up_to("table_up_to", self.table_up_to)?;
        validate_up_to("fizzbuzz_up_to", self.fizzbuzz_up_to)
    }

    /// Parses TOML; missing keys keep their defaults.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Applies `RECAP_*` overrides read through `lookup`.
    ///
    /// Values that do not parse, or limits outside the exercise bounds, are
    /// skipped with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = parse_up_to_override(&lookup, "RECAP_TABLE_UP_TO") {
            self.table_up_to = value;
        }
        if let Some(value) = parse_up_to_override(&lookup, "RECAP_FIZZBUZZ_UP_TO") {
            self.fizzbuzz_up_to = value;
        }
        if let Some(value) = parse_override(&lookup, "RECAP_TOP_LETTERS") {
            self.top_letters = value;
        }
        if let Some(value) = lookup("RECAP_WORD_DELIMITER") {
            self.word_delimiter = value;
        }
    }
}

fn parse_override<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparsable environment override");
            None
        }
    }
}

fn parse_up_to_override<F>(lookup: &F, key: &str) -> Option<i64>
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_override(lookup, key)?;
    match validate_up_to(key, value) {
        Ok(()) => Some(value),
        Err(err) => {
            warn!(key, value, error = %err, "Ignoring out-of-range environment override");
            None
        }
    }
}

/// Platform config file location, if a home directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "recap", "recap").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
