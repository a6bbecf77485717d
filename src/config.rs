//! Layered settings: defaults, then `happylibs.toml`, then `HAPPYLIBS_*` environment
//! variables. Command-line flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::picker::DEFAULT_PICK_COUNT;

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = "happylibs.toml";

const ENV_WORDS_FILE: &str = "HAPPYLIBS_WORDS_FILE";
const ENV_PICK_COUNT: &str = "HAPPYLIBS_PICK_COUNT";
const ENV_HISTORY: &str = "HAPPYLIBS_HISTORY";
const ENV_SEED: &str = "HAPPYLIBS_SEED";

/// Errors raised while reading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid settings TOML.
    #[error("invalid settings in {}", .path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: toml::de::Error,
    },
}

/// Runtime settings. Every key is optional in `happylibs.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// JSON word dictionary.
    pub words_file: PathBuf,
    /// Words per pick when the caller gives no count.
    pub pick_count: i64,
    /// Recent picks to remember.
    pub history_capacity: usize,
    /// Fixed RNG seed, for reproducible picks.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            words_file: PathBuf::from("words.json"),
            pick_count: DEFAULT_PICK_COUNT,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            seed: None,
        }
    }
}

impl Settings {
    /// Defaults, overlaid with [`CONFIG_FILE`] if present, then the environment.
    ///
    /// # Errors
    ///
    /// Fails if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Self::from_file_if_exists(Path::new(CONFIG_FILE))?;
        settings.apply_env(|key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Parse a TOML file, or return defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Fails on read errors other than "not found", and on invalid TOML.
    pub fn from_file_if_exists(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_toml_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML text. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Fails on invalid TOML or unknown keys.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Overlay environment variables, read through `lookup`.
    ///
    /// Values that do not parse are ignored with a warning.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_WORDS_FILE) {
            self.words_file = PathBuf::from(v);
        }
        if let Some(v) = parse_env(&lookup, ENV_PICK_COUNT) {
            self.pick_count = v;
        }
        if let Some(v) = parse_env(&lookup, ENV_HISTORY) {
            self.history_capacity = v;
        }
        if let Some(v) = parse_env(&lookup, ENV_SEED) {
            self.seed = Some(v);
        }
    }
}

fn parse_env<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}
