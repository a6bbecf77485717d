//! `happylibs`: word picking for fill-in-the-blank games.
//!
//! A JSON dictionary maps category names (nouns, verbs, ...) to word lists. This crate
//! loads it once and draws words from a category without replacement.
//!
//! Exposed modules:
//! - `sample`: unbiased sampling without replacement (partial Fisher–Yates).
//! - `dictionary`: loading and validating the word dictionary.
//! - `picker`: request validation, bounded pick history, pluggable rendering.
//! - `history`: the bounded FIFO of recent picks.
//! - `config`: layered settings (defaults, `happylibs.toml`, environment).

#![forbid(unsafe_code)]

pub mod config;
pub mod dictionary;
pub mod history;
pub mod picker;
pub mod sample;

pub use config::{ConfigError, Settings};
pub use dictionary::{DictionaryError, LookupError, WordCategory, WordDictionary};
pub use history::SelectionHistory;
pub use picker::{PickError, Render, SelectionRequest, SelectionResult, WordPicker};
pub use sample::{
    checked_count, choose_with_rng, sample, sample_with_rng, try_sample, try_sample_with_rng,
    SampleError,
};
