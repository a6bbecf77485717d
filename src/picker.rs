//! Word picking on top of a loaded dictionary.
//!
//! [`WordPicker`] validates a [`SelectionRequest`] against the dictionary, runs the
//! sampler, and records the picks in a bounded [`SelectionHistory`]. Output goes through
//! the [`Render`] trait so the picker never touches a terminal.

use rand::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::dictionary::{LookupError, WordDictionary};
use crate::history::SelectionHistory;
use crate::sample::{try_sample_with_rng, SampleError};

/// Number of words picked when the caller does not say.
pub const DEFAULT_PICK_COUNT: i64 = 3;

/// Errors from a pick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    /// The category is unknown or empty.
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// The count was rejected by the sampler.
    #[error(transparent)]
    Sample(#[from] SampleError),
}

/// A category name plus how many words to draw from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    /// Category to draw from.
    pub category: String,
    /// Words to draw. Negative values are rejected when picking.
    pub count: i64,
}

impl SelectionRequest {
    /// Build a request.
    pub fn new(category: impl Into<String>, count: i64) -> Self {
        Self {
            category: category.into(),
            count,
        }
    }
}

/// The words drawn for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionResult {
    /// Category the words came from.
    pub category: String,
    /// Drawn words, in pick order.
    pub words: Vec<String>,
}

/// Output sink for picks.
pub trait Render {
    /// Show the words of a successful pick.
    fn picks(&mut self, result: &SelectionResult);

    /// Show the history after a successful pick.
    fn history(&mut self, _history: &SelectionHistory) {}

    /// Report a failed pick.
    fn error(&mut self, error: &PickError);
}

/// Picks words from a dictionary and remembers recent picks.
#[derive(Debug)]
pub struct WordPicker {
    dictionary: WordDictionary,
    history: SelectionHistory,
    rng: StdRng,
}

impl WordPicker {
    /// Create a picker seeded from the OS.
    pub fn new(dictionary: WordDictionary, history_capacity: usize) -> Self {
        Self {
            dictionary,
            history: SelectionHistory::new(history_capacity),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reseed for reproducible picks.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Draw words for a request.
    ///
    /// # Errors
    ///
    /// [`PickError::Lookup`] if the category is unknown or empty,
    /// [`PickError::Sample`] if the count is negative.
    pub fn pick(&mut self, request: &SelectionRequest) -> Result<SelectionResult, PickError> {
        let words = self.dictionary.words(&request.category)?;
        if words.is_empty() {
            return Err(LookupError::EmptyCategory(request.category.clone()).into());
        }

        let picked = try_sample_with_rng(words, request.count, &mut self.rng)?;
        debug!(
            category = %request.category,
            requested = request.count,
            returned = picked.len(),
            "picked words"
        );

        self.history.extend(picked.iter().cloned());
        Ok(SelectionResult {
            category: request.category.clone(),
            words: picked,
        })
    }

    /// [`Self::pick`], with the outcome sent to `render`.
    ///
    /// Failures are rendered, not returned.
    pub fn pick_and_render<W: Render + ?Sized>(&mut self, request: &SelectionRequest, render: &mut W) {
        match self.pick(request) {
            Ok(result) => {
                render.picks(&result);
                render.history(&self.history);
            }
            Err(e) => render.error(&e),
        }
    }

    /// One random word from a category. Not recorded in the history.
    ///
    /// # Errors
    ///
    /// [`LookupError`] if the category is unknown or empty.
    pub fn random_word(&mut self, category: &str) -> Result<&str, LookupError> {
        self.dictionary.random_word_with_rng(category, &mut self.rng)
    }

    /// The loaded dictionary.
    pub fn dictionary(&self) -> &WordDictionary {
        &self.dictionary
    }

    /// Recent picks, oldest first.
    pub fn history(&self) -> &SelectionHistory {
        &self.history
    }
}
