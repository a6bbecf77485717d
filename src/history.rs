//! Bounded history of selected words.

use std::collections::VecDeque;

/// Default number of words kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// A FIFO that keeps at most `capacity` words, dropping the oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionHistory {
    capacity: usize,
    words: VecDeque<String>,
}

impl Default for SelectionHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl SelectionHistory {
    /// Create a history that keeps at most `capacity` words.
    ///
    /// If `capacity == 0`, every push is discarded. Storage grows on demand, so a
    /// large `capacity` costs nothing up front.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            words: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
        }
    }

    /// Record a word, evicting the oldest one when full.
    pub fn push(&mut self, word: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        if self.words.len() == self.capacity {
            self.words.pop_front();
        }
        self.words.push_back(word.into());
    }

    /// Record several words in order.
    pub fn extend<I>(&mut self, words: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for w in words {
            self.push(w);
        }
    }

    /// Words from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of words held.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words are held.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Maximum number of words kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every word, keeping the capacity.
    pub fn clear(&mut self) {
        self.words.clear();
    }
}
