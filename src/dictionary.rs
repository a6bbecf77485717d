//! Word dictionary.
//!
//! The dictionary is a JSON object mapping category names to arrays of words:
//!
//! ```json
//! { "nouns": ["cat", "dog"], "verbs": ["run", "jump"] }
//! ```
//!
//! Categories keep the order they have in the source object. The dictionary is loaded
//! once and is read-only afterwards.

use std::fmt;
use std::path::{Path, PathBuf};

use rand::prelude::*;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::sample::choose_with_rng;

/// Errors raised while loading a dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The file could not be read.
    #[error("failed to read word dictionary {}", .path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The input is not valid JSON.
    #[error("word dictionary is not valid JSON")]
    Parse(#[from] serde_json::Error),
    /// The top-level value is not an object.
    #[error("word dictionary must contain a JSON object")]
    NotAnObject,
    /// A category value is not an array.
    #[error("category '{category}' must contain a list of words")]
    NotAList {
        /// Offending category.
        category: String,
    },
    /// An array element is not a string.
    #[error("category '{category}' has a non-string entry at index {index}")]
    NotAWord {
        /// Offending category.
        category: String,
        /// Position within the category.
        index: usize,
    },
}

/// Errors raised when looking up a category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No category with this name.
    #[error("category '{name}' not found. Available categories: {}", Available(.available))]
    UnknownCategory {
        /// Requested name.
        name: String,
        /// Names that do exist, in dictionary order.
        available: Vec<String>,
    },
    /// The category exists but holds no words.
    #[error("category '{0}' is empty")]
    EmptyCategory(String),
}

struct Available<'a>(&'a [String]);

impl fmt::Display for Available<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(none)");
        }
        f.write_str(&self.0.join(", "))
    }
}

/// A named group of interchangeable words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCategory {
    name: String,
    words: Vec<String>,
}

impl WordCategory {
    /// Create a category.
    pub fn new(name: impl Into<String>, words: Vec<String>) -> Self {
        Self {
            name: name.into(),
            words,
        }
    }

    /// Category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Words, in source order. May contain duplicates.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// An ordered, immutable collection of word categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordDictionary {
    categories: Vec<WordCategory>,
}

impl WordDictionary {
    /// Build a dictionary from categories.
    ///
    /// If a name repeats, the later category replaces the earlier one in place.
    pub fn from_categories(categories: impl IntoIterator<Item = WordCategory>) -> Self {
        let mut out: Vec<WordCategory> = Vec::new();
        for category in categories {
            match out.iter_mut().find(|c| c.name == category.name) {
                Some(existing) => *existing = category,
                None => out.push(category),
            }
        }
        Self { categories: out }
    }

    /// Parse and validate a dictionary from JSON text.
    ///
    /// # Errors
    ///
    /// Fails if the text is not JSON, is not an object, or holds anything other than
    /// arrays of strings.
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(map) = value else {
            return Err(DictionaryError::NotAnObject);
        };

        let mut categories = Vec::with_capacity(map.len());
        for (name, entry) in map {
            let Value::Array(entries) = entry else {
                return Err(DictionaryError::NotAList { category: name });
            };
            let mut words = Vec::with_capacity(entries.len());
            for (index, word) in entries.into_iter().enumerate() {
                match word {
                    Value::String(w) => words.push(w),
                    _ => {
                        return Err(DictionaryError::NotAWord {
                            category: name,
                            index,
                        })
                    }
                }
            }
            debug!(category = %name, words = words.len(), "parsed category");
            categories.push(WordCategory { name, words });
        }

        Ok(Self { categories })
    }

    /// Read and validate a dictionary file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not validate (see [`Self::from_json_str`]).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            categories = dictionary.len(),
            "loaded word dictionary"
        );
        Ok(dictionary)
    }

    /// Category names, in dictionary order.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(WordCategory::name).collect()
    }

    /// Look up a category.
    pub fn get(&self, name: &str) -> Option<&WordCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Every word of a category.
    ///
    /// # Errors
    ///
    /// [`LookupError::UnknownCategory`] if no category has this name.
    pub fn words(&self, name: &str) -> Result<&[String], LookupError> {
        self.get(name)
            .map(WordCategory::words)
            .ok_or_else(|| self.unknown(name))
    }

    /// A single uniformly chosen word from a category.
    ///
    /// # Errors
    ///
    /// [`LookupError::UnknownCategory`] or [`LookupError::EmptyCategory`].
    pub fn random_word_with_rng<R: Rng + ?Sized>(
        &self,
        name: &str,
        rng: &mut R,
    ) -> Result<&str, LookupError> {
        let words = self.words(name)?;
        choose_with_rng(words, rng)
            .map(String::as_str)
            .ok_or_else(|| LookupError::EmptyCategory(name.to_owned()))
    }

    /// Iterate categories in order.
    pub fn iter(&self) -> impl Iterator<Item = &WordCategory> {
        self.categories.iter()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether there are no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn unknown(&self, name: &str) -> LookupError {
        LookupError::UnknownCategory {
            name: name.to_owned(),
            available: self.categories().into_iter().map(str::to_owned).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "verbs": ["run", "jump", "swim"],
        "nouns": ["cat", "dog"],
        "empty": []
    }"#;

    #[test]
    fn keeps_source_order() {
        let d = WordDictionary::from_json_str(SAMPLE).expect("valid");
        assert_eq!(d.categories(), ["verbs", "nouns", "empty"]);
        assert_eq!(d.len(), 3);
        assert_eq!(d.words("nouns").expect("exists"), ["cat", "dog"]);
    }

    #[test]
    fn rejects_non_object() {
        let err = WordDictionary::from_json_str(r#"["cat"]"#).expect_err("array rejected");
        assert!(matches!(err, DictionaryError::NotAnObject));
    }

    #[test]
    fn rejects_non_list_category() {
        let err = WordDictionary::from_json_str(r#"{"nouns": "cat"}"#).expect_err("string rejected");
        assert!(matches!(err, DictionaryError::NotAList { ref category } if category == "nouns"));
        assert_eq!(err.to_string(), "category 'nouns' must contain a list of words");
    }

    #[test]
    fn rejects_non_string_word() {
        let err = WordDictionary::from_json_str(r#"{"nums": ["one", 2]}"#).expect_err("number rejected");
        assert!(matches!(
            err,
            DictionaryError::NotAWord { ref category, index: 1 } if category == "nums"
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = WordDictionary::from_json_str("{").expect_err("truncated");
        assert!(matches!(err, DictionaryError::Parse(_)));
    }

    #[test]
    fn unknown_category_lists_available() {
        let d = WordDictionary::from_json_str(SAMPLE).expect("valid");
        let err = d.words("adverbs").expect_err("missing");
        assert_eq!(
            err.to_string(),
            "category 'adverbs' not found. Available categories: verbs, nouns, empty"
        );
    }

    #[test]
    fn random_word_from_category() {
        let d = WordDictionary::from_json_str(SAMPLE).expect("valid");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..20 {
            let w = d.random_word_with_rng("verbs", &mut rng).expect("non-empty");
            assert!(["run", "jump", "swim"].contains(&w));
        }
        assert_eq!(
            d.random_word_with_rng("empty", &mut rng),
            Err(LookupError::EmptyCategory("empty".into()))
        );
    }

    #[test]
    fn later_duplicate_replaces_earlier() {
        let d = WordDictionary::from_categories([
            WordCategory::new("a", vec!["1".into()]),
            WordCategory::new("b", vec![]),
            WordCategory::new("a", vec!["2".into()]),
        ]);
        assert_eq!(d.categories(), ["a", "b"]);
        assert_eq!(d.words("a").expect("exists"), ["2"]);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SAMPLE.as_bytes()).expect("write");
        let d = WordDictionary::load(file.path()).expect("loads");
        assert_eq!(d.len(), 3);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = WordDictionary::load(dir.path().join("nope.json")).expect_err("missing");
        assert!(matches!(err, DictionaryError::Io { .. }));
    }
}
