//! Shared types for the external language services.

use std::collections::HashMap;

use thiserror::Error;

use crate::core::wordgen::Category;

/// Result type for language-service calls.
pub type LanguageResult<T> = std::result::Result<T, LanguageError>;

/// Errors from the syntax-analysis and moderation services.
///
/// All of these are recoverable from the caller's point of view: the core
/// data structures are untouched and the user can simply try again.
#[derive(Error, Debug)]
pub enum LanguageError {
    /// The HTTP request itself failed (connect, timeout, decode).
    #[error("Language service request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Language service returned {status}: {body}")]
    Api { status: u16, body: String },
}

/// Words extracted from free text, grouped by category.
///
/// Ordering within a category follows the service's token order; the core
/// shuffles on ingestion, so the order here carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedWords {
    words: HashMap<Category, Vec<String>>,
}

impl ClassifiedWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a word under `category`.
    pub fn push(&mut self, category: Category, word: impl Into<String>) {
        self.words.entry(category).or_default().push(word.into());
    }

    /// Words filed under `category`, in arrival order.
    pub fn words(&self, category: Category) -> &[String] {
        self.words.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total words across all categories.
    pub fn total(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl IntoIterator for ClassifiedWords {
    type Item = (Category, Vec<String>);
    type IntoIter = std::collections::hash_map::IntoIter<Category, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl FromIterator<(Category, Vec<String>)> for ClassifiedWords {
    fn from_iter<T: IntoIterator<Item = (Category, Vec<String>)>>(iter: T) -> Self {
        let mut classified = Self::new();
        for (category, list) in iter {
            for word in list {
                classified.push(category, word);
            }
        }
        classified
    }
}
