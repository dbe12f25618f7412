//! Fallback Vocabulary Bank
//!
//! Curated word lists per part-of-speech category, loaded once and shared
//! read-only. The assembler draws from the bank whenever the input-derived
//! supply for a category runs dry.

use std::collections::HashMap;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use super::category::Category;
use super::errors::{WordgenError, WordgenResult};

/// File name per category under the word-list directory.
fn list_file_name(category: Category) -> &'static str {
    match category {
        Category::Noun => "nouns.txt",
        Category::Verb => "verbs.txt",
        Category::Adjective => "adjectives.txt",
        Category::Adverb => "adverbs.txt",
        Category::Article => "articles.txt",
        Category::Pronoun => "pronouns.txt",
    }
}

/// Read-only per-category vocabulary.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    words: HashMap<Category, Vec<String>>,
}

impl WordBank {
    /// A bank with no words in any category. `random` on it always returns
    /// the empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bank from in-memory lists. Blank entries are skipped.
    pub fn from_lists(lists: impl IntoIterator<Item = (Category, Vec<String>)>) -> Self {
        let mut words: HashMap<Category, Vec<String>> = HashMap::new();
        for (category, list) in lists {
            words
                .entry(category)
                .or_default()
                .extend(list.into_iter().filter(|w| !w.is_empty()));
        }
        Self { words }
    }

    /// Load one `<category>.txt` file per category from `dir`, one word per
    /// non-empty line. Any missing or unreadable file is fatal; the bank is
    /// the generator's safety net and cannot be partially absent.
    pub fn from_dir(dir: impl AsRef<Path>) -> WordgenResult<Self> {
        let dir = dir.as_ref();
        let mut words = HashMap::new();
        for &category in Category::all() {
            let path = dir.join(list_file_name(category));
            let text = std::fs::read_to_string(&path)
                .map_err(|e| WordgenError::word_list_load(category, &path, e))?;
            words.insert(category, parse_word_lines(&text));
        }
        log::info!("Loaded word bank from {}", dir.display());
        Ok(Self { words })
    }

    /// The word lists compiled into the binary; used when no data directory
    /// is configured.
    pub fn builtin() -> Self {
        let lists = [
            (
                Category::Noun,
                include_str!("../../../resources/words/nouns.txt"),
            ),
            (
                Category::Verb,
                include_str!("../../../resources/words/verbs.txt"),
            ),
            (
                Category::Adjective,
                include_str!("../../../resources/words/adjectives.txt"),
            ),
            (
                Category::Adverb,
                include_str!("../../../resources/words/adverbs.txt"),
            ),
            (
                Category::Article,
                include_str!("../../../resources/words/articles.txt"),
            ),
            (
                Category::Pronoun,
                include_str!("../../../resources/words/pronouns.txt"),
            ),
        ];
        let words = lists
            .into_iter()
            .map(|(category, text)| (category, parse_word_lines(text)))
            .collect();
        Self { words }
    }

    /// Number of words stored for `category`.
    pub fn len(&self, category: Category) -> usize {
        self.words.get(&category).map(Vec::len).unwrap_or(0)
    }

    /// True when every category is empty.
    pub fn is_empty(&self) -> bool {
        Category::all().iter().all(|&c| self.len(c) == 0)
    }

    /// A uniformly random word of `category`, or the empty string when the
    /// category has no words. Callers treat `""` as "no substitution
    /// available": the sentence keeps a gap rather than the run failing.
    pub fn random(&self, category: Category, rng: &mut impl Rng) -> String {
        self.words
            .get(&category)
            .and_then(|list| list.choose(rng))
            .cloned()
            .unwrap_or_default()
    }
}

/// Split a line-oriented word list, skipping blank lines. Windows line
/// endings are tolerated.
pub(crate) fn parse_word_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
