//! Part-of-Speech Categories
//!
//! The closed set of word classes the generator understands. Anything else
//! the syntax service reports (conjunctions, numbers, punctuation) is
//! dropped before it reaches the assembly core.

use serde::{Deserialize, Serialize};

/// Word class used for both input classification and template placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Article,
    Pronoun,
}

impl Category {
    /// All categories, in a fixed iteration order.
    ///
    /// Anything that walks the categories (supply shuffling, remaining-count
    /// scans) uses this order so that runs with the same RNG seed reproduce
    /// byte-identical output.
    pub fn all() -> &'static [Category] {
        &[
            Category::Noun,
            Category::Verb,
            Category::Adjective,
            Category::Adverb,
            Category::Article,
            Category::Pronoun,
        ]
    }

    /// The lowercase name used inside template placeholders (`[noun]`).
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Noun => "noun",
            Category::Verb => "verb",
            Category::Adjective => "adjective",
            Category::Adverb => "adverb",
            Category::Article => "article",
            Category::Pronoun => "pronoun",
        }
    }

    /// Parse a placeholder name. Case-sensitive: only the exact lowercase
    /// tags are recognized; anything else is inert literal text.
    pub fn from_tag(tag: &str) -> Option<Category> {
        match tag {
            "noun" => Some(Category::Noun),
            "verb" => Some(Category::Verb),
            "adjective" => Some(Category::Adjective),
            "adverb" => Some(Category::Adverb),
            "article" => Some(Category::Article),
            "pronoun" => Some(Category::Pronoun),
            _ => None,
        }
    }

    /// Map a part-of-speech tag from the syntax-analysis service.
    ///
    /// Determiners (`DET`) become articles. Unrecognized tags map to `None`
    /// and the word plays no further role.
    pub fn from_pos_tag(tag: &str) -> Option<Category> {
        match tag {
            "NOUN" => Some(Category::Noun),
            "VERB" => Some(Category::Verb),
            "ADJ" => Some(Category::Adjective),
            "ADV" => Some(Category::Adverb),
            "DET" => Some(Category::Article),
            "PRON" => Some(Category::Pronoun),
            _ => None,
        }
    }
}
