//! Sentence Templates
//!
//! A template is one line of space-separated tokens where bracketed tokens
//! name the category to substitute (`[noun] [verb] ...`). The catalog keeps
//! templates in file order; that order is the tie-break during greedy
//! selection, so it is part of the observable contract.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::errors::{WordgenError, WordgenResult};

/// The placeholder span inside a token, if the token carries one.
///
/// A token is a placeholder iff it contains both `[` and `]`; the name is
/// whatever sits between the first `[` and the first `]`. Names that are
/// not an exact category tag, and bracket pairs in the wrong order, are
/// inert literal text. Returns the category and the exact `[tag]` substring
/// to replace, leaving any glued characters (punctuation) untouched.
pub(crate) fn placeholder_in(token: &str) -> Option<(Category, &str)> {
    let open = token.find('[')?;
    let close = token.find(']')?;
    if close < open {
        return None;
    }
    let category = Category::from_tag(&token[open + 1..close])?;
    Some((category, &token[open..=close]))
}

/// One parsed template line with its load-time placeholder profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    text: String,
    placeholder_counts: HashMap<Category, usize>,
}

impl Template {
    /// Parse a template line, counting placeholders per category.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut placeholder_counts = HashMap::new();
        for token in text.split(' ') {
            if let Some((category, _)) = placeholder_in(token) {
                *placeholder_counts.entry(category).or_insert(0) += 1;
            }
        }
        Self {
            text,
            placeholder_counts,
        }
    }

    /// The raw template line.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of placeholders of `category` in this template.
    pub fn count(&self, category: Category) -> usize {
        self.placeholder_counts.get(&category).copied().unwrap_or(0)
    }

    /// Total number of recognized placeholders.
    pub fn placeholder_total(&self) -> usize {
        self.placeholder_counts.values().sum()
    }
}

/// Ordered, immutable collection of templates.
///
/// Two templates with identical placeholder profiles but different literal
/// scaffolding are both valid entries and compete independently during
/// selection.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Parse a catalog from text, one template per non-blank line. Template
    /// lines are kept verbatim (literal double spaces survive).
    pub fn parse(source: &str) -> Self {
        let templates = source
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(Template::new)
            .collect();
        Self { templates }
    }

    /// Load a catalog file. A missing or unreadable file is fatal; an empty
    /// file yields an empty catalog, which the assembler answers with zero
    /// sentences.
    pub fn load(path: impl AsRef<Path>) -> WordgenResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| WordgenError::catalog_load(path, e))?;
        let catalog = Self::parse(&text);
        log::info!(
            "Loaded {} templates from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The template catalog compiled into the binary.
    pub fn builtin() -> Self {
        Self::parse(include_str!("../../../resources/templates.txt"))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Templates in catalog (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }
}
