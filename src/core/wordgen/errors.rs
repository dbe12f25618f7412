//! Word Generation Error Types
//!
//! Construction-time failures only: once the bank and catalog are loaded,
//! the generation pipeline itself never errors. An empty bank category
//! substitutes the empty string and an empty catalog yields zero sentences;
//! neither is a fault.

use std::path::PathBuf;
use thiserror::Error;

use super::category::Category;

/// Result type for word-generation resource loading.
pub type WordgenResult<T> = std::result::Result<T, WordgenError>;

/// Errors raised while loading word banks and template catalogs.
#[derive(Error, Debug)]
pub enum WordgenError {
    /// Failed to read a word-list file.
    #[error("Failed to load {category:?} word list from {path}: {source}")]
    WordListLoad {
        category: Category,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the template catalog file.
    #[error("Failed to load template catalog from {path}: {source}")]
    CatalogLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WordgenError {
    /// Create a WordListLoad error.
    pub fn word_list_load(
        category: Category,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::WordListLoad {
            category,
            path: path.into(),
            source,
        }
    }

    /// Create a CatalogLoad error.
    pub fn catalog_load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CatalogLoad {
            path: path.into(),
            source,
        }
    }
}
