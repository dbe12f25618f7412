//! Nonsense Word Generation
//!
//! The self-contained generation core, independent of any network service:
//!
//! - `category`: the six recognized parts of speech
//! - `bank`: curated fallback vocabulary per category
//! - `templates`: sentence skeletons with typed placeholders
//! - `supply`: the per-run shuffled pool of input-derived words
//! - `assembler`: greedy template selection and placeholder substitution
//!
//! All randomness flows through explicit `rand::Rng` arguments so tests can
//! pin a seed and assert byte-identical output.

pub mod assembler;
pub mod bank;
pub mod category;
pub mod errors;
pub mod supply;
pub mod templates;

pub use assembler::{GeneratedSentence, SentenceAssembler};
pub use bank::WordBank;
pub use category::Category;
pub use errors::{WordgenError, WordgenResult};
pub use supply::WordSupply;
pub use templates::{Template, TemplateCatalog};
