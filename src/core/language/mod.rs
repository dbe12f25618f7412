//! External Language Services
//!
//! Async clients for the two remote collaborators: part-of-speech syntax
//! analysis and toxicity moderation. Both are trait objects at the seam so
//! the orchestrator and its tests never depend on the network.

pub mod moderation;
pub mod syntax;
pub mod types;

pub use moderation::{GoogleModerationClient, ModerationScorer};
pub use syntax::{GoogleSyntaxClient, SyntaxAnalyzer, DEFAULT_BASE_URL};
pub use types::{ClassifiedWords, LanguageError, LanguageResult};
