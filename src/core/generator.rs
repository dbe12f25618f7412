//! Generation Orchestrator
//!
//! Thin driver around the core: validates the user's sentence, classifies
//! it through the syntax service, assembles nonsense sentences, and scores
//! each one with the moderation service. The catalog and bank are shared
//! read-only; every call builds its own supply and RNG, so one generator
//! can serve concurrent requests.

use std::path::PathBuf;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::language::{ClassifiedWords, LanguageError, ModerationScorer, SyntaxAnalyzer};
use super::wordgen::{SentenceAssembler, TemplateCatalog, WordBank, WordSupply};

/// Result type for generation runs.
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The user gave us nothing the classifier could work with.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Syntax analysis failed; the caller can simply retry.
    #[error("Syntax analysis failed: {0}")]
    Syntax(#[source] LanguageError),

    /// Moderation failed; the caller can simply retry.
    #[error("Moderation failed: {0}")]
    Moderation(#[source] LanguageError),
}

/// One generated sentence with its moderation score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceResult {
    /// Template line the sentence was built from, for traceability.
    pub structure: String,
    /// The finished, capitalized sentence.
    pub text: String,
    /// Toxicity confidence in `[0, 1]`; 0.0 when the moderation service
    /// reports no toxic category.
    pub toxicity: f64,
}

/// The full input-to-scored-output pipeline.
pub struct NonsenseGenerator {
    catalog: TemplateCatalog,
    bank: WordBank,
    syntax: Arc<dyn SyntaxAnalyzer>,
    moderation: Arc<dyn ModerationScorer>,
    sentence_log: Option<PathBuf>,
}

impl NonsenseGenerator {
    pub fn new(
        catalog: TemplateCatalog,
        bank: WordBank,
        syntax: Arc<dyn SyntaxAnalyzer>,
        moderation: Arc<dyn ModerationScorer>,
    ) -> Self {
        Self {
            catalog,
            bank,
            syntax,
            moderation,
            sentence_log: None,
        }
    }

    /// Append every generated sentence to `path`, one per line.
    pub fn with_sentence_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.sentence_log = Some(path.into());
        self
    }

    /// Full pipeline for one line of user input.
    pub async fn generate(&self, input: &str) -> GeneratorResult<Vec<SentenceResult>> {
        let text = validate_input(input)?;

        let classified = self
            .syntax
            .analyze(text)
            .await
            .map_err(GeneratorError::Syntax)?;
        log::info!("Classified {} words for generation", classified.total());

        let mut rng = StdRng::from_entropy();
        self.generate_from_classified(classified, &mut rng).await
    }

    /// Assembly and moderation with caller-supplied randomness; split out so
    /// tests can pin the shuffle seed.
    pub async fn generate_from_classified(
        &self,
        classified: ClassifiedWords,
        rng: &mut StdRng,
    ) -> GeneratorResult<Vec<SentenceResult>> {
        let mut supply = WordSupply::build(classified, rng);
        let assembler = SentenceAssembler::new(&self.catalog, &self.bank);
        let sentences = assembler.assemble(&mut supply, rng);
        log::info!("Assembled {} sentences", sentences.len());

        let mut results = Vec::with_capacity(sentences.len());
        for sentence in sentences {
            let toxicity = self
                .moderation
                .moderate(&sentence.text)
                .await
                .map_err(GeneratorError::Moderation)?;
            self.log_sentence(&sentence.text);
            results.push(SentenceResult {
                structure: sentence.structure,
                text: sentence.text,
                toxicity,
            });
        }
        Ok(results)
    }

    /// Best-effort append to the sentence log; never fails the pipeline.
    fn log_sentence(&self, text: &str) {
        use std::io::Write;

        let Some(path) = &self.sentence_log else {
            return;
        };
        let appended = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| writeln!(file, "{text}"));
        if let Err(e) = appended {
            log::warn!("Failed to append to sentence log {}: {e}", path.display());
        }
    }
}

/// Reject input the classifier cannot do anything with: empty, whitespace
/// only, or containing no letters at all.
fn validate_input(input: &str) -> GeneratorResult<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GeneratorError::InvalidInput(
            "sentence must not be empty".to_string(),
        ));
    }
    if !trimmed.chars().any(char::is_alphabetic) {
        return Err(GeneratorError::InvalidInput(
            "sentence must contain at least one letter".to_string(),
        ));
    }
    Ok(trimmed)
}
