//! Orchestrator Tests
//!
//! Drives `NonsenseGenerator` end to end with stub services: input
//! validation, moderation pairing, the sentence log, seeded determinism,
//! and the zero-output edge cases.

use std::sync::Arc;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::generator::{GeneratorError, NonsenseGenerator};
use crate::core::language::{
    ClassifiedWords, LanguageError, LanguageResult, ModerationScorer, SyntaxAnalyzer,
};
use crate::core::wordgen::{Category, TemplateCatalog, WordBank};

// ============================================================================
// Stub Services
// ============================================================================

struct StubSyntax(ClassifiedWords);

#[async_trait]
impl SyntaxAnalyzer for StubSyntax {
    async fn analyze(&self, _text: &str) -> LanguageResult<ClassifiedWords> {
        Ok(self.0.clone())
    }
}

struct StubModeration(f64);

#[async_trait]
impl ModerationScorer for StubModeration {
    async fn moderate(&self, _text: &str) -> LanguageResult<f64> {
        Ok(self.0)
    }
}

struct FailingModeration;

#[async_trait]
impl ModerationScorer for FailingModeration {
    async fn moderate(&self, _text: &str) -> LanguageResult<f64> {
        Err(LanguageError::Api {
            status: 503,
            body: String::new(),
        })
    }
}

fn classified(entries: &[(Category, &[&str])]) -> ClassifiedWords {
    let mut words = ClassifiedWords::new();
    for (category, list) in entries {
        for word in *list {
            words.push(*category, *word);
        }
    }
    words
}

fn generator_with(
    catalog: &str,
    bank: WordBank,
    words: ClassifiedWords,
    toxicity: f64,
) -> NonsenseGenerator {
    NonsenseGenerator::new(
        TemplateCatalog::parse(catalog),
        bank,
        Arc::new(StubSyntax(words)),
        Arc::new(StubModeration(toxicity)),
    )
}

// ============================================================================
// Pipeline
// ============================================================================

#[tokio::test]
async fn test_exact_fit_produces_one_scored_sentence() {
    let generator = generator_with(
        "[article] [noun] [verb]",
        WordBank::new(),
        classified(&[
            (Category::Article, &["the"]),
            (Category::Noun, &["cat"]),
            (Category::Verb, &["runs"]),
        ]),
        0.37,
    );

    let results = generator.generate("the cat runs").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].text, "The cat runs");
    assert_eq!(results[0].structure, "[article] [noun] [verb]");
    assert!((results[0].toxicity - 0.37).abs() < 1e-9);
}

#[tokio::test]
async fn test_surplus_words_all_appear_exactly_once() {
    // Two nouns, one verb: the second sentence borrows a verb from the
    // bank, and every input word shows up exactly once overall.
    let bank = WordBank::from_lists([(Category::Verb, vec!["flees".to_string()])]);
    let generator = generator_with(
        "[noun] [verb]",
        bank,
        classified(&[
            (Category::Noun, &["cat", "dog"]),
            (Category::Verb, &["runs"]),
        ]),
        0.0,
    );

    let results = generator.generate("the cat and dog run").await.unwrap();

    assert_eq!(results.len(), 2);
    let joined = results
        .iter()
        .map(|r| r.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    let count = |needle: &str| joined.split_whitespace().filter(|w| *w == needle).count();
    assert_eq!(count("cat"), 1);
    assert_eq!(count("dog"), 1);
    assert_eq!(count("runs"), 1);
}

#[tokio::test]
async fn test_empty_catalog_yields_empty_result() {
    let generator = generator_with(
        "",
        WordBank::builtin(),
        classified(&[(Category::Noun, &["cat"])]),
        0.0,
    );

    let results = generator.generate("a cat").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_empty_classification_yields_empty_result() {
    let generator = generator_with(
        "[noun] [verb]",
        WordBank::builtin(),
        ClassifiedWords::new(),
        0.0,
    );

    let results = generator.generate("hm").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_seeded_runs_reproduce_identical_output() {
    let generator = generator_with(
        "[noun] [verb]\n[article] [noun] [verb]",
        WordBank::builtin(),
        ClassifiedWords::new(),
        0.1,
    );
    let words = || {
        classified(&[
            (Category::Noun, &["cat", "dog", "fox"]),
            (Category::Verb, &["runs", "hides"]),
            (Category::Article, &["the"]),
        ])
    };

    let mut rng_a = StdRng::seed_from_u64(1234);
    let first = generator
        .generate_from_classified(words(), &mut rng_a)
        .await
        .unwrap();

    let mut rng_b = StdRng::seed_from_u64(1234);
    let second = generator
        .generate_from_classified(words(), &mut rng_b)
        .await
        .unwrap();

    assert_eq!(first, second);
}

// ============================================================================
// Input Validation
// ============================================================================

#[tokio::test]
async fn test_invalid_input_is_rejected() {
    let generator = generator_with(
        "[noun]",
        WordBank::builtin(),
        classified(&[(Category::Noun, &["cat"])]),
        0.0,
    );

    for input in ["", "   ", "123 456 789", "?! ... 42"] {
        let result = generator.generate(input).await;
        assert!(
            matches!(result, Err(GeneratorError::InvalidInput(_))),
            "input {input:?} should be rejected"
        );
    }
}

// ============================================================================
// Failure Propagation
// ============================================================================

#[tokio::test]
async fn test_moderation_failure_surfaces_as_error() {
    let generator = NonsenseGenerator::new(
        TemplateCatalog::parse("[noun]"),
        WordBank::new(),
        Arc::new(StubSyntax(classified(&[(Category::Noun, &["cat"])]))),
        Arc::new(FailingModeration),
    );

    let result = generator.generate("a cat").await;
    assert!(matches!(result, Err(GeneratorError::Moderation(_))));
}

// ============================================================================
// Sentence Log
// ============================================================================

#[tokio::test]
async fn test_sentence_log_receives_each_sentence() {
    let temp = tempfile::tempdir().unwrap();
    let log_path = temp.path().join("sentences.log");

    let generator = generator_with(
        "[noun] [verb]",
        WordBank::builtin(),
        classified(&[
            (Category::Noun, &["cat", "dog"]),
            (Category::Verb, &["runs", "hides"]),
        ]),
        0.0,
    )
    .with_sentence_log(&log_path);

    let results = generator.generate("cats and dogs").await.unwrap();
    assert!(!results.is_empty());

    let logged = std::fs::read_to_string(&log_path).unwrap();
    let lines: Vec<_> = logged.lines().collect();
    assert_eq!(lines.len(), results.len());
    for (line, result) in lines.iter().zip(&results) {
        assert_eq!(*line, result.text);
    }
}
