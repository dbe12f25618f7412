//! Property-based tests for the sentence assembly core.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::wordgen::{
    Category, GeneratedSentence, SentenceAssembler, TemplateCatalog, WordBank, WordSupply,
};

// ============================================================================
// Strategies
// ============================================================================

/// Template pool the catalog strategy draws from: a mix of placeholder
/// profiles, literal scaffolding, and glued punctuation.
const TEMPLATE_POOL: &[&str] = &[
    "[article] [noun] [verb]",
    "[noun] [verb]",
    "[pronoun] [verb] [article] [adjective] [noun]",
    "[adverb] , [pronoun] [verb]",
    "never [verb] [article] [noun]!",
    "[adjective] [noun] [verb] [noun]",
    "[pronoun] [verb]",
    "[article] [adjective] [noun] [adverb] [verb] [article] [noun].",
];

fn arb_catalog() -> impl Strategy<Value = TemplateCatalog> {
    prop::collection::vec(prop::sample::select(TEMPLATE_POOL.to_vec()), 0..6)
        .prop_map(|lines| TemplateCatalog::parse(&lines.join("\n")))
}

/// Per-category word counts. The words themselves are synthesized unique
/// markers (`nounw0`, `verbw1`, ...) so occurrences can be counted in the
/// output text.
fn arb_word_counts() -> impl Strategy<Value = Vec<(Category, usize)>> {
    prop::collection::vec(0usize..5, 6)
        .prop_map(|counts| Category::all().iter().copied().zip(counts).collect())
}

fn input_words(counts: &[(Category, usize)]) -> Vec<(Category, Vec<String>)> {
    counts
        .iter()
        .map(|&(category, n)| {
            let words = (0..n).map(|i| format!("{}w{i}", category.tag())).collect();
            (category, words)
        })
        .collect()
}

/// A bank whose words are disjoint from the input markers.
fn marker_free_bank() -> WordBank {
    WordBank::from_lists(
        Category::all()
            .iter()
            .map(|&c| (c, vec![format!("bank{}", c.tag())])),
    )
}

fn run_assembly(
    catalog: &TemplateCatalog,
    counts: &[(Category, usize)],
    seed: u64,
) -> Vec<GeneratedSentence> {
    let bank = marker_free_bank();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut supply = WordSupply::build(input_words(counts), &mut rng);
    SentenceAssembler::new(catalog, &bank).assemble(&mut supply, &mut rng)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: each positional input word lands in at most one sentence.
    #[test]
    fn prop_each_input_word_used_at_most_once(
        catalog in arb_catalog(),
        counts in arb_word_counts(),
        seed in any::<u64>()
    ) {
        let sentences = run_assembly(&catalog, &counts, seed);
        // Lowercased so capitalization at sentence starts does not hide a
        // marker.
        let joined = sentences
            .iter()
            .map(|s| s.text.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");

        for &(category, n) in &counts {
            for i in 0..n {
                let marker = format!("{}w{i}", category.tag());
                let occurrences = joined.matches(&marker).count();
                prop_assert!(
                    occurrences <= 1,
                    "input word {marker} used {occurrences} times"
                );
            }
        }
    }

    /// Property: no sentence keeps bracket-delimited placeholder syntax.
    #[test]
    fn prop_no_unresolved_placeholders(
        catalog in arb_catalog(),
        counts in arb_word_counts(),
        seed in any::<u64>()
    ) {
        let sentences = run_assembly(&catalog, &counts, seed);
        for sentence in &sentences {
            for &category in Category::all() {
                let tag = format!("[{}]", category.tag());
                prop_assert!(
                    !sentence.text.contains(&tag),
                    "unresolved {tag} in {:?}",
                    sentence.text
                );
            }
        }
    }

    /// Property: identical seed, identical input => identical templates and
    /// identical sentence sequence.
    #[test]
    fn prop_deterministic_for_fixed_seed(
        catalog in arb_catalog(),
        counts in arb_word_counts(),
        seed in any::<u64>()
    ) {
        prop_assert_eq!(
            run_assembly(&catalog, &counts, seed),
            run_assembly(&catalog, &counts, seed)
        );
    }

    /// Property: every generated sentence starts with a non-lowercase
    /// character (the first letter is uppercased; leading punctuation is
    /// left alone).
    #[test]
    fn prop_sentences_never_start_lowercase(
        catalog in arb_catalog(),
        counts in arb_word_counts(),
        seed in any::<u64>()
    ) {
        let sentences = run_assembly(&catalog, &counts, seed);
        for sentence in &sentences {
            if let Some(first) = sentence.text.chars().next() {
                prop_assert!(
                    !first.is_lowercase(),
                    "sentence starts lowercase: {:?}",
                    sentence.text
                );
            }
        }
    }
}
