//! Sentence Assembly Engine
//!
//! The algorithmic core: repeatedly pick the template that can absorb the
//! most still-unused input words, fill its placeholders (input words first,
//! bank words once a category runs dry), capitalize, and repeat until the
//! supply is exhausted. A template that can absorb nothing ends the run
//! immediately, discarding whatever remains; this is the liveness guarantee,
//! not an optimization.

use rand::Rng;

use super::bank::WordBank;
use super::category::Category;
use super::supply::WordSupply;
use super::templates::{placeholder_in, Template, TemplateCatalog};

/// A finished sentence paired with the template that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSentence {
    /// The template line used, kept for traceability.
    pub structure: String,
    /// The substituted, capitalized sentence text.
    pub text: String,
}

/// Greedy template-driven sentence builder.
///
/// Borrows the shared read-only catalog and bank; each call to [`assemble`]
/// owns its supply, so one assembler can serve concurrent runs as long as
/// every run brings its own `WordSupply` and RNG.
///
/// [`assemble`]: SentenceAssembler::assemble
pub struct SentenceAssembler<'a> {
    catalog: &'a TemplateCatalog,
    bank: &'a WordBank,
}

impl<'a> SentenceAssembler<'a> {
    pub fn new(catalog: &'a TemplateCatalog, bank: &'a WordBank) -> Self {
        Self { catalog, bank }
    }

    /// Run the greedy loop to exhaustion.
    ///
    /// Every word in `supply` ends up in exactly one sentence, except words
    /// discarded when no template has a matching placeholder left to give.
    pub fn assemble(
        &self,
        supply: &mut WordSupply,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedSentence> {
        let mut sentences = Vec::new();
        while supply.any_remaining() {
            let Some((template, score)) = self.select(supply) else {
                log::debug!("template catalog is empty; nothing to generate");
                break;
            };
            if score == 0 {
                log::debug!(
                    "no template fits the {} leftover words; discarding them",
                    supply.total_remaining()
                );
                break;
            }
            sentences.push(GeneratedSentence {
                structure: template.text().to_string(),
                text: self.instantiate(template, supply, rng),
            });
        }
        sentences
    }

    /// Pick the template that can absorb the most remaining supply words.
    ///
    /// Ties resolve to the first template in catalog order; the tie-break is
    /// deterministic and part of the contract, so reruns with a fixed seed
    /// reproduce the same selections.
    fn select(&self, supply: &WordSupply) -> Option<(&'a Template, usize)> {
        let mut best: Option<(&Template, usize)> = None;
        for template in self.catalog.iter() {
            let score = usable(template, supply);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((template, score)),
            }
        }
        best
    }

    /// Fill one template, consuming supply words and falling back to the
    /// bank per category as the supply runs dry.
    fn instantiate(
        &self,
        template: &Template,
        supply: &mut WordSupply,
        rng: &mut impl Rng,
    ) -> String {
        // Single-space split, empty tokens preserved: a literal double space
        // in a template survives to the output unchanged.
        let tokens: Vec<String> = template
            .text()
            .split(' ')
            .map(|token| match placeholder_in(token) {
                Some((category, tag)) => {
                    let word = supply
                        .take(category)
                        .unwrap_or_else(|| self.bank.random(category, rng));
                    token.replacen(tag, &word, 1)
                }
                None => token.to_string(),
            })
            .collect();
        capitalize(&tokens.join(" "))
    }
}

/// How many supply words `template` could absorb right now: the sum over
/// categories of min(placeholder count, remaining). Recomputed against the
/// dwindling supply every iteration, so later rounds naturally prefer
/// smaller templates.
fn usable(template: &Template, supply: &WordSupply) -> usize {
    Category::all()
        .iter()
        .map(|&c| template.count(c).min(supply.remaining(c)))
        .sum()
}

/// Uppercase the first character; an empty string stays empty.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
