//! Input Word Supply
//!
//! The per-run pool of words extracted from the user's sentence. Each
//! category holds an independently shuffled list and a cursor; words are
//! handed out once each, in shuffled order, until the pool runs dry. Built
//! fresh per generation run, single-owner, never shared.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use super::category::Category;

/// One category's shuffled words plus the next-unread cursor.
///
/// Invariant: `cursor <= items.len()`, and it only ever moves forward.
#[derive(Debug, Clone, Default)]
struct Pool {
    items: Vec<String>,
    cursor: usize,
}

impl Pool {
    fn remaining(&self) -> usize {
        self.items.len() - self.cursor
    }
}

/// Shuffled, cursor-tracked words available for substitution.
#[derive(Debug, Clone, Default)]
pub struct WordSupply {
    pools: HashMap<Category, Pool>,
}

impl WordSupply {
    /// Copy each category's words, shuffle them with a uniform permutation,
    /// and reset every cursor.
    ///
    /// Pools are shuffled in `Category::all()` order so a fixed RNG seed
    /// reproduces the same permutations.
    pub fn build(
        classified: impl IntoIterator<Item = (Category, Vec<String>)>,
        rng: &mut impl Rng,
    ) -> Self {
        let mut pools: HashMap<Category, Pool> = Category::all()
            .iter()
            .map(|&c| (c, Pool::default()))
            .collect();
        for (category, words) in classified {
            pools.entry(category).or_default().items.extend(words);
        }
        for &category in Category::all() {
            if let Some(pool) = pools.get_mut(&category) {
                pool.items.shuffle(rng);
            }
        }
        Self { pools }
    }

    /// Words of `category` not yet handed out. Never negative.
    pub fn remaining(&self, category: Category) -> usize {
        self.pools
            .get(&category)
            .map(Pool::remaining)
            .unwrap_or(0)
    }

    /// The next unread word of `category`, advancing the cursor; `None` once
    /// the category is exhausted (no side effect).
    pub fn take(&mut self, category: Category) -> Option<String> {
        let pool = self.pools.get_mut(&category)?;
        let word = pool.items.get(pool.cursor)?.clone();
        pool.cursor += 1;
        Some(word)
    }

    /// True while at least one category still has unread words.
    pub fn any_remaining(&self) -> bool {
        Category::all().iter().any(|&c| self.remaining(c) > 0)
    }

    /// Total unread words across all categories.
    pub fn total_remaining(&self) -> usize {
        Category::all().iter().map(|&c| self.remaining(c)).sum()
    }
}
