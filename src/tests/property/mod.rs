//! Property-based tests
//!
//! Property tests verify invariants that should hold for all inputs rather
//! than specific cases. By default proptest runs 256 cases per property;
//! tune with the `PROPTEST_CASES` environment variable.
//!
//! - `assembler_props`: invariants of the greedy sentence assembly core
//!   - every input word is used at most once across all sentences
//!   - no sentence contains unresolved placeholder syntax
//!   - output is identical for identical shuffle seeds
//!   - sentences never start with a lowercase letter

mod assembler_props;
