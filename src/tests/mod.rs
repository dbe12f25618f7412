//! Crate test suite
//!
//! - `property`: proptest invariants for the sentence assembly core
//! - `unit`: service-client and orchestrator tests (wiremock + stubs)
//!
//! Scenario-level coverage of the assembler itself lives next to the code
//! in `core::wordgen::assembler`.

mod property;
mod unit;
