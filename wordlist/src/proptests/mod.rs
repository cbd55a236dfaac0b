//! Property-based tests for wordlist normalization
//!
//! These tests check invariants that hold for ANY input text, complementing the
//! fixture-based integration tests.

mod generators;
mod invariants;
