//! # Fleet Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Sample reference catalog and state builders
//! - Determinism and idempotence harness
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod determinism;
pub mod fixtures;
pub mod strategies;

/// Re-export proptest for convenience.
pub use proptest;
