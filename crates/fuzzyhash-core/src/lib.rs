//! Order-insensitive structural equality and hashing for decoded data.
//!
//! This crate provides:
//! - The [`FuzzyHash`] comparator: `equals`, `not_equals`, `digest`,
//!   `freeze` under a reusable comparison policy
//! - A decode boundary turning raw text into a value tree
//! - An element counter over nested containers
//!
//! Core invariants:
//! - Equality is structural equality of frozen representatives, never mere
//!   digest equality
//! - `equals(a, b)` implies `digest(a) == digest(b)`; the converse is a
//!   documented collision risk
//! - Canonicalization never mutates caller-owned trees
//!
#![deny(missing_docs)]

/// The policy-carrying comparator.
pub mod comparator;
/// Element counting over value trees.
pub mod count;
/// Decode boundary for raw text input.
pub mod decode;
/// Error types for core operations.
pub mod errors;

pub use comparator::FuzzyHash;
pub use count::count;
pub use decode::decode_text;
pub use errors::CoreError;
