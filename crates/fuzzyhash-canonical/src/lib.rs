//! Canonical value model and canonicalization primitives for fuzzy
//! structural hashing.
//!
//! Two decoded value trees compare as "same content" even when their
//! encoders disagreed on container ordering or primitive representation.
//! Canonicalization runs in two stages:
//! - normalization: type coercion and mapping-key filtering ([`normalize`])
//! - freezing: order normalization into a single immutable, hashable
//!   representative ([`freeze`])
//!
//! Every operation is a pure function of `(value, policy)`; input trees are
//! never mutated, and the same input always produces a bit-identical
//! [`FrozenValue`] on any run in any process.
//!
#![deny(missing_docs)]

/// Digest computation over frozen values.
pub mod digest;
/// Order normalization (freezing) and the total order over frozen values.
pub mod freezer;
/// Type normalization: coercions and key filtering.
pub mod normalizer;
/// Comparison policy: coercion table, ignored keys, strictness.
pub mod policy;
/// Validation helpers used by canonical types.
pub mod validation;
/// The decoded value model.
pub mod value;

pub use digest::{digest_frozen, Digest, DigestAlg};
pub use freezer::{freeze, FrozenValue};
pub use normalizer::{normalize, NormalizeError};
pub use policy::{BoxError, CoercionFn, Policy};
pub use validation::ValidationError;
pub use value::{Number, Value, ValueKind};
