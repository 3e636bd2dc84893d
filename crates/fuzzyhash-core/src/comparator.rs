//! The user-facing comparator.
//!
//! A [`FuzzyHash`] holds a comparison policy and exposes the named
//! operations: `equals`, `not_equals`, `digest`, and `freeze`. Equality is
//! structural equality of the two frozen representatives, never digest
//! comparison; digests are a fast fingerprint whose equality direction is
//! only guaranteed from `equals(a, b)` to `digest(a) == digest(b)`.

use std::sync::Arc;

use fuzzyhash_canonical::{
    digest_frozen, freeze, normalize, Digest, FrozenValue, Policy, Value,
};

use crate::decode::decode_text;
use crate::errors::CoreError;

/// Policy-carrying comparator. Construct once, reuse across many
/// comparisons; clones are cheap and safe to share across threads as long
/// as registered coercion functions are themselves side-effect-free.
#[derive(Debug, Clone, Default)]
pub struct FuzzyHash {
    policy: Arc<Policy>,
}

impl FuzzyHash {
    /// Creates a comparator with the given policy.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// The policy this comparator applies.
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Canonicalizes a value into its frozen representative.
    ///
    /// Exposed for callers who want structural comparison without hashing.
    pub fn freeze(&self, value: &Value) -> Result<FrozenValue, CoreError> {
        let tree = normalize(value, &self.policy)?;
        Ok(freeze(&tree, self.policy.strict()))
    }

    /// True when the two values canonicalize to the same representative.
    ///
    /// Either the whole tree canonicalizes or the call fails; there are no
    /// partial results and nothing transient to retry.
    pub fn equals(&self, a: &Value, b: &Value) -> Result<bool, CoreError> {
        Ok(self.freeze(a)? == self.freeze(b)?)
    }

    /// Negation of [`FuzzyHash::equals`].
    pub fn not_equals(&self, a: &Value, b: &Value) -> Result<bool, CoreError> {
        self.equals(a, b).map(|eq| !eq)
    }

    /// Digest of a value's frozen representative.
    pub fn digest(&self, value: &Value) -> Result<Digest, CoreError> {
        Ok(digest_frozen(&self.freeze(value)?))
    }

    /// Digest of raw text, decoded at the boundary first.
    pub fn digest_text(&self, text: &str) -> Result<Digest, CoreError> {
        self.digest(&decode_text(text))
    }
}
