//! Order normalization: the second canonicalization stage.
//!
//! Converts a canonical tree into a single immutable, hashable
//! representative. Sequences become ordered tuples (sorted under the
//! default policy, encounter order under strict mode) and mappings become
//! order-independent pair sets with duplicate keys collapsed last-write.

use std::collections::BTreeMap;

use crate::value::{Number, Value};

/// Fully order-normalized, immutable, hashable representative of a value
/// tree. Equality of two frozen values is the definition of fuzzy equality.
///
/// The derived `Ord` is the total order used for sequence sorting: variants
/// compare by kind rank first (`Null < Bool < Number < Text < Bytes <
/// Sequence < Mapping`), then by the natural order within the kind. Mixed
/// kind containers therefore sort without any comparison ever failing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FrozenValue {
    /// Absent value.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar; ordering is numeric and total.
    Number(Number),
    /// Text scalar; ordering is lexicographic.
    Text(String),
    /// Opaque byte scalar; ordering is lexicographic.
    Bytes(Vec<u8>),
    /// Ordered tuple; ordering is element-wise.
    Sequence(Vec<FrozenValue>),
    /// Mapping rendered as its pair list sorted by key, which makes
    /// equality and hashing order-independent by construction.
    Mapping(Vec<(FrozenValue, FrozenValue)>),
}

/// Freezes a canonical tree into its representative.
///
/// Infallible: the total order over [`FrozenValue`] covers every variant,
/// and [`Number`]'s order is total even for non-finite floats (which the
/// normalizer rejects before they reach here). Freezing is deterministic
/// and idempotent: structurally equal trees that differ only in sequence
/// order (when `strict` is false) or mapping pair order (always) produce
/// bit-identical results.
pub fn freeze(tree: &Value, strict: bool) -> FrozenValue {
    match tree {
        Value::Null => FrozenValue::Null,
        Value::Bool(b) => FrozenValue::Bool(*b),
        Value::Number(n) => FrozenValue::Number(*n),
        Value::Text(s) => FrozenValue::Text(s.clone()),
        Value::Bytes(b) => FrozenValue::Bytes(b.clone()),
        Value::Sequence(items) => {
            let mut frozen: Vec<FrozenValue> =
                items.iter().map(|item| freeze(item, strict)).collect();
            if !strict {
                frozen.sort();
            }
            FrozenValue::Sequence(frozen)
        }
        Value::Mapping(pairs) => {
            // Last write wins for duplicate keys, matching standard
            // mapping-construction semantics.
            let mut set = BTreeMap::new();
            for (key, value) in pairs {
                set.insert(freeze(key, strict), freeze(value, strict));
            }
            FrozenValue::Mapping(set.into_iter().collect())
        }
    }
}
