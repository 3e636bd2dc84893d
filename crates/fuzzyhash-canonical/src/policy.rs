use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::value::{Value, ValueKind};

/// Boxed failure cause returned by a coercion function.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A pure per-kind value transform, applied before structural descent.
///
/// Entries are typed as functions by construction; callers are responsible
/// for keeping them side-effect-free and thread-safe so a shared policy can
/// serve concurrent comparisons.
pub type CoercionFn = dyn Fn(&Value) -> Result<Value, BoxError> + Send + Sync;

/// Comparison policy: coercion table, ignored mapping keys, and ordering
/// strictness. Immutable after construction; cloning shares the registered
/// coercion functions.
#[derive(Clone, Default)]
pub struct Policy {
    type_map: BTreeMap<ValueKind, Arc<CoercionFn>>,
    ignored_keys: Vec<Value>,
    strict: bool,
}

impl Policy {
    /// Creates the default policy: no coercions, no ignored keys, sequence
    /// order insignificant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a coercion for one runtime kind, replacing any previous
    /// entry for that kind.
    pub fn with_coercion<F>(mut self, kind: ValueKind, cast: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.type_map.insert(kind, Arc::new(cast));
        self
    }

    /// Adds a mapping key to elide at every nesting depth.
    pub fn with_ignored_key(mut self, key: impl Into<Value>) -> Self {
        self.ignored_keys.push(key.into());
        self
    }

    /// Adds text mapping keys to elide, for the common JSON case.
    pub fn with_ignored_text_keys<'a>(mut self, keys: impl IntoIterator<Item = &'a str>) -> Self {
        self.ignored_keys
            .extend(keys.into_iter().map(Value::from));
        self
    }

    /// Sets strict mode: sequences keep encounter order instead of being
    /// sorted, so sequence order becomes significant. Mapping pair order is
    /// never significant either way.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Looks up the coercion registered for a kind, if any.
    pub fn coercion_for(&self, kind: ValueKind) -> Option<&Arc<CoercionFn>> {
        self.type_map.get(&kind)
    }

    /// True if the key matches an ignored key by value equality.
    pub fn is_ignored(&self, key: &Value) -> bool {
        self.ignored_keys.iter().any(|k| k == key)
    }

    /// Whether sequence encounter order is significant.
    pub fn strict(&self) -> bool {
        self.strict
    }
}

impl fmt::Debug for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Policy")
            .field("coerced_kinds", &self.type_map.keys().collect::<Vec<_>>())
            .field("ignored_keys", &self.ignored_keys)
            .field("strict", &self.strict)
            .finish()
    }
}
