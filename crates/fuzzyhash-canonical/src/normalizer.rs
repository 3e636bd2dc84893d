//! Type normalization: the first canonicalization stage.
//!
//! Walks the raw value tree once, depth-first and pre-order, applying the
//! policy's coercion table and dropping ignored mapping keys. The output is
//! a fresh canonical tree with the same variant shapes as the input; order
//! normalization is deferred to the freezer.

use std::fmt;

use crate::policy::{BoxError, Policy};
use crate::value::{Value, ValueKind};

/// Error produced while normalizing a value tree.
#[derive(thiserror::Error, Debug)]
pub enum NormalizeError {
    /// A registered coercion function failed. The original cause is
    /// preserved as the error source, never swallowed.
    #[error("coercion failed at {path} on {kind} value {value}")]
    Coercion {
        /// Location of the offending node.
        path: String,
        /// Runtime kind that selected the coercion.
        kind: ValueKind,
        /// Rendering of the offending value.
        value: String,
        /// Failure reported by the coercion function.
        #[source]
        source: BoxError,
    },
    /// A value has no defined canonical form (non-finite number).
    #[error("unsupported value at {path}: non-finite number")]
    UnsupportedValue {
        /// Location of the offending node.
        path: String,
    },
}

/// Helper for building node paths used in error reports.
#[derive(Debug, Clone)]
struct Path {
    segments: Vec<String>,
}

impl Path {
    fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    fn push_key(&self, key: &Value) -> Self {
        let mut segments = self.segments.clone();
        segments.push(match key {
            Value::Text(s) => s.clone(),
            other => format!("{:?}", other),
        });
        Self { segments }
    }

    fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(format!("[{}]", index));
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "root")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}

/// Normalizes a value tree under the given policy.
///
/// The input is never mutated; the result is a freshly built tree with
/// coercions applied and ignored keys removed at every depth. Absent
/// coercions and absent ignore keys are normal, not errors.
pub fn normalize(value: &Value, policy: &Policy) -> Result<Value, NormalizeError> {
    normalize_at(value.clone(), policy, &Path::root())
}

fn normalize_at(value: Value, policy: &Policy, path: &Path) -> Result<Value, NormalizeError> {
    // Coercion applies once per node, before descent. A failing coercion
    // aborts the walk; descent into the pre-coercion value never happens.
    let value = match policy.coercion_for(value.kind()) {
        Some(cast) => cast(&value).map_err(|source| NormalizeError::Coercion {
            path: path.to_string(),
            kind: value.kind(),
            value: format!("{:?}", value),
            source,
        })?,
        None => value,
    };

    match value {
        Value::Sequence(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                out.push(normalize_at(item, policy, &path.push_index(index))?);
            }
            Ok(Value::Sequence(out))
        }
        Value::Mapping(pairs) => {
            // Ignored keys are dropped before their values are visited, so
            // a failing coercion under an ignored key can never surface.
            let mut out = Vec::with_capacity(pairs.len());
            for (key, item) in pairs {
                if policy.is_ignored(&key) {
                    continue;
                }
                let child_path = path.push_key(&key);
                require_finite(&key, &child_path)?;
                out.push((key, normalize_at(item, policy, &child_path)?));
            }
            Ok(Value::Mapping(out))
        }
        scalar => {
            require_finite(&scalar, path)?;
            Ok(scalar)
        }
    }
}

fn require_finite(value: &Value, path: &Path) -> Result<(), NormalizeError> {
    if let Value::Number(n) = value {
        if !n.is_finite() {
            return Err(NormalizeError::UnsupportedValue {
                path: path.to_string(),
            });
        }
    }
    Ok(())
}
