use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Largest magnitude at which every integral `f64` round-trips through `i64`.
const EXACT_INT_BOUND: f64 = 9_007_199_254_740_992.0; // 2^53

/// A decoded value tree: the input to normalization and freezing.
///
/// `Sequence` covers source lists, tuples, and sets alike; set semantics
/// (unordered, unique) are imposed later by the freezer, never assumed here.
/// `Mapping` is an ordered pair list so that encoder-dependent key order is
/// representable; order is discarded during freezing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Absent value.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar (integer or binary float).
    Number(Number),
    /// Text scalar. Never treated as a sequence even though it is iterable
    /// in many source encodings.
    Text(String),
    /// Opaque byte scalar. Like `Text`, never treated as a sequence.
    Bytes(Vec<u8>),
    /// Ordered sequence of child values.
    Sequence(Vec<Value>),
    /// Ordered list of key/value pairs. Keys are scalar values, typically
    /// `Text`; duplicate keys collapse last-write during freezing.
    Mapping(Vec<(Value, Value)>),
}

/// Runtime kind of a [`Value`], used as the coercion table lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    /// [`Value::Null`].
    Null,
    /// [`Value::Bool`].
    Bool,
    /// [`Value::Number`].
    Number,
    /// [`Value::Text`].
    Text,
    /// [`Value::Bytes`].
    Bytes,
    /// [`Value::Sequence`].
    Sequence,
    /// [`Value::Mapping`].
    Mapping,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::Bytes => "bytes",
            ValueKind::Sequence => "sequence",
            ValueKind::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Returns the runtime kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Mapping(_) => ValueKind::Mapping,
        }
    }
}

/// Numeric scalar with encoder-independent canonical form.
///
/// Construction folds finite integral floats within the exact `i64` range
/// into `Int`, so a value decoded as `1.0` by one decoder and `1` by another
/// canonicalizes identically. After folding, equality, ordering, and hashing
/// are all structural and mutually consistent.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Signed integer.
    Int(i64),
    /// IEEE-754 binary float. After construction through [`Number::from_f64`]
    /// this is never an integral value within +/- 2^53.
    Float(f64),
}

impl Number {
    /// Wraps a signed integer.
    pub fn from_i64(value: i64) -> Self {
        Number::Int(value)
    }

    /// Wraps a float, folding exact integral values into `Int`.
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= EXACT_INT_BOUND {
            Number::Int(value as i64)
        } else {
            Number::Float(value)
        }
    }

    /// True unless this is a NaN or infinite float.
    pub fn is_finite(&self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(f) => f.is_finite(),
        }
    }

    /// Total order over numbers: numeric comparison, with `Int` ordered
    /// before `Float` on a numeric tie. Total even for non-finite floats
    /// (via `f64::total_cmp`), so sorting can never fail.
    pub fn total_cmp(&self, other: &Number) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(b),
            (Number::Float(a), Number::Float(b)) => a.total_cmp(b),
            (Number::Int(a), Number::Float(b)) => {
                (*a as f64).total_cmp(b).then(Ordering::Less)
            }
            (Number::Float(a), Number::Int(b)) => {
                a.total_cmp(&(*b as f64)).then(Ordering::Greater)
            }
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.total_cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.total_cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Number::Int(i) => {
                state.write_u8(0);
                i.hash(state);
            }
            Number::Float(f) => {
                state.write_u8(1);
                f.to_bits().hash(state);
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(Number::from_json(&n)),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(key, value)| (Value::Text(key), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Number {
    /// Converts a decoded JSON number, preferring the exact integer form.
    pub fn from_json(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            Number::Int(i)
        } else {
            Number::from_f64(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Int(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::from_f64(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}
