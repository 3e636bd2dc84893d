//! Element counting over value trees.
//!
//! An independent read-only traversal, not part of canonicalization.

use fuzzyhash_canonical::Value;

/// Counts the elements contained in every nested sequence and mapping.
///
/// A scalar child or an empty container child contributes one unit; a
/// non-empty container child contributes the count of its own children,
/// recursively. A top-level scalar or empty container contains nothing and
/// counts zero. So `count([[], [1, 2]])` is 3: the empty inner list folds
/// to one unit and the non-empty inner list contributes its two elements.
pub fn count(value: &Value) -> usize {
    match value {
        Value::Sequence(items) if !items.is_empty() => items.iter().map(contribution).sum(),
        Value::Mapping(pairs) if !pairs.is_empty() => {
            pairs.iter().map(|(_, item)| contribution(item)).sum()
        }
        _ => 0,
    }
}

fn contribution(value: &Value) -> usize {
    match value {
        Value::Sequence(items) if !items.is_empty() => items.iter().map(contribution).sum(),
        Value::Mapping(pairs) if !pairs.is_empty() => {
            pairs.iter().map(|(_, item)| contribution(item)).sum()
        }
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn empty_child_folds_to_one_unit() {
        assert_eq!(count(&v(serde_json::json!([[], [1, 2]]))), 3);
    }

    #[test]
    fn flat_containers_count_their_elements() {
        assert_eq!(count(&v(serde_json::json!([1, 2, 3]))), 3);
        assert_eq!(count(&v(serde_json::json!({"a": 1, "b": 2}))), 2);
    }

    #[test]
    fn scalars_and_empty_tops_count_zero() {
        assert_eq!(count(&v(serde_json::json!(5))), 0);
        assert_eq!(count(&v(serde_json::json!([]))), 0);
        assert_eq!(count(&v(serde_json::json!({}))), 0);
    }

    #[test]
    fn mapping_values_count_recursively() {
        assert_eq!(count(&v(serde_json::json!({"a": {"b": [1, 2]}, "c": 3}))), 3);
    }
}
