use fuzzyhash_canonical::{NormalizeError, Policy, Value, ValueKind};
use fuzzyhash_core::{count, decode_text, CoreError, FuzzyHash};
use serde_json::json;

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn default_hash() -> FuzzyHash {
    FuzzyHash::default()
}

fn strict_hash() -> FuzzyHash {
    FuzzyHash::new(Policy::new().with_strict(true))
}

#[test]
fn permuted_sequences_are_equal_by_default() {
    let fh = default_hash();
    assert!(fh.equals(&v(json!([1, 2, 3])), &v(json!([3, 2, 1]))).unwrap());
    assert!(fh
        .equals(
            &v(json!({"k": ["a", "b", null]})),
            &v(json!({"k": [null, "b", "a"]}))
        )
        .unwrap());
}

#[test]
fn strict_mode_makes_sequence_order_significant() {
    let fh = strict_hash();
    assert!(!fh.equals(&v(json!([1, 2, 3])), &v(json!([3, 2, 1]))).unwrap());
    assert!(fh.equals(&v(json!([1, 2, 3])), &v(json!([1, 2, 3]))).unwrap());
}

#[test]
fn mapping_pair_order_never_matters() {
    for strict in [false, true] {
        let fh = FuzzyHash::new(Policy::new().with_strict(strict));
        assert!(fh
            .equals(
                &v(json!({"a": 1, "b": {"x": 1, "y": 2}})),
                &v(json!({"b": {"y": 2, "x": 1}, "a": 1}))
            )
            .unwrap());
    }
}

#[test]
fn ignored_keys_do_not_distinguish_values() {
    let fh = FuzzyHash::new(Policy::new().with_ignored_text_keys(["id"]));
    assert!(fh
        .equals(&v(json!({"id": 1, "v": 2})), &v(json!({"id": 2, "v": 2})))
        .unwrap());
    assert!(fh
        .equals(&v(json!({"id": 1, "v": 2})), &v(json!({"v": 2})))
        .unwrap());
    // Nested occurrences are elided too.
    assert!(fh
        .equals(
            &v(json!([{"inner": {"id": "x", "n": 1}}])),
            &v(json!([{"inner": {"n": 1}}]))
        )
        .unwrap());
}

#[test]
fn number_to_text_coercion_bridges_encoders() {
    let policy = Policy::new().with_coercion(ValueKind::Number, |value| match value {
        Value::Number(n) => Ok(Value::Text(n.to_string())),
        other => Ok(other.clone()),
    });
    let fh = FuzzyHash::new(policy);
    assert!(fh
        .equals(&v(json!({"a": 1})), &v(json!({"a": "1"})))
        .unwrap());
}

#[test]
fn failing_coercion_propagates_with_cause() {
    let policy = Policy::new()
        .with_coercion(ValueKind::Text, |_| Err("no numeric form".into()));
    let fh = FuzzyHash::new(policy);
    let err = fh.digest(&v(json!({"k": "abc"}))).unwrap_err();
    let CoreError::Normalize(NormalizeError::Coercion { path, source, .. }) = &err else {
        panic!("expected coercion error, got {err:?}");
    };
    assert_eq!(path, "k");
    assert_eq!(source.to_string(), "no numeric form");
}

#[test]
fn digests_track_equality() {
    let fh = default_hash();
    let a = v(json!({"x": [1, 2, 3], "y": "t"}));
    let b = v(json!({"y": "t", "x": [3, 1, 2]}));
    assert!(fh.equals(&a, &b).unwrap());
    assert_eq!(fh.digest(&a).unwrap(), fh.digest(&b).unwrap());

    let c = v(json!({"x": [1, 2, 4], "y": "t"}));
    assert!(fh.not_equals(&a, &c).unwrap());
    assert_ne!(fh.digest(&a).unwrap(), fh.digest(&c).unwrap());
}

#[test]
fn freeze_is_deterministic_across_comparators() {
    let a = FuzzyHash::default().freeze(&v(json!([[2, 1], {"b": 2, "a": 1}]))).unwrap();
    let b = FuzzyHash::default().freeze(&v(json!([{"a": 1, "b": 2}, [1, 2]]))).unwrap();
    assert_eq!(a, b);
}

#[test]
fn raw_text_boundary_decodes_or_passes_through() {
    let fh = default_hash();
    let from_text = fh.digest_text(r#"{"b": 2, "a": 1}"#).unwrap();
    let from_tree = fh.digest(&v(json!({"a": 1, "b": 2}))).unwrap();
    assert_eq!(from_text, from_tree);

    let opaque = fh.digest_text("definitely not json").unwrap();
    let as_text = fh.digest(&Value::from("definitely not json")).unwrap();
    assert_eq!(opaque, as_text);
}

#[test]
fn comparator_is_shareable_across_threads() {
    let fh = FuzzyHash::new(Policy::new().with_ignored_text_keys(["ts"]));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let fh = fh.clone();
            std::thread::spawn(move || {
                let a = v(json!({"ts": i, "items": [1, 2, 3]}));
                let b = v(json!({"ts": i + 1, "items": [3, 2, 1]}));
                fh.equals(&a, &b).unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn count_regression_cases() {
    assert_eq!(count(&v(json!([[], [1, 2]]))), 3);
    assert_eq!(count(&decode_text("[1, [2, 3]]")), 3);
}

#[test]
fn input_trees_survive_comparison_unchanged() {
    let fh = FuzzyHash::new(Policy::new().with_ignored_text_keys(["drop"]));
    let original = v(json!({"drop": 1, "keep": [3, 2, 1]}));
    let snapshot = original.clone();
    let _ = fh.digest(&original).unwrap();
    assert_eq!(original, snapshot);
}
