//! Decode boundary for raw text input.

use fuzzyhash_canonical::Value;

/// Decodes raw text into a value tree.
///
/// Text the JSON decoder accepts becomes the decoded tree; anything else
/// passes through as an opaque text scalar. A boundary convenience only:
/// the canonicalization core never parses text itself.
pub fn decode_text(text: &str) -> Value {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(json) => Value::from(json),
        Err(_) => Value::Text(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzyhash_canonical::Number;

    #[test]
    fn json_text_decodes_to_tree() {
        assert_eq!(
            decode_text("[1, 2]"),
            Value::Sequence(vec![
                Value::Number(Number::Int(1)),
                Value::Number(Number::Int(2))
            ])
        );
    }

    #[test]
    fn non_json_text_passes_through_as_text() {
        assert_eq!(decode_text("not { json"), Value::Text("not { json".into()));
    }
}
