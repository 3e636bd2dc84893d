//! Digest computation over frozen values.
//!
//! A digest is computed as `sha256(domain_separator || encode(frozen))`
//! where `encode` is an unambiguous, length-prefixed byte encoding of the
//! frozen representative. Equal frozen values always produce equal digests;
//! the converse is the usual hash-collision caveat, so equality checks
//! compare frozen values structurally and never rely on digests alone.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};

use crate::freezer::FrozenValue;
use crate::validation::ValidationError;
use crate::value::Number;

/// Domain separator for frozen value digests: `b"fuzzyhash:frozen:v1\0"`.
const FROZEN_DOMAIN_SEPARATOR: &[u8] = b"fuzzyhash:frozen:v1\0";

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlg {
    /// SHA-256 (the current default).
    #[serde(rename = "sha-256")]
    Sha256,
}

impl fmt::Display for DigestAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestAlg::Sha256 => f.write_str("sha-256"),
        }
    }
}

/// Algorithm + bytes digest, encoded as base64url without padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest {
    /// Digest algorithm (currently always `sha-256`).
    pub alg: DigestAlg,
    /// Base64URL (no padding) digest bytes.
    #[serde(rename = "b64")]
    pub b64: String,
}

impl Digest {
    /// Constructs a validated digest.
    pub fn new(alg: DigestAlg, b64: impl Into<String>) -> Result<Self, ValidationError> {
        let b64 = b64.into();
        let re = Regex::new(r"^[A-Za-z0-9_-]{43,44}$").expect("invalid regex");
        if !re.is_match(&b64) {
            return Err(ValidationError::PatternMismatch {
                field: "digest",
                value: b64,
            });
        }
        Ok(Digest { alg, b64 })
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.alg, self.b64)
    }
}

/// Computes the digest of a frozen value.
pub fn digest_frozen(frozen: &FrozenValue) -> Digest {
    let mut encoded = Vec::new();
    encode_frozen(frozen, &mut encoded);

    let mut hasher = Sha256::new();
    hasher.update(FROZEN_DOMAIN_SEPARATOR);
    hasher.update(&encoded);
    let hash_bytes = hasher.finalize();

    use base64::Engine;
    let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hash_bytes);
    Digest {
        alg: DigestAlg::Sha256,
        b64,
    }
}

/// Tag-and-length byte encoding. Every variant starts with a distinct tag
/// and every variable-length payload is count-prefixed, so no two distinct
/// frozen values share an encoding.
fn encode_frozen(frozen: &FrozenValue, out: &mut Vec<u8>) {
    match frozen {
        FrozenValue::Null => out.push(0),
        FrozenValue::Bool(b) => {
            out.push(1);
            out.push(u8::from(*b));
        }
        FrozenValue::Number(Number::Int(i)) => {
            out.push(2);
            out.extend_from_slice(&i.to_le_bytes());
        }
        FrozenValue::Number(Number::Float(f)) => {
            out.push(3);
            out.extend_from_slice(&f.to_bits().to_le_bytes());
        }
        FrozenValue::Text(s) => {
            out.push(4);
            out.extend_from_slice(&(s.len() as u64).to_le_bytes());
            out.extend_from_slice(s.as_bytes());
        }
        FrozenValue::Bytes(b) => {
            out.push(5);
            out.extend_from_slice(&(b.len() as u64).to_le_bytes());
            out.extend_from_slice(b);
        }
        FrozenValue::Sequence(items) => {
            out.push(6);
            out.extend_from_slice(&(items.len() as u64).to_le_bytes());
            for item in items {
                encode_frozen(item, out);
            }
        }
        FrozenValue::Mapping(pairs) => {
            out.push(7);
            out.extend_from_slice(&(pairs.len() as u64).to_le_bytes());
            for (key, value) in pairs {
                encode_frozen(key, out);
                encode_frozen(value, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable_and_well_formed() {
        let frozen = FrozenValue::Sequence(vec![
            FrozenValue::Text("a".into()),
            FrozenValue::Number(Number::Int(1)),
        ]);
        let first = digest_frozen(&frozen);
        let second = digest_frozen(&frozen);
        assert_eq!(first, second);
        assert!(Digest::new(DigestAlg::Sha256, first.b64.clone()).is_ok());
    }

    #[test]
    fn distinct_frozen_values_encode_distinctly() {
        let empty_seq = digest_frozen(&FrozenValue::Sequence(vec![]));
        let empty_map = digest_frozen(&FrozenValue::Mapping(vec![]));
        let empty_text = digest_frozen(&FrozenValue::Text(String::new()));
        assert_ne!(empty_seq, empty_map);
        assert_ne!(empty_seq, empty_text);
    }

    #[test]
    fn display_includes_algorithm() {
        let digest = digest_frozen(&FrozenValue::Null);
        assert!(digest.to_string().starts_with("sha-256:"));
    }
}
