use thiserror::Error;

/// Core error types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Canonicalization of an input tree failed.
    #[error("normalization failed: {0}")]
    Normalize(#[from] fuzzyhash_canonical::NormalizeError),
}
