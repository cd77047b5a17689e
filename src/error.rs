// src/error.rs

use thiserror::Error;

/// A flat coordinate slice did not match the dimension of the target algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} field elements, found {found}")]
pub struct DimensionError {
    pub expected: usize,
    pub found: usize,
}
