//! Error types for the vector library

use thiserror::Error;

/// Main error type for vector operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    /// Component index outside of `0..=2`
    #[error("Index out of range: {index} (expected 0, 1 or 2)")]
    IndexOutOfRange { index: usize },
}

/// Result type alias for vector operations
pub type Result<T> = std::result::Result<T, VectorError>;
