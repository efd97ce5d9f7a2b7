//! Error types for schema processing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Recursion depth exceeded at {path} (max: {max_depth})")]
    RecursionDepthExceeded { path: String, max_depth: usize },
}
