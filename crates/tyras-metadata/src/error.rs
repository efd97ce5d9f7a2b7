//! Error types for metadata provider plumbing.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetadataError {
    #[error("Unknown HTTP method: {0}")]
    UnknownHttpMethod(String),
}
