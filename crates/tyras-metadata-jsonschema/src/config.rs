//! Configuration for schema functionality creation and union compression.

use serde::{Deserialize, Serialize};

/// The MIME type used when no content types are configured explicitly.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Options shared by the content-type driven factory and deep compression.
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case` (e.g., `max-depth`,
/// `request-content-types`), so the same struct can be read from config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SchemaOptions {
    /// Maximum nesting depth visited by `compress_unions_deep`.
    pub max_depth: usize,
    /// Content types of request bodies, i.e. the keys of the `decoders` map.
    pub request_content_types: Vec<String>,
    /// Content types of response bodies, i.e. the keys of the `encoders` map.
    pub response_content_types: Vec<String>,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            max_depth: 50,
            request_content_types: vec![DEFAULT_CONTENT_TYPE.to_string()],
            response_content_types: vec![DEFAULT_CONTENT_TYPE.to_string()],
        }
    }
}
