//! # tyras-metadata-jsonschema
//!
//! Turn TyRAS encoders and decoders into JSON Schema for API metadata
//! (OpenAPI and similar).
//!
//! Validator adapters describe, per purpose, how their native decoder or
//! encoder becomes a [`Schema`] ([`SchemaTransformation`]);
//! [`create_json_schema_functionality_generic`] turns those descriptions into
//! the ready-to-call [`SupportedJsonSchemaFunctionality`] bundle that metadata
//! generators consume.
//!
//! The crate also ships the building blocks adapters typically need:
//!
//! - matcher combinators ([`transformer_from_constructor`],
//!   [`transformer_from_equality`], [`transformer_from_many`]) and fallback
//!   resolution ([`get_fallback_value`]),
//! - literal union compression ([`try_to_compress_union_of_maybe_enums`],
//!   [`compress_unions_deep`]),
//! - collection helpers ([`flatten_deep_structures`], [`array_to_record`]).
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use serde_json::json;
//! use tyras_metadata_jsonschema::{
//!     create_json_schema_functionality_for_content_types, ContentTypesArgs, Schema,
//!     SchemaOptions, SchemaTransformation, UndefinedPossibility,
//! };
//!
//! let describe = SchemaTransformation::<&'static str>::new(|name, _| json!({ "title": name }));
//! let identity: Arc<dyn Fn(Schema) -> Schema + Send + Sync> = Arc::new(|schema: Schema| schema);
//!
//! let functionality = create_json_schema_functionality_for_content_types(
//!     &SchemaOptions::default(),
//!     ContentTypesArgs {
//!         transform_schema: identity,
//!         string_decoder: describe.clone(),
//!         string_encoder: describe.clone(),
//!         decoder: describe.clone(),
//!         encoder: describe,
//!         get_undefined_possibility: Arc::new(|_| UndefinedPossibility::Never),
//!     },
//! );
//!
//! let schema = (functionality.decoders["application/json"])(&"user", true);
//! assert_eq!(schema, json!({ "title": "user" }));
//! ```

pub mod compress;
pub mod config;
pub mod create;
pub mod error;
pub mod functionality;
pub mod schema_utils;
pub mod structure;
pub mod transformers;

pub use compress::{compress_unions_deep, try_to_compress_union_of_maybe_enums};
pub use config::{SchemaOptions, DEFAULT_CONTENT_TYPE};
pub use create::{
    create_json_schema_functionality_for_content_types, create_json_schema_functionality_generic,
};
pub use error::SchemaError;
pub use functionality::{
    ContentTypeMap, ContentTypesArgs, DecoderOrEncoder, GetUndefinedPossibility,
    JsonSchemaFunctionalityArgs, Schema, SchemaTransformation, SupportedJsonSchemaFunctionality,
    Transformer, UndefinedPossibility,
};
pub use schema_utils::build_path;
pub use structure::{array_to_record, flatten_deep_structures, FlattenDeep};
pub use transformers::{
    default_fallback_value, get_fallback_value, transformer_from_constructor,
    transformer_from_equality, transformer_from_many, FallbackValue,
    DEFAULT_FALLBACK_VALUE_DESCRIPTION,
};
