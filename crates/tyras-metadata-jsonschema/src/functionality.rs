//! Types describing how validators are turned into JSON Schema.
//!
//! A validator adapter (io-ts, zod, runtypes, ... style libraries) supplies one
//! [`SchemaTransformation`] per purpose. The factory in [`crate::create`] wraps
//! them into a [`SupportedJsonSchemaFunctionality`], the bundle consumed by
//! metadata generators such as an OpenAPI document builder.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::transformers::{get_fallback_value, FallbackValue};

/// The JSON Schema (draft-07) value used throughout this crate.
///
/// Boolean schemas are allowed, so this is the full `serde_json::Value`.
pub type Schema = Value;

/// Turns an encoder or decoder into some output.
///
/// The second argument is `cut_off_top_level_undefined`: when `true` and the
/// input accepts "no value" at the top level, the output should describe the
/// input as if it did not. Callers use this where optionality is already
/// expressed structurally, e.g. for required object properties.
pub type Transformer<I, O> = Arc<dyn Fn(&I, bool) -> O + Send + Sync>;

/// Map from content MIME type (almost always `"application/json"`) to a value.
pub type ContentTypeMap<T> = BTreeMap<String, T>;

/// Callback deducing whether a decoder or encoder accepts `undefined`.
pub type GetUndefinedPossibility<D, E> =
    Arc<dyn Fn(DecoderOrEncoder<'_, D, E>) -> UndefinedPossibility + Send + Sync>;

/// Borrowed request-body decoder or response-body encoder, as passed to
/// [`GetUndefinedPossibility`].
#[derive(Debug)]
pub enum DecoderOrEncoder<'a, D, E> {
    Decoder(&'a D),
    Encoder(&'a E),
}

impl<D, E> Clone for DecoderOrEncoder<'_, D, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, E> Copy for DecoderOrEncoder<'_, D, E> {}

/// Whether an encoder or decoder yields/accepts `undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UndefinedPossibility {
    /// Always yields or accepts `undefined`.
    Always,
    /// Never yields or accepts `undefined`.
    Never,
    /// Depends on the data.
    Sometimes,
}

impl From<Option<bool>> for UndefinedPossibility {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Always,
            Some(false) => Self::Never,
            None => Self::Sometimes,
        }
    }
}

impl From<UndefinedPossibility> for Option<bool> {
    fn from(value: UndefinedPossibility) -> Self {
        match value {
            UndefinedPossibility::Always => Some(true),
            UndefinedPossibility::Never => Some(false),
            UndefinedPossibility::Sometimes => None,
        }
    }
}

/// How one kind of encoder or decoder is turned into a [`Schema`].
pub struct SchemaTransformation<I> {
    /// The generic transformation. Must produce a usable schema for any input.
    pub transform: Transformer<I, Schema>,
    /// Consulted before `transform`; returning `None` lets `transform` run.
    pub override_transform: Option<Transformer<I, Option<Schema>>>,
}

impl<I> SchemaTransformation<I> {
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(&I, bool) -> Schema + Send + Sync + 'static,
    {
        Self {
            transform: Arc::new(transform),
            override_transform: None,
        }
    }

    /// Build a transformation from a matcher which may decline.
    ///
    /// Declines are resolved through [`get_fallback_value`], so the resulting
    /// `transform` always yields a schema.
    pub fn with_fallback<F>(try_transform: F, fallback: FallbackValue<I>) -> Self
    where
        F: Fn(&I, bool) -> Option<Schema> + Send + Sync + 'static,
        I: 'static,
    {
        Self::new(move |input: &I, cut_off: bool| {
            try_transform(input, cut_off)
                .unwrap_or_else(|| get_fallback_value(Some(input), &fallback))
        })
    }

    pub fn with_override<F>(mut self, override_transform: F) -> Self
    where
        F: Fn(&I, bool) -> Option<Schema> + Send + Sync + 'static,
    {
        self.override_transform = Some(Arc::new(override_transform));
        self
    }
}

impl<I> Clone for SchemaTransformation<I> {
    fn clone(&self) -> Self {
        Self {
            transform: Arc::clone(&self.transform),
            override_transform: self.override_transform.clone(),
        }
    }
}

impl<I> fmt::Debug for SchemaTransformation<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaTransformation")
            .field("has_override", &self.override_transform.is_some())
            .finish_non_exhaustive()
    }
}

/// Arguments of [`crate::create_json_schema_functionality_generic`].
///
/// Type parameters: `TOut` is the final schema type produced by
/// `transform_schema`, `SD`/`SE` are the string decoder/encoder types (URL
/// path, query and header parameters), `D`/`E` the request body decoder and
/// response body encoder types.
pub struct JsonSchemaFunctionalityArgs<TOut, SD, SE, D, E> {
    /// Applied to every produced [`Schema`] before it is returned.
    pub transform_schema: Arc<dyn Fn(Schema) -> TOut + Send + Sync>,
    pub string_decoder: SchemaTransformation<SD>,
    pub string_encoder: SchemaTransformation<SE>,
    /// Request body decoders, per content type.
    pub decoders: ContentTypeMap<SchemaTransformation<D>>,
    /// Response body encoders, per content type.
    pub encoders: ContentTypeMap<SchemaTransformation<E>>,
    /// Passed through unchanged to the output.
    pub get_undefined_possibility: GetUndefinedPossibility<D, E>,
}

/// Arguments of [`crate::create_json_schema_functionality_for_content_types`].
///
/// Unlike [`JsonSchemaFunctionalityArgs`], a single decoder and a single
/// encoder transformation are given, and replicated for every content type
/// listed in [`crate::SchemaOptions`].
///
/// There is no bundle-wide fallback schema: the four transformations have
/// different input types, so each one carries its own, attached with
/// [`SchemaTransformation::with_fallback`].
pub struct ContentTypesArgs<TOut, SD, SE, D, E> {
    pub transform_schema: Arc<dyn Fn(Schema) -> TOut + Send + Sync>,
    pub string_decoder: SchemaTransformation<SD>,
    pub string_encoder: SchemaTransformation<SE>,
    pub decoder: SchemaTransformation<D>,
    pub encoder: SchemaTransformation<E>,
    pub get_undefined_possibility: GetUndefinedPossibility<D, E>,
}

/// Everything a metadata generator needs to turn validators into schemas.
pub struct SupportedJsonSchemaFunctionality<TOut, SD, SE, D, E> {
    /// Schema of string values decoded from requests (headers, URL path, query).
    pub string_decoder: Transformer<SD, TOut>,
    /// Schema of string values encoded into responses (headers).
    pub string_encoder: Transformer<SE, TOut>,
    /// Schema of request bodies, per content type.
    pub decoders: ContentTypeMap<Transformer<D, TOut>>,
    /// Schema of response bodies, per content type.
    pub encoders: ContentTypeMap<Transformer<E, TOut>>,
    pub get_undefined_possibility: GetUndefinedPossibility<D, E>,
}

impl<TOut, SD, SE, D, E> fmt::Debug for SupportedJsonSchemaFunctionality<TOut, SD, SE, D, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupportedJsonSchemaFunctionality")
            .field("decoders", &self.decoders.keys().collect::<Vec<_>>())
            .field("encoders", &self.encoders.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
