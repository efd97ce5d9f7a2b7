//! Combinators building transformers from matching rules.
//!
//! Every combinator yields a function of shape `(input, cut_off) -> Option<O>`:
//! `None` means "not mine", letting the next matcher (or a fallback) decide.

use std::any::Any;
use std::fmt;

use serde_json::json;

use crate::functionality::Schema;

/// Description of the schema returned by [`default_fallback_value`].
pub const DEFAULT_FALLBACK_VALUE_DESCRIPTION: &str =
    "This is fallback value for when JSON schema could not be generated from type validation object.";

/// Placeholder schema for inputs no transformation could handle.
///
/// An object with a single `description` property holding
/// [`DEFAULT_FALLBACK_VALUE_DESCRIPTION`].
pub fn default_fallback_value() -> Schema {
    json!({ "description": DEFAULT_FALLBACK_VALUE_DESCRIPTION })
}

/// A static fallback schema, or a callback computing one from the input.
pub enum FallbackValue<I> {
    Schema(Schema),
    Callback(Box<dyn Fn(&I) -> Option<Schema> + Send + Sync>),
}

impl<I> FallbackValue<I> {
    pub fn callback<F>(callback: F) -> Self
    where
        F: Fn(&I) -> Option<Schema> + Send + Sync + 'static,
    {
        Self::Callback(Box::new(callback))
    }
}

impl<I> From<Schema> for FallbackValue<I> {
    fn from(schema: Schema) -> Self {
        Self::Schema(schema)
    }
}

impl<I> fmt::Debug for FallbackValue<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema(schema) => f.debug_tuple("Schema").field(schema).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Resolve a [`FallbackValue`] for an optional input.
///
/// - `Schema` is returned as-is, whatever the input.
/// - `Callback` with no input yields [`default_fallback_value`] without
///   calling the callback.
/// - `Callback` with an input yields the callback result, or
///   [`default_fallback_value`] when the callback returns `None`.
pub fn get_fallback_value<I>(input: Option<&I>, fallback: &FallbackValue<I>) -> Schema {
    match fallback {
        FallbackValue::Schema(schema) => schema.clone(),
        FallbackValue::Callback(callback) => input
            .and_then(|input| callback(input))
            .unwrap_or_else(default_fallback_value),
    }
}

/// Matcher calling `try_transform` when the input is a `T`.
///
/// The check is on the runtime type of the input (`Any::downcast_ref`); any
/// other input yields `None` without calling `try_transform`.
pub fn transformer_from_constructor<T, O, F>(
    try_transform: F,
) -> impl Fn(&dyn Any, bool) -> Option<O> + Send + Sync
where
    T: Any,
    F: Fn(&T, bool) -> O + Send + Sync,
{
    move |input: &dyn Any, cut_off: bool| {
        input
            .downcast_ref::<T>()
            .map(|value| try_transform(value, cut_off))
    }
}

/// Matcher calling `try_transform` when the input equals `value`.
///
/// Inputs of another runtime type never match, even if they would compare
/// equal after a conversion.
pub fn transformer_from_equality<T, O, F>(
    value: T,
    try_transform: F,
) -> impl Fn(&dyn Any, bool) -> Option<O> + Send + Sync
where
    T: Any + PartialEq + Send + Sync,
    F: Fn(&T, bool) -> O + Send + Sync,
{
    move |input: &dyn Any, cut_off: bool| {
        input
            .downcast_ref::<T>()
            .filter(|candidate| **candidate == value)
            .map(|candidate| try_transform(candidate, cut_off))
    }
}

/// Combine matchers into one, trying them in order.
///
/// Returns the first `Some` result; later matchers are not called. The list is
/// moved into the returned matcher, so it cannot change after construction.
pub fn transformer_from_many<I, O>(
    matchers: Vec<Box<dyn Fn(&I, bool) -> Option<O> + Send + Sync>>,
) -> impl Fn(&I, bool) -> Option<O> + Send + Sync
where
    I: ?Sized,
{
    move |input: &I, cut_off: bool| matchers.iter().find_map(|matcher| matcher(input, cut_off))
}
