//! Format-specific arguments attached to each endpoint.
//!
//! A metadata format (OpenAPI or another) decides what an endpoint author must
//! supply, e.g. operation summaries or per-status-code response descriptions.
//! The shape usually depends on the endpoint's data types, so it is expressed
//! as a generic associated type parametrized by them.

use serde_json::{Map, Value};

/// Describes the per-endpoint arguments of one metadata format.
///
/// # Example
/// ```
/// use tyras_metadata::MetadataArguments;
///
/// struct Summary;
///
/// struct SummaryArgs<UrlData> {
///     summary: String,
///     url_parameter_descriptions: Option<UrlData>,
/// }
///
/// impl MetadataArguments for Summary {
///     type Args<UrlData, Query, RequestHeaders, ResponseHeaders, Body, Output> = SummaryArgs<UrlData>;
/// }
///
/// let args: <Summary as MetadataArguments>::Args<(), (), (), (), (), ()> = SummaryArgs {
///     summary: "List users".to_string(),
///     url_parameter_descriptions: None,
/// };
/// assert_eq!(args.summary, "List users");
/// ```
pub trait MetadataArguments {
    type Args<UrlData, Query, RequestHeaders, ResponseHeaders, Body, Output>;
}

/// Untyped record standing in for endpoint data types not known statically.
pub type JsonObject = Map<String, Value>;

/// The arguments of format `A` with every data type left untyped.
pub type GenericArgs<A> = <A as MetadataArguments>::Args<
    JsonObject,
    JsonObject,
    JsonObject,
    JsonObject,
    JsonObject,
    JsonObject,
>;
