//! Information about HTTP endpoints handed to metadata builders.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::arguments::{GenericArgs, MetadataArguments};
use crate::error::MetadataError;

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Trace,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Head,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Trace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| MetadataError::UnknownHttpMethod(s.to_string()))
    }
}

/// One parameter in the URL path.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlParameterSpec<SD> {
    /// Name of the parameter.
    pub name: String,
    /// Decoder for the parameter's string value.
    pub decoder: SD,
    /// Regular expression the raw value must match.
    pub pattern: String,
}

/// One piece of a URL path spec: static text, or a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlPathSegment<SD> {
    Static(String),
    Parameter(UrlParameterSpec<SD>),
}

/// A URL path spec, in order.
///
/// The OpenAPI path `/api/do-something/{param1}/something-else/{param2}` is
/// `[Static("/api/do-something/"), Parameter(param1), Static("/something-else/"), Parameter(param2)]`.
pub type UrlParametersInfo<SD> = Vec<UrlPathSegment<SD>>;

/// The parameters of a URL path spec, in order.
pub fn url_parameters<SD>(
    segments: &[UrlPathSegment<SD>],
) -> impl Iterator<Item = &UrlParameterSpec<SD>> {
    segments.iter().filter_map(|segment| match segment {
        UrlPathSegment::Parameter(parameter) => Some(parameter),
        UrlPathSegment::Static(_) => None,
    })
}

/// Render a URL path spec as a templated path, e.g. `/users/{id}`.
pub fn url_path_template<SD>(segments: &[UrlPathSegment<SD>]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            UrlPathSegment::Static(text) => text.clone(),
            UrlPathSegment::Parameter(parameter) => format!("{{{}}}", parameter.name),
        })
        .collect()
}

/// A string-valued header or query parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct StringParameterSpec<T> {
    pub required: bool,
    /// Decoder (request side) or encoder (response side) of the value.
    pub codec: T,
}

/// String parameters by name.
pub type StringParameters<T> = BTreeMap<String, StringParameterSpec<T>>;

/// Body validators by content MIME type.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec<C> {
    pub contents: BTreeMap<String, C>,
}

/// Per-method endpoint information.
pub type MethodMap<T> = BTreeMap<HttpMethod, T>;

/// Everything known about one endpoint (URL path + HTTP method).
pub struct EndpointMetadataInformation<A, SD, SE, O, I>
where
    A: MetadataArguments,
{
    pub request_headers_spec: Option<StringParameters<SD>>,
    pub response_headers_spec: Option<StringParameters<SE>>,
    pub query_spec: Option<StringParameters<SD>>,
    pub input_spec: Option<BodySpec<I>>,
    pub output_spec: BodySpec<O>,
    /// Format-specific arguments supplied by the endpoint author.
    pub metadata_arguments: GenericArgs<A>,
}

impl<A, SD, SE, O, I> fmt::Debug for EndpointMetadataInformation<A, SD, SE, O, I>
where
    A: MetadataArguments,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointMetadataInformation")
            .field("has_request_headers", &self.request_headers_spec.is_some())
            .field("has_response_headers", &self.response_headers_spec.is_some())
            .field("has_query", &self.query_spec.is_some())
            .field(
                "input_content_types",
                &self
                    .input_spec
                    .as_ref()
                    .map(|spec| spec.contents.keys().collect::<Vec<_>>()),
            )
            .field(
                "output_content_types",
                &self.output_spec.contents.keys().collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

/// Deferred metadata of the endpoints at one URL path, completed once the URL
/// prefix they are mounted at is known.
pub type SingleEndpointResult<M> = Box<dyn Fn(&str) -> M + Send + Sync>;
