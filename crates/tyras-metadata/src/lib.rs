//! # tyras-metadata
//!
//! The contract every TyRAS metadata provider (OpenAPI or another format)
//! implements.
//!
//! - [`MetadataArguments`] describes what endpoint authors pass to a format.
//! - [`MetadataProviderForEndpoints`] turns the information about the
//!   endpoints at one URL path into format-specific metadata.
//! - [`MetadataProvider`] also combines that metadata, together with the
//!   per-method state in [`MetadataForSingleEndpoint`], into the final
//!   document.
//! - [`InitialMetadataProvider`] implements [`MetadataProvider`] on top of
//!   plain callbacks and a context-dependent builder.

pub mod arguments;
pub mod endpoint;
pub mod error;
pub mod provider;

pub use arguments::{GenericArgs, JsonObject, MetadataArguments};
pub use endpoint::{
    url_parameters, url_path_template, BodySpec, EndpointMetadataInformation, HttpMethod,
    MethodMap, SingleEndpointResult, StringParameterSpec, StringParameters, UrlParameterSpec,
    UrlParametersInfo, UrlPathSegment,
};
pub use error::MetadataError;
pub use provider::{
    InitialMetadataProvider, MetadataForSingleEndpoint, MetadataProvider,
    MetadataProviderForEndpoints, ProviderEndpointInformation,
};
