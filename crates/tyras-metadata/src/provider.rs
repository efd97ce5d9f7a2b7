//! The contract of metadata providers, and a callback-based implementation.

use std::fmt;
use std::sync::Arc;

use crate::arguments::MetadataArguments;
use crate::endpoint::{EndpointMetadataInformation, MethodMap, SingleEndpointResult, UrlPathSegment};

/// Endpoint information as seen by provider `P`.
pub type ProviderEndpointInformation<P> = EndpointMetadataInformation<
    <P as MetadataProviderForEndpoints>::Arguments,
    <P as MetadataProviderForEndpoints>::StringDecoder,
    <P as MetadataProviderForEndpoints>::StringEncoder,
    <P as MetadataProviderForEndpoints>::OutputContents,
    <P as MetadataProviderForEndpoints>::InputContents,
>;

/// Creates metadata for the endpoint(s) behind one URL path spec.
pub trait MetadataProviderForEndpoints {
    type Arguments: MetadataArguments;
    /// Extra, provider-specific input given alongside the endpoints.
    type EndpointArg;
    type EndpointMetadata;
    type StringDecoder;
    type StringEncoder;
    type OutputContents;
    type InputContents;

    fn get_endpoints_metadata(
        &self,
        arg: Self::EndpointArg,
        url_spec: &[UrlPathSegment<Self::StringDecoder>],
        methods: &MethodMap<ProviderEndpointInformation<Self>>,
    ) -> SingleEndpointResult<Self::EndpointMetadata>;
}

impl<P> MetadataProviderForEndpoints for Arc<P>
where
    P: MetadataProviderForEndpoints + ?Sized,
{
    type Arguments = P::Arguments;
    type EndpointArg = P::EndpointArg;
    type EndpointMetadata = P::EndpointMetadata;
    type StringDecoder = P::StringDecoder;
    type StringEncoder = P::StringEncoder;
    type OutputContents = P::OutputContents;
    type InputContents = P::InputContents;

    fn get_endpoints_metadata(
        &self,
        arg: Self::EndpointArg,
        url_spec: &[UrlPathSegment<Self::StringDecoder>],
        methods: &MethodMap<ProviderEndpointInformation<Self>>,
    ) -> SingleEndpointResult<Self::EndpointMetadata> {
        (**self).get_endpoints_metadata(arg, url_spec, methods)
    }
}

/// Metadata of the endpoints behind one URL path, as handed to
/// [`MetadataProvider::create_final_metadata`].
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataForSingleEndpoint<M, S> {
    pub md: M,
    /// Per-method extra state, needed when combining the endpoints sharing
    /// this URL path pattern. Methods without state are absent.
    pub state_md: MethodMap<S>,
}

/// Creates metadata (e.g. an OpenAPI document) for a whole REST API.
pub trait MetadataProvider: MetadataProviderForEndpoints {
    type StateMetadata;
    type FinalArgs;
    type FinalMetadata;

    /// Combine metadata of several endpoints into the final metadata.
    fn create_final_metadata(
        &self,
        args: Self::FinalArgs,
        endpoints: &[MetadataForSingleEndpoint<Self::EndpointMetadata, Self::StateMetadata>],
    ) -> Self::FinalMetadata;
}

type GetBuilder<C, B> = Arc<dyn Fn(&C) -> B + Send + Sync>;
type GetFinalMetadata<C, B, S, A, F> = Arc<
    dyn Fn(
            &C,
            A,
            &[MetadataForSingleEndpoint<<B as MetadataProviderForEndpoints>::EndpointMetadata, S>],
        ) -> F
        + Send
        + Sync,
>;

/// A [`MetadataProvider`] delegating to callbacks, passing its context to them.
///
/// Endpoint metadata is created by the builder the `get_builder` callback
/// returns for the current context.
pub struct InitialMetadataProvider<C, B, S, A, F>
where
    B: MetadataProviderForEndpoints,
{
    context: C,
    get_builder: GetBuilder<C, B>,
    get_final_metadata: GetFinalMetadata<C, B, S, A, F>,
}

impl<C, B, S, A, F> InitialMetadataProvider<C, B, S, A, F>
where
    B: MetadataProviderForEndpoints,
{
    pub fn new<G, H>(context: C, get_builder: G, get_final_metadata: H) -> Self
    where
        G: Fn(&C) -> B + Send + Sync + 'static,
        H: Fn(&C, A, &[MetadataForSingleEndpoint<B::EndpointMetadata, S>]) -> F
            + Send
            + Sync
            + 'static,
    {
        Self {
            context,
            get_builder: Arc::new(get_builder),
            get_final_metadata: Arc::new(get_final_metadata),
        }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    /// A provider identical to this one, except for its context.
    pub fn with_refined_context(&self, context: C) -> Self {
        tracing::debug!("refining metadata provider context");
        Self {
            context,
            get_builder: Arc::clone(&self.get_builder),
            get_final_metadata: Arc::clone(&self.get_final_metadata),
        }
    }

    /// The builder for the current context.
    pub fn get_builder(&self) -> B {
        (self.get_builder)(&self.context)
    }
}

impl<C, B, S, A, F> MetadataProviderForEndpoints for InitialMetadataProvider<C, B, S, A, F>
where
    B: MetadataProviderForEndpoints,
{
    type Arguments = B::Arguments;
    type EndpointArg = B::EndpointArg;
    type EndpointMetadata = B::EndpointMetadata;
    type StringDecoder = B::StringDecoder;
    type StringEncoder = B::StringEncoder;
    type OutputContents = B::OutputContents;
    type InputContents = B::InputContents;

    fn get_endpoints_metadata(
        &self,
        arg: Self::EndpointArg,
        url_spec: &[UrlPathSegment<Self::StringDecoder>],
        methods: &MethodMap<ProviderEndpointInformation<Self>>,
    ) -> SingleEndpointResult<Self::EndpointMetadata> {
        self.get_builder()
            .get_endpoints_metadata(arg, url_spec, methods)
    }
}

impl<C, B, S, A, F> MetadataProvider for InitialMetadataProvider<C, B, S, A, F>
where
    B: MetadataProviderForEndpoints,
{
    type StateMetadata = S;
    type FinalArgs = A;
    type FinalMetadata = F;

    fn create_final_metadata(
        &self,
        args: A,
        endpoints: &[MetadataForSingleEndpoint<B::EndpointMetadata, S>],
    ) -> F {
        tracing::debug!(endpoints = endpoints.len(), "creating final metadata");
        (self.get_final_metadata)(&self.context, args, endpoints)
    }
}

impl<C, B, S, A, F> fmt::Debug for InitialMetadataProvider<C, B, S, A, F>
where
    C: fmt::Debug,
    B: MetadataProviderForEndpoints,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitialMetadataProvider")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
