//! Integration tests for `InitialMetadataProvider`, using the public API only.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use serde_json::json;
use tyras_metadata::{
    url_path_template, BodySpec, EndpointMetadataInformation, HttpMethod,
    InitialMetadataProvider, JsonObject, MetadataArguments, MetadataForSingleEndpoint,
    MetadataProvider, MetadataProviderForEndpoints, MethodMap, ProviderEndpointInformation,
    SingleEndpointResult, StringParameterSpec, UrlParameterSpec, UrlPathSegment,
};

/// Format whose endpoint arguments are a plain summary.
struct SummaryFormat;

impl MetadataArguments for SummaryFormat {
    type Args<UrlData, Query, RequestHeaders, ResponseHeaders, Body, Output> = String;
}

/// Builder which must never be asked for endpoint metadata by the provider.
#[derive(Debug)]
struct UnreachableBuilder;

impl MetadataProviderForEndpoints for UnreachableBuilder {
    type Arguments = SummaryFormat;
    type EndpointArg = ();
    type EndpointMetadata = String;
    type StringDecoder = &'static str;
    type StringEncoder = &'static str;
    type OutputContents = &'static str;
    type InputContents = &'static str;

    fn get_endpoints_metadata(
        &self,
        _arg: (),
        _url_spec: &[UrlPathSegment<&'static str>],
        _methods: &MethodMap<ProviderEndpointInformation<Self>>,
    ) -> SingleEndpointResult<String> {
        panic!("This should be never called by provider.");
    }
}

type EndpointMetadata = MetadataForSingleEndpoint<String, String>;

#[derive(Debug, Clone, PartialEq)]
struct FinalMetadataCall {
    args: JsonObject,
    endpoints: Vec<EndpointMetadata>,
}

type Provider = InitialMetadataProvider<
    String,
    Arc<UnreachableBuilder>,
    String,
    JsonObject,
    Arc<JsonObject>,
>;

struct Recorder {
    seen_contexts: Arc<Mutex<Vec<String>>>,
    seen_final_calls: Arc<Mutex<Vec<FinalMetadataCall>>>,
}

fn provider(
    context: &str,
    builder: &Arc<UnreachableBuilder>,
    final_metadata: &Arc<JsonObject>,
) -> (Provider, Recorder) {
    let seen_contexts = Arc::new(Mutex::new(Vec::new()));
    let seen_final_calls = Arc::new(Mutex::new(Vec::new()));

    let builder_contexts = Arc::clone(&seen_contexts);
    let builder = Arc::clone(builder);
    let final_contexts = Arc::clone(&seen_contexts);
    let final_calls = Arc::clone(&seen_final_calls);
    let final_metadata = Arc::clone(final_metadata);

    let provider = InitialMetadataProvider::new(
        context.to_string(),
        move |context: &String| {
            builder_contexts.lock().unwrap().push(context.clone());
            Arc::clone(&builder)
        },
        move |context: &String, args: JsonObject, endpoints: &[EndpointMetadata]| {
            final_contexts.lock().unwrap().push(context.clone());
            final_calls.lock().unwrap().push(FinalMetadataCall {
                args,
                endpoints: endpoints.to_vec(),
            });
            Arc::clone(&final_metadata)
        },
    );

    (
        provider,
        Recorder {
            seen_contexts,
            seen_final_calls,
        },
    )
}

fn users_endpoint() -> EndpointMetadata {
    MetadataForSingleEndpoint {
        md: "GET /users".to_string(),
        state_md: MethodMap::from([(HttpMethod::Get, "users-get-state".to_string())]),
    }
}

fn verify_builder_and_context(
    provider: &Provider,
    recorder: &Recorder,
    expected: &str,
    builder: &Arc<UnreachableBuilder>,
    final_metadata: &Arc<JsonObject>,
) {
    recorder.seen_contexts.lock().unwrap().clear();
    recorder.seen_final_calls.lock().unwrap().clear();

    assert!(
        Arc::ptr_eq(&provider.get_builder(), builder),
        "Provider must return the builder which is provided by the callback"
    );
    assert_eq!(
        *recorder.seen_contexts.lock().unwrap(),
        vec![expected.to_string()],
        "Provider must call callback with its context"
    );
    assert!(
        recorder.seen_final_calls.lock().unwrap().is_empty(),
        "Provider must not call final metadata callback"
    );

    recorder.seen_contexts.lock().unwrap().clear();
    let mut args = JsonObject::new();
    args.insert("title".to_string(), json!("API"));
    let endpoints = vec![users_endpoint()];

    let result = provider.create_final_metadata(args.clone(), &endpoints);

    assert!(
        Arc::ptr_eq(&result, final_metadata),
        "Provider must return the final metadata provided by the callback"
    );
    assert_eq!(
        *recorder.seen_contexts.lock().unwrap(),
        vec![expected.to_string()]
    );
    assert_eq!(
        *recorder.seen_final_calls.lock().unwrap(),
        vec![FinalMetadataCall { args, endpoints }],
        "Provider must call final metadata callback with given args"
    );
}

#[test]
fn test_initial_provider_uses_context() {
    let builder = Arc::new(UnreachableBuilder);
    let final_metadata = Arc::new(JsonObject::new());
    let (provider, recorder) = provider("arg", &builder, &final_metadata);

    verify_builder_and_context(&provider, &recorder, "arg", &builder, &final_metadata);
    assert_eq!(provider.context(), "arg");
}

#[test]
fn test_initial_provider_with_refined_context() {
    let builder = Arc::new(UnreachableBuilder);
    let final_metadata = Arc::new(JsonObject::new());
    let (provider, recorder) = provider("arg", &builder, &final_metadata);

    let refined = provider.with_refined_context("arg2".to_string());

    verify_builder_and_context(&refined, &recorder, "arg2", &builder, &final_metadata);
    // The original provider keeps its own context.
    verify_builder_and_context(&provider, &recorder, "arg", &builder, &final_metadata);
}

#[test]
fn test_final_metadata_receives_state_per_method() {
    let builder = Arc::new(UnreachableBuilder);
    let final_metadata = Arc::new(JsonObject::new());
    let (provider, recorder) = provider("arg", &builder, &final_metadata);

    let endpoints = vec![
        users_endpoint(),
        MetadataForSingleEndpoint {
            md: "POST,DELETE /users/{id}".to_string(),
            state_md: MethodMap::from([
                (HttpMethod::Post, "create-state".to_string()),
                (HttpMethod::Delete, "delete-state".to_string()),
            ]),
        },
        MetadataForSingleEndpoint {
            md: "GET /health".to_string(),
            state_md: MethodMap::new(),
        },
    ];

    provider.create_final_metadata(JsonObject::new(), &endpoints);

    let calls = recorder.seen_final_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let seen = &calls[0].endpoints;
    assert_eq!(*seen, endpoints);
    assert_eq!(
        seen[1].state_md.keys().copied().collect::<Vec<_>>(),
        vec![HttpMethod::Post, HttpMethod::Delete]
    );
    assert_eq!(seen[1].state_md[&HttpMethod::Delete], "delete-state");
    assert!(seen[2].state_md.is_empty());
}

/// Builder rendering `METHOD /prefix/path: summary (version)` lines.
struct SummaryBuilder {
    version: String,
}

impl MetadataProviderForEndpoints for SummaryBuilder {
    type Arguments = SummaryFormat;
    type EndpointArg = ();
    type EndpointMetadata = Vec<String>;
    type StringDecoder = &'static str;
    type StringEncoder = &'static str;
    type OutputContents = &'static str;
    type InputContents = &'static str;

    fn get_endpoints_metadata(
        &self,
        _arg: (),
        url_spec: &[UrlPathSegment<&'static str>],
        methods: &MethodMap<ProviderEndpointInformation<Self>>,
    ) -> SingleEndpointResult<Vec<String>> {
        let path = url_path_template(url_spec);
        let version = self.version.clone();
        let lines: Vec<(HttpMethod, String)> = methods
            .iter()
            .map(|(method, info)| (*method, info.metadata_arguments.clone()))
            .collect();
        Box::new(move |prefix: &str| {
            lines
                .iter()
                .map(|(method, summary)| {
                    format!("{method} {prefix}{path}: {summary} ({version})")
                })
                .collect()
        })
    }
}

type SummaryEndpointInformation =
    EndpointMetadataInformation<SummaryFormat, &'static str, &'static str, &'static str, &'static str>;

fn user_by_id() -> (
    Vec<UrlPathSegment<&'static str>>,
    MethodMap<SummaryEndpointInformation>,
) {
    let url_spec = vec![
        UrlPathSegment::Static("/users/".to_string()),
        UrlPathSegment::Parameter(UrlParameterSpec {
            name: "id".to_string(),
            decoder: "uuid",
            pattern: "[0-9a-f-]+".to_string(),
        }),
    ];
    let info = EndpointMetadataInformation {
        request_headers_spec: None,
        response_headers_spec: None,
        query_spec: Some(BTreeMap::from([(
            "expand".to_string(),
            StringParameterSpec {
                required: false,
                codec: "string",
            },
        )])),
        input_spec: None,
        output_spec: BodySpec {
            contents: BTreeMap::from([("application/json".to_string(), "user")]),
        },
        metadata_arguments: "Get one user".to_string(),
    };
    (url_spec, MethodMap::from([(HttpMethod::Get, info)]))
}

#[test]
fn test_builder_defers_until_prefix_known() {
    let (url_spec, methods) = user_by_id();
    let builder = Arc::new(SummaryBuilder {
        version: "v1".to_string(),
    });

    let result = builder.get_endpoints_metadata((), &url_spec, &methods);

    assert_eq!(result("/api"), vec!["GET /api/users/{id}: Get one user (v1)"]);
    assert_eq!(result(""), vec!["GET /users/{id}: Get one user (v1)"]);
}

#[test]
fn test_provider_endpoints_metadata_uses_context_builder() {
    let (url_spec, methods) = user_by_id();
    let provider: InitialMetadataProvider<String, SummaryBuilder, (), (), usize> =
        InitialMetadataProvider::new(
            "v1".to_string(),
            |version: &String| SummaryBuilder {
                version: version.clone(),
            },
            |_: &String, _: (), endpoints: &[MetadataForSingleEndpoint<Vec<String>, ()>]| {
                endpoints.len()
            },
        );

    let v1 = provider.get_endpoints_metadata((), &url_spec, &methods);
    let v2 = provider
        .with_refined_context("v2".to_string())
        .get_endpoints_metadata((), &url_spec, &methods);

    assert_eq!(v1("/api"), vec!["GET /api/users/{id}: Get one user (v1)"]);
    assert_eq!(v2("/api"), vec!["GET /api/users/{id}: Get one user (v2)"]);
}
