//! Factories producing [`SupportedJsonSchemaFunctionality`].

use std::sync::Arc;

use crate::config::SchemaOptions;
use crate::functionality::{
    ContentTypeMap, ContentTypesArgs, JsonSchemaFunctionalityArgs, Schema, SchemaTransformation,
    SupportedJsonSchemaFunctionality, Transformer,
};
use crate::structure::array_to_record;

/// Create the schema functionality bundle from per-purpose transformations.
///
/// Every produced function evaluates the transformation's override first; the
/// generic `transform` runs only when there is no override or it returns
/// `None`. The resulting schema is then passed through `transform_schema`.
/// The `decoders` and `encoders` maps keep the key sets of the arguments, and
/// `get_undefined_possibility` is the very same callback.
pub fn create_json_schema_functionality_generic<TOut, SD, SE, D, E>(
    args: JsonSchemaFunctionalityArgs<TOut, SD, SE, D, E>,
) -> SupportedJsonSchemaFunctionality<TOut, SD, SE, D, E>
where
    TOut: 'static,
    SD: 'static,
    SE: 'static,
    D: 'static,
    E: 'static,
{
    let JsonSchemaFunctionalityArgs {
        transform_schema,
        string_decoder,
        string_encoder,
        decoders,
        encoders,
        get_undefined_possibility,
    } = args;

    tracing::debug!(
        decoders = decoders.len(),
        encoders = encoders.len(),
        "creating JSON schema functionality"
    );

    SupportedJsonSchemaFunctionality {
        string_decoder: override_or_transform(string_decoder, &transform_schema),
        string_encoder: override_or_transform(string_encoder, &transform_schema),
        decoders: wrap_content_types(decoders, &transform_schema),
        encoders: wrap_content_types(encoders, &transform_schema),
        get_undefined_possibility,
    }
}

/// Create the schema functionality bundle using the content types in `options`.
///
/// The single decoder (encoder) transformation of `args` is shared by every
/// request (response) content type.
pub fn create_json_schema_functionality_for_content_types<TOut, SD, SE, D, E>(
    options: &SchemaOptions,
    args: ContentTypesArgs<TOut, SD, SE, D, E>,
) -> SupportedJsonSchemaFunctionality<TOut, SD, SE, D, E>
where
    TOut: 'static,
    SD: 'static,
    SE: 'static,
    D: 'static,
    E: 'static,
{
    let ContentTypesArgs {
        transform_schema,
        string_decoder,
        string_encoder,
        decoder,
        encoder,
        get_undefined_possibility,
    } = args;

    create_json_schema_functionality_generic(JsonSchemaFunctionalityArgs {
        transform_schema,
        string_decoder,
        string_encoder,
        decoders: array_to_record(options.request_content_types.iter().cloned(), |_| {
            decoder.clone()
        }),
        encoders: array_to_record(options.response_content_types.iter().cloned(), |_| {
            encoder.clone()
        }),
        get_undefined_possibility,
    })
}

fn wrap_content_types<I, TOut>(
    transformations: ContentTypeMap<SchemaTransformation<I>>,
    transform_schema: &Arc<dyn Fn(Schema) -> TOut + Send + Sync>,
) -> ContentTypeMap<Transformer<I, TOut>>
where
    I: 'static,
    TOut: 'static,
{
    transformations
        .into_iter()
        .map(|(content_type, transformation)| {
            (
                content_type,
                override_or_transform(transformation, transform_schema),
            )
        })
        .collect()
}

fn override_or_transform<I, TOut>(
    transformation: SchemaTransformation<I>,
    transform_schema: &Arc<dyn Fn(Schema) -> TOut + Send + Sync>,
) -> Transformer<I, TOut>
where
    I: 'static,
    TOut: 'static,
{
    let SchemaTransformation {
        transform,
        override_transform,
    } = transformation;
    let transform_schema = Arc::clone(transform_schema);

    Arc::new(move |input: &I, cut_off: bool| {
        let schema = override_transform
            .as_ref()
            .and_then(|override_transform| override_transform(input, cut_off))
            .unwrap_or_else(|| transform(input, cut_off));
        transform_schema(schema)
    })
}
