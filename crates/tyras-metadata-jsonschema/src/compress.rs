//! Union compression: `anyOf` of `const`/`enum` branches into one `const`/`enum`.
//!
//! Validator libraries express literal unions (`"a" | "b" | "c"`) as an
//! `anyOf` of single-literal schemas. These read much better in generated
//! documentation as a single `enum`.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::config::SchemaOptions;
use crate::error::SchemaError;
use crate::schema_utils::build_path;

// ---------------------------------------------------------------------------
// Single node
// ---------------------------------------------------------------------------

/// Try to collapse an `anyOf` whose branches are all `const` or `enum` schemas.
///
/// Literals are collected in branch order (duplicates kept). One literal
/// becomes `const`, several become `enum`; a top-level `type` is preserved
/// unless it is empty (`null`, `false`, `0` or `""`), and every other
/// property of the original schema is dropped.
///
/// The input is returned unchanged (`Cow::Borrowed`) when it is not an object,
/// has no `anyOf` array, the array is empty, or any branch has neither `const`
/// nor a non-empty `enum`.
pub fn try_to_compress_union_of_maybe_enums(schema: &Value) -> Cow<'_, Value> {
    let Some(obj) = schema.as_object() else {
        return Cow::Borrowed(schema);
    };
    let Some(Value::Array(branches)) = obj.get("anyOf") else {
        return Cow::Borrowed(schema);
    };
    let Some(literals) = collect_literals(branches) else {
        return Cow::Borrowed(schema);
    };

    let mut compressed = Map::new();
    if let Some(ty) = obj.get("type").filter(|ty| is_truthy(ty)) {
        compressed.insert("type".to_string(), ty.clone());
    }
    tracing::trace!(literals = literals.len(), "compressing anyOf of literals");
    if let [single] = literals.as_slice() {
        compressed.insert("const".to_string(), single.clone());
    } else {
        compressed.insert("enum".to_string(), Value::Array(literals));
    }
    Cow::Owned(Value::Object(compressed))
}

/// Whether a `type` value is worth keeping: not `null`, `false`, `0` or `""`.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Literals of all branches, or `None` if any branch disqualifies the union.
fn collect_literals(branches: &[Value]) -> Option<Vec<Value>> {
    if branches.is_empty() {
        return None;
    }
    let mut literals = Vec::new();
    for branch in branches {
        let branch = branch.as_object()?;
        if let Some(constant) = branch.get("const") {
            literals.push(constant.clone());
        } else {
            match branch.get("enum") {
                Some(Value::Array(values)) if !values.is_empty() => {
                    literals.extend(values.iter().cloned());
                }
                _ => return None,
            }
        }
    }
    Some(literals)
}

// ---------------------------------------------------------------------------
// Whole schema
// ---------------------------------------------------------------------------

/// Compress literal unions everywhere in a schema, bottom-up.
///
/// Children are compressed before their parent, so an `anyOf` whose branches
/// were themselves literal unions collapses too. Fails when nesting exceeds
/// `options.max_depth`.
pub fn compress_unions_deep(schema: &Value, options: &SchemaOptions) -> Result<Value, SchemaError> {
    tracing::debug!(max_depth = options.max_depth, "compressing unions");
    walk(schema.clone(), "#", 0, options.max_depth)
}

fn walk(schema: Value, path: &str, depth: usize, max_depth: usize) -> Result<Value, SchemaError> {
    if depth > max_depth {
        return Err(SchemaError::RecursionDepthExceeded {
            path: path.to_string(),
            max_depth,
        });
    }

    let Value::Object(mut obj) = schema else {
        return Ok(schema);
    };

    // Map-of-schemas keywords. `dependencies` may also hold property lists,
    // which are left alone by the non-object arm of `walk`.
    for keyword in [
        "properties",
        "patternProperties",
        "definitions",
        "$defs",
        "dependencies",
    ] {
        match obj.remove(keyword) {
            Some(Value::Object(map)) => {
                let mut walked = Map::new();
                for (key, val) in map {
                    let child_path = build_path(path, &[keyword, &key]);
                    walked.insert(key, walk(val, &child_path, depth + 1, max_depth)?);
                }
                obj.insert(keyword.to_string(), Value::Object(walked));
            }
            Some(other) => {
                obj.insert(keyword.to_string(), other);
            }
            None => {}
        }
    }

    for keyword in [
        "additionalProperties",
        "additionalItems",
        "propertyNames",
        "contains",
        "not",
        "if",
        "then",
        "else",
    ] {
        if let Some(val) = obj.remove(keyword) {
            let child_path = build_path(path, &[keyword]);
            obj.insert(keyword.to_string(), walk(val, &child_path, depth + 1, max_depth)?);
        }
    }

    // `items` in both object and tuple form share the array arm.
    for keyword in ["anyOf", "oneOf", "allOf", "items"] {
        match obj.remove(keyword) {
            Some(Value::Array(variants)) => {
                let mut walked = Vec::with_capacity(variants.len());
                for (i, variant) in variants.into_iter().enumerate() {
                    let child_path = build_path(path, &[keyword, &i.to_string()]);
                    walked.push(walk(variant, &child_path, depth + 1, max_depth)?);
                }
                obj.insert(keyword.to_string(), Value::Array(walked));
            }
            Some(val) => {
                let child_path = build_path(path, &[keyword]);
                obj.insert(keyword.to_string(), walk(val, &child_path, depth + 1, max_depth)?);
            }
            None => {}
        }
    }

    let node = Value::Object(obj);
    Ok(match try_to_compress_union_of_maybe_enums(&node) {
        Cow::Borrowed(_) => node,
        Cow::Owned(compressed) => {
            tracing::debug!(path = %path, "compressed literal union");
            compressed
        }
    })
}
