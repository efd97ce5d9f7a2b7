//! JSON Pointer helpers for reporting schema locations.

use std::borrow::Cow;

/// Pointer-escape a property name or keyword (RFC 6901), so `a/b` ends up
/// as `a~1b` and `m~n` as `m~0n`. Plain names are borrowed as-is.
pub(crate) fn escape_pointer_segment(segment: &str) -> Cow<'_, str> {
    if !segment.contains(['~', '/']) {
        return Cow::Borrowed(segment);
    }
    let mut escaped = String::with_capacity(segment.len() + 2);
    for c in segment.chars() {
        match c {
            '~' => escaped.push_str("~0"),
            '/' => escaped.push_str("~1"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Build a JSON Pointer path by appending escaped segments to a parent path.
///
/// # Example
/// ```
/// use tyras_metadata_jsonschema::build_path;
/// assert_eq!(build_path("#", &["properties", "a/b"]), "#/properties/a~1b");
/// ```
pub fn build_path(parent: &str, segments: &[&str]) -> String {
    segments.iter().fold(parent.to_string(), |mut path, segment| {
        path.push('/');
        path.push_str(&escape_pointer_segment(segment));
        path
    })
}
