//! Purpose: Decode JSON text into `JsonValue` and classify codec failures.
//! Exports: `parse`, `parse_slice`, `categorize_error`, `categorize_message`.
//! Role: Decode boundary that maps serde_json errors onto `ErrorKind::Decode`.
//! Invariants: Every decode failure carries a category and, when known, a line/column.
//! Invariants: The codec error is kept as the source so its message is never lost.
//! Invariants: No nesting limit; deep documents recurse on a growable stack instead.
//! Notes: Path context is attached by the loader, not here.

use crate::core::error::{Error, ErrorKind, ParseFailureCategory};
use crate::core::value::JsonValue;
use serde::Deserialize;
use serde_json::error::Category;

/// Decodes `source` as a single JSON document.
pub fn parse(source: &str) -> Result<JsonValue, Error> {
    tracing::trace!(len = source.len(), "decoding json text");
    decode(serde_json::Deserializer::from_str(source))
}

/// Decodes raw UTF-8 bytes as a single JSON document.
pub fn parse_slice(bytes: &[u8]) -> Result<JsonValue, Error> {
    tracing::trace!(len = bytes.len(), "decoding json bytes");
    decode(serde_json::Deserializer::from_slice(bytes))
}

// Anything `stringify` can write must decode again, so the codec's recursion
// limit is lifted and serde_stacker grows the stack for deep nesting.
fn decode<'de, R: serde_json::de::Read<'de>>(
    mut deserializer: serde_json::Deserializer<R>,
) -> Result<JsonValue, Error> {
    deserializer.disable_recursion_limit();
    let value = JsonValue::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(decode_error)?;
    deserializer.end().map_err(decode_error)?;
    Ok(value)
}

pub(crate) fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match categorize_message(&err.to_string()) {
        ParseFailureCategory::Unknown => match err.classify() {
            Category::Syntax => ParseFailureCategory::Syntax,
            Category::Eof => ParseFailureCategory::Eof,
            Category::Data | Category::Io => ParseFailureCategory::Unknown,
        },
        category => category,
    }
}

pub(crate) fn categorize_message(message: &str) -> ParseFailureCategory {
    let message = message.to_ascii_lowercase();
    if message.contains("recursion limit") {
        ParseFailureCategory::DepthLimit
    } else if message.contains("number out of range") {
        ParseFailureCategory::NumericRange
    } else if message.contains("unicode code point")
        || message.contains("utf-8")
        || message.contains("utf8")
    {
        ParseFailureCategory::Utf8
    } else {
        ParseFailureCategory::Unknown
    }
}

fn decode_error(err: serde_json::Error) -> Error {
    let category = categorize_error(&err);
    let mut error = Error::new(ErrorKind::Decode)
        .with_message("invalid JSON text")
        .with_category(category);
    if err.line() > 0 {
        error = error.with_position(err.line(), err.column());
    }
    error.with_source(err)
}
