//! Purpose: Encode `JsonValue` as compact JSON text.
//! Exports: `stringify`, `stringify_to_writer`.
//! Role: Encode boundary that maps serde_json errors onto `ErrorKind::Encode`.
//! Invariants: Output has no insignificant whitespace and no trailing newline.
//! Invariants: Object members are written in insertion order.

use std::io;

use crate::core::error::{Error, ErrorKind};
use crate::core::value::JsonValue;

pub fn stringify(value: &JsonValue) -> Result<String, Error> {
    serde_json::to_string(value).map_err(encode_error)
}

pub fn stringify_to_writer<W: io::Write>(writer: W, value: &JsonValue) -> Result<(), Error> {
    serde_json::to_writer(writer, value).map_err(encode_error)
}

fn encode_error(err: serde_json::Error) -> Error {
    let message = if err.is_io() {
        "failed to write JSON text".to_string()
    } else {
        err.to_string()
    };
    Error::new(ErrorKind::Encode)
        .with_message(message)
        .with_source(err)
}
