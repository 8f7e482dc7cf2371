//! Purpose: Define the stable public Rust API boundary for typedjson.
//! Exports: Value model, predicates, codec entrypoints, file loaders, and error types.
//! Role: Public, additive-only surface; hides the internal codec and loader modules.
//! Invariants: This module is the only public path to crate functionality.
//! Invariants: Internal modules remain private and are not directly exposed.

pub use crate::core::error::{Error, ErrorKind, ParseFailureCategory};
pub use crate::core::value::{JsonArray, JsonKind, JsonObject, JsonValue, is_array, is_object};
pub use crate::json::encode::{stringify, stringify_to_writer};
pub use crate::json::parse::{parse, parse_slice};
pub use crate::load::{Encoding, LoadOptions, load, load_sync, load_sync_with, load_with};
