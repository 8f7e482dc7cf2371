//! Purpose: Typed JSON values with a thin serde_json codec and file loaders.
//! Exports: `api` (value model, codec, loaders, errors), re-exported at the crate root.
//! Role: Small library crate; all grammar work is delegated to serde_json.
//! Invariants: No global state; every call is independent and fail-fast.
//! Invariants: Errors are returned, never logged or retried.
pub mod api;
mod core;
mod json;
mod load;

pub use api::*;
