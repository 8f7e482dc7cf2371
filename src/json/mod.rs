//! Purpose: JSON codec boundary between text and the `JsonValue` model.
//! Exports: `parse` (decode entrypoints) and `encode` (compact encode entrypoints).
//! Role: Single seam around serde_json so callsites never touch the codec directly.
//! Invariants: All decoding and encoding in the crate goes through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod encode;
pub(crate) mod parse;
