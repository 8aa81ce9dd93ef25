//! Crate-level error type.
//!
//! Rendering never panics: unsupported variants and unhandled sub-kinds are
//! accumulated into a per-call list and joined into a single [`DeparseError::Printer`]
//! at the entry point (see `src/print/mod.rs::ErrorSink`). Only parsing and
//! parameter rewriting can fail with a single, immediately-known cause.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeparseError {
    #[error("parse error: {0}")]
    Parse(#[from] pg_query::Error),

    #[error("{0}")]
    Printer(String),

    #[error("invalid param: {0}")]
    InvalidParam(String),
}
