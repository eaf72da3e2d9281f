//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need it.

use thiserror::Error;

/// Errors produced by `mstr-core` (configuration validation and parsing).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `mstr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
