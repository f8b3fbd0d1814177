//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` where they
//! surface configuration problems.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
