// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

pub use anyhow::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("pattern name must not be empty")]
    InvalidName,

    #[error("pattern has no operation to run")]
    MissingOperation,

    #[error("pattern does not exist: {0:?}")]
    NotFound(String),

    /// Error reported by the pattern's own operation.
    ///
    /// Transparent: `Display` and `source()` forward to the inner error, and
    /// it can be recovered with `downcast_ref` on the wrapped [`Error`].
    /// Once a `PatternError` is itself converted into an `anyhow::Error`,
    /// downcasting finds `PatternError`; downcast to that and call
    /// [`PatternError::operation_error`] to reach the operation's error.
    #[error(transparent)]
    Operation(Error),
}

impl PatternError {
    /// The operation's own error, if this is an [`PatternError::Operation`].
    pub fn operation_error(&self) -> Option<&Error> {
        match self {
            PatternError::Operation(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
