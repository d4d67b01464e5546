// src/operator/pattern.rs

//! A single named unit of work.

use std::fmt;

use crate::errors::{PatternError, Result};

/// Zero-argument operation wrapped by a [`Pattern`].
pub type Operation = Box<dyn Fn() -> anyhow::Result<()> + Send>;

/// Capability the registry dispatches over.
///
/// [`Pattern`] is the implementation used by the binary; anything else that
/// can report a name and run itself can be registered too.
pub trait Runnable: Send {
    /// Key under which the unit is registered.
    fn name(&self) -> &str;

    /// Whether there is anything to run. Units without an operation are
    /// rejected at registration.
    fn has_operation(&self) -> bool {
        true
    }

    /// Run the unit once.
    ///
    /// Errors from the underlying operation come back as
    /// [`PatternError::Operation`] holding the original error value.
    fn run(&self) -> Result<()>;
}

/// Named wrapper around an [`Operation`].
///
/// Construction performs no validation: a pattern with an empty name or no
/// operation can exist, but the registry refuses it and running it fails.
pub struct Pattern {
    name: String,
    operation: Option<Operation>,
}

impl Pattern {
    pub fn new<F>(name: impl Into<String>, operation: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + Send + 'static,
    {
        Self {
            name: name.into(),
            operation: Some(Box::new(operation)),
        }
    }

    /// A pattern with nothing to run.
    pub fn without_operation(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operation: None,
        }
    }
}

impl Runnable for Pattern {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_operation(&self) -> bool {
        self.operation.is_some()
    }

    fn run(&self) -> Result<()> {
        let operation = self
            .operation
            .as_ref()
            .ok_or(PatternError::MissingOperation)?;

        operation().map_err(PatternError::Operation)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("name", &self.name)
            .field("has_operation", &self.operation.is_some())
            .finish()
    }
}
