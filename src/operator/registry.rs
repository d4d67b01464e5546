// src/operator/registry.rs

//! Name → pattern lookup table with synchronous dispatch.

use std::collections::HashMap;
use std::fmt;

use tracing::{Span, debug, trace};

use crate::errors::{PatternError, Result};
use crate::operator::pattern::Runnable;

/// Owns registered patterns and runs them by name.
///
/// There is no internal locking. Callers that share an operator between
/// threads must wrap it in a `Mutex` themselves.
pub struct PatternOperator {
    patterns: HashMap<String, Box<dyn Runnable>>,
    /// Category labels given at construction. Informational only, never
    /// checked against `patterns`.
    kinds: Vec<String>,
    span: Span,
}

impl PatternOperator {
    /// Create an empty operator.
    ///
    /// `span` is the diagnostic sink: every operation enters it before
    /// emitting events, so logs carry whatever fields the caller attached.
    pub fn new<I, S>(kinds: I, span: Span) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: HashMap::new(),
            kinds: kinds.into_iter().map(Into::into).collect(),
            span,
        }
    }

    /// Register a pattern under its own name.
    ///
    /// An existing pattern with the same name is replaced.
    pub fn add_pattern<R>(&mut self, pattern: R) -> Result<()>
    where
        R: Runnable + 'static,
    {
        let _enter = self.span.enter();

        if pattern.name().is_empty() {
            return Err(PatternError::InvalidName);
        }
        if !pattern.has_operation() {
            return Err(PatternError::MissingOperation);
        }

        let name = pattern.name().to_string();
        if self.patterns.insert(name.clone(), Box::new(pattern)).is_some() {
            debug!(pattern = %name, "replaced existing pattern");
        } else {
            trace!(pattern = %name, "registered pattern");
        }
        Ok(())
    }

    pub fn remove_pattern(&mut self, name: &str) -> Result<()> {
        let _enter = self.span.enter();

        match self.patterns.remove(name) {
            Some(_) => {
                trace!(pattern = %name, "removed pattern");
                Ok(())
            }
            None => Err(PatternError::NotFound(name.to_string())),
        }
    }

    pub fn pattern_exists(&self, name: &str) -> bool {
        self.patterns.contains_key(name)
    }

    /// Run the pattern registered as `name` and return its outcome as is.
    pub fn run(&self, name: &str) -> Result<()> {
        let _enter = self.span.enter();

        let pattern = self
            .patterns
            .get(name)
            .ok_or_else(|| PatternError::NotFound(name.to_string()))?;

        debug!(pattern = %name, "running pattern");
        pattern.run()
    }

    pub fn kinds(&self) -> &[String] {
        &self.kinds
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.patterns.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for PatternOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternOperator")
            .field("patterns", &self.names())
            .field("kinds", &self.kinds)
            .finish()
    }
}
