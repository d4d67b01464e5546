// src/patterns/adapter/modern.rs

use std::collections::BTreeMap;

use super::{AdapterError, Result};

/// Keyed entry store that accepts writes.
pub trait ModernApi {
    fn entries(&self) -> &BTreeMap<String, String>;
    fn add_entry(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory modern store, starts empty.
#[derive(Debug, Clone, Default)]
pub struct EntriesApi {
    entries: BTreeMap<String, String>,
}

impl EntriesApi {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ModernApi for EntriesApi {
    fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    fn add_entry(&mut self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() || value.is_empty() {
            return Err(AdapterError::EmptyEntry);
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
