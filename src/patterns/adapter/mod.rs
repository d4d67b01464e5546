// src/patterns/adapter/mod.rs

//! Adapter example: reconcile a read-only record source with a keyed
//! read/write entry store.
//!
//! - [`legacy`] defines the read-only [`LegacyApi`] and [`RecordsApi`].
//! - [`modern`] defines the writable [`ModernApi`] and [`EntriesApi`].
//! - [`Adapter`] borrows one of each and copies records across, keying each
//!   one with a fresh UUID.

pub mod legacy;
pub mod modern;

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

pub use legacy::{LegacyApi, RecordsApi};
pub use modern::{EntriesApi, ModernApi};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AdapterError {
    #[error("no records to convert")]
    NoRecords,

    #[error("entry key and value must not be empty")]
    EmptyEntry,
}

pub type Result<T> = std::result::Result<T, AdapterError>;

pub struct Adapter<'a, L: LegacyApi, M: ModernApi> {
    legacy: &'a L,
    modern: &'a mut M,
}

impl<'a, L: LegacyApi, M: ModernApi> Adapter<'a, L, M> {
    pub fn new(legacy: &'a L, modern: &'a mut M) -> Self {
        Self { legacy, modern }
    }

    /// Copy every legacy record into the modern store.
    ///
    /// Stops at the first rejected entry; entries added before it stay.
    pub fn convert_records(&mut self) -> Result<()> {
        let records = self.legacy.records();
        if records.is_empty() {
            return Err(AdapterError::NoRecords);
        }

        for record in records {
            let key = Uuid::new_v4().to_string();
            self.modern.add_entry(&key, record)?;
        }
        debug!(count = records.len(), "converted legacy records");
        Ok(())
    }

    pub fn list_entries(&self) -> &BTreeMap<String, String> {
        self.modern.entries()
    }
}

/// Body of the `adapter` pattern.
pub fn run_adapter() -> anyhow::Result<()> {
    let legacy = RecordsApi::new();
    let mut modern = EntriesApi::new();

    let mut adapter = Adapter::new(&legacy, &mut modern);
    adapter.convert_records()?;

    for (key, value) in adapter.list_entries() {
        println!("{key} = {value}");
    }
    Ok(())
}
