// src/patterns/adapter/legacy.rs

/// Read-only record source.
pub trait LegacyApi {
    fn records(&self) -> &[String];
}

/// In-memory legacy store, preloaded with a few records.
#[derive(Debug, Clone)]
pub struct RecordsApi {
    records: Vec<String>,
}

impl RecordsApi {
    pub fn new() -> Self {
        Self::with_records(["foo", "bar", "baz"])
    }

    pub fn with_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: records.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for RecordsApi {
    fn default() -> Self {
        Self::new()
    }
}

impl LegacyApi for RecordsApi {
    fn records(&self) -> &[String] {
        &self.records
    }
}
