use crate::model::log_entry::RawLogEntry;
use anyhow::Result;

/// Source of log entry records, as delivered by the listing API.
pub trait LogEntryRepository {
    fn list(&self) -> Result<Vec<RawLogEntry>>;
    fn append(&self, entry: RawLogEntry) -> Result<()>;
}
