use crate::model::filter::{FilterField, FilterOption, FilterState};
use crate::model::log_entry::{parse_records, LogEntry, ParsedRecords};
use crate::model::summary::UtilizationReport;
use crate::repository::LogEntryRepository;
use crate::service::{apply_filter, derive_options, summarize};
use anyhow::Result;

/// Loads entries through a repository and feeds them to the summarizer and
/// the filters. Each call reloads, so results track the current data.
pub struct ReportUseCase<'a, R: LogEntryRepository> {
    repo: &'a R,
}

impl<'a, R: LogEntryRepository> ReportUseCase<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    pub fn load(&self) -> Result<ParsedRecords> {
        let records = self.repo.list()?;
        Ok(parse_records(&records))
    }

    /// Utilization rows sorted by employee name.
    pub fn utilization(&self) -> Result<UtilizationReport> {
        let parsed = self.load()?;
        let mut report = summarize(&parsed.entries);
        report.skipped_entries += parsed.rejected.len();
        Ok(report.sorted_by_name())
    }

    pub fn options(&self, field: FilterField) -> Result<Vec<FilterOption>> {
        let parsed = self.load()?;
        Ok(derive_options(&parsed.entries, field))
    }

    /// Entries visible under `filter`, oldest first.
    pub fn entries(&self, filter: &FilterState) -> Result<Vec<LogEntry>> {
        let parsed = self.load()?;
        let mut visible = apply_filter(&parsed.entries, filter);
        visible.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(visible)
    }
}
