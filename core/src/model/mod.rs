pub mod bucket;
pub mod filter;
pub mod log_entry;
pub mod summary;

pub use bucket::{DailyBucket, EmployeeDays};
pub use filter::{FilterError, FilterField, FilterOption, FilterState};
pub use log_entry::{parse_records, EntryError, LeaveType, LogEntry, ParsedRecords, RawLogEntry, WorkKind};
pub use summary::{EmployeeSummary, SummaryWarning, UtilizationReport};
