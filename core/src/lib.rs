pub mod config;
pub mod model;
pub mod repository;
pub mod input;
pub mod time;
pub mod service;
pub mod usecase;

pub use config::Config;
pub use model::{
    EmployeeSummary, FilterError, FilterField, FilterOption, FilterState, LeaveType, LogEntry,
    RawLogEntry, SummaryWarning, UtilizationReport, WorkKind,
};
pub use repository::{FileLogRepository, LogEntryRepository};
pub use input::{parse_args, expand_key, entry_from_input, ParsedInput};
pub use time::{parse_entry_date, parse_human_date_from};
pub use service::{apply_filter, derive_all_options, derive_options, summarize, summarize_records};
pub use usecase::ReportUseCase;
