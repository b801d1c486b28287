pub mod entry_filter;
pub mod filter_options;
pub mod summarizer;

pub use entry_filter::apply_filter;
pub use filter_options::{derive_all_options, derive_options, truncate_label};
pub use summarizer::{summarize, summarize_records, utilization_percent, STANDARD_WORKDAY_HOURS};
