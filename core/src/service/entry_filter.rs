use tracing::debug;

use crate::model::filter::FilterState;
use crate::model::log_entry::LogEntry;

/// Returns the entries that satisfy every set constraint in `state`, in
/// input order. The input slice is left untouched.
pub fn apply_filter(entries: &[LogEntry], state: &FilterState) -> Vec<LogEntry> {
    if state.is_empty() {
        return entries.to_vec();
    }

    let visible: Vec<LogEntry> = entries
        .iter()
        .filter(|entry| state.matches(entry))
        .cloned()
        .collect();

    debug!(total = entries.len(), visible = visible.len(), "applied entry filter");
    visible
}
