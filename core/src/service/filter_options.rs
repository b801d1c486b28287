use std::collections::{HashMap, HashSet};

use crate::model::filter::{FilterField, FilterOption};
use crate::model::log_entry::{LogEntry, WorkKind, EXTRA_ACTIVITY, LEAVE, REGULAR_WORK};

/// Longest work description shown in a menu before it gets cut.
pub const WORK_DONE_LABEL_CHARS: usize = 30;

// Keeps first-seen order and drops repeated values.
#[derive(Default)]
struct OptionSet {
    options: Vec<FilterOption>,
    seen: HashSet<String>,
}

impl OptionSet {
    fn push(&mut self, label: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        if self.seen.insert(value.to_string()) {
            self.options.push(FilterOption::new(label, value));
        }
    }

    fn push_value(&mut self, value: &str) {
        self.push(value, value);
    }
}

/// Builds the menu for one field from the entries currently loaded.
pub fn derive_options(entries: &[LogEntry], field: FilterField) -> Vec<FilterOption> {
    let mut set = OptionSet::default();

    for entry in entries {
        match field {
            FilterField::Name => set.push_value(&entry.employee_name),
            FilterField::Project => {
                if let Some(project) = entry.project_name() {
                    set.push_value(project);
                }
            }
            FilterField::WorkDone => {
                if let Some(text) = entry.work_description() {
                    set.push(&truncate_label(text, WORK_DONE_LABEL_CHARS), text);
                }
            }
            FilterField::Leave => {
                if entry.is_leave() {
                    set.push("Leave", "true");
                } else {
                    set.push("Not Leave", "false");
                }
            }
            FilterField::ExtraActivity => {
                if let Some(activity) = entry.activity_name() {
                    set.push_value(activity);
                }
            }
            FilterField::Description => push_description(&mut set, entry),
        }
    }

    set.options
}

/// Menus for every field, in one call.
pub fn derive_all_options(entries: &[LogEntry]) -> HashMap<FilterField, Vec<FilterOption>> {
    FilterField::ALL
        .into_iter()
        .map(|field| (field, derive_options(entries, field)))
        .collect()
}

// Category label first, then the detail that belongs to that category.
fn push_description(set: &mut OptionSet, entry: &LogEntry) {
    match &entry.work {
        WorkKind::Leave { leave_type } => {
            set.push_value(LEAVE);
            if let Some(leave_type) = leave_type {
                set.push_value(leave_type.label());
            }
        }
        WorkKind::ExtraActivity { activity_name } => {
            set.push_value(EXTRA_ACTIVITY);
            if let Some(activity) = activity_name {
                set.push_value(activity);
            }
        }
        WorkKind::RegularWork { project_name, .. } => {
            set.push_value(REGULAR_WORK);
            if let Some(project) = project_name {
                set.push_value(project);
            }
        }
        WorkKind::Other { label } => set.push_value(label),
    }
}

pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
