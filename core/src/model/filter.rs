use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::log_entry::LogEntry;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    #[error("unknown filter field '{0}'")]
    UnknownField(String),
    #[error("'{0}' is not a valid leave flag (expected true or false)")]
    InvalidLeaveFlag(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum FilterField {
    Name,
    Project,
    WorkDone,
    Leave,
    ExtraActivity,
    Description,
}

impl FilterField {
    pub const ALL: [FilterField; 6] = [
        FilterField::Name,
        FilterField::Project,
        FilterField::WorkDone,
        FilterField::Leave,
        FilterField::ExtraActivity,
        FilterField::Description,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FilterField::Name => "name",
            FilterField::Project => "project",
            FilterField::WorkDone => "workDone",
            FilterField::Leave => "leave",
            FilterField::ExtraActivity => "extraActivity",
            FilterField::Description => "description",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FilterField {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        FilterField::ALL
            .into_iter()
            .find(|f| f.key().to_lowercase() == normalized)
            .ok_or_else(|| FilterError::UnknownField(s.to_string()))
    }
}

/// A selectable menu entry. `value` is what the filter compares against,
/// `label` is what the menu shows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The selections of one view. Unset (or empty) fields impose no constraint;
/// all set fields must match.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub name: Option<String>,
    pub project: Option<String>,
    pub work_done: Option<String>,
    pub leave: Option<bool>,
    pub extra_activity: Option<String>,
    /// Matched against the work type category ("Regular Work", "Leave",
    /// "Extra Activity"), not the work description text. Menus label this
    /// field "Description", so the name stays.
    pub description: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field from a menu value. The value is stored exactly as given
    /// so it compares equal to the option it came from; an empty or
    /// all-whitespace value clears the field.
    pub fn set(&mut self, field: FilterField, value: &str) -> Result<(), FilterError> {
        let text = if value.trim().is_empty() {
            None
        } else {
            Some(value.to_string())
        };

        match field {
            FilterField::Name => self.name = text,
            FilterField::Project => self.project = text,
            FilterField::WorkDone => self.work_done = text,
            FilterField::ExtraActivity => self.extra_activity = text,
            FilterField::Description => self.description = text,
            FilterField::Leave => {
                self.leave = match value.trim().to_lowercase().as_str() {
                    "" => None,
                    "true" | "yes" | "1" | "leave" => Some(true),
                    "false" | "no" | "0" => Some(false),
                    _ => return Err(FilterError::InvalidLeaveFlag(value.to_string())),
                }
            }
        }
        Ok(())
    }

    pub fn with(mut self, field: FilterField, value: &str) -> Result<Self, FilterError> {
        self.set(field, value)?;
        Ok(self)
    }

    pub fn clear(&mut self, field: FilterField) {
        match field {
            FilterField::Name => self.name = None,
            FilterField::Project => self.project = None,
            FilterField::WorkDone => self.work_done = None,
            FilterField::Leave => self.leave = None,
            FilterField::ExtraActivity => self.extra_activity = None,
            FilterField::Description => self.description = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        constraint(&self.name).is_none()
            && constraint(&self.project).is_none()
            && constraint(&self.work_done).is_none()
            && self.leave.is_none()
            && constraint(&self.extra_activity).is_none()
            && constraint(&self.description).is_none()
    }

    pub fn matches(&self, entry: &LogEntry) -> bool {
        if let Some(name) = constraint(&self.name) {
            if entry.employee_name != name {
                return false;
            }
        }
        if let Some(project) = constraint(&self.project) {
            if entry.project_name() != Some(project) {
                return false;
            }
        }
        if let Some(work_done) = constraint(&self.work_done) {
            if entry.work_description() != Some(work_done) {
                return false;
            }
        }
        if let Some(leave) = self.leave {
            if entry.is_leave() != leave {
                return false;
            }
        }
        if let Some(activity) = constraint(&self.extra_activity) {
            if entry.activity_name() != Some(activity) {
                return false;
            }
        }
        if let Some(category) = constraint(&self.description) {
            if entry.category() != category {
                return false;
            }
        }
        true
    }
}

fn constraint(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::log_entry::LeaveType;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("name".parse::<FilterField>(), Ok(FilterField::Name));
        assert_eq!("work-done".parse::<FilterField>(), Ok(FilterField::WorkDone));
        assert_eq!("workDone".parse::<FilterField>(), Ok(FilterField::WorkDone));
        assert_eq!("extra_activity".parse::<FilterField>(), Ok(FilterField::ExtraActivity));
        assert_eq!(
            "salary".parse::<FilterField>(),
            Err(FilterError::UnknownField("salary".to_string()))
        );
    }

    #[test]
    fn test_set_and_clear() {
        let mut state = FilterState::new();
        state.set(FilterField::Name, "Asha").unwrap();
        state.set(FilterField::Leave, "yes").unwrap();
        assert_eq!(state.name.as_deref(), Some("Asha"));
        assert_eq!(state.leave, Some(true));
        assert!(!state.is_empty());

        state.set(FilterField::Name, "  ").unwrap();
        state.clear(FilterField::Leave);
        assert!(state.is_empty());

        assert_eq!(
            state.set(FilterField::Leave, "maybe"),
            Err(FilterError::InvalidLeaveFlag("maybe".to_string()))
        );
    }

    #[test]
    fn test_empty_strings_impose_no_constraint() {
        let state = FilterState {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(state.is_empty());
        assert!(state.matches(&LogEntry::regular("A", day(), 1.0, None)));
    }

    #[test]
    fn test_leave_flag_matches_kind() {
        let leave = LogEntry::leave("A", day(), LeaveType::FullDay);
        let work = LogEntry::regular("A", day(), 8.0, Some("X"));

        let only_leave = FilterState::new().with(FilterField::Leave, "true").unwrap();
        assert!(only_leave.matches(&leave));
        assert!(!only_leave.matches(&work));

        let no_leave = FilterState::new().with(FilterField::Leave, "false").unwrap();
        assert!(!no_leave.matches(&leave));
        assert!(no_leave.matches(&work));
    }

    #[test]
    fn test_description_matches_category_not_text() {
        let entry = LogEntry::regular("A", day(), 8.0, Some("X")).with_description("Fixed login bug");

        let by_category = FilterState::new()
            .with(FilterField::Description, "Regular Work")
            .unwrap();
        assert!(by_category.matches(&entry));

        let by_text = FilterState::new()
            .with(FilterField::Description, "Fixed login bug")
            .unwrap();
        assert!(!by_text.matches(&entry));
    }

    #[test]
    fn test_set_keeps_surrounding_whitespace() {
        let entry = LogEntry::regular("A", day(), 8.0, None).with_description("Fixed login bug ");

        let state = FilterState::new()
            .with(FilterField::WorkDone, "Fixed login bug ")
            .unwrap();
        assert_eq!(state.work_done.as_deref(), Some("Fixed login bug "));
        assert!(state.matches(&entry));
        assert_eq!(
            FilterState::new().with(FilterField::Leave, " true ").unwrap().leave,
            Some(true)
        );
    }

    #[test]
    fn test_project_does_not_match_other_kinds() {
        let activity = LogEntry::extra_activity("A", day(), "X");
        let state = FilterState::new().with(FilterField::Project, "X").unwrap();
        assert!(!state.matches(&activity));
    }
}
