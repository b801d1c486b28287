use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::time::parse_entry_date;

pub const REGULAR_WORK: &str = "Regular Work";
pub const LEAVE: &str = "Leave";
pub const EXTRA_ACTIVITY: &str = "Extra Activity";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaveType {
    HalfDay,
    FullDay,
}

impl LeaveType {
    /// Leave units counted against worked days.
    pub fn units(self) -> f64 {
        match self {
            LeaveType::HalfDay => 0.5,
            LeaveType::FullDay => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LeaveType::HalfDay => "Half Day",
            LeaveType::FullDay => "Full Day",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "halfday" | "half" => Some(LeaveType::HalfDay),
            "fullday" | "full" => Some(LeaveType::FullDay),
            _ => None,
        }
    }
}

/// What a log entry records. Each variant only carries the fields that
/// belong to it; stray values from the wire record are dropped on parse.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum WorkKind {
    RegularWork {
        hours: f64,
        project_name: Option<String>,
        work_description: Option<String>,
    },
    Leave {
        leave_type: Option<LeaveType>,
    },
    ExtraActivity {
        activity_name: Option<String>,
    },
    // Unrecognized work type, kept so the entry still occupies its date.
    Other {
        label: String,
    },
}

impl WorkKind {
    /// Category label shown in menus and matched by the description filter.
    pub fn category(&self) -> &str {
        match self {
            WorkKind::RegularWork { .. } => REGULAR_WORK,
            WorkKind::Leave { .. } => LEAVE,
            WorkKind::ExtraActivity { .. } => EXTRA_ACTIVITY,
            WorkKind::Other { label } => label,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub employee_name: String,
    pub date: NaiveDate,
    pub work: WorkKind,
}

impl LogEntry {
    pub fn new(employee_name: impl Into<String>, date: NaiveDate, work: WorkKind) -> Self {
        Self {
            employee_name: employee_name.into(),
            date,
            work,
        }
    }

    pub fn regular(
        employee_name: impl Into<String>,
        date: NaiveDate,
        hours: f64,
        project_name: Option<&str>,
    ) -> Self {
        Self::new(
            employee_name,
            date,
            WorkKind::RegularWork {
                hours,
                project_name: project_name.map(str::to_string),
                work_description: None,
            },
        )
    }

    pub fn leave(employee_name: impl Into<String>, date: NaiveDate, leave_type: LeaveType) -> Self {
        Self::new(
            employee_name,
            date,
            WorkKind::Leave {
                leave_type: Some(leave_type),
            },
        )
    }

    pub fn extra_activity(
        employee_name: impl Into<String>,
        date: NaiveDate,
        activity_name: &str,
    ) -> Self {
        Self::new(
            employee_name,
            date,
            WorkKind::ExtraActivity {
                activity_name: Some(activity_name.to_string()),
            },
        )
    }

    /// Attaches a work description. Only regular work carries one, other
    /// kinds are returned unchanged.
    pub fn with_description(mut self, description: &str) -> Self {
        if let WorkKind::RegularWork {
            work_description, ..
        } = &mut self.work
        {
            *work_description = Some(description.to_string());
        }
        self
    }

    pub fn category(&self) -> &str {
        self.work.category()
    }

    pub fn is_leave(&self) -> bool {
        matches!(self.work, WorkKind::Leave { .. })
    }

    pub fn hours(&self) -> Option<f64> {
        match &self.work {
            WorkKind::RegularWork { hours, .. } => Some(*hours),
            _ => None,
        }
    }

    pub fn project_name(&self) -> Option<&str> {
        match &self.work {
            WorkKind::RegularWork { project_name, .. } => project_name.as_deref(),
            _ => None,
        }
    }

    pub fn work_description(&self) -> Option<&str> {
        match &self.work {
            WorkKind::RegularWork {
                work_description, ..
            } => work_description.as_deref(),
            _ => None,
        }
    }

    pub fn leave_type(&self) -> Option<LeaveType> {
        match &self.work {
            WorkKind::Leave { leave_type } => *leave_type,
            _ => None,
        }
    }

    pub fn activity_name(&self) -> Option<&str> {
        match &self.work {
            WorkKind::ExtraActivity { activity_name } => activity_name.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EntryError {
    #[error("entry has no employee name")]
    MissingEmployeeName,
    #[error("entry for '{0}' has no date")]
    MissingDate(String),
    #[error("entry for '{name}' has an unreadable date '{value}'")]
    InvalidDate { name: String, value: String },
}

/// A log entry as delivered by the listing API. Every field is optional and
/// fields that do not belong to the work type may still be populated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawLogEntry {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_hours",
        skip_serializing_if = "Option::is_none"
    )]
    pub hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_activity_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_description: Option<String>,
}

impl RawLogEntry {
    pub fn parse(&self) -> Result<LogEntry, EntryError> {
        let employee_name = match self.employee_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => return Err(EntryError::MissingEmployeeName),
        };

        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => return Err(EntryError::MissingDate(employee_name)),
            Some(value) => parse_entry_date(value).ok_or_else(|| EntryError::InvalidDate {
                name: employee_name.clone(),
                value: value.to_string(),
            })?,
        };

        // Branch on the work type first, then read only that variant's fields.
        let work = match self.work_type.as_deref().and_then(canonical_work_type) {
            Some(REGULAR_WORK) => WorkKind::RegularWork {
                hours: self.hours.unwrap_or(0.0),
                project_name: non_blank(&self.project_name),
                work_description: non_blank(&self.work_description),
            },
            Some(LEAVE) => WorkKind::Leave {
                leave_type: self.leave_type.as_deref().and_then(LeaveType::from_label),
            },
            Some(EXTRA_ACTIVITY) => WorkKind::ExtraActivity {
                activity_name: non_blank(&self.extra_activity_name),
            },
            _ => WorkKind::Other {
                label: self
                    .work_type
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_default()
                    .to_string(),
            },
        };

        Ok(LogEntry {
            employee_name,
            date,
            work,
        })
    }
}

/// Result of converting a batch of wire records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRecords {
    pub entries: Vec<LogEntry>,
    pub rejected: Vec<EntryError>,
}

pub fn parse_records(records: &[RawLogEntry]) -> ParsedRecords {
    let mut parsed = ParsedRecords::default();
    for record in records {
        match record.parse() {
            Ok(entry) => parsed.entries.push(entry),
            Err(e) => {
                warn!(id = ?record.id, "skipping log entry: {}", e);
                parsed.rejected.push(e);
            }
        }
    }
    parsed
}

/// Maps a free-form work type label onto one of the known category labels.
pub fn canonical_work_type(label: &str) -> Option<&'static str> {
    match normalize_label(label).as_str() {
        "regularwork" | "regular" | "work" => Some(REGULAR_WORK),
        "leave" => Some(LEAVE),
        "extraactivity" | "extra" | "activity" => Some(EXTRA_ACTIVITY),
        _ => None,
    }
}

fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

// Forms post hours as text, the API sometimes as numbers.
fn deserialize_hours<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Hours {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Hours>::deserialize(deserializer)? {
        Some(Hours::Number(n)) => Some(n),
        Some(Hours::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_regular_work_ignores_stray_fields() {
        let raw = RawLogEntry {
            employee_name: Some("Asha".to_string()),
            date: Some("2024-01-01".to_string()),
            work_type: Some("Regular Work".to_string()),
            hours: Some(4.0),
            project_name: Some("Atlas".to_string()),
            leave_type: Some("Full Day".to_string()),
            extra_activity_name: Some("Demo".to_string()),
            ..Default::default()
        };

        let entry = raw.parse().unwrap();
        assert_eq!(entry.date, date(2024, 1, 1));
        assert_eq!(entry.hours(), Some(4.0));
        assert_eq!(entry.project_name(), Some("Atlas"));
        assert_eq!(entry.leave_type(), None);
        assert_eq!(entry.activity_name(), None);
        assert!(!entry.is_leave());
    }

    #[test]
    fn test_parse_leave_drops_hours() {
        let raw = RawLogEntry {
            employee_name: Some("Asha".to_string()),
            date: Some("2024-01-02T09:30:00.000Z".to_string()),
            work_type: Some("Leave".to_string()),
            leave_type: Some("Half Day".to_string()),
            hours: Some(8.0),
            ..Default::default()
        };

        let entry = raw.parse().unwrap();
        assert_eq!(entry.date, date(2024, 1, 2));
        assert_eq!(entry.leave_type(), Some(LeaveType::HalfDay));
        assert_eq!(entry.hours(), None);
        assert!(entry.is_leave());
    }

    #[test]
    fn test_parse_unknown_work_type_is_kept() {
        let raw = RawLogEntry {
            employee_name: Some("Asha".to_string()),
            date: Some("2024-01-03".to_string()),
            work_type: Some("Training".to_string()),
            hours: Some(3.0),
            ..Default::default()
        };

        let entry = raw.parse().unwrap();
        assert_eq!(
            entry.work,
            WorkKind::Other {
                label: "Training".to_string()
            }
        );
        assert_eq!(entry.category(), "Training");
    }

    #[test]
    fn test_parse_rejects_missing_keys() {
        let no_name = RawLogEntry {
            date: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        assert_eq!(no_name.parse(), Err(EntryError::MissingEmployeeName));

        let blank_name = RawLogEntry {
            employee_name: Some("   ".to_string()),
            date: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        assert_eq!(blank_name.parse(), Err(EntryError::MissingEmployeeName));

        let no_date = RawLogEntry {
            employee_name: Some("Asha".to_string()),
            ..Default::default()
        };
        assert_eq!(
            no_date.parse(),
            Err(EntryError::MissingDate("Asha".to_string()))
        );

        let bad_date = RawLogEntry {
            employee_name: Some("Asha".to_string()),
            date: Some("yesterday-ish".to_string()),
            ..Default::default()
        };
        assert!(matches!(bad_date.parse(), Err(EntryError::InvalidDate { .. })));
    }

    #[test]
    fn test_deserialize_wire_record() {
        let json = r#"[
            {"_id": "a1", "employeeName": "Asha", "date": "2024-01-01", "workType": "Regular Work", "hours": "4.5", "projectName": "Atlas"},
            {"employeeName": "Ravi", "date": "2024-01-01", "workType": "Extra Activity", "extraActivityName": "Demo"}
        ]"#;
        let records: Vec<RawLogEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].id.as_deref(), Some("a1"));
        assert_eq!(records[0].hours, Some(4.5));

        let parsed = parse_records(&records);
        assert_eq!(parsed.entries.len(), 2);
        assert!(parsed.rejected.is_empty());
        assert_eq!(parsed.entries[1].activity_name(), Some("Demo"));
    }

    #[test]
    fn test_canonical_labels() {
        assert_eq!(canonical_work_type("regular_work"), Some(REGULAR_WORK));
        assert_eq!(canonical_work_type("EXTRA ACTIVITY"), Some(EXTRA_ACTIVITY));
        assert_eq!(canonical_work_type("leave"), Some(LEAVE));
        assert_eq!(canonical_work_type("holiday"), None);
        assert_eq!(LeaveType::from_label("full-day"), Some(LeaveType::FullDay));
    }
}
