use std::collections::HashMap;
use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::model::log_entry::{canonical_work_type, LeaveType, RawLogEntry, LEAVE, REGULAR_WORK};
use crate::time::parse_human_date_from;

/// Keys understood by `timesheet add`.
pub const ENTRY_KEYS: [&str; 7] = ["date", "type", "hours", "project", "description", "leave", "activity"];

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub name: String,
    pub metadata: HashMap<String, String>,
}

/// Splits `add` arguments into `key:value` tokens (keys later resolved
/// against [`ENTRY_KEYS`]) and the free words, which form the employee name.
pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut name_parts = Vec::new();
    let mut metadata = HashMap::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                metadata.insert(key.to_string(), value.to_string());
                continue;
            }
        }
        name_parts.push(arg.as_str());
    }

    ParsedInput {
        name: name_parts.join(" "),
        metadata,
    }
}

/// Resolves an abbreviated entry key (`h` -> `hours`, `pro` -> `project`)
/// by exact match or unique prefix among `candidates`, usually [`ENTRY_KEYS`].
pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

/// Turns `add` arguments into a wire record. The employee name is the free
/// text; the type defaults to regular work and the date to `today`.
pub fn entry_from_input(parsed: &ParsedInput, today: NaiveDate) -> Result<RawLogEntry> {
    if parsed.name.trim().is_empty() {
        return Err(anyhow!("Employee name is required"));
    }

    let mut fields = HashMap::new();
    for (key, value) in &parsed.metadata {
        let full_key = expand_key(key, &ENTRY_KEYS)?;
        fields.insert(full_key, value.clone());
    }
    let get = |key: &str| fields.get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let date = match get("date") {
        Some(d) => parse_human_date_from(&d, today)?,
        None => today,
    };

    let work_type = match get("type") {
        Some(t) => canonical_work_type(&t).ok_or_else(|| anyhow!("Unknown work type: {}", t))?,
        None => REGULAR_WORK,
    };

    let hours = match get("hours") {
        Some(h) => {
            let hours: f64 = h.parse().map_err(|_| anyhow!("Invalid hours: {}", h))?;
            if hours < 0.0 {
                return Err(anyhow!("Hours cannot be negative: {}", h));
            }
            Some(hours)
        }
        None => None,
    };

    let leave_type = match get("leave") {
        Some(l) => Some(
            LeaveType::from_label(&l)
                .ok_or_else(|| anyhow!("Unknown leave type: {}", l))?
                .label()
                .to_string(),
        ),
        // A leave without a type counts as a full day.
        None if work_type == LEAVE => Some(LeaveType::FullDay.label().to_string()),
        None => None,
    };

    Ok(RawLogEntry {
        id: None,
        employee_name: Some(parsed.name.clone()),
        date: Some(date.format("%Y-%m-%d").to_string()),
        work_type: Some(work_type.to_string()),
        hours,
        leave_type,
        extra_activity_name: get("activity"),
        project_name: get("project"),
        work_description: get("description"),
    })
}
