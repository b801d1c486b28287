use std::collections::HashMap;
use tracing::{debug, warn};

use crate::model::bucket::EmployeeDays;
use crate::model::log_entry::{parse_records, LogEntry, RawLogEntry};
use crate::model::summary::{EmployeeSummary, SummaryWarning, UtilizationReport};

/// Length of the standard workday used as capacity.
pub const STANDARD_WORKDAY_HOURS: f64 = 8.0;

/// Reduces log entries into one utilization row per employee.
///
/// Entries are grouped by employee and then by calendar day. A day's bucket
/// exists as soon as any entry lands on it, so unrecognized work types still
/// count towards the distinct days. Entries with a blank employee name are
/// skipped and counted in [`UtilizationReport::skipped_entries`].
pub fn summarize(entries: &[LogEntry]) -> UtilizationReport {
    let mut by_employee: HashMap<&str, EmployeeDays> = HashMap::new();
    let mut skipped_entries = 0;
    let mut unknown_work_types = 0;

    for entry in entries {
        if entry.employee_name.trim().is_empty() {
            skipped_entries += 1;
            continue;
        }

        let bucket = by_employee
            .entry(entry.employee_name.as_str())
            .or_default()
            .bucket(entry.date);

        if !bucket.add(&entry.work) {
            unknown_work_types += 1;
        }
    }

    let mut report = UtilizationReport {
        skipped_entries,
        unknown_work_types,
        ..Default::default()
    };

    for (name, days) in by_employee {
        let summary = summarize_employee(name, &days);
        if summary.days_worked < 0.0 {
            warn!(employee = name, days_worked = summary.days_worked, "leave exceeds logged days");
            report.warnings.push(SummaryWarning::NegativeDaysWorked {
                name: summary.name.clone(),
                days_worked: summary.days_worked,
            });
        }
        report.summaries.push(summary);
    }

    debug!(
        entries = entries.len(),
        employees = report.summaries.len(),
        skipped = report.skipped_entries,
        unknown = report.unknown_work_types,
        "summarized log entries"
    );
    report
}

/// Same as [`summarize`] but starts from wire records. Records that cannot
/// be grouped (no employee name or date) are counted as skipped.
pub fn summarize_records(records: &[RawLogEntry]) -> UtilizationReport {
    let parsed = parse_records(records);
    let mut report = summarize(&parsed.entries);
    report.skipped_entries += parsed.rejected.len();
    report
}

fn summarize_employee(name: &str, days: &EmployeeDays) -> EmployeeSummary {
    let hours_worked = days.total_hours();
    let leaves = days.total_leaves();
    // Not clamped: leave on days without any other entry can push this below zero.
    let days_worked = days.unique_dates() as f64 - leaves;

    EmployeeSummary {
        name: name.to_string(),
        hours_worked,
        days_worked,
        leaves,
        utilization_percent: utilization_percent(hours_worked, days_worked),
    }
}

pub fn utilization_percent(hours_worked: f64, days_worked: f64) -> f64 {
    if days_worked > 0.0 {
        round2(hours_worked / (days_worked * STANDARD_WORKDAY_HOURS) * 100.0)
    } else {
        0.0
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
