use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the utilization report. Field names and units are what the
/// table and CSV exporters read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub name: String,
    pub hours_worked: f64,
    pub days_worked: f64,
    pub leaves: f64,
    pub utilization_percent: f64,
}

impl EmployeeSummary {
    pub fn utilization_label(&self) -> String {
        format!("{:.2}%", self.utilization_percent)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SummaryWarning {
    /// More leave units than distinct logged days.
    NegativeDaysWorked { name: String, days_worked: f64 },
}

impl fmt::Display for SummaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryWarning::NegativeDaysWorked { name, days_worked } => write!(
                f,
                "{} has more leave than logged days (days worked: {})",
                name, days_worked
            ),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationReport {
    /// One row per employee, in no particular order.
    pub summaries: Vec<EmployeeSummary>,
    /// Entries left out because they had no employee name or date.
    pub skipped_entries: usize,
    /// Entries whose work type was not recognized.
    pub unknown_work_types: usize,
    pub warnings: Vec<SummaryWarning>,
}

impl UtilizationReport {
    pub fn sorted_by_name(mut self) -> Self {
        self.summaries.sort_by(|a, b| a.name.cmp(&b.name));
        self
    }

    pub fn find(&self, name: &str) -> Option<&EmployeeSummary> {
        self.summaries.iter().find(|s| s.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}
