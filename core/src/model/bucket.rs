use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::model::log_entry::WorkKind;

/// Per (employee, date) accumulator used during one summarizing pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyBucket {
    pub hours_worked: f64,
    pub leave_units: f64,
}

impl DailyBucket {
    /// Adds one entry's contribution. Returns `false` for an unrecognized
    /// work type, which contributes nothing.
    pub fn add(&mut self, work: &WorkKind) -> bool {
        match work {
            WorkKind::RegularWork { hours, .. } => {
                self.hours_worked += hours;
                true
            }
            WorkKind::Leave { leave_type } => {
                if let Some(leave_type) = leave_type {
                    self.leave_units += leave_type.units();
                }
                true
            }
            WorkKind::ExtraActivity { .. } => true,
            WorkKind::Other { .. } => false,
        }
    }
}

/// All buckets of one employee, keyed by calendar day. Ordered so totals
/// are always summed in date order.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDays {
    pub days: BTreeMap<NaiveDate, DailyBucket>,
}

impl EmployeeDays {
    pub fn bucket(&mut self, date: NaiveDate) -> &mut DailyBucket {
        self.days.entry(date).or_default()
    }

    pub fn total_hours(&self) -> f64 {
        self.days.values().map(|b| b.hours_worked).sum()
    }

    pub fn total_leaves(&self) -> f64 {
        self.days.values().map(|b| b.leave_units).sum()
    }

    pub fn unique_dates(&self) -> usize {
        self.days.len()
    }
}
