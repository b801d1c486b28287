use tabled::{Table, Tabled};
use tabled::settings::{Style, Color, Modify};
use tabled::settings::object::Rows;
use timesheet_core::UtilizationReport;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Hours Worked")]
    hours: String,
    #[tabled(rename = "Days Worked")]
    days: String,
    #[tabled(rename = "Leaves")]
    leaves: String,
    #[tabled(rename = "Utilization")]
    utilization: String,
}

pub fn show_summary(report: &UtilizationReport) {
    if report.is_empty() {
        println!("No log entries found.");
    } else {
        let rows: Vec<SummaryRow> = report
            .summaries
            .iter()
            .map(|s| SummaryRow {
                name: s.name.clone(),
                hours: format!("{:.2}", s.hours_worked),
                days: format!("{:.2}", s.days_worked),
                leaves: format!("{:.2}", s.leaves),
                utilization: s.utilization_label(),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::modern())
            .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
        println!("{}", table);
    }

    if report.skipped_entries > 0 {
        println!("Skipped {} entries without an employee name or date.", report.skipped_entries);
    }
    if report.unknown_work_types > 0 {
        println!("{} entries had an unrecognized work type.", report.unknown_work_types);
    }
    for warning in &report.warnings {
        println!("Warning: {}", warning);
    }
}
