use tabled::{Table, Tabled};
use tabled::settings::{Style, Color, Modify};
use tabled::settings::object::Rows;
use timesheet_core::{FilterField, FilterOption, LogEntry, WorkKind};
use timesheet_core::service::truncate_label;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Detail")]
    detail: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Work Done")]
    work_done: String,
}

impl EntryRow {
    fn from_entry(entry: &LogEntry) -> Self {
        let detail = match &entry.work {
            WorkKind::RegularWork { project_name, .. } => project_name.clone(),
            WorkKind::Leave { leave_type } => leave_type.map(|l| l.label().to_string()),
            WorkKind::ExtraActivity { activity_name } => activity_name.clone(),
            WorkKind::Other { .. } => None,
        };

        Self {
            date: entry.date.format("%Y-%m-%d (%a)").to_string(),
            name: entry.employee_name.clone(),
            kind: entry.category().to_string(),
            detail: detail.unwrap_or_else(|| "-".to_string()),
            hours: entry
                .hours()
                .map(|h| format!("{:.1}", h))
                .unwrap_or_else(|| "-".to_string()),
            work_done: entry
                .work_description()
                .map(|d| truncate_label(d, 40))
                .unwrap_or_default(),
        }
    }
}

pub fn show_entries(entries: &[LogEntry]) {
    if entries.is_empty() {
        println!("No entries match the current filters.");
        return;
    }

    let rows: Vec<EntryRow> = entries.iter().map(EntryRow::from_entry).collect();
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
    println!("{} entries", entries.len());
}

pub fn show_options(field: FilterField, options: &[FilterOption]) {
    if options.is_empty() {
        println!("No options for '{}' in the loaded entries.", field);
        return;
    }
    println!("\x1b[1;36m{}\x1b[0m", field);
    for option in options {
        if option.label == option.value {
            println!("  {}", option.value);
        } else {
            println!("  {}  ({})", option.label, option.value);
        }
    }
}
