mod entries;
mod summary;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use timesheet_core::{
    entry_from_input, parse_args, Config, FileLogRepository, FilterField, FilterState,
    LogEntryRepository, ReportUseCase,
};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "timesheet")]
#[command(about = "Utilization reports and filtered views over timesheet log entries", long_about = None)]
struct Cli {
    /// Directory holding log_entries.json (default: ~/.timesheet)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Read entries from this JSON export instead of the data directory
    #[arg(long, global = true)]
    file: Option<PathBuf>,
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Per-employee hours, days, leaves and utilization
    Summary,
    /// List the selectable values of a filter field
    Options {
        /// name, project, workDone, leave, extraActivity or description
        field: String,
    },
    /// Show entries matching every given filter
    Entries {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        work_done: Option<String>,
        /// true for leave records only, false to exclude them
        #[arg(long)]
        leave: Option<String>,
        #[arg(long)]
        extra_activity: Option<String>,
        /// Work type category: "Regular Work", "Leave" or "Extra Activity"
        #[arg(long)]
        description: Option<String>,
    },
    /// Add an entry (usage: add "Asha Rao" type:regular hours:8 project:Atlas date:today)
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_repository(cli: &Cli) -> Result<FileLogRepository> {
    match &cli.file {
        Some(path) => FileLogRepository::open(path),
        None => {
            let config = Config::resolve(cli.data_dir.clone())?;
            FileLogRepository::new(&config)
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let repo = open_repository(&cli)?;
    debug!(path = %repo.path().display(), "using entries file");
    let usecase = ReportUseCase::new(&repo);

    match &cli.command {
        None | Some(Commands::Summary) => {
            let report = usecase.utilization()?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                summary::show_summary(&report);
            }
        }
        Some(Commands::Options { field }) => {
            let field: FilterField = field.parse()?;
            let options = usecase.options(field)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&options)?);
            } else {
                entries::show_options(field, &options);
            }
        }
        Some(Commands::Entries {
            name,
            project,
            work_done,
            leave,
            extra_activity,
            description,
        }) => {
            let mut state = FilterState::new();
            let selections = [
                (FilterField::Name, name),
                (FilterField::Project, project),
                (FilterField::WorkDone, work_done),
                (FilterField::Leave, leave),
                (FilterField::ExtraActivity, extra_activity),
                (FilterField::Description, description),
            ];
            for (field, value) in selections {
                if let Some(value) = value {
                    state.set(field, value)?;
                }
            }

            let visible = usecase.entries(&state)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                entries::show_entries(&visible);
            }
        }
        Some(Commands::Add { args }) => {
            let parsed = parse_args(args);
            let raw = entry_from_input(&parsed, Local::now().date_naive())?;
            // Refuse anything the summarizer would skip.
            let entry = raw.parse().context("Entry is not valid")?;
            repo.append(raw)?;
            println!(
                "Entry added: {} on {} ({})",
                entry.employee_name,
                entry.date.format("%Y-%m-%d"),
                entry.category()
            );
        }
    }
    Ok(())
}
