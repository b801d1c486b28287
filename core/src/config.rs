use anyhow::{anyhow, Result};
use std::path::PathBuf;

const DEFAULT_DIR_NAME: &str = ".timesheet";
pub const ENTRIES_FILE_NAME: &str = "log_entries.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    /// Uses `base_dir` when given, otherwise `~/.timesheet`.
    pub fn resolve(base_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(DEFAULT_DIR_NAME)
            }
        };
        Ok(Self { data_dir })
    }

    pub fn entries_path(&self) -> PathBuf {
        self.data_dir.join(ENTRIES_FILE_NAME)
    }
}
