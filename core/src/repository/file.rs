use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::config::Config;
use crate::model::log_entry::RawLogEntry;
use crate::repository::traits::LogEntryRepository;

/// Log entries stored as a JSON array in a single file.
#[derive(Clone, Debug)]
pub struct FileLogRepository {
    file_path: PathBuf,
}

impl FileLogRepository {
    /// Opens the entries file under the configured data directory, creating
    /// the directory and an empty array on first use.
    pub fn new(config: &Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir).with_context(|| {
            format!("Could not create data directory {}", config.data_dir.display())
        })?;
        let path = config.entries_path();

        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<RawLogEntry>::new())?;
            writer.flush()?;
            debug!(path = %path.display(), "initialized entries file");
        }

        Ok(FileLogRepository { file_path: path })
    }

    /// Uses an existing export file as is.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(anyhow!("Entries file {} does not exist", path.display()));
        }
        Ok(FileLogRepository {
            file_path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_entries(&self) -> Result<Vec<RawLogEntry>> {
        let file = File::open(&self.file_path)
            .with_context(|| format!("Could not open {}", self.file_path.display()))?;
        let reader = BufReader::new(file);
        let entries: Vec<RawLogEntry> = serde_json::from_reader(reader)
            .with_context(|| format!("Could not parse {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), count = entries.len(), "loaded log entries");
        Ok(entries)
    }

    fn write_entries(&self, entries: &[RawLogEntry]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.flush()?;
        Ok(())
    }
}

impl LogEntryRepository for FileLogRepository {
    fn list(&self) -> Result<Vec<RawLogEntry>> {
        self.read_entries()
    }

    fn append(&self, entry: RawLogEntry) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.push(entry);
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_config() -> Config {
        let dir = std::env::temp_dir().join(format!("timesheet-test-{}", Uuid::new_v4()));
        Config::resolve(Some(dir)).unwrap()
    }

    #[test]
    fn test_new_initializes_empty_file() {
        let config = temp_config();
        let repo = FileLogRepository::new(&config).unwrap();
        assert!(repo.path().exists());
        assert!(repo.list().unwrap().is_empty());
        fs::remove_dir_all(&config.data_dir).unwrap();
    }

    #[test]
    fn test_append_then_list() {
        let config = temp_config();
        let repo = FileLogRepository::new(&config).unwrap();
        let entry = RawLogEntry {
            employee_name: Some("Asha".to_string()),
            date: Some("2024-01-01".to_string()),
            work_type: Some("Regular Work".to_string()),
            hours: Some(4.0),
            ..Default::default()
        };
        repo.append(entry.clone()).unwrap();

        let reopened = FileLogRepository::open(&config.entries_path()).unwrap();
        assert_eq!(reopened.list().unwrap(), vec![entry]);
        fs::remove_dir_all(&config.data_dir).unwrap();
    }

    #[test]
    fn test_open_missing_file_fails() {
        let config = temp_config();
        assert!(FileLogRepository::open(&config.entries_path()).is_err());
    }
}
