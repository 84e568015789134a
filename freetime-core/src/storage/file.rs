//! Timetable records in a TOML file.

use std::path::{Path, PathBuf};

use super::{Records, Storage};
use crate::error::{ScheduleError, ScheduleResult};

/// Stores records as a flat TOML table, e.g. `MON = "09:30/10:00"`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Storage for FileStorage {
    fn read_all(&self) -> ScheduleResult<Records> {
        if !self.path.exists() {
            return Ok(Records::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| ScheduleError::StorageRead(format!("{}: {e}", self.path.display())))?;
        let table: toml::Table = toml::from_str(&content)
            .map_err(|e| ScheduleError::StorageRead(format!("{}: {e}", self.path.display())))?;

        // Non-string values are not ours; skip them.
        Ok(table
            .into_iter()
            .filter_map(|(key, value)| match value {
                toml::Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect())
    }

    fn write_all(&self, records: &Records) -> ScheduleResult<()> {
        let write_err = |e: std::io::Error| {
            ScheduleError::StorageWrite(format!("{}: {e}", self.path.display()))
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let content = toml::to_string_pretty(records)
            .map_err(|e| ScheduleError::StorageWrite(e.to_string()))?;

        let temp = self.temp_path();
        std::fs::write(&temp, content).map_err(write_err)?;
        std::fs::rename(&temp, &self.path).map_err(write_err)?;
        Ok(())
    }

    fn clear(&self) -> ScheduleResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ScheduleError::StorageWrite(format!(
                "{}: {e}",
                self.path.display()
            ))),
        }
    }
}
