//! Wellbeing log store.
//!
//! Log entries are appended to a JSONL (JSON Lines) file with file locking
//! to ensure safe concurrent access.

use crate::{Result, WellbeingLog};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Log sink trait for persisting wellbeing entries
pub trait LogSink {
    fn append(&mut self, log: &WellbeingLog) -> Result<()>;
}

/// Read access to the most recent wellbeing entry
pub trait WellbeingSource {
    fn latest_log(&self) -> Result<Option<WellbeingLog>>;
}

/// A source with no data, for callers that skip wellbeing input
pub struct NoWellbeingData;

impl WellbeingSource for NoWellbeingData {
    fn latest_log(&self) -> Result<Option<WellbeingLog>> {
        Ok(None)
    }
}

/// JSONL-based log store with file locking
pub struct JsonlLogStore {
    path: PathBuf,
}

impl JsonlLogStore {
    /// Create a new JSONL store for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// All entries in append order
    pub fn read_all(&self) -> Result<Vec<WellbeingLog>> {
        read_logs(&self.path)
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl LogSink for JsonlLogStore {
    fn append(&mut self, log: &WellbeingLog) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(log)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        drop(writer);

        file.unlock()?;

        tracing::debug!("Appended wellbeing log {} to {:?}", log.id, self.path);
        Ok(())
    }
}

impl WellbeingSource for JsonlLogStore {
    /// The last appended entry
    fn latest_log(&self) -> Result<Option<WellbeingLog>> {
        Ok(self.read_all()?.pop())
    }
}

/// Read all wellbeing logs from a JSONL file
///
/// A missing file reads as empty. Lines that fail to parse are skipped with
/// a warning.
pub fn read_logs(path: &Path) -> Result<Vec<WellbeingLog>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut logs = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<WellbeingLog>(&line) {
            Ok(log) => logs.push(log),
            Err(e) => {
                tracing::warn!("Failed to parse wellbeing log at line {}: {}", line_num + 1, e);
            }
        }
    }

    file.unlock()?;
    tracing::debug!("Read {} wellbeing logs from {:?}", logs.len(), path);
    Ok(logs)
}
