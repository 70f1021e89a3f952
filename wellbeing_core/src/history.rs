//! Program history persistence.
//!
//! Generated programs are kept in a single JSON file holding the most recent
//! entries. Older programs are evicted first once the cap is reached.
//!
//! Writers serialize on a sidecar `<history>.lock` file for the whole
//! read-modify-write cycle. The history file itself is only ever replaced by
//! rename, so readers see either the old or the new list.

use crate::{Error, GeneratedProgram, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Sink receiving each generated program
pub trait ProgramSink {
    fn append(&mut self, program: &GeneratedProgram) -> Result<()>;
}

/// Bounded list of generated programs, oldest first
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ProgramHistory {
    pub programs: Vec<GeneratedProgram>,
}

impl ProgramHistory {
    /// Add a program, dropping the oldest entries beyond `max_size`
    pub fn push(&mut self, program: GeneratedProgram, max_size: usize) {
        self.programs.push(program);
        if self.programs.len() > max_size {
            let excess = self.programs.len() - max_size;
            self.programs.drain(..excess);
            tracing::debug!("Evicted {} old programs from history", excess);
        }
    }

    pub fn latest(&self) -> Option<&GeneratedProgram> {
        self.programs.last()
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Read history from `path`
    ///
    /// A missing, unreadable or unparsable file reads as an empty history.
    pub fn load(path: &Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No program history at {:?}, starting empty", path);
                return Ok(Self::default());
            }
            Err(e) => {
                tracing::warn!("Unable to open history {:?}: {}. Starting empty.", path, e);
                return Ok(Self::default());
            }
        };

        match serde_json::from_reader::<_, ProgramHistory>(BufReader::new(file)) {
            Ok(history) => {
                tracing::debug!("Loaded {} programs from {:?}", history.len(), path);
                Ok(history)
            }
            Err(e) => {
                tracing::warn!("Discarding unreadable history {:?}: {}", path, e);
                Ok(Self::default())
            }
        }
    }

    /// Replace the file at `path` with this history
    ///
    /// The list is written to a sibling temp file, synced, then renamed into
    /// place. Callers that also read the file first must hold the writer lock
    /// (see [`FileProgramHistory`]).
    pub fn save(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut temp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            serde_json::to_writer(&mut writer, self)?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved {} programs to {:?}", self.len(), path);
        Ok(())
    }
}

/// File-backed history sink
///
/// Each append holds an exclusive lock on the sidecar lock file while it
/// loads, pushes and saves, so concurrent processes never drop each
/// other's programs.
pub struct FileProgramHistory {
    path: PathBuf,
    max_size: usize,
}

impl FileProgramHistory {
    pub fn new(path: impl Into<PathBuf>, max_size: usize) -> Self {
        Self {
            path: path.into(),
            max_size,
        }
    }

    pub fn load(&self) -> Result<ProgramHistory> {
        ProgramHistory::load(&self.path)
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".lock");
        PathBuf::from(name)
    }

    /// Open the sidecar lock file and block until it is held exclusively
    fn lock_writers(&self) -> Result<File> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let lock = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .open(&lock_path)?;
        lock.lock_exclusive()?;
        Ok(lock)
    }
}

impl ProgramSink for FileProgramHistory {
    fn append(&mut self, program: &GeneratedProgram) -> Result<()> {
        let lock = self.lock_writers()?;

        let mut history = ProgramHistory::load(&self.path)?;
        history.push(program.clone(), self.max_size);
        let saved = history.save(&self.path);

        lock.unlock()?;
        saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn create_test_program(rpe: u8) -> GeneratedProgram {
        GeneratedProgram {
            id: Uuid::new_v4(),
            rpe,
            pain_areas: vec![],
            goal: None,
            stretch: vec![],
            lfc: vec![],
            meditation: vec![],
            total_minutes: 45,
            focus_area: "Full body".into(),
            recommendations: None,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut history = ProgramHistory::default();
        for rpe in 0..15 {
            history.push(create_test_program(rpe), 10);
        }

        assert_eq!(history.len(), 10);
        assert_eq!(history.programs[0].rpe, 5);
        assert_eq!(history.latest().unwrap().rpe, 14);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("program_history.json");

        let mut history = ProgramHistory::default();
        history.push(create_test_program(5), 10);
        history.save(&path).unwrap();

        let loaded = ProgramHistory::load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.programs[0].rpe, 5);
        assert_eq!(loaded.programs[0].id, history.programs[0].id);
    }

    #[test]
    fn test_load_nonexistent_returns_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let history = ProgramHistory::load(&temp_dir.path().join("missing.json")).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_corrupted_history_returns_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("corrupted.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        let history = ProgramHistory::load(&path).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_file_sink_appends_with_cap() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("program_history.json");
        let mut sink = FileProgramHistory::new(&path, 3);

        for rpe in 1..=5 {
            sink.append(&create_test_program(rpe)).unwrap();
        }

        let history = sink.load().unwrap();
        let rpes: Vec<u8> = history.programs.iter().map(|p| p.rpe).collect();
        assert_eq!(rpes, vec![3, 4, 5]);
    }

    #[test]
    fn test_atomic_save_leaves_no_temp_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("program_history.json");

        let mut sink = FileProgramHistory::new(&path, 10);
        sink.append(&create_test_program(5)).unwrap();
        sink.append(&create_test_program(6)).unwrap();

        let extras: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != "program_history.json")
            .filter(|e| e.file_name() != "program_history.json.lock")
            .collect();
        assert!(extras.is_empty(), "Found extras: {:?}", extras);
    }

    #[test]
    fn test_parallel_appends_keep_every_program() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("program_history.json");

        let handles: Vec<_> = (0..8u8)
            .map(|worker| {
                let path = path.clone();
                std::thread::spawn(move || {
                    let mut sink = FileProgramHistory::new(&path, 100);
                    for _ in 0..5 {
                        sink.append(&create_test_program(worker)).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let history = ProgramHistory::load(&path).unwrap();
        assert_eq!(history.len(), 40);
        for worker in 0..8u8 {
            assert_eq!(history.programs.iter().filter(|p| p.rpe == worker).count(), 5);
        }
    }

    #[test]
    fn test_parallel_appends_respect_cap() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("program_history.json");

        let handles: Vec<_> = (0..4u8)
            .map(|worker| {
                let path = path.clone();
                std::thread::spawn(move || {
                    let mut sink = FileProgramHistory::new(&path, 10);
                    for _ in 0..5 {
                        sink.append(&create_test_program(worker)).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(ProgramHistory::load(&path).unwrap().len(), 10);
    }
}
