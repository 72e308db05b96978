use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::world::Colony;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Writes the colony snapshot as JSON every `interval` turns, under a
/// run directory stamped at construction. An interval of 0 disables
/// snapshotting.
pub struct SnapshotWriter {
    interval: u64,
    run_dir: PathBuf,
}

impl SnapshotWriter {
    pub fn new(base_dir: &Path, interval: u64) -> Self {
        let stamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
        Self {
            interval,
            run_dir: base_dir.join(stamp),
        }
    }

    pub fn maybe_write(
        &self,
        colony: &Colony,
        scenario_name: &str,
    ) -> Result<Option<PathBuf>, SnapshotError> {
        if self.interval == 0 || colony.turn() % self.interval != 0 {
            return Ok(None);
        }
        let dir = self.run_dir.join(scenario_name);
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("turn_{:06}.json", colony.turn()));
        let json = serde_json::to_string_pretty(&colony.snapshot())?;
        fs::write(&path, json)?;
        Ok(Some(path))
    }
}
