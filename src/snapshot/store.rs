use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::snapshot_model::Snapshot;

pub const SNAPSHOT_FILE: &str = "analysis-results.json";
pub const DEFAULT_ANALYSIS_DIR: &str = "analysis";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(
        "Analysis results not found at {}. Run `page-testgen analyze` first.",
        path.display()
    )]
    Missing { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed snapshot {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Default snapshot location inside an analysis directory.
pub fn snapshot_path(dir: &Path) -> PathBuf {
    dir.join(SNAPSHOT_FILE)
}

/// Write `snapshot` as pretty JSON to `<dir>/analysis-results.json`,
/// creating `dir` if needed. Returns the written path.
pub fn save_snapshot(dir: &Path, snapshot: &Snapshot) -> Result<PathBuf, SnapshotError> {
    if !dir.exists() {
        debug!(dir = %dir.display(), "creating analysis directory");
    }
    std::fs::create_dir_all(dir).map_err(|source| SnapshotError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = snapshot_path(dir);
    let json = serde_json::to_string_pretty(snapshot).map_err(|source| SnapshotError::Json {
        path: path.clone(),
        source,
    })?;
    std::fs::write(&path, json).map_err(|source| SnapshotError::Io {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), elements = snapshot.elements.len(), "analysis results saved");
    Ok(path)
}

/// Read a snapshot back. A missing file is reported as [`SnapshotError::Missing`].
pub fn load_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    if !path.exists() {
        return Err(SnapshotError::Missing {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })
}
