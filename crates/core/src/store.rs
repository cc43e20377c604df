//! Best-effort local persistence of the current selection.
//!
//! One keyed slot on disk, read once at startup and overwritten on every
//! mutation. Failures never propagate to the builder: a missing or
//! malformed file degrades to the empty default, and write errors are
//! logged and dropped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::selection::Selection;

/// File name of the single persisted selection slot.
pub const SELECTION_FILE: &str = "current-build.json";

/// File-backed store for the selection state.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    path: PathBuf,
}

impl SelectionStore {
    /// Store rooted at `dir`, persisting to `dir/current-build.json`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(SELECTION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted selection, falling back to the empty default
    /// when the file is missing or unparseable. Malformed data is
    /// discarded silently (logged, never surfaced).
    pub fn load(&self) -> Selection {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Selection::default(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Failed to read saved selection");
                return Selection::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(selection) => selection,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Discarding malformed saved selection");
                Selection::default()
            }
        }
    }

    /// Persist the full selection, fire-and-forget. A failed write is
    /// logged and otherwise ignored.
    pub fn save(&self, selection: &Selection) {
        if let Err(err) = self.try_save(selection) {
            tracing::warn!(path = %self.path.display(), error = %err, "Failed to persist selection");
        }
    }

    fn try_save(&self, selection: &Selection) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(selection)?;
        fs::write(&self.path, json)
    }
}
