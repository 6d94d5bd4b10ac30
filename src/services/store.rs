// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::PrefixState;
use crate::error::{Error, Result};

pub trait StateStore {
    fn load(&self) -> Result<PrefixState>;
    fn save(&self, state: &PrefixState) -> Result<()>;
}

impl<T: StateStore + ?Sized> StateStore for &T {
    fn load(&self) -> Result<PrefixState> {
        (**self).load()
    }

    fn save(&self, state: &PrefixState) -> Result<()> {
        (**self).save(state)
    }
}

/// JSON state file kept inside the git metadata directory.
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new(git_dir: &Path, file_name: &str) -> Self {
        Self {
            path: git_dir.join(file_name),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> Result<PrefixState> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no state file, using empty state");
            return Ok(PrefixState::empty());
        }

        let data = fs::read_to_string(&self.path).map_err(|e| Error::StateFile(e.to_string()))?;
        let state: PrefixState =
            serde_json::from_str(&data).map_err(|e| Error::StateFile(e.to_string()))?;

        debug!(path = %self.path.display(), mode = %state.mode(), "state loaded");
        Ok(state)
    }

    fn save(&self, state: &PrefixState) -> Result<()> {
        let data =
            serde_json::to_string_pretty(state).map_err(|e| Error::StateFile(e.to_string()))?;

        // Write to temp file first, then rename (atomic)
        let temp_path = self.temp_path();
        fs::write(&temp_path, data).map_err(|e| Error::StateFile(e.to_string()))?;
        fs::rename(&temp_path, &self.path).map_err(|e| Error::StateFile(e.to_string()))?;

        debug!(path = %self.path.display(), mode = %state.mode(), "state saved");
        Ok(())
    }
}
