// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the migrate crate.

use std::path::{Path, PathBuf};
use wm_core::Version;

use crate::run::MigrateError;

/// Resolve state directory: WM_STATE_DIR > XDG_STATE_HOME/wm > ~/.local/state/wm
pub fn state_dir() -> Result<PathBuf, MigrateError> {
    if let Ok(dir) = std::env::var("WM_STATE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("wm"));
    }
    let home = std::env::var("HOME").map_err(|_| MigrateError::NoStateDir)?;
    Ok(PathBuf::from(home).join(".local/state/wm"))
}

/// Target schema version override
pub fn target_version() -> Option<Version> {
    std::env::var("WM_TARGET_VERSION")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(|s| Version::parse(&s))
}

/// Files the migration reads and writes under the state directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePaths {
    /// Root state directory (e.g. ~/.local/state/wm)
    pub state_dir: PathBuf,
    /// Legacy key/value file
    pub legacy_path: PathBuf,
    /// Destination workspace directory
    pub workspaces_path: PathBuf,
}

impl StatePaths {
    pub fn resolve() -> Result<Self, MigrateError> {
        Ok(Self::under(state_dir()?))
    }

    pub fn under(state_dir: impl AsRef<Path>) -> Self {
        let state_dir = state_dir.as_ref().to_path_buf();
        Self {
            legacy_path: state_dir.join("legacy.json"),
            workspaces_path: state_dir.join("workspaces"),
            state_dir,
        }
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
