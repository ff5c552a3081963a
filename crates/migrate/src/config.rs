// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Migration configuration

use crate::env;
use wm_core::Version;
use wm_storage::MigrationRegistry;

/// Names of the out-of-band keys in the legacy store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Schema version the legacy tables were written at
    pub version: String,
    /// Set to `true` once the migration has completed
    pub completion_flag: String,
    /// Persisted color mode
    pub color_mode: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            version: "scalar_data_version".to_string(),
            completion_flag: "scalar_indexdb_migration_complete".to_string(),
            color_mode: "colorMode".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationConfig {
    pub keys: StorageKeys,
    /// Schema version to migrate the legacy tables up to
    pub target_version: Version,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            target_version: MigrationRegistry::new().latest(),
        }
    }
}

impl MigrationConfig {
    /// Defaults, with `WM_TARGET_VERSION` overriding the target version.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(target) = env::target_version() {
            config.target_version = target;
        }
        config
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
