// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Atomic JSON file persistence shared by the file-backed stores.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::StoreError;

/// Write `value` as JSON atomically (write to .tmp, sync, then rename).
///
/// Readers see either the previous file or the complete new one.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("tmp");
    {
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, value)?;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
    }

    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Read JSON from `path`.
///
/// Returns `Ok(None)` if the file doesn't exist or is corrupt. Corrupt
/// files are moved aside to a `.bak` file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    match serde_json::from_reader(reader) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            let bak_path = rotate_bak_path(path);
            warn!(
                error = %e,
                path = %path.display(),
                bak = %bak_path.display(),
                "corrupt store file, moving to .bak and starting empty",
            );
            fs::rename(path, &bak_path)?;
            Ok(None)
        }
    }
}

const MAX_BAK_FILES: u32 = 3;

/// Free the `.bak` slot for `path` by shifting older backups up one.
///
/// At most [`MAX_BAK_FILES`] backups are kept (`.bak`, `.bak.2`, `.bak.3`)
/// and the oldest is dropped. A backup that cannot be moved is logged and
/// left where it is.
pub(crate) fn rotate_bak_path(path: &Path) -> PathBuf {
    let slot = |n: u32| match n {
        1 => path.with_extension("bak"),
        n => path.with_extension(format!("bak.{n}")),
    };

    let oldest = slot(MAX_BAK_FILES);
    if oldest.exists() {
        if let Err(e) = fs::remove_file(&oldest) {
            warn!(path = %oldest.display(), error = %e, "could not drop oldest backup");
        }
    }

    for n in (1..MAX_BAK_FILES).rev() {
        let from = slot(n);
        if !from.exists() {
            continue;
        }
        let to = slot(n + 1);
        if let Err(e) = fs::rename(&from, &to) {
            warn!(from = %from.display(), to = %to.display(), error = %e, "could not rotate backup");
        }
    }

    slot(1)
}

#[cfg(test)]
#[path = "atomic_tests.rs"]
mod tests;
