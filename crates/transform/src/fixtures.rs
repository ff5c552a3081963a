// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builders for legacy snapshots used across the transformer tests.

use serde_json::Value;
use wm_core::{EntityKind, LegacyData, RecordSet};

/// Build a snapshot from `{ "<storage key>": [records...] }`.
pub(crate) fn data(tables: Value) -> LegacyData {
    let mut set = RecordSet::new();
    for kind in EntityKind::ALL {
        let Some(Value::Array(records)) = tables.get(kind.storage_key()) else {
            continue;
        };
        for record in records {
            let uid = record["uid"].as_str().unwrap().to_string();
            set.insert(kind, uid, record.clone());
        }
    }
    LegacyData::from_arrays(set.into_arrays()).unwrap()
}
