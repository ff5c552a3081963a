// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Untyped legacy record sets, keyed by entity kind and then by UID.
//!
//! Versioned migrators rewrite these as raw JSON because each schema
//! version has a different shape. The typed model in [`crate::legacy`] is
//! only valid for the latest version.

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

/// The nine legacy entity tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Collection,
    Cookie,
    Environment,
    RequestExample,
    Request,
    SecurityScheme,
    Server,
    Tag,
    Workspace,
}

impl EntityKind {
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Collection,
        EntityKind::Cookie,
        EntityKind::Environment,
        EntityKind::RequestExample,
        EntityKind::Request,
        EntityKind::SecurityScheme,
        EntityKind::Server,
        EntityKind::Tag,
        EntityKind::Workspace,
    ];

    /// Name of the persisted key holding this table.
    pub fn storage_key(self) -> &'static str {
        match self {
            EntityKind::Collection => "collection",
            EntityKind::Cookie => "cookie",
            EntityKind::Environment => "environment",
            EntityKind::RequestExample => "requestExample",
            EntityKind::Request => "request",
            EntityKind::SecurityScheme => "securityScheme",
            EntityKind::Server => "server",
            EntityKind::Tag => "tag",
            EntityKind::Workspace => "workspace",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_key())
    }
}

/// Records of one kind, keyed by UID, in persisted order.
pub type Records = IndexMap<String, Value>;

/// A full snapshot of the legacy tables for one schema version.
///
/// Always holds an entry for every [`EntityKind`], so migrators never have
/// to special-case a missing table.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    tables: IndexMap<EntityKind, Records>,
}

impl Default for RecordSet {
    fn default() -> Self {
        Self {
            tables: EntityKind::ALL
                .iter()
                .map(|kind| (*kind, Records::new()))
                .collect(),
        }
    }
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self, kind: EntityKind) -> &Records {
        // Every kind is inserted by `default()` and never removed
        &self.tables[&kind]
    }

    pub fn records_mut(&mut self, kind: EntityKind) -> &mut Records {
        self.tables.entry(kind).or_default()
    }

    /// Replace the whole table for `kind`.
    pub fn set_records(&mut self, kind: EntityKind, records: Records) {
        self.tables.insert(kind, records);
    }

    /// Take the table for `kind`, leaving it empty.
    pub fn take_records(&mut self, kind: EntityKind) -> Records {
        std::mem::take(self.records_mut(kind))
    }

    /// Insert one record keyed by `uid`.
    pub fn insert(&mut self, kind: EntityKind, uid: impl Into<String>, record: Value) {
        self.records_mut(kind).insert(uid.into(), record);
    }

    pub fn kinds(&self) -> impl Iterator<Item = EntityKind> + '_ {
        self.tables.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(|t| t.is_empty())
    }

    /// Flatten every table into a plain array of its records.
    pub fn into_arrays(self) -> RecordArrays {
        RecordArrays {
            tables: self
                .tables
                .into_iter()
                .map(|(kind, records)| (kind, records.into_values().collect()))
                .collect(),
        }
    }
}

/// Flat record arrays, the final output of the migration driver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordArrays {
    tables: IndexMap<EntityKind, Vec<Value>>,
}

impl RecordArrays {
    pub fn get(&self, kind: EntityKind) -> &[Value] {
        self.tables.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn take(&mut self, kind: EntityKind) -> Vec<Value> {
        self.tables.get_mut(&kind).map(std::mem::take).unwrap_or_default()
    }

    pub fn len(&self, kind: EntityKind) -> usize {
        self.get(kind).len()
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
