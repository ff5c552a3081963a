// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! UID lookup tables. Every reference in the legacy model goes through
//! [`Table::resolve_many`], which drops anything that does not resolve.

use std::borrow::Borrow;
use std::collections::HashMap;
use tracing::debug;
use wm_core::legacy::{
    Collection, Cookie, Request, RequestExample, SecurityScheme, Server, Tag,
};
use wm_core::{EntityKind, LegacyData};

/// A legacy record addressable by UID.
pub(crate) trait HasUid {
    const KIND: EntityKind;
    fn uid(&self) -> &str;
}

macro_rules! has_uid {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl HasUid for $ty {
                const KIND: EntityKind = EntityKind::$kind;
                fn uid(&self) -> &str {
                    self.uid.as_str()
                }
            }
        )*
    };
}

has_uid! {
    Collection => Collection,
    Request => Request,
    RequestExample => RequestExample,
    Server => Server,
    Tag => Tag,
    SecurityScheme => SecurityScheme,
    Cookie => Cookie,
}

/// Records of one kind indexed by UID. The first record wins on duplicates.
pub(crate) struct Table<'a, T> {
    by_uid: HashMap<&'a str, &'a T>,
}

impl<'a, T: HasUid> Table<'a, T> {
    pub(crate) fn new(records: &'a [T]) -> Self {
        let mut by_uid = HashMap::with_capacity(records.len());
        for record in records {
            by_uid.entry(record.uid()).or_insert(record);
        }
        Self { by_uid }
    }

    pub(crate) fn get(&self, uid: &str) -> Option<&'a T> {
        self.by_uid.get(uid).copied()
    }

    /// Resolve `uids` in order, silently skipping dangling ones.
    pub(crate) fn resolve_many<K: Borrow<str>>(&self, uids: &[K]) -> Vec<&'a T> {
        let resolved: Vec<&'a T> = uids.iter().filter_map(|uid| self.get(uid.borrow())).collect();
        let dangling = uids.len() - resolved.len();
        if dangling > 0 {
            let kind = T::KIND;
            debug!(kind = %kind, dangling, "dropped dangling references");
        }
        resolved
    }
}

/// Lookup tables over a full legacy snapshot.
pub(crate) struct Lookup<'a> {
    pub collections: Table<'a, Collection>,
    pub requests: Table<'a, Request>,
    pub examples: Table<'a, RequestExample>,
    pub servers: Table<'a, Server>,
    pub tags: Table<'a, Tag>,
    pub schemes: Table<'a, SecurityScheme>,
    pub cookies: Table<'a, Cookie>,
}

impl<'a> Lookup<'a> {
    pub(crate) fn new(data: &'a LegacyData) -> Self {
        Self {
            collections: Table::new(&data.collections),
            requests: Table::new(&data.requests),
            examples: Table::new(&data.request_examples),
            servers: Table::new(&data.servers),
            tags: Table::new(&data.tags),
            schemes: Table::new(&data.security_schemes),
            cookies: Table::new(&data.cookies),
        }
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
