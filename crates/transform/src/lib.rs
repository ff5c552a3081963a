// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wm-transform: legacy records to workspaces of OpenAPI documents
//!
//! The transform is a pure function of the legacy snapshot. Dangling UID
//! references are dropped everywhere, so adding one never changes the
//! output.

mod circular;
mod document;
mod examples;
mod meta;
mod operation;
mod parameters;
mod resolve;
mod security;
mod servers;
mod tags;

#[cfg(test)]
mod fixtures;

use indexmap::IndexMap;
use resolve::Lookup;
use tracing::debug;
use wm_core::legacy::{Collection, Workspace};
use wm_core::{AuthStore, LegacyData, MigratedWorkspace, SlugSet, WorkspaceEntry};

const DEFAULT_WORKSPACE_ID: &str = "default";
const DEFAULT_WORKSPACE_NAME: &str = "Default Workspace";
const FALLBACK_WORKSPACE_NAME: &str = "Workspace";
const DEFAULT_DOCUMENT_NAME: &str = "default";

/// Out-of-band values persisted next to the legacy tables.
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    /// Persisted color mode, copied into every workspace's meta
    pub color_mode: Option<String>,
}

/// Transform a latest-version legacy snapshot into new-model workspaces.
///
/// Produces one workspace per legacy workspace. Without any, a single
/// default workspace is synthesised over every collection. A synthesised
/// workspace without collections holds one minimal `default` document.
pub fn transform_legacy_data(data: &LegacyData, options: &TransformOptions) -> Vec<MigratedWorkspace> {
    let lookup = Lookup::new(data);

    if data.workspaces.is_empty() {
        let collections: Vec<&Collection> = data.collections.iter().collect();
        let entry = build_workspace(None, &collections, data, &lookup, options);
        return vec![MigratedWorkspace {
            id: DEFAULT_WORKSPACE_ID.to_string(),
            entry: WorkspaceEntry {
                name: DEFAULT_WORKSPACE_NAME.to_string(),
                ..entry
            },
        }];
    }

    data.workspaces
        .iter()
        .map(|workspace| {
            let collections = lookup.collections.resolve_many(&workspace.collections);
            MigratedWorkspace {
                id: workspace.uid.to_string(),
                entry: build_workspace(Some(workspace), &collections, data, &lookup, options),
            }
        })
        .collect()
}

fn build_workspace(
    workspace: Option<&Workspace>,
    collections: &[&Collection],
    data: &LegacyData,
    lookup: &Lookup<'_>,
    options: &TransformOptions,
) -> WorkspaceEntry {
    let mut names = SlugSet::new();
    let mut documents = IndexMap::new();
    let mut auth: IndexMap<String, AuthStore> = IndexMap::new();

    for collection in collections {
        let name = document::claim_name(collection, &mut names);
        let built = document::build(collection, &name, lookup);
        debug!(collection = %collection.uid, document = %name, "built document");
        documents.insert(name.clone(), built.document);
        auth.insert(name, built.auth);
    }
    if workspace.is_none() && documents.is_empty() {
        debug!("no collections, adding a default document");
        documents.insert(DEFAULT_DOCUMENT_NAME.to_string(), document::minimal());
        auth.insert(DEFAULT_DOCUMENT_NAME.to_string(), AuthStore::default());
    }

    let meta = meta::meta(&meta::MetaInput {
        workspace,
        cookies: meta::cookies(workspace, lookup, &data.cookies),
        active_document: documents.keys().next().map(String::as_str),
        color_mode: options.color_mode.as_deref(),
    });

    let name = workspace
        .map(|w| w.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_WORKSPACE_NAME)
        .to_string();

    WorkspaceEntry {
        name,
        documents,
        meta,
        extensions: meta::extensions(workspace),
        auth,
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
