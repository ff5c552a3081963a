// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Storage layer for the legacy workspace migration

mod atomic;
pub mod driver;
mod kv;
pub mod migration;
mod workspaces;

pub use driver::run_migrations;
pub use kv::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use migration::{Migration, MigrationError, MigrationRegistry};
pub use workspaces::{DirWorkspaceStore, MemoryWorkspaceStore, WorkspaceStore};
