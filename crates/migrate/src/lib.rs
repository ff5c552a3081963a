// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wm-migrate: one-time migration of legacy client data into the
//! workspace store

mod config;
pub mod env;
mod gate;
mod run;

pub use config::{MigrationConfig, StorageKeys};
pub use env::StatePaths;
pub use gate::{MigrationGate, LEGACY_KEYS};
pub use run::{migrate, MigrateError, MigrationOutcome};
