// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wm-core: shared data model for the legacy workspace migration

pub mod id;
pub mod legacy;
pub mod record;
pub mod schema;
pub mod semver;
pub mod slug;
pub mod target;

pub use id::{
    CollectionUid, CookieUid, EnvironmentUid, ExampleUid, RequestUid, SecuritySchemeUid,
    ServerUid, TagUid, WorkspaceUid,
};
pub use legacy::{LegacyData, LegacyError};
pub use record::{EntityKind, RecordArrays, RecordSet};
pub use schema::{Node, NodeRef};
pub use semver::{less_than, Version};
pub use slug::{slugify, SlugSet};
pub use target::{AuthStore, MigratedWorkspace, OAuthFlowSecrets, SecretPayload, WorkspaceEntry};
