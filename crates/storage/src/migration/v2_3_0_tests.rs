// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn environment_uids_become_variable_map() {
    let mut data = RecordSet::new();
    data.insert(
        EntityKind::Environment,
        "env-1",
        json!({ "uid": "env-1", "value": "{\"baseUrl\":\"http://localhost\",\"port\":3000}" }),
    );
    data.insert(
        EntityKind::Environment,
        "env-2",
        json!({ "uid": "env-2", "value": "{\"token\":\"abc\",\"baseUrl\":\"http://prod\"}" }),
    );
    data.insert(EntityKind::Environment, "broken", json!({ "uid": "broken", "value": "{" }));
    data.insert(
        EntityKind::Workspace,
        "ws",
        json!({ "uid": "ws", "environments": ["env-1", "missing", "broken", "env-2"] }),
    );

    let data = migrate(data).unwrap();
    assert_eq!(
        data.records(EntityKind::Workspace)["ws"]["environments"],
        json!({ "baseUrl": "http://prod", "token": "abc" })
    );
}

#[test]
fn http_client_default_is_added() {
    let mut data = RecordSet::new();
    data.insert(EntityKind::Workspace, "ws", json!({ "uid": "ws" }));
    data.insert(
        EntityKind::Workspace,
        "custom",
        json!({ "uid": "custom", "selectedHttpClient": { "targetKey": "node", "clientKey": "fetch" } }),
    );

    let data = migrate(data).unwrap();
    let workspaces = data.records(EntityKind::Workspace);
    assert_eq!(
        workspaces["ws"]["selectedHttpClient"],
        json!({ "targetKey": "shell", "clientKey": "curl" })
    );
    assert_eq!(workspaces["ws"]["environments"], json!({}));
    assert_eq!(workspaces["custom"]["selectedHttpClient"]["targetKey"], "node");
}

#[yare::parameterized(
    elysia = { "elysiajs", "default" },
    fastify = { "fastify", "default" },
    kept = { "moon", "moon" },
)]
fn retired_themes_are_replaced(theme: &str, expected: &str) {
    let mut data = RecordSet::new();
    data.insert(EntityKind::Workspace, "ws", json!({ "uid": "ws", "themeId": theme }));

    let data = migrate(data).unwrap();
    assert_eq!(data.records(EntityKind::Workspace)["ws"]["themeId"], expected);
}
