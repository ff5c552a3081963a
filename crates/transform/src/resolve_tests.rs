// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use wm_core::{ServerUid, TagUid};

fn server(uid: &str, url: &str) -> Server {
    serde_json::from_value(serde_json::json!({ "uid": uid, "url": url })).unwrap()
}

#[test]
fn resolve_many_keeps_order_and_drops_dangling() {
    let servers = vec![server("a", "http://a"), server("b", "http://b")];
    let table = Table::new(&servers);

    let uids = vec![ServerUid::new("b"), ServerUid::new("missing"), ServerUid::new("a")];
    let urls: Vec<&str> = table
        .resolve_many(&uids)
        .iter()
        .map(|s| s.url.as_str())
        .collect();
    assert_eq!(urls, ["http://b", "http://a"]);
}

#[test]
fn first_record_wins_on_duplicate_uid() {
    let servers = vec![server("a", "http://first"), server("a", "http://second")];
    let table = Table::new(&servers);
    assert_eq!(table.get("a").unwrap().url, "http://first");
}

#[test]
fn plain_strings_resolve_too() {
    let tags: Vec<Tag> = Vec::new();
    let table = Table::new(&tags);
    let children = vec!["tag-1".to_string()];
    assert!(table.resolve_many(&children).is_empty());
    assert!(table.get(TagUid::new("tag-1").as_str()).is_none());
}
