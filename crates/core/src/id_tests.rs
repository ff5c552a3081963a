// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use indexmap::IndexMap;

#[test]
fn uid_new_and_as_str() {
    let uid = ServerUid::new("srv-1");
    assert_eq!(uid.as_str(), "srv-1");
    assert_eq!(uid.to_string(), "srv-1");
}

#[test]
fn uid_compares_with_str() {
    let uid: TagUid = "tag-1".into();
    assert_eq!(uid, "tag-1");
    assert!(uid == *"tag-1");
}

#[test]
fn uid_serializes_transparently() {
    let uid = RequestUid::new("req-1");
    assert_eq!(serde_json::to_string(&uid).unwrap(), "\"req-1\"");

    let parsed: RequestUid = serde_json::from_str("\"req-2\"").unwrap();
    assert_eq!(parsed, RequestUid::new("req-2"));
}

#[test]
fn uid_borrow_allows_str_lookup() {
    let mut map: IndexMap<CollectionUid, u32> = IndexMap::new();
    map.insert(CollectionUid::new("col-1"), 7);
    assert_eq!(map.get("col-1"), Some(&7));
    assert_eq!(map.get("col-2"), None);
}
