// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed UIDs for legacy entity records.
//!
//! Legacy records reference each other by opaque string UIDs. Each entity
//! kind gets its own newtype so a server UID cannot be looked up in the tag
//! table by accident. Values are passed through migration unchanged.

/// Define a newtype UID wrapper around `String`.
///
/// Generates `new()`, `as_str()`, `Display`, `From<String>`, `From<&str>`,
/// `PartialEq<str>`, `PartialEq<&str>`, and `Borrow<str>` implementations.
/// Serializes transparently as the inner string.
///
/// ```ignore
/// define_id! {
///     /// Doc comment for the UID type.
///     pub struct MyUid;
/// }
/// ```
#[macro_export]
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id! {
    /// UID of a legacy workspace record.
    pub struct WorkspaceUid;
}

define_id! {
    /// UID of a legacy collection (one OpenAPI document).
    pub struct CollectionUid;
}

define_id! {
    /// UID of a legacy request (one operation).
    pub struct RequestUid;
}

define_id! {
    /// UID of a legacy request example.
    pub struct ExampleUid;
}

define_id! {
    pub struct ServerUid;
}

define_id! {
    pub struct TagUid;
}

define_id! {
    pub struct SecuritySchemeUid;
}

define_id! {
    pub struct CookieUid;
}

define_id! {
    pub struct EnvironmentUid;
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
