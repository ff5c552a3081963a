// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Legacy security schemes.
//!
//! The stored record is an OpenAPI security scheme with the client's
//! secrets mixed in. Fields are kept as a raw map so the public definition
//! can be passed through unchanged; [`SecurityScheme::kind`] reads the
//! typed view.

use super::null_default;
use crate::id::SecuritySchemeUid;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScheme {
    pub uid: SecuritySchemeUid,
    #[serde(default, deserialize_with = "null_default")]
    pub name_key: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Typed view of a scheme, carrying only the secret values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemeKind {
    ApiKey {
        value: String,
    },
    Http {
        scheme: String,
        username: String,
        password: String,
        token: String,
    },
    OAuth2 {
        flows: IndexMap<String, OAuthFlow>,
    },
    OpenIdConnect,
    Unknown(String),
}

/// Secret and client state of one configured OAuth2 flow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OAuthFlow {
    pub client_id: String,
    pub client_secret: String,
    pub token: String,
    pub redirect_uri: String,
}

impl SecurityScheme {
    /// Key that links requirements to this scheme; the UID when unset.
    pub fn name(&self) -> &str {
        if self.name_key.is_empty() {
            self.uid.as_str()
        } else {
            &self.name_key
        }
    }

    pub fn scheme_type(&self) -> &str {
        self.str_field("type")
    }

    pub fn kind(&self) -> SchemeKind {
        match self.scheme_type() {
            "apiKey" => SchemeKind::ApiKey {
                value: self.string("value"),
            },
            "http" => SchemeKind::Http {
                scheme: self.str_field("scheme").to_lowercase(),
                username: self.string("username"),
                password: self.string("password"),
                token: self.string("token"),
            },
            "oauth2" => SchemeKind::OAuth2 {
                flows: self
                    .fields
                    .get("flows")
                    .and_then(Value::as_object)
                    .map(|flows| {
                        flows
                            .iter()
                            .filter_map(|(flow_type, flow)| {
                                flow.as_object()
                                    .map(|flow| (flow_type.clone(), OAuthFlow::from_fields(flow)))
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            "openIdConnect" => SchemeKind::OpenIdConnect,
            other => SchemeKind::Unknown(other.to_string()),
        }
    }

    fn str_field(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or_default()
    }

    fn string(&self, key: &str) -> String {
        self.str_field(key).to_string()
    }
}

impl OAuthFlow {
    fn from_fields(flow: &Map<String, Value>) -> Self {
        let get = |key: &str| {
            flow.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            client_id: get("x-scalar-client-id"),
            client_secret: get("clientSecret"),
            token: get("token"),
            redirect_uri: get("x-scalar-redirect-uri"),
        }
    }
}
