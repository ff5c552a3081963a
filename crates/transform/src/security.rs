// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Split legacy security schemes into a public definition and the
//! client-side secret payload.

use serde_json::{Map, Value};
use wm_core::legacy::{SchemeKind, SecurityScheme};
use wm_core::{OAuthFlowSecrets, SecretPayload};

/// Secret fields never written into the public definition.
const SECRET_FIELDS: [&str; 5] = ["value", "token", "username", "password", "clientSecret"];

/// Client state stripped from each OAuth2 flow definition.
const FLOW_SECRET_FIELDS: [&str; 7] = [
    "token",
    "clientSecret",
    "username",
    "password",
    "x-scalar-client-id",
    "x-scalar-redirect-uri",
    "type",
];

/// OpenAPI security scheme object without secrets.
pub(crate) fn definition(scheme: &SecurityScheme) -> Value {
    let mut out: Map<String, Value> = scheme
        .fields
        .iter()
        .filter(|(key, _)| !SECRET_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    if let Some(Value::Object(flows)) = out.get_mut("flows") {
        for flow in flows.values_mut() {
            if let Value::Object(flow) = flow {
                flow.retain(|key, _| !FLOW_SECRET_FIELDS.contains(&key.as_str()));
            }
        }
    }
    Value::Object(out)
}

/// Secret payload for the scheme, or `None` for types without secrets.
pub(crate) fn secret(scheme: &SecurityScheme) -> Option<SecretPayload> {
    match scheme.kind() {
        SchemeKind::ApiKey { value } => Some(SecretPayload::ApiKey { token: value }),
        SchemeKind::Http {
            scheme,
            username,
            password,
            token,
        } => Some(if scheme == "bearer" {
            SecretPayload::Http {
                username: String::new(),
                password: String::new(),
                token,
            }
        } else {
            SecretPayload::Http {
                username,
                password,
                token: String::new(),
            }
        }),
        SchemeKind::OAuth2 { flows } => Some(SecretPayload::OAuth2 {
            flows: flows
                .into_iter()
                .map(|(flow_type, flow)| {
                    (
                        flow_type,
                        OAuthFlowSecrets {
                            client_id: flow.client_id,
                            client_secret: flow.client_secret,
                            token: flow.token,
                            redirect_uri: flow.redirect_uri,
                        },
                    )
                })
                .collect(),
        }),
        SchemeKind::OpenIdConnect | SchemeKind::Unknown(_) => None,
    }
}

#[cfg(test)]
#[path = "security_tests.rs"]
mod tests;
