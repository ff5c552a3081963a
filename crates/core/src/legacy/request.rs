// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Legacy request and request example records

use super::{coerce_string, default_true, null_default};
use crate::id::{ExampleUid, RequestUid, SecuritySchemeUid, ServerUid};
use crate::schema::NodeRef;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A legacy request: one operation plus its client-side state.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub uid: RequestUid,
    #[serde(default = "default_method", deserialize_with = "method")]
    pub method: String,
    /// Path template, a full URL, or empty
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub operation_id: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub deprecated: Option<bool>,
    #[serde(default)]
    pub security: Option<Value>,
    #[serde(default, deserialize_with = "null_default")]
    pub parameters: Vec<RequestParameter>,
    #[serde(default)]
    pub request_body: Option<NodeRef>,
    #[serde(default)]
    pub responses: Option<Value>,
    #[serde(default)]
    pub callbacks: Option<Value>,
    /// Per-operation server overrides
    #[serde(default, deserialize_with = "null_default")]
    pub servers: Vec<ServerUid>,
    #[serde(default, deserialize_with = "null_default")]
    pub examples: Vec<ExampleUid>,
    #[serde(default)]
    pub selected_example_uid: Option<ExampleUid>,
    #[serde(default)]
    pub selected_server_uid: Option<ServerUid>,
    #[serde(default, deserialize_with = "null_default")]
    pub selected_security_scheme_uids: Vec<SecurityRequirementUids>,
    #[serde(default, rename = "x-scalar-stability")]
    pub stability: Option<Value>,
    #[serde(default, rename = "x-internal")]
    pub internal: Option<Value>,
}

fn default_method() -> String {
    "get".to_string()
}

fn method<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let method = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    if method.is_empty() {
        Ok(default_method())
    } else {
        Ok(method.to_lowercase())
    }
}

/// A selected security requirement: one scheme, or several combined with AND.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecurityRequirementUids {
    Single(SecuritySchemeUid),
    All(Vec<SecuritySchemeUid>),
}

/// Where a parameter is carried on the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
}

impl ParameterLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter declared by the request's schema
#[derive(Debug, Clone, Deserialize)]
pub struct RequestParameter {
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub schema: Option<Value>,
}

/// Saved client-side values for a request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestExample {
    pub uid: ExampleUid,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default)]
    pub request_uid: Option<RequestUid>,
    #[serde(default, deserialize_with = "null_default")]
    pub body: ExampleBody,
    #[serde(default, deserialize_with = "null_default")]
    pub parameters: ExampleParameters,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExampleParameters {
    #[serde(default, deserialize_with = "null_default")]
    pub path: Vec<ExampleParameter>,
    #[serde(default, deserialize_with = "null_default")]
    pub query: Vec<ExampleParameter>,
    #[serde(default, alias = "header", deserialize_with = "null_default")]
    pub headers: Vec<ExampleParameter>,
    #[serde(default, alias = "cookie", deserialize_with = "null_default")]
    pub cookies: Vec<ExampleParameter>,
}

impl ExampleParameters {
    /// Each bucket with the location it maps to.
    pub fn buckets(&self) -> [(ParameterLocation, &[ExampleParameter]); 4] {
        [
            (ParameterLocation::Path, &self.path),
            (ParameterLocation::Query, &self.query),
            (ParameterLocation::Header, &self.headers),
            (ParameterLocation::Cookie, &self.cookies),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExampleParameter {
    #[serde(default, deserialize_with = "null_default")]
    pub key: String,
    #[serde(default, deserialize_with = "coerce_string")]
    pub value: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleBody {
    #[serde(default)]
    pub raw: Option<RawBody>,
    #[serde(default)]
    pub form_data: Option<FormDataBody>,
    #[serde(default)]
    pub binary: Option<Value>,
    #[serde(default, deserialize_with = "null_default")]
    pub active_body: ActiveBody,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActiveBody {
    #[default]
    Raw,
    FormData,
    Binary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBody {
    /// Encoding tag such as `json`, `xml`, `yaml`, `edn`, `text`
    #[serde(default, deserialize_with = "null_default")]
    pub encoding: String,
    #[serde(default, deserialize_with = "coerce_string")]
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormDataBody {
    #[serde(default, deserialize_with = "null_default")]
    pub encoding: FormEncoding,
    #[serde(default, deserialize_with = "null_default")]
    pub value: Vec<ExampleParameter>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum FormEncoding {
    #[default]
    #[serde(rename = "form-data")]
    FormData,
    #[serde(rename = "urlencoded")]
    UrlEncoded,
}
