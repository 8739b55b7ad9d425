// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON:API document types and structural validation

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DocumentError;

/// Top-level JSON:API response envelope.
///
/// A document carries either primary `data` or an `errors` array, never
/// both. `included` is the side-table of fully-described resources that
/// relationship identifiers may point into.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PrimaryData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorObject>,
}

/// Primary data of a document: one resource or an ordered list of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
    One(Resource),
    Many(Vec<Resource>),
}

/// One JSON:API resource object.
///
/// The pair (`kind`, `id`) identifies a resource within one document.
/// Attribute keys arrive in the server's kebab-case form and are kept
/// verbatim; the attribute set is not statically known per resource type,
/// so attributes stay a dynamic ordered map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<IndexMap<String, Relationship>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

/// A named link from one resource to others.
///
/// `data: None` covers both an absent and an explicitly null `data`
/// member; either way the relationship is present but empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RelationshipData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

/// Relationship data: a single identifier or an ordered list of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    One(ResourceIdentifier),
    Many(Vec<ResourceIdentifier>),
}

/// Minimal `{id, type}` reference to a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl ResourceIdentifier {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }

    /// An identifier missing its id or type cannot be resolved.
    pub fn is_malformed(&self) -> bool {
        self.id.is_empty() || self.kind.is_empty()
    }
}

/// One entry of a document's `errors` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
}

/// Location of the input that caused an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

/// Validate the structure of a decoded response body and deserialize it.
///
/// Fails before any flattening is attempted when the body is not an
/// object, when none of `data`/`errors`/`meta` is present, when `errors`
/// is not an array, or when `data` and `errors` appear together. A
/// malformed document is never partially normalized.
pub fn validate_document(body: &Value) -> Result<Document, DocumentError> {
    let Some(object) = body.as_object() else {
        return Err(DocumentError::NotAnObject);
    };

    let has_data = object.get("data").is_some_and(|v| !v.is_null());
    let has_errors = object.get("errors").is_some_and(|v| !v.is_null());
    let has_meta = object.get("meta").is_some_and(|v| !v.is_null());

    if !has_data && !has_errors && !has_meta {
        return Err(DocumentError::MissingMembers);
    }
    if has_errors && !object.get("errors").is_some_and(Value::is_array) {
        return Err(DocumentError::ErrorsNotArray);
    }
    if has_data && has_errors {
        return Err(DocumentError::DataAndErrors);
    }

    serde_json::from_value(body.clone()).map_err(|e| DocumentError::Malformed(e.to_string()))
}

impl Document {
    /// Whether the document carries at least one error object.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The document's error objects, in document order.
    pub fn extract_errors(&self) -> &[ErrorObject] {
        &self.errors
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
