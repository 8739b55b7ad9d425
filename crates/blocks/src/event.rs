// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Helpers for building emitted payloads

use serde_json::Value;
use tfc_client::camelize_keys;
use tfc_jsonapi::{extract_data, extract_pagination, Document};

/// Flattened primary data of a document, camelized for emission. Null
/// when the document carries no data.
pub(crate) fn emitted_data(document: &Document) -> Value {
    camelize_keys(extract_data(document).unwrap_or(Value::Null))
}

/// Pagination record of a list document, camelized for emission.
pub(crate) fn emitted_pagination(document: &Document) -> Value {
    let pagination = serde_json::to_value(extract_pagination(document)).unwrap_or(Value::Null);
    camelize_keys(pagination)
}
