// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for block tests

use serde_json::{json, Value};
use tfc_client::{Client, Config, FakeTransport};

/// Client wired to a fake transport.
pub(crate) fn fake_client() -> (FakeTransport, Client) {
    let fake = FakeTransport::new();
    let config = Config::new("test-token", "acme").endpoint("https://tfe.test/api/v2");
    let client = Client::with_transport(config, Box::new(fake.clone()));
    (fake, client)
}

/// Single-resource document body.
pub(crate) fn resource_doc(kind: &str, id: &str, attributes: Value) -> Value {
    json!({ "data": { "id": id, "type": kind, "attributes": attributes } })
}

/// JSON body of the most recent request.
pub(crate) fn sent_body(fake: &FakeTransport) -> Value {
    let request = fake.last_request().unwrap_or_else(|| panic!("no request sent"));
    let body = request.body.unwrap_or_else(|| panic!("request had no body"));
    serde_json::from_slice(&body).unwrap_or_else(|e| panic!("unparseable body: {e}"))
}
