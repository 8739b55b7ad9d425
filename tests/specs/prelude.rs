// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for specs

#![allow(dead_code)]

use serde_json::{json, Value};
use tfc_client::{Client, Config, FakeTransport};

pub const ENDPOINT: &str = "https://tfe.test/api/v2";

/// Client wired to a fake transport, scoped to the `acme` organization.
pub fn spec_client() -> (FakeTransport, Client) {
    let fake = FakeTransport::new();
    let config = Config::new("spec-token", "acme").endpoint(ENDPOINT);
    let client = Client::with_transport(config, Box::new(fake.clone()));
    (fake, client)
}

/// A workspace resource the way the server describes one.
pub fn workspace_resource(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "type": "workspaces",
        "attributes": {
            "name": name,
            "auto-apply": false,
            "terraform-version": "1.6.0",
            "execution-mode": "remote"
        }
    })
}

/// A run resource with a workspace relationship.
pub fn run_resource(id: &str, status: &str, workspace_id: &str) -> Value {
    json!({
        "id": id,
        "type": "runs",
        "attributes": { "status": status, "is-destroy": false },
        "relationships": {
            "workspace": { "data": { "id": workspace_id, "type": "workspaces" } }
        }
    })
}
