// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace lifecycle specs
//!
//! Create, inspect, lock, and delete a workspace end-to-end, checking
//! both the wire traffic and the emitted events.

use crate::prelude::*;
use serde_json::json;
use similar_asserts::assert_eq;
use tfc_blocks::workspaces::{
    create_workspace, delete_workspace, list_workspaces, lock_workspace, show_workspace,
    unlock_workspace, ListWorkspaces, WorkspaceSelector, WorkspaceSpec,
};
use tfc_client::Method;

#[test]
fn workspace_create_show_lock_unlock_delete() {
    let (fake, client) = spec_client();

    fake.push_json(
        201,
        &json!({ "data": workspace_resource("ws-100", "payments") }),
    );
    fake.push_json(
        200,
        &json!({ "data": workspace_resource("ws-100", "payments") }),
    );
    fake.push_json(
        200,
        &json!({ "data": workspace_resource("ws-100", "payments") }),
    );
    fake.push_json(
        200,
        &json!({ "data": workspace_resource("ws-100", "payments") }),
    );
    fake.push_response(204, Vec::new());

    let created = create_workspace(
        &client,
        WorkspaceSpec {
            name: Some("payments".to_string()),
            ..WorkspaceSpec::default()
        },
    )
    .unwrap();
    assert_eq!(created.workspace["name"], json!("payments"));

    let shown = show_workspace(&client, &WorkspaceSelector::Id("ws-100".to_string())).unwrap();
    assert_eq!(shown.workspace["terraformVersion"], json!("1.6.0"));
    assert_eq!(shown.workspace["executionMode"], json!("remote"));

    lock_workspace(&client, "ws-100", Some("maintenance window".to_string())).unwrap();
    unlock_workspace(&client, "ws-100", false).unwrap();

    let deleted =
        delete_workspace(&client, &WorkspaceSelector::Id("ws-100".to_string()), false).unwrap();
    assert!(!deleted.force);

    let urls: Vec<String> = fake.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            format!("{ENDPOINT}/organizations/acme/workspaces"),
            format!("{ENDPOINT}/workspaces/ws-100"),
            format!("{ENDPOINT}/workspaces/ws-100/actions/lock"),
            format!("{ENDPOINT}/workspaces/ws-100/actions/unlock"),
            format!("{ENDPOINT}/workspaces/ws-100/actions/safe-delete"),
        ]
    );
}

#[test]
fn workspace_with_current_run_back_reference_flattens_cleanly() {
    let (fake, client) = spec_client();

    // The workspace references its current run, which references the
    // workspace right back; the nested expansion must stub the cycle.
    fake.push_json(
        200,
        &json!({
            "data": {
                "id": "ws-100",
                "type": "workspaces",
                "attributes": { "name": "payments" },
                "relationships": {
                    "current-run": { "data": { "id": "run-7", "type": "runs" } }
                }
            },
            "included": [
                {
                    "id": "run-7",
                    "type": "runs",
                    "attributes": { "status": "applied" },
                    "relationships": {
                        "workspace": { "data": { "id": "ws-100", "type": "workspaces" } }
                    }
                }
            ]
        }),
    );

    let event = show_workspace(&client, &WorkspaceSelector::Id("ws-100".to_string())).unwrap();

    assert_eq!(
        event.workspace["currentRun"],
        json!({
            "id": "run-7",
            "type": "runs",
            "status": "applied",
            "workspace": { "id": "ws-100", "type": "workspaces" }
        })
    );
}

#[test]
fn every_request_carries_bearer_auth() {
    let (fake, client) = spec_client();
    fake.push_json(200, &json!({ "data": [] }));

    list_workspaces(&client, ListWorkspaces::default()).unwrap();

    for request in fake.requests() {
        assert!(request
            .headers
            .contains(&("Authorization".to_string(), "Bearer spec-token".to_string())));
        assert_eq!(request.method, Method::Get);
    }
}
