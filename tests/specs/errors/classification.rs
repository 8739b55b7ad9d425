// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error classification specs
//!
//! Failure responses surface as aggregated API failures whose
//! classification flags drive the caller's retry decision.

use crate::prelude::*;
use serde_json::json;
use tfc_blocks::workspaces::{create_workspace, show_workspace, WorkspaceSelector, WorkspaceSpec};
use tfc_blocks::BlockError;
use tfc_client::ClientError;

fn api_failure(err: BlockError) -> tfc_jsonapi::ApiFailure {
    match err {
        BlockError::Client(ClientError::Api(failure)) => failure,
        other => panic!("expected api failure, got {other:?}"),
    }
}

#[test]
fn validation_failure_carries_pointer_and_flags() {
    let (fake, client) = spec_client();
    fake.push_json(
        422,
        &json!({
            "errors": [{
                "status": "422",
                "title": "Invalid attribute",
                "detail": "Name has already been taken",
                "source": { "pointer": "/data/attributes/name" }
            }]
        }),
    );

    let err = create_workspace(
        &client,
        WorkspaceSpec {
            name: Some("payments".to_string()),
            ..WorkspaceSpec::default()
        },
    )
    .unwrap_err();

    let failure = api_failure(err);
    assert_eq!(
        failure.message(),
        "Name has already been taken (at /data/attributes/name)"
    );
    assert!(failure.is_validation_error());
    assert!(!failure.is_auth_error());
    assert!(!failure.is_retryable());
}

#[test]
fn auth_failure_is_flagged_and_not_retryable() {
    let (fake, client) = spec_client();
    fake.push_json(
        401,
        &json!({ "errors": [{ "status": "401", "title": "Unauthorized" }] }),
    );

    let err = show_workspace(&client, &WorkspaceSelector::Id("ws-1".to_string())).unwrap_err();
    let failure = api_failure(err);
    assert!(failure.is_auth_error());
    assert!(!failure.is_retryable());
}

#[test]
fn rate_limit_failure_is_retryable() {
    let (fake, client) = spec_client();
    fake.push_json(
        429,
        &json!({
            "errors": [{
                "status": "429",
                "code": "rate_limit_exceeded",
                "title": "Too many requests"
            }]
        }),
    );

    let err = show_workspace(&client, &WorkspaceSelector::Id("ws-1".to_string())).unwrap_err();
    let failure = api_failure(err);
    assert!(failure.is_rate_limit_error());
    assert!(failure.is_retryable());
    assert_eq!(failure.status(), Some(429));
}

#[test]
fn multiple_errors_join_in_document_order() {
    let (fake, client) = spec_client();
    fake.push_json(
        422,
        &json!({
            "errors": [
                { "status": "422", "detail": "Name is too short" },
                { "status": "422", "detail": "Terraform version is unknown",
                  "source": { "parameter": "terraform-version" } }
            ]
        }),
    );

    let err = show_workspace(&client, &WorkspaceSelector::Id("ws-1".to_string())).unwrap_err();
    assert_eq!(
        api_failure(err).message(),
        "Name is too short; Terraform version is unknown (parameter: terraform-version)"
    );
}

#[test]
fn server_failure_without_error_document_keeps_the_status() {
    let (fake, client) = spec_client();
    fake.push_response(502, "<html>bad gateway</html>");

    let err = show_workspace(&client, &WorkspaceSelector::Id("ws-1".to_string())).unwrap_err();
    let BlockError::Client(client_error) = err else {
        panic!("expected client error");
    };
    assert_eq!(client_error.status(), Some(502));
}
