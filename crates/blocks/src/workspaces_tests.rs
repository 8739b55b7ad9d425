// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::testutil::{fake_client, resource_doc, sent_body};
use serde_json::json;
use tfc_client::Method;

#[test]
fn list_workspaces_builds_search_and_filter_query() {
    let (fake, client) = fake_client();
    fake.push_json(
        200,
        &json!({
            "data": [{ "id": "ws-1", "type": "workspaces", "attributes": { "name": "prod" } }],
            "meta": { "pagination": { "current-page": 1, "total-count": 1 } }
        }),
    );

    let event = list_workspaces(
        &client,
        ListWorkspaces {
            search_name: Some("prod".to_string()),
            search_tags: vec!["team:infra".to_string(), "env:prod".to_string()],
            page_number: Some(2),
            sort: Some("-name".to_string()),
            project_id: Some("prj-1".to_string()),
            ..ListWorkspaces::default()
        },
    )
    .unwrap();

    let request = fake.last_request().unwrap();
    assert_eq!(request.method, Method::Get);
    assert!(request
        .url
        .starts_with("https://tfe.test/api/v2/organizations/acme/workspaces?"));
    assert!(request.url.contains("search%5Bname%5D=prod"));
    assert!(request.url.contains("search%5Btags%5D=team%3Ainfra%2Cenv%3Aprod"));
    assert!(request.url.contains("page%5Bnumber%5D=2"));
    assert!(request.url.contains("sort=-name"));
    assert!(request.url.contains("filter%5Bproject%5D%5Bid%5D=prj-1"));

    assert_eq!(event.workspaces[0]["name"], json!("prod"));
    assert_eq!(event.pagination["totalCount"], json!(1));
}

#[test]
fn show_workspace_by_id_and_by_name_use_different_endpoints() {
    let (fake, client) = fake_client();
    fake.push_json(200, &resource_doc("workspaces", "ws-1", json!({})));
    fake.push_json(200, &resource_doc("workspaces", "ws-1", json!({})));

    show_workspace(&client, &WorkspaceSelector::Id("ws-1".to_string())).unwrap();
    assert_eq!(
        fake.last_request().unwrap().url,
        "https://tfe.test/api/v2/workspaces/ws-1"
    );

    show_workspace(&client, &WorkspaceSelector::Name("prod".to_string())).unwrap();
    assert_eq!(
        fake.last_request().unwrap().url,
        "https://tfe.test/api/v2/organizations/acme/workspaces/prod"
    );
}

#[test]
fn create_workspace_requires_a_name() {
    let (_fake, client) = fake_client();
    let err = create_workspace(&client, WorkspaceSpec::default()).unwrap_err();
    assert!(matches!(err, BlockError::InvalidInput(_)));
}

#[test]
fn create_workspace_serializes_kebab_case_payload() {
    let (fake, client) = fake_client();
    fake.push_json(
        201,
        &resource_doc("workspaces", "ws-9", json!({ "name": "staging" })),
    );

    let event = create_workspace(
        &client,
        WorkspaceSpec {
            name: Some("staging".to_string()),
            execution_mode: Some(ExecutionMode::Remote),
            auto_apply: Some(true),
            terraform_version: Some("1.6.0".to_string()),
            trigger_prefixes: Some(vec!["modules/".to_string()]),
            vcs_repo: Some(VcsRepoSpec {
                identifier: "acme/infra".to_string(),
                oauth_token_id: Some("ot-1".to_string()),
                branch: Some("main".to_string()),
                ..VcsRepoSpec::default()
            }),
            project_id: Some("prj-1".to_string()),
            tags: vec![("env".to_string(), "staging".to_string())],
            ..WorkspaceSpec::default()
        },
    )
    .unwrap();

    let request = fake.last_request().unwrap();
    assert_eq!(request.method, Method::Post);
    assert_eq!(
        request.url,
        "https://tfe.test/api/v2/organizations/acme/workspaces"
    );

    let body = sent_body(&fake);
    let attributes = &body["data"]["attributes"];
    assert_eq!(attributes["name"], json!("staging"));
    assert_eq!(attributes["execution-mode"], json!("remote"));
    assert_eq!(attributes["auto-apply"], json!(true));
    assert_eq!(attributes["terraform-version"], json!("1.6.0"));
    assert_eq!(attributes["trigger-prefixes"], json!(["modules/"]));
    assert_eq!(attributes["vcs-repo"]["identifier"], json!("acme/infra"));
    assert_eq!(attributes["vcs-repo"]["oauth-token-id"], json!("ot-1"));
    // Unset optionals stay off the wire entirely.
    assert!(attributes.get("description").is_none());

    assert_eq!(
        body["data"]["relationships"]["project"]["data"],
        json!({ "type": "projects", "id": "prj-1" })
    );
    assert_eq!(
        body["data"]["relationships"]["tag-bindings"]["data"][0]["attributes"],
        json!({ "key": "env", "value": "staging" })
    );
    assert_eq!(attributes["source-name"], json!("tfc-blocks"));

    assert_eq!(event.workspace["name"], json!("staging"));
}

#[test]
fn update_workspace_patches_without_source_stamp() {
    let (fake, client) = fake_client();
    fake.push_json(200, &resource_doc("workspaces", "ws-1", json!({})));

    update_workspace(
        &client,
        &WorkspaceSelector::Id("ws-1".to_string()),
        WorkspaceSpec {
            description: Some("managed".to_string()),
            ..WorkspaceSpec::default()
        },
        false,
    )
    .unwrap();

    let request = fake.last_request().unwrap();
    assert_eq!(request.method, Method::Patch);
    assert_eq!(request.url, "https://tfe.test/api/v2/workspaces/ws-1");

    let body = sent_body(&fake);
    assert_eq!(body["data"]["attributes"]["description"], json!("managed"));
    assert!(body["data"]["attributes"].get("source-name").is_none());
    assert!(body["data"]["attributes"].get("vcs-repo").is_none());
}

#[test]
fn update_workspace_can_detach_vcs_repo_with_explicit_null() {
    let (fake, client) = fake_client();
    fake.push_json(200, &resource_doc("workspaces", "ws-1", json!({})));

    update_workspace(
        &client,
        &WorkspaceSelector::Id("ws-1".to_string()),
        WorkspaceSpec::default(),
        true,
    )
    .unwrap();

    let body = sent_body(&fake);
    let attributes = body["data"]["attributes"].as_object().unwrap();
    assert!(attributes.contains_key("vcs-repo"));
    assert_eq!(attributes["vcs-repo"], serde_json::Value::Null);
}

#[test]
fn delete_workspace_defaults_to_safe_delete() {
    let (fake, client) = fake_client();
    fake.push_response(204, Vec::new());

    let event =
        delete_workspace(&client, &WorkspaceSelector::Id("ws-1".to_string()), false).unwrap();

    let request = fake.last_request().unwrap();
    assert_eq!(request.method, Method::Post);
    assert_eq!(
        request.url,
        "https://tfe.test/api/v2/workspaces/ws-1/actions/safe-delete"
    );
    assert_eq!(event.workspace_id.as_deref(), Some("ws-1"));
    assert!(!event.force);
}

#[test]
fn forced_delete_by_name_uses_plain_delete() {
    let (fake, client) = fake_client();
    fake.push_response(204, Vec::new());

    let event =
        delete_workspace(&client, &WorkspaceSelector::Name("prod".to_string()), true).unwrap();

    let request = fake.last_request().unwrap();
    assert_eq!(request.method, Method::Delete);
    assert_eq!(
        request.url,
        "https://tfe.test/api/v2/organizations/acme/workspaces/prod"
    );
    assert_eq!(event.workspace_name.as_deref(), Some("prod"));
    assert!(event.force);
}

#[test]
fn lock_workspace_posts_reason() {
    let (fake, client) = fake_client();
    fake.push_json(200, &resource_doc("workspaces", "ws-1", json!({ "locked": true })));

    let event = lock_workspace(&client, "ws-1", Some("maintenance".to_string())).unwrap();

    let request = fake.last_request().unwrap();
    assert_eq!(
        request.url,
        "https://tfe.test/api/v2/workspaces/ws-1/actions/lock"
    );
    assert_eq!(sent_body(&fake), json!({ "reason": "maintenance" }));
    assert_eq!(event.workspace["locked"], json!(true));
}

#[test]
fn unlock_workspace_picks_force_endpoint() {
    let (fake, client) = fake_client();
    fake.push_json(200, &resource_doc("workspaces", "ws-1", json!({})));
    fake.push_json(200, &resource_doc("workspaces", "ws-1", json!({})));

    unlock_workspace(&client, "ws-1", false).unwrap();
    assert_eq!(
        fake.last_request().unwrap().url,
        "https://tfe.test/api/v2/workspaces/ws-1/actions/unlock"
    );

    unlock_workspace(&client, "ws-1", true).unwrap();
    assert_eq!(
        fake.last_request().unwrap().url,
        "https://tfe.test/api/v2/workspaces/ws-1/actions/force-unlock"
    );
}

#[test]
fn current_state_version_reports_state_presence() {
    let (fake, client) = fake_client();
    fake.push_json(
        200,
        &json!({
            "data": {
                "id": "sv-1",
                "type": "state-versions",
                "attributes": { "serial": 4 }
            }
        }),
    );

    let event = current_state_version(&client, "ws-1", true).unwrap();

    let request = fake.last_request().unwrap();
    assert!(request.url.contains("current-state-version"));
    assert!(request.url.contains("include=outputs"));
    assert!(event.has_state);
    assert_eq!(event.state_version["serial"], json!(4));
}

#[test]
fn current_state_version_without_state_emits_has_state_false() {
    let (fake, client) = fake_client();
    fake.push_json(200, &json!({ "data": null, "meta": {} }));

    let event = current_state_version(&client, "ws-1", false).unwrap();
    assert!(!event.has_state);
    assert_eq!(event.state_version, serde_json::Value::Null);
}

#[test]
fn emitted_workspace_keys_are_camelized() {
    let (fake, client) = fake_client();
    fake.push_json(
        200,
        &resource_doc(
            "workspaces",
            "ws-1",
            json!({ "auto-apply": true, "terraform-version": "1.6.0" }),
        ),
    );

    let event = show_workspace(&client, &WorkspaceSelector::Id("ws-1".to_string())).unwrap();
    assert_eq!(event.workspace["autoApply"], json!(true));
    assert_eq!(event.workspace["terraformVersion"], json!("1.6.0"));
    assert!(event.workspace.get("auto-apply").is_none());
}
