// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run lifecycle specs
//!
//! Configuration version → archive upload → run → apply, the way an
//! orchestrator drives a deployment.

use crate::prelude::*;
use serde_json::json;
use similar_asserts::assert_eq;
use tfc_blocks::configuration::{
    create_configuration_version, upload_configuration_files, CreateConfigurationVersion,
    UploadConfigurationFiles,
};
use tfc_blocks::runs::{apply_run, create_run, show_run, CreateRun};
use tfc_client::Method;

#[test]
fn configuration_upload_run_apply_round_trip() {
    let (fake, client) = spec_client();

    fake.push_json(
        201,
        &json!({
            "data": {
                "id": "cv-5",
                "type": "configuration-versions",
                "attributes": {
                    "status": "pending",
                    "upload-url": "https://archivist.test/upload/cv-5"
                }
            }
        }),
    );
    fake.push_response(200, Vec::new());
    fake.push_json(201, &json!({ "data": run_resource("run-9", "pending", "ws-100") }));
    fake.push_json(
        200,
        &json!({
            "data": run_resource("run-9", "planned", "ws-100"),
            "included": [workspace_resource("ws-100", "payments")]
        }),
    );
    fake.push_response(202, Vec::new());

    let created = create_configuration_version(
        &client,
        CreateConfigurationVersion {
            workspace_id: "ws-100".to_string(),
            auto_queue_runs: Some(false),
            speculative: false,
            provisional: false,
        },
    )
    .unwrap();
    let upload_url = created.configuration_version["uploadUrl"]
        .as_str()
        .unwrap()
        .to_string();

    let uploaded = upload_configuration_files(
        &client,
        UploadConfigurationFiles {
            upload_url,
            archive_base64: "dGFyLmd6IGJ5dGVz".to_string(),
        },
    )
    .unwrap();
    assert_eq!(uploaded.uploaded_size, 12);

    let run = create_run(
        &client,
        CreateRun {
            workspace_id: "ws-100".to_string(),
            configuration_version_id: Some("cv-5".to_string()),
            message: Some("deploy payments".to_string()),
            ..CreateRun::default()
        },
    )
    .unwrap();
    assert_eq!(run.run["status"], json!("pending"));

    let shown = show_run(&client, "run-9").unwrap();
    assert_eq!(shown.run["status"], json!("planned"));
    assert_eq!(shown.run["workspace"]["name"], json!("payments"));

    let applied = apply_run(&client, "run-9", Some("looks good".to_string())).unwrap();
    assert!(applied.success);

    let requests = fake.requests();
    assert_eq!(requests.len(), 5);
    assert_eq!(requests[1].method, Method::Put);
    assert_eq!(requests[1].url, "https://archivist.test/upload/cv-5");
    assert_eq!(
        requests[2].url,
        format!("{ENDPOINT}/runs")
    );
    assert_eq!(
        requests[4].url,
        format!("{ENDPOINT}/runs/run-9/actions/apply")
    );
}
