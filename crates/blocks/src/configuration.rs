// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration version operations
//!
//! Creating a configuration version returns a pre-signed upload URL;
//! the archive itself goes to that URL as a raw octet stream, outside
//! the JSON:API surface.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Serialize;
use serde_json::{json, Value};
use tfc_client::Client;

use crate::error::BlockError;
use crate::event::emitted_data;

/// Inputs for creating a configuration version.
#[derive(Debug, Clone)]
pub struct CreateConfigurationVersion {
    pub workspace_id: String,
    /// Queue a run as soon as the configuration is uploaded (the
    /// server's default when unset is true)
    pub auto_queue_runs: Option<bool>,
    /// Speculative configuration versions can only produce plan-only runs
    pub speculative: bool,
    /// Do not immediately become the workspace's current version
    pub provisional: bool,
}

/// Inputs for uploading configuration files.
#[derive(Debug, Clone)]
pub struct UploadConfigurationFiles {
    /// Upload URL from the configuration version creation response
    pub upload_url: String,
    /// Base64-encoded tar.gz archive of the configuration files
    pub archive_base64: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationVersionEvent {
    pub configuration_version: Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadEvent {
    /// Size of the uploaded archive in bytes
    pub uploaded_size: usize,
}

/// Create a configuration version in a workspace.
pub fn create_configuration_version(
    client: &Client,
    input: CreateConfigurationVersion,
) -> Result<ConfigurationVersionEvent, BlockError> {
    let payload = json!({
        "data": {
            "type": "configuration-versions",
            "attributes": {
                "auto-queue-runs": input.auto_queue_runs.unwrap_or(true),
                "speculative": input.speculative,
                "provisional": input.provisional,
            }
        }
    });

    let endpoint = format!("/workspaces/{}/configuration-versions", input.workspace_id);
    let document = client.post(&endpoint, Some(payload))?;

    Ok(ConfigurationVersionEvent {
        configuration_version: emitted_data(&document),
    })
}

/// Upload a configuration archive to a pre-signed upload URL.
pub fn upload_configuration_files(
    client: &Client,
    input: UploadConfigurationFiles,
) -> Result<UploadEvent, BlockError> {
    let archive = BASE64
        .decode(input.archive_base64.trim())
        .map_err(|e| BlockError::InvalidInput(format!("invalid base64 archive: {e}")))?;

    let uploaded_size = archive.len();
    client.put_octets(&input.upload_url, archive)?;

    Ok(UploadEvent { uploaded_size })
}

#[cfg(test)]
#[path = "configuration_tests.rs"]
mod tests;
