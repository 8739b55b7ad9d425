// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State version outputs and workspace resources

use serde::Serialize;
use serde_json::Value;
use tfc_client::{Client, ClientError};
use tfc_jsonapi::Query;

use crate::error::BlockError;
use crate::event::{emitted_data, emitted_pagination};

#[derive(Debug, Clone, Serialize)]
pub struct OutputsEvent {
    pub outputs: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputsListEvent {
    pub outputs: Value,
    pub pagination: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceListEvent {
    pub resources: Value,
    pub pagination: Value,
}

fn require_prefix(id: &str, prefix: &str, label: &str) -> Result<(), BlockError> {
    if id.is_empty() || !id.starts_with(prefix) {
        return Err(BlockError::InvalidInput(format!(
            "{label} must be provided and start with '{prefix}'"
        )));
    }
    Ok(())
}

fn page_query(page_number: Option<u64>) -> Vec<(String, String)> {
    match page_number {
        Some(page) => Query::new().page_number(page).build(),
        None => Vec::new(),
    }
}

/// List the outputs of a state version.
pub fn list_state_version_outputs(
    client: &Client,
    state_version_id: &str,
    page_number: Option<u64>,
) -> Result<OutputsListEvent, BlockError> {
    require_prefix(state_version_id, "sv-", "state version id")?;

    let endpoint = format!("/state-versions/{state_version_id}/outputs");
    let document = client.get_with(&endpoint, page_query(page_number))?;

    Ok(OutputsListEvent {
        outputs: emitted_data(&document),
        pagination: emitted_pagination(&document),
    })
}

/// Show the outputs of a workspace's current state version.
///
/// The server answers 503 while outputs are still being processed and
/// 404 when there is no state or no access; both get actionable
/// messages instead of raw dispatch errors.
pub fn show_current_state_outputs(
    client: &Client,
    workspace_id: &str,
) -> Result<OutputsEvent, BlockError> {
    require_prefix(workspace_id, "ws-", "workspace id")?;

    let endpoint = format!("/workspaces/{workspace_id}/current-state-version-outputs");
    let document = client.get(&endpoint).map_err(map_outputs_error)?;

    Ok(OutputsEvent {
        outputs: emitted_data(&document),
    })
}

fn map_outputs_error(error: ClientError) -> BlockError {
    match error.status() {
        Some(503) => BlockError::NotReady(
            "state version outputs are being processed; retry the request".to_string(),
        ),
        Some(404) => BlockError::NotFound(
            "state version outputs not found or not authorized".to_string(),
        ),
        _ => BlockError::Client(error),
    }
}

/// List the resources tracked in a workspace's state.
pub fn list_workspace_resources(
    client: &Client,
    workspace_id: &str,
    page_number: Option<u64>,
) -> Result<ResourceListEvent, BlockError> {
    require_prefix(workspace_id, "ws-", "workspace id")?;

    let endpoint = format!("/workspaces/{workspace_id}/resources");
    let document = client.get_with(&endpoint, page_query(page_number))?;

    Ok(ResourceListEvent {
        resources: emitted_data(&document),
        pagination: emitted_pagination(&document),
    })
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
