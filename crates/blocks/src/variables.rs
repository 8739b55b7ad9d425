// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace variable operations

use serde::Serialize;
use serde_json::{json, Value};
use tfc_client::Client;

use crate::error::BlockError;
use crate::event::emitted_data;

/// Whether a variable is a Terraform input or an environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableCategory {
    Terraform,
    Env,
}

/// Inputs for creating a workspace variable.
#[derive(Debug, Clone)]
pub struct CreateVariable {
    pub workspace_id: String,
    pub key: String,
    pub value: Option<String>,
    pub description: Option<String>,
    pub category: VariableCategory,
    pub hcl: bool,
    pub sensitive: bool,
}

/// Inputs for updating a variable; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateVariable {
    pub variable_id: String,
    pub key: Option<String>,
    pub value: Option<String>,
    pub description: Option<String>,
    pub category: Option<VariableCategory>,
    pub hcl: Option<bool>,
    pub sensitive: Option<bool>,
}

/// Sparse variable attribute payload for updates.
#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct VariableAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<VariableCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hcl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VariableEvent {
    pub variable: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct VariableListEvent {
    pub variables: Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDeletedEvent {
    pub variable_id: String,
}

/// Create a variable in a workspace.
pub fn create_variable(client: &Client, input: CreateVariable) -> Result<VariableEvent, BlockError> {
    let payload = json!({
        "data": {
            "type": "vars",
            "attributes": {
                "key": input.key,
                "value": input.value.unwrap_or_default(),
                "description": input.description.unwrap_or_default(),
                "category": input.category,
                "hcl": input.hcl,
                "sensitive": input.sensitive,
            },
            "relationships": {
                "workspace": {
                    "data": { "id": input.workspace_id, "type": "workspaces" }
                }
            }
        }
    });

    let document = client.post("/vars", Some(payload))?;
    Ok(VariableEvent {
        variable: emitted_data(&document),
    })
}

/// List a workspace's variables, addressed by workspace name.
pub fn list_variables(client: &Client, workspace_name: &str) -> Result<VariableListEvent, BlockError> {
    let query = vec![
        (
            "filter[workspace][name]".to_string(),
            workspace_name.to_string(),
        ),
        (
            "filter[organization][name]".to_string(),
            client.organization().to_string(),
        ),
    ];

    let document = client.get_with("/vars", query)?;
    Ok(VariableListEvent {
        variables: emitted_data(&document),
    })
}

/// Update a variable.
pub fn update_variable(client: &Client, input: UpdateVariable) -> Result<VariableEvent, BlockError> {
    let attributes = VariableAttributes {
        key: input.key,
        value: input.value,
        description: input.description,
        category: input.category,
        hcl: input.hcl,
        sensitive: input.sensitive,
    };

    let payload = json!({
        "data": {
            "id": input.variable_id,
            "type": "vars",
            "attributes": attributes,
        }
    });

    let document = client.patch(&format!("/vars/{}", input.variable_id), payload)?;
    Ok(VariableEvent {
        variable: emitted_data(&document),
    })
}

/// Delete a variable.
pub fn delete_variable(client: &Client, variable_id: &str) -> Result<VariableDeletedEvent, BlockError> {
    client.delete(&format!("/vars/{variable_id}"))?;
    Ok(VariableDeletedEvent {
        variable_id: variable_id.to_string(),
    })
}

#[cfg(test)]
#[path = "variables_tests.rs"]
mod tests;
