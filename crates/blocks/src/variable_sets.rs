// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Variable set operations
//!
//! Variable sets live under an organization or a project and can be
//! assigned to workspaces and projects; the `relationships/vars`
//! sub-resource manages the variables inside a set.

use serde::Serialize;
use serde_json::{json, Map, Value};
use tfc_client::Client;
use tfc_jsonapi::Query;

use crate::error::BlockError;
use crate::event::{emitted_data, emitted_pagination};
use crate::variables::{VariableAttributes, VariableCategory, VariableEvent};

/// Owner of a variable set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableSetParent {
    /// Organization by name
    Organization(String),
    /// Project by ID
    Project(String),
}

impl VariableSetParent {
    fn identifier(&self) -> Value {
        match self {
            VariableSetParent::Organization(name) => {
                json!({ "id": name, "type": "organizations" })
            }
            VariableSetParent::Project(id) => json!({ "id": id, "type": "projects" }),
        }
    }
}

/// Scope for listing variable sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableSetScope {
    Organization,
    Project(String),
    Workspace(String),
}

/// Inputs for creating a variable set.
///
/// Without an explicit parent the set is owned by the configured
/// organization.
#[derive(Debug, Clone, Default)]
pub struct CreateVariableSet {
    pub name: String,
    pub description: Option<String>,
    /// Apply to all current and future workspaces
    pub global: bool,
    /// Values override any other value with a more specific scope
    pub priority: bool,
    pub workspace_ids: Vec<String>,
    pub project_ids: Vec<String>,
    pub parent: Option<VariableSetParent>,
}

/// Inputs for updating a variable set; absent fields are left
/// untouched. An empty ID list clears the corresponding assignments.
#[derive(Debug, Clone, Default)]
pub struct UpdateVariableSet {
    pub variable_set_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub global: Option<bool>,
    pub priority: Option<bool>,
    pub workspace_ids: Option<Vec<String>>,
    pub project_ids: Option<Vec<String>>,
}

/// Inputs for adding a variable to a variable set.
#[derive(Debug, Clone)]
pub struct AddVariableToSet {
    pub variable_set_id: String,
    pub key: String,
    pub value: Option<String>,
    pub description: Option<String>,
    pub category: VariableCategory,
    pub hcl: bool,
    pub sensitive: bool,
}

/// Inputs for updating a variable inside a variable set.
#[derive(Debug, Clone, Default)]
pub struct UpdateVariableInSet {
    pub variable_set_id: String,
    pub variable_id: String,
    pub key: Option<String>,
    pub value: Option<String>,
    pub description: Option<String>,
    pub category: Option<VariableCategory>,
    pub hcl: Option<bool>,
    pub sensitive: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableSetEvent {
    pub variable_set: Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableSetListEvent {
    pub variable_sets: Value,
    pub pagination: Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableSetDeletedEvent {
    pub variable_set_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetVariableDeletedEvent {
    pub variable_set_id: String,
    pub variable_id: String,
}

fn identifier_list(ids: &[String], kind: &str) -> Value {
    let identifiers: Vec<Value> = ids
        .iter()
        .map(|id| json!({ "id": id, "type": kind }))
        .collect();
    json!({ "data": identifiers })
}

/// Create a variable set.
pub fn create_variable_set(
    client: &Client,
    input: CreateVariableSet,
) -> Result<VariableSetEvent, BlockError> {
    if input.name.trim().is_empty() {
        return Err(BlockError::InvalidInput(
            "variable set name is required".to_string(),
        ));
    }

    let mut relationships = Map::new();
    if !input.workspace_ids.is_empty() {
        relationships.insert(
            "workspaces".to_string(),
            identifier_list(&input.workspace_ids, "workspaces"),
        );
    }
    if !input.project_ids.is_empty() {
        relationships.insert(
            "projects".to_string(),
            identifier_list(&input.project_ids, "projects"),
        );
    }
    let parent = input
        .parent
        .unwrap_or_else(|| VariableSetParent::Organization(client.organization().to_string()));
    relationships.insert("parent".to_string(), json!({ "data": parent.identifier() }));

    let payload = json!({
        "data": {
            "type": "varsets",
            "attributes": {
                "name": input.name,
                "description": input.description.unwrap_or_default(),
                "global": input.global,
                "priority": input.priority,
            },
            "relationships": relationships,
        }
    });

    let endpoint = format!("/organizations/{}/varsets", client.organization());
    let document = client.post(&endpoint, Some(payload))?;

    Ok(VariableSetEvent {
        variable_set: emitted_data(&document),
    })
}

/// Update a variable set.
pub fn update_variable_set(
    client: &Client,
    input: UpdateVariableSet,
) -> Result<VariableSetEvent, BlockError> {
    let mut attributes = Map::new();
    if let Some(name) = input.name {
        attributes.insert("name".to_string(), json!(name));
    }
    if let Some(description) = input.description {
        attributes.insert("description".to_string(), json!(description));
    }
    if let Some(global) = input.global {
        attributes.insert("global".to_string(), json!(global));
    }
    if let Some(priority) = input.priority {
        attributes.insert("priority".to_string(), json!(priority));
    }

    let mut relationships = Map::new();
    if let Some(ids) = &input.workspace_ids {
        relationships.insert("workspaces".to_string(), identifier_list(ids, "workspaces"));
    }
    if let Some(ids) = &input.project_ids {
        relationships.insert("projects".to_string(), identifier_list(ids, "projects"));
    }

    let mut data = json!({ "type": "varsets" });
    if !attributes.is_empty() {
        data["attributes"] = Value::Object(attributes);
    }
    if !relationships.is_empty() {
        data["relationships"] = Value::Object(relationships);
    }

    let document = client.patch(
        &format!("/varsets/{}", input.variable_set_id),
        json!({ "data": data }),
    )?;

    Ok(VariableSetEvent {
        variable_set: emitted_data(&document),
    })
}

/// List variable sets visible in a scope.
pub fn list_variable_sets(
    client: &Client,
    scope: &VariableSetScope,
    page_number: Option<u64>,
    search: Option<String>,
) -> Result<VariableSetListEvent, BlockError> {
    let endpoint = match scope {
        VariableSetScope::Organization => {
            format!("/organizations/{}/varsets", client.organization())
        }
        VariableSetScope::Project(project_id) => format!("/projects/{project_id}/varsets"),
        VariableSetScope::Workspace(workspace_id) => format!("/workspaces/{workspace_id}/varsets"),
    };

    let mut query = match page_number {
        Some(page) => Query::new().page_number(page).build(),
        None => Vec::new(),
    };
    if let Some(search) = search {
        if !search.is_empty() {
            query.push(("q".to_string(), search));
        }
    }

    let document = client.get_with(&endpoint, query)?;
    Ok(VariableSetListEvent {
        variable_sets: emitted_data(&document),
        pagination: emitted_pagination(&document),
    })
}

/// Show one variable set.
pub fn show_variable_set(
    client: &Client,
    variable_set_id: &str,
) -> Result<VariableSetEvent, BlockError> {
    let document = client.get(&format!("/varsets/{variable_set_id}"))?;
    Ok(VariableSetEvent {
        variable_set: emitted_data(&document),
    })
}

/// Delete a variable set and all its variables.
pub fn delete_variable_set(
    client: &Client,
    variable_set_id: &str,
) -> Result<VariableSetDeletedEvent, BlockError> {
    client.delete(&format!("/varsets/{variable_set_id}"))?;
    Ok(VariableSetDeletedEvent {
        variable_set_id: variable_set_id.to_string(),
    })
}

/// Add a variable to a variable set.
pub fn add_variable_to_set(
    client: &Client,
    input: AddVariableToSet,
) -> Result<VariableEvent, BlockError> {
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
            }
        }
    });

    let endpoint = format!("/varsets/{}/relationships/vars", input.variable_set_id);
    let document = client.post(&endpoint, Some(payload))?;

    Ok(VariableEvent {
        variable: emitted_data(&document),
    })
}

/// Update a variable inside a variable set.
pub fn update_variable_in_set(
    client: &Client,
    input: UpdateVariableInSet,
) -> Result<VariableEvent, BlockError> {
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

    let endpoint = format!(
        "/varsets/{}/relationships/vars/{}",
        input.variable_set_id, input.variable_id
    );
    let document = client.patch(&endpoint, payload)?;

    Ok(VariableEvent {
        variable: emitted_data(&document),
    })
}

/// Remove a variable from a variable set.
pub fn delete_variable_from_set(
    client: &Client,
    variable_set_id: &str,
    variable_id: &str,
) -> Result<SetVariableDeletedEvent, BlockError> {
    client.delete(&format!(
        "/varsets/{variable_set_id}/relationships/vars/{variable_id}"
    ))?;

    Ok(SetVariableDeletedEvent {
        variable_set_id: variable_set_id.to_string(),
        variable_id: variable_id.to_string(),
    })
}

/// List the variables in a variable set.
pub fn list_variables_in_set(
    client: &Client,
    variable_set_id: &str,
) -> Result<crate::variables::VariableListEvent, BlockError> {
    let document = client.get(&format!("/varsets/{variable_set_id}/relationships/vars"))?;
    Ok(crate::variables::VariableListEvent {
        variables: emitted_data(&document),
    })
}

#[cfg(test)]
#[path = "variable_sets_tests.rs"]
mod tests;
