// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project operations

use serde::Serialize;
use serde_json::{json, Value};
use tfc_client::{camelize_keys, Client};

use crate::error::BlockError;
use crate::event::{emitted_data, emitted_pagination};

const NAME_MIN: usize = 3;
const NAME_MAX: usize = 40;
const DESCRIPTION_MAX: usize = 256;

/// Inputs for creating a project.
#[derive(Debug, Clone, Default)]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
    /// Auto-destroy duration for workspaces in the project, e.g. `14d`
    pub auto_destroy_activity_duration: Option<String>,
    /// Tag bindings as key/value pairs
    pub tags: Vec<(String, String)>,
}

/// Inputs for updating a project; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub project_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub auto_destroy_activity_duration: Option<String>,
    pub tags: Option<Vec<(String, String)>>,
}

/// Filters for listing the organization's projects.
#[derive(Debug, Clone, Default)]
pub struct ListProjects {
    pub page_number: Option<u64>,
    /// Fuzzy name search
    pub search: Option<String>,
    /// Exact names to match
    pub filter_names: Vec<String>,
    /// Only projects where the caller can create workspaces
    pub filter_can_create_workspace: bool,
    /// Only projects the caller can update
    pub filter_can_update: bool,
    /// `name` or `-name`
    pub sort_by: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectEvent {
    pub project: Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListEvent {
    pub projects: Value,
    pub pagination: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_counts: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDeletedEvent {
    pub project_id: String,
}

fn validate_name(name: &str) -> Result<(), BlockError> {
    let length = name.trim().chars().count();
    if length < NAME_MIN || length > NAME_MAX {
        return Err(BlockError::InvalidInput(format!(
            "project name must be between {NAME_MIN} and {NAME_MAX} characters long"
        )));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), BlockError> {
    if description.chars().count() > DESCRIPTION_MAX {
        return Err(BlockError::InvalidInput(format!(
            "project description must be no more than {DESCRIPTION_MAX} characters long"
        )));
    }
    Ok(())
}

fn tag_bindings(tags: &[(String, String)]) -> Value {
    let bindings: Vec<Value> = tags
        .iter()
        .map(|(key, value)| {
            json!({
                "type": "tag-bindings",
                "attributes": { "key": key, "value": value }
            })
        })
        .collect();
    json!({ "data": bindings })
}

/// List the organization's projects.
pub fn list_projects(client: &Client, input: ListProjects) -> Result<ProjectListEvent, BlockError> {
    let mut query = Vec::new();
    if let Some(page) = input.page_number {
        if page > 0 {
            query.push(("page[number]".to_string(), page.to_string()));
        }
    }
    if let Some(search) = input.search {
        query.push(("q".to_string(), search));
    }
    if !input.filter_names.is_empty() {
        query.push(("filter[names]".to_string(), input.filter_names.join(",")));
    }
    if input.filter_can_create_workspace {
        query.push((
            "filter[permissions][create-workspace]".to_string(),
            "true".to_string(),
        ));
    }
    if input.filter_can_update {
        query.push(("filter[permissions][update]".to_string(), "true".to_string()));
    }
    if let Some(sort) = input.sort_by {
        query.push(("sort".to_string(), sort));
    }

    let endpoint = format!("/organizations/{}/projects", client.organization());
    let document = client.get_with(&endpoint, query)?;

    let status_counts = document
        .meta
        .as_ref()
        .and_then(|meta| meta.get("status-counts"))
        .cloned()
        .map(camelize_keys);

    Ok(ProjectListEvent {
        projects: emitted_data(&document),
        pagination: emitted_pagination(&document),
        status_counts,
    })
}

/// Create a project in the organization.
pub fn create_project(client: &Client, input: CreateProject) -> Result<ProjectEvent, BlockError> {
    validate_name(&input.name)?;
    if let Some(description) = &input.description {
        validate_description(description)?;
    }

    let mut attributes = json!({ "name": input.name.trim() });
    if let Some(description) = &input.description {
        attributes["description"] = json!(description.trim());
    }
    if let Some(duration) = &input.auto_destroy_activity_duration {
        attributes["auto-destroy-activity-duration"] = json!(duration);
    }

    let mut data = json!({ "type": "projects", "attributes": attributes });
    if !input.tags.is_empty() {
        data["relationships"] = json!({ "tag-bindings": tag_bindings(&input.tags) });
    }

    let endpoint = format!("/organizations/{}/projects", client.organization());
    let document = client.post(&endpoint, Some(json!({ "data": data })))?;

    Ok(ProjectEvent {
        project: emitted_data(&document),
    })
}

/// Show one project.
pub fn show_project(client: &Client, project_id: &str) -> Result<ProjectEvent, BlockError> {
    let document = client.get(&format!("/projects/{project_id}"))?;
    Ok(ProjectEvent {
        project: emitted_data(&document),
    })
}

/// Update a project's settings.
pub fn update_project(client: &Client, input: UpdateProject) -> Result<ProjectEvent, BlockError> {
    if let Some(name) = &input.name {
        validate_name(name)?;
    }
    if let Some(description) = &input.description {
        validate_description(description)?;
    }

    let mut attributes = json!({});
    if let Some(name) = &input.name {
        attributes["name"] = json!(name.trim());
    }
    if let Some(description) = &input.description {
        attributes["description"] = json!(description.trim());
    }
    if let Some(duration) = &input.auto_destroy_activity_duration {
        attributes["auto-destroy-activity-duration"] = json!(duration);
    }

    let mut data = json!({ "type": "projects", "attributes": attributes });
    if let Some(tags) = &input.tags {
        data["relationships"] = json!({ "tag-bindings": tag_bindings(tags) });
    }

    let document = client.patch(
        &format!("/projects/{}", input.project_id),
        json!({ "data": data }),
    )?;

    Ok(ProjectEvent {
        project: emitted_data(&document),
    })
}

/// Delete a project. Only empty projects can be deleted.
pub fn delete_project(client: &Client, project_id: &str) -> Result<ProjectDeletedEvent, BlockError> {
    client.delete(&format!("/projects/{project_id}"))?;
    Ok(ProjectDeletedEvent {
        project_id: project_id.to_string(),
    })
}

#[cfg(test)]
#[path = "projects_tests.rs"]
mod tests;
