// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace operations
//!
//! Workspaces can be addressed by ID anywhere, or by name within the
//! configured organization; [`WorkspaceSelector`] carries that choice.
//! Create and update share one attribute surface ([`WorkspaceSpec`]),
//! serialized straight into the API's kebab-case payload shape.

use serde::Serialize;
use serde_json::{json, Map, Value};
use tfc_client::Client;
use tfc_jsonapi::{extract_data, Query};

use crate::error::BlockError;
use crate::event::{emitted_data, emitted_pagination};

/// Stamped into `source-name` on created workspaces.
const SOURCE_NAME: &str = "tfc-blocks";

/// Workspace addressed by ID or by name within the organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceSelector {
    Id(String),
    Name(String),
}

impl WorkspaceSelector {
    fn endpoint(&self, organization: &str) -> String {
        match self {
            WorkspaceSelector::Id(id) => format!("/workspaces/{id}"),
            WorkspaceSelector::Name(name) => {
                format!("/organizations/{organization}/workspaces/{name}")
            }
        }
    }

    fn id(&self) -> Option<&str> {
        match self {
            WorkspaceSelector::Id(id) => Some(id),
            WorkspaceSelector::Name(_) => None,
        }
    }

    fn name(&self) -> Option<&str> {
        match self {
            WorkspaceSelector::Id(_) => None,
            WorkspaceSelector::Name(name) => Some(name),
        }
    }
}

/// How runs for a workspace execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    Remote,
    Local,
    Agent,
}

/// VCS repository connection for a workspace.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct VcsRepoSpec {
    /// Repository in `:org/:repo` format
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_token_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_app_installation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress_submodules: Option<bool>,
}

/// Workspace attributes and relationships for create and update.
///
/// Every field is optional; on update, absent fields are left untouched
/// by the server.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceSpec {
    pub name: Option<String>,
    pub description: Option<String>,
    pub execution_mode: Option<ExecutionMode>,
    pub terraform_version: Option<String>,
    pub working_directory: Option<String>,
    pub auto_apply: Option<bool>,
    pub auto_apply_run_trigger: Option<bool>,
    pub allow_destroy_plan: Option<bool>,
    pub assessments_enabled: Option<bool>,
    pub auto_destroy_at: Option<String>,
    pub auto_destroy_activity_duration: Option<String>,
    pub queue_all_runs: Option<bool>,
    pub speculative_enabled: Option<bool>,
    pub global_remote_state: Option<bool>,
    pub file_triggers_enabled: Option<bool>,
    pub trigger_prefixes: Option<Vec<String>>,
    pub trigger_patterns: Option<Vec<String>>,
    pub agent_pool_id: Option<String>,
    /// Per-setting overwrite flags, e.g. `{"execution-mode": false}`
    pub setting_overwrites: Option<Value>,
    pub vcs_repo: Option<VcsRepoSpec>,
    /// Project to create or move the workspace in
    pub project_id: Option<String>,
    /// Tag bindings as key/value pairs
    pub tags: Vec<(String, String)>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
struct WorkspaceAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    execution_mode: Option<ExecutionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    terraform_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    working_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_apply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_apply_run_trigger: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allow_destroy_plan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assessments_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_destroy_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_destroy_activity_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    queue_all_runs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    speculative_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    global_remote_state: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_triggers_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trigger_prefixes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trigger_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    agent_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    setting_overwrites: Option<Value>,
    /// `Some(None)` serializes an explicit null, detaching the VCS repo.
    #[serde(skip_serializing_if = "Option::is_none")]
    vcs_repo: Option<Option<VcsRepoSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_name: Option<String>,
}

fn workspace_attributes(spec: &WorkspaceSpec, remove_vcs_repo: bool, create: bool) -> WorkspaceAttributes {
    WorkspaceAttributes {
        name: spec.name.clone(),
        description: spec.description.clone(),
        execution_mode: spec.execution_mode,
        terraform_version: spec.terraform_version.clone(),
        working_directory: spec.working_directory.clone(),
        auto_apply: spec.auto_apply,
        auto_apply_run_trigger: spec.auto_apply_run_trigger,
        allow_destroy_plan: spec.allow_destroy_plan,
        assessments_enabled: spec.assessments_enabled,
        auto_destroy_at: spec.auto_destroy_at.clone(),
        auto_destroy_activity_duration: spec.auto_destroy_activity_duration.clone(),
        queue_all_runs: spec.queue_all_runs,
        speculative_enabled: spec.speculative_enabled,
        global_remote_state: spec.global_remote_state,
        file_triggers_enabled: spec.file_triggers_enabled,
        trigger_prefixes: spec.trigger_prefixes.clone(),
        trigger_patterns: spec.trigger_patterns.clone(),
        agent_pool_id: spec.agent_pool_id.clone(),
        setting_overwrites: spec.setting_overwrites.clone(),
        vcs_repo: if remove_vcs_repo {
            Some(None)
        } else {
            spec.vcs_repo.clone().map(Some)
        },
        source_name: create.then(|| SOURCE_NAME.to_string()),
    }
}

fn workspace_relationships(spec: &WorkspaceSpec) -> Map<String, Value> {
    let mut relationships = Map::new();

    if let Some(project_id) = &spec.project_id {
        relationships.insert(
            "project".to_string(),
            json!({ "data": { "type": "projects", "id": project_id } }),
        );
    }

    if !spec.tags.is_empty() {
        let bindings: Vec<Value> = spec
            .tags
            .iter()
            .map(|(key, value)| {
                json!({
                    "type": "tag-bindings",
                    "attributes": { "key": key, "value": value }
                })
            })
            .collect();
        relationships.insert("tag-bindings".to_string(), json!({ "data": bindings }));
    }

    relationships
}

fn workspace_payload(spec: &WorkspaceSpec, remove_vcs_repo: bool, create: bool) -> Value {
    let mut data = json!({
        "type": "workspaces",
        "attributes": workspace_attributes(spec, remove_vcs_repo, create),
    });
    let relationships = workspace_relationships(spec);
    if !relationships.is_empty() {
        data["relationships"] = Value::Object(relationships);
    }
    json!({ "data": data })
}

/// Filters and search terms for listing workspaces.
#[derive(Debug, Clone, Default)]
pub struct ListWorkspaces {
    /// Fuzzy name search
    pub search_name: Option<String>,
    /// Tags the workspaces must all carry
    pub search_tags: Vec<String>,
    /// Tags that exclude a workspace when present
    pub search_exclude_tags: Vec<String>,
    /// Name search with `*` wildcards
    pub search_wildcard_name: Option<String>,
    pub page_number: Option<u64>,
    /// Sort field, `-` prefix for descending
    pub sort: Option<String>,
    pub project_id: Option<String>,
    pub current_run_status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceEvent {
    pub workspace: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceListEvent {
    pub workspaces: Value,
    pub pagination: Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDeletedEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_name: Option<String>,
    pub force: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateVersionEvent {
    pub state_version: Value,
    pub has_state: bool,
}

/// List the organization's workspaces.
pub fn list_workspaces(
    client: &Client,
    input: ListWorkspaces,
) -> Result<WorkspaceListEvent, BlockError> {
    let mut query = Vec::new();
    if let Some(name) = input.search_name {
        query.push(("search[name]".to_string(), name));
    }
    if !input.search_tags.is_empty() {
        query.push(("search[tags]".to_string(), input.search_tags.join(",")));
    }
    if !input.search_exclude_tags.is_empty() {
        query.push((
            "search[exclude-tags]".to_string(),
            input.search_exclude_tags.join(","),
        ));
    }
    if let Some(name) = input.search_wildcard_name {
        query.push(("search[wildcard-name]".to_string(), name));
    }
    if let Some(page) = input.page_number {
        if page > 0 {
            query.push(("page[number]".to_string(), page.to_string()));
        }
    }
    if let Some(sort) = input.sort {
        query.push(("sort".to_string(), sort));
    }
    if let Some(project_id) = input.project_id {
        query.push(("filter[project][id]".to_string(), project_id));
    }
    if let Some(status) = input.current_run_status {
        query.push(("filter[current-run][status]".to_string(), status));
    }

    let endpoint = format!("/organizations/{}/workspaces", client.organization());
    let document = client.get_with(&endpoint, query)?;

    Ok(WorkspaceListEvent {
        workspaces: emitted_data(&document),
        pagination: emitted_pagination(&document),
    })
}

/// Show one workspace.
pub fn show_workspace(
    client: &Client,
    selector: &WorkspaceSelector,
) -> Result<WorkspaceEvent, BlockError> {
    let document = client.get(&selector.endpoint(client.organization()))?;
    Ok(WorkspaceEvent {
        workspace: emitted_data(&document),
    })
}

/// Create a workspace in the organization.
pub fn create_workspace(client: &Client, spec: WorkspaceSpec) -> Result<WorkspaceEvent, BlockError> {
    if spec.name.as_deref().unwrap_or("").is_empty() {
        return Err(BlockError::InvalidInput(
            "workspace name is required for create".to_string(),
        ));
    }

    let endpoint = format!("/organizations/{}/workspaces", client.organization());
    let document = client.post(&endpoint, Some(workspace_payload(&spec, false, true)))?;

    Ok(WorkspaceEvent {
        workspace: emitted_data(&document),
    })
}

/// Update a workspace's settings.
///
/// `remove_vcs_repo` detaches the VCS connection by sending an explicit
/// null `vcs-repo` attribute.
pub fn update_workspace(
    client: &Client,
    selector: &WorkspaceSelector,
    spec: WorkspaceSpec,
    remove_vcs_repo: bool,
) -> Result<WorkspaceEvent, BlockError> {
    let endpoint = selector.endpoint(client.organization());
    let document = client.patch(&endpoint, workspace_payload(&spec, remove_vcs_repo, false))?;

    Ok(WorkspaceEvent {
        workspace: emitted_data(&document),
    })
}

/// Delete a workspace.
///
/// The default is a safe delete, refused by the server while the
/// workspace still manages resources; `force` deletes unconditionally.
pub fn delete_workspace(
    client: &Client,
    selector: &WorkspaceSelector,
    force: bool,
) -> Result<WorkspaceDeletedEvent, BlockError> {
    let base = selector.endpoint(client.organization());
    if force {
        client.delete(&base)?;
    } else {
        client.post(&format!("{base}/actions/safe-delete"), None)?;
    }

    Ok(WorkspaceDeletedEvent {
        workspace_id: selector.id().map(String::from),
        workspace_name: selector.name().map(String::from),
        force,
    })
}

/// Lock a workspace against new runs.
pub fn lock_workspace(
    client: &Client,
    workspace_id: &str,
    reason: Option<String>,
) -> Result<WorkspaceEvent, BlockError> {
    let body = json!({ "reason": reason.unwrap_or_default() });
    let document = client.post(&format!("/workspaces/{workspace_id}/actions/lock"), Some(body))?;

    Ok(WorkspaceEvent {
        workspace: emitted_data(&document),
    })
}

/// Unlock a workspace; `force` steals a lock held by another user.
pub fn unlock_workspace(
    client: &Client,
    workspace_id: &str,
    force: bool,
) -> Result<WorkspaceEvent, BlockError> {
    let action = if force { "force-unlock" } else { "unlock" };
    let document = client.post(&format!("/workspaces/{workspace_id}/actions/{action}"), None)?;

    Ok(WorkspaceEvent {
        workspace: emitted_data(&document),
    })
}

/// Show a workspace's current state version.
pub fn current_state_version(
    client: &Client,
    workspace_id: &str,
    include_outputs: bool,
) -> Result<StateVersionEvent, BlockError> {
    let query = if include_outputs {
        Query::new().include("outputs").build()
    } else {
        Vec::new()
    };

    let endpoint = format!("/workspaces/{workspace_id}/current-state-version");
    let document = client.get_with(&endpoint, query)?;
    let has_state = extract_data(&document).is_some();

    Ok(StateVersionEvent {
        state_version: emitted_data(&document),
        has_state,
    })
}

#[cfg(test)]
#[path = "workspaces_tests.rs"]
mod tests;
