// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run operations: queueing, inspection, and lifecycle actions

use serde::Serialize;
use serde_json::{json, Value};
use tfc_client::Client;

use crate::error::BlockError;
use crate::event::{emitted_data, emitted_pagination};

/// Message attached to runs queued without an explicit one.
const DEFAULT_RUN_MESSAGE: &str = "Queued manually";

/// A run-scoped input variable.
#[derive(Debug, Clone, Serialize)]
pub struct RunVariable {
    pub key: String,
    pub value: String,
}

/// Inputs for queueing a run.
///
/// Without a configuration version the run uses the workspace's latest.
#[derive(Debug, Clone, Default)]
pub struct CreateRun {
    pub workspace_id: String,
    pub configuration_version_id: Option<String>,
    pub message: Option<String>,
    pub auto_apply: Option<bool>,
    pub is_destroy: Option<bool>,
    pub refresh: Option<bool>,
    pub refresh_only: Option<bool>,
    pub plan_only: Option<bool>,
    pub allow_empty_apply: Option<bool>,
    pub allow_config_generation: Option<bool>,
    pub debugging_mode: Option<bool>,
    pub save_plan: Option<bool>,
    /// Only valid for plan-only runs
    pub terraform_version: Option<String>,
    pub target_addrs: Option<Vec<String>>,
    pub replace_addrs: Option<Vec<String>>,
    pub variables: Option<Vec<RunVariable>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
struct RunAttributes {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_apply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_destroy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allow_empty_apply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allow_config_generation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    debugging_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    save_plan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    terraform_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_addrs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    replace_addrs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Vec<RunVariable>>,
}

/// Plan addressed directly or through its run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanSelector {
    PlanId(String),
    RunId(String),
}

impl PlanSelector {
    fn endpoint(&self) -> String {
        match self {
            PlanSelector::PlanId(id) => format!("/plans/{id}"),
            PlanSelector::RunId(id) => format!("/runs/{id}/plan"),
        }
    }
}

/// Filters and search terms for listing a workspace's runs.
#[derive(Debug, Clone, Default)]
pub struct ListRuns {
    pub workspace_id: String,
    pub page_number: Option<u64>,
    /// `plan_only`, `plan_and_apply`, `refresh_only`, `destroy`, ...
    pub filter_operation: Option<String>,
    pub filter_status: Vec<String>,
    /// Single status group, e.g. `finished` or `running`
    pub filter_status_group: Option<String>,
    pub filter_agent_pool_names: Vec<String>,
    pub filter_source: Vec<String>,
    /// Integer year, or `year` for the past year
    pub filter_timeframe: Option<String>,
    pub search_user: Option<String>,
    pub search_commit: Option<String>,
    pub search_basic: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunEvent {
    pub run: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunListEvent {
    pub runs: Value,
    pub pagination: Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunAppliedEvent {
    pub success: bool,
    pub run_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunDiscardedEvent {
    pub run_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunCancelledEvent {
    pub run_id: String,
    pub force: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEvent {
    pub plan: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_output_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplyEvent {
    pub apply: Value,
}

/// Queue a run in a workspace.
pub fn create_run(client: &Client, input: CreateRun) -> Result<RunEvent, BlockError> {
    if input.is_destroy == Some(true) && input.refresh_only == Some(true) {
        return Err(BlockError::InvalidInput(
            "is-destroy and refresh-only are mutually exclusive".to_string(),
        ));
    }

    let attributes = RunAttributes {
        message: input
            .message
            .unwrap_or_else(|| DEFAULT_RUN_MESSAGE.to_string()),
        auto_apply: input.auto_apply,
        is_destroy: input.is_destroy,
        refresh: input.refresh,
        refresh_only: input.refresh_only,
        plan_only: input.plan_only,
        allow_empty_apply: input.allow_empty_apply,
        allow_config_generation: input.allow_config_generation,
        debugging_mode: input.debugging_mode,
        save_plan: input.save_plan,
        terraform_version: input.terraform_version,
        target_addrs: input.target_addrs,
        replace_addrs: input.replace_addrs,
        variables: input.variables,
    };

    let mut relationships = json!({
        "workspace": { "data": { "type": "workspaces", "id": input.workspace_id } }
    });
    if let Some(id) = &input.configuration_version_id {
        relationships["configuration-version"] =
            json!({ "data": { "type": "configuration-versions", "id": id } });
    }

    let payload = json!({
        "data": {
            "type": "runs",
            "attributes": attributes,
            "relationships": relationships,
        }
    });

    let document = client.post("/runs", Some(payload))?;
    Ok(RunEvent {
        run: emitted_data(&document),
    })
}

/// Show one run.
pub fn show_run(client: &Client, run_id: &str) -> Result<RunEvent, BlockError> {
    let document = client.get(&format!("/runs/{run_id}"))?;
    Ok(RunEvent {
        run: emitted_data(&document),
    })
}

/// Confirm and apply a planned run.
pub fn apply_run(
    client: &Client,
    run_id: &str,
    comment: Option<String>,
) -> Result<RunAppliedEvent, BlockError> {
    let body = comment.as_ref().map(|c| json!({ "comment": c }));
    client.post(&format!("/runs/{run_id}/actions/apply"), body)?;

    Ok(RunAppliedEvent {
        success: true,
        run_id: run_id.to_string(),
        comment,
    })
}

/// Discard a run awaiting confirmation.
pub fn discard_run(
    client: &Client,
    run_id: &str,
    comment: Option<String>,
) -> Result<RunDiscardedEvent, BlockError> {
    let body = comment.as_ref().map(|c| json!({ "comment": c }));
    client.post(&format!("/runs/{run_id}/actions/discard"), body)?;

    Ok(RunDiscardedEvent {
        run_id: run_id.to_string(),
        comment,
    })
}

/// Cancel a run; `force` kills one that ignores the interrupt.
pub fn cancel_run(
    client: &Client,
    run_id: &str,
    force: bool,
    comment: Option<String>,
) -> Result<RunCancelledEvent, BlockError> {
    let action = if force { "force-cancel" } else { "cancel" };
    let body = comment.as_ref().map(|c| json!({ "comment": c }));
    client.post(&format!("/runs/{run_id}/actions/{action}"), body)?;

    Ok(RunCancelledEvent {
        run_id: run_id.to_string(),
        force,
        comment,
    })
}

/// List a workspace's runs.
pub fn list_runs_in_workspace(client: &Client, input: ListRuns) -> Result<RunListEvent, BlockError> {
    let mut query = Vec::new();
    if let Some(page) = input.page_number {
        if page > 0 {
            query.push(("page[number]".to_string(), page.to_string()));
        }
    }
    if let Some(operation) = input.filter_operation {
        query.push(("filter[operation]".to_string(), operation));
    }
    if !input.filter_status.is_empty() {
        query.push(("filter[status]".to_string(), input.filter_status.join(",")));
    }
    if let Some(group) = input.filter_status_group {
        query.push(("filter[status_group]".to_string(), group));
    }
    if !input.filter_agent_pool_names.is_empty() {
        query.push((
            "filter[agent_pool_names]".to_string(),
            input.filter_agent_pool_names.join(","),
        ));
    }
    if !input.filter_source.is_empty() {
        query.push(("filter[source]".to_string(), input.filter_source.join(",")));
    }
    if let Some(timeframe) = input.filter_timeframe {
        query.push(("filter[timeframe]".to_string(), timeframe));
    }
    if let Some(user) = input.search_user {
        query.push(("search[user]".to_string(), user));
    }
    if let Some(commit) = input.search_commit {
        query.push(("search[commit]".to_string(), commit));
    }
    if let Some(basic) = input.search_basic {
        query.push(("search[basic]".to_string(), basic));
    }

    let endpoint = format!("/workspaces/{}/runs", input.workspace_id);
    let document = client.get_with(&endpoint, query)?;

    Ok(RunListEvent {
        runs: emitted_data(&document),
        pagination: emitted_pagination(&document),
    })
}

/// Show a plan, with an optional temporary download URL for its JSON
/// execution plan.
pub fn show_plan(
    client: &Client,
    selector: &PlanSelector,
    include_json_output: bool,
) -> Result<PlanEvent, BlockError> {
    let endpoint = selector.endpoint();
    let document = client.get(&endpoint)?;

    let json_output_url = if include_json_output {
        client.redirect_location(&format!("{endpoint}/json-output"))?
    } else {
        None
    };

    Ok(PlanEvent {
        plan: emitted_data(&document),
        json_output_url,
    })
}

/// Show one apply.
pub fn show_apply(client: &Client, apply_id: &str) -> Result<ApplyEvent, BlockError> {
    let document = client.get(&format!("/applies/{apply_id}"))?;
    Ok(ApplyEvent {
        apply: emitted_data(&document),
    })
}

#[cfg(test)]
#[path = "runs_tests.rs"]
mod tests;
