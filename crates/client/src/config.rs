// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Connection configuration

use std::time::Duration;

/// Hosted HCP Terraform API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://app.terraform.io/api/v2";

/// Configuration for talking to the HCP Terraform API.
#[derive(Debug, Clone)]
pub struct Config {
    /// API token with permissions appropriate for the operations in use
    pub token: String,
    /// Organization name scoping organization-level operations
    pub organization: String,
    /// API endpoint; override for Terraform Enterprise installs
    pub endpoint: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Config {
    pub fn new(token: impl Into<String>, organization: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            organization: organization.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the API endpoint. A trailing slash is stripped so endpoint
    /// paths can always be joined with a leading one.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
