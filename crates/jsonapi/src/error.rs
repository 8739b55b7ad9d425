// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structural document errors and API error aggregation

use std::fmt;

use thiserror::Error;

use crate::document::ErrorObject;

/// Statuses worth retrying: rate limiting and transient server failures.
const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// A response body that does not conform to the JSON:API document shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("invalid JSON:API response: not an object")]
    NotAnObject,
    #[error("invalid JSON:API response: missing required members")]
    MissingMembers,
    #[error("invalid JSON:API response: errors must be an array")]
    ErrorsNotArray,
    #[error("invalid JSON:API response: cannot have both data and errors")]
    DataAndErrors,
    #[error("invalid JSON:API response: {0}")]
    Malformed(String),
}

/// Join every error's detail (falling back to title, then a generic
/// label) into a single `; `-delimited string, in document order.
pub fn format_errors(errors: &[ErrorObject]) -> String {
    errors
        .iter()
        .map(format_error)
        .collect::<Vec<_>>()
        .join("; ")
}

fn format_error(error: &ErrorObject) -> String {
    let detail = error
        .detail
        .as_deref()
        .or(error.title.as_deref())
        .unwrap_or("Unknown error");

    if let Some(source) = &error.source {
        if let Some(pointer) = &source.pointer {
            return format!("{detail} (at {pointer})");
        }
        if let Some(parameter) = &source.parameter {
            return format!("{detail} (parameter: {parameter})");
        }
    }

    detail.to_string()
}

/// Aggregate API failure built from a document's `errors` array.
///
/// Carries the full list of underlying error objects, the HTTP status of
/// the response, and a joined human-readable message.
#[derive(Debug, Clone)]
pub struct ApiFailure {
    errors: Vec<ErrorObject>,
    status: Option<u16>,
    message: String,
}

impl ApiFailure {
    pub fn new(errors: Vec<ErrorObject>, status: Option<u16>) -> Self {
        let message = format_errors(&errors);
        Self {
            errors,
            status,
            message,
        }
    }

    /// The underlying error objects, in document order.
    pub fn errors(&self) -> &[ErrorObject] {
        &self.errors
    }

    /// HTTP status of the response this failure was built from.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// The joined human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the response status indicates a transient condition.
    pub fn is_retryable(&self) -> bool {
        self.status.is_some_and(|s| RETRYABLE_STATUSES.contains(&s))
    }

    /// Any underlying error with a 401 or 403 status.
    pub fn is_auth_error(&self) -> bool {
        self.any_status(&["401", "403"])
    }

    /// Any underlying error with a 429 status or a rate-limit code.
    pub fn is_rate_limit_error(&self) -> bool {
        self.any_status(&["429"])
            || self
                .errors
                .iter()
                .any(|e| e.code.as_deref() == Some("rate_limit_exceeded"))
    }

    /// Any underlying error with a 422 or 400 status.
    pub fn is_validation_error(&self) -> bool {
        self.any_status(&["422", "400"])
    }

    fn any_status(&self, statuses: &[&str]) -> bool {
        self.errors
            .iter()
            .any(|e| e.status.as_deref().is_some_and(|s| statuses.contains(&s)))
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiFailure {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
