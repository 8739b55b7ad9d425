// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for request dispatch

use tfc_jsonapi::{ApiFailure, DocumentError};
use thiserror::Error;

use crate::transport::TransportError;

/// Errors surfaced by [`Client`](crate::Client) calls.
///
/// `Api` carries the aggregated JSON:API error list with its
/// classification queries; `Http` covers failure responses without a
/// usable error document. Retrying is the caller's decision, informed by
/// [`ApiFailure::is_retryable`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiFailure),
    #[error("api request failed with status {status}: {message}")]
    Http { status: u16, message: String },
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status of the failed response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api(failure) => failure.status(),
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
