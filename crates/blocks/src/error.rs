// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type for block execution

use tfc_client::ClientError;
use thiserror::Error;

/// Errors raised by an operation.
///
/// `InvalidInput` means the arguments were rejected before a request was
/// issued; the other variants propagate the dispatch failure untouched
/// so the caller can inspect classification and retryability.
#[derive(Debug, Error)]
pub enum BlockError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("resource not ready: {0}")]
    NotReady(String),
    #[error(transparent)]
    Client(#[from] ClientError),
}
