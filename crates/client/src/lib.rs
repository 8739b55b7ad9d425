// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! HTTP dispatch for the HCP Terraform API
//!
//! This crate owns everything between an operation and the wire:
//! - Connection configuration (token, organization, endpoint)
//! - A synchronous transport seam with a ureq-backed implementation and a
//!   fake for tests
//! - Request dispatch: URL assembly, bearer auth, JSON:API content type,
//!   status checking, and conversion of error responses into typed
//!   failures
//! - Kebab-case to camelCase key renaming for emitted payloads
//!
//! Each call issues exactly one outbound request and blocks until its
//! response is normalized; concurrency, retries, and timeouts beyond the
//! per-request limit are the caller's concern.

mod camelize;
mod client;
mod config;
mod error;
pub mod transport;

pub use camelize::{camelize_keys, kebab_to_camel};
pub use client::{Client, RequestOptions};
pub use config::{Config, DEFAULT_ENDPOINT};
pub use error::ClientError;
pub use transport::{
    ApiRequest, ApiResponse, FakeTransport, Method, Transport, TransportError, UreqTransport,
};
