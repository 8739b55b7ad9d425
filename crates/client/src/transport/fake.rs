// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake transport for testing

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::{ApiRequest, ApiResponse, Transport, TransportError};

/// Fake transport that replays queued responses and records every
/// request it sees, in order.
#[derive(Clone, Default)]
pub struct FakeTransport {
    responses: Arc<Mutex<VecDeque<Result<ApiResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and raw body.
    pub fn push_response(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.push(Ok(ApiResponse {
            status,
            headers: Vec::new(),
            body: body.into(),
        }));
    }

    /// Queue a JSON response.
    pub fn push_json(&self, status: u16, body: &Value) {
        self.push_response(status, body.to_string().into_bytes());
    }

    /// Queue a redirect response carrying a `Location` header.
    pub fn push_redirect(&self, status: u16, location: &str) {
        self.push(Ok(ApiResponse {
            status,
            headers: vec![("location".to_string(), location.to_string())],
            body: Vec::new(),
        }));
    }

    /// Queue a transport-level failure.
    pub fn push_error(&self, error: TransportError) {
        self.push(Err(error));
    }

    /// All recorded requests, in send order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// The most recently sent request.
    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests().pop()
    }

    fn push(&self, response: Result<ApiResponse, TransportError>) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(response);
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());

        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Request(
                    "no queued response for request".to_string(),
                ))
            })
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
