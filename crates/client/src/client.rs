// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request dispatch against the HCP Terraform API

use serde_json::Value;
use tfc_jsonapi::{validate_document, ApiFailure, Document, ErrorObject};
use tracing::{debug, error};
use url::Url;

use crate::config::Config;
use crate::error::ClientError;
use crate::transport::{ApiRequest, Method, Transport, UreqTransport};

/// Per-request options: query parameters and an optional JSON body.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// API client: owns the connection configuration and a transport.
///
/// Every call issues exactly one request. Responses are status-checked,
/// parsed, and validated into a [`Document`] before any operation sees
/// them; failure responses become [`ClientError::Api`] when they carry a
/// JSON:API error list and [`ClientError::Http`] otherwise.
pub struct Client {
    config: Config,
    transport: Box<dyn Transport>,
}

impl Client {
    /// Client on the real ureq transport.
    pub fn new(config: Config) -> Self {
        let transport = Box::new(UreqTransport::new(config.timeout));
        Self { config, transport }
    }

    /// Client on a caller-provided transport.
    pub fn with_transport(config: Config, transport: Box<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Organization name scoping organization-level endpoints.
    pub fn organization(&self) -> &str {
        &self.config.organization
    }

    /// Dispatch one request and return the validated response document.
    pub fn request(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Document, ClientError> {
        let url = self.endpoint_url(endpoint, &options.query)?;
        debug!(method = method.as_str(), url = %url, "dispatching api request");

        let body = match options.body {
            Some(value) => Some(serde_json::to_vec(&value)?),
            None => None,
        };
        let request = ApiRequest {
            method,
            url,
            headers: self.default_headers(),
            body,
        };
        let response = self.transport.send(&request)?;

        // Some endpoints (deletes, cancels) reply with no content at all.
        if response.body.is_empty() {
            if response.is_success() {
                return Ok(Document::default());
            }
            return Err(ClientError::Http {
                status: response.status,
                message: "empty response body".to_string(),
            });
        }

        let value: Value = match serde_json::from_slice(&response.body) {
            Ok(value) => value,
            Err(e) if !response.is_success() => {
                return Err(ClientError::Http {
                    status: response.status,
                    message: format!("unparseable error body: {e}"),
                });
            }
            Err(e) => return Err(ClientError::Json(e)),
        };

        if !response.is_success() {
            error!(status = response.status, "api request failed");
            if let Some(errors) = error_objects(&value) {
                return Err(ClientError::Api(ApiFailure::new(
                    errors,
                    Some(response.status),
                )));
            }
            return Err(ClientError::Http {
                status: response.status,
                message: "request failed".to_string(),
            });
        }

        Ok(validate_document(&value)?)
    }

    pub fn get(&self, endpoint: &str) -> Result<Document, ClientError> {
        self.request(Method::Get, endpoint, RequestOptions::new())
    }

    pub fn get_with(
        &self,
        endpoint: &str,
        query: Vec<(String, String)>,
    ) -> Result<Document, ClientError> {
        self.request(Method::Get, endpoint, RequestOptions::new().query(query))
    }

    pub fn post(&self, endpoint: &str, body: Option<Value>) -> Result<Document, ClientError> {
        let mut options = RequestOptions::new();
        options.body = body;
        self.request(Method::Post, endpoint, options)
    }

    pub fn patch(&self, endpoint: &str, body: Value) -> Result<Document, ClientError> {
        self.request(Method::Patch, endpoint, RequestOptions::new().body(body))
    }

    pub fn delete(&self, endpoint: &str) -> Result<Document, ClientError> {
        self.request(Method::Delete, endpoint, RequestOptions::new())
    }

    /// GET an endpoint without following redirects and return the
    /// temporary `Location` when the server answers 307.
    pub fn redirect_location(&self, endpoint: &str) -> Result<Option<String>, ClientError> {
        let url = self.endpoint_url(endpoint, &[])?;
        debug!(url = %url, "requesting redirect location");

        let request = ApiRequest {
            method: Method::Get,
            url,
            headers: self.default_headers(),
            body: None,
        };
        let response = self.transport.send(&request)?;

        if response.status == 307 {
            return Ok(response.header("location").map(String::from));
        }
        Ok(None)
    }

    /// PUT a raw octet stream to an absolute URL (archive uploads go to
    /// a pre-signed URL outside the API endpoint, without auth).
    pub fn put_octets(&self, url: &str, bytes: Vec<u8>) -> Result<(), ClientError> {
        debug!(url = %url, size = bytes.len(), "uploading octet stream");

        let request = ApiRequest {
            method: Method::Put,
            url: url.to_string(),
            headers: vec![(
                "Content-Type".to_string(),
                "application/octet-stream".to_string(),
            )],
            body: Some(bytes),
        };
        let response = self.transport.send(&request)?;

        if !response.is_success() {
            return Err(ClientError::Http {
                status: response.status,
                message: "upload failed".to_string(),
            });
        }
        Ok(())
    }

    fn default_headers(&self) -> Vec<(String, String)> {
        vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.config.token),
            ),
            (
                "Content-Type".to_string(),
                "application/vnd.api+json".to_string(),
            ),
        ]
    }

    fn endpoint_url(&self, endpoint: &str, query: &[(String, String)]) -> Result<String, ClientError> {
        let raw = format!("{}{}", self.config.endpoint, endpoint);
        let mut url =
            Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))?;

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(name, value)| (name, value)));
        }

        Ok(url.into())
    }
}

/// Pull the `errors` array out of a failure body, tolerating entries
/// that are not proper error objects.
fn error_objects(value: &Value) -> Option<Vec<ErrorObject>> {
    let entries = value.get("errors")?.as_array()?;
    if entries.is_empty() {
        return None;
    }

    Some(
        entries
            .iter()
            .map(|entry| serde_json::from_value(entry.clone()).unwrap_or_default())
            .collect(),
    )
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
