// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! JSON:API document model and resource normalizer
//!
//! This crate turns raw JSON:API response bodies into plain nested
//! objects:
//! - Structural validation of the response envelope
//! - Resource flattening with relationship resolution against `included`,
//!   guarded against reference cycles
//! - Pagination extraction from `meta` and `links`
//! - Aggregation and classification of API error objects
//! - Query-parameter building for JSON:API requests
//!
//! Everything here is a pure transform over already-decoded JSON; no I/O.

mod document;
mod error;
mod normalize;
mod pagination;
mod query;

pub use document::{
    validate_document, Document, ErrorObject, ErrorSource, PrimaryData, Relationship,
    RelationshipData, Resource, ResourceIdentifier,
};
pub use error::{format_errors, ApiFailure, DocumentError};
pub use normalize::extract_data;
pub use pagination::{extract_pagination, Pagination};
pub use query::Query;
