// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pagination extraction from document meta and links

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use crate::document::Document;

/// Base for resolving relative pagination links.
const LINK_BASE: &str = "https://app.terraform.io";

/// Pagination record for a list response.
///
/// Field names serialize in the API's kebab-case form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Pagination {
    pub current_page: u64,
    pub next_page: Option<u64>,
    pub page_size: u64,
    pub prev_page: Option<u64>,
    pub total_count: u64,
    pub total_pages: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            next_page: None,
            page_size: 20,
            prev_page: None,
            total_count: 0,
            total_pages: 1,
        }
    }
}

/// Extract pagination info from a document.
///
/// Field precedence is `meta.pagination.*`, then bare `meta.*`, then the
/// defaults. Next/previous page numbers come from the `page[number]`
/// query parameter of `links.next` / `links.prev` when the server does
/// not echo them in `meta`.
pub fn extract_pagination(document: &Document) -> Pagination {
    let meta = document.meta.as_ref();
    let links = document.links.as_ref();
    let pagination = meta
        .and_then(|m| m.get("pagination"))
        .and_then(Value::as_object);

    let defaults = Pagination::default();
    Pagination {
        current_page: lookup(pagination, meta, "current-page").unwrap_or(defaults.current_page),
        next_page: page_from_link(links, "next"),
        page_size: lookup(pagination, meta, "page-size").unwrap_or(defaults.page_size),
        prev_page: page_from_link(links, "prev"),
        total_count: lookup(pagination, meta, "total-count").unwrap_or(defaults.total_count),
        total_pages: lookup(pagination, meta, "total-pages").unwrap_or(defaults.total_pages),
    }
}

fn lookup(
    pagination: Option<&Map<String, Value>>,
    meta: Option<&Map<String, Value>>,
    key: &str,
) -> Option<u64> {
    pagination
        .and_then(|p| p.get(key))
        .and_then(Value::as_u64)
        .or_else(|| meta.and_then(|m| m.get(key)).and_then(Value::as_u64))
}

/// Parse the `page[number]` query parameter out of a pagination link.
fn page_from_link(links: Option<&Map<String, Value>>, relation: &str) -> Option<u64> {
    let link = links?.get(relation)?.as_str()?;

    let url = match Url::parse(link) {
        Ok(url) => url,
        // Pagination links may be server-relative paths.
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(LINK_BASE).ok()?.join(link).ok()?
        }
        Err(_) => return None,
    };

    url.query_pairs()
        .find(|(name, _)| name == "page[number]")
        .and_then(|(_, value)| value.parse().ok())
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
