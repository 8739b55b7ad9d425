// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Query-parameter building for JSON:API requests

/// Largest page size the API accepts.
const MAX_PAGE_SIZE: u64 = 100;

/// Builder for JSON:API query parameters: sparse fieldsets, includes,
/// filters, sorting, search, and pagination.
///
/// `build` produces ordered key/value pairs ready for URL assembly.
#[derive(Debug, Clone, Default)]
pub struct Query {
    fields: Vec<(String, Vec<String>)>,
    include: Vec<String>,
    filter: Vec<(String, String)>,
    sort: Vec<String>,
    search: Option<String>,
    page_number: Option<u64>,
    page_size: Option<u64>,
    page_cursor: Option<String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a sparse fieldset for a resource type.
    pub fn fields(mut self, kind: impl Into<String>, fields: &[&str]) -> Self {
        self.fields
            .push((kind.into(), fields.iter().map(|f| (*f).to_string()).collect()));
        self
    }

    /// Side-load a related resource. Duplicates are dropped at build time.
    pub fn include(mut self, relation: impl Into<String>) -> Self {
        self.include.push(relation.into());
        self
    }

    /// Add a `filter[<key>]` parameter. Empty values are skipped.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter.push((key.into(), value.into()));
        self
    }

    /// Add a `filter[<key>]` parameter from a list, comma-joined.
    pub fn filter_list(mut self, key: impl Into<String>, values: &[&str]) -> Self {
        self.filter.push((key.into(), values.join(",")));
        self
    }

    /// Add a sort field; prefix with `-` for descending order.
    pub fn sort(mut self, field: impl Into<String>) -> Self {
        self.sort.push(field.into());
        self
    }

    /// Set the search query. Surrounding whitespace is trimmed.
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn page_number(mut self, number: u64) -> Self {
        self.page_number = Some(number);
        self
    }

    pub fn page_size(mut self, size: u64) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Set the cursor for cursor-based pagination.
    pub fn page_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.page_cursor = Some(cursor.into());
        self
    }

    /// Produce the ordered query pairs.
    pub fn build(self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        for (kind, fields) in self.fields {
            if !fields.is_empty() {
                pairs.push((format!("fields[{kind}]"), fields.join(",")));
            }
        }

        if !self.include.is_empty() {
            let mut unique: Vec<String> = Vec::with_capacity(self.include.len());
            for relation in self.include {
                if !unique.contains(&relation) {
                    unique.push(relation);
                }
            }
            pairs.push(("include".to_string(), unique.join(",")));
        }

        for (key, value) in self.filter {
            if !value.is_empty() {
                pairs.push((format!("filter[{key}]"), value));
            }
        }

        if !self.sort.is_empty() {
            pairs.push(("sort".to_string(), self.sort.join(",")));
        }

        if let Some(search) = self.search {
            let trimmed = search.trim();
            if !trimmed.is_empty() {
                pairs.push(("search".to_string(), trimmed.to_string()));
            }
        }

        if let Some(cursor) = self.page_cursor {
            pairs.push(("page[cursor]".to_string(), cursor));
        }
        if let Some(number) = self.page_number {
            if number > 0 {
                pairs.push(("page[number]".to_string(), number.to_string()));
            }
        }
        if let Some(size) = self.page_size {
            if size > 0 && size <= MAX_PAGE_SIZE {
                pairs.push(("page[size]".to_string(), size.to_string()));
            }
        }

        pairs
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
