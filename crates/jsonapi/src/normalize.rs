// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource flattening with relationship resolution
//!
//! Converts a document's primary data into plain nested objects: each
//! resource's attributes are merged onto an `{id, type}` seed and every
//! relationship is resolved against `included`. Documents routinely carry
//! back-references (a run pointing at its workspace, which points back at
//! its current run), so resolution tracks the resources currently being
//! expanded on this branch and short-circuits repeats to a bare
//! identifier stub. The guard is stack-scoped: once a resource's
//! expansion finishes its key is released, and the same resource reached
//! via a different, non-cyclic path is expanded in full again.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::document::{
    Document, PrimaryData, RelationshipData, Resource, ResourceIdentifier,
};

/// Extract the primary data from a document as flattened plain objects.
///
/// Returns `None` when the document has no `data`. A resource list maps
/// to a same-order list of flattened objects, a single resource to one
/// flattened object. Pure function of (`data`, `included`).
pub fn extract_data(document: &Document) -> Option<Value> {
    match document.data.as_ref()? {
        PrimaryData::Many(resources) => Some(Value::Array(
            resources
                .iter()
                .map(|resource| flatten_resource(resource, &document.included, &mut HashSet::new()))
                .collect(),
        )),
        PrimaryData::One(resource) => {
            Some(flatten_resource(resource, &document.included, &mut HashSet::new()))
        }
    }
}

/// Flatten one resource, resolving its relationships against `included`.
///
/// `visited` holds the `type:id` keys of resources currently being
/// expanded higher up this recursion branch.
fn flatten_resource(
    resource: &Resource,
    included: &[Resource],
    visited: &mut HashSet<String>,
) -> Value {
    let key = format!("{}:{}", resource.kind, resource.id);

    // Already expanding this resource on the current branch: stub it out
    // instead of recursing forever.
    if visited.contains(&key) {
        return identifier_stub(&resource.id, &resource.kind);
    }
    visited.insert(key.clone());

    let mut result = Map::new();
    result.insert("id".to_string(), Value::String(resource.id.clone()));
    result.insert("type".to_string(), Value::String(resource.kind.clone()));

    // Shallow merge: attribute keys become direct fields of the result,
    // and an attribute named id or type wins over the seed values.
    if let Some(attributes) = &resource.attributes {
        for (name, value) in attributes {
            result.insert(name.clone(), value.clone());
        }
    }

    if let Some(relationships) = &resource.relationships {
        for (name, relationship) in relationships {
            let resolved = match &relationship.data {
                // Present-but-empty relationship, distinct from one the
                // server omitted entirely.
                None => Value::Null,
                Some(RelationshipData::Many(identifiers)) => Value::Array(
                    identifiers
                        .iter()
                        .map(|identifier| resolve_identifier(identifier, included, visited))
                        .collect(),
                ),
                Some(RelationshipData::One(identifier)) => {
                    resolve_identifier(identifier, included, visited)
                }
            };
            result.insert(name.clone(), resolved);
        }
    }

    // Release the key so a sibling path may expand this resource fully.
    visited.remove(&key);
    Value::Object(result)
}

/// Resolve one relationship identifier: the flattened included resource
/// when present, otherwise the bare identifier stub.
fn resolve_identifier(
    identifier: &ResourceIdentifier,
    included: &[Resource],
    visited: &mut HashSet<String>,
) -> Value {
    find_included(identifier, included, visited)
        .unwrap_or_else(|| identifier_stub(&identifier.id, &identifier.kind))
}

/// Linear scan of `included` for the first resource matching the
/// identifier's (type, id); `None` when absent or when the identifier
/// itself is malformed.
fn find_included(
    identifier: &ResourceIdentifier,
    included: &[Resource],
    visited: &mut HashSet<String>,
) -> Option<Value> {
    if identifier.is_malformed() {
        return None;
    }

    included
        .iter()
        .find(|resource| resource.kind == identifier.kind && resource.id == identifier.id)
        .map(|resource| flatten_resource(resource, included, visited))
}

fn identifier_stub(id: &str, kind: &str) -> Value {
    let mut stub = Map::new();
    stub.insert("id".to_string(), Value::String(id.to_string()));
    stub.insert("type".to_string(), Value::String(kind.to_string()));
    Value::Object(stub)
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
