// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Kebab-case to camelCase key renaming for emitted payloads

use serde_json::{Map, Value};

/// Convert a kebab-case name to camelCase.
///
/// Only a `-` followed by a lowercase ASCII letter is collapsed; any
/// other `-` is kept verbatim, so names like `x-2` survive untouched.
pub fn kebab_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    chars.next();
                    out.push(next.to_ascii_uppercase());
                    continue;
                }
            }
            out.push('-');
        } else {
            out.push(c);
        }
    }

    out
}

/// Recursively rename every object key in a value from kebab-case to
/// camelCase. Arrays are walked element-wise; scalars pass through.
pub fn camelize_keys(value: Value) -> Value {
    match value {
        Value::Object(object) => {
            let mut renamed = Map::new();
            for (key, value) in object {
                renamed.insert(kebab_to_camel(&key), camelize_keys(value));
            }
            Value::Object(renamed)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(camelize_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
#[path = "camelize_tests.rs"]
mod tests;
