// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pagination specs
//!
//! Walk a multi-page listing by following the emitted next-page numbers
//! until they run out.

use crate::prelude::*;
use serde_json::json;
use similar_asserts::assert_eq;
use tfc_blocks::workspaces::{list_workspaces, ListWorkspaces};

fn page_doc(page: u64, total_pages: u64, names: &[&str]) -> serde_json::Value {
    let data: Vec<serde_json::Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| workspace_resource(&format!("ws-{page}{i}"), name))
        .collect();

    let mut links = serde_json::Map::new();
    if page < total_pages {
        links.insert(
            "next".to_string(),
            json!(format!(
                "{ENDPOINT}/organizations/acme/workspaces?page%5Bnumber%5D={}",
                page + 1
            )),
        );
    }
    if page > 1 {
        links.insert(
            "prev".to_string(),
            json!(format!(
                "{ENDPOINT}/organizations/acme/workspaces?page%5Bnumber%5D={}",
                page - 1
            )),
        );
    }

    json!({
        "data": data,
        "meta": {
            "pagination": {
                "current-page": page,
                "page-size": 2,
                "total-pages": total_pages,
                "total-count": 5
            }
        },
        "links": links
    })
}

#[test]
fn listing_walks_pages_until_next_runs_out() {
    let (fake, client) = spec_client();
    fake.push_json(200, &page_doc(1, 3, &["a", "b"]));
    fake.push_json(200, &page_doc(2, 3, &["c", "d"]));
    fake.push_json(200, &page_doc(3, 3, &["e"]));

    let mut names = Vec::new();
    let mut page = Some(1);
    while let Some(number) = page {
        let event = list_workspaces(
            &client,
            ListWorkspaces {
                page_number: Some(number),
                ..ListWorkspaces::default()
            },
        )
        .unwrap();

        for workspace in event.workspaces.as_array().unwrap() {
            names.push(workspace["name"].as_str().unwrap().to_string());
        }
        page = event.pagination["nextPage"].as_u64();
    }

    assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
    assert_eq!(fake.requests().len(), 3);
}

#[test]
fn middle_page_reports_both_neighbors() {
    let (fake, client) = spec_client();
    fake.push_json(200, &page_doc(2, 3, &["c", "d"]));

    let event = list_workspaces(
        &client,
        ListWorkspaces {
            page_number: Some(2),
            ..ListWorkspaces::default()
        },
    )
    .unwrap();

    assert_eq!(event.pagination["currentPage"], json!(2));
    assert_eq!(event.pagination["nextPage"], json!(3));
    assert_eq!(event.pagination["prevPage"], json!(1));
    assert_eq!(event.pagination["totalCount"], json!(5));
}

#[test]
fn single_page_listing_has_no_neighbors() {
    let (fake, client) = spec_client();
    fake.push_json(200, &page_doc(1, 1, &["only"]));

    let event = list_workspaces(&client, ListWorkspaces::default()).unwrap();
    assert_eq!(event.pagination["nextPage"], json!(null));
    assert_eq!(event.pagination["prevPage"], json!(null));
}
