// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Shared helpers for the integration tests.

#![allow(dead_code)]

use anibl_seerr::{BlocklistClient, SeerrConfig};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const BLOCKLIST_PATH: &str = "/api/v1/blocklist";

/// Creates a blocklist client talking to the mock server.
pub fn blocklist_client(server: &MockServer) -> BlocklistClient {
    BlocklistClient::new(&SeerrConfig::new(server.uri(), "test-key"))
        .expect("Failed to create client")
}

/// Builds a listing page body. `items` are `(mediaType, tmdbId)` pairs.
pub fn page_json(page: u64, pages: u64, results: u64, items: &[(&str, u64)]) -> Value {
    let results_json: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, (media_type, tmdb_id))| {
            json!({
                "id": i + 1,
                "mediaType": media_type,
                "tmdbId": tmdb_id,
                "title": format!("Title {tmdb_id}"),
                "createdAt": "2025-01-01T00:00:00.000Z"
            })
        })
        .collect();

    json!({
        "pageInfo": { "page": page, "pages": pages, "results": results, "pageSize": 2 },
        "results": results_json
    })
}

/// Body sent when adding a series.
pub fn add_body(tmdb_id: u64, title: &str, user: i64) -> Value {
    json!({ "mediaType": "tv", "tmdbId": tmdb_id, "title": title, "user": user })
}
