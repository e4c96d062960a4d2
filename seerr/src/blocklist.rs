// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Bindings for the `/api/v1/blocklist` resource.

use crate::client::RestClient;
use crate::config::SeerrConfig;
use crate::error::SeerrError;
use crate::types::{BlocklistFilter, BlocklistItem, BlocklistPage, NewBlocklistEntry, TmdbId};

const SEGMENT: &str = "blocklist";

/// Client for the Seerr blocklist.
#[derive(Debug, Clone)]
pub struct BlocklistClient {
    rest: RestClient,
}

impl BlocklistClient {
    /// Creates a client bound to `<host>/api/v1/blocklist`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid or HTTP client initialization fails.
    pub fn new(config: &SeerrConfig) -> Result<Self, SeerrError> {
        Ok(Self {
            rest: RestClient::new(config, SEGMENT)?,
        })
    }

    /// Returns the underlying REST client.
    #[must_use]
    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    /// Fetches one page of the listing, `take` entries starting at `skip`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a listing page.
    pub async fn page(
        &self,
        take: u64,
        skip: u64,
        filter: BlocklistFilter,
    ) -> Result<BlocklistPage, SeerrError> {
        let query = [
            ("take", take.to_string()),
            ("skip", skip.to_string()),
            ("filter", filter.as_str().to_string()),
        ];
        self.rest.get("", Some(query.as_slice())).await
    }

    /// Fetches a single entry by TMDB id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, e.g. `404` when the id is not blocklisted.
    pub async fn get(&self, tmdb_id: TmdbId) -> Result<BlocklistItem, SeerrError> {
        self.rest.get(&format!("/{tmdb_id}"), None).await
    }

    /// Adds an entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. A `412` status means the id is already
    /// blocklisted, possibly under another media kind.
    pub async fn add(&self, entry: &NewBlocklistEntry) -> Result<(), SeerrError> {
        self.rest.post("", None, Some(entry)).await
    }

    /// Removes the entry with the given TMDB id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn remove(&self, tmdb_id: TmdbId) -> Result<(), SeerrError> {
        self.rest
            .delete::<()>(&format!("/{tmdb_id}"), None, None)
            .await
    }
}
