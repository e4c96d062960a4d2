// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use serde::{Deserialize, Serialize};

/// TMDB identifier.
///
/// TMDB ids are only unique within one media kind: a movie and a series may share the same id.
/// The value `0` means "no mapping".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct TmdbId(u64);

impl TmdbId {
    /// Creates a new `TmdbId`.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the inner value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether this id is the "no mapping" placeholder.
    #[must_use]
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TmdbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for TmdbId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Seerr user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Creates a new `UserId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Media kind of a blocklist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Movie.
    Movie,
    /// TV series.
    Tv,
    /// Any kind this client does not know about.
    #[serde(other)]
    Other,
}

impl MediaType {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selector for the blocklist listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlocklistFilter {
    /// Every entry.
    #[default]
    All,
    /// Entries added by hand.
    Manual,
    /// Entries added through blocklisted tags.
    BlocklistedTags,
}

impl BlocklistFilter {
    /// Returns the query parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Manual => "manual",
            Self::BlocklistedTags => "blocklistedTags",
        }
    }
}

/// One entry of the remote blocklist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlocklistItem {
    /// Media kind.
    pub media_type: MediaType,
    /// TMDB id, unique within `media_type`.
    pub tmdb_id: TmdbId,
    /// Title, if the server stored one.
    #[serde(default)]
    pub title: Option<String>,
    /// Creation timestamp as reported by the server.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Pagination counters returned with every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Current page, starting at 1.
    pub page: u64,
    /// Total number of pages.
    pub pages: u64,
    /// Total number of results. Only a hint, it may be stale by the time the last page is read.
    pub results: u64,
    /// Page size used by the server.
    #[serde(default)]
    pub page_size: Option<u64>,
}

/// One page of the blocklist listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlocklistPage {
    /// Pagination counters.
    pub page_info: PageInfo,
    /// Entries on this page.
    #[serde(default)]
    pub results: Vec<BlocklistItem>,
}

/// Request body for adding a blocklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlocklistEntry {
    /// Media kind.
    pub media_type: MediaType,
    /// TMDB id.
    pub tmdb_id: TmdbId,
    /// Display title.
    pub title: String,
    /// Seerr user the entry is attributed to.
    pub user: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_falls_back_to_other() {
        let ty: MediaType = serde_json::from_str(r#""collection""#).unwrap();
        assert_eq!(ty, MediaType::Other);
        let ty: MediaType = serde_json::from_str(r#""tv""#).unwrap();
        assert_eq!(ty, MediaType::Tv);
    }

    #[test]
    fn page_parses_seerr_listing() {
        let json = r#"{
            "pageInfo": { "pages": 2, "pageSize": 2, "results": 3, "page": 1 },
            "results": [
                { "id": 1, "mediaType": "tv", "tmdbId": 100, "title": "Cowboy Bebop",
                  "user": { "id": 1 }, "createdAt": "2025-01-01T00:00:00.000Z" },
                { "id": 2, "mediaType": "movie", "tmdbId": 200 }
            ]
        }"#;
        let page: BlocklistPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.page_info.pages, 2);
        assert_eq!(page.page_info.page_size, Some(2));
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].tmdb_id, TmdbId::new(100));
        assert_eq!(page.results[0].title.as_deref(), Some("Cowboy Bebop"));
        assert_eq!(page.results[1].media_type, MediaType::Movie);
    }

    #[test]
    fn new_entry_serializes_without_html_escaping() {
        let entry = NewBlocklistEntry {
            media_type: MediaType::Tv,
            tmdb_id: TmdbId::new(42),
            title: "Tom & Jerry <Kids>".to_string(),
            user: UserId::new(7),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"mediaType":"tv","tmdbId":42,"title":"Tom & Jerry <Kids>","user":7}"#
        );
    }
}
