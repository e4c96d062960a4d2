// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parser for the Anime-Lists `anime-list.xml` mapping.
//!
//! ```xml
//! <anime-list>
//!   <anime anidbid="23" tvdbid="76885" tmdbtv="30991" tmdbid="">
//!     <name>Cowboy Bebop</name>
//!     <mapping-list>...</mapping-list>
//!   </anime>
//! </anime-list>
//! ```

use anibl_seerr::TmdbId;
use serde::Deserialize;

use crate::error::MappingError;

/// One anime from the mapping, reduced to what the blocklist needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimeEntry {
    /// `AniDB` id, if present.
    pub anidb_id: Option<u64>,
    /// Display name.
    pub name: String,
    /// TMDB id of the matching TV series, `0` when there is none.
    pub tmdb_tv: TmdbId,
}

impl AnimeEntry {
    /// Creates a new entry.
    pub fn new(name: impl Into<String>, tmdb_tv: u64) -> Self {
        Self {
            anidb_id: None,
            name: name.into(),
            tmdb_tv: TmdbId::new(tmdb_tv),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnimeListRaw {
    #[serde(rename = "anime", default)]
    anime: Vec<AnimeRaw>,
}

#[derive(Debug, Deserialize)]
struct AnimeRaw {
    #[serde(rename = "@anidbid", default)]
    anidb_id: Option<String>,

    #[serde(rename = "@tmdbtv", default)]
    tmdb_tv: Option<String>,

    #[serde(default)]
    name: Option<String>,
}

impl From<AnimeRaw> for AnimeEntry {
    fn from(raw: AnimeRaw) -> Self {
        Self {
            anidb_id: raw.anidb_id.as_deref().and_then(parse_id),
            name: raw.name.map(|a| a.trim().to_string()).unwrap_or_default(),
            tmdb_tv: raw
                .tmdb_tv
                .as_deref()
                .and_then(parse_id)
                .map(TmdbId::new)
                .unwrap_or_default(),
        }
    }
}

/// Parses the anime mapping document, keeping document order.
///
/// Absent, empty or non-numeric `tmdbtv` attributes (the list uses values such as `movie` or
/// `unknown`) are reported as the unset id `0`.
///
/// # Errors
///
/// Returns an error if the document is not well-formed.
pub fn parse_anime_list(xml: &str) -> Result<Vec<AnimeEntry>, MappingError> {
    let raw: AnimeListRaw = quick_xml::de::from_str(xml)?;
    Ok(raw.anime.into_iter().map(AnimeEntry::from).collect())
}

fn parse_id(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}
