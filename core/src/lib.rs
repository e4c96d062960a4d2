// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Reconciles the Anime-Lists TMDB mapping against a Seerr blocklist.

mod anime_list;
mod error;
mod known;
mod mapping;
mod reconcile;

pub use crate::anime_list::{AnimeEntry, parse_anime_list};
pub use crate::error::MappingError;
pub use crate::known::{DEFAULT_PAGE_SIZE, KnownSet, fetch_known};
pub use crate::mapping::{ANIME_LIST_URL, MappingSource, UPDATE_INTERVAL};
pub use crate::reconcile::{Outcome, ReconcileReport, Reconciler};

/// The name of the application.
pub const APP_NAME: &str = "anime-to-seerr-blocklist";
