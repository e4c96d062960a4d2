// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Minimal typed client for the Seerr (Jellyseerr / Overseerr) REST API, bound to a single
//! resource under `/api/v1`, with bindings for the blocklist resource.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::module_name_repetitions)]

mod blocklist;
mod client;
mod config;
mod error;
mod http;
mod types;

pub use crate::blocklist::BlocklistClient;
pub use crate::client::{Payload, ResponseMode, RestClient};
pub use crate::config::{SeerrConfig, TransportConfig};
pub use crate::error::{HttpError, SeerrError};
pub use crate::types::{
    BlocklistFilter, BlocklistItem, BlocklistPage, MediaType, NewBlocklistEntry, PageInfo, TmdbId,
    UserId,
};
