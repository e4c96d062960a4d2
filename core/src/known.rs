// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Snapshot of the ids already blocklisted for one media kind.

use std::collections::HashSet;

use anibl_seerr::{BlocklistClient, BlocklistFilter, MediaType, SeerrError, TmdbId};

/// Page size used when reading the whole blocklist.
pub const DEFAULT_PAGE_SIZE: u64 = 32_767;

// The reported total only sizes the set, so keep a misreporting server from forcing a huge
// allocation up front.
const MAX_CAPACITY_HINT: usize = 1 << 20;

/// TMDB ids known to be blocklisted for one media kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownSet(HashSet<TmdbId>);

impl KnownSet {
    /// Creates an empty set with room for `capacity` ids.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashSet::with_capacity(capacity))
    }

    /// Whether the id is known.
    #[must_use]
    pub fn contains(&self, id: TmdbId) -> bool {
        self.0.contains(&id)
    }

    /// Marks the id as known, returning whether it was new.
    pub fn insert(&mut self, id: TmdbId) -> bool {
        self.0.insert(id)
    }

    /// Number of known ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the known ids in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = TmdbId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<TmdbId> for KnownSet {
    fn from_iter<I: IntoIterator<Item = TmdbId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<TmdbId> for KnownSet {
    fn extend<I: IntoIterator<Item = TmdbId>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// Reads the whole blocklist and collects the ids of entries of `media_type`.
///
/// Pages of `take` entries are requested until the server reports the last page or returns an
/// empty one. Entries of other kinds are skipped.
///
/// # Errors
///
/// Any failed page aborts the whole fetch: a partial snapshot is never returned.
#[tracing::instrument(skip(client))]
pub async fn fetch_known(
    client: &BlocklistClient,
    media_type: MediaType,
    take: u64,
) -> Result<KnownSet, SeerrError> {
    let take = take.max(1);
    let mut known = KnownSet::default();
    let mut skip = 0;

    loop {
        let page = client.page(take, skip, BlocklistFilter::All).await?;
        let info = page.page_info;
        tracing::debug!(
            page = info.page,
            pages = info.pages,
            results = page.results.len(),
            "fetched blocklist page"
        );

        if skip == 0 {
            let hint = usize::try_from(info.results).unwrap_or(usize::MAX);
            known = KnownSet::with_capacity(hint.min(MAX_CAPACITY_HINT));
        }

        let empty = page.results.is_empty();
        known.extend(
            page.results
                .into_iter()
                .filter(|item| item.media_type == media_type)
                .map(|item| item.tmdb_id),
        );

        if info.page >= info.pages || empty {
            break;
        }
        skip += take;
    }

    tracing::debug!(count = known.len(), "collected known blocklist entries");
    Ok(known)
}
