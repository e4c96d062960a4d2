// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Adds missing anime to the blocklist.

use anibl_seerr::{BlocklistClient, MediaType, NewBlocklistEntry, UserId};

use crate::anime_list::AnimeEntry;
use crate::known::KnownSet;

/// What happened to a single candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The candidate has no TMDB id for this media kind; no request was made.
    Unmapped,
    /// The id was already blocklisted; no request was made.
    AlreadyKnown,
    /// The entry was added.
    Added,
    /// The id was taken by another media kind; that entry was removed and this one added.
    Replaced,
    /// The entry could not be added.
    Failed,
}

/// Counters for one reconciliation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Entries added.
    pub added: usize,
    /// Entries added after removing a colliding entry of another kind.
    pub replaced: usize,
    /// Candidates already blocklisted.
    pub already_known: usize,
    /// Candidates without a TMDB id.
    pub unmapped: usize,
    /// Candidates that could not be added.
    pub failed: usize,
}

impl ReconcileReport {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Unmapped => self.unmapped += 1,
            Outcome::AlreadyKnown => self.already_known += 1,
            Outcome::Added => self.added += 1,
            Outcome::Replaced => self.replaced += 1,
            Outcome::Failed => self.failed += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    Initial,
    Deleted,
}

/// Drives the blocklist towards containing every mapped candidate.
///
/// Candidates are processed one at a time. The loop assumes it is the only writer to the
/// blocklist for the ids it touches.
#[derive(Debug)]
pub struct Reconciler<'a> {
    client: &'a BlocklistClient,
    user: UserId,
    media_type: MediaType,
    known: KnownSet,
}

impl<'a> Reconciler<'a> {
    /// Creates a reconciler seeded with the ids already on the blocklist.
    #[must_use]
    pub fn new(
        client: &'a BlocklistClient,
        user: UserId,
        media_type: MediaType,
        known: KnownSet,
    ) -> Self {
        Self {
            client,
            user,
            media_type,
            known,
        }
    }

    /// Ids currently known to be blocklisted.
    #[must_use]
    pub fn known(&self) -> &KnownSet {
        &self.known
    }

    /// Consumes the reconciler, returning the known ids.
    #[must_use]
    pub fn into_known(self) -> KnownSet {
        self.known
    }

    /// Reconciles every candidate in order. Failures are logged and do not stop the run.
    pub async fn run(&mut self, candidates: &[AnimeEntry]) -> ReconcileReport {
        let mut report = ReconcileReport::default();
        for entry in candidates {
            let outcome = self.reconcile(entry).await;
            report.record(outcome);
        }

        tracing::info!(
            added = report.added,
            replaced = report.replaced,
            already_known = report.already_known,
            unmapped = report.unmapped,
            failed = report.failed,
            "reconciliation finished"
        );
        report
    }

    /// Reconciles a single candidate.
    pub async fn reconcile(&mut self, entry: &AnimeEntry) -> Outcome {
        let tmdb_id = entry.tmdb_tv;
        if tmdb_id.is_unset() {
            return Outcome::Unmapped;
        }
        if self.known.contains(tmdb_id) {
            return Outcome::AlreadyKnown;
        }

        tracing::info!("Adding {} ({})", entry.name, tmdb_id);
        let body = NewBlocklistEntry {
            media_type: self.media_type,
            tmdb_id,
            title: entry.name.clone(),
            user: self.user,
        };

        let mut attempt = Attempt::Initial;
        loop {
            match self.client.add(&body).await {
                Ok(()) => {
                    self.known.insert(tmdb_id);
                    return match attempt {
                        Attempt::Initial => Outcome::Added,
                        Attempt::Deleted => Outcome::Replaced,
                    };
                }
                Err(err) if attempt == Attempt::Initial && err.is_precondition_failed() => {
                    // TMDB shares ids between movies and series but Seerr does not tell them
                    // apart: drop the existing entry and add the series again.
                    self.known.insert(tmdb_id);
                    if let Err(err) = self.client.remove(tmdb_id).await {
                        tracing::warn!(
                            title = %entry.name,
                            %tmdb_id,
                            %err,
                            "failed to remove conflicting blocklist entry"
                        );
                        return Outcome::Failed;
                    }
                    tracing::debug!(
                        title = %entry.name,
                        %tmdb_id,
                        "removed conflicting entry, retrying"
                    );
                    attempt = Attempt::Deleted;
                }
                Err(err) => {
                    tracing::error!(
                        "Error adding {} ({}) to blocklist: {}",
                        entry.name,
                        tmdb_id,
                        err
                    );
                    return Outcome::Failed;
                }
            }
        }
    }
}
