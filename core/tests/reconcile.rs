// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Reconciliation loop tests.
//!
//! Every test mounts a low-priority catch-all that answers `500` and is expected to never be hit,
//! so any unexpected request fails the test when the mock server is dropped.

mod common;

use anibl_core::{AnimeEntry, KnownSet, Outcome, ReconcileReport, Reconciler};
use anibl_seerr::{MediaType, TmdbId, UserId};
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{BLOCKLIST_PATH, add_body, blocklist_client};

const USER: UserId = UserId::new(7);

async fn forbid_unexpected_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .with_priority(u8::MAX)
        .expect(0)
        .mount(server)
        .await;
}

fn known(ids: &[u64]) -> KnownSet {
    ids.iter().copied().map(TmdbId::new).collect()
}

#[tokio::test]
async fn reconcile_adds_only_missing_mapped_candidates() {
    let mock_server = MockServer::start().await;
    forbid_unexpected_requests(&mock_server).await;

    Mock::given(method("POST"))
        .and(path(BLOCKLIST_PATH))
        .and(body_json(add_body(300, "B", 7)))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = blocklist_client(&mock_server);
    let mut reconciler = Reconciler::new(&client, USER, MediaType::Tv, known(&[100, 200]));
    let candidates = [
        AnimeEntry::new("A", 100),
        AnimeEntry::new("B", 300),
        AnimeEntry::new("C", 0),
    ];
    let report = reconciler.run(&candidates).await;

    assert_eq!(
        report,
        ReconcileReport {
            added: 1,
            already_known: 1,
            unmapped: 1,
            ..Default::default()
        }
    );
    assert_eq!(reconciler.into_known(), known(&[100, 200, 300]));
}

#[tokio::test]
async fn reconcile_twice_issues_no_additions_the_second_time() {
    let mock_server = MockServer::start().await;
    forbid_unexpected_requests(&mock_server).await;

    Mock::given(method("POST"))
        .and(path(BLOCKLIST_PATH))
        .respond_with(ResponseTemplate::new(201))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = blocklist_client(&mock_server);
    let candidates = [AnimeEntry::new("X", 1), AnimeEntry::new("Y", 2)];

    let mut first = Reconciler::new(&client, USER, MediaType::Tv, KnownSet::default());
    let report = first.run(&candidates).await;
    assert_eq!(report.added, 2);

    let mut second = Reconciler::new(&client, USER, MediaType::Tv, first.into_known());
    let report = second.run(&candidates).await;
    assert_eq!(report.added, 0);
    assert_eq!(report.already_known, 2);
}

#[tokio::test]
async fn reconcile_collision_deletes_and_retries_once() {
    let mock_server = MockServer::start().await;
    forbid_unexpected_requests(&mock_server).await;

    Mock::given(method("POST"))
        .and(path(BLOCKLIST_PATH))
        .and(body_json(add_body(400, "D", 7)))
        .respond_with(ResponseTemplate::new(412))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{BLOCKLIST_PATH}/400")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path(BLOCKLIST_PATH))
        .and(body_json(add_body(400, "D", 7)))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = blocklist_client(&mock_server);
    let mut reconciler = Reconciler::new(&client, USER, MediaType::Tv, KnownSet::default());
    let outcome = reconciler.reconcile(&AnimeEntry::new("D", 400)).await;

    assert_eq!(outcome, Outcome::Replaced);
    assert!(reconciler.known().contains(TmdbId::new(400)));
}

#[tokio::test]
async fn reconcile_second_collision_is_final() {
    let mock_server = MockServer::start().await;
    forbid_unexpected_requests(&mock_server).await;

    Mock::given(method("POST"))
        .and(path(BLOCKLIST_PATH))
        .respond_with(ResponseTemplate::new(412))
        .expect(2)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{BLOCKLIST_PATH}/400")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = blocklist_client(&mock_server);
    let mut reconciler = Reconciler::new(&client, USER, MediaType::Tv, KnownSet::default());
    let outcome = reconciler.reconcile(&AnimeEntry::new("D", 400)).await;

    assert_eq!(outcome, Outcome::Failed);
    assert!(reconciler.known().contains(TmdbId::new(400)));
}

#[tokio::test]
async fn reconcile_failed_delete_abandons_candidate() {
    let mock_server = MockServer::start().await;
    forbid_unexpected_requests(&mock_server).await;

    Mock::given(method("POST"))
        .and(path(BLOCKLIST_PATH))
        .respond_with(ResponseTemplate::new(412))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{BLOCKLIST_PATH}/400")))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = blocklist_client(&mock_server);
    let mut reconciler = Reconciler::new(&client, USER, MediaType::Tv, KnownSet::default());
    let candidates = [AnimeEntry::new("D", 400), AnimeEntry::new("D again", 400)];
    let report = reconciler.run(&candidates).await;

    // The id is marked known, so the duplicate candidate is not retried.
    assert_eq!(report.failed, 1);
    assert_eq!(report.already_known, 1);
}

#[tokio::test]
async fn reconcile_other_failures_do_not_stop_the_run() {
    let mock_server = MockServer::start().await;
    forbid_unexpected_requests(&mock_server).await;

    Mock::given(method("POST"))
        .and(path(BLOCKLIST_PATH))
        .and(body_json(add_body(1, "Broken", 7)))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path(BLOCKLIST_PATH))
        .and(body_json(add_body(2, "Fine", 7)))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = blocklist_client(&mock_server);
    let mut reconciler = Reconciler::new(&client, USER, MediaType::Tv, KnownSet::default());
    let candidates = [AnimeEntry::new("Broken", 1), AnimeEntry::new("Fine", 2)];
    let report = reconciler.run(&candidates).await;

    assert_eq!(report.failed, 1);
    assert_eq!(report.added, 1);
    assert!(!reconciler.known().contains(TmdbId::new(1)));
    assert!(reconciler.known().contains(TmdbId::new(2)));
}

#[tokio::test]
async fn reconcile_unmapped_candidates_make_no_requests() {
    let mock_server = MockServer::start().await;
    forbid_unexpected_requests(&mock_server).await;

    let client = blocklist_client(&mock_server);
    let mut reconciler = Reconciler::new(&client, USER, MediaType::Tv, KnownSet::default());
    let candidates = [AnimeEntry::new("Movie only", 0), AnimeEntry::new("Unknown", 0)];
    let report = reconciler.run(&candidates).await;

    assert_eq!(report.unmapped, 2);
    assert!(reconciler.known().is_empty());
}
