//! Scenario: `/api/profile/sync-crew` failure handling.
//!
//! # Behavior under test
//!
//! 1. A missing or blank owner identity is rejected with 400 before any
//!    upstream or store call.
//! 2. Upstream failures surface as 502 with the matching error kind.
//! 3. Store failures surface as 500.
//! 4. No failure path ever touches the previously persisted squad.

use std::sync::Arc;

use axum::http::{Request, StatusCode};
use gf_daemon::{
    config::Config,
    routes,
    state::{AppState, SyncLocks},
};
use gf_inventory::{DirectoryClient, GalaxyClient};
use gf_schemas::{CrewRecord, NewCrew, NewProfile, PlayerProfile, ProfileUpdate};
use gf_store::{MemoryStore, ProfileStore, StoreError};
use http_body_util::BodyExt;
use httpmock::prelude::*;
use serde_json::json;
use tower::ServiceExt; // oneshot

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Store whose every operation fails at the backend.
struct FailingStore;

#[async_trait::async_trait]
impl ProfileStore for FailingStore {
    async fn all_crew(&self) -> Result<Vec<CrewRecord>, StoreError> {
        Err(StoreError::Backend("injected failure".to_string()))
    }

    async fn crew_by_das_id(&self, _das_id: &str) -> Result<Option<CrewRecord>, StoreError> {
        Err(StoreError::Backend("injected failure".to_string()))
    }

    async fn upsert_crew(&self, _member: NewCrew) -> Result<CrewRecord, StoreError> {
        Err(StoreError::Backend("injected failure".to_string()))
    }

    async fn profile_by_wallet(
        &self,
        _wallet_address: &str,
    ) -> Result<Option<PlayerProfile>, StoreError> {
        Err(StoreError::Backend("injected failure".to_string()))
    }

    async fn create_profile(&self, _profile: NewProfile) -> Result<PlayerProfile, StoreError> {
        Err(StoreError::Backend("injected failure".to_string()))
    }

    async fn update_profile(
        &self,
        _wallet_address: &str,
        _update: ProfileUpdate,
    ) -> Result<PlayerProfile, StoreError> {
        Err(StoreError::Backend("injected failure".to_string()))
    }
}

fn make_router_with(store: Arc<dyn ProfileStore>, galaxy_url: String) -> axum::Router {
    let st = Arc::new(AppState {
        config: Config::default(),
        store,
        snapshot_source: Arc::new(GalaxyClient::new_with_base_url(galaxy_url)),
        directory: Arc::new(DirectoryClient::new()),
        sync_locks: SyncLocks::default(),
    });
    routes::build_router(st)
}

async fn call(router: axum::Router, req: Request<axum::body::Body>) -> (StatusCode, bytes::Bytes) {
    let resp = router.oneshot(req).await.expect("oneshot failed");
    let status = resp.status();
    let body = resp
        .into_body()
        .collect()
        .await
        .expect("body collect failed")
        .to_bytes();
    (status, body)
}

fn parse_json(b: bytes::Bytes) -> serde_json::Value {
    serde_json::from_slice(&b).expect("body is not valid JSON")
}

fn get(uri: &str) -> Request<axum::body::Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<axum::body::Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap()
}

// ---------------------------------------------------------------------------
// 1. Missing owner identity is rejected up front
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_wallet_address_is_rejected_with_400() {
    let server = MockServer::start();
    let upstream = server.mock(|when, then| {
        when.method(GET).path_contains("/crew/inventory/");
        then.status(200).json_body(json!({ "total": 0, "crew": [] }));
    });
    let router = make_router_with(Arc::new(MemoryStore::new()), server.base_url());

    let (status, body) = call(router, post_json("/api/profile/sync-crew", json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json = parse_json(body);
    assert_eq!(json["kind"], "MissingOwnerIdentity");
    assert!(json["detail"].as_str().unwrap().contains("walletAddress"));
    // Rejected before any upstream call.
    upstream.assert_hits(0);
}

#[tokio::test]
async fn blank_wallet_address_is_rejected_with_400() {
    let router = make_router_with(
        Arc::new(MemoryStore::new()),
        "http://127.0.0.1:1".to_string(),
    );

    let (status, body) = call(
        router,
        post_json("/api/profile/sync-crew", json!({ "walletAddress": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse_json(body)["kind"], "MissingOwnerIdentity");
}

// ---------------------------------------------------------------------------
// 2. Upstream failures map to 502
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upstream_503_maps_to_upstream_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/crew/inventory/pk-a");
        then.status(503);
    });
    let router = make_router_with(Arc::new(MemoryStore::new()), server.base_url());

    let (status, body) = call(
        router,
        post_json(
            "/api/profile/sync-crew",
            json!({ "walletAddress": "wallet-1", "playerProfilePubkey": "pk-a" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let json = parse_json(body);
    assert_eq!(json["kind"], "UpstreamUnavailable");
    assert!(json["detail"].as_str().unwrap().contains("503"));
}

#[tokio::test]
async fn malformed_upstream_body_maps_to_invalid_response_shape() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/crew/inventory/pk-a");
        then.status(200).json_body(json!({ "unexpected": true }));
    });
    let router = make_router_with(Arc::new(MemoryStore::new()), server.base_url());

    let (status, body) = call(
        router,
        post_json(
            "/api/profile/sync-crew",
            json!({ "walletAddress": "wallet-1", "playerProfilePubkey": "pk-a" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(parse_json(body)["kind"], "InvalidResponseShape");
}

// ---------------------------------------------------------------------------
// 3. Store failures map to 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_failure_maps_to_profile_store_failure() {
    let router = make_router_with(Arc::new(FailingStore), "http://127.0.0.1:1".to_string());

    let (status, body) = call(
        router,
        post_json(
            "/api/profile/sync-crew",
            json!({ "walletAddress": "wallet-1" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json = parse_json(body);
    assert_eq!(json["kind"], "ProfileStoreFailure");
    assert!(json["detail"].as_str().unwrap().contains("injected failure"));
}

// ---------------------------------------------------------------------------
// 4. Failed syncs never touch the persisted squad
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_sync_leaves_the_previous_squad_untouched() {
    let server = MockServer::start();
    mount_inventory(&server, "pk-good", &["c1", "c2", "c3"]);
    server.mock(|when, then| {
        when.method(GET).path("/crew/inventory/pk-broken");
        then.status(503);
    });
    let router = make_router_with(Arc::new(MemoryStore::new()), server.base_url());

    // Establish a squad through a healthy source.
    let (status, _) = call(
        router.clone(),
        post_json(
            "/api/profile/sync-crew",
            json!({ "walletAddress": "wallet-1", "playerProfilePubkey": "pk-good" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // A sync through a broken source fails without a write.
    let (status, _) = call(
        router.clone(),
        post_json(
            "/api/profile/sync-crew",
            json!({ "walletAddress": "wallet-1", "playerProfilePubkey": "pk-broken" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (_, body) = call(router, get("/api/profile?walletAddress=wallet-1")).await;
    let profile = parse_json(body);
    assert_eq!(profile["selectedCrewIds"], json!(["c1", "c2", "c3"]));
    // The failed explicit source was not persisted either.
    assert_eq!(profile["playerProfilePubkey"], "pk-good");
}

fn mount_inventory(server: &MockServer, pubkey: &str, ids: &[&str]) {
    let path = format!("/crew/inventory/{pubkey}");
    let members: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| {
            json!({
                "_id": format!("db-{id}"),
                "dasID": id,
                "faction": "ONI",
                "species": "Human",
                "sex": "Female",
                "name": format!("Crew {id}"),
                "age": 29.0,
                "openness": 0.5,
                "conscientiousness": 0.5,
                "extraversion": 0.5,
                "agreeableness": 0.5,
                "neuroticism": 0.5,
                "rarity": "Common"
            })
        })
        .collect();
    let body = json!({ "total": ids.len(), "crew": members });
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(200).json_body(body);
    });
}
