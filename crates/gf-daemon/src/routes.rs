//! Axum router and all HTTP handlers for gf-daemon.
//!
//! `build_router` is the single entry point; `main.rs` calls it and attaches
//! middleware layers.  All handlers are `pub(crate)` so the scenario tests in
//! `tests/` can compose the router directly.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use gf_inventory::ProfileDirectoryResponse;
use gf_schemas::PlayerProfile;
use tracing::info;

use crate::{
    api_types::{
        CrewQuery, CrewResponse, HealthResponse, ProfilePatchRequest, ProfileQuery, SyncRequest,
        SyncResponse, WalletQuery,
    },
    error::ApiError,
    state::AppState,
    stats::enrich_member,
    sync,
};

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the complete application router wired to the given shared state.
///
/// Middleware layers (CORS, tracing) are **not** applied here; `main.rs`
/// attaches them after this call so tests can use the bare router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/crew", get(crew))
        .route("/api/crew/cached", get(crew_cached))
        .route("/api/profile", get(profile_get).patch(profile_patch))
        .route("/api/profile/sync-crew", post(sync_crew))
        .route("/api/blockchain/player-profiles", get(player_profiles))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// GET /api/health
// ---------------------------------------------------------------------------

pub(crate) async fn health(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    let directory_available = st.directory.is_available(false).await;
    (
        StatusCode::OK,
        Json(HealthResponse {
            ok: true,
            service: "gf-daemon".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            directory_available,
        }),
    )
}

// ---------------------------------------------------------------------------
// GET /api/crew
// ---------------------------------------------------------------------------

/// Proxy the upstream inventory for one source identity, enrich every member
/// with derived game stats, and refresh the crew cache with the result.
pub(crate) async fn crew(
    State(st): State<Arc<AppState>>,
    Query(query): Query<CrewQuery>,
) -> Result<Json<CrewResponse>, ApiError> {
    let profile_id = query
        .profile_id
        .unwrap_or_else(|| st.config.default_profile_id.clone());

    info!(
        source = st.snapshot_source.source_name(),
        profile_id = profile_id.as_str(),
        "fetching crew inventory"
    );
    let snapshot = st.snapshot_source.fetch_snapshot(&profile_id).await?;

    let mut crew = Vec::with_capacity(snapshot.crew.len());
    for raw in snapshot.crew {
        // ThreadRng is not Send; scope it away from the await below.
        let member = {
            let mut rng = rand::thread_rng();
            enrich_member(raw, &mut rng)
        };
        let record = st.store.upsert_crew(member).await?;
        crew.push(record);
    }

    Ok(Json(CrewResponse {
        total: crew.len(),
        crew,
        profile_id: Some(profile_id),
    }))
}

// ---------------------------------------------------------------------------
// GET /api/crew/cached
// ---------------------------------------------------------------------------

pub(crate) async fn crew_cached(
    State(st): State<Arc<AppState>>,
) -> Result<Json<CrewResponse>, ApiError> {
    let crew = st.store.all_crew().await?;
    Ok(Json(CrewResponse {
        total: crew.len(),
        crew,
        profile_id: None,
    }))
}

// ---------------------------------------------------------------------------
// GET /api/profile
// ---------------------------------------------------------------------------

/// Fetch the caller's profile, creating it with game defaults on first
/// contact. An absent identity falls back to the configured demo profile.
pub(crate) async fn profile_get(
    State(st): State<Arc<AppState>>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<PlayerProfile>, ApiError> {
    let wallet = query
        .wallet_address
        .filter(|w| !w.trim().is_empty())
        .unwrap_or_else(|| st.config.default_profile_id.clone());

    let profile = sync::ensure_profile(&st, &wallet).await?;
    Ok(Json(profile))
}

// ---------------------------------------------------------------------------
// PATCH /api/profile
// ---------------------------------------------------------------------------

/// Apply a partial update. Unlike GET, this never creates: updating an
/// owner that has no profile is a store failure.
pub(crate) async fn profile_patch(
    State(st): State<Arc<AppState>>,
    Json(body): Json<ProfilePatchRequest>,
) -> Result<Json<PlayerProfile>, ApiError> {
    let wallet = body
        .wallet_address
        .filter(|w| !w.trim().is_empty())
        .unwrap_or_else(|| st.config.default_profile_id.clone());

    let profile = st.store.update_profile(&wallet, body.update).await?;
    Ok(Json(profile))
}

// ---------------------------------------------------------------------------
// POST /api/profile/sync-crew
// ---------------------------------------------------------------------------

/// Reconcile the caller's squad against current on-chain ownership.
///
/// The owner identity is required here: a squad write must never fall back
/// to the demo profile, so an absent or blank `walletAddress` is rejected
/// before any upstream or store call.
pub(crate) async fn sync_crew(
    State(st): State<Arc<AppState>>,
    Json(body): Json<SyncRequest>,
) -> Result<Json<SyncResponse>, ApiError> {
    let wallet = match body.wallet_address {
        Some(w) if !w.trim().is_empty() => w,
        _ => {
            return Err(ApiError::MissingOwnerIdentity(
                "walletAddress is required to sync a squad".to_string(),
            ))
        }
    };

    let response = sync::sync_profile(&st, &wallet, body.player_profile_pubkey).await?;
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// GET /api/blockchain/player-profiles
// ---------------------------------------------------------------------------

/// List the on-chain player profiles owned by a wallet, forwarded verbatim
/// from the profile directory service.
pub(crate) async fn player_profiles(
    State(st): State<Arc<AppState>>,
    Query(query): Query<WalletQuery>,
) -> Result<Json<ProfileDirectoryResponse>, ApiError> {
    let wallet = match query.wallet_address {
        Some(w) if !w.trim().is_empty() => w,
        _ => {
            return Err(ApiError::MissingOwnerIdentity(
                "walletAddress query parameter is required".to_string(),
            ))
        }
    };

    let response = st.directory.player_profiles(&wallet).await?;
    Ok(Json(response))
}
