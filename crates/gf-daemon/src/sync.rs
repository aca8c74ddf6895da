//! Squad synchronization, the daemon's core write path.
//!
//! One sync reads the profile's previous squad, fetches the owner's current
//! inventory, reconciles the two, and persists the result. The whole
//! read-reconcile-write window runs under the wallet's sync lock, so
//! concurrent syncs for one wallet serialize while other wallets proceed.
//! Any failure before the final write leaves the stored squad untouched.

use gf_roster::{reconcile, SQUAD_SIZE};
use gf_schemas::{PlayerProfile, ProfileUpdate};
use gf_store::StoreError;
use tracing::info;

use crate::api_types::SyncResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Fetch the profile for `wallet_address`, creating it with game defaults on
/// first contact. A concurrent create by another request is tolerated: on a
/// duplicate error the winner's profile is re-read and returned.
pub async fn ensure_profile(
    state: &AppState,
    wallet_address: &str,
) -> Result<PlayerProfile, ApiError> {
    if let Some(profile) = state.store.profile_by_wallet(wallet_address).await? {
        return Ok(profile);
    }

    let seed = state.config.default_profile_seed(wallet_address);
    match state.store.create_profile(seed).await {
        Ok(profile) => Ok(profile),
        Err(StoreError::Duplicate(_)) => state
            .store
            .profile_by_wallet(wallet_address)
            .await?
            .ok_or_else(|| {
                ApiError::ProfileStoreFailure(
                    "profile vanished after duplicate create".to_string(),
                )
            }),
        Err(err) => Err(err.into()),
    }
}

/// Run one full squad sync for `wallet_address`.
///
/// The inventory-source identity resolves in order: the explicit request
/// value, the profile's stored association, the configured default. An
/// explicit value is persisted alongside the squad; a resolved fallback is
/// not.
pub async fn sync_profile(
    state: &AppState,
    wallet_address: &str,
    explicit_pubkey: Option<String>,
) -> Result<SyncResponse, ApiError> {
    let _guard = state.sync_locks.acquire(wallet_address).await;

    let profile = ensure_profile(state, wallet_address).await?;
    let previous = profile.selected_crew_ids;

    let source_id = explicit_pubkey
        .clone()
        .or(profile.player_profile_pubkey)
        .unwrap_or_else(|| state.config.default_profile_id.clone());

    let snapshot = state.snapshot_source.fetch_snapshot(&source_id).await?;
    let inventory = snapshot.crew_ids();

    // ThreadRng is not Send; scope it so it is gone before the next await.
    let report = {
        let mut rng = rand::thread_rng();
        reconcile(&previous, &inventory, SQUAD_SIZE, &mut rng)
    };

    let update = ProfileUpdate {
        selected_crew_ids: Some(report.squad.clone()),
        player_profile_pubkey: explicit_pubkey,
        ..Default::default()
    };
    state.store.update_profile(wallet_address, update).await?;

    info!(
        wallet = wallet_address,
        source = source_id.as_str(),
        inventory = inventory.len(),
        selected = report.squad.len(),
        replaced = report.replaced_count,
        "squad sync complete"
    );

    let message = report.summary();
    Ok(SyncResponse {
        selected_size: report.squad.len(),
        squad: report.squad,
        total_inventory_size: inventory.len(),
        replaced_count: report.replaced_count,
        message,
    })
}
