//! Request and response types for all gf-daemon HTTP endpoints.
//!
//! These types are `Serialize + Deserialize` so they can be JSON-encoded by
//! Axum and decoded by tests. No business logic lives here. The wire casing
//! is camelCase throughout to match the web client.

use gf_schemas::{CrewRecord, ProfileUpdate};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// /api/health
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub ok: bool,
    pub service: String,
    pub version: String,
    /// Cached availability of the player-profile directory service.
    pub directory_available: bool,
}

// ---------------------------------------------------------------------------
// /api/crew  /api/crew/cached
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewQuery {
    #[serde(default)]
    pub profile_id: Option<String>,
}

/// Crew listing, either freshly proxied (`profile_id` set) or served from
/// the cache (`profile_id` absent).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewResponse {
    pub total: usize,
    pub crew: Vec<CrewRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
}

// ---------------------------------------------------------------------------
// /api/profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileQuery {
    #[serde(default)]
    pub wallet_address: Option<String>,
}

/// PATCH body: optional owner identity plus the partial update itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatchRequest {
    #[serde(default)]
    pub wallet_address: Option<String>,
    #[serde(flatten)]
    pub update: ProfileUpdate,
}

// ---------------------------------------------------------------------------
// /api/blockchain/player-profiles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletQuery {
    #[serde(default)]
    pub wallet_address: Option<String>,
}

// ---------------------------------------------------------------------------
// /api/profile/sync-crew
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    /// Owner identity. Required; its absence is the one client error the
    /// sync endpoint rejects outright.
    #[serde(default)]
    pub wallet_address: Option<String>,
    /// Explicit inventory-source identity. `null` means "resolve one for
    /// me": the stored association first, the configured default last.
    #[serde(default)]
    pub player_profile_pubkey: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    /// The persisted squad, retained members first.
    pub squad: Vec<String>,
    /// Distinct crew ids in the fetched inventory.
    pub total_inventory_size: usize,
    /// Squad length after reconciliation.
    pub selected_size: usize,
    /// Slots filled from the reserve pool on this sync.
    pub replaced_count: usize,
    /// Human-readable one-liner ("no change", "N replaced", "initial squad").
    pub message: String,
}
