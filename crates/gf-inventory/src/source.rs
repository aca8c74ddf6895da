//! Source boundary for crew-ownership snapshots.
//!
//! This module defines **only** the raw crew types, the snapshot-source trait,
//! and the error type shared by every concrete source. No HTTP clients, no
//! stat derivation, and no caching logic belong here.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Raw crew member
// ---------------------------------------------------------------------------

/// One crew unit exactly as returned by an upstream ownership source.
///
/// Trait scores stay as the upstream floats in `[0, 1]`; game-stat derivation
/// happens downstream so the boundary carries no derived values. Field names
/// follow the upstream wire contract (`_id` and `dasID` are verbatim keys,
/// the rest is camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCrewMember {
    /// Upstream database id, not the ownership key.
    #[serde(rename = "_id")]
    pub id: String,
    /// Digital-asset id: the unique, immutable ownership identifier. This is
    /// the key squads are built from.
    #[serde(rename = "dasID")]
    pub das_id: String,
    pub mint_offset: Option<u32>,
    pub faction: String,
    pub species: String,
    pub sex: String,
    pub name: String,
    pub university: Option<String>,
    pub age: f64,
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
    pub rarity: String,
    pub aptitudes: Option<HashMap<String, String>>,
    pub appearance: Option<serde_json::Map<String, serde_json::Value>>,
    pub image_url: Option<String>,
    pub updated_at: Option<String>,
    pub created_at: Option<String>,
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// A full ownership snapshot for one inventory-source identity.
///
/// `crew` keeps the upstream order; callers that need a deduplicated id list
/// derive it themselves (first occurrence wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewSnapshot {
    pub total: u64,
    pub crew: Vec<RawCrewMember>,
}

impl CrewSnapshot {
    /// Owned crew ids in snapshot order, duplicates removed (first occurrence
    /// wins). This is the inventory handed to squad reconciliation, which
    /// requires a duplicate-free input.
    pub fn crew_ids(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.crew.len());
        let mut ids = Vec::with_capacity(self.crew.len());
        for member in &self.crew {
            if seen.insert(member.das_id.as_str()) {
                ids.push(member.das_id.clone());
            }
        }
        ids
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors a [`SnapshotSource`] implementation may return.
#[derive(Debug)]
pub enum InventoryError {
    /// The upstream source did not respond, timed out, or answered with a
    /// non-success status.
    Unavailable(String),
    /// The upstream responded but the payload failed schema validation.
    InvalidShape(String),
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::Unavailable(msg) => write!(f, "upstream unavailable: {msg}"),
            InventoryError::InvalidShape(msg) => write!(f, "invalid response shape: {msg}"),
        }
    }
}

impl std::error::Error for InventoryError {}

// ---------------------------------------------------------------------------
// Source trait
// ---------------------------------------------------------------------------

/// Upstream crew-ownership source contract.
///
/// Implementations must be `Send + Sync` so a shared handle can serve
/// concurrent sync requests, and object-safe so callers can hold an
/// `Arc<dyn SnapshotSource>` without knowing the concrete type.
#[async_trait::async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Human-readable name identifying this source (e.g. `"galaxy"`).
    fn source_name(&self) -> &'static str;

    /// Fetch the current ownership snapshot for `source_id`.
    ///
    /// Returns crew in the order supplied by the upstream; callers are
    /// responsible for deduplication (see [`CrewSnapshot::crew_ids`]).
    async fn fetch_snapshot(&self, source_id: &str) -> Result<CrewSnapshot, InventoryError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
