//! gf-schemas
//!
//! Shared data contracts for the Galia Football backend. Pure serde types,
//! no business logic lives here. Wire casing is camelCase to match the
//! existing client and the upstream galaxy API (`dasID` is preserved exactly
//! as the upstream spells it).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Crew
// ---------------------------------------------------------------------------

/// Big Five personality traits as reported by the upstream inventory, each in
/// `[0.0, 1.0]`. Game stats are derived from these downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrewTraits {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

/// Derived in-game stats for one crew member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub defense: i64,
    pub attack: i64,
    pub stamina: i64,
}

/// One cached crew member: upstream identity + traits, enriched with derived
/// game stats at fetch time. `das_id` is the stable ownership identifier; the
/// record `id` is synthesized by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewRecord {
    pub id: Uuid,
    #[serde(rename = "dasID")]
    pub das_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mint_offset: Option<u32>,
    pub faction: String,
    pub species: String,
    pub sex: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    pub age: f64,
    #[serde(flatten)]
    pub traits: CrewTraits,
    pub rarity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aptitudes: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub stats: GameStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

// ---------------------------------------------------------------------------
// Player profile
// ---------------------------------------------------------------------------

/// A player's persisted game profile, keyed by wallet address.
///
/// `selected_crew_ids` is the active squad: an ordered list of crew `dasID`s,
/// at most 15 long, no duplicates. Order is significant because it drives
/// on-field position assignment in the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub id: Uuid,
    pub wallet_address: String,
    /// On-chain profile the inventory was last synced from, if any.
    pub player_profile_pubkey: Option<String>,
    pub team_name: Option<String>,
    pub formation: String,
    pub selected_crew_ids: Vec<String>,
    pub wins: i64,
    pub losses: i64,
    pub draws: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub atlas_balance: i64,
    pub owned_perks: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial profile update. `None` fields are left untouched by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub player_profile_pubkey: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub formation: Option<String>,
    #[serde(default)]
    pub selected_crew_ids: Option<Vec<String>>,
    #[serde(default)]
    pub wins: Option<i64>,
    #[serde(default)]
    pub losses: Option<i64>,
    #[serde(default)]
    pub draws: Option<i64>,
    #[serde(default)]
    pub goals_for: Option<i64>,
    #[serde(default)]
    pub goals_against: Option<i64>,
    #[serde(default)]
    pub atlas_balance: Option<i64>,
    #[serde(default)]
    pub owned_perks: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Store input contracts
// ---------------------------------------------------------------------------

/// Input for creating a crew-cache entry. The record `id` is synthesized by
/// the store; everything else is supplied by the caller (upstream fields plus
/// derived stats).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCrew {
    #[serde(rename = "dasID")]
    pub das_id: String,
    pub mint_offset: Option<u32>,
    pub faction: String,
    pub species: String,
    pub sex: String,
    pub name: String,
    pub university: Option<String>,
    pub age: f64,
    #[serde(flatten)]
    pub traits: CrewTraits,
    pub rarity: String,
    pub aptitudes: Option<Value>,
    pub appearance: Option<Value>,
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub stats: GameStats,
    pub updated_at: Option<String>,
    pub created_at: Option<String>,
}

/// Input for creating a player profile. `id` and the timestamps are
/// synthesized by the store; unset fields fall back to game defaults
/// (formation `"442"`, zeroed record, empty squad and perks).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub wallet_address: String,
    pub player_profile_pubkey: Option<String>,
    pub team_name: Option<String>,
    pub formation: Option<String>,
    pub selected_crew_ids: Option<Vec<String>>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub draws: Option<i64>,
    pub goals_for: Option<i64>,
    pub goals_against: Option<i64>,
    pub atlas_balance: Option<i64>,
    pub owned_perks: Option<Vec<String>>,
}
