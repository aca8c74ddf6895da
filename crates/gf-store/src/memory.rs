//! In-memory [`ProfileStore`] backend.
//!
//! Both maps are indexed by their domain key (wallet address for profiles,
//! `dasID` for crew), so lookups never scan. `BTreeMap` keeps listing order
//! deterministic across runs.

use std::collections::BTreeMap;

use chrono::Utc;
use gf_schemas::{CrewRecord, NewCrew, NewProfile, PlayerProfile, ProfileUpdate};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{ProfileStore, StoreError};

const DEFAULT_FORMATION: &str = "442";

/// Process-local store. Cheap to construct; share it behind an `Arc` so all
/// handlers see the same data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: RwLock<BTreeMap<String, PlayerProfile>>,
    crew: RwLock<BTreeMap<String, CrewRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ProfileStore for MemoryStore {
    async fn all_crew(&self) -> Result<Vec<CrewRecord>, StoreError> {
        let crew = self.crew.read().await;
        Ok(crew.values().cloned().collect())
    }

    async fn crew_by_das_id(&self, das_id: &str) -> Result<Option<CrewRecord>, StoreError> {
        let crew = self.crew.read().await;
        Ok(crew.get(das_id).cloned())
    }

    async fn upsert_crew(&self, member: NewCrew) -> Result<CrewRecord, StoreError> {
        let mut crew = self.crew.write().await;

        // Refreshes keep the originally synthesized record id.
        let id = crew
            .get(&member.das_id)
            .map(|existing| existing.id)
            .unwrap_or_else(Uuid::new_v4);

        let record = CrewRecord {
            id,
            das_id: member.das_id,
            mint_offset: member.mint_offset,
            faction: member.faction,
            species: member.species,
            sex: member.sex,
            name: member.name,
            university: member.university,
            age: member.age,
            traits: member.traits,
            rarity: member.rarity,
            aptitudes: member.aptitudes,
            appearance: member.appearance,
            image_url: member.image_url,
            stats: member.stats,
            updated_at: member.updated_at,
            created_at: member.created_at,
        };
        crew.insert(record.das_id.clone(), record.clone());
        Ok(record)
    }

    async fn profile_by_wallet(
        &self,
        wallet_address: &str,
    ) -> Result<Option<PlayerProfile>, StoreError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(wallet_address).cloned())
    }

    async fn create_profile(&self, profile: NewProfile) -> Result<PlayerProfile, StoreError> {
        let mut profiles = self.profiles.write().await;
        if profiles.contains_key(&profile.wallet_address) {
            return Err(StoreError::Duplicate(profile.wallet_address));
        }

        let now = Utc::now();
        let record = PlayerProfile {
            id: Uuid::new_v4(),
            wallet_address: profile.wallet_address.clone(),
            player_profile_pubkey: profile.player_profile_pubkey,
            team_name: profile.team_name,
            formation: profile
                .formation
                .unwrap_or_else(|| DEFAULT_FORMATION.to_string()),
            selected_crew_ids: profile.selected_crew_ids.unwrap_or_default(),
            wins: profile.wins.unwrap_or(0),
            losses: profile.losses.unwrap_or(0),
            draws: profile.draws.unwrap_or(0),
            goals_for: profile.goals_for.unwrap_or(0),
            goals_against: profile.goals_against.unwrap_or(0),
            atlas_balance: profile.atlas_balance.unwrap_or(0),
            owned_perks: profile.owned_perks.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        profiles.insert(record.wallet_address.clone(), record.clone());
        Ok(record)
    }

    async fn update_profile(
        &self,
        wallet_address: &str,
        update: ProfileUpdate,
    ) -> Result<PlayerProfile, StoreError> {
        let mut profiles = self.profiles.write().await;
        let record = profiles
            .get_mut(wallet_address)
            .ok_or_else(|| StoreError::NotFound(wallet_address.to_string()))?;

        if let Some(v) = update.player_profile_pubkey {
            record.player_profile_pubkey = Some(v);
        }
        if let Some(v) = update.team_name {
            record.team_name = Some(v);
        }
        if let Some(v) = update.formation {
            record.formation = v;
        }
        if let Some(v) = update.selected_crew_ids {
            record.selected_crew_ids = v;
        }
        if let Some(v) = update.wins {
            record.wins = v;
        }
        if let Some(v) = update.losses {
            record.losses = v;
        }
        if let Some(v) = update.draws {
            record.draws = v;
        }
        if let Some(v) = update.goals_for {
            record.goals_for = v;
        }
        if let Some(v) = update.goals_against {
            record.goals_against = v;
        }
        if let Some(v) = update.atlas_balance {
            record.atlas_balance = v;
        }
        if let Some(v) = update.owned_perks {
            record.owned_perks = v;
        }
        record.updated_at = Utc::now();

        Ok(record.clone())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
