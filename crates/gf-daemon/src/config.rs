//! Runtime configuration for gf-daemon.
//!
//! Everything has a working default so `cargo run` serves the demo profile
//! with no setup; env vars override the pieces deployments care about.

use std::net::SocketAddr;

use gf_schemas::NewProfile;

/// Demo wallet whose crew inventory backs the default experience.
const DEFAULT_PROFILE_ID: &str = "B9JCkYPmqCeBzVGNq6jXqXnFqazrCTUSvD4Kd4HTTH3m";

const DEFAULT_GALAXY_URL: &str = "https://galaxy.staratlas.com";
const DEFAULT_DIRECTORY_URL: &str = "http://localhost:3001";

const DEFAULT_TEAM_NAME: &str = "My Team";
const STARTER_PERK: &str = "iron-defense";

#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address; `GF_DAEMON_ADDR` overrides.
    pub bind_addr: SocketAddr,
    /// Crew inventory API base; `GF_GALAXY_URL` overrides.
    pub galaxy_base_url: String,
    /// Player-profile directory service base; `GF_DIRECTORY_URL` overrides.
    pub directory_base_url: String,
    /// Fallback owner/source identity when a request names none;
    /// `GF_PLAYER_PROFILE_ID` overrides.
    pub default_profile_id: String,
    /// Formation assigned to freshly created profiles.
    pub default_formation: String,
    /// Starting currency balance for freshly created profiles.
    pub default_atlas_balance: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8787)),
            galaxy_base_url: DEFAULT_GALAXY_URL.to_string(),
            directory_base_url: DEFAULT_DIRECTORY_URL.to_string(),
            default_profile_id: DEFAULT_PROFILE_ID.to_string(),
            default_formation: "442".to_string(),
            default_atlas_balance: 1250,
        }
    }
}

impl Config {
    /// Defaults overlaid with whatever env vars are set. Unparseable values
    /// fall back to the default rather than failing boot.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(addr) = std::env::var("GF_DAEMON_ADDR")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.bind_addr = addr;
        }
        if let Ok(url) = std::env::var("GF_GALAXY_URL") {
            config.galaxy_base_url = url;
        }
        if let Ok(url) = std::env::var("GF_DIRECTORY_URL") {
            config.directory_base_url = url;
        }
        if let Ok(id) = std::env::var("GF_PLAYER_PROFILE_ID") {
            config.default_profile_id = id;
        }
        config
    }

    /// Seed for a profile created on first contact with an owner identity:
    /// default team name, formation, starting balance, starter perk, and an
    /// empty squad.
    pub fn default_profile_seed(&self, wallet_address: &str) -> NewProfile {
        NewProfile {
            wallet_address: wallet_address.to_string(),
            team_name: Some(DEFAULT_TEAM_NAME.to_string()),
            formation: Some(self.default_formation.clone()),
            selected_crew_ids: Some(Vec::new()),
            atlas_balance: Some(self.default_atlas_balance),
            owned_perks: Some(vec![STARTER_PERK.to_string()]),
            ..Default::default()
        }
    }
}
