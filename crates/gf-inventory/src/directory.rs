//! Player-profile directory client.
//!
//! Talks to the companion on-chain directory service: lists the player
//! profiles owned by a wallet and answers "is the service up" with a cached
//! probe so hot paths never hammer the health endpoint.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::warn;

use crate::source::InventoryError;

const DEFAULT_BASE_URL: &str = "http://localhost:3001";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// How long a health probe result stays valid before the next caller pays
/// for a fresh one.
const HEALTH_CACHE_TTL: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// One on-chain player profile owned by a wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryProfile {
    pub pubkey: String,
    pub authority: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Directory answer for one wallet lookup. Keys are snake_case on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDirectoryResponse {
    pub wallet_address: String,
    pub profiles: Vec<DirectoryProfile>,
    pub count: u64,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

struct HealthProbe {
    available: bool,
    checked_at: Instant,
}

/// Directory-service client with a TTL-cached availability probe.
///
/// Not `Clone`; share it behind an `Arc` so all callers see one probe cache.
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: String,
    last_probe: Mutex<Option<HealthProbe>>,
}

impl DirectoryClient {
    pub fn new() -> Self {
        Self::new_with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn new_with_base_url(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            last_probe: Mutex::new(None),
        }
    }

    /// List the player profiles owned by `wallet_address`.
    pub async fn player_profiles(
        &self,
        wallet_address: &str,
    ) -> Result<ProfileDirectoryResponse, InventoryError> {
        let url = format!(
            "{}/api/player-profiles",
            self.base_url.trim_end_matches('/')
        );

        let resp = self
            .http
            .get(url)
            .query(&[("wallet_address", wallet_address)])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| InventoryError::Unavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(InventoryError::Unavailable(format!(
                "directory returned status {}",
                status.as_u16()
            )));
        }

        resp.json::<ProfileDirectoryResponse>()
            .await
            .map_err(|e| InventoryError::InvalidShape(e.to_string()))
    }

    /// Whether the directory service is reachable. The result is cached for
    /// [`HEALTH_CACHE_TTL`]; pass `force_refresh` to probe unconditionally.
    ///
    /// The cache lock is held across the probe, so concurrent callers after
    /// an expiry share one refresh instead of racing their own.
    pub async fn is_available(&self, force_refresh: bool) -> bool {
        let mut probe = self.last_probe.lock().await;

        if !force_refresh {
            if let Some(last) = probe.as_ref() {
                if last.checked_at.elapsed() < HEALTH_CACHE_TTL {
                    return last.available;
                }
            }
        }

        let available = self.probe_health().await;
        *probe = Some(HealthProbe {
            available,
            checked_at: Instant::now(),
        });
        available
    }

    async fn probe_health(&self) -> bool {
        let url = format!("{}/health", self.base_url.trim_end_matches('/'));
        match self.http.get(url).timeout(HEALTH_TIMEOUT).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(err) => {
                warn!(error = %err, "directory health probe failed");
                false
            }
        }
    }
}

impl Default for DirectoryClient {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests (local mock server, no network)
// ---------------------------------------------------------------------------
