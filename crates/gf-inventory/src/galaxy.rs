//! Galaxy-backed snapshot source.
//!
//! Fetches the crew inventory for a player profile from the Star Atlas
//! galaxy API. The profile id is path-scoped; no credentials are involved.

use std::time::Duration;

use crate::source::{CrewSnapshot, InventoryError, SnapshotSource};

const DEFAULT_BASE_URL: &str = "https://galaxy.staratlas.com";

/// Upstream calls are bounded so a hung source fails the sync instead of
/// wedging it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Galaxy crew-inventory client.
#[derive(Debug, Clone)]
pub struct GalaxyClient {
    http: reqwest::Client,
    base_url: String,
}

impl GalaxyClient {
    pub fn new() -> Self {
        Self::new_with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn new_with_base_url(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn inventory_url(&self, profile_id: &str) -> String {
        format!(
            "{}/crew/inventory/{}",
            self.base_url.trim_end_matches('/'),
            profile_id
        )
    }
}

impl Default for GalaxyClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SnapshotSource for GalaxyClient {
    fn source_name(&self) -> &'static str {
        "galaxy"
    }

    async fn fetch_snapshot(&self, source_id: &str) -> Result<CrewSnapshot, InventoryError> {
        let url = self.inventory_url(source_id);

        let resp = self
            .http
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| InventoryError::Unavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(InventoryError::Unavailable(format!(
                "galaxy returned status {}",
                status.as_u16()
            )));
        }

        resp.json::<CrewSnapshot>()
            .await
            .map_err(|e| InventoryError::InvalidShape(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests (local mock server, no network)
// ---------------------------------------------------------------------------
