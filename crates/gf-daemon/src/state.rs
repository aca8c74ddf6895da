//! Shared runtime state for gf-daemon.
//!
//! Handlers receive `State<Arc<AppState>>` from Axum. Collaborators are held
//! as trait objects so tests can swap in in-memory fakes or mock-backed
//! clients without touching the routes.

use std::collections::HashMap;
use std::sync::Arc;

use gf_inventory::{DirectoryClient, GalaxyClient, SnapshotSource};
use gf_store::{MemoryStore, ProfileStore};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::config::Config;

// ---------------------------------------------------------------------------
// SyncLocks
// ---------------------------------------------------------------------------

/// One mutex per owner identity, handed out on demand.
///
/// A sync request holds its wallet's lock from "read previous squad" through
/// "write new squad", so two concurrent syncs for the same wallet serialize
/// while different wallets proceed in parallel. Entries are never reclaimed;
/// the wallet population is small.
#[derive(Debug, Default)]
pub struct SyncLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl SyncLocks {
    pub async fn acquire(&self, wallet_address: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.locks.lock().await;
            map.entry(wallet_address.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// Shared across all Axum handlers behind an `Arc`.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn ProfileStore>,
    pub snapshot_source: Arc<dyn SnapshotSource>,
    pub directory: Arc<DirectoryClient>,
    pub sync_locks: SyncLocks,
}

impl AppState {
    /// Production wiring: in-memory store plus HTTP clients pointed at the
    /// configured upstreams.
    pub fn new(config: Config) -> Self {
        let galaxy = GalaxyClient::new_with_base_url(config.galaxy_base_url.clone());
        let directory = DirectoryClient::new_with_base_url(config.directory_base_url.clone());
        Self {
            store: Arc::new(MemoryStore::new()),
            snapshot_source: Arc::new(galaxy),
            directory: Arc::new(directory),
            sync_locks: SyncLocks::default(),
            config,
        }
    }
}
