//! Persistence boundary for profiles and the crew cache.
//!
//! Only the store trait and its error type live here; concrete backends
//! (in-memory today, relational later) implement the trait elsewhere.

use std::fmt;

use gf_schemas::{CrewRecord, NewCrew, NewProfile, PlayerProfile, ProfileUpdate};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors a [`ProfileStore`] implementation may return.
#[derive(Debug)]
pub enum StoreError {
    /// No profile exists for the given owner identity.
    NotFound(String),
    /// A profile already exists for the given owner identity (unique key).
    Duplicate(String),
    /// The backing store failed to read or write.
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(wallet) => write!(f, "profile not found: {wallet}"),
            StoreError::Duplicate(wallet) => write!(f, "profile already exists: {wallet}"),
            StoreError::Backend(msg) => write!(f, "store backend failure: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

// ---------------------------------------------------------------------------
// Store trait
// ---------------------------------------------------------------------------

/// Profile and crew-cache persistence contract.
///
/// Profiles are keyed by owner identity (wallet address), crew-cache entries
/// by their `dasID`. Implementations must be `Send + Sync` so a shared
/// handle can serve concurrent requests, and object-safe so callers can hold
/// an `Arc<dyn ProfileStore>`.
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    // Crew cache ------------------------------------------------------------

    /// Every cached crew record, in a stable order.
    async fn all_crew(&self) -> Result<Vec<CrewRecord>, StoreError>;

    /// Look up one cached crew record by its `dasID`.
    async fn crew_by_das_id(&self, das_id: &str) -> Result<Option<CrewRecord>, StoreError>;

    /// Insert or refresh a crew-cache entry. An existing entry keeps its
    /// synthesized record id; all other fields are replaced.
    async fn upsert_crew(&self, member: NewCrew) -> Result<CrewRecord, StoreError>;

    // Profiles --------------------------------------------------------------

    /// Look up a profile by owner identity.
    async fn profile_by_wallet(
        &self,
        wallet_address: &str,
    ) -> Result<Option<PlayerProfile>, StoreError>;

    /// Create a profile. Fails with [`StoreError::Duplicate`] if one already
    /// exists for the same owner identity.
    async fn create_profile(&self, profile: NewProfile) -> Result<PlayerProfile, StoreError>;

    /// Apply a partial update to an existing profile; `None` fields are left
    /// untouched. Fails with [`StoreError::NotFound`] if the owner has no
    /// profile. The write is atomic per profile: readers see either the old
    /// or the new record, never a half-applied one.
    async fn update_profile(
        &self,
        wallet_address: &str,
        update: ProfileUpdate,
    ) -> Result<PlayerProfile, StoreError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
