//! gf-inventory
//!
//! Upstream crew-ownership lookups (pluggable snapshot sources).
//!
//! This crate owns the snapshot-source abstraction, the galaxy inventory
//! client, and the player-profile directory client. It does **not** persist
//! anything and does **not** derive game stats; callers receive raw upstream
//! data and decide what to do with it.

pub mod directory;
pub mod galaxy;
pub mod source;

pub use directory::{DirectoryClient, DirectoryProfile, ProfileDirectoryResponse};
pub use galaxy::GalaxyClient;
pub use source::{CrewSnapshot, InventoryError, RawCrewMember, SnapshotSource};
