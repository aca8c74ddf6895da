//! gf-store
//!
//! Profile and crew-cache persistence behind a swappable trait.
//!
//! Architectural decisions:
//! - Profiles are indexed by owner identity (wallet address), crew by `dasID`
//! - Partial profile updates never clear fields they do not name
//! - The in-memory backend is the only one today; the trait keeps the daemon
//!   ignorant of the backing choice

mod memory;
mod store;

pub use memory::MemoryStore;
pub use store::{ProfileStore, StoreError};
