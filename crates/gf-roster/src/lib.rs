//! gf-roster
//!
//! Squad reconciliation engine for crew ownership syncs.
//!
//! Architectural decisions:
//! - Retained members keep their previous relative order
//! - Vacated slots are filled from a Fisher-Yates-shuffled reserve pool
//! - Squad never exceeds the target size and never contains duplicates
//! - The random source is injected by the caller, never ambient
//!
//! Deterministic given the rng. Pure logic. No IO. No upstream calls.

mod engine;
mod types;

pub use engine::{initial_selection, reconcile};
pub use types::*;
