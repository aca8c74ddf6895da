use serde::{Deserialize, Serialize};

/// Standard active-squad size. Callers may pass a different target to the
/// engine; this is the game's default.
pub const SQUAD_SIZE: usize = 15;

/// Outcome of one reconciliation pass.
///
/// `squad` lists retained members first (in their previous relative order),
/// then replacements in the order they were drawn from the shuffled reserve
/// pool. Every entry is guaranteed to come from the inventory passed to the
/// same call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterReport {
    /// The next squad selection, at most target-size long, no duplicates.
    pub squad: Vec<String>,
    /// Previous-squad members that survived into `squad`.
    pub retained_count: usize,
    /// Slots filled from the reserve pool on this pass.
    pub replaced_count: usize,
    /// `true` when there was no previous squad and the squad was populated
    /// from scratch (initial selection, not replacement).
    pub first_sync: bool,
}

impl RosterReport {
    /// `true` when a previous squad existed and nothing about it changed.
    pub fn is_unchanged(&self) -> bool {
        !self.first_sync && self.replaced_count == 0
    }

    /// Human-readable one-liner for sync responses and logs. Distinguishes
    /// initial population, no-change, and N-members-replaced.
    pub fn summary(&self) -> String {
        if self.first_sync {
            format!("initial squad created with {} crew members", self.squad.len())
        } else if self.is_unchanged() {
            format!(
                "no change; all {} selected crew members still owned",
                self.squad.len()
            )
        } else if self.replaced_count == 1 {
            "1 squad member is no longer owned and has been replaced".to_string()
        } else {
            format!(
                "{} squad members are no longer owned and have been replaced",
                self.replaced_count
            )
        }
    }
}
