use std::collections::HashSet;

use rand::Rng;

use crate::RosterReport;

// ---------------------------------------------------------------------------
// Initial selection
// ---------------------------------------------------------------------------

/// Populate a squad from scratch: the first `min(target_size, inventory.len())`
/// crew in inventory order. No shuffling on this path; the upstream order is
/// the player's first roster until they edit it.
///
/// `replaced_count` is 0 by definition; `first_sync` is set so callers can
/// phrase the response as "initial squad created" rather than "no change".
pub fn initial_selection(inventory: &[String], target_size: usize) -> RosterReport {
    let take = target_size.min(inventory.len());
    RosterReport {
        squad: inventory[..take].to_vec(),
        retained_count: 0,
        replaced_count: 0,
        first_sync: true,
    }
}

// ---------------------------------------------------------------------------
// Reconciliation
// ---------------------------------------------------------------------------

/// Reconcile a previously selected squad against a fresh ownership inventory.
///
/// - Members of `previous` still present in `inventory` are retained, in
///   their previous relative order (membership filter, never a re-sort).
/// - Vacated slots are filled from the reserve pool (inventory minus retained
///   members) after a Fisher-Yates shuffle, so every reserve member has equal
///   odds of promotion.
/// - If more members were retained than `target_size` allows (the target
///   shrank between syncs), the retained list is truncated to `target_size`,
///   order preserved, and `replaced_count` stays 0.
/// - An empty `previous` squad takes the initial-selection path.
///
/// Preconditions: `inventory` contains no duplicates. Callers deduplicate
/// before this call; the engine does not re-check.
///
/// Postconditions: `squad.len() <= target_size`, no duplicate entries, every
/// entry drawn from `inventory`, and on the reconcile path
/// `replaced_count == squad.len() - retained_count`.
///
/// The rng is any [`rand::Rng`]; production callers pass a thread rng, tests
/// pass a seeded generator for deterministic draws.
pub fn reconcile<R: Rng>(
    previous: &[String],
    inventory: &[String],
    target_size: usize,
    rng: &mut R,
) -> RosterReport {
    if previous.is_empty() {
        return initial_selection(inventory, target_size);
    }

    let owned: HashSet<&str> = inventory.iter().map(String::as_str).collect();

    // Still-owned subsequence of the previous squad, original order.
    let mut squad: Vec<String> = previous
        .iter()
        .filter(|id| owned.contains(id.as_str()))
        .cloned()
        .collect();

    if squad.len() >= target_size {
        // Target shrank (or inventory churned oddly): keep the first
        // `target_size` retained members, draw nothing.
        squad.truncate(target_size);
        let retained_count = squad.len();
        return RosterReport {
            squad,
            retained_count,
            replaced_count: 0,
            first_sync: false,
        };
    }

    let retained: HashSet<&str> = squad.iter().map(String::as_str).collect();
    let mut reserve: Vec<String> = inventory
        .iter()
        .filter(|id| !retained.contains(id.as_str()))
        .cloned()
        .collect();
    fisher_yates(&mut reserve, rng);

    let retained_count = squad.len();
    let slots_to_fill = (target_size - retained_count).min(reserve.len());
    squad.extend(reserve.into_iter().take(slots_to_fill));

    RosterReport {
        squad,
        retained_count,
        replaced_count: slots_to_fill,
        first_sync: false,
    }
}

/// Fisher-Yates (Knuth) shuffle: walk `i` from the tail down to 1, swap with
/// a uniform draw from `[0, i]`. Unbiased permutation, linear time, constant
/// extra space.
fn fisher_yates<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
