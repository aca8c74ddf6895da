use std::collections::HashSet;

use gf_roster::reconcile;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn scenario_sold_members_replaced_from_reserve_pool() {
    // B and C left the wallet; A is retained, and both open slots are filled
    // from the reserve pool {D, E} in some shuffled order, but exactly those.
    let previous = ids(&["A", "B", "C"]);
    let inventory = ids(&["A", "D", "E"]);

    let mut rng = Pcg64Mcg::seed_from_u64(5);
    let report = reconcile(&previous, &inventory, 3, &mut rng);

    assert_eq!(report.squad.len(), 3);
    assert_eq!(report.squad[0], "A");
    assert_eq!(report.retained_count, 1);
    assert_eq!(report.replaced_count, 2);

    let replacements: HashSet<&str> = report.squad[1..].iter().map(String::as_str).collect();
    assert_eq!(replacements, HashSet::from(["D", "E"]));
}

#[test]
fn scenario_replacement_accounting_matches_slot_count() {
    let previous = ids(&["A", "B", "C", "D"]);
    let inventory = ids(&["B", "D", "R1", "R2", "R3"]);

    let mut rng = Pcg64Mcg::seed_from_u64(17);
    let report = reconcile(&previous, &inventory, 4, &mut rng);

    // Two retained (B, D), two drawn from {R1, R2, R3}.
    assert_eq!(report.retained_count, 2);
    assert_eq!(report.replaced_count, report.squad.len() - report.retained_count);
    assert_eq!(report.replaced_count, 2);
    assert_eq!(report.summary(), "2 squad members are no longer owned and have been replaced");
}

#[test]
fn scenario_reserves_shorter_than_open_slots_give_partial_squad() {
    // Only one reserve member for two open slots: squad ends up short of the
    // target, which is valid output.
    let previous = ids(&["A", "B", "C"]);
    let inventory = ids(&["A", "R1"]);

    let mut rng = Pcg64Mcg::seed_from_u64(17);
    let report = reconcile(&previous, &inventory, 3, &mut rng);

    assert_eq!(report.squad, ids(&["A", "R1"]));
    assert_eq!(report.replaced_count, 1);
}
