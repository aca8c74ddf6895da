use gf_roster::reconcile;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn scenario_wallet_emptied_clears_the_squad() {
    // Inventory is empty: every previous member is gone and there is nothing
    // to replace them with.
    let previous = ids(&["A", "B", "C"]);

    let mut rng = Pcg64Mcg::seed_from_u64(11);
    let report = reconcile(&previous, &[], 3, &mut rng);

    assert!(report.squad.is_empty());
    assert_eq!(report.retained_count, 0);
    assert_eq!(report.replaced_count, 0);
    assert!(!report.first_sync);
}

#[test]
fn scenario_both_sides_empty_yield_empty_first_sync() {
    let mut rng = Pcg64Mcg::seed_from_u64(11);
    let report = reconcile(&[], &[], 15, &mut rng);

    assert!(report.squad.is_empty());
    assert!(report.first_sync);
    assert_eq!(report.summary(), "initial squad created with 0 crew members");
}

#[test]
fn scenario_disjoint_inventory_rebuilds_squad_from_scratch() {
    // Nothing from the previous squad survives, so the whole squad is drawn
    // from the reserve pool and replacedCount covers every slot.
    let previous = ids(&["A", "B", "C"]);
    let inventory = ids(&["X", "Y", "Z", "W"]);

    let mut rng = Pcg64Mcg::seed_from_u64(11);
    let report = reconcile(&previous, &inventory, 3, &mut rng);

    assert_eq!(report.squad.len(), 3);
    assert_eq!(report.retained_count, 0);
    assert_eq!(report.replaced_count, 3);
    for member in &report.squad {
        assert!(inventory.contains(member));
    }
}
