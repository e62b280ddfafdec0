//! Property tests for the hunt and tier invariants.

use proptest::prelude::*;

use trailquest_core::{Difficulty, HuntEngine, HuntItem, Tier};

fn catalog(points: &[u32]) -> Vec<HuntItem> {
    points
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            HuntItem::new(
                format!("item-{i}"),
                format!("Item {i}"),
                "Somewhere",
                Difficulty::Easy,
                p,
                "",
            )
        })
        .collect()
}

/// An op sequence: `Some(i)` marks `item-{i % len}` found (possibly an
/// unknown id when `i >= len`), `None` resets the hunt.
fn op_sequence() -> impl Strategy<Value = Vec<Option<usize>>> {
    prop::collection::vec(prop::option::weighted(0.9, 0usize..12), 0..40)
}

fn assert_invariants(engine: &HuntEngine) {
    // Score equals the sum of points of found items.
    let sum: u32 = engine
        .items()
        .iter()
        .filter(|i| i.is_found)
        .map(|i| i.points)
        .sum();
    assert_eq!(engine.total_score(), sum);

    // Found ids are unique and reference catalog items.
    let ids = engine.found_ids();
    for (i, a) in ids.iter().enumerate() {
        assert!(engine.item(a).is_some());
        assert!(!ids[i + 1..].contains(a));
    }

    // Found flag and timestamp are a biconditional.
    for item in engine.items() {
        assert_eq!(item.is_found, item.found_at.is_some());
        assert_eq!(item.is_found, ids.contains(&item.id));
    }
}

proptest! {
    #[test]
    fn invariants_hold_under_any_op_sequence(
        points in prop::collection::vec(1u32..1_000, 1..8),
        ops in op_sequence(),
    ) {
        let mut engine = HuntEngine::new(catalog(&points));
        for op in ops {
            match op {
                Some(i) => {
                    engine.mark_found(&format!("item-{i}"));
                }
                None => {
                    engine.reset();
                }
            }
            assert_invariants(&engine);
        }
    }

    #[test]
    fn double_find_changes_nothing(
        points in prop::collection::vec(1u32..1_000, 1..8),
        idx in 0usize..8,
    ) {
        let mut engine = HuntEngine::new(catalog(&points));
        let id = format!("item-{}", idx % points.len());

        engine.mark_found(&id);
        let score = engine.total_score();
        let found = engine.found_ids().to_vec();

        engine.mark_found(&id);
        prop_assert_eq!(engine.total_score(), score);
        prop_assert_eq!(engine.found_ids(), found);
    }

    #[test]
    fn reset_then_refind_reproduces_score(
        points in prop::collection::vec(1u32..1_000, 1..8),
        order in prop::collection::vec(0usize..8, 0..16),
    ) {
        let mut engine = HuntEngine::new(catalog(&points));
        let ids: Vec<String> = order
            .iter()
            .map(|i| format!("item-{}", i % points.len()))
            .collect();

        for id in &ids {
            engine.mark_found(id);
        }
        let first_run = engine.total_score();

        engine.reset();
        for id in &ids {
            engine.mark_found(id);
        }
        prop_assert_eq!(engine.total_score(), first_run);
    }

    #[test]
    fn tier_is_monotonic_in_score(a in any::<i32>(), b in any::<i32>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Tier::for_score(lo as i64) <= Tier::for_score(hi as i64));
    }

    #[test]
    fn tier_threshold_is_exact(score in -1_000i64..20_000) {
        let tier = Tier::for_score(score);
        prop_assert!(score >= tier.min_score() || tier == Tier::Rookie);
        if let Some(next) = tier.next() {
            prop_assert!(score < next.min_score());
        }
    }
}

#[test]
fn tier_boundary_table() {
    assert_eq!(Tier::for_score(499), Tier::Rookie);
    assert_eq!(Tier::for_score(500), Tier::Explorer);
    assert_eq!(Tier::for_score(1_999), Tier::Explorer);
    assert_eq!(Tier::for_score(2_000), Tier::Adventurer);
    assert_eq!(Tier::for_score(10_000), Tier::Legend);
}
