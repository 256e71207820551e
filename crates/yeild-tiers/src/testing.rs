//! Shared fixtures and generators for unit tests.

use proptest::prelude::*;
use std::collections::BTreeSet;

use crate::table::TierTable;
use crate::tier::{Tier, TierLevel};

/// `[(0,0,[a]), (1,3,[a,b]), (10,0,[a,b,c])]`
pub(crate) fn scenario_table() -> TierTable {
    TierTable::new(vec![
        Tier::new(TierLevel::Beginner, "t0", 0, 0).with_features(["a"]),
        Tier::new(TierLevel::Intermediate, "t1", 1, 3).with_features(["a", "b"]),
        Tier::new(TierLevel::Advanced, "t2", 10, 0).with_features(["a", "b", "c"]),
    ])
    .expect("scenario table is valid")
}

const FEATURES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

fn arb_features() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::btree_set(prop::sample::select(FEATURES.to_vec()), 0..FEATURES.len())
        .prop_map(|set: BTreeSet<&'static str>| set.into_iter().collect())
}

fn arb_upper_tier() -> impl Strategy<Value = Tier> {
    (0u64..40, 0u64..10, arb_features()).prop_map(|(min_tasks, min_referrals, features)| {
        Tier::new(TierLevel::Advanced, format!("t{}-{}", min_tasks, min_referrals), min_tasks, min_referrals)
            .with_features(features)
    })
}

/// Zero-floor tables of 1..6 tiers with arbitrary (not necessarily ascending)
/// thresholds and feature sets.
pub(crate) fn arb_table() -> impl Strategy<Value = TierTable> {
    (arb_features(), prop::collection::vec(arb_upper_tier(), 0..5)).prop_map(|(floor, upper)| {
        let mut tiers = vec![Tier::new(TierLevel::Beginner, "floor", 0, 0).with_features(floor)];
        tiers.extend(upper);
        TierTable::new(tiers).expect("generated table is valid")
    })
}

pub(crate) fn arb_table_and_counts() -> impl Strategy<Value = (TierTable, u64, u64)> {
    (arb_table(), 0u64..60, 0u64..15)
}
