//! Tier resolution.
//!
//! - current tier: the highest-ranked tier whose task AND referral thresholds
//!   are both met, falling back to rank 0
//! - next tier: the lowest-ranked tier that is not yet met, if any
//!
//! With a table whose axes do not both ascend, the next tier may rank below
//! the current one. That is intended: it is the first gate still closed.

use crate::table::TierTable;
use crate::tier::Tier;

/// Outcome of resolving a user's counts against a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub current: &'a Tier,
    pub current_rank: usize,
    /// `None` once every tier is satisfied.
    pub next: Option<&'a Tier>,
    pub next_rank: Option<usize>,
}

impl Resolution<'_> {
    /// Highest tier reached, nothing left to unlock.
    pub fn is_terminal(&self) -> bool {
        self.next.is_none()
    }
}

/// Resolve current and next tier for the given counts.
pub fn resolve(tasks_completed: u64, referrals_count: u64, table: &TierTable) -> Resolution<'_> {
    let tiers = table.tiers();

    let current_rank = tiers
        .iter()
        .rposition(|tier| tier.qualifies(tasks_completed, referrals_count))
        .unwrap_or(0);

    let next_rank = tiers
        .iter()
        .position(|tier| !tier.qualifies(tasks_completed, referrals_count));

    Resolution {
        current: &tiers[current_rank],
        current_rank,
        next: next_rank.map(|rank| &tiers[rank]),
        next_rank,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{arb_table_and_counts, scenario_table};
    use proptest::prelude::*;

    #[test]
    fn zero_counts_resolve_to_first_tier() {
        let table = scenario_table();
        let res = resolve(0, 0, &table);
        assert_eq!(res.current_rank, 0);
        assert_eq!(res.next_rank, Some(1));
    }

    #[test]
    fn referral_gate_blocks_task_volume() {
        // tier 1 needs 1 task AND 3 referrals
        let table = scenario_table();
        let res = resolve(1, 0, &table);
        assert_eq!(res.current_rank, 0);
        assert_eq!(res.next_rank, Some(1));
    }

    #[test]
    fn both_gates_met() {
        let table = scenario_table();
        let res = resolve(1, 3, &table);
        assert_eq!(res.current_rank, 1);
        assert_eq!(res.current.name, "t1");
        assert_eq!(res.next_rank, Some(2));
    }

    #[test]
    fn next_can_rank_below_current() {
        // tier 2 needs no referrals, tier 1 needs three
        let table = scenario_table();
        let res = resolve(10, 0, &table);
        assert_eq!(res.current_rank, 2);
        assert_eq!(res.next_rank, Some(1));
    }

    #[test]
    fn terminal_when_everything_met() {
        let table = scenario_table();
        let res = resolve(10, 3, &table);
        assert_eq!(res.current_rank, 2);
        assert!(res.is_terminal());
        assert!(res.next.is_none());
    }

    #[test]
    fn reference_table_progression() {
        let table = TierTable::reference();
        assert_eq!(table.resolve(0, 0).current.name, "Beginner");
        assert_eq!(table.resolve(10, 0).current.name, "Beginner");
        assert_eq!(table.resolve(10, 1).current.name, "Intermediate");
        assert_eq!(table.resolve(49, 5).current.name, "Intermediate");
        assert_eq!(table.resolve(50, 5).current.name, "Advanced");
    }

    proptest! {
        #[test]
        fn current_is_qualifying_and_maximal((table, tasks, referrals) in arb_table_and_counts()) {
            let res = resolve(tasks, referrals, &table);
            prop_assert!(res.current.qualifies(tasks, referrals));
            for tier in &table.tiers()[res.current_rank + 1..] {
                prop_assert!(!tier.qualifies(tasks, referrals));
            }
        }

        #[test]
        fn next_is_first_unmet((table, tasks, referrals) in arb_table_and_counts()) {
            let res = resolve(tasks, referrals, &table);
            match res.next_rank {
                Some(rank) => {
                    prop_assert!(!table.tiers()[rank].qualifies(tasks, referrals));
                    for tier in &table.tiers()[..rank] {
                        prop_assert!(tier.qualifies(tasks, referrals));
                    }
                }
                None => {
                    prop_assert!(table.tiers().iter().all(|t| t.qualifies(tasks, referrals)));
                    prop_assert_eq!(res.current_rank, table.len() - 1);
                }
            }
        }

        #[test]
        fn rank_monotonic_in_tasks((table, tasks, referrals) in arb_table_and_counts(), extra in 0u64..50) {
            let before = resolve(tasks, referrals, &table).current_rank;
            let after = resolve(tasks + extra, referrals, &table).current_rank;
            prop_assert!(after >= before);
        }

        #[test]
        fn rank_monotonic_in_referrals((table, tasks, referrals) in arb_table_and_counts(), extra in 0u64..50) {
            let before = resolve(tasks, referrals, &table).current_rank;
            let after = resolve(tasks, referrals + extra, &table).current_rank;
            prop_assert!(after >= before);
        }
    }
}
