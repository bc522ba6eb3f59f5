// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Standings ranking and day-over-day position deltas.

use crate::models::StandingRow;
use std::collections::HashMap;

/// Unranked aggregate for one entity, ready to be sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry {
    pub entity_id: String,
    pub entity_name: String,
    pub points: i64,
    pub avg_rr: f64,
}

/// Sort key: points desc, avg RR desc, name asc. The name tie-break makes
/// repeated runs over an unchanged snapshot produce an identical order.
fn sort_entries(entries: &mut [RankEntry]) {
    entries.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.avg_rr.total_cmp(&a.avg_rr))
            .then_with(|| a.entity_name.cmp(&b.entity_name))
    });
}

/// Rank a cohort, computing position deltas against a prior snapshot.
///
/// `previous` is the same cohort aggregated over the window ending one day
/// earlier; pass `None` when no valid prior day exists, which zeroes every
/// delta. Entities absent from the prior snapshot also get delta 0.
pub fn rank(mut current: Vec<RankEntry>, previous: Option<Vec<RankEntry>>) -> Vec<StandingRow> {
    sort_entries(&mut current);

    let prev_positions: HashMap<String, i64> = match previous {
        Some(mut prev) => {
            sort_entries(&mut prev);
            prev.into_iter()
                .enumerate()
                .map(|(idx, e)| (e.entity_id, idx as i64 + 1))
                .collect()
        }
        None => HashMap::new(),
    };

    current
        .into_iter()
        .enumerate()
        .map(|(idx, e)| {
            let position = idx as i64 + 1;
            let position_delta = prev_positions
                .get(&e.entity_id)
                .map(|prev| position - prev)
                .unwrap_or(0);
            StandingRow {
                entity_id: e.entity_id,
                entity_name: e.entity_name,
                points: e.points,
                avg_rr: e.avg_rr,
                position: position as u32,
                position_delta,
            }
        })
        .collect()
}

/// The pre-season edge case: every known entity at zero, ranked by name
/// alone, with no deltas.
pub fn rank_zeroed(entities: Vec<(String, String)>) -> Vec<StandingRow> {
    let mut entities = entities;
    entities.sort_by(|a, b| a.1.cmp(&b.1));
    entities
        .into_iter()
        .enumerate()
        .map(|(idx, (entity_id, entity_name))| StandingRow {
            entity_id,
            entity_name,
            points: 0,
            avg_rr: 0.0,
            position: idx as u32 + 1,
            position_delta: 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str, points: i64, avg_rr: f64) -> RankEntry {
        RankEntry {
            entity_id: id.to_string(),
            entity_name: name.to_string(),
            points,
            avg_rr,
        }
    }

    #[test]
    fn test_orders_by_points_then_rr_then_name() {
        let rows = rank(
            vec![
                entry("t1", "Beta", 50, 1.40),
                entry("t2", "Alpha", 50, 1.40),
                entry("t3", "Gamma", 50, 1.60),
                entry("t4", "Delta", 60, 1.00),
            ],
            None,
        );
        let names: Vec<&str> = rows.iter().map(|r| r.entity_name.as_str()).collect();
        assert_eq!(names, vec!["Delta", "Gamma", "Alpha", "Beta"]);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[3].position, 4);
    }

    #[test]
    fn test_full_tie_breaks_alphabetically() {
        // Equal points and RR: Alpha ranks above Beta.
        let rows = rank(
            vec![
                entry("b", "Beta", 50, 1.40),
                entry("a", "Alpha", 50, 1.40),
            ],
            None,
        );
        assert_eq!(rows[0].entity_name, "Alpha");
        assert_eq!(rows[1].entity_name, "Beta");
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let input = vec![
            entry("t1", "Beta", 12, 1.2),
            entry("t2", "Alpha", 15, 1.0),
            entry("t3", "Gamma", 12, 1.2),
        ];
        let first = rank(input.clone(), None);
        let second = rank(input, None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_position_delta_signs() {
        // Previously Alpha 1st, Beta 2nd; now swapped.
        let previous = vec![entry("a", "Alpha", 20, 1.0), entry("b", "Beta", 10, 1.0)];
        let current = vec![entry("a", "Alpha", 15, 1.0), entry("b", "Beta", 25, 1.0)];
        let rows = rank(current, Some(previous));

        let beta = rows.iter().find(|r| r.entity_name == "Beta").unwrap();
        let alpha = rows.iter().find(|r| r.entity_name == "Alpha").unwrap();
        assert_eq!(beta.position, 1);
        assert_eq!(beta.position_delta, -1); // rose
        assert_eq!(alpha.position, 2);
        assert_eq!(alpha.position_delta, 1); // fell
    }

    #[test]
    fn test_new_entity_gets_zero_delta() {
        let previous = vec![entry("a", "Alpha", 20, 1.0)];
        let current = vec![entry("a", "Alpha", 20, 1.0), entry("c", "Newcomer", 30, 1.0)];
        let rows = rank(current, Some(previous));

        let newcomer = rows.iter().find(|r| r.entity_name == "Newcomer").unwrap();
        assert_eq!(newcomer.position_delta, 0);
    }

    #[test]
    fn test_no_previous_snapshot_zeroes_deltas() {
        let rows = rank(vec![entry("a", "Alpha", 20, 1.0)], None);
        assert_eq!(rows[0].position_delta, 0);
    }

    #[test]
    fn test_rank_zeroed_sorts_by_name() {
        let rows = rank_zeroed(vec![
            ("t2".to_string(), "Zulu".to_string()),
            ("t1".to_string(), "Alpha".to_string()),
        ]);
        assert_eq!(rows[0].entity_name, "Alpha");
        assert_eq!(rows[0].points, 0);
        assert_eq!(rows[0].avg_rr, 0.0);
        assert_eq!(rows[1].position, 2);
    }
}
