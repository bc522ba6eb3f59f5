// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Period aggregation: raw points and average RR for one entity.

use crate::models::{Entry, EntryStatus};
use crate::scoring::classifier::effective_rr;
use crate::scoring::{round2, ScoringRules};
use std::collections::HashSet;

/// Aggregate row for one entity over one window, before roster scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodTotals {
    /// One point per approved (user, date) pair; never RR-weighted.
    pub raw_points: i64,
    /// Mean RR over positive-RR entries, rounded to 2 decimals; 0 when
    /// no entry has a positive RR.
    pub avg_rr: f64,
}

impl PeriodTotals {
    pub const ZERO: PeriodTotals = PeriodTotals {
        raw_points: 0,
        avg_rr: 0.0,
    };
}

/// Aggregate a pre-fetched entry set.
///
/// Callers pass entries already filtered to the entity and window; this
/// stays defensive anyway: non-approved rows are skipped, and duplicate
/// (user, date) pairs count once so the daily point cap holds even over
/// inconsistent historical data.
///
/// `seniors` holds the user IDs with senior thresholds, consulted only
/// when the strict steps floor is enforced.
pub fn aggregate(entries: &[Entry], seniors: &HashSet<String>, rules: &ScoringRules) -> PeriodTotals {
    let mut seen: HashSet<(&str, chrono::NaiveDate)> = HashSet::new();
    let mut raw_points = 0i64;
    let mut rr_sum = 0.0;
    let mut rr_count = 0u32;

    for entry in entries {
        if entry.status != EntryStatus::Approved {
            continue;
        }
        if !seen.insert((entry.user_id.as_str(), entry.date)) {
            continue;
        }

        raw_points += 1;

        let rr = effective_rr(entry, seniors.contains(&entry.user_id), rules);
        if rr > 0.0 {
            rr_sum += rr;
            rr_count += 1;
        }
    }

    let avg_rr = if rr_count > 0 {
        round2(rr_sum / f64::from(rr_count))
    } else {
        0.0
    };

    PeriodTotals { raw_points, avg_rr }
}
