// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Missed-day counting.
//!
//! Official standings cut off at yesterday so nobody is penalized for a
//! day that has not finished; callers build the window accordingly.

use crate::scoring::Window;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Calendar days in the window with no qualifying entry for one person.
///
/// `missed + |unique entry dates in window| == total days in window`.
pub fn missed_days(entry_dates: &HashSet<NaiveDate>, window: Window) -> i64 {
    let total = window.total_days();
    if total == 0 {
        return 0;
    }
    let covered = entry_dates.iter().filter(|d| window.contains(**d)).count() as i64;
    (total - covered).max(0)
}

/// Team missed days: the sum of each member's individual count. Two members
/// missing the same day both count; dates are deliberately not deduplicated
/// across the roster.
pub fn team_missed_days<'a, I>(member_dates: I, window: Window) -> i64
where
    I: IntoIterator<Item = &'a HashSet<NaiveDate>>,
{
    member_dates
        .into_iter()
        .map(|dates| missed_days(dates, window))
        .sum()
}
