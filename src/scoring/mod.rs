// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The standings engine: pure, synchronous scoring over already-fetched rows.
//!
//! Nothing in this module performs I/O. Callers fetch entries, accounts,
//! and challenge scores through the store and hand them in as slices, which
//! keeps every rule here testable without a running server.

pub mod aggregate;
pub mod challenge;
pub mod classifier;
pub mod missed;
pub mod rank;
pub mod roster;
pub mod season;

pub use aggregate::{aggregate, PeriodTotals};
pub use classifier::{run_rate, validate_workout, ValidationError, WorkoutInput};
pub use rank::RankEntry;
pub use roster::RosterTable;
pub use season::{PeriodOption, SeasonCalendar};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Resolutions of the two rule inconsistencies found across source revisions,
/// surfaced as explicit configuration rather than silently picking one.
#[derive(Debug, Clone, Copy)]
pub struct ScoringRules {
    /// When true, a steps entry below the submitter's base-step threshold
    /// contributes RR 0 during aggregation (the strict validation path).
    /// When false, the stored RR is used as-is (the lenient award path).
    pub enforce_steps_floor: bool,
    /// When true, a challenge score counts only if the challenge ended
    /// inside the aggregation window. When false, all scores sum
    /// unconditionally (the superseded behavior).
    pub windowed_challenge_bonus: bool,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            enforce_steps_floor: false,
            windowed_challenge_bonus: true,
        }
    }
}

/// A closed date range `[start, end]`, inclusive on both ends.
///
/// An inverted window (end before start) is legal input and means "no days":
/// aggregation over it yields the zeroed edge case rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Window {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered; 0 for an inverted window.
    pub fn total_days(&self) -> i64 {
        if self.is_inverted() {
            0
        } else {
            self.end.signed_duration_since(self.start).num_days() + 1
        }
    }

    /// The same-start window ending one day earlier, used for position
    /// deltas. `None` when no valid prior day exists.
    pub fn previous_day_window(&self) -> Option<Window> {
        let prev_end = self.end.checked_sub_days(chrono::Days::new(1))?;
        if prev_end < self.start {
            None
        } else {
            Some(Window::new(self.start, prev_end))
        }
    }
}

/// Round to 2 decimal places, the display precision for avg RR.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
