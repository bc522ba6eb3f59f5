// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-day arithmetic.

use chrono::{Days, NaiveDate};

/// The day before `today`, the cutoff for finalized standings.
/// Saturates at `today` on calendar underflow.
pub fn yesterday(today: NaiveDate) -> NaiveDate {
    today.checked_sub_days(Days::new(1)).unwrap_or(today)
}
