// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The single source of "today".
//!
//! Every as-of and missed-day computation derives its cutoff from here, so
//! tests can pin the calendar with a fixed clock.

use chrono::{Local, NaiveDate};

pub trait Clock: Send + Sync {
    /// Today's calendar date in the deployment's local semantics.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock time, local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A pinned date for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
