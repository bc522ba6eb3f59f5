// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Season calendar: the fixed season window carved into 7-day periods.

use crate::scoring::Window;
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// The configured season, e.g. 2025-10-25 through 2026-01-12.
#[derive(Debug, Clone, Copy)]
pub struct SeasonCalendar {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// One selectable standings period.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodOption {
    /// Stable identifier: "overall" or "week-N"
    pub value: String,
    /// Human label: "Season Total" or "Week N"
    pub label: String,
    pub window: Window,
}

impl SeasonCalendar {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether a date may be logged against (inside the season).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Build the period list as of `today`: the season total, then 7-day
    /// weeks from the season start, truncating the in-progress week.
    ///
    /// Before the season starts this yields just the overall option with an
    /// inverted window, which standing computations treat as "no days yet".
    pub fn period_options(&self, today: NaiveDate) -> Vec<PeriodOption> {
        let horizon = today.min(self.end);
        let mut options = vec![PeriodOption {
            value: "overall".to_string(),
            label: "Season Total".to_string(),
            window: Window::new(self.start, horizon),
        }];

        let mut week_start = self.start;
        let mut week_num = 1u32;
        while week_start <= horizon {
            let week_end = week_start + Days::new(6);
            options.push(PeriodOption {
                value: format!("week-{week_num}"),
                label: format!("Week {week_num}"),
                window: Window::new(week_start, week_end.min(horizon)),
            });
            week_start = week_start + Days::new(7);
            week_num += 1;
        }

        options
    }

    /// Resolve a period identifier to its window, as of `today`.
    pub fn resolve_period(&self, value: &str, today: NaiveDate) -> Option<Window> {
        self.period_options(today)
            .into_iter()
            .find(|o| o.value == value)
            .map(|o| o.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn season() -> SeasonCalendar {
        SeasonCalendar::new(date(2025, 10, 25), date(2026, 1, 12))
    }

    #[test]
    fn test_overall_window_runs_to_today() {
        let options = season().period_options(date(2025, 11, 10));
        assert_eq!(options[0].value, "overall");
        assert_eq!(options[0].window, Window::new(date(2025, 10, 25), date(2025, 11, 10)));
    }

    #[test]
    fn test_weeks_are_seven_day_buckets() {
        let options = season().period_options(date(2025, 11, 10));
        let week1 = options.iter().find(|o| o.value == "week-1").unwrap();
        assert_eq!(week1.window, Window::new(date(2025, 10, 25), date(2025, 10, 31)));
        let week2 = options.iter().find(|o| o.value == "week-2").unwrap();
        assert_eq!(week2.window, Window::new(date(2025, 11, 1), date(2025, 11, 7)));
    }

    #[test]
    fn test_in_progress_week_truncates_at_today() {
        let today = date(2025, 11, 10);
        let options = season().period_options(today);
        let week3 = options.iter().find(|o| o.value == "week-3").unwrap();
        assert_eq!(week3.window, Window::new(date(2025, 11, 8), today));
        assert!(options.iter().all(|o| o.value != "week-4"));
    }

    #[test]
    fn test_horizon_clamps_at_season_end() {
        let options = season().period_options(date(2026, 3, 1));
        assert_eq!(options[0].window.end, date(2026, 1, 12));
    }

    #[test]
    fn test_before_season_only_overall_inverted() {
        let options = season().period_options(date(2025, 10, 1));
        assert_eq!(options.len(), 1);
        assert!(options[0].window.is_inverted());
    }

    #[test]
    fn test_resolve_unknown_period() {
        assert!(season().resolve_period("week-99", date(2025, 11, 10)).is_none());
        assert!(season().resolve_period("overall", date(2025, 11, 10)).is_some());
    }
}
