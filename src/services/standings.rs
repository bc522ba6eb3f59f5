// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Standings orchestration.
//!
//! Fetches the relevant rows through the store, then runs the pure scoring
//! engine over them. Team totals get roster scaling and challenge bonuses;
//! individual totals are raw.

use crate::clock::Clock;
use crate::db::{AccountFilter, EntryFilter, LeagueStore, StoreError};
use crate::models::{Account, Challenge, ChallengeScore, Role, StandingRow, Team};
use crate::scoring::{
    aggregate, challenge, missed, rank, RankEntry, RosterTable, ScoringRules, SeasonCalendar,
    Window,
};
use crate::time_utils::yesterday;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Computes ranked standings tables from a consistent store snapshot.
#[derive(Clone)]
pub struct StandingsService {
    store: Arc<dyn LeagueStore>,
    roster: RosterTable,
    rules: ScoringRules,
    season: SeasonCalendar,
    clock: Arc<dyn Clock>,
}

/// Missed days for one team or person.
#[derive(Debug, Clone, Serialize)]
pub struct MissedDayRow {
    pub entity_id: String,
    pub entity_name: String,
    pub missed_days: i64,
}

/// League-wide missed-day report as of yesterday.
#[derive(Debug, Clone, Serialize)]
pub struct MissedDayReport {
    pub as_of: NaiveDate,
    pub window: Window,
    pub teams: Vec<MissedDayRow>,
    pub individuals: Vec<MissedDayRow>,
}

impl StandingsService {
    pub fn new(
        store: Arc<dyn LeagueStore>,
        roster: RosterTable,
        rules: ScoringRules,
        season: SeasonCalendar,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            roster,
            rules,
            season,
            clock,
        }
    }

    pub fn season(&self) -> &SeasonCalendar {
        &self.season
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Ranked team standings for a window, with position deltas against the
    /// same window ending one day earlier.
    pub fn team_standings(&self, window: Window) -> Result<Vec<StandingRow>, StoreError> {
        let teams = self.store.list_teams()?;

        if window.is_inverted() {
            return Ok(rank::rank_zeroed(
                teams.into_iter().map(|t| (t.id, t.name)).collect(),
            ));
        }

        let seniors = self.senior_ids()?;
        let challenges = self.store.list_challenges()?;
        let scores = self.store.list_challenge_scores()?;

        let current = self.team_snapshot(&teams, &seniors, &challenges, &scores, window)?;
        let previous = match window.previous_day_window() {
            Some(prev) => Some(self.team_snapshot(&teams, &seniors, &challenges, &scores, prev)?),
            None => None,
        };

        Ok(rank::rank(current, previous))
    }

    /// Ranked individual standings (players and leaders). No roster scaling
    /// or challenge bonuses apply to people.
    pub fn individual_standings(&self, window: Window) -> Result<Vec<StandingRow>, StoreError> {
        let accounts = self.scoring_accounts()?;

        if window.is_inverted() {
            return Ok(rank::rank_zeroed(
                accounts
                    .into_iter()
                    .map(|a| (a.id.clone(), a.display_name()))
                    .collect(),
            ));
        }

        let current = self.individual_snapshot(&accounts, window)?;
        let previous = match window.previous_day_window() {
            Some(prev) => Some(self.individual_snapshot(&accounts, prev)?),
            None => None,
        };

        Ok(rank::rank(current, previous))
    }

    /// Missed days per person and per team over [season start, yesterday].
    ///
    /// Today is deliberately excluded so nobody is penalized for a day that
    /// has not finished. A team's count sums its current roster members.
    pub fn missed_day_report(&self) -> Result<MissedDayReport, StoreError> {
        let as_of = yesterday(self.clock.today());
        let window = Window::new(self.season.start, as_of.min(self.season.end));

        let accounts = self.scoring_accounts()?;
        let teams = self.store.list_teams()?;

        let mut individuals = Vec::with_capacity(accounts.len());
        let mut per_user_missed: Vec<(Option<String>, i64)> = Vec::with_capacity(accounts.len());

        for account in &accounts {
            let dates = self.entry_dates(&account.id, window)?;
            let missed = missed::missed_days(&dates, window);
            per_user_missed.push((account.team_id.clone(), missed));
            individuals.push(MissedDayRow {
                entity_id: account.id.clone(),
                entity_name: account.display_name(),
                missed_days: missed,
            });
        }

        let mut team_rows = Vec::with_capacity(teams.len());
        for team in &teams {
            let total: i64 = per_user_missed
                .iter()
                .filter(|(team_id, _)| team_id.as_deref() == Some(team.id.as_str()))
                .map(|(_, missed)| missed)
                .sum();
            team_rows.push(MissedDayRow {
                entity_id: team.id.clone(),
                entity_name: team.name.clone(),
                missed_days: total,
            });
        }

        sort_report_rows(&mut team_rows);
        sort_report_rows(&mut individuals);

        Ok(MissedDayReport {
            as_of,
            window,
            teams: team_rows,
            individuals,
        })
    }

    fn team_snapshot(
        &self,
        teams: &[Team],
        seniors: &HashSet<String>,
        challenges: &[Challenge],
        scores: &[ChallengeScore],
        window: Window,
    ) -> Result<Vec<RankEntry>, StoreError> {
        let mut snapshot = Vec::with_capacity(teams.len());
        for team in teams {
            let entries = self
                .store
                .fetch_approved_entries(&EntryFilter::window(window).for_team(&team.id))?;
            let totals = aggregate(&entries, seniors, &self.rules);

            // Scale and round entry-derived points first; whole-number
            // bonuses go on top of the rounded total.
            let scaled = self.roster.scale(&team.name, totals.raw_points);
            let bonus =
                challenge::team_bonus(&team.id, challenges, scores, window, &self.rules).round()
                    as i64;

            snapshot.push(RankEntry {
                entity_id: team.id.clone(),
                entity_name: team.name.clone(),
                points: scaled + bonus,
                avg_rr: totals.avg_rr,
            });
        }
        Ok(snapshot)
    }

    fn individual_snapshot(
        &self,
        accounts: &[Account],
        window: Window,
    ) -> Result<Vec<RankEntry>, StoreError> {
        let seniors: HashSet<String> = accounts
            .iter()
            .filter(|a| a.is_senior())
            .map(|a| a.id.clone())
            .collect();

        let mut snapshot = Vec::with_capacity(accounts.len());
        for account in accounts {
            let entries = self
                .store
                .fetch_approved_entries(&EntryFilter::window(window).for_user(&account.id))?;
            let totals = aggregate(&entries, &seniors, &self.rules);
            snapshot.push(RankEntry {
                entity_id: account.id.clone(),
                entity_name: account.display_name(),
                points: totals.raw_points,
                avg_rr: totals.avg_rr,
            });
        }
        Ok(snapshot)
    }

    /// Accounts that appear in standings: players and leaders, not governors.
    fn scoring_accounts(&self) -> Result<Vec<Account>, StoreError> {
        self.store.list_accounts(&AccountFilter {
            team_id: None,
            roles: Some(vec![Role::Player, Role::Leader]),
        })
    }

    fn senior_ids(&self) -> Result<HashSet<String>, StoreError> {
        Ok(self
            .scoring_accounts()?
            .into_iter()
            .filter(|a| a.is_senior())
            .map(|a| a.id)
            .collect())
    }

    fn entry_dates(
        &self,
        user_id: &str,
        window: Window,
    ) -> Result<HashSet<NaiveDate>, StoreError> {
        Ok(self
            .store
            .fetch_approved_entries(&EntryFilter::window(window).for_user(user_id))?
            .into_iter()
            .map(|e| e.date)
            .collect())
    }
}

fn sort_report_rows(rows: &mut [MissedDayRow]) {
    rows.sort_by(|a, b| {
        b.missed_days
            .cmp(&a.missed_days)
            .then_with(|| a.entity_name.cmp(&b.entity_name))
    });
}
