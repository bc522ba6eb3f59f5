// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer: the repository seam the standings engine reads through.
//!
//! The engine itself is pure; everything it consumes arrives via this
//! trait, so any backing store (or a hand-seeded fixture in tests) works.

pub mod memory;

pub use memory::MemoryStore;

use crate::models::{Account, Challenge, ChallengeScore, Entry, EntryStatus, Role, Team};
use crate::scoring::Window;
use chrono::NaiveDate;

/// Filter for approved-entry fetches: a mandatory date window plus
/// optional team/user narrowing.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    pub window: Window,
    pub team_id: Option<String>,
    pub user_id: Option<String>,
}

impl EntryFilter {
    pub fn window(window: Window) -> Self {
        Self {
            window,
            team_id: None,
            user_id: None,
        }
    }

    pub fn for_team(mut self, team_id: &str) -> Self {
        self.team_id = Some(team_id.to_string());
        self
    }

    pub fn for_user(mut self, user_id: &str) -> Self {
        self.user_id = Some(user_id.to_string());
        self
    }
}

/// Filter for account listings.
#[derive(Debug, Clone, Default)]
pub struct AccountFilter {
    pub team_id: Option<String>,
    /// When set, only accounts with one of these roles
    pub roles: Option<Vec<Role>>,
}

/// Storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no entry for user {user_id} on {date}")]
    EntryNotFound { user_id: String, date: NaiveDate },

    #[error("Failed to read snapshot: {0}")]
    Io(String),

    #[error("Failed to parse snapshot: {0}")]
    Parse(String),
}

/// Everything the standings engine and entry workflow need from storage.
pub trait LeagueStore: Send + Sync {
    /// Approved entries matching the filter, any order.
    fn fetch_approved_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>, StoreError>;

    fn list_teams(&self) -> Result<Vec<Team>, StoreError>;

    fn list_accounts(&self, filter: &AccountFilter) -> Result<Vec<Account>, StoreError>;

    fn get_account(&self, user_id: &str) -> Result<Option<Account>, StoreError>;

    fn list_challenges(&self) -> Result<Vec<Challenge>, StoreError>;

    fn list_challenge_scores(&self) -> Result<Vec<ChallengeScore>, StoreError>;

    /// The entry for one (user, date), any status.
    fn get_entry(&self, user_id: &str, date: NaiveDate) -> Result<Option<Entry>, StoreError>;

    /// Insert or replace the entry for its (user, date) key. Last write wins.
    fn upsert_entry(&self, entry: Entry) -> Result<(), StoreError>;

    /// Set the status of an existing entry, returning the updated row.
    /// Transition legality is the caller's concern.
    fn set_entry_status(
        &self,
        user_id: &str,
        date: NaiveDate,
        status: EntryStatus,
    ) -> Result<Entry, StoreError>;

    /// Pending entries for one team, oldest date first.
    fn list_pending_entries(&self, team_id: &str) -> Result<Vec<Entry>, StoreError>;
}
