// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory store seeded from a JSON snapshot file.
//!
//! The engine treats "fetch relevant rows" and "compute standings" as two
//! strictly separated phases; this store is the whole of phase one. Writes
//! (entry submission and review) mutate the snapshot under a lock with
//! last-write-wins per (user, date).

use crate::db::{AccountFilter, EntryFilter, LeagueStore, StoreError};
use crate::models::{Account, Challenge, ChallengeScore, Entry, EntryStatus, Team};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::RwLock;

/// The full league dataset as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub challenges: Vec<Challenge>,
    #[serde(default)]
    pub challenge_scores: Vec<ChallengeScore>,
}

/// Thread-safe in-memory league store.
pub struct MemoryStore {
    inner: RwLock<Snapshot>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Snapshot::default())
    }
}

impl MemoryStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            inner: RwLock::new(snapshot),
        }
    }

    /// Load a snapshot from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| StoreError::Io(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load a snapshot from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, StoreError> {
        let snapshot: Snapshot =
            serde_json::from_str(json_data).map_err(|e| StoreError::Parse(e.to_string()))?;
        tracing::info!(
            teams = snapshot.teams.len(),
            accounts = snapshot.accounts.len(),
            entries = snapshot.entries.len(),
            challenges = snapshot.challenges.len(),
            "Loaded league snapshot"
        );
        Ok(Self::new(snapshot))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Snapshot> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Snapshot> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl LeagueStore for MemoryStore {
    fn fetch_approved_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>, StoreError> {
        let snapshot = self.read();
        Ok(snapshot
            .entries
            .iter()
            .filter(|e| e.status == EntryStatus::Approved)
            .filter(|e| filter.window.contains(e.date))
            .filter(|e| match &filter.team_id {
                Some(team_id) => e.team_id.as_deref() == Some(team_id.as_str()),
                None => true,
            })
            .filter(|e| match &filter.user_id {
                Some(user_id) => e.user_id == *user_id,
                None => true,
            })
            .cloned()
            .collect())
    }

    fn list_teams(&self) -> Result<Vec<Team>, StoreError> {
        Ok(self.read().teams.clone())
    }

    fn list_accounts(&self, filter: &AccountFilter) -> Result<Vec<Account>, StoreError> {
        let snapshot = self.read();
        Ok(snapshot
            .accounts
            .iter()
            .filter(|a| match &filter.team_id {
                Some(team_id) => a.team_id.as_deref() == Some(team_id.as_str()),
                None => true,
            })
            .filter(|a| match &filter.roles {
                Some(roles) => roles.contains(&a.role),
                None => true,
            })
            .cloned()
            .collect())
    }

    fn get_account(&self, user_id: &str) -> Result<Option<Account>, StoreError> {
        Ok(self
            .read()
            .accounts
            .iter()
            .find(|a| a.id == user_id)
            .cloned())
    }

    fn list_challenges(&self) -> Result<Vec<Challenge>, StoreError> {
        Ok(self.read().challenges.clone())
    }

    fn list_challenge_scores(&self) -> Result<Vec<ChallengeScore>, StoreError> {
        Ok(self.read().challenge_scores.clone())
    }

    fn get_entry(&self, user_id: &str, date: NaiveDate) -> Result<Option<Entry>, StoreError> {
        Ok(self
            .read()
            .entries
            .iter()
            .find(|e| e.user_id == user_id && e.date == date)
            .cloned())
    }

    fn upsert_entry(&self, entry: Entry) -> Result<(), StoreError> {
        let mut snapshot = self.write();
        match snapshot
            .entries
            .iter_mut()
            .find(|e| e.user_id == entry.user_id && e.date == entry.date)
        {
            Some(existing) => *existing = entry,
            None => snapshot.entries.push(entry),
        }
        Ok(())
    }

    fn set_entry_status(
        &self,
        user_id: &str,
        date: NaiveDate,
        status: EntryStatus,
    ) -> Result<Entry, StoreError> {
        let mut snapshot = self.write();
        let entry = snapshot
            .entries
            .iter_mut()
            .find(|e| e.user_id == user_id && e.date == date)
            .ok_or_else(|| StoreError::EntryNotFound {
                user_id: user_id.to_string(),
                date,
            })?;
        entry.status = status;
        Ok(entry.clone())
    }

    fn list_pending_entries(&self, team_id: &str) -> Result<Vec<Entry>, StoreError> {
        let snapshot = self.read();
        let mut pending: Vec<Entry> = snapshot
            .entries
            .iter()
            .filter(|e| e.status == EntryStatus::Pending)
            .filter(|e| e.team_id.as_deref() == Some(team_id))
            .cloned()
            .collect();
        pending.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.user_id.cmp(&b.user_id)));
        Ok(pending)
    }
}
