// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::NaiveDate;
use fitness_league::clock::FixedClock;
use fitness_league::config::Config;
use fitness_league::db::memory::{MemoryStore, Snapshot};
use fitness_league::db::LeagueStore;
use fitness_league::models::{
    Account, ActivityType, Challenge, ChallengeScore, Entry, EntryKind, EntryStatus, Role, Team,
};
use fitness_league::routes::create_router;
use fitness_league::scoring::{RosterTable, ScoringRules, SeasonCalendar};
use fitness_league::services::StandingsService;
use fitness_league::AppState;
use std::sync::Arc;

/// Roster overrides used across tests: Crusaders carry 11 players.
#[allow(dead_code)]
pub fn test_roster() -> RosterTable {
    RosterTable::load_from_json(r#"{"baseline": 10, "overrides": {"Crusaders": 11}}"#)
        .expect("roster json")
}

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[allow(dead_code)]
pub fn team(id: &str, name: &str) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[allow(dead_code)]
pub fn account(id: &str, first_name: &str, role: Role, team_id: Option<&str>, age: u32) -> Account {
    Account {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: "Test".to_string(),
        username: id.to_string(),
        role,
        team_id: team_id.map(String::from),
        age: Some(age),
        gender: None,
    }
}

#[allow(dead_code)]
pub fn workout(user_id: &str, team_id: &str, date: NaiveDate, rr: f64, status: EntryStatus) -> Entry {
    Entry {
        user_id: user_id.to_string(),
        team_id: Some(team_id.to_string()),
        date,
        kind: EntryKind::Workout,
        activity: Some(ActivityType::Gym),
        duration_min: Some(45.0 * rr),
        distance_km: None,
        steps: None,
        holes: None,
        rr_value: rr,
        status,
        proof_url: None,
    }
}

#[allow(dead_code)]
pub fn challenge(id: &str, name: &str, end: NaiveDate) -> Challenge {
    Challenge {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        start_date: end - chrono::Days::new(6),
        end_date: end,
        rules_doc_url: None,
    }
}

#[allow(dead_code)]
pub fn challenge_score(challenge_id: &str, team_id: &str, score: Option<f64>) -> ChallengeScore {
    ChallengeScore {
        challenge_id: challenge_id.to_string(),
        team_id: team_id.to_string(),
        score,
    }
}

/// Build a test app over a seeded snapshot with the clock pinned at `today`.
/// Season dates come from the default config (2025-10-25 to 2026-01-12).
#[allow(dead_code)]
pub fn create_test_app(snapshot: Snapshot, today: NaiveDate) -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let store: Arc<dyn LeagueStore> = Arc::new(MemoryStore::new(snapshot));
    let clock = Arc::new(FixedClock(today));
    let season = SeasonCalendar::new(config.season_start, config.season_end);

    let standings = StandingsService::new(
        store.clone(),
        test_roster(),
        ScoringRules::default(),
        season,
        clock.clone(),
    );

    let state = Arc::new(AppState {
        config,
        store,
        standings,
        clock,
    });

    (create_router(state.clone()), state)
}

/// Read a JSON response body.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse body json")
}
