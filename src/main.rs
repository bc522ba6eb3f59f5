// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness-League API Server
//!
//! Serves league standings, missed-day reports, and the entry
//! submission/review workflow over an in-memory snapshot store.

use fitness_league::{
    clock::SystemClock,
    config::Config,
    db::MemoryStore,
    scoring::{RosterTable, ScoringRules, SeasonCalendar},
    services::StandingsService,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Fitness-League API");

    // Load the roster override table
    let roster = match RosterTable::load_from_file(&config.roster_path) {
        Ok(table) => table,
        Err(e) => {
            tracing::warn!(path = %config.roster_path, error = %e, "Roster overrides unavailable; using baseline for all teams");
            RosterTable::default()
        }
    };

    // Load the league snapshot
    let store = match MemoryStore::load_from_file(&config.snapshot_path) {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!(path = %config.snapshot_path, error = %e, "League snapshot unavailable; starting empty");
            MemoryStore::default()
        }
    };
    let store: Arc<dyn fitness_league::db::LeagueStore> = Arc::new(store);

    let season = SeasonCalendar::new(config.season_start, config.season_end);
    let rules = ScoringRules {
        enforce_steps_floor: config.enforce_steps_floor,
        windowed_challenge_bonus: config.windowed_challenge_bonus,
    };
    tracing::info!(
        season_start = %season.start,
        season_end = %season.end,
        enforce_steps_floor = rules.enforce_steps_floor,
        windowed_challenge_bonus = rules.windowed_challenge_bonus,
        "Scoring rules configured"
    );

    let clock = Arc::new(SystemClock);
    let standings = StandingsService::new(
        store.clone(),
        roster,
        rules,
        season,
        clock.clone(),
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        standings,
        clock,
    });

    // Build router
    let app = fitness_league::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fitness_league=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
