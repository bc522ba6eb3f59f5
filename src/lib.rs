// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness-League: standings engine and API for the Pristine Fitness League
//!
//! This crate provides the scoring core (Run Rates, roster normalization,
//! period aggregation, challenge bonuses, ranking, missed days) as a pure
//! library, plus a thin HTTP layer for dashboards to call.

pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod scoring;
pub mod services;
pub mod time_utils;

use clock::Clock;
use config::Config;
use db::LeagueStore;
use services::StandingsService;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn LeagueStore>,
    pub standings: StandingsService,
    pub clock: Arc<dyn Clock>,
}
