// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Standings, period, report, and challenge routes.

use crate::error::{AppError, Result};
use crate::models::StandingRow;
use crate::scoring::{PeriodOption, Window};
use crate::services::MissedDayReport;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

const MAX_PER_PAGE: u32 = 100;

/// Read-only standings API.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/periods", get(get_periods))
        .route("/api/standings/teams", get(get_team_standings))
        .route("/api/standings/individuals", get(get_individual_standings))
        .route("/api/reports/missed-days", get(get_missed_days))
        .route("/api/challenges", get(get_challenges))
}

// ─── Periods ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PeriodsResponse {
    pub periods: Vec<PeriodOption>,
}

/// List the selectable standings periods as of today.
async fn get_periods(State(state): State<Arc<AppState>>) -> Json<PeriodsResponse> {
    let today = state.standings.today();
    Json(PeriodsResponse {
        periods: state.standings.season().period_options(today),
    })
}

// ─── Standings ───────────────────────────────────────────────

#[derive(Deserialize)]
struct StandingsQuery {
    /// Period identifier ("overall" or "week-N"); defaults to overall
    period: Option<String>,
    /// Pagination: page number (1-indexed), individuals only
    #[serde(default = "default_page")]
    page: u32,
    /// Pagination: items per page, individuals only
    #[serde(default = "default_per_page")]
    per_page: u32,
}

fn default_page() -> u32 {
    1
}
fn default_per_page() -> u32 {
    10
}

#[derive(Serialize)]
pub struct TeamStandingsResponse {
    pub period: String,
    pub window: Window,
    pub standings: Vec<StandingRow>,
}

#[derive(Serialize)]
pub struct IndividualStandingsResponse {
    pub period: String,
    pub window: Window,
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub standings: Vec<StandingRow>,
}

fn resolve_window(state: &AppState, period: &str) -> Result<Window> {
    let today = state.standings.today();
    state
        .standings
        .season()
        .resolve_period(period, today)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown period '{period}'")))
}

/// Ranked team standings for a period.
async fn get_team_standings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StandingsQuery>,
) -> Result<Json<TeamStandingsResponse>> {
    let period = params.period.unwrap_or_else(|| "overall".to_string());
    let window = resolve_window(&state, &period)?;

    tracing::debug!(%period, ?window, "Computing team standings");
    let standings = state.standings.team_standings(window)?;

    Ok(Json(TeamStandingsResponse {
        period,
        window,
        standings,
    }))
}

/// Ranked individual standings for a period, paginated.
async fn get_individual_standings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StandingsQuery>,
) -> Result<Json<IndividualStandingsResponse>> {
    if params.page < 1 {
        return Err(AppError::BadRequest(
            "Page must be greater than 0".to_string(),
        ));
    }
    let per_page = params.per_page.min(MAX_PER_PAGE).max(1);

    let period = params.period.unwrap_or_else(|| "overall".to_string());
    let window = resolve_window(&state, &period)?;

    tracing::debug!(%period, page = params.page, "Computing individual standings");
    let all = state.standings.individual_standings(window)?;
    let total = all.len() as u32;

    let start = (params.page as usize - 1).saturating_mul(per_page as usize);
    let standings = if start < all.len() {
        let end = start.saturating_add(per_page as usize).min(all.len());
        all[start..end].to_vec()
    } else {
        vec![]
    };

    Ok(Json(IndividualStandingsResponse {
        period,
        window,
        page: params.page,
        per_page,
        total,
        standings,
    }))
}

// ─── Missed Days ─────────────────────────────────────────────

/// Missed-day report, season start through yesterday.
async fn get_missed_days(State(state): State<Arc<AppState>>) -> Result<Json<MissedDayReport>> {
    Ok(Json(state.standings.missed_day_report()?))
}

// ─── Challenges ──────────────────────────────────────────────

#[derive(Serialize)]
pub struct ChallengeView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub rules_doc_url: Option<String>,
    /// team_id -> posted score; None means not yet posted
    pub scores: HashMap<String, Option<f64>>,
}

#[derive(Serialize)]
pub struct ChallengesResponse {
    pub challenges: Vec<ChallengeView>,
}

/// List special challenges with their per-team scores.
async fn get_challenges(State(state): State<Arc<AppState>>) -> Result<Json<ChallengesResponse>> {
    let challenges = state.store.list_challenges()?;
    let scores = state.store.list_challenge_scores()?;

    let views = challenges
        .into_iter()
        .map(|c| {
            let scores: HashMap<String, Option<f64>> = scores
                .iter()
                .filter(|s| s.challenge_id == c.id)
                .map(|s| (s.team_id.clone(), s.score))
                .collect();
            ChallengeView {
                id: c.id,
                name: c.name,
                description: c.description,
                start_date: c.start_date,
                end_date: c.end_date,
                rules_doc_url: c.rules_doc_url,
                scores,
            }
        })
        .collect();

    Ok(Json(ChallengesResponse { challenges: views }))
}
