// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Entry submission and review routes.
//!
//! Submissions upsert on (user, date): logging again the same day replaces
//! the earlier entry. Yesterday may be re-logged only after a rejection.
//! Review moves pending entries to approved or rejected, and nothing else.

use crate::error::{AppError, Result};
use crate::models::{ActivityType, Entry, EntryKind, EntryStatus};
use crate::scoring::{run_rate, validate_workout, WorkoutInput};
use crate::time_utils::yesterday;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/entries", post(submit_entry))
        .route("/api/entries/pending", get(get_pending_entries))
        .route("/api/entries/review", post(review_entry))
}

// ─── Submission ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SubmitEntryRequest {
    pub user_id: String,
    pub date: NaiveDate,
    pub kind: EntryKind,
    pub activity: Option<ActivityType>,
    pub duration_min: Option<f64>,
    pub distance_km: Option<f64>,
    pub steps: Option<u32>,
    pub holes: Option<u32>,
    pub proof_url: Option<String>,
}

#[derive(Serialize)]
pub struct SubmitEntryResponse {
    pub date: NaiveDate,
    pub rr_value: f64,
    pub status: EntryStatus,
}

/// Log a workout or rest day. The entry lands as pending with its RR
/// computed from the submitter's senior thresholds.
async fn submit_entry(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SubmitEntryRequest>,
) -> Result<Json<SubmitEntryResponse>> {
    let account = state
        .store
        .get_account(&req.user_id)?
        .ok_or_else(|| AppError::NotFound(format!("Account {} not found", req.user_id)))?;
    let senior = account.is_senior();

    let today = state.standings.today();
    if !state.standings.season().contains(req.date) {
        return Err(AppError::BadRequest(
            "Date is outside the season window".to_string(),
        ));
    }

    // Same-day entries overwrite freely; yesterday only after a rejection.
    if req.date != today {
        if req.date != yesterday(today) {
            return Err(AppError::BadRequest(
                "Entries may only be logged for today, or yesterday after a rejection".to_string(),
            ));
        }
        let existing = state.store.get_entry(&req.user_id, req.date)?;
        match existing {
            Some(e) if e.status == EntryStatus::Rejected => {}
            Some(_) => {
                return Err(AppError::Conflict(
                    "Yesterday's entry was not rejected; it cannot be replaced".to_string(),
                ))
            }
            None => {
                return Err(AppError::BadRequest(
                    "No rejected entry exists for yesterday".to_string(),
                ))
            }
        }
    }

    if req.kind == EntryKind::Workout {
        let input = WorkoutInput {
            activity: req.activity,
            duration_min: req.duration_min,
            distance_km: req.distance_km,
            steps: req.steps,
            holes: req.holes,
        };
        validate_workout(&input, senior).map_err(|e| AppError::BadRequest(e.to_string()))?;
    }

    let mut entry = Entry {
        user_id: req.user_id,
        team_id: account.team_id.clone(),
        date: req.date,
        kind: req.kind,
        activity: match req.kind {
            EntryKind::Workout => req.activity,
            EntryKind::Rest => None,
        },
        duration_min: req.duration_min,
        distance_km: req.distance_km,
        steps: req.steps,
        holes: req.holes,
        rr_value: 0.0,
        status: EntryStatus::Pending,
        proof_url: req.proof_url,
    };
    entry.rr_value = run_rate(&entry, senior);

    tracing::info!(
        user_id = %entry.user_id,
        date = %entry.date,
        kind = ?entry.kind,
        rr = entry.rr_value,
        "Entry submitted"
    );

    let response = SubmitEntryResponse {
        date: entry.date,
        rr_value: entry.rr_value,
        status: entry.status,
    };
    state.store.upsert_entry(entry)?;

    Ok(Json(response))
}

// ─── Review ──────────────────────────────────────────────────

#[derive(Deserialize)]
struct PendingQuery {
    team_id: String,
}

#[derive(Serialize)]
pub struct PendingEntriesResponse {
    pub entries: Vec<Entry>,
}

/// Pending entries awaiting leader review for one team.
async fn get_pending_entries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PendingQuery>,
) -> Result<Json<PendingEntriesResponse>> {
    let entries = state.store.list_pending_entries(&params.team_id)?;
    Ok(Json(PendingEntriesResponse { entries }))
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    Approved,
    Rejected,
}

#[derive(Deserialize)]
pub struct ReviewEntryRequest {
    pub user_id: String,
    pub date: NaiveDate,
    pub decision: ReviewDecision,
}

#[derive(Serialize)]
pub struct ReviewEntryResponse {
    pub user_id: String,
    pub date: NaiveDate,
    pub status: EntryStatus,
}

/// Approve or reject a pending entry.
async fn review_entry(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReviewEntryRequest>,
) -> Result<Json<ReviewEntryResponse>> {
    let entry = state
        .store
        .get_entry(&req.user_id, req.date)?
        .ok_or_else(|| {
            AppError::NotFound(format!("No entry for {} on {}", req.user_id, req.date))
        })?;

    // pending -> approved/rejected is the only legal transition
    if entry.status != EntryStatus::Pending {
        return Err(AppError::Conflict(format!(
            "Entry is already {:?}; only pending entries can be reviewed",
            entry.status
        )));
    }

    let status = match req.decision {
        ReviewDecision::Approved => EntryStatus::Approved,
        ReviewDecision::Rejected => EntryStatus::Rejected,
    };
    let updated = state.store.set_entry_status(&req.user_id, req.date, status)?;

    tracing::info!(
        user_id = %req.user_id,
        date = %req.date,
        status = ?updated.status,
        "Entry reviewed"
    );

    Ok(Json(ReviewEntryResponse {
        user_id: updated.user_id,
        date: updated.date,
        status: updated.status,
    }))
}
