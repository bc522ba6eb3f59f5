// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Special challenge models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A bonus competition run alongside the regular season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Opaque reference to the rules document, if one was uploaded
    pub rules_doc_url: Option<String>,
}

/// A governor-entered flat score for one team in one challenge.
///
/// A `None` score means "not yet posted", which is distinct from zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeScore {
    pub challenge_id: String,
    pub team_id: String,
    pub score: Option<f64>,
}
