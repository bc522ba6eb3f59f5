// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived standings row. Never persisted; recomputed per request.

use serde::{Deserialize, Serialize};

/// One row of a ranked standings table (team or individual).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub entity_id: String,
    pub entity_name: String,
    /// Final points: roster-scaled raw points plus challenge bonus for
    /// teams, raw points for individuals. Integer after rounding.
    pub points: i64,
    /// Mean RR over positive-RR entries, rounded to 2 decimals; 0 when empty
    pub avg_rr: f64,
    /// 1-based rank
    pub position: u32,
    /// Position change vs the same window ending one day earlier.
    /// Positive means the entity fell in rank; 0 for new entities or when
    /// no prior snapshot exists.
    pub position_delta: i64,
}
