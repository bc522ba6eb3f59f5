// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily activity entry model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged day for one person: either a workout or a rest day.
///
/// At most one entry exists per (user, date); submissions upsert on that key
/// with last-write-wins semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Owning account ID
    pub user_id: String,
    /// Team the user belonged to at submission time (denormalized)
    pub team_id: Option<String>,
    /// Calendar day (local semantics)
    pub date: NaiveDate,
    /// Workout or rest
    pub kind: EntryKind,
    /// Activity type; required when kind is workout
    pub activity: Option<ActivityType>,
    /// Duration in minutes
    pub duration_min: Option<f64>,
    /// Distance in kilometers
    pub distance_km: Option<f64>,
    /// Step count (steps activity only)
    pub steps: Option<u32>,
    /// Holes played (golf only)
    pub holes: Option<u32>,
    /// Run Rate computed at submission time, in [0, 2.5]
    pub rr_value: f64,
    /// Review status
    pub status: EntryStatus,
    /// Opaque reference to the stored proof image
    pub proof_url: Option<String>,
}

/// Entry kind. Rest days score a point like workouts but always carry RR 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Workout,
    Rest,
}

/// Review status. Transitions are pending -> approved/rejected only;
/// only approved entries contribute to scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Pending,
    Approved,
    Rejected,
}

/// The fixed activity catalog.
///
/// `Other` absorbs unknown values from historical rows so deserialization
/// never fails on drifted data; such entries fall back to RR 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Run,
    Gym,
    Yoga,
    Cycling,
    Swimming,
    HorseRiding,
    BadmintonPickleball,
    BasketballCricket,
    Meditation,
    Steps,
    Golf,
    #[serde(other)]
    Other,
}
