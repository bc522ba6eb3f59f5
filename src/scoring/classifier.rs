// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Entry classification: Run Rate computation and submission eligibility.
//!
//! RR is a display/tie-break multiplier only. The point cap (one raw point
//! per person per day) never depends on RR magnitude.

use crate::models::{ActivityType, Entry, EntryKind};
use crate::scoring::ScoringRules;

/// Upper bound on any computed Run Rate.
pub const RR_CAP: f64 = 2.5;

/// Reference distance (km) for the run RR ratio.
const RUN_BASE_KM: f64 = 4.0;
/// Reference distance (km) for the cycling RR ratio.
const CYCLING_BASE_KM: f64 = 10.0;
/// A golf round is normalized against 9 holes.
const GOLF_BASE_HOLES: f64 = 9.0;

fn base_duration_min(senior: bool) -> f64 {
    if senior {
        30.0
    } else {
        45.0
    }
}

fn base_steps(senior: bool) -> f64 {
    if senior {
        5000.0
    } else {
        10000.0
    }
}

/// Compute the Run Rate for an entry, with senior baselines applied.
///
/// Missing numeric fields read as 0 and an unknown activity falls back to
/// RR 1.0; historical rows are often partially populated and must never
/// make aggregation fail.
pub fn run_rate(entry: &Entry, senior: bool) -> f64 {
    if entry.kind == EntryKind::Rest {
        return 1.0;
    }

    let duration = entry.duration_min.unwrap_or(0.0);
    let distance = entry.distance_km.unwrap_or(0.0);
    let base = base_duration_min(senior);

    match entry.activity {
        Some(ActivityType::Steps) => {
            let steps = entry.steps.unwrap_or(0) as f64;
            (steps / base_steps(senior)).min(RR_CAP)
        }
        Some(ActivityType::Golf) => {
            let holes = entry.holes.unwrap_or(0) as f64;
            (holes / GOLF_BASE_HOLES).min(RR_CAP)
        }
        Some(ActivityType::Run) => (duration / base).max(distance / RUN_BASE_KM).min(RR_CAP),
        Some(ActivityType::Cycling) => (duration / base)
            .max(distance / CYCLING_BASE_KM)
            .min(RR_CAP),
        Some(
            ActivityType::Gym
            | ActivityType::Yoga
            | ActivityType::Swimming
            | ActivityType::HorseRiding
            | ActivityType::BadmintonPickleball
            | ActivityType::BasketballCricket
            | ActivityType::Meditation,
        ) => (duration / base).min(RR_CAP),
        Some(ActivityType::Other) | None => 1.0,
    }
}

/// RR used at aggregation time.
///
/// With the steps floor enforced, a steps entry below the submitter's
/// base-step threshold contributes RR 0; otherwise the stored value is
/// used as-is.
pub fn effective_rr(entry: &Entry, senior: bool, rules: &ScoringRules) -> f64 {
    if rules.enforce_steps_floor
        && entry.kind == EntryKind::Workout
        && entry.activity == Some(ActivityType::Steps)
        && (entry.steps.unwrap_or(0) as f64) < base_steps(senior)
    {
        return 0.0;
    }
    entry.rr_value
}

/// Fields a member fills in when logging a workout.
#[derive(Debug, Clone, Default)]
pub struct WorkoutInput {
    pub activity: Option<ActivityType>,
    pub duration_min: Option<f64>,
    pub distance_km: Option<f64>,
    pub steps: Option<u32>,
    pub holes: Option<u32>,
}

impl WorkoutInput {
    fn duration_provided(&self) -> bool {
        self.duration_min.is_some_and(|d| d > 0.0)
    }

    fn distance_provided(&self) -> bool {
        self.distance_km.is_some_and(|d| d > 0.0)
    }
}

/// Rejections from submission-time eligibility checks.
///
/// These minimums are enforced only when an entry is logged, never
/// re-checked during aggregation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("activity type is required for workout entries")]
    MissingActivity,

    #[error("minimum {0} steps required")]
    StepsBelowMinimum(u32),

    #[error("minimum {0} holes required")]
    HolesBelowMinimum(u32),

    #[error("minimum {0} km required")]
    DistanceBelowMinimum(f64),

    #[error("minimum {0} minutes required")]
    DurationBelowMinimum(f64),

    #[error("provide either duration or distance, not both")]
    DurationAndDistance,

    #[error("minimum {0} minutes or {1} km required")]
    DurationOrDistanceBelowMinimum(f64, f64),
}

/// Check the eligibility minimums for a workout submission.
pub fn validate_workout(input: &WorkoutInput, senior: bool) -> Result<(), ValidationError> {
    let activity = input.activity.ok_or(ValidationError::MissingActivity)?;
    let min_duration = base_duration_min(senior);

    match activity {
        ActivityType::Steps => {
            let min_steps = base_steps(senior) as u32;
            if input.steps.unwrap_or(0) < min_steps {
                return Err(ValidationError::StepsBelowMinimum(min_steps));
            }
        }
        ActivityType::Golf => {
            let min_holes = GOLF_BASE_HOLES as u32;
            if input.holes.unwrap_or(0) < min_holes {
                return Err(ValidationError::HolesBelowMinimum(min_holes));
            }
        }
        ActivityType::Run => {
            // Distance only, one continuous stretch
            let min_km = if senior { 2.6 } else { RUN_BASE_KM };
            if !input.distance_provided() || input.distance_km.unwrap_or(0.0) < min_km {
                return Err(ValidationError::DistanceBelowMinimum(min_km));
            }
        }
        ActivityType::Cycling => {
            if input.duration_provided() && input.distance_provided() {
                return Err(ValidationError::DurationAndDistance);
            }
            let duration_ok = input.duration_provided()
                && input.duration_min.unwrap_or(0.0) >= min_duration;
            let distance_ok = input.distance_provided()
                && input.distance_km.unwrap_or(0.0) >= CYCLING_BASE_KM;
            if !duration_ok && !distance_ok {
                return Err(ValidationError::DurationOrDistanceBelowMinimum(
                    min_duration,
                    CYCLING_BASE_KM,
                ));
            }
        }
        _ => {
            if !input.duration_provided() || input.duration_min.unwrap_or(0.0) < min_duration {
                return Err(ValidationError::DurationBelowMinimum(min_duration));
            }
        }
    }

    Ok(())
}
