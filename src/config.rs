//! Application configuration loaded from environment variables.
//!
//! Every knob has a workable default so a local server starts with no
//! environment at all; production deployments override via env or .env.

use chrono::NaiveDate;
use std::env;

/// Default season window, matching the league's published dates.
const DEFAULT_SEASON_START: &str = "2025-10-25";
const DEFAULT_SEASON_END: &str = "2026-01-12";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// First day entries may be logged for
    pub season_start: NaiveDate,
    /// Last day entries may be logged for
    pub season_end: NaiveDate,
    /// Path to the league snapshot JSON
    pub snapshot_path: String,
    /// Path to the roster override JSON
    pub roster_path: String,
    /// Apply the strict steps floor during aggregation (see ScoringRules)
    pub enforce_steps_floor: bool,
    /// Credit challenge bonuses only to the period they concluded in
    pub windowed_challenge_bonus: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:5173".to_string(),
            season_start: parse_date_literal(DEFAULT_SEASON_START),
            season_end: parse_date_literal(DEFAULT_SEASON_END),
            snapshot_path: "data/league_snapshot.json".to_string(),
            roster_path: "data/roster_overrides.json".to_string(),
            enforce_steps_floor: false,
            windowed_challenge_bonus: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            season_start: parse_date_env("SEASON_START", DEFAULT_SEASON_START)?,
            season_end: parse_date_env("SEASON_END", DEFAULT_SEASON_END)?,
            snapshot_path: env::var("SNAPSHOT_PATH")
                .unwrap_or_else(|_| "data/league_snapshot.json".to_string()),
            roster_path: env::var("ROSTER_PATH")
                .unwrap_or_else(|_| "data/roster_overrides.json".to_string()),
            enforce_steps_floor: parse_bool_env("ENFORCE_STEPS_FLOOR", false),
            windowed_challenge_bonus: parse_bool_env("WINDOWED_CHALLENGE_BONUS", true),
        })
    }
}

fn parse_date_literal(value: &str) -> NaiveDate {
    // Only called with the compile-time defaults above
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid default date literal")
}

fn parse_date_env(var: &'static str, default: &str) -> Result<NaiveDate, ConfigError> {
    let raw = env::var(var).unwrap_or_else(|_| default.to_string());
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|e| ConfigError::Invalid {
        var,
        reason: format!("{raw:?}: {e}"),
    })
}

fn parse_bool_env(var: &str, default: bool) -> bool {
    match env::var(var) {
        Ok(raw) => matches!(raw.trim(), "1" | "true" | "TRUE" | "yes"),
        Err(_) => default,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}
