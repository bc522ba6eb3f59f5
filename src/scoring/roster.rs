// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Roster-size normalization.
//!
//! Team point totals are corrected for non-baseline roster sizes before
//! display. The override table lives in a JSON file (configuration, not
//! compiled into logic); unlisted teams default to the baseline size.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Canonical roster size the league was designed around.
pub const BASELINE_ROSTER: u32 = 10;

/// Team name -> roster size lookup, case-insensitive on name.
#[derive(Debug, Clone)]
pub struct RosterTable {
    baseline: u32,
    /// Keyed by lowercased team name; only non-baseline teams are listed.
    overrides: HashMap<String, u32>,
}

/// On-disk shape of the override file.
#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default = "default_baseline")]
    baseline: u32,
    #[serde(default)]
    overrides: HashMap<String, u32>,
}

fn default_baseline() -> u32 {
    BASELINE_ROSTER
}

impl Default for RosterTable {
    fn default() -> Self {
        Self {
            baseline: BASELINE_ROSTER,
            overrides: HashMap::new(),
        }
    }
}

impl RosterTable {
    /// Load the override table from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RosterError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| RosterError::Io(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load the override table from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, RosterError> {
        let file: RosterFile =
            serde_json::from_str(json_data).map_err(|e| RosterError::Parse(e.to_string()))?;
        let overrides: HashMap<String, u32> = file
            .overrides
            .into_iter()
            .map(|(name, size)| (name.to_lowercase(), size))
            .collect();

        tracing::info!(
            baseline = file.baseline,
            overrides = overrides.len(),
            "Loaded roster table"
        );
        Ok(Self {
            baseline: file.baseline,
            overrides,
        })
    }

    /// Roster size for a team, defaulting to the baseline.
    pub fn roster_size(&self, team_name: &str) -> u32 {
        self.overrides
            .get(&team_name.to_lowercase())
            .copied()
            .unwrap_or(self.baseline)
    }

    /// Scaling factor: 1 at or below baseline, baseline/size above it.
    pub fn factor(&self, team_name: &str) -> f64 {
        let size = self.roster_size(team_name);
        if size <= self.baseline {
            1.0
        } else {
            f64::from(self.baseline) / f64::from(size)
        }
    }

    /// Scale raw entry-derived points for display. Rounds exactly once,
    /// after scaling; integer challenge bonuses are added on top later.
    pub fn scale(&self, team_name: &str, raw_points: i64) -> i64 {
        (raw_points as f64 * self.factor(team_name)).round() as i64
    }
}

/// Errors from loading the roster override table.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Failed to read roster file: {0}")]
    Io(String),

    #[error("Failed to parse roster file: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RosterTable {
        RosterTable::load_from_json(
            r#"{
                "baseline": 10,
                "overrides": {
                    "Crusaders": 11,
                    "Frolic Fetizens": 13,
                    "Interstellar": 13,
                    "Tiny Titans": 8
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_unlisted_team_uses_baseline() {
        let t = table();
        assert_eq!(t.roster_size("Alpha"), 10);
        assert_eq!(t.factor("Alpha"), 1.0);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let t = table();
        assert_eq!(t.roster_size("CRUSADERS"), 11);
        assert_eq!(t.roster_size("frolic fetizens"), 13);
    }

    #[test]
    fn test_small_roster_is_not_boosted() {
        // Factor never exceeds 1: under-strength teams keep raw points.
        let t = table();
        assert_eq!(t.factor("Tiny Titans"), 1.0);
        assert_eq!(t.scale("Tiny Titans", 22), 22);
    }

    #[test]
    fn test_crusaders_scaling() {
        // 22 raw points at roster 11: round(22 * 10/11) = 20
        let t = table();
        assert_eq!(t.scale("Crusaders", 22), 20);
    }

    #[test]
    fn test_larger_roster_never_displays_more() {
        let t = table();
        for raw in 0..200 {
            assert!(t.scale("Interstellar", raw) <= t.scale("Alpha", raw));
        }
    }

    #[test]
    fn test_missing_fields_default() {
        let t = RosterTable::load_from_json("{}").unwrap();
        assert_eq!(t.roster_size("Anyone"), BASELINE_ROSTER);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            RosterTable::load_from_json("not json"),
            Err(RosterError::Parse(_))
        ));
    }
}
