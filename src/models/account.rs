//! Account model.

use serde::{Deserialize, Serialize};

/// Age at which the lower senior thresholds apply.
pub const SENIOR_AGE: u32 = 65;

/// A league member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Unique login name
    pub username: String,
    pub role: Role,
    pub team_id: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
}

impl Account {
    /// Seniors (65+) get lower RR baselines and eligibility minimums.
    pub fn is_senior(&self) -> bool {
        self.age.is_some_and(|a| a >= SENIOR_AGE)
    }

    /// Display name used in standings tables.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let trimmed = name.trim();
        if trimmed.is_empty() {
            self.username.clone()
        } else {
            trimmed.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Player,
    Leader,
    Governor,
}
