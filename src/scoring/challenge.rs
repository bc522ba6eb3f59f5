// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Challenge bonus merging.
//!
//! A bonus is credited to whichever period the challenge concluded in:
//! a score counts only when the challenge's end date falls inside the
//! aggregation window. The older unconditional-sum rule survives behind
//! `ScoringRules::windowed_challenge_bonus = false`.

use crate::models::{Challenge, ChallengeScore};
use crate::scoring::{ScoringRules, Window};
use std::collections::HashSet;

/// Sum the challenge bonus for one team over one window.
///
/// Unposted scores (`None`) count as 0.
pub fn team_bonus(
    team_id: &str,
    challenges: &[Challenge],
    scores: &[ChallengeScore],
    window: Window,
    rules: &ScoringRules,
) -> f64 {
    let qualifying: HashSet<&str> = challenges
        .iter()
        .filter(|c| !rules.windowed_challenge_bonus || window.contains(c.end_date))
        .map(|c| c.id.as_str())
        .collect();

    scores
        .iter()
        .filter(|s| s.team_id == team_id && qualifying.contains(s.challenge_id.as_str()))
        .map(|s| s.score.unwrap_or(0.0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn challenge(id: &str, end: NaiveDate) -> Challenge {
        Challenge {
            id: id.to_string(),
            name: format!("Challenge {id}"),
            description: String::new(),
            start_date: end - chrono::Days::new(6),
            end_date: end,
            rules_doc_url: None,
        }
    }

    fn score(challenge_id: &str, team_id: &str, score: Option<f64>) -> ChallengeScore {
        ChallengeScore {
            challenge_id: challenge_id.to_string(),
            team_id: team_id.to_string(),
            score,
        }
    }

    #[test]
    fn test_windowed_rule_credits_concluding_period() {
        let challenges = vec![challenge("c1", date(11, 5)), challenge("c2", date(12, 1))];
        let scores = vec![score("c1", "t1", Some(10.0)), score("c2", "t1", Some(7.0))];
        let window = Window::new(date(11, 1), date(11, 7));

        let bonus = team_bonus("t1", &challenges, &scores, window, &ScoringRules::default());
        assert_eq!(bonus, 10.0);
    }

    #[test]
    fn test_unconditional_rule_sums_everything() {
        let challenges = vec![challenge("c1", date(11, 5)), challenge("c2", date(12, 1))];
        let scores = vec![score("c1", "t1", Some(10.0)), score("c2", "t1", Some(7.0))];
        let window = Window::new(date(11, 1), date(11, 7));

        let rules = ScoringRules {
            windowed_challenge_bonus: false,
            ..ScoringRules::default()
        };
        let bonus = team_bonus("t1", &challenges, &scores, window, &rules);
        assert_eq!(bonus, 17.0);
    }

    #[test]
    fn test_unposted_score_counts_as_zero() {
        let challenges = vec![challenge("c1", date(11, 5))];
        let scores = vec![score("c1", "t1", None)];
        let window = Window::new(date(11, 1), date(11, 7));

        let bonus = team_bonus("t1", &challenges, &scores, window, &ScoringRules::default());
        assert_eq!(bonus, 0.0);
    }

    #[test]
    fn test_other_teams_scores_are_ignored() {
        let challenges = vec![challenge("c1", date(11, 5))];
        let scores = vec![score("c1", "t1", Some(10.0)), score("c1", "t2", Some(4.0))];
        let window = Window::new(date(11, 1), date(11, 7));

        let bonus = team_bonus("t2", &challenges, &scores, window, &ScoringRules::default());
        assert_eq!(bonus, 4.0);
    }
}
