// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod account;
pub mod challenge;
pub mod entry;
pub mod standings;
pub mod team;

pub use account::{Account, Role};
pub use challenge::{Challenge, ChallengeScore};
pub use entry::{ActivityType, Entry, EntryKind, EntryStatus};
pub use standings::StandingRow;
pub use team::Team;
