//! Team model.

use serde::{Deserialize, Serialize};

/// A league team. Roster size is not stored here; it comes from the
/// roster override table keyed by team name (default baseline 10).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}
