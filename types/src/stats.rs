use serde::{Deserialize, Serialize};

/// The outcome facts of one stored result, as the aggregator sees them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub won: bool,
    pub win_attempt: Option<u32>,
}

/// Per-user summary over one game's stored results. Recomputed on every
/// query, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub rounds: u64,
    pub wins: u64,
    /// Mean winning attempt over won rounds; `None` when nothing was won.
    pub average_attempt: Option<f64>,
}

impl UserStats {
    pub fn empty() -> UserStats {
        UserStats {
            rounds: 0,
            wins: 0,
            average_attempt: None,
        }
    }
}
