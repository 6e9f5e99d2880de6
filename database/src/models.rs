use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use types::{GameKind, Outcome, RoundResult};

/// Chat identity, refreshed on every inbound event so leaderboards always
/// show current names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub full_name: String,
    pub username: Option<String>,
}

/// One stored round result. Append-only: never updated or deleted, and at
/// most one row exists per (user, game, round).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: Option<i64>,
    pub user_id: i64,
    pub game: GameKind,
    pub round: i64,
    pub won: bool,
    pub win_attempt: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl ResultRecord {
    pub fn from_outcome(user_id: i64, game: GameKind, round: u32, outcome: Outcome) -> Self {
        ResultRecord {
            id: None,
            user_id,
            game,
            round: round as i64,
            won: outcome.won,
            win_attempt: outcome.winning_attempt.map(|a| a as i64),
            created_at: Utc::now(),
        }
    }

    /// The outcome facts the aggregator works on.
    pub fn round_result(&self) -> RoundResult {
        RoundResult {
            won: self.won,
            win_attempt: self.win_attempt.map(|a| a as u32),
        }
    }
}
