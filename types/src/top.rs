use serde::{Deserialize, Serialize};

/// The four leaderboard orderings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopMode {
    /// Total points: earlier wins are worth more, a lost round still earns 1.
    Score,
    /// Mean winning attempt; lower is better, so this one sorts ascending.
    AverageAttempt,
    /// Number of won rounds.
    Wins,
    /// Number of rounds played.
    Rounds,
}

impl TopMode {
    pub const ALL: [TopMode; 4] = [
        TopMode::Score,
        TopMode::AverageAttempt,
        TopMode::Wins,
        TopMode::Rounds,
    ];

    pub fn ascending(self) -> bool {
        matches!(self, TopMode::AverageAttempt)
    }

    pub fn from_name(name: &str) -> Option<TopMode> {
        match name {
            "score" => Some(TopMode::Score),
            "frame" | "average" => Some(TopMode::AverageAttempt),
            "wins" => Some(TopMode::Wins),
            "rounds" => Some(TopMode::Rounds),
            _ => None,
        }
    }
}

/// One ranked leaderboard line: current display name plus the mode's score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub name: String,
    pub score: f64,
}
