use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The two daily games the bot keeps score for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Framed,
    Episode,
}

impl GameKind {
    /// Probing order for announcement matching.
    pub const ALL: [GameKind; 2] = [GameKind::Framed, GameKind::Episode];

    /// Header text used in shared announcements.
    pub fn display_name(self) -> &'static str {
        match self {
            GameKind::Framed => "Framed",
            GameKind::Episode => "Episode",
        }
    }

    /// Number of attempts a round grants, and thus the announced grid length.
    pub fn grid_size(self) -> usize {
        match self {
            GameKind::Framed => 6,
            GameKind::Episode => 10,
        }
    }

    /// Emoji that opens the grid line of an announcement.
    pub fn marker(self) -> &'static str {
        match self {
            GameKind::Framed => "\u{1F3A5}",  // 🎥
            GameKind::Episode => "\u{1F4FA}", // 📺
        }
    }

    /// Trailing URL of an announcement, used for recognition only.
    pub fn url(self) -> &'static str {
        match self {
            GameKind::Framed => "https://framed.wtf",
            GameKind::Episode => "https://episode.wtf",
        }
    }

    /// Tag stored in the `game` column of the results table.
    pub fn as_str(self) -> &'static str {
        match self {
            GameKind::Framed => "framed",
            GameKind::Episode => "episode",
        }
    }

    pub fn from_tag(tag: &str) -> Option<GameKind> {
        match tag {
            "framed" => Some(GameKind::Framed),
            "episode" => Some(GameKind::Episode),
            _ => None,
        }
    }
}

impl Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One attempt cell in an announced grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellMark {
    /// ⬛ — attempt not played (or played after the win).
    Miss,
    /// 🟥 — wrong guess.
    Wrong,
    /// 🟩 — correct guess.
    Correct,
}

impl CellMark {
    /// Accepts the plain black square and the legacy variant carrying a
    /// variation selector (U+FE0F).
    pub fn from_emoji(token: &str) -> Option<CellMark> {
        match token {
            "\u{1F7E9}" => Some(CellMark::Correct),
            "\u{1F7E5}" => Some(CellMark::Wrong),
            "\u{2B1B}" | "\u{2B1B}\u{FE0F}" => Some(CellMark::Miss),
            _ => None,
        }
    }
}
