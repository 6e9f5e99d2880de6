pub mod announcement;
pub mod game;
pub mod outcome;
pub mod stats;
pub mod top;

pub use announcement::RawAnnouncement;
pub use game::{CellMark, GameKind};
pub use outcome::Outcome;
pub use stats::{RoundResult, UserStats};
pub use top::{LeaderboardRow, TopMode};
