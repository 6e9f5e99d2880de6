use crate::game::{CellMark, GameKind};
use crate::outcome::Outcome;

/// A recognized shared-result message, extracted from raw chat text.
///
/// Transient: lives for one message, long enough to derive an [`Outcome`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawAnnouncement {
    pub kind: GameKind,
    pub round: u32,
    pub cells: Vec<CellMark>,
}

impl RawAnnouncement {
    pub fn outcome(&self) -> Outcome {
        Outcome::from_cells(&self.cells)
    }
}
