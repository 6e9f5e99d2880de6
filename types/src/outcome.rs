use crate::game::CellMark;

/// Normalized result of one announced round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub won: bool,
    /// 1-based attempt the round was won on. Set iff `won`.
    pub winning_attempt: Option<u32>,
}

impl Outcome {
    /// Derives the outcome from a grid, scanning left to right.
    ///
    /// The winning attempt counts only the wrong guesses made before the
    /// correct one; unplayed cells interleaved anywhere do not count.
    pub fn from_cells(cells: &[CellMark]) -> Outcome {
        let mut wrong_before = 0u32;
        for cell in cells {
            match cell {
                CellMark::Correct => {
                    return Outcome {
                        won: true,
                        winning_attempt: Some(wrong_before + 1),
                    }
                }
                CellMark::Wrong => wrong_before += 1,
                CellMark::Miss => {}
            }
        }
        Outcome {
            won: false,
            winning_attempt: None,
        }
    }
}
