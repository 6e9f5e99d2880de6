use types::{RoundResult, UserStats};

/// Summarizes one user's stored results for a single game.
///
/// Zero results and zero wins are ordinary inputs: the average is simply
/// absent, never a division error.
pub fn summarize(results: &[RoundResult]) -> UserStats {
    let rounds = results.len() as u64;
    let won: Vec<u32> = results
        .iter()
        .filter(|r| r.won)
        .filter_map(|r| r.win_attempt)
        .collect();
    let wins = won.len() as u64;
    let average_attempt = if wins > 0 {
        Some(won.iter().map(|a| *a as f64).sum::<f64>() / wins as f64)
    } else {
        None
    };

    UserStats {
        rounds,
        wins,
        average_attempt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn won(attempt: u32) -> RoundResult {
        RoundResult {
            won: true,
            win_attempt: Some(attempt),
        }
    }

    fn lost() -> RoundResult {
        RoundResult {
            won: false,
            win_attempt: None,
        }
    }

    #[test]
    fn empty_results_are_all_zero() {
        let stats = summarize(&[]);
        assert_eq!(stats, UserStats::empty());
    }

    #[test]
    fn zero_wins_leaves_average_unset() {
        let stats = summarize(&[lost(), lost(), lost()]);
        assert_eq!(stats.rounds, 3);
        assert_eq!(stats.wins, 0);
        assert_eq!(stats.average_attempt, None);
    }

    #[test]
    fn average_is_over_won_rounds_only() {
        let stats = summarize(&[won(2), won(4), lost()]);
        assert_eq!(stats.rounds, 3);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.average_attempt, Some(3.0));
    }

    #[test]
    fn single_win_average_is_the_attempt_itself() {
        let stats = summarize(&[won(5)]);
        assert_eq!(stats.average_attempt, Some(5.0));
    }
}
