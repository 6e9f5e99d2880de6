use itertools::Itertools;
use types::{LeaderboardRow, TopMode, UserStats};

/// The three Russian plural forms of a noun, selected by count.
pub struct PluralForms<'a> {
    /// "1 раунд" type counts.
    pub one: &'a str,
    /// "2–4 раунда" type counts.
    pub few: &'a str,
    /// Everything else, including the teens.
    pub many: &'a str,
}

const ROUNDS: PluralForms<'static> = PluralForms {
    one: "раунде",
    few: "раундах",
    many: "раундах",
};

const FILMS: PluralForms<'static> = PluralForms {
    one: "фильм",
    few: "фильма",
    many: "фильмов",
};

const SERIES: PluralForms<'static> = PluralForms {
    one: "сериал",
    few: "сериала",
    many: "сериалов",
};

/// Picks the grammatical form for a count: ends in 1 but is not 11, ends in
/// 2–4 but is not 12–14, otherwise the default form.
pub fn pluralize<'a>(count: u64, forms: &PluralForms<'a>) -> &'a str {
    if count % 10 == 1 && count != 11 {
        return forms.one;
    }
    if (2..=4).contains(&(count % 10)) && !(12..=14).contains(&count) {
        return forms.few;
    }
    forms.many
}

/// Renders the dual-game stats narrative.
///
/// A game with zero participation is omitted entirely; the connecting clause
/// appears only when both games were played. Each section is parameterized
/// by its own game's counts.
pub fn format_user_stats(framed: &UserStats, episode: &UserStats) -> String {
    if framed.rounds == 0 && episode.rounds == 0 {
        return "Ты ещё ни разу не играл.".to_string();
    }

    let mut text = String::from("Ты участвовал в ");

    if framed.rounds > 0 {
        text += &game_section(framed, "framed.wtf", &FILMS);
    }

    if framed.rounds > 0 && episode.rounds > 0 {
        text += "\nА ещё в ";
    }

    if episode.rounds > 0 {
        text += &game_section(episode, "episode.wtf", &SERIES);
    }

    text
}

fn game_section(stats: &UserStats, site: &str, noun: &PluralForms<'_>) -> String {
    let mut section = format!(
        "{} {} {site}, ",
        stats.rounds,
        pluralize(stats.rounds, &ROUNDS)
    );
    match stats.average_attempt {
        Some(average) => {
            section += &format!(
                "отгадал {} {} в среднем с {} кадра.",
                stats.wins,
                pluralize(stats.wins, noun),
                format_number(average)
            );
        }
        None => section += "но ни разу ничего не отгадал.",
    }
    section
}

/// Renders a leaderboard: mode title plus a rounded-grid table with 1-based
/// ranks assigned in row order.
pub fn format_top(mode: TopMode, rows: &[LeaderboardRow]) -> String {
    let title = match mode {
        TopMode::Score => "Топ по очкам:",
        TopMode::AverageAttempt => "Топ по среднему отгаданному кадру:",
        TopMode::Wins => "Топ по количеству отгаданных фильмов:",
        TopMode::Rounds => "Топ по количеству участий:",
    };

    let table_rows: Vec<[String; 3]> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            [
                (i + 1).to_string(),
                row.name.clone(),
                format_number(row.score),
            ]
        })
        .collect();

    format!("{title}\n{}", render_table(["#", "Имя", "Очки"], &table_rows))
}

/// Integral values print without a fraction; everything else keeps up to two
/// decimals with trailing zeros trimmed.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }
    format!("{value:.2}")
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

fn render_table(headers: [&str; 3], rows: &[[String; 3]]) -> String {
    let widths: Vec<usize> = (0..3)
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain([headers[col].chars().count()])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let line = widths
            .iter()
            .map(|w| "─".repeat(w + 2))
            .join(mid);
        format!("{left}{line}{right}")
    };
    // Rank and score columns hold numbers and align right, names align left.
    let line = |cells: [&str; 3]| {
        let body = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let pad = widths[col] - cell.chars().count();
                if col == 1 {
                    format!(" {cell}{} ", " ".repeat(pad))
                } else {
                    format!(" {}{cell} ", " ".repeat(pad))
                }
            })
            .join("│");
        format!("│{body}│")
    };

    let mut lines = vec![rule("╭", "┬", "╮"), line(headers), rule("├", "┼", "┤")];
    for row in rows {
        lines.push(line([row[0].as_str(), row[1].as_str(), row[2].as_str()]));
    }
    lines.push(rule("╰", "┴", "╯"));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(rounds: u64, wins: u64, average: Option<f64>) -> UserStats {
        UserStats {
            rounds,
            wins,
            average_attempt: average,
        }
    }

    #[test]
    fn plural_forms_follow_the_count() {
        assert_eq!(pluralize(1, &FILMS), "фильм");
        assert_eq!(pluralize(2, &FILMS), "фильма");
        assert_eq!(pluralize(5, &FILMS), "фильмов");
        assert_eq!(pluralize(11, &FILMS), "фильмов");
        assert_eq!(pluralize(12, &FILMS), "фильмов");
        assert_eq!(pluralize(21, &FILMS), "фильм");
        assert_eq!(pluralize(24, &FILMS), "фильма");
        assert_eq!(pluralize(25, &FILMS), "фильмов");
    }

    #[test]
    fn both_games_get_sections_and_a_connector() {
        let text = format_user_stats(&stats(3, 2, Some(3.0)), &stats(5, 1, Some(4.0)));
        assert!(text.starts_with("Ты участвовал в 3 раундах framed.wtf, "));
        assert!(text.contains("отгадал 2 фильма в среднем с 3 кадра."));
        assert!(text.contains("\nА ещё в 5 раундах episode.wtf, "));
        assert!(text.contains("отгадал 1 сериал в среднем с 4 кадра."));
    }

    #[test]
    fn episode_only_starts_without_connector() {
        let text = format_user_stats(&UserStats::empty(), &stats(3, 1, Some(2.0)));
        assert_eq!(
            text,
            "Ты участвовал в 3 раундах episode.wtf, отгадал 1 сериал в среднем с 2 кадра."
        );
    }

    #[test]
    fn framed_only_has_no_episode_section() {
        let text = format_user_stats(&stats(1, 1, Some(6.0)), &UserStats::empty());
        assert_eq!(
            text,
            "Ты участвовал в 1 раунде framed.wtf, отгадал 1 фильм в среднем с 6 кадра."
        );
    }

    #[test]
    fn zero_wins_emits_the_never_won_clause() {
        let text = format_user_stats(&stats(4, 0, None), &UserStats::empty());
        assert_eq!(
            text,
            "Ты участвовал в 4 раундах framed.wtf, но ни разу ничего не отгадал."
        );
    }

    #[test]
    fn no_participation_at_all() {
        let text = format_user_stats(&UserStats::empty(), &UserStats::empty());
        assert_eq!(text, "Ты ещё ни разу не играл.");
    }

    #[test]
    fn fractional_averages_keep_two_decimals() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(10.0 / 3.0), "3.33");
    }

    #[test]
    fn top_table_has_title_ranks_and_scores() {
        let rows = vec![
            LeaderboardRow {
                name: "Вася".to_string(),
                score: 9.0,
            },
            LeaderboardRow {
                name: "Петя".to_string(),
                score: 4.0,
            },
        ];
        let text = format_top(TopMode::Score, &rows);
        assert!(text.starts_with("Топ по очкам:\n"));
        assert!(text.contains("│ # │ Имя  │ Очки │"));
        assert!(text.contains("│ 1 │ Вася │    9 │"));
        assert!(text.contains("│ 2 │ Петя │    4 │"));
    }

    #[test]
    fn each_mode_has_its_own_title() {
        for mode in TopMode::ALL {
            let text = format_top(mode, &[]);
            assert!(text.starts_with("Топ по "));
        }
    }
}
