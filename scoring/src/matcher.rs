use regex::Regex;
use types::{CellMark, GameKind, RawAnnouncement};

/// Recognizes shared game results inside raw chat messages.
///
/// One compiled pattern per game kind; matching is search semantics, so the
/// announcement may sit anywhere in the message. Kinds are probed in
/// [`GameKind::ALL`] order and the first hit wins.
pub struct AnnouncementMatcher {
    patterns: Vec<(GameKind, Regex)>,
}

impl AnnouncementMatcher {
    pub fn new() -> AnnouncementMatcher {
        let patterns = GameKind::ALL
            .into_iter()
            .map(|kind| {
                let regex =
                    Regex::new(&announcement_pattern(kind)).expect("valid announcement pattern");
                (kind, regex)
            })
            .collect();
        AnnouncementMatcher { patterns }
    }

    /// Tries every game kind in order; `None` means the message is not a
    /// result announcement and should be ignored.
    pub fn match_any(&self, text: &str) -> Option<RawAnnouncement> {
        self.patterns
            .iter()
            .find_map(|(kind, _)| self.match_kind(*kind, text))
    }

    pub fn match_kind(&self, kind: GameKind, text: &str) -> Option<RawAnnouncement> {
        let (_, regex) = self.patterns.iter().find(|(k, _)| *k == kind)?;
        let captures = regex.captures(text)?;

        // The pattern constrains this to digits, but an absurdly long round
        // number still has to overflow into "no match" rather than panic.
        let round = match captures["round"].parse::<u32>() {
            Ok(round) => round,
            Err(err) => {
                log::debug!("unparseable round number in {kind} announcement: {err}");
                return None;
            }
        };

        let cells: Option<Vec<CellMark>> = captures["cells"]
            .split_whitespace()
            .map(CellMark::from_emoji)
            .collect();
        let cells = cells?;
        if cells.len() != kind.grid_size() {
            return None;
        }

        Some(RawAnnouncement { kind, round, cells })
    }
}

impl Default for AnnouncementMatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn announcement_pattern(kind: GameKind) -> String {
    // Legacy miss variant (⬛️, with U+FE0F) listed before the plain square.
    let cell = "(?: \u{1F7E5}| \u{1F7E9}| \u{2B1B}\u{FE0F}| \u{2B1B})";
    format!(
        "{name} #(?P<round>\\d+)\n{marker}(?P<cells>{cell}{{{size}}})\n\n{url}",
        name = kind.display_name(),
        marker = kind.marker(),
        cell = cell,
        size = kind.grid_size(),
        url = regex::escape(kind.url()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAMED_WIN: &str = "Framed #742\n🎥 🟥 🟥 🟩 ⬛ ⬛ ⬛\n\nhttps://framed.wtf";
    const EPISODE_LOSS: &str =
        "Episode #120\n📺 🟥 🟥 🟥 🟥 🟥 🟥 🟥 🟥 🟥 🟥\n\nhttps://episode.wtf";

    #[test]
    fn matches_framed_announcement() {
        let matcher = AnnouncementMatcher::new();
        let announcement = matcher.match_any(FRAMED_WIN).expect("should match");
        assert_eq!(announcement.kind, GameKind::Framed);
        assert_eq!(announcement.round, 742);
        assert_eq!(announcement.cells.len(), 6);
        assert_eq!(announcement.cells[2], CellMark::Correct);
    }

    #[test]
    fn matches_episode_announcement() {
        let matcher = AnnouncementMatcher::new();
        let announcement = matcher.match_any(EPISODE_LOSS).expect("should match");
        assert_eq!(announcement.kind, GameKind::Episode);
        assert_eq!(announcement.round, 120);
        assert_eq!(announcement.cells.len(), 10);
        assert!(announcement.cells.iter().all(|c| *c == CellMark::Wrong));
    }

    #[test]
    fn accepts_legacy_miss_cells() {
        let matcher = AnnouncementMatcher::new();
        let text = "Framed #3\n🎥 🟩 ⬛️ ⬛️ ⬛️ ⬛️ ⬛️\n\nhttps://framed.wtf";
        let announcement = matcher.match_any(text).expect("should match");
        assert_eq!(announcement.cells[0], CellMark::Correct);
        assert!(announcement.cells[1..]
            .iter()
            .all(|c| *c == CellMark::Miss));
    }

    #[test]
    fn matches_announcement_embedded_in_chatter() {
        let matcher = AnnouncementMatcher::new();
        let text = format!("look at this\n{FRAMED_WIN}\nnot bad, eh");
        assert!(matcher.match_any(&text).is_some());
    }

    #[test]
    fn wrong_cell_count_does_not_match() {
        let matcher = AnnouncementMatcher::new();
        // Five cells on a Framed grid.
        let text = "Framed #10\n🎥 🟥 🟥 🟩 ⬛ ⬛\n\nhttps://framed.wtf";
        assert!(matcher.match_any(text).is_none());
    }

    #[test]
    fn framed_grid_does_not_match_episode() {
        let matcher = AnnouncementMatcher::new();
        assert!(matcher.match_kind(GameKind::Episode, FRAMED_WIN).is_none());
    }

    #[test]
    fn missing_url_does_not_match() {
        let matcher = AnnouncementMatcher::new();
        let text = "Framed #10\n🎥 🟥 🟥 🟩 ⬛ ⬛ ⬛\n\nhttps://framed.example";
        assert!(matcher.match_any(text).is_none());
    }

    #[test]
    fn plain_chatter_does_not_match() {
        let matcher = AnnouncementMatcher::new();
        assert!(matcher.match_any("Framed was hard today #742").is_none());
    }

    #[test]
    fn overflowing_round_number_does_not_match() {
        let matcher = AnnouncementMatcher::new();
        let text = "Framed #99999999999999999999\n🎥 🟥 🟥 🟩 ⬛ ⬛ ⬛\n\nhttps://framed.wtf";
        assert!(matcher.match_any(text).is_none());
    }
}
