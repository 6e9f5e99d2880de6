use database::{ResultRecord, ResultStore, StoreError, UserRecord};
use scoring::{format_top, format_user_stats, summarize, AnnouncementMatcher};
use types::{GameKind, TopMode};

pub const GREETING_REPLY: &str = "Привет";
pub const SAVED_REPLY: &str = "Спасибо, записал";
pub const DUPLICATE_REPLY: &str = "Твои результаты на этот раунд у меня уже есть";
pub const UNKNOWN_USER_REPLY: &str = "Я тебя не знаю";

/// Ties the matcher, the store and the formatter together: one inbound
/// message or command in, one reply string out.
pub struct ChatHandler<S> {
    store: S,
    matcher: AnnouncementMatcher,
}

impl<S: ResultStore> ChatHandler<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            matcher: AnnouncementMatcher::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Scans a raw group message for a result announcement. `None` means the
    /// message is not an announcement and needs no reply.
    pub async fn handle_message(
        &self,
        identity: &UserRecord,
        text: &str,
    ) -> Result<Option<String>, StoreError> {
        let Some(announcement) = self.matcher.match_any(text) else {
            return Ok(None);
        };

        self.store.upsert_user(identity).await?;
        let record = ResultRecord::from_outcome(
            identity.id,
            announcement.kind,
            announcement.round,
            announcement.outcome(),
        );
        let saved = self.store.save_result(&record).await?;
        log::info!(
            "{} #{} from user {}: saved={saved}",
            announcement.kind,
            announcement.round,
            identity.id
        );

        let reply = if saved { SAVED_REPLY } else { DUPLICATE_REPLY };
        Ok(Some(reply.to_string()))
    }

    /// The `/stats` command: a dual-game narrative, or a not-found reply for
    /// users the bot has never seen.
    pub async fn handle_stats(&self, user_id: i64) -> Result<String, StoreError> {
        if !self.store.user_exists(user_id).await? {
            return Ok(UNKNOWN_USER_REPLY.to_string());
        }

        let framed = self.game_stats(user_id, GameKind::Framed).await?;
        let episode = self.game_stats(user_id, GameKind::Episode).await?;
        Ok(format_user_stats(&framed, &episode))
    }

    /// The `/top` command: ranked table for one game under one ordering.
    pub async fn handle_top(&self, kind: GameKind, mode: TopMode) -> Result<String, StoreError> {
        let rows = self.store.top(kind, mode).await?;
        Ok(format_top(mode, &rows))
    }

    async fn game_stats(
        &self,
        user_id: i64,
        kind: GameKind,
    ) -> Result<types::UserStats, StoreError> {
        let results = self.store.results_for_user(user_id, kind).await?;
        let rounds: Vec<_> = results.iter().map(ResultRecord::round_result).collect();
        Ok(summarize(&rounds))
    }
}
