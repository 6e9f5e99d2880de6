use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use types::{GameKind, LeaderboardRow, TopMode};

use crate::error::StoreError;
use crate::models::{ResultRecord, UserRecord};

/// Read/write contract between the scoring engine and the relational store.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Insert-or-refresh a chat identity.
    async fn upsert_user(&self, user: &UserRecord) -> Result<(), StoreError>;

    async fn get_user(&self, id: i64) -> Result<Option<UserRecord>, StoreError>;

    async fn user_exists(&self, id: i64) -> Result<bool, StoreError>;

    /// First write wins: returns `true` iff a new row was stored. A result
    /// already recorded for the same (user, game, round) leaves the store
    /// untouched and returns `false`.
    async fn save_result(&self, result: &ResultRecord) -> Result<bool, StoreError>;

    async fn results_for_user(
        &self,
        user_id: i64,
        kind: GameKind,
    ) -> Result<Vec<ResultRecord>, StoreError>;

    /// Top 10 users for a game under the given ordering, joined with current
    /// display names.
    async fn top(&self, kind: GameKind, mode: TopMode) -> Result<Vec<LeaderboardRow>, StoreError>;
}

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Migration(e.to_string()))?;
        tracing::info!("database migrations applied");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Aggregate expression producing the `score` column for one ranking mode.
/// Everything is cast to REAL so all modes decode uniformly.
fn score_expr(kind: GameKind, mode: TopMode) -> String {
    match mode {
        TopMode::Score => format!(
            "CAST(SUM(CASE WHEN r.won THEN {} - r.win_attempt ELSE 1 END) AS REAL)",
            kind.grid_size() + 1
        ),
        TopMode::AverageAttempt => "AVG(r.win_attempt)".to_string(),
        TopMode::Wins => "CAST(SUM(r.won) AS REAL)".to_string(),
        TopMode::Rounds => "CAST(COUNT(*) AS REAL)".to_string(),
    }
}

#[async_trait]
impl ResultStore for SqliteStore {
    async fn upsert_user(&self, user: &UserRecord) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO users (id, full_name, username) VALUES (?, ?, ?)
             ON CONFLICT (id) DO UPDATE
             SET full_name = excluded.full_name, username = excluded.username",
        )
        .bind(user.id)
        .bind(&user.full_name)
        .bind(&user.username)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(())
    }

    async fn get_user(&self, id: i64) -> Result<Option<UserRecord>, StoreError> {
        let row = sqlx::query("SELECT id, full_name, username FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(row.map(|r| UserRecord {
            id: r.get("id"),
            full_name: r.get("full_name"),
            username: r.get("username"),
        }))
    }

    async fn user_exists(&self, id: i64) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT 1 FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(row.is_some())
    }

    async fn save_result(&self, result: &ResultRecord) -> Result<bool, StoreError> {
        // Uniqueness lives in the schema; the conflict is the only source of
        // the `false` return, so two racing identical saves cannot both win.
        let outcome = sqlx::query(
            "INSERT INTO results (user_id, game, round, won, win_attempt, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT (user_id, game, round) DO NOTHING",
        )
        .bind(result.user_id)
        .bind(result.game.as_str())
        .bind(result.round)
        .bind(result.won)
        .bind(result.win_attempt)
        .bind(result.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        let inserted = outcome.rows_affected() == 1;
        if !inserted {
            tracing::debug!(
                user_id = result.user_id,
                game = result.game.as_str(),
                round = result.round,
                "duplicate result ignored"
            );
        }
        Ok(inserted)
    }

    async fn results_for_user(
        &self,
        user_id: i64,
        kind: GameKind,
    ) -> Result<Vec<ResultRecord>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, user_id, game, round, won, win_attempt, created_at
             FROM results WHERE user_id = ? AND game = ?",
        )
        .bind(user_id)
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        rows.into_iter()
            .map(|r| {
                let tag: String = r.get("game");
                let game = GameKind::from_tag(&tag)
                    .ok_or_else(|| StoreError::Query(format!("unknown game tag: {tag}")))?;
                Ok(ResultRecord {
                    id: Some(r.get("id")),
                    user_id: r.get("user_id"),
                    game,
                    round: r.get("round"),
                    won: r.get("won"),
                    win_attempt: r.get("win_attempt"),
                    created_at: r.get("created_at"),
                })
            })
            .collect()
    }

    async fn top(&self, kind: GameKind, mode: TopMode) -> Result<Vec<LeaderboardRow>, StoreError> {
        let direction = if mode.ascending() { "ASC" } else { "DESC" };
        // Users who never won have no average to rank by.
        let having = match mode {
            TopMode::AverageAttempt => "HAVING score IS NOT NULL",
            _ => "",
        };
        let sql = format!(
            "SELECT u.full_name AS name, {expr} AS score
             FROM results r JOIN users u ON u.id = r.user_id
             WHERE r.game = ?
             GROUP BY r.user_id
             {having}
             ORDER BY score {direction}, r.user_id ASC
             LIMIT 10",
            expr = score_expr(kind, mode),
        );

        let rows = sqlx::query(&sql)
            .bind(kind.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|r| LeaderboardRow {
                name: r.get("name"),
                score: r.get("score"),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_expression_uses_the_kind_grid_size() {
        let framed = score_expr(GameKind::Framed, TopMode::Score);
        assert!(framed.contains("7 - r.win_attempt"));
        let episode = score_expr(GameKind::Episode, TopMode::Score);
        assert!(episode.contains("11 - r.win_attempt"));
    }

    #[test]
    fn lost_rounds_still_earn_a_point() {
        let expr = score_expr(GameKind::Framed, TopMode::Score);
        assert!(expr.contains("ELSE 1"));
    }
}
