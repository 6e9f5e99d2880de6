use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    /// Resolution order: CLI flag, then `DATABASE_URL`, then the yaml config
    /// value, then an in-memory database.
    pub fn from_cli_or_env_or_yaml(cli_arg: Option<String>, yaml_config: Option<String>) -> Self {
        let url = if let Some(arg) = cli_arg {
            arg
        } else if let Ok(env) = std::env::var("DATABASE_URL") {
            env
        } else if let Some(yaml) = yaml_config {
            yaml
        } else {
            "sqlite::memory:".to_string()
        };

        Self { url }
    }

    pub async fn create_pool(&self) -> Result<sqlx::SqlitePool, sqlx::Error> {
        if self.url == "sqlite::memory:" || self.url == ":memory:" {
            // A pool of in-memory connections would be a pool of distinct
            // databases; keep a single shared connection instead.
            return SqlitePoolOptions::new()
                .max_connections(1)
                .connect("sqlite::memory:")
                .await;
        }

        let filename = self
            .url
            .trim_start_matches("sqlite://")
            .trim_start_matches("sqlite:");
        sqlx::SqlitePool::connect_with(
            SqliteConnectOptions::new()
                .filename(filename)
                .create_if_missing(true),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_arg_wins_over_yaml() {
        let config = DatabaseConfig::from_cli_or_env_or_yaml(
            Some("sqlite://cli.db".to_string()),
            Some("sqlite://yaml.db".to_string()),
        );
        assert_eq!(config.url, "sqlite://cli.db");
    }

    #[tokio::test]
    async fn in_memory_pool_connects() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
        };
        let pool = config.create_pool().await.expect("Failed to connect");
        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .expect("Failed to query");
    }
}
