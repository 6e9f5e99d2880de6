use std::io::{self, BufRead, Write};

use clap::Parser;

use bot::handler::GREETING_REPLY;
use bot::{BotConfig, ChatHandler};
use database::{DatabaseConfig, ResultStore, SqliteStore, StoreError, UserRecord};
use types::{GameKind, TopMode};

/// Console front for the scoring engine: paste announcements (with `\n` for
/// line breaks) or type `/stats` and `/top [framed|episode] [mode]`.
#[derive(Parser, Debug)]
struct Params {
    /// Numeric identity to act as.
    #[arg(long, default_value_t = 1)]
    user_id: i64,

    /// Display name stored for that identity.
    #[arg(long, default_value = "Console User")]
    name: String,

    /// SQLite database URL; falls back to DATABASE_URL, the yaml config,
    /// then an in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Optional yaml config file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Params::parse();
    log::info!("args: {args:?}");

    let yaml = match &args.config {
        Some(path) => BotConfig::load(path)?,
        None => BotConfig::default(),
    };
    let db_config = DatabaseConfig::from_cli_or_env_or_yaml(args.database.clone(), yaml.database_url);
    let pool = db_config.create_pool().await?;
    let store = SqliteStore::new(pool);
    store.run_migrations().await?;

    let handler = ChatHandler::new(store);
    let identity = UserRecord {
        id: args.user_id,
        full_name: args.name.clone(),
        username: None,
    };

    let stdin = io::stdin();
    let mut buf = String::new();
    loop {
        print!(">> ");
        let _ = io::stdout().flush();
        buf.clear();
        if stdin.lock().read_line(&mut buf)? == 0 {
            break;
        }
        let line = buf.trim_end();
        if line.is_empty() {
            continue;
        }
        match dispatch(&handler, &identity, line).await {
            Ok(Some(reply)) => println!("{reply}"),
            Ok(None) => {}
            Err(err) => log::error!("store failure: {err}"),
        }
    }
    Ok(())
}

async fn dispatch<S: ResultStore>(
    handler: &ChatHandler<S>,
    identity: &UserRecord,
    line: &str,
) -> Result<Option<String>, StoreError> {
    if line == "/start" {
        return Ok(Some(GREETING_REPLY.to_string()));
    }
    if line == "/stats" {
        return handler.handle_stats(identity.id).await.map(Some);
    }
    if let Some(rest) = line.strip_prefix("/top") {
        let mut kind = GameKind::Framed;
        let mut mode = TopMode::Score;
        for word in rest.split_whitespace() {
            if let Some(k) = GameKind::from_tag(word) {
                kind = k;
            } else if let Some(m) = TopMode::from_name(word) {
                mode = m;
            }
        }
        return handler.handle_top(kind, mode).await.map(Some);
    }

    // Announcements are multi-line; the console stand-in accepts them as a
    // single line with literal `\n` separators.
    let text = line.replace("\\n", "\n");
    handler.handle_message(identity, &text).await
}
