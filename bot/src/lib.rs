pub mod config;
pub mod handler;

pub use config::BotConfig;
pub use handler::ChatHandler;
