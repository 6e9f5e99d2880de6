pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use config::DatabaseConfig;
pub use error::StoreError;
pub use models::{ResultRecord, UserRecord};
pub use store::{ResultStore, SqliteStore};
