use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database connection error: {0}")]
    Connection(String),

    #[error("query execution error: {0}")]
    Query(String),

    #[error("migration error: {0}")]
    Migration(String),
}
