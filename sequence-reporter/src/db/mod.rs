// src/db/mod.rs
//! Reading the control table's current maximum sequence identifier.

pub mod connection;
pub mod sequence;

use thiserror::Error;

pub use sequence::SqliteSequenceSource;

/// Anything that can report the control table's maximum sequence id.
///
/// `Ok(None)` means the query ran but the aggregate was NULL (empty table).
pub trait SequenceSource {
    fn last_sequence_id(&self) -> Result<Option<i64>, DbError>;
}

#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("failed to close connection: {0}")]
    Close(#[source] rusqlite::Error),
}
