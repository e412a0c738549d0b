// src/db/sequence.rs

use super::{connection::open_read_only, DbError, SequenceSource};
use crate::config::DatabaseConfig;
use rusqlite::Connection;

/// `SELECT MAX(<column>) FROM <table>`. Both names are validated identifiers.
pub fn max_sequence_sql(table: &str, column: &str) -> String {
    format!("SELECT MAX({column}) FROM {table}")
}

/// Run the aggregate on an open connection. The statement is dropped before
/// returning.
pub fn query_max_sequence(conn: &Connection, table: &str, column: &str) -> rusqlite::Result<Option<i64>> {
    let mut stmt = conn.prepare(&max_sequence_sql(table, column))?;
    stmt.query_row([], |row| row.get::<_, Option<i64>>(0))
}

/// One connection per call: open, query, close.
#[derive(Debug)]
pub struct SqliteSequenceSource<'a> {
    cfg: &'a DatabaseConfig,
}

impl<'a> SqliteSequenceSource<'a> {
    pub fn new(cfg: &'a DatabaseConfig) -> Self {
        Self { cfg }
    }
}

impl SequenceSource for SqliteSequenceSource<'_> {
    fn last_sequence_id(&self) -> Result<Option<i64>, DbError> {
        let conn = open_read_only(self.cfg)?;
        let value = query_max_sequence(&conn, &self.cfg.control_table, &self.cfg.sequence_column);

        // Close even when the query failed; the query error wins.
        let closed = conn.close();
        let value = value?;
        closed.map_err(|(_, e)| DbError::Close(e))?;

        log::debug!(
            "MAX({}) FROM {} = {:?}",
            self.cfg.sequence_column,
            self.cfg.control_table,
            value
        );
        Ok(value)
    }
}
