// src/db/connection.rs
//! Opening the control database read-only.

use crate::config::DatabaseConfig;
use rusqlite::{Connection, OpenFlags};
use std::time::Duration;

/// Open `cfg.connect_string` (a path or `file:` URI) read-only. The file is
/// never created.
pub fn open_read_only(cfg: &DatabaseConfig) -> rusqlite::Result<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(&cfg.connect_string, flags)?;
    conn.busy_timeout(Duration::from_millis(1_000))?;
    log::debug!("Opened {} read-only", cfg.connect_string);
    Ok(conn)
}
