// tests/common/mod.rs
#![allow(dead_code)]

use rusqlite::Connection;
use sequence_reporter::config::{from_lookup, ConfigError, ReporterConfig};
use std::{collections::HashMap, path::Path};

pub const TABLE: &str = "CONTROLE_CARGA";
pub const RECIPIENT: &str = "gestor@example.com";

/// Environment pointing at `db` with an SMTP relay at `smtp_host:smtp_port`.
pub fn env_for(db: &Path, smtp_host: &str, smtp_port: u16) -> HashMap<&'static str, String> {
    let port = smtp_port.to_string();
    HashMap::from([
        ("DB_CONNECT_STRING", db.to_string_lossy().into_owned()),
        ("CONTROL_TABLE", TABLE.to_string()),
        ("SMTP_SERVER", smtp_host.to_string()),
        ("SMTP_PORT", port),
        ("EMAIL_SENDER", "monitor@example.com".to_string()),
        ("EMAIL_PASS", "app-password".to_string()),
        ("EMAIL_RECIPIENT", RECIPIENT.to_string()),
    ])
}

pub fn config_from(vars: &HashMap<&'static str, String>) -> Result<ReporterConfig, ConfigError> {
    from_lookup(|k| vars.get(k).cloned())
}

/// Config pointing at `db` with an SMTP relay at `smtp_host:smtp_port`.
pub fn config_for(db: &Path, smtp_host: &str, smtp_port: u16) -> ReporterConfig {
    config_from(&env_for(db, smtp_host, smtp_port)).expect("test config must be valid")
}

/// Create the control table in a fresh SQLite file and fill it.
pub fn seed_control_table(db: &Path, values: &[i64]) {
    let conn = Connection::open(db).unwrap();
    conn.execute_batch(&format!(
        "CREATE TABLE {TABLE} (ID_SEQUENCIA INTEGER NOT NULL, DESCRICAO TEXT);"
    ))
    .unwrap();
    for v in values {
        conn.execute(
            &format!("INSERT INTO {TABLE} (ID_SEQUENCIA, DESCRICAO) VALUES (?1, ?2)"),
            (v, format!("carga {v}")),
        )
        .unwrap();
    }
}
