// src/config/loader.rs

//! # Configuration Loader
//!
//! Builds `ReporterConfig` from environment variables. Everything goes
//! through a lookup function so tests can feed a map instead of touching
//! the process environment.
//!
//! A `.env` file (current directory or any parent) is merged into the
//! process environment first. Variables already set win over the file.

use super::model::{
    ConfigError, DatabaseConfig, ReporterConfig, SmtpConfig, DEFAULT_SEQUENCE_COLUMN,
    DEFAULT_SMTP_PORT, DEFAULT_SMTP_SERVER,
};
use shared::LoggingConfig;
use std::{
    env,
    path::{Path, PathBuf},
};

pub const DB_CONNECT_STRING: &str = "DB_CONNECT_STRING";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASS: &str = "DB_PASS";
pub const CONTROL_TABLE: &str = "CONTROL_TABLE";
pub const SEQUENCE_COLUMN: &str = "SEQUENCE_COLUMN";
pub const SMTP_SERVER: &str = "SMTP_SERVER";
pub const SMTP_PORT: &str = "SMTP_PORT";
pub const EMAIL_SENDER: &str = "EMAIL_SENDER";
pub const EMAIL_PASS: &str = "EMAIL_PASS";
pub const EMAIL_RECIPIENT: &str = "EMAIL_RECIPIENT";
pub const STRICT_EXIT: &str = "REPORTER_STRICT_EXIT";
pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const LOG_FILE: &str = "LOG_FILE";

/// Merge the nearest `.env` into the process environment.
/// `Ok(None)` when there is none; `Err` when one exists but cannot be parsed.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Same as [`load_dotenv`] for an explicit file.
pub fn load_dotenv_from(path: &Path) -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(Some(path.to_path_buf())),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Read the configuration from the process environment.
pub fn from_env() -> Result<ReporterConfig, ConfigError> {
    from_lookup(|key| env::var(key).ok())
}

/// Read the configuration through `lookup`. Blank values count as unset.
pub fn from_lookup<F>(lookup: F) -> Result<ReporterConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| {
        lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

    // Credentials would be silently ignored by SQLite.
    for var in [DB_USER, DB_PASS] {
        if get(var).is_some() {
            return Err(ConfigError::UnsupportedCredentials(var));
        }
    }

    let database = DatabaseConfig {
        connect_string:  require(DB_CONNECT_STRING)?,
        control_table:   validate_identifier(CONTROL_TABLE, require(CONTROL_TABLE)?)?,
        sequence_column: validate_identifier(
            SEQUENCE_COLUMN,
            get(SEQUENCE_COLUMN).unwrap_or_else(|| DEFAULT_SEQUENCE_COLUMN.into()),
        )?,
    };

    let port = match get(SMTP_PORT) {
        Some(value) => value.parse::<u16>().map_err(|source| ConfigError::InvalidPort {
            var: SMTP_PORT,
            value,
            source,
        })?,
        None => DEFAULT_SMTP_PORT,
    };

    let smtp = SmtpConfig {
        server:    get(SMTP_SERVER).unwrap_or_else(|| DEFAULT_SMTP_SERVER.into()),
        port,
        sender:    require(EMAIL_SENDER)?,
        password:  require(EMAIL_PASS)?,
        recipient: require(EMAIL_RECIPIENT)?,
    };

    let file = get(LOG_FILE).map(PathBuf::from);
    let logging = LoggingConfig {
        enable: file.is_some(),
        file,
        level: get(LOG_LEVEL).unwrap_or_else(|| "INFO".into()),
    };

    let strict_exit = match get(STRICT_EXIT) {
        Some(value) => parse_bool(STRICT_EXIT, value)?,
        None => false,
    };

    Ok(ReporterConfig { database, smtp, logging, strict_exit })
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}

/// Table and column names end up inside the SQL text, so only plain
/// (optionally schema-qualified) identifiers are accepted.
pub fn validate_identifier(var: &'static str, value: String) -> Result<String, ConfigError> {
    let valid_part = |part: &str| {
        let mut chars = part.chars();
        matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
    };
    if value.split('.').all(valid_part) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidIdentifier { var, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (DB_CONNECT_STRING, "/var/lib/app/control.db"),
            (CONTROL_TABLE, "AUDIT_LOG"),
            (EMAIL_SENDER, "monitor@example.com"),
            (EMAIL_PASS, "app-password"),
            (EMAIL_RECIPIENT, "gestor@example.com"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<ReporterConfig, ConfigError> {
        from_lookup(|k| vars.get(k).map(|v| v.to_string()))
    }

    #[test]
    fn defaults_fill_optional_values() {
        let cfg = load(&base_env()).unwrap();

        assert_eq!(cfg.database.sequence_column, "ID_SEQUENCIA");
        assert_eq!(cfg.smtp.server, "smtp.gmail.com");
        assert_eq!(cfg.smtp.port, 587);
        assert_eq!(cfg.logging.level, "INFO");
        assert!(!cfg.logging.enable);
        assert!(!cfg.strict_exit);
    }

    #[test]
    fn overrides_are_applied() {
        let mut vars = base_env();
        vars.insert(SEQUENCE_COLUMN, "SEQ_ID");
        vars.insert(SMTP_SERVER, "mail.internal");
        vars.insert(SMTP_PORT, "2525");
        vars.insert(STRICT_EXIT, "TRUE");
        vars.insert(LOG_FILE, "/tmp/reporter.log");

        let cfg = load(&vars).unwrap();
        assert_eq!(cfg.database.sequence_column, "SEQ_ID");
        assert_eq!(cfg.smtp.server, "mail.internal");
        assert_eq!(cfg.smtp.port, 2525);
        assert!(cfg.strict_exit);
        assert!(cfg.logging.enable);
    }

    #[test]
    fn control_table_is_required() {
        let mut vars = base_env();
        vars.remove(CONTROL_TABLE);
        assert!(matches!(load(&vars), Err(ConfigError::Missing(CONTROL_TABLE))));
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let mut vars = base_env();
        vars.insert(EMAIL_RECIPIENT, "   ");
        assert!(matches!(load(&vars), Err(ConfigError::Missing(EMAIL_RECIPIENT))));
    }

    #[test]
    fn bad_port_is_rejected() {
        let mut vars = base_env();
        vars.insert(SMTP_PORT, "smtp");
        assert!(matches!(load(&vars), Err(ConfigError::InvalidPort { .. })));
    }

    #[test]
    fn bad_strict_flag_is_rejected() {
        let mut vars = base_env();
        vars.insert(STRICT_EXIT, "maybe");
        assert!(matches!(load(&vars), Err(ConfigError::InvalidBool { .. })));
    }

    #[test]
    fn identifiers_are_validated() {
        for ok in ["AUDIT_LOG", "app.audit_log", "_t1", "SYS$SEQ"] {
            assert!(validate_identifier(CONTROL_TABLE, ok.into()).is_ok(), "{ok}");
        }
        for bad in ["1table", "audit log", "t; DROP TABLE x", "a..b", "\"quoted\"", "."] {
            assert!(validate_identifier(CONTROL_TABLE, bad.into()).is_err(), "{bad}");
        }
    }

    #[test]
    fn database_credentials_are_rejected() {
        let mut vars = base_env();
        vars.insert(DB_USER, "nobody");
        assert!(matches!(load(&vars), Err(ConfigError::UnsupportedCredentials(DB_USER))));

        let mut vars = base_env();
        vars.insert(DB_PASS, "definitely-wrong");
        assert!(matches!(load(&vars), Err(ConfigError::UnsupportedCredentials(DB_PASS))));
    }

    #[test]
    fn blank_credentials_are_treated_as_unset() {
        let mut vars = base_env();
        vars.insert(DB_USER, "");
        vars.insert(DB_PASS, "  ");
        assert!(load(&vars).is_ok());
    }

    #[test]
    fn missing_dotenv_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_dotenv_from(&dir.path().join(".env")).unwrap().is_none());
    }

    #[test]
    fn dotenv_file_populates_the_environment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "REPORTER_DOTENV_MARKER=from-file\n").unwrap();

        assert_eq!(load_dotenv_from(&path).unwrap(), Some(path.clone()));
        assert_eq!(env::var("REPORTER_DOTENV_MARKER").as_deref(), Ok("from-file"));
    }

    #[test]
    fn malformed_dotenv_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "BROKEN LINE=1\n").unwrap();

        assert!(load_dotenv_from(&path).is_err());
    }

    #[test]
    fn debug_output_hides_secrets() {
        let cfg = load(&base_env()).unwrap();
        let dump = format!("{cfg:?}");
        assert!(!dump.contains("app-password"));
    }
}
