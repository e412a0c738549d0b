// src/config/model.rs

use shared::LoggingConfig;
use std::{fmt, num::ParseIntError};
use thiserror::Error;

pub const DEFAULT_SEQUENCE_COLUMN: &str = "ID_SEQUENCIA";
pub const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Top-level runtime config, read once at process start.
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    pub database:    DatabaseConfig,
    pub smtp:        SmtpConfig,
    pub logging:     LoggingConfig,
    /// Exit non-zero when no notification was delivered.
    pub strict_exit: bool,
}

/// Where the control table lives and which column holds the sequence.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite file path or `file:` URI.
    pub connect_string:  String,
    pub control_table:   String,
    pub sequence_column: String,
}

/// Relay, credentials and the single recipient.
#[derive(Clone)]
pub struct SmtpConfig {
    pub server:    String,
    pub port:      u16,
    pub sender:    String,
    /// Usually an app password.
    pub password:  String,
    pub recipient: String,
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("sender", &self.sender)
            .field("password", &"<redacted>")
            .field("recipient", &self.recipient)
            .finish()
    }
}

/// All the ways config loading can go wrong
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required variable {0}")]
    Missing(&'static str),

    #[error("{0} is set, but the SQLite backend does not authenticate; unset it")]
    UnsupportedCredentials(&'static str),

    #[error("{var}: '{value}' is not a valid SQL identifier")]
    InvalidIdentifier { var: &'static str, value: String },

    #[error("{var}: invalid port '{value}': {source}")]
    InvalidPort {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{var}: expected true/false, got '{value}'")]
    InvalidBool { var: &'static str, value: String },
}
