//! Public API for configuration

pub mod loader;
pub mod model;

// Re-export the main entrypoints:
pub use loader::{from_env, from_lookup, load_dotenv};
pub use model::{ConfigError, DatabaseConfig, ReporterConfig, SmtpConfig};
