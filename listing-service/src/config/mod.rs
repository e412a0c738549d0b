//! Public API for configuration

pub mod loader;
pub mod model;

// Re-export the main entrypoints:
pub use loader::{config_path, load, load_required, ConfigPath};
pub use model::{ConfigError, ServerConfig, ServiceConfig};
