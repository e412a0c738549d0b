// src/config/loader.rs

//! # Configuration Loader
//!
//! Reads `listing.toml` and deserializes it into `ServiceConfig`. The
//! implicit file next to the executable may be absent (every field has a
//! default); a path named through `LISTING_CONFIG` must exist.

use super::model::{ConfigError, ServiceConfig};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "LISTING_CONFIG";
pub const CONFIG_FILE: &str = "listing.toml";

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPath {
    pub path:     PathBuf,
    /// Named through `LISTING_CONFIG`, so it must exist.
    pub explicit: bool,
}

impl ConfigPath {
    pub fn load(&self) -> Result<ServiceConfig, ConfigError> {
        if self.explicit { load_required(&self.path) } else { load(&self.path) }
    }
}

/// `$LISTING_CONFIG`, or `listing.toml` next to the running executable.
pub fn config_path() -> Result<ConfigPath, ConfigError> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return Ok(ConfigPath { path: PathBuf::from(path), explicit: true });
    }
    let exe = env::current_exe().map_err(|source| ConfigError::Io {
        path: PathBuf::from("<current exe>"),
        source,
    })?;
    let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(ConfigPath { path: dir.join(CONFIG_FILE), explicit: false })
}

/// Load and parse the configuration at `path`, falling back to defaults
/// when the file does not exist.
pub fn load(path: &Path) -> Result<ServiceConfig, ConfigError> {
    if !path.exists() {
        return Ok(ServiceConfig::default());
    }
    load_required(path)
}

/// Load and parse the configuration at `path`; a missing file is an error.
pub fn load_required(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let txt = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: ServiceConfig = toml::from_str(&txt)?;
    Ok(cfg)
}
