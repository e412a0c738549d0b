// src/config/model.rs

use serde::Deserialize;
use shared::LoggingConfig;
use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};
use thiserror::Error;

pub const DEFAULT_TARGET_DIR: &str = "/dados";
pub const DEFAULT_PORT: u16 = 5000;

/// Top-level runtime config, fixed at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)] pub server:  ServerConfig,
    #[serde(default)] pub logging: LoggingConfig,
}

/// Mirror of the `[server]` table
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Directory whose entries `GET /` reports.
    #[serde(default = "default_target_dir")] pub target_dir: PathBuf,
    #[serde(default = "default_listen")]     pub listen:     SocketAddr,
}
fn default_target_dir() -> PathBuf { PathBuf::from(DEFAULT_TARGET_DIR) }
fn default_listen() -> SocketAddr { SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)) }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { target_dir: default_target_dir(), listen: default_listen() }
    }
}

/// All the ways config loading can go wrong
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
