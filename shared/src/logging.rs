// shared/src/logging.rs

//! Global `log` dispatch built on `fern`.
//!
//! Every line looks like
//! `[2026-10-18T09:12:44+02:00][INFO ][listing_service::server][pid=4568][tid=ThreadId(3)] message`
//! and always goes to stdout. A log file is chained in when enabled.

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;
use serde::Deserialize;
use std::{path::PathBuf, process, thread};

/// Mirror of a `[logging]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]                   pub enable: bool,
    #[serde(default)]                   pub file:   Option<PathBuf>,
    #[serde(default = "default_level")] pub level:  String,
}
fn default_level() -> String { "INFO".into() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { enable: false, file: None, level: default_level() }
    }
}

/// Map a level name to a filter; unknown names fall back to INFO.
pub fn parse_level(name: &str) -> LevelFilter {
    match name.trim().to_uppercase().as_str() {
        "OFF" => LevelFilter::Off,
        "ERROR" => LevelFilter::Error,
        "WARN" | "WARNING" => LevelFilter::Warn,
        "DEBUG" => LevelFilter::Debug,
        "TRACE" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Build the dispatch without installing it.
pub fn build_dispatch(cfg: &LoggingConfig) -> Result<Dispatch, std::io::Error> {
    let mut dispatch = Dispatch::new()
        .format(|out, msg, record| {
            out.finish(format_args!(
                "[{}][{:5}][{}][pid={}][tid={:?}] {}",
                Local::now().to_rfc3339(),
                record.level(),
                record.target(),
                process::id(),
                thread::current().id(),
                msg
            ))
        })
        .level(parse_level(&cfg.level))
        .chain(std::io::stdout());

    if let Some(path) = cfg.file.as_ref().filter(|_| cfg.enable) {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }
    Ok(dispatch)
}

/// Install the global logger. Call once, before anything logs.
pub fn setup_logging(cfg: &LoggingConfig) -> Result<(), fern::InitError> {
    build_dispatch(cfg)?.apply()?;
    Ok(())
}
