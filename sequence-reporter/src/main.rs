// src/main.rs

//! Reporter entry-point: a single, externally scheduled run.
//!
//! 1. Merge `.env`, read configuration from the environment & set up
//!    structured logging
//! 2. Query MAX(<sequence column>) from the control table
//! 3. Mail the value (if any) to the configured recipient
//! 4. Exit 0, or non-zero only in strict mode

use anyhow::Context;
use sequence_reporter::{
    config::{from_env, load_dotenv, ReporterConfig},
    db::SqliteSequenceSource,
    mail::SmtpMailer,
    report,
};
use std::process;

/// Exit status for configuration and bootstrap failures.
const EXIT_MISCONFIGURED: i32 = 2;

/// Print an error with context and terminate the process.
macro_rules! fatal {
    ($ctx:expr, $($arg:tt)+) => {{
        eprintln!(
            "[{}][ERROR][{}] {}",
            chrono::Local::now().to_rfc3339(),
            $ctx,
            format!($($arg)+)
        );
        std::process::exit(EXIT_MISCONFIGURED);
    }};
}

fn bootstrap() -> anyhow::Result<ReporterConfig> {
    // Logging depends on the config, so the .env result is reported afterwards.
    let dotenv = load_dotenv();
    let cfg = from_env().with_context(|| match &dotenv {
        Err(e) => format!("reading configuration from the environment (malformed .env: {e})"),
        Ok(_) => "reading configuration from the environment".to_string(),
    })?;
    shared::setup_logging(&cfg.logging).context("logging setup failed")?;

    match dotenv {
        Ok(Some(path)) => log::info!("Loaded environment from {}", path.display()),
        Ok(None) => log::debug!("No .env file found, using the process environment"),
        Err(e) => log::error!("Malformed .env file ignored: {}", e),
    }
    Ok(cfg)
}

fn main() {
    // 1 ─ Context
    let cfg = bootstrap().unwrap_or_else(|e| fatal!("config", "{:#}", e));
    log::info!(
        "Reporting MAX({}) FROM {} to {}",
        cfg.database.sequence_column,
        cfg.database.control_table,
        cfg.smtp.recipient
    );

    // 2 & 3 ─ Query, then notify
    let source = SqliteSequenceSource::new(&cfg.database);
    let mailer = SmtpMailer::new(&cfg.smtp);
    let outcome = report::run(&cfg, &source, &mailer);

    // 4 ─ Exit
    let code = outcome.exit_code(cfg.strict_exit);
    log::debug!("Run finished: {:?} (exit {})", outcome, code);
    process::exit(code);
}
