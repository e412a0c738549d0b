// shared/src/lib.rs
// ────────────────────────────────────────────────────────────────────────────
// Ambient plumbing used by both binaries. No domain logic lives here.

pub mod logging;

pub use logging::{setup_logging, LoggingConfig};
