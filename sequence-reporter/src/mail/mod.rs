// src/mail/mod.rs
//! Building and delivering the sequence notification.

pub mod message;
pub mod smtp;

use thiserror::Error;

pub use message::Notification;
pub use smtp::{deliver, SmtpMailer, TransportMailer};

/// Delivers one notification. Implementations do a single attempt.
pub trait Mailer {
    fn send(&self, notification: &Notification) -> Result<(), MailError>;
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid address '{0}': {1}")]
    Address(String, #[source] lettre::address::AddressError),

    #[error("cannot build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("delivery failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}
