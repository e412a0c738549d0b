// src/mail/smtp.rs
//! STARTTLS + AUTH delivery through `lettre`.
//!
//! The relay handshake itself is only exercised against a real server;
//! tests drive `deliver` with lettre's file transport and `SmtpMailer`
//! against a closed port.

use super::{MailError, Mailer, Notification};
use crate::config::SmtpConfig;
use lettre::{transport::smtp::authentication::Credentials, SmtpTransport, Transport};
use std::error::Error as StdError;

/// Send one notification through any lettre transport.
pub fn deliver<T>(transport: &T, notification: &Notification) -> Result<(), MailError>
where
    T: Transport,
    T::Error: StdError + Send + Sync + 'static,
{
    let message = notification.to_message()?;
    transport
        .send(&message)
        .map_err(|e| MailError::Transport(Box::new(e)))?;
    Ok(())
}

/// A `Mailer` over a prebuilt lettre transport.
pub struct TransportMailer<T> {
    transport: T,
}

impl<T> TransportMailer<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T> Mailer for TransportMailer<T>
where
    T: Transport,
    T::Error: StdError + Send + Sync + 'static,
{
    fn send(&self, notification: &Notification) -> Result<(), MailError> {
        deliver(&self.transport, notification)
    }
}

/// Builds a fresh transport per send: connect, STARTTLS, AUTH, send, QUIT.
pub struct SmtpMailer {
    server:      String,
    port:        u16,
    credentials: Credentials,
}

impl SmtpMailer {
    pub fn new(cfg: &SmtpConfig) -> Self {
        Self {
            server:      cfg.server.clone(),
            port:        cfg.port,
            credentials: Credentials::new(cfg.sender.clone(), cfg.password.clone()),
        }
    }

    fn transport(&self) -> Result<SmtpTransport, MailError> {
        Ok(SmtpTransport::starttls_relay(&self.server)?
            .port(self.port)
            .credentials(self.credentials.clone())
            .build())
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, notification: &Notification) -> Result<(), MailError> {
        let transport = self.transport()?;
        log::debug!("Connecting to {}:{} (STARTTLS)", self.server, self.port);
        deliver(&transport, notification)
    }
}
