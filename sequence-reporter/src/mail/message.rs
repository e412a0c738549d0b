// src/mail/message.rs

use super::MailError;
use crate::config::ReporterConfig;
use lettre::{
    message::{header::ContentType, Mailbox},
    Message,
};

/// Plain-text notification, discarded after one send attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub from:    String,
    pub to:      String,
    pub subject: String,
    pub body:    String,
}

pub fn subject_for(table: &str) -> String {
    format!("Relatório de Sequência: Último ID Obtido ({table})")
}

pub fn body_for(table: &str, sequence_id: i64) -> String {
    format!(
        "Prezado(a),\n\
         \n\
         O último ID de sequência utilizado na tabela de controle '{table}' é:\n\
         \n\
         ID: {sequence_id}\n\
         \n\
         Atenciosamente,\n\
         Script de Monitoramento\n"
    )
}

impl Notification {
    pub fn for_sequence(sequence_id: i64, cfg: &ReporterConfig) -> Self {
        let table = &cfg.database.control_table;
        Self {
            from:    cfg.smtp.sender.clone(),
            to:      cfg.smtp.recipient.clone(),
            subject: subject_for(table),
            body:    body_for(table, sequence_id),
        }
    }

    /// RFC 5322 message with a `text/plain; charset=utf-8` body.
    pub fn to_message(&self) -> Result<Message, MailError> {
        Ok(Message::builder()
            .from(parse_mailbox(&self.from)?)
            .to(parse_mailbox(&self.to)?)
            .subject(self.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(self.body.clone())?)
    }
}

fn parse_mailbox(raw: &str) -> Result<Mailbox, MailError> {
    raw.parse::<Mailbox>()
        .map_err(|e| MailError::Address(raw.to_string(), e))
}
