// src/report.rs

//! One reporter run: query the control table, then notify.
//!
//! Neither step raises past this module. Each returns a value, and `run`
//! is the single place that decides what happened and what to log.

use crate::{
    config::ReporterConfig,
    db::{DbError, SequenceSource},
    mail::{MailError, Mailer, Notification},
};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The notification carrying this id was handed to the relay.
    Sent(i64),
    /// The query ran but the table holds no sequence value.
    NoSequence,
    /// Connecting to or querying the database failed.
    QueryFailed(String),
    /// The value was read but the email could not be delivered.
    DeliveryFailed(String),
}

impl RunOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, RunOutcome::Sent(_))
    }

    /// Always 0 unless `strict`, in which case only `Sent` is 0.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if strict && !self.is_sent() { 1 } else { 0 }
    }
}

/// What `send_email` did with its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent(i64),
    Skipped,
}

/// Read the current maximum sequence id.
pub fn get_last_sequence_id<S>(source: &S) -> Result<Option<i64>, DbError>
where
    S: SequenceSource + ?Sized,
{
    source.last_sequence_id()
}

/// Mail `sequence_id` to the configured recipient. `None` is a no-op.
pub fn send_email<M>(
    sequence_id: Option<i64>,
    cfg: &ReporterConfig,
    mailer: &M,
) -> Result<Delivery, MailError>
where
    M: Mailer + ?Sized,
{
    let Some(id) = sequence_id else {
        log::warn!("Não foi possível obter o ID para enviar o e-mail.");
        return Ok(Delivery::Skipped);
    };

    let notification = Notification::for_sequence(id, cfg);
    mailer.send(&notification)?;
    Ok(Delivery::Sent(id))
}

/// Run the query, then (if a value came back) the notification.
pub fn run<S, M>(cfg: &ReporterConfig, source: &S, mailer: &M) -> RunOutcome
where
    S: SequenceSource + ?Sized,
    M: Mailer + ?Sized,
{
    let outcome = match get_last_sequence_id(source) {
        Err(e) => {
            log::error!("Erro ao conectar ou consultar o banco de dados: {}", e);
            RunOutcome::QueryFailed(e.to_string())
        }
        Ok(sequence_id) => match send_email(sequence_id, cfg, mailer) {
            Ok(Delivery::Sent(id)) => {
                log::info!("Sucesso! ID ({}) enviado para {}.", id, cfg.smtp.recipient);
                RunOutcome::Sent(id)
            }
            Ok(Delivery::Skipped) => RunOutcome::NoSequence,
            Err(e) => {
                log::error!("Erro ao enviar e-mail: {}", e);
                RunOutcome::DeliveryFailed(e.to_string())
            }
        },
    };

    if matches!(outcome, RunOutcome::NoSequence | RunOutcome::QueryFailed(_)) {
        log::error!("Execução falhou. Verifique as credenciais e a conexão com o banco.");
    }
    outcome
}
