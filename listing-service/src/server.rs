// src/server.rs

//! HTTP surface: a single `GET /` that reports the target directory.
//!
//! Requests share nothing but an immutable `AppState`. The directory read is
//! a blocking syscall, so it runs on tokio's blocking pool; a hung
//! filesystem stalls only the request that hit it.

use crate::listing::{read_listing, Listing, ListingError};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{future::Future, path::PathBuf, sync::Arc};
use tokio::net::TcpListener;

pub const SUCCESS_MESSAGE: &str = "Leitura realizada com sucesso";

/// Per-process state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub target_dir: PathBuf,
}

/// 200 body.
#[derive(Debug, Serialize)]
pub struct ListingBody {
    pub mensagem:       &'static str,
    pub total_arquivos: usize,
    pub arquivos:       Vec<String>,
}

/// 404 / 500 body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub erro: String,
}

impl From<Listing> for ListingBody {
    fn from(listing: Listing) -> Self {
        Self {
            mensagem: SUCCESS_MESSAGE,
            total_arquivos: listing.total(),
            arquivos: listing.entries,
        }
    }
}

fn error_response(status: StatusCode, erro: String) -> Response {
    (status, Json(ErrorBody { erro })).into_response()
}

impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        let status = match self {
            ListingError::NotFound => StatusCode::NOT_FOUND,
            ListingError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_response(status, self.to_string())
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_files))
        .with_state(state)
}

async fn list_files(State(state): State<Arc<AppState>>) -> Response {
    let target = state.target_dir.clone();
    let outcome = tokio::task::spawn_blocking(move || read_listing(&target)).await;

    match outcome {
        Ok(Ok(listing)) => {
            log::info!("GET / -> 200 ({} entries in {:?})", listing.total(), state.target_dir);
            (StatusCode::OK, Json(ListingBody::from(listing))).into_response()
        }
        Ok(Err(ListingError::NotFound)) => {
            log::warn!("GET / -> 404 ({:?} not found)", state.target_dir);
            ListingError::NotFound.into_response()
        }
        Ok(Err(err)) => {
            log::error!("GET / -> 500 reading {:?}: {}", state.target_dir, err);
            err.into_response()
        }
        // The listing task panicked or was cancelled; still answer.
        Err(join_err) => {
            log::error!("GET / -> 500 listing task failed: {}", join_err);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, join_err.to_string())
        }
    }
}

/// Serve on `listener` until `shutdown` resolves.
pub async fn serve_until<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        log::info!("Listening on {} (target {:?})", addr, state.target_dir);
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Serve on `listener` until Ctrl-C or SIGTERM.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    serve_until(listener, state, shutdown_signal()).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Cannot listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                log::error!("Cannot listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    log::warn!("Shutdown initiated");
}
