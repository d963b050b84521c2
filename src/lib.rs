//! Centsible is a small app for keeping track of personal income and expenses.
//!
//! Transactions live behind the [stores::TransactionStore] trait, with one
//! backend that appends to a plain CSV file and one that keeps everything in
//! memory. On top of that this library provides a JSON API for recording and
//! listing transactions and an HTML page that charts income and expenses over
//! time. The `server` and `console` binaries are thin wrappers around these
//! pieces.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod endpoints;
mod plot;
mod routing;

pub mod currency;
pub mod date;
pub mod extractors;
pub mod stores;
pub mod summary;
pub mod transaction;

pub use app_state::AppState;
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required field was absent from a request.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A date string did not parse as a zero-padded DD-MM-YYYY date.
    ///
    /// Carries the name of the field being parsed and the offending text so
    /// the caller knows exactly which input to fix.
    #[error("could not parse {field} '{value}' as a DD-MM-YYYY date")]
    InvalidDate {
        /// The name of the field being parsed, e.g. "date" or "start_date".
        field: &'static str,
        /// The text that failed to parse.
        value: String,
    },

    /// An amount was neither a number nor a numeric string.
    #[error("could not parse '{0}' as an amount")]
    InvalidAmount(String),

    /// The request body or query string could not be deserialized.
    ///
    /// Carries the deserializer's message verbatim so the caller can see
    /// what was wrong with the request.
    #[error("{0}")]
    InvalidRequest(String),

    /// The transaction file starts with a header other than
    /// `Date,Amount,Category,Description`.
    ///
    /// Carries the header that was found. Nothing is read from or written to
    /// a file whose header does not match.
    #[error("the transaction file has an unexpected header: '{0}'")]
    SchemaMismatch(String),

    /// A row in the transaction file could not be parsed.
    ///
    /// The message names the line and the value that failed so the row can
    /// be fixed by hand.
    #[error("could not parse the transaction file: {0}")]
    InvalidRow(String),

    /// An error occurred while reading or writing the transaction file.
    #[error("could not access the transaction file: {0}")]
    Io(String),

    /// Could not acquire the transaction store lock.
    #[error("could not acquire the transaction store lock")]
    StoreLockError,
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(error.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            Error::Io(error.to_string())
        } else {
            Error::InvalidRow(error.to_string())
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Error::MissingField(_)
            | Error::InvalidDate { .. }
            | Error::InvalidAmount(_)
            | Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            // Any errors that are not handled above are not the client's to
            // fix, so the detail goes to the logs instead of over the wire.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = if status_code == StatusCode::BAD_REQUEST {
            self.to_string()
        } else {
            "an unexpected error occurred, check the server logs for more details".to_owned()
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}
