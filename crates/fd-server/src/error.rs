//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fd_content::ContentError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No page at the requested path.
    #[error("Page not found: {path}")]
    PageNotFound {
        /// Requested path.
        path: String,
        /// Title of the not-found page.
        title: String,
    },

    /// Content failed to load at startup.
    #[error("{0}")]
    Content(#[from] ContentError),

    /// Host and port do not form a socket address.
    #[error("Invalid listen address '{0}'")]
    InvalidAddress(String),

    /// File watcher could not be started.
    #[error("Failed to start content watcher: {0}")]
    Watcher(#[from] notify::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound { path, title } => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "path": path, "title": title}),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": self.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
