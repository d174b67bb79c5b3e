/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not find User")]
    UserNotFound,

    #[error("Could not delete User")]
    DeleteFailed,

    /// Any failure in the fetch-then-geocode chain. The cause is kept for
    /// `source()` but never rendered into the response.
    #[error("Unable to fetch location information from user id")]
    LocationLookupFailed(#[source] anyhow::Error),

    #[error("Database error: {0}")]
    Database(#[from] atlas_core::CoreError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::UserNotFound
            | ServerError::DeleteFailed
            | ServerError::LocationLookupFailed(_) => StatusCode::BAD_REQUEST,
            ServerError::Database(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            ServerError::UserNotFound
            | ServerError::DeleteFailed
            | ServerError::LocationLookupFailed(_) => self.to_string(),
            ServerError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error".to_string()
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                "Configuration error".to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
