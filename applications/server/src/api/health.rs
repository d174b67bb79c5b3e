/// Liveness plus a store round trip
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Stored record count, absent when the store did not answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<usize>,
}

/// GET /api/health
///
/// 200 with the record count when the store answers, 503 otherwise.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION");

    match state.users.list().await {
        Ok(users) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version,
                users: Some(users.len()),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the store");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    version,
                    users: None,
                }),
            )
        }
    }
}
