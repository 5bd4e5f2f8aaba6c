pub mod accounts;
pub mod auth;
pub mod transfers;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub store: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts: Option<usize>,
}

/// GET /health — reports whether the account file can be read.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.read().await {
        Ok(accounts) => (
            StatusCode::OK,
            Json(HealthStatus {
                status: "healthy",
                store: "available",
                accounts: Some(accounts.len()),
            }),
        ),
        Err(err) => {
            tracing::error!(error = %err, "health check failed to read account store");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus {
                    status: "unhealthy",
                    store: "unavailable",
                    accounts: None,
                }),
            )
        }
    }
}
