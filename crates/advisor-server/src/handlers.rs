//! HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use dialog_core::{ConversationRequest, DialogError};

use crate::state::AppState;

/// Header carrying the id assigned to each invocation
pub const INVOCATION_ID_HEADER: &str = "x-invocation-id";

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub intents: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn dialog_error(err: &DialogError) -> ApiError {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: err.code().into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        intents: state.registry.names().into_iter().map(str::to_owned).collect(),
    })
}

/// One dialog turn
pub async fn fulfillment_handler(
    State(state): State<AppState>,
    payload: Result<Json<ConversationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected dialog request: {}", e);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.body_text(),
                code: "MALFORMED_REQUEST".into(),
            }),
        )
    })?;

    let invocation_id = uuid::Uuid::new_v4().to_string();
    let span = tracing::info_span!(
        "invocation",
        id = %invocation_id,
        intent = %request.intent_name(),
    );

    let response = span
        .in_scope(|| state.registry.dispatch(request))
        .map_err(|e| {
            tracing::error!(id = %invocation_id, "Invocation failed: {}", e);
            dialog_error(&e)
        })?;

    Ok(([(INVOCATION_ID_HEADER, invocation_id)], Json(response)))
}
