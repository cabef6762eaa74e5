//! Skill endpoint handler.
//!
//! Receives the platform's request envelope, dispatches it through the
//! skill, and returns the composed speech response. Dispatch never fails --
//! handler errors were already collapsed into a spoken apology -- so the
//! endpoint answers 200 for every well-formed envelope. Only an unparseable
//! body produces an error status.

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use uuid::Uuid;

use taskkeeper_types::envelope::{Request, RequestEnvelope, ResponseEnvelope};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /skill - Handle one skill request.
pub async fn handle_skill_request(
    State(state): State<AppState>,
    payload: Result<Json<RequestEnvelope>, JsonRejection>,
) -> Result<Json<ResponseEnvelope>, AppError> {
    let Json(envelope) =
        payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let start = Instant::now();
    let request_id = Uuid::now_v7();

    let response = state.skill.handle(&envelope).await;

    tracing::info!(
        request_id = %request_id,
        request_kind = request_kind(&envelope.request),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "skill request handled"
    );

    Ok(Json(response))
}

fn request_kind(request: &Request) -> &str {
    match request {
        Request::Launch => "LaunchRequest",
        Request::Intent { intent } => &intent.name,
        Request::SessionEnded { .. } => "SessionEndedRequest",
    }
}
