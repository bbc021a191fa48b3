use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::repository::ProfileRepository;
use super::service::{AnalysisError, AnalysisService};
use super::EmotionVector;
use crate::workflows::domain::UserId;

/// Router builder exposing HTTP endpoints for bio analysis and profiles.
pub fn analysis_router<P>(service: Arc<AnalysisService<P>>) -> Router
where
    P: ProfileRepository + 'static,
{
    Router::new()
        .route("/api/v1/analyze", post(analyze_handler::<P>))
        .route(
            "/api/v1/profiles/:user_id",
            put(upsert_profile_handler::<P>).get(profile_handler::<P>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeRequest {
    text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileUpsertRequest {
    bio: String,
    emotions: EmotionVector,
}

pub(crate) async fn analyze_handler<P>(
    State(service): State<Arc<AnalysisService<P>>>,
    axum::Json(request): axum::Json<AnalyzeRequest>,
) -> Response
where
    P: ProfileRepository + 'static,
{
    match service.analyze(&request.text).await {
        Ok(outcome) => {
            let payload = json!({
                "success": true,
                "emotions": outcome.emotions,
                "model": outcome.model.label(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) if error.is_validation() => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(&other),
    }
}

pub(crate) async fn upsert_profile_handler<P>(
    State(service): State<Arc<AnalysisService<P>>>,
    Path(user_id): Path<String>,
    axum::Json(request): axum::Json<ProfileUpsertRequest>,
) -> Response
where
    P: ProfileRepository + 'static,
{
    match service.save_profile(UserId(user_id), request.bio, request.emotions) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) if error.is_validation() => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(&other),
    }
}

pub(crate) async fn profile_handler<P>(
    State(service): State<Arc<AnalysisService<P>>>,
    Path(user_id): Path<String>,
) -> Response
where
    P: ProfileRepository + 'static,
{
    match service.profile(&UserId(user_id.clone())) {
        Ok(Some(record)) => (StatusCode::OK, axum::Json(record)).into_response(),
        Ok(None) => {
            let payload = json!({
                "user_id": user_id,
                "error": "profile not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => internal_error(&error),
    }
}

fn internal_error(error: &AnalysisError) -> Response {
    error!(%error, "analysis request failed");
    let payload = json!({ "error": "failed to analyze text" });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
