use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::domain::{RemittanceRecordSubmission, RemittanceRequest};
use super::fraud::detect_fraud_risk;
use super::repository::RemittanceRepository;
use super::service::{RemittanceService, RemittanceServiceError};
use crate::workflows::domain::UserId;

/// Router builder exposing transfer preparation, fraud screening, and
/// history/impact endpoints.
pub fn remittance_router<R>(service: Arc<RemittanceService<R>>) -> Router
where
    R: RemittanceRepository + 'static,
{
    Router::new()
        .route("/api/v1/remit", post(remit_handler::<R>))
        .route(
            "/api/v1/remittances/fraud-check",
            post(fraud_check_handler),
        )
        .route(
            "/api/v1/remittances/:user_id/records",
            post(record_handler::<R>).get(history_handler::<R>),
        )
        .route(
            "/api/v1/remittances/:user_id/impact",
            get(impact_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn remit_handler<R>(
    State(service): State<Arc<RemittanceService<R>>>,
    axum::Json(request): axum::Json<RemittanceRequest>,
) -> Response
where
    R: RemittanceRepository + 'static,
{
    match service.prepare(&request) {
        Ok(receipt) => {
            let payload = json!({
                "success": true,
                "message": "remittance sealed with ephemeral demo keys",
                "public_key": receipt.public_key,
                "encrypted_data": receipt.encrypted_data,
                "amount": receipt.amount,
                "recipient": receipt.recipient,
                "fraud_risk": receipt.fraud_risk.label(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => remittance_error(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FraudCheckRequest {
    amount: f64,
    #[serde(default)]
    message: String,
}

pub(crate) async fn fraud_check_handler(
    axum::Json(request): axum::Json<FraudCheckRequest>,
) -> Response {
    let risk = detect_fraud_risk(request.amount, &request.message);
    (
        StatusCode::OK,
        axum::Json(json!({ "risk": risk.label() })),
    )
        .into_response()
}

pub(crate) async fn record_handler<R>(
    State(service): State<Arc<RemittanceService<R>>>,
    Path(user_id): Path<String>,
    axum::Json(submission): axum::Json<RemittanceRecordSubmission>,
) -> Response
where
    R: RemittanceRepository + 'static,
{
    match service.record(UserId(user_id), submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => remittance_error(error),
    }
}

pub(crate) async fn history_handler<R>(
    State(service): State<Arc<RemittanceService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: RemittanceRepository + 'static,
{
    match service.history(&UserId(user_id)) {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(error) => remittance_error(error),
    }
}

pub(crate) async fn impact_handler<R>(
    State(service): State<Arc<RemittanceService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: RemittanceRepository + 'static,
{
    match service.impact(&UserId(user_id)) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => remittance_error(error),
    }
}

/// Validation problems surface with their message; everything else is an
/// opaque failure so no internal detail leaks.
fn remittance_error(error: RemittanceServiceError) -> Response {
    if error.is_validation() {
        let payload = json!({ "error": error.to_string() });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    }

    error!(%error, "remittance request failed");
    let payload = json!({ "error": "failed to process remittance" });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
