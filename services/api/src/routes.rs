use crate::infra::{
    AppState, InMemoryProfileRepository, InMemoryRemittanceRepository, StaticVaultCatalog,
};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use remit_ai::workflows::emotion::{analysis_router, AnalysisService};
use remit_ai::workflows::remittance::{remittance_router, RemittanceService};
use remit_ai::workflows::vaults::vault_router;

pub(crate) fn api_routes(
    analysis: Arc<AnalysisService<InMemoryProfileRepository>>,
    remittances: Arc<RemittanceService<InMemoryRemittanceRepository>>,
    catalog: Arc<StaticVaultCatalog>,
) -> axum::Router {
    analysis_router(analysis)
        .merge(vault_router(catalog))
        .merge(remittance_router(remittances))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
