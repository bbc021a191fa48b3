use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::catalog::{CatalogError, VaultCatalog};
use super::domain::DiasporaLocation;
use super::recommender::recommend;
use crate::workflows::emotion::EmotionVector;

/// Router builder exposing the catalog and recommendation endpoints.
pub fn vault_router<C>(catalog: Arc<C>) -> Router
where
    C: VaultCatalog + 'static,
{
    Router::new()
        .route("/api/v1/vaults", get(catalog_handler::<C>))
        .route(
            "/api/v1/vaults/recommendations",
            post(recommendations_handler::<C>),
        )
        .with_state(catalog)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationRequest {
    emotions: EmotionVector,
    #[serde(default)]
    location: DiasporaLocation,
}

pub(crate) async fn catalog_handler<C>(State(catalog): State<Arc<C>>) -> Response
where
    C: VaultCatalog + 'static,
{
    match catalog.vaults() {
        Ok(vaults) => (StatusCode::OK, axum::Json(vaults)).into_response(),
        Err(error) => catalog_error(&error),
    }
}

pub(crate) async fn recommendations_handler<C>(
    State(catalog): State<Arc<C>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response
where
    C: VaultCatalog + 'static,
{
    let vaults = match catalog.vaults() {
        Ok(vaults) => vaults,
        Err(error) => return catalog_error(&error),
    };

    let set = recommend(&request.emotions.clamped(), request.location, &vaults);
    (StatusCode::OK, axum::Json(set)).into_response()
}

fn catalog_error(error: &CatalogError) -> Response {
    error!(%error, "vault catalog lookup failed");
    let payload = json!({ "error": "vault catalog unavailable" });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
