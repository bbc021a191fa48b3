use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryProfileRepository, InMemoryRemittanceRepository, StaticVaultCatalog,
};
use crate::routes::api_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use remit_ai::config::AppConfig;
use remit_ai::error::AppError;
use remit_ai::telemetry;
use remit_ai::workflows::emotion::{AnalysisService, EmotionAnalyzer};
use remit_ai::workflows::remittance::RemittanceService;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let analyzer = EmotionAnalyzer::from_config(&config.analyzer)?;
    let profiles = Arc::new(InMemoryProfileRepository::default());
    let history = Arc::new(InMemoryRemittanceRepository::default());
    let catalog = Arc::new(StaticVaultCatalog::default());

    let analysis_service = Arc::new(AnalysisService::new(analyzer, profiles));
    let remittance_service = Arc::new(RemittanceService::new(history));

    let app = api_routes(analysis_service, remittance_service, catalog)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "impact remittance service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
