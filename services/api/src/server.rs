use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryCaseStore, InMemoryPredictionLog};
use crate::routes::with_explanation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use credishield::cases::CaseService;
use credishield::config::AppConfig;
use credishield::error::AppError;
use credishield::explain::{DerivationConfig, ExplanationService};
use credishield::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
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

    let repository = Arc::new(InMemoryPredictionLog::default());
    let service = Arc::new(ExplanationService::new(
        repository,
        DerivationConfig::default(),
        config.model.version.clone(),
    ));

    let cases = Arc::new(CaseService::new(Arc::new(InMemoryCaseStore::default())));

    let app = with_explanation_routes(service, cases)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, model_version = %config.model.version, "credit risk decision-support service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
