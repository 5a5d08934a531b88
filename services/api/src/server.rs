use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_scorecard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use esg_scorecard::config::AppConfig;
use esg_scorecard::error::AppError;
use esg_scorecard::scorecard::ScorecardEngine;
use esg_scorecard::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(ScorecardEngine::with_weights(config.scoring.weights));
    let weights = engine.weights();

    let app = with_scorecard_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        disclosure_weight = weights.disclosure,
        performance_weight = weights.performance,
        "esg scorecard service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
