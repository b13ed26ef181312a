use crate::cli::ServeArgs;
use crate::infra::{load_model_availability, AppState};
use crate::routes::with_decision_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use loan_decision::config::AppConfig;
use loan_decision::error::AppError;
use loan_decision::scoring::DecisionService;
use loan_decision::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
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

    let availability = load_model_availability(&config.artifacts);
    let service = Arc::new(DecisionService::new(availability));

    // Intake forms post from arbitrary origins; the endpoint carries no
    // credentials, so the permissive policy is the intended one.
    let app = with_decision_routes(service.clone())
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(CorsLayer::permissive());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        model_ready = service.ready(),
        "loan decision service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
