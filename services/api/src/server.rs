use crate::cli::ServeArgs;
use crate::infra::{AppState, ContentState};
use crate::routes::report_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use task_report::config::AppConfig;
use task_report::error::AppError;
use task_report::report::{validate_catalog, FsSourceLoader, TASK_CATALOG};
use task_report::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(root) = args.content_root.take() {
        config.content.root = root;
    }

    telemetry::init(&config.telemetry)?;
    validate_catalog(TASK_CATALOG)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let content = ContentState {
        loader: Arc::new(FsSourceLoader::new(config.content.root.clone())),
        public_dir: config.content.public_dir.clone(),
    };

    let app = report_routes(content)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        content_root = %config.content.root.display(),
        tasks = TASK_CATALOG.len(),
        "task report page ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
