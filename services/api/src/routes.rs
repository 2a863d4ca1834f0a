use crate::infra::{render_page, AppState, ContentState};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::json;
use std::io;
use task_report::error::AppError;
use task_report::report::REPORT_ARTIFACT_PATH;
use tracing::warn;

pub(crate) fn report_routes(content: ContentState) -> Router {
    Router::new()
        .route("/", get(report_page))
        .route(REPORT_ARTIFACT_PATH, get(report_artifact))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(Extension(content))
}

pub(crate) async fn report_page(
    Extension(content): Extension<ContentState>,
) -> Result<Html<String>, AppError> {
    render_page(content.loader.as_ref()).map(Html)
}

/// Serves the externally produced PDF; its absence is a 404, not a render failure.
pub(crate) async fn report_artifact(
    Extension(content): Extension<ContentState>,
) -> Result<Response, AppError> {
    let path = content
        .public_dir
        .join(REPORT_ARTIFACT_PATH.trim_start_matches('/'));

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            Ok((
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.essence_str().to_string())],
                bytes,
            )
                .into_response())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "report artifact has not been published");
            let payload = json!({ "error": "report not published" });
            Ok((StatusCode::NOT_FOUND, Json(payload)).into_response())
        }
        Err(err) => Err(AppError::Io(err)),
    }
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
