use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use task_report::error::AppError;
use task_report::report::{
    build_task_records, render, validate_catalog, SourceLoader, TASK_CATALOG,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Where page requests find their inputs.
#[derive(Clone)]
pub(crate) struct ContentState {
    pub(crate) loader: Arc<dyn SourceLoader + Send + Sync>,
    pub(crate) public_dir: PathBuf,
}

/// Builds the catalog's records through `loader` and renders the page.
pub(crate) fn render_page<L>(loader: &L) -> Result<String, AppError>
where
    L: SourceLoader + ?Sized,
{
    validate_catalog(TASK_CATALOG)?;
    let records = build_task_records(TASK_CATALOG, loader)?;
    Ok(render(&records).into_html())
}
