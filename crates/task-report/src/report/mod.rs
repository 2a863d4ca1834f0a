//! Report page: the authored task catalog, source loading, and HTML rendering.

pub mod catalog;
mod loader;
mod records;
mod render;

pub use catalog::{validate_catalog, CatalogError, TaskDescriptor, TASK_CATALOG};
pub use loader::{FsSourceLoader, SourceLoadError, SourceLoader};
pub use records::{build_task_records, TaskRecord};
pub use render::{render, ReportDocument, REPORT_ARTIFACT_PATH};
