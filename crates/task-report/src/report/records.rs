use super::catalog::TaskDescriptor;
use super::loader::{SourceLoadError, SourceLoader};
use std::path::Path;
use tracing::{debug, warn};

/// A descriptor paired with the verbatim text of its source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub descriptor: TaskDescriptor,
    pub source_text: String,
}

impl TaskRecord {
    pub fn id(&self) -> &'static str {
        self.descriptor.id
    }
}

/// Loads every descriptor's source, preserving order.
///
/// The first unreadable source aborts the whole build; no partial list is
/// returned.
pub fn build_task_records<L>(
    descriptors: &[TaskDescriptor],
    loader: &L,
) -> Result<Vec<TaskRecord>, SourceLoadError>
where
    L: SourceLoader + ?Sized,
{
    descriptors
        .iter()
        .map(|descriptor| {
            let path = Path::new(descriptor.source_path);
            match loader.load(path) {
                Ok(source_text) => {
                    debug!(task = descriptor.id, bytes = source_text.len(), "loaded task source");
                    Ok(TaskRecord {
                        descriptor: *descriptor,
                        source_text,
                    })
                }
                Err(source) => {
                    let resolved = loader.resolve(path);
                    warn!(task = descriptor.id, path = %resolved.display(), error = %source, "task source unavailable");
                    Err(SourceLoadError::MissingOrUnreadableSource {
                        task_id: descriptor.id.to_string(),
                        path: resolved,
                        source,
                    })
                }
            }
        })
        .collect()
}
