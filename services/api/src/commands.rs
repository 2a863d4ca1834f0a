use crate::infra::render_page;
use clap::Args;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use task_report::config::AppConfig;
use task_report::error::AppError;
use task_report::report::{FsSourceLoader, TaskDescriptor, TASK_CATALOG};
use task_report::telemetry;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct RenderArgs {
    /// File to write the page to (stdout when omitted)
    #[arg(long, short)]
    pub(crate) output: Option<PathBuf>,
    /// Override the directory task sources are read from
    #[arg(long)]
    pub(crate) content_root: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ListTasksArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let content_root = args.content_root.unwrap_or(config.content.root);
    let loader = FsSourceLoader::new(content_root);
    let html = render_page(&loader)?;

    match args.output {
        Some(path) => {
            write_page(&path, &html)?;
            info!(path = %path.display(), bytes = html.len(), "report page written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

pub(crate) fn run_list_tasks(args: ListTasksArgs) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    write_task_listing(&mut stdout, TASK_CATALOG, args.json)?;
    Ok(())
}

fn write_page(path: &Path, html: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)
}

fn write_task_listing<W: Write>(
    out: &mut W,
    descriptors: &[TaskDescriptor],
    json: bool,
) -> io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, descriptors)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Report tasks")?;
    for task in descriptors {
        writeln!(
            out,
            "- {} | {} | {} | {} highlights",
            task.id,
            task.title,
            task.source_path,
            task.highlights.len()
        )?;
    }
    Ok(())
}
