use crate::commands::{run_list_tasks, run_render, ListTasksArgs, RenderArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use task_report::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "PHP Task Report",
    about = "Render and serve the PHP programming tasks report page",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Render the report page once and write the HTML
    Render(RenderArgs),
    /// List the exercises shown on the report page
    Tasks(ListTasksArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the directory task sources are read from
    #[arg(long)]
    pub(crate) content_root: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Render(args) => run_render(args),
        Command::Tasks(args) => run_list_tasks(args),
    }
}
