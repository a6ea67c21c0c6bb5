//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::AppContext;
use crate::command_runner::TokioCommandRunner;
use crate::commands;

/// Deploy and supervise the aladdin daemon on its host
#[derive(Parser)]
#[command(
    name = "aladdinctl",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the daemon and copy the binary to the host
    Deploy,

    /// Start the daemon under the remote supervisor
    Start,

    /// Stop the daemon (a no-op when it is absent)
    Stop,

    /// Stop, then start; start is skipped when stop fails
    Restart,

    /// Report whether the daemon is running
    Status,

    /// Show the daemon's log (follows live in interactive session mode)
    Log,

    /// Copy the daemon's log file into the current directory
    FetchLog,
}

impl Cli {
    /// Execute the CLI command, returning the process exit code.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or the command itself
    /// fails in a way that has no exit code to surface.
    pub async fn run(self) -> Result<u8> {
        let Cli {
            json,
            quiet,
            no_color,
            command,
        } = self;
        let app = AppContext::new(no_color, quiet, json)?;
        let transport = app.transport();
        let ctx = &app.output;
        let cfg = &app.config;

        match command {
            Command::Deploy => {
                commands::deploy::run(ctx, cfg, &TokioCommandRunner::default(), &transport).await
            }
            Command::Start => commands::start::run(ctx, cfg, &transport).await,
            Command::Stop => commands::stop::run(ctx, cfg, &transport).await,
            Command::Restart => commands::restart::run(ctx, cfg, &transport).await,
            Command::Status => commands::status::run(cfg, &transport, app.json).await,
            Command::Log => commands::log::run(cfg, &transport).await,
            Command::FetchLog => commands::fetch_log::run(ctx, cfg, &transport).await,
        }
    }
}
