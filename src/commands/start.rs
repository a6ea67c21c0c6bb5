//! `aladdinctl start` — start the daemon under the remote supervisor.

use anyhow::{Context, Result};

use crate::config::TargetConfig;
use crate::output::{OutputContext, progress};
use crate::remote::Transport;
use crate::supervisor;

/// Run `aladdinctl start`.
///
/// The supervisor treats an already-running daemon as success, so this is
/// safe to repeat. Its failure exit code is surfaced verbatim.
///
/// # Errors
///
/// Returns an error if the transport cannot reach the host.
pub async fn run(
    ctx: &OutputContext,
    cfg: &TargetConfig,
    transport: &impl Transport,
) -> Result<u8> {
    let spinner = ctx
        .show_progress()
        .then(|| progress::spinner(&format!("starting {}...", cfg.binary)));
    let output = transport
        .exec(&supervisor::start_command(cfg))
        .await
        .context("starting the daemon")?;
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    if !output.status.success() {
        return Ok(super::surface_failure(
            ctx,
            &format!("failed to start {}", cfg.binary),
            &output,
        ));
    }
    ctx.success(&format!("{} is running on {}", cfg.binary, cfg.host));
    ctx.kv("Log", &cfg.log_path());
    Ok(0)
}
