//! `aladdinctl stop` — stop the daemon, a no-op when it is absent.

use anyhow::{Context, Result};

use crate::config::TargetConfig;
use crate::output::{OutputContext, progress};
use crate::remote::Transport;
use crate::supervisor;

/// Run `aladdinctl stop`.
///
/// The supervisor retries for up to ten seconds before giving up; the
/// spinner covers that wait. Its failure exit code is surfaced verbatim.
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
        .then(|| progress::spinner(&format!("stopping {}...", cfg.binary)));
    let output = transport
        .exec(&supervisor::stop_command(cfg))
        .await
        .context("stopping the daemon")?;
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    if !output.status.success() {
        return Ok(super::surface_failure(
            ctx,
            &format!("failed to stop {}", cfg.binary),
            &output,
        ));
    }
    ctx.success(&format!("{} is stopped", cfg.binary));
    Ok(0)
}
