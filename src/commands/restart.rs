//! `aladdinctl restart` — stop, then start.
//!
//! Start only runs after a clean stop; a failed stop aborts with the
//! supervisor's exit code and leaves the daemon alone.

use anyhow::{Context, Result};

use crate::config::TargetConfig;
use crate::output::OutputContext;
use crate::remote::Transport;
use crate::supervisor;

/// Run `aladdinctl restart`.
///
/// # Errors
///
/// Returns an error if the transport cannot reach the host.
pub async fn run(
    ctx: &OutputContext,
    cfg: &TargetConfig,
    transport: &impl Transport,
) -> Result<u8> {
    let stopped = transport
        .exec(&supervisor::stop_command(cfg))
        .await
        .context("stopping the daemon")?;
    if !stopped.status.success() {
        return Ok(super::surface_failure(
            ctx,
            &format!("stop failed; {} was not restarted", cfg.binary),
            &stopped,
        ));
    }

    let started = transport
        .exec(&supervisor::start_command(cfg))
        .await
        .context("starting the daemon")?;
    if !started.status.success() {
        return Ok(super::surface_failure(
            ctx,
            &format!("failed to start {}", cfg.binary),
            &started,
        ));
    }

    ctx.success(&format!("{} restarted on {}", cfg.binary, cfg.host));
    Ok(0)
}
