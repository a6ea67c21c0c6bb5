//! `aladdinctl fetch-log` — copy the daemon's log file into the current
//! directory.

use anyhow::{Context, Result};

use crate::config::TargetConfig;
use crate::output::OutputContext;
use crate::remote::Transport;

/// Run `aladdinctl fetch-log`. A copy failure surfaces scp's exit code
/// verbatim.
///
/// # Errors
///
/// Returns an error if scp cannot be spawned.
pub async fn run(
    ctx: &OutputContext,
    cfg: &TargetConfig,
    transport: &impl Transport,
) -> Result<u8> {
    let status = transport
        .pull(&cfg.log_path(), ".")
        .await
        .context("fetching the daemon's log")?;
    if !status.success() {
        ctx.error("log copy failed");
        return Ok(super::exit_code(status.code()));
    }
    ctx.success(&format!(
        "fetched {} into the current directory",
        cfg.log_path()
    ));
    Ok(0)
}
