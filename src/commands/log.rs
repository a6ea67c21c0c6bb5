//! `aladdinctl log` — show the daemon's log.
//!
//! Interactive sessions follow the file live; one-shot sessions dump it.
//! Either way the viewer's output and errors pass straight through to the
//! operator's terminal, and its exit code is surfaced.

use anyhow::{Context, Result};

use crate::config::{SessionMode, TargetConfig};
use crate::remote::{RemoteCommand, Transport};

/// Run `aladdinctl log`.
///
/// # Errors
///
/// Returns an error if the transport cannot reach the host.
pub async fn run(cfg: &TargetConfig, transport: &impl Transport) -> Result<u8> {
    let status = transport
        .exec_passthrough(&viewer(cfg))
        .await
        .context("showing the daemon's log")?;
    if status.success() {
        Ok(0)
    } else {
        Ok(super::exit_code(status.code()))
    }
}

/// The remote viewer for the configured session mode.
#[must_use]
pub fn viewer(cfg: &TargetConfig) -> RemoteCommand {
    match cfg.session {
        SessionMode::Interactive => RemoteCommand::new("tail").arg("-f").arg(cfg.log_path()),
        SessionMode::Oneshot => RemoteCommand::new("cat").arg(cfg.log_path()),
    }
}
