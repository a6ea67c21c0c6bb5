//! `aladdinctl status` — report whether the daemon is running.
//!
//! The supervisor answers through its exit code, so a non-zero exit here
//! is the normal signal path for "not running", never a tool failure.
//! Only an undocumented code aborts.

use anyhow::{Context, Result};

use crate::config::TargetConfig;
use crate::remote::Transport;
use crate::supervisor::{self, DaemonStatus};

/// Run `aladdinctl status`. Exits zero for every documented supervisor
/// reply; the daemon being down is a report, not an error.
///
/// # Errors
///
/// Returns an error if the transport cannot reach the host or the
/// supervisor replies with an undocumented exit code.
pub async fn run(cfg: &TargetConfig, transport: &impl Transport, json: bool) -> Result<u8> {
    let output = transport
        .exec(&supervisor::status_command(cfg))
        .await
        .context("querying the daemon's status")?;
    let status = supervisor::decode_status(output.status)?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "daemon": cfg.binary, "status": status.as_str() })
        );
    } else {
        println!("{}", describe(status, &cfg.binary));
    }
    Ok(0)
}

/// Human-readable report line for a decoded status.
#[must_use]
pub fn describe(status: DaemonStatus, daemon: &str) -> String {
    let name = capitalize(daemon);
    match status {
        DaemonStatus::Running => format!("{name} is running"),
        DaemonStatus::NotRunning => format!("{name} is not running"),
        DaemonStatus::Unknown => format!("unable to determine {name}'s status"),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
