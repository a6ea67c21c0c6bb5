//! Commands for the remote process supervisor and the decoding of its
//! status replies.
//!
//! The supervisor (`start-stop-daemon`) is a black box identified by its
//! documented exit codes; this module owns everything sent to it and the
//! meaning of everything that comes back. Pure construction and decoding,
//! no I/O.

use std::process::ExitStatus;

use thiserror::Error;

use crate::config::TargetConfig;
use crate::remote::RemoteCommand;

/// Supervisor binary on the target host.
const SUPERVISOR: &str = "start-stop-daemon";

/// Bounded retry the supervisor applies while stopping the daemon.
const STOP_RETRIES: &str = "10";

/// Errors from interpreting the supervisor's status query.
#[derive(Debug, Error)]
pub enum SupervisorError {
    /// The status query exited with a code outside the documented set
    /// {0, 1, 3, 4}.
    #[error("supervisor returned undocumented status code {0}")]
    UnexpectedStatus(i32),

    #[error("supervisor status query was terminated by a signal")]
    StatusInterrupted,
}

/// Daemon state as reported by the supervisor's status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaemonStatus {
    Running,
    NotRunning,
    /// The supervisor could not determine the state (exit code 4).
    Unknown,
}

impl DaemonStatus {
    /// Stable machine-readable label, also used for `--json` output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::NotRunning => "not running",
            Self::Unknown => "unknown",
        }
    }
}

/// Start the daemon in the background with its output appended to the log
/// file. `--oknodo` makes starting an already-running daemon a no-op
/// instead of a failure; `--no-close` keeps the redirected descriptors
/// open across daemonization.
#[must_use]
pub fn start_command(cfg: &TargetConfig) -> RemoteCommand {
    let mut cmd = RemoteCommand::new(SUPERVISOR)
        .env("RUST_LOG", cfg.env.log_filter.as_str())
        .env("TZ", cfg.env.timezone.as_str());
    if cfg.env.backtrace {
        cmd = cmd.env("RUST_BACKTRACE", "1");
    }
    cmd.arg("--start")
        .arg("--oknodo")
        .arg("--background")
        .arg("--no-close")
        .arg("--chdir")
        .arg(cfg.remote_dir.as_str())
        .arg("--exec")
        .arg(cfg.binary_path())
        .append_output_to(cfg.log_path())
}

/// Stop the daemon, succeeding when it is already absent, with the
/// supervisor's own bounded retry.
#[must_use]
pub fn stop_command(cfg: &TargetConfig) -> RemoteCommand {
    RemoteCommand::new(SUPERVISOR)
        .arg("--stop")
        .arg("--oknodo")
        .arg("--retry")
        .arg(STOP_RETRIES)
        .arg("--exec")
        .arg(cfg.binary_path())
}

/// Query whether the daemon is running. The reply is carried entirely in
/// the exit code.
#[must_use]
pub fn status_command(cfg: &TargetConfig) -> RemoteCommand {
    RemoteCommand::new(SUPERVISOR)
        .arg("--status")
        .arg("--exec")
        .arg(cfg.binary_path())
}

/// Decode the status query's exit status.
///
/// Documented codes: 0 running, 1 or 3 not running, 4 undeterminable.
/// Anything else is an explicit error rather than a silent fall-through.
///
/// # Errors
///
/// Returns [`SupervisorError`] for undocumented exit codes or a
/// signal-terminated query.
pub fn decode_status(status: ExitStatus) -> Result<DaemonStatus, SupervisorError> {
    match status.code() {
        Some(0) => Ok(DaemonStatus::Running),
        Some(1 | 3) => Ok(DaemonStatus::NotRunning),
        Some(4) => Ok(DaemonStatus::Unknown),
        Some(code) => Err(SupervisorError::UnexpectedStatus(code)),
        None => Err(SupervisorError::StatusInterrupted),
    }
}
