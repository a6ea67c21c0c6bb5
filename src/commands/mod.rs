//! Command implementations — one module per verb.

pub mod deploy;
pub mod fetch_log;
pub mod log;
pub mod restart;
pub mod start;
pub mod status;
pub mod stop;

use std::process::Output;

use crate::output::OutputContext;

/// Convert an external exit code into this process's exit code. Codes
/// outside the u8 range (and signal terminations) collapse to 1.
pub(crate) fn exit_code(code: Option<i32>) -> u8 {
    code.and_then(|c| u8::try_from(c).ok()).unwrap_or(1)
}

/// Relay a failed remote command's stderr to the operator and surface its
/// exit code verbatim. Fail-fast: the caller returns this code.
pub(crate) fn surface_failure(ctx: &OutputContext, action: &str, output: &Output) -> u8 {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let trimmed = stderr.trim();
    if !trimmed.is_empty() {
        eprintln!("{trimmed}");
    }
    ctx.error(action);
    exit_code(output.status.code())
}
