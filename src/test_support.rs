//! Shared helpers for inline unit tests.

use std::process::{ExitStatus, Output};

/// Build an `ExitStatus` from a logical exit code.
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15.
#[cfg(unix)]
pub(crate) fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub(crate) fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

/// An `Output` whose only interesting part is the exit code.
pub(crate) fn output_with_code(code: i32) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: Vec::new(),
    }
}

/// An `ExitStatus` for a process terminated by a signal (no exit code).
#[cfg(unix)]
pub(crate) fn signaled_status() -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    // SIGKILL in the low bits of the raw wait-status.
    ExitStatus::from_raw(9)
}
