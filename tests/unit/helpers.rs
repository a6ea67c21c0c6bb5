//! Shared test helpers: stub transports, stub runners, and output
//! constructors.

#![allow(dead_code)]

use std::cell::Cell;
use std::process::{ExitStatus, Output};
use std::time::Duration;

use anyhow::Result;
use aladdinctl::command_runner::CommandRunner;
use aladdinctl::config::TargetConfig;
use aladdinctl::output::OutputContext;
use aladdinctl::remote::{RemoteCommand, Transport};

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we
/// shift. On Windows `ExitStatusExt::from_raw` takes the code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

/// An `Output` carrying only an exit code.
pub fn output_with_code(code: i32) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: Vec::new(),
    }
}

// ── Shared fixtures ──────────────────────────────────────────────────────────

/// A valid target descriptor pointing at a fictional berth.
pub fn test_config() -> TargetConfig {
    TargetConfig {
        host: "berth.example.net".to_string(),
        ..TargetConfig::default()
    }
}

/// Quiet output context so tests don't spam the harness output.
pub fn quiet_output() -> OutputContext {
    OutputContext::new(true, true)
}

fn unexpected<T>(what: &str) -> Result<T> {
    anyhow::bail!("{what} not expected in this test")
}

// ── Stub: supervisor replies with a fixed exit code ──────────────────────────

/// Every captured exec returns the given exit code; everything else is
/// unexpected.
pub struct SupervisorExit(pub i32);

impl Transport for SupervisorExit {
    async fn exec(&self, _: &RemoteCommand) -> Result<Output> {
        Ok(output_with_code(self.0))
    }
    async fn exec_passthrough(&self, _: &RemoteCommand) -> Result<ExitStatus> {
        unexpected("exec_passthrough")
    }
    async fn push(&self, _: &str, _: &str) -> Result<ExitStatus> {
        unexpected("push")
    }
    async fn pull(&self, _: &str, _: &str) -> Result<ExitStatus> {
        unexpected("pull")
    }
}

// ── Spy: counts stop/start round trips ───────────────────────────────────────

/// Answers stop commands with a configurable exit code and counts how
/// often stop and start reach the host.
pub struct LifecycleSpy {
    pub stop_code: i32,
    pub stop_calls: Cell<u32>,
    pub start_calls: Cell<u32>,
}

impl LifecycleSpy {
    pub fn stopping_with(code: i32) -> Self {
        Self {
            stop_code: code,
            stop_calls: Cell::new(0),
            start_calls: Cell::new(0),
        }
    }
}

impl Transport for LifecycleSpy {
    async fn exec(&self, command: &RemoteCommand) -> Result<Output> {
        let line = command.to_shell();
        if line.contains("--stop") {
            self.stop_calls.set(self.stop_calls.get() + 1);
            Ok(output_with_code(self.stop_code))
        } else {
            self.start_calls.set(self.start_calls.get() + 1);
            Ok(output_with_code(0))
        }
    }
    async fn exec_passthrough(&self, _: &RemoteCommand) -> Result<ExitStatus> {
        unexpected("exec_passthrough")
    }
    async fn push(&self, _: &str, _: &str) -> Result<ExitStatus> {
        unexpected("push")
    }
    async fn pull(&self, _: &str, _: &str) -> Result<ExitStatus> {
        unexpected("pull")
    }
}

// ── Spy: counts pushes ───────────────────────────────────────────────────────

/// Answers pushes with a configurable exit code and counts them.
pub struct PushSpy {
    pub push_code: i32,
    pub pushes: Cell<u32>,
}

impl PushSpy {
    pub fn accepting() -> Self {
        Self {
            push_code: 0,
            pushes: Cell::new(0),
        }
    }

    pub fn failing_with(code: i32) -> Self {
        Self {
            push_code: code,
            pushes: Cell::new(0),
        }
    }
}

impl Transport for PushSpy {
    async fn exec(&self, _: &RemoteCommand) -> Result<Output> {
        unexpected("exec")
    }
    async fn exec_passthrough(&self, _: &RemoteCommand) -> Result<ExitStatus> {
        unexpected("exec_passthrough")
    }
    async fn push(&self, _: &str, _: &str) -> Result<ExitStatus> {
        self.pushes.set(self.pushes.get() + 1);
        Ok(exit_status(self.push_code))
    }
    async fn pull(&self, _: &str, _: &str) -> Result<ExitStatus> {
        unexpected("pull")
    }
}

// ── Stub: local build exits with a fixed code ────────────────────────────────

/// `run_status` (the build path) exits with the given code; captured runs
/// are unexpected.
pub struct BuildExit(pub i32);

impl CommandRunner for BuildExit {
    async fn run(&self, _: &str, _: &[&str]) -> Result<Output> {
        unexpected("run")
    }
    async fn run_with_timeout(&self, _: &str, _: &[&str], _: Duration) -> Result<Output> {
        unexpected("run_with_timeout")
    }
    async fn run_status(&self, _: &str, _: &[&str]) -> Result<ExitStatus> {
        Ok(exit_status(self.0))
    }
}
