//! Structured remote commands and the ssh/scp transport.
//!
//! Remote command lines are assembled from structured data and every
//! piece is quoted before it reaches the remote shell, so paths and
//! environment values containing spaces survive intact.

use std::borrow::Cow;
use std::process::{ExitStatus, Output};

use anyhow::{Context, Result};

use crate::command_runner::CommandRunner;
use crate::config::{SessionMode, TargetConfig};

/// One command to run on the target host: environment assignments, an
/// argument vector, and an optional output redirection.
///
/// Environment keys are trusted identifiers supplied by this crate
/// (`RUST_LOG` and friends); values and arguments are quoted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteCommand {
    env: Vec<(String, String)>,
    argv: Vec<String>,
    append_to: Option<String>,
}

impl RemoteCommand {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            env: Vec::new(),
            argv: vec![program.into()],
            append_to: None,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.argv.push(arg.into());
        self
    }

    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Append the command's stdout and stderr to `path` on the host.
    #[must_use]
    pub fn append_output_to(mut self, path: impl Into<String>) -> Self {
        self.append_to = Some(path.into());
        self
    }

    /// Render to a single POSIX shell line: env assignments first, then
    /// the quoted argv, then the redirection.
    #[must_use]
    pub fn to_shell(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        for (key, value) in &self.env {
            parts.push(format!("{key}={}", quote(value)));
        }
        parts.extend(self.argv.iter().map(|arg| quote(arg)));
        let mut line = parts.join(" ");
        if let Some(path) = &self.append_to {
            line.push_str(&format!(" >> {} 2>&1", quote(path)));
        }
        line
    }
}

fn quote(word: &str) -> String {
    shell_escape::unix::escape(Cow::Borrowed(word)).into_owned()
}

/// Transport to the target host. The production implementation shells out
/// to `ssh` and `scp`; test doubles return canned results.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Execute a remote command, capturing its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport itself cannot run; the remote
    /// command's exit code is reported through the returned `Output`.
    async fn exec(&self, command: &RemoteCommand) -> Result<Output>;

    /// Execute a remote command with inherited stdio (live streaming).
    ///
    /// # Errors
    ///
    /// Returns an error if the transport itself cannot run.
    async fn exec_passthrough(&self, command: &RemoteCommand) -> Result<ExitStatus>;

    /// Copy a local file onto the host. Inherited stdio, so scp's own
    /// progress meter is visible.
    ///
    /// # Errors
    ///
    /// Returns an error if scp cannot be spawned.
    async fn push(&self, local: &str, remote: &str) -> Result<ExitStatus>;

    /// Copy a remote file into a local path.
    ///
    /// # Errors
    ///
    /// Returns an error if scp cannot be spawned.
    async fn pull(&self, remote: &str, local: &str) -> Result<ExitStatus>;
}

/// Production transport backed by the system `ssh` and `scp` binaries.
///
/// Generic over `R: CommandRunner` so tests can observe the exact argv
/// without spawning processes.
pub struct OpenSsh<R: CommandRunner> {
    runner: R,
    destination: String,
    mode: SessionMode,
}

impl<R: CommandRunner> OpenSsh<R> {
    pub fn new(runner: R, config: &TargetConfig) -> Self {
        Self {
            runner,
            destination: config.destination(),
            mode: config.session,
        }
    }

    /// Assemble the ssh argv. A tty is only requested for pass-through
    /// commands in interactive session mode; captured commands never get
    /// one. One-shot mode refuses password prompts via BatchMode.
    fn ssh_args(&self, shell_line: &str, tty: bool) -> Vec<String> {
        let mut args = Vec::new();
        match self.mode {
            SessionMode::Interactive => {
                if tty {
                    args.push("-t".to_string());
                }
            }
            SessionMode::Oneshot => {
                args.push("-o".to_string());
                args.push("BatchMode=yes".to_string());
            }
        }
        args.push(self.destination.clone());
        args.push("--".to_string());
        args.push(shell_line.to_string());
        args
    }
}

impl<R: CommandRunner> Transport for OpenSsh<R> {
    async fn exec(&self, command: &RemoteCommand) -> Result<Output> {
        let args = self.ssh_args(&command.to_shell(), false);
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();
        self.runner
            .run("ssh", &refs)
            .await
            .context("failed to run ssh")
    }

    async fn exec_passthrough(&self, command: &RemoteCommand) -> Result<ExitStatus> {
        let args = self.ssh_args(&command.to_shell(), true);
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();
        self.runner
            .run_status("ssh", &refs)
            .await
            .context("failed to run ssh")
    }

    async fn push(&self, local: &str, remote: &str) -> Result<ExitStatus> {
        let dest = format!("{}:{}", self.destination, quote(remote));
        self.runner
            .run_status("scp", &[local, &dest])
            .await
            .context("failed to run scp")
    }

    async fn pull(&self, remote: &str, local: &str) -> Result<ExitStatus> {
        let src = format!("{}:{}", self.destination, quote(remote));
        self.runner
            .run_status("scp", &[&src, local])
            .await
            .context("failed to run scp")
    }
}
