//! Local build step for `deploy`: cargo invocation and artifact location.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::command_runner::CommandRunner;
use crate::config::{BuildConfig, BuildMode};

/// Assemble the cargo argv for the configured target and mode.
///
/// The release flag, when the mode calls for it, appears exactly once and
/// ahead of any extra flags; extra flags are appended verbatim.
#[must_use]
pub fn build_args(cfg: &BuildConfig) -> Vec<String> {
    let mut args = vec![
        "build".to_string(),
        "--target".to_string(),
        cfg.target.clone(),
    ];
    if cfg.mode == BuildMode::Release {
        args.push("--release".to_string());
    }
    args.extend(cfg.flags.iter().cloned());
    args
}

/// Where cargo leaves the binary for this target and mode.
#[must_use]
pub fn artifact_path(cfg: &BuildConfig, binary: &str) -> PathBuf {
    let mode_dir = match cfg.mode {
        BuildMode::Release => "release",
        BuildMode::Debug => "debug",
    };
    PathBuf::from("target")
        .join(&cfg.target)
        .join(mode_dir)
        .join(binary)
}

/// Run the build with inherited stdio so compiler output reaches the
/// operator unfiltered. The exit status is the caller's to interpret.
///
/// # Errors
///
/// Returns an error if cargo cannot be spawned.
pub async fn build(
    runner: &impl CommandRunner,
    cfg: &BuildConfig,
) -> Result<std::process::ExitStatus> {
    let args = build_args(cfg);
    let refs: Vec<&str> = args.iter().map(String::as_str).collect();
    runner
        .run_status("cargo", &refs)
        .await
        .context("failed to run cargo build")
}
