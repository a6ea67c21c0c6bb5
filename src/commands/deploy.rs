//! `aladdinctl deploy` — build the daemon locally, copy the binary over.
//!
//! Fail-fast: a failed build aborts before any copy is attempted, and a
//! failed copy surfaces scp's exit code. No partial-state cleanup — the
//! copy replaces the remote binary in one step.

use anyhow::{Context, Result};

use crate::builder;
use crate::command_runner::CommandRunner;
use crate::config::TargetConfig;
use crate::output::OutputContext;
use crate::remote::Transport;

/// Run `aladdinctl deploy`.
///
/// # Errors
///
/// Returns an error if cargo or scp cannot be spawned, or if the artifact
/// path is not valid UTF-8.
pub async fn run(
    ctx: &OutputContext,
    cfg: &TargetConfig,
    runner: &impl CommandRunner,
    transport: &impl Transport,
) -> Result<u8> {
    ctx.info(&format!(
        "building {} for {}",
        cfg.binary, cfg.build.target
    ));
    let built = builder::build(runner, &cfg.build).await?;
    if !built.success() {
        ctx.error("build failed");
        return Ok(super::exit_code(built.code()));
    }

    let artifact = builder::artifact_path(&cfg.build, &cfg.binary);
    let artifact = artifact.to_str().context("artifact path is not valid UTF-8")?;
    ctx.info(&format!("copying {artifact} to {}", cfg.destination()));
    let copied = transport.push(artifact, &cfg.remote_dir).await?;
    if !copied.success() {
        ctx.error("copy failed");
        return Ok(super::exit_code(copied.code()));
    }

    ctx.success(&format!("{} deployed to {}", cfg.binary, cfg.host));
    Ok(0)
}
