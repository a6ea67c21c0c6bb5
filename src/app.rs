//! Application context — configuration and output wiring shared by every
//! command handler. Constructed once in `Cli::run()`.

use anyhow::{Context, Result};

use crate::command_runner::TokioCommandRunner;
use crate::config::TargetConfig;
use crate::output::OutputContext;
use crate::remote::OpenSsh;

/// Everything a command handler needs besides its trait-typed
/// collaborators: terminal output and the loaded target descriptor.
pub struct AppContext {
    pub output: OutputContext,
    /// Machine-readable output requested (`--json`).
    pub json: bool,
    pub config: TargetConfig,
}

impl AppContext {
    /// Load configuration and set up output.
    ///
    /// # Errors
    ///
    /// Returns an error if the target descriptor cannot be loaded or fails
    /// validation.
    pub fn new(no_color: bool, quiet: bool, json: bool) -> Result<Self> {
        let config = TargetConfig::load().context("loading target configuration")?;
        Ok(Self {
            output: OutputContext::new(no_color, quiet),
            json,
            config,
        })
    }

    /// Production transport for the configured target.
    #[must_use]
    pub fn transport(&self) -> OpenSsh<TokioCommandRunner> {
        OpenSsh::new(TokioCommandRunner::default(), &self.config)
    }
}
