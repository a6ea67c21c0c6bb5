//! Target descriptor: which host the daemon lives on and how it runs there.
//!
//! Read once at startup, validated, and passed to command handlers
//! immutably. A partial YAML file is fine — every field has a default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "ALADDINCTL_CONFIG";

/// Config file looked up in the current directory.
const CONFIG_FILE: &str = "aladdinctl.yaml";

/// Errors from target descriptor validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("target host must be non-empty, without whitespace or '@' (got {0:?})")]
    InvalidHost(String),

    #[error("target user must be non-empty (set 'user' in {CONFIG_FILE})")]
    MissingUser,

    #[error("remote binary name must be non-empty")]
    MissingBinary,

    #[error("remote_dir must be an absolute path (got {0:?})")]
    RelativeRemoteDir(String),
}

/// How ssh sessions to the host are driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    /// Allocate a tty; `log` follows the file live.
    Interactive,
    /// `BatchMode=yes`, one command per session; `log` dumps the file.
    #[default]
    Oneshot,
}

/// Environment exported to the daemon when it is started.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// `RUST_LOG` filter for the daemon's own namespace.
    pub log_filter: String,
    /// Export `RUST_BACKTRACE=1` so remote failures carry a backtrace.
    pub backtrace: bool,
    /// `TZ` applied to the daemon's environment.
    pub timezone: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            log_filter: "aladdin=info".to_string(),
            backtrace: true,
            timezone: "UTC".to_string(),
        }
    }
}

/// Cargo build mode. Anything that is not `release` gets no
/// optimization flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Release,
    Debug,
}

/// Local build settings for `deploy`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Target triple the daemon is compiled for.
    pub target: String,
    pub mode: BuildMode,
    /// Extra cargo flags, appended verbatim after the mode flag.
    pub flags: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            target: "x86_64-unknown-linux-musl".to_string(),
            mode: BuildMode::Release,
            flags: Vec::new(),
        }
    }
}

/// The full target descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Login user on the host.
    pub user: String,
    /// Host the daemon runs on.
    pub host: String,
    /// Remote working directory the daemon runs in and deploys land in.
    /// Defaults to the daemon user's home directory.
    pub remote_dir: String,
    /// Binary name, both built locally and supervised remotely.
    pub binary: String,
    /// Log file the daemon's output is appended to. Relative paths are
    /// resolved against `remote_dir`.
    pub log_file: String,
    pub session: SessionMode,
    pub env: EnvConfig,
    pub build: BuildConfig,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            user: "aladdin".to_string(),
            host: String::new(),
            remote_dir: "/home/aladdin".to_string(),
            binary: "aladdin".to_string(),
            log_file: "aladdin.log".to_string(),
            session: SessionMode::default(),
            env: EnvConfig::default(),
            build: BuildConfig::default(),
        }
    }
}

impl TargetConfig {
    /// Load the descriptor: config file (if any), then process-environment
    /// overrides, then validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or if
    /// the resulting descriptor fails validation.
    pub fn load() -> Result<Self> {
        let mut cfg = match Self::resolve_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        cfg.apply_env_overrides(|key| std::env::var(key).ok());
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a descriptor from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }

    /// `$ALADDINCTL_CONFIG`, else `./aladdinctl.yaml`, else
    /// `~/.aladdin/ctl.yaml`; `None` means built-in defaults.
    fn resolve_path() -> Option<PathBuf> {
        if let Ok(val) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(val));
        }
        let local = PathBuf::from(CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }
        let fallback = dirs::home_dir()?.join(".aladdin").join("ctl.yaml");
        fallback.exists().then_some(fallback)
    }

    /// Apply `ALADDIN_LOG` / `ALADDIN_BACKTRACE` / `ALADDIN_TZ` overrides
    /// from an environment lookup.
    pub fn apply_env_overrides(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(v) = get("ALADDIN_LOG") {
            self.env.log_filter = v;
        }
        if let Some(v) = get("ALADDIN_BACKTRACE") {
            self.env.backtrace = !matches!(v.as_str(), "0" | "false" | "off");
        }
        if let Some(v) = get("ALADDIN_TZ") {
            self.env.timezone = v;
        }
    }

    /// Check the descriptor is usable for remote operations.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user.is_empty() {
            return Err(ConfigError::MissingUser);
        }
        if self.host.is_empty()
            || self.host.contains(char::is_whitespace)
            || self.host.contains('@')
        {
            return Err(ConfigError::InvalidHost(self.host.clone()));
        }
        if self.binary.is_empty() {
            return Err(ConfigError::MissingBinary);
        }
        if !self.remote_dir.starts_with('/') {
            return Err(ConfigError::RelativeRemoteDir(self.remote_dir.clone()));
        }
        Ok(())
    }

    /// `user@host` as ssh and scp expect it.
    #[must_use]
    pub fn destination(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }

    /// Absolute path of the supervised binary on the host.
    #[must_use]
    pub fn binary_path(&self) -> String {
        format!("{}/{}", self.remote_dir.trim_end_matches('/'), self.binary)
    }

    /// Absolute path of the daemon's log file on the host.
    #[must_use]
    pub fn log_path(&self) -> String {
        if self.log_file.starts_with('/') {
            self.log_file.clone()
        } else {
            format!("{}/{}", self.remote_dir.trim_end_matches('/'), self.log_file)
        }
    }
}
