//! Configuration management for QuickFund.
//!
//! Loads configuration from ${QUICKFUND_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::i18n::Language;
use crate::theme::Theme;

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for QuickFund configuration and data directories.
    //!
    //! QUICKFUND_HOME resolution order:
    //! 1. QUICKFUND_HOME environment variable (if set)
    //! 2. ~/.config/quickfund (default)
    //! 3. ./.quickfund when no home directory can be determined

    use std::path::PathBuf;

    pub const HOME_ENV: &str = "QUICKFUND_HOME";

    /// Returns the QuickFund home directory.
    pub fn quickfund_home() -> PathBuf {
        if let Ok(home) = std::env::var(HOME_ENV) {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".quickfund"),
            |h| h.join(".config").join("quickfund"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        quickfund_home().join("config.toml")
    }

    /// Returns the directory holding log files.
    pub fn logs_dir() -> PathBuf {
        quickfund_home().join("logs")
    }
}

/// Auth backend configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Base URL of the auth API; `None` selects the demo backend.
    pub base_url: Option<String>,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
    /// Simulated latency of the demo backend in milliseconds.
    pub demo_latency_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: AuthConfig::DEFAULT_TIMEOUT_SECS,
            demo_latency_ms: AuthConfig::DEFAULT_DEMO_LATENCY_MS,
        }
    }
}

impl AuthConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 15;
    const DEFAULT_DEMO_LATENCY_MS: u64 = 600;

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn demo_latency(&self) -> Duration {
        Duration::from_millis(self.demo_latency_ms)
    }

    /// Checks that `base_url`, when set, is an absolute http(s) URL.
    ///
    /// # Errors
    /// Returns an error describing the offending value.
    pub fn validate(&self) -> Result<()> {
        match self.base_url.as_deref().map(str::trim) {
            Some(base) if !base.is_empty() => parse_base_url(base).map(drop),
            _ => Ok(()),
        }
    }
}

/// Parses an auth API base URL, accepting only http(s).
///
/// # Errors
/// Returns an error when `base` does not parse or uses another scheme.
pub fn parse_base_url(base: &str) -> Result<Url> {
    let url = Url::parse(base).with_context(|| format!("Invalid auth.base_url '{base}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "Invalid auth.base_url '{base}': scheme must be http or https, got '{}'",
            url.scheme()
        );
    }
    Ok(url)
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial interface language
    pub language: Language,

    /// Initial color theme
    pub theme: Theme,

    /// Auth backend settings
    pub auth: AuthConfig,
}

impl Config {
    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// holds an invalid `auth.base_url`.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file missing; using defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config
            .auth
            .validate()
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    ///
    /// # Errors
    /// Returns an error if the file exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config file already exists at {}", path.display());
        }

        write_config(path, default_config_template())
    }
}

fn write_config(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, content)
        .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            tmp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}
