//! Server configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Placeholder admin token used when none is configured.
pub const DEFAULT_ADMIN_TOKEN: &str = "changeme123";

/// Top-level checkin configuration.
///
/// Note: Custom Debug impl masks the admin token to keep it out of logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct CheckinConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Shared secret expected in the `x-admin-token` header.
    #[serde(default = "default_admin_token")]
    pub admin_token: String,
    /// Maximum accepted request body size.
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

impl std::fmt::Debug for CheckinConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckinConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("admin_token", &"***")
            .field("body_limit_bytes", &self.body_limit_bytes)
            .finish()
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_admin_token() -> String {
    DEFAULT_ADMIN_TOKEN.to_string()
}
fn default_body_limit() -> usize {
    100 * 1024
}

impl Default for CheckinConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            admin_token: default_admin_token(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

impl CheckinConfig {
    /// Whether the placeholder token is still in use.
    pub fn uses_default_token(&self) -> bool {
        self.admin_token == DEFAULT_ADMIN_TOKEN
    }

    /// Apply `PORT` and `ADMIN_TOKEN` overrides. Empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(port) = non_empty("PORT") {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT value: {port:?}"))?;
        }
        if let Some(token) = non_empty("ADMIN_TOKEN") {
            self.admin_token = token;
        }
        Ok(())
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `checkin.toml` in the current directory
/// 2. `~/.config/checkin/config.toml`
///
/// Environment variable overrides: `PORT`, `ADMIN_TOKEN`.
pub fn load_config_from(path: Option<&Path>) -> Result<CheckinConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("checkin.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<CheckinConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => CheckinConfig::default(),
    };

    config.apply_env_overrides(|key| std::env::var(key).ok())?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("checkin"))
}
