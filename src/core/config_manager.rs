// src/core/config_manager.rs
//! Client configuration, resolved once at startup and injected into the client

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::utils::normalize_base_url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONFIG_FILE: &str = "resume-client.yaml";

pub const BASE_URL_ENV: &str = "RESUME_SERVICE_URL";
pub const TIMEOUT_ENV: &str = "RESUME_SERVICE_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::default().with_base_url(base_url)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = validate_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    base_url: Option<String>,
    timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub service: ClientConfig,
    pub source: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration: defaults, then YAML file, then environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(config_path, |key| std::env::var(key).ok())
    }

    pub fn load_with_env<F>(config_path: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut service = ClientConfig::default();

        let source = match config_path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                Some(path.to_path_buf())
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                default_path.exists().then_some(default_path)
            }
        };

        if let Some(path) = &source {
            let file = Self::read_file(path)?;
            if let Some(base_url) = file.base_url {
                service = service.with_base_url(&base_url)?;
            }
            if let Some(timeout) = file.timeout_seconds {
                service = service.with_timeout(timeout);
            }
        }

        if let Some(base_url) = env(BASE_URL_ENV) {
            service = service
                .with_base_url(&base_url)
                .with_context(|| format!("Invalid {}", BASE_URL_ENV))?;
        }

        if let Some(raw) = env(TIMEOUT_ENV) {
            let timeout = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{} must be a number of seconds", TIMEOUT_ENV))?;
            service = service.with_timeout(timeout);
        }

        info!(
            "Service configuration resolved: {} (timeout {}s)",
            service.base_url, service.timeout_seconds
        );

        Ok(Self { service, source })
    }

    /// Command-line override, applied last.
    pub fn with_base_url_override(mut self, base_url: Option<&str>) -> Result<Self> {
        if let Some(base_url) = base_url {
            self.service = self.service.with_base_url(base_url)?;
        }
        Ok(self)
    }

    fn read_file(path: &Path) -> Result<ConfigFile> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if content.trim().is_empty() {
            return Ok(ConfigFile::default());
        }

        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

fn validate_base_url(raw: &str) -> Result<String> {
    let base_url = normalize_base_url(raw);
    if base_url.is_empty() {
        anyhow::bail!("Service base URL must not be empty");
    }
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        anyhow::bail!(
            "Service base URL must start with http:// or https://: {}",
            base_url
        );
    }
    Ok(base_url)
}
