//! Configuration loading for cfq

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CfqError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Load configuration: an explicit path (flag or `CFQ_CONFIG`) wins over the
    /// global file, then environment overrides apply on top.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("CFQ_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit.or_else(default_config_path) {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| CfqError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| CfqError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.api {
            self.api.merge(patch);
        }
        if let Some(patch) = patch.session {
            self.session.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("CFQ_API_ENDPOINT") {
            self.api.endpoint = value;
        }
        if let Some(value) = env_u64("CFQ_API_TIMEOUT_SECS")? {
            self.api.timeout_secs = value;
        }
        if let Some(value) = env_bool("CFQ_SKIP_SSL_VALIDATION") {
            self.api.skip_ssl_validation = value;
        }

        if let Some(value) = env_string("CFQ_ACCESS_TOKEN") {
            self.session.access_token = Some(value);
        }
        if let Some(value) = env_string("CFQ_USERNAME") {
            self.session.username = Some(value);
        }
        if let Some(value) = env_string("CFQ_API_VERSION") {
            self.session.api_version = Some(parse_version("CFQ_API_VERSION", &value)?);
        }

        Ok(())
    }
}

/// `<config_dir>/cfq/config.toml`
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cfq/config.toml"))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub skip_ssl_validation: bool,
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
            skip_ssl_validation: false,
        }
    }
}

impl ApiConfig {
    fn merge(&mut self, patch: ApiPatch) {
        if let Some(value) = patch.endpoint {
            self.endpoint = value;
        }
        if let Some(value) = patch.timeout_secs {
            self.timeout_secs = value;
        }
        if let Some(value) = patch.skip_ssl_validation {
            self.skip_ssl_validation = value;
        }
    }
}

/// Credentials and cached target metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    /// Known API version of the target; skips the `/v2/info` lookup when set.
    #[serde(default)]
    pub api_version: Option<semver::Version>,
}

impl SessionConfig {
    fn merge(&mut self, patch: SessionPatch) {
        if let Some(value) = patch.access_token {
            self.access_token = Some(value);
        }
        if let Some(value) = patch.username {
            self.username = Some(value);
        }
        if let Some(value) = patch.api_version {
            self.api_version = Some(value);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    #[serde(default)]
    api: Option<ApiPatch>,
    #[serde(default)]
    session: Option<SessionPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ApiPatch {
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
    skip_ssl_validation: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SessionPatch {
    access_token: Option<String>,
    username: Option<String>,
    api_version: Option<semver::Version>,
}

fn parse_version(key: &str, value: &str) -> Result<semver::Version> {
    semver::Version::parse(value.trim())
        .map_err(|err| CfqError::Config(format!("invalid {key} value {value}: {err}")))
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|value| {
        matches!(
            value.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<u64>().map(Some).map_err(|err| {
            CfqError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}
