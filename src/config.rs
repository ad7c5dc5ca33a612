use crate::constants::{DEFAULT_CLASSIFIER_TIMEOUT_SECS, DEFAULT_CLASSIFIER_URL};
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub classifier: ClassifierConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 5000 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub url: String,
    pub timeout_secs: u64,
    pub enabled: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CLASSIFIER_URL.to_string(),
            timeout_secs: DEFAULT_CLASSIFIER_TIMEOUT_SECS,
            enabled: true,
        }
    }
}

impl ClassifierConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("logs") }
    }
}

impl Config {
    /// Reads the TOML file when it exists (defaults otherwise), then applies
    /// `RUBE_*` environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path.as_ref())?;
        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(host) = lookup("RUBE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("RUBE_PORT") {
            self.server.port = parse_var("RUBE_PORT", &port)?;
        }
        if let Some(url) = lookup("RUBE_CLASSIFIER_URL") {
            self.classifier.url = url;
        }
        if let Some(secs) = lookup("RUBE_CLASSIFIER_TIMEOUT_SECS") {
            self.classifier.timeout_secs = parse_var("RUBE_CLASSIFIER_TIMEOUT_SECS", &secs)?;
        }
        if let Some(enabled) = lookup("RUBE_CLASSIFIER_ENABLED") {
            self.classifier.enabled = parse_var("RUBE_CLASSIFIER_ENABLED", &enabled)?;
        }
        if let Some(dir) = lookup("RUBE_LOG_DIR") {
            self.logging.dir = PathBuf::from(dir);
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidVar {
        key: key.to_string(),
        value: value.to_string(),
    })
}
