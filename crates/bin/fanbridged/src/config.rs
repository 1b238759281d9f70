//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `fanbridge.toml` in the working directory. Endpoint fields have
//! defaults so the file only needs the deployment identifiers. Environment
//! variables take precedence over file values.

use serde::Deserialize;

use fanbridge_adapter_sdm_reqwest::SdmConfig;
use fanbridge_adapter_secrets_gcp::SecretsConfig;
use fanbridge_domain::command::DEFAULT_FAN_DURATION;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Secret-store settings.
    pub secrets: SecretsConfig,
    /// Device-API endpoint settings.
    pub sdm: SdmConfig,
    /// Fan trigger settings.
    pub fan: FanConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Which fan to run, and for how long.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FanConfig {
    /// Device id of the thermostat.
    pub device_id: String,
    /// Run duration as the API's duration string (e.g. `"360s"`).
    pub duration: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `fanbridge.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is incomplete.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("fanbridge.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("FANBRIDGE_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("FANBRIDGE_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("FANBRIDGE_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("FANBRIDGE_GCP_PROJECT") {
            self.secrets.project_id = val;
        }
        if let Ok(val) = std::env::var("FANBRIDGE_DEVICE_ID") {
            self.fan.device_id = val;
        }
        if let Ok(val) = std::env::var("FANBRIDGE_FAN_DURATION") {
            self.fan.duration = val;
        }
        if let Ok(val) = std::env::var("FANBRIDGE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.secrets.project_id.is_empty() {
            return Err(ConfigError::Validation(
                "secrets.project_id must be set".to_string(),
            ));
        }
        if self.fan.device_id.is_empty() {
            return Err(ConfigError::Validation(
                "fan.device_id must be set".to_string(),
            ));
        }
        if !is_duration_string(&self.fan.duration) {
            return Err(ConfigError::Validation(format!(
                "fan.duration must look like \"360s\", got {:?}",
                self.fan.duration
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Whether `value` is the API's duration form: `<seconds>s`.
fn is_duration_string(value: &str) -> bool {
    value
        .strip_suffix('s')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for FanConfig {
    fn default() -> Self {
        Self {
            device_id: String::new(),
            duration: DEFAULT_FAN_DURATION.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "fanbridged=info,fanbridge=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
