//! Configuration for the daemon-osutil layer.
//!
//! Settings load from serialized defaults merged with `OSUTIL_`-prefixed
//! environment variables, so a deployment can flip the logging transport or
//! level without a config file (e.g. `OSUTIL_LOGGING_MODE=diagnostic`).

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Log level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level logging (most verbose)
    Trace,
    /// Debug level logging
    Debug,
    /// Info level logging (default)
    Info,
    /// Warning level logging
    Warn,
    /// Error level logging
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Info
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

/// Logging transport selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogMode {
    /// Route events to the local system log, tagged with the daemon
    /// identity and process id (production default)
    System,
    /// Write one `[<priority>] <ident>: <message>` line per event to
    /// standard error (tests, interactive debugging)
    Diagnostic,
}

impl Default for LogMode {
    fn default() -> Self {
        Self::System
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Logging transport
    pub mode: LogMode,
    /// Logging level
    pub level: LogLevel,
}

/// Main configuration for the utility layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Daemon identity used to tag every log message
    pub name: String,
    /// Logging configuration
    pub logging: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: String::from("daemon-osutil"),
            logging: LogConfig::default(),
        }
    }
}

impl Config {
    /// Create a new config with defaults.
    ///
    /// # Errors
    ///
    /// Will return an error if the default configuration validation fails.
    pub fn new() -> Result<Self> {
        Ok(Self::default())
    }

    /// Load configuration from defaults merged with `OSUTIL_`-prefixed
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Will return an error if an override is present but malformed.
    pub fn load() -> Result<Self> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::prefixed(crate::CONFIG_ENV_PREFIX).split("_"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Will return an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::config("Daemon name cannot be empty"));
        }
        if self.name.contains(char::is_whitespace) {
            return Err(Error::config(
                "Daemon name cannot contain whitespace (it tags every log line)",
            ));
        }
        Ok(())
    }

    /// Create a builder for this configuration.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for creating configurations programmatically.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new configuration builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the daemon name.
    #[must_use]
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the log level.
    #[must_use]
    pub const fn log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the logging transport.
    #[must_use]
    pub const fn log_mode(mut self, mode: LogMode) -> Self {
        self.config.logging.mode = mode;
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Will return an error if the assembled configuration is invalid.
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.name, "daemon-osutil");
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.mode, LogMode::System);
    }

    #[test]
    fn test_config_builder() {
        let config = Config::builder()
            .name("test-daemon")
            .log_level(LogLevel::Debug)
            .log_mode(LogMode::Diagnostic)
            .build()
            .unwrap();

        assert_eq!(config.name, "test-daemon");
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.mode, LogMode::Diagnostic);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.name = String::new();
        assert!(config.validate().is_err());

        config.name = String::from("net daemon");
        assert!(config.validate().is_err());

        config.name = String::from("net-daemon");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(tracing::Level::from(LogLevel::Info), tracing::Level::INFO);
        assert_eq!(tracing::Level::from(LogLevel::Error), tracing::Level::ERROR);
    }
}
