//! Configuration management for the METAR decoder
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::MetarError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetarConfig {
    /// Weather service configuration
    #[serde(default)]
    pub service: ServiceConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default application settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Weather service configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL for METAR requests, the station code is appended
    #[serde(default = "default_service_base_url")]
    pub base_url: String,
    /// Value of the `options` query parameter
    #[serde(default = "default_service_options")]
    pub options: String,
    /// Bearer token for the weather service (optional)
    pub api_token: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_service_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of retries for transient failures
    #[serde(default = "default_service_max_retries")]
    pub max_retries: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Default application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Prefix given to three-letter airport codes
    #[serde(default = "default_icao_prefix")]
    pub icao_prefix: String,
}

// Default value functions
fn default_service_base_url() -> String {
    "https://avwx.rest/api/metar/".to_string()
}

fn default_service_options() -> String {
    "info".to_string()
}

fn default_service_timeout() -> u32 {
    30
}

fn default_service_max_retries() -> u32 {
    3
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_icao_prefix() -> String {
    crate::icao::DEFAULT_PREFIX.to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_service_base_url(),
            options: default_service_options(),
            api_token: None,
            timeout_seconds: default_service_timeout(),
            max_retries: default_service_max_retries(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            icao_prefix: default_icao_prefix(),
        }
    }
}

impl MetarConfig {
    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides such as METAR_SERVICE__API_TOKEN
        builder = builder.add_source(
            Environment::with_prefix("METAR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: MetarConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("metar-decoder").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.service.base_url.is_empty() {
            self.service.base_url = default_service_base_url();
        }
        if self.service.options.is_empty() {
            self.service.options = default_service_options();
        }
        if self.service.timeout_seconds == 0 {
            self.service.timeout_seconds = default_service_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.defaults.icao_prefix.is_empty() {
            self.defaults.icao_prefix = default_icao_prefix();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_token()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the service token
    pub fn validate_api_token(&self) -> Result<()> {
        if let Some(token) = &self.service.api_token {
            if token.trim().is_empty() {
                return Err(MetarError::config(
                    "Service API token cannot be empty if provided. Either remove it or provide a valid token.",
                )
                .into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.service.timeout_seconds > 300 {
            return Err(MetarError::config("Service timeout cannot exceed 300 seconds").into());
        }

        if self.service.max_retries > 10 {
            return Err(MetarError::config("Service max retries cannot exceed 10").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(MetarError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(MetarError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.service.base_url.starts_with("http://")
            && !self.service.base_url.starts_with("https://")
        {
            return Err(
                MetarError::config("Service base URL must be a valid HTTP or HTTPS URL").into(),
            );
        }

        let prefix = &self.defaults.icao_prefix;
        if prefix.len() != 1 || !prefix.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(MetarError::config(format!(
                "Invalid ICAO prefix '{prefix}'. Must be a single uppercase letter"
            ))
            .into());
        }

        Ok(())
    }
}
