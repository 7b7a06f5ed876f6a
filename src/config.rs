//! # Configuration Management
//!
//! Centralized configuration for the packet codec crate.
//!
//! The codecs themselves take no configuration. These settings drive the
//! pieces around them: which wire format [`MessageCodec`](crate::MessageCodec)
//! uses, how large a single inbound message may be, and how logging is set up.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - TOML strings via `from_toml()`
//! - Environment variables via `from_env()`
//! - Direct instantiation with defaults

use crate::core::codec::CodecKind;
use crate::error::{ProtocolError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Max allowed size of one inbound transport message (e.g. 16 MB)
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 16 * 1024 * 1024;

/// Environment variable selecting the wire format
pub const ENV_CODEC_KIND: &str = "PACKET_CODEC_KIND";
/// Environment variable overriding the inbound message limit
pub const ENV_MAX_MESSAGE_SIZE: &str = "PACKET_CODEC_MAX_MESSAGE_SIZE";
/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "PACKET_CODEC_LOG_LEVEL";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CodecConfig {
    /// Wire format settings
    #[serde(default)]
    pub codec: CodecSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CodecConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    ///
    /// Unlike unset variables, a variable that is set but unparsable is an error.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(kind) = std::env::var(ENV_CODEC_KIND) {
            config.codec.kind = kind.parse()?;
        }

        if let Ok(size) = std::env::var(ENV_MAX_MESSAGE_SIZE) {
            config.codec.max_message_size = size.trim().parse::<usize>().map_err(|e| {
                ProtocolError::ConfigError(format!("Invalid {ENV_MAX_MESSAGE_SIZE}: {e}"))
            })?;
        }

        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            config.logging.log_level = level.trim().parse::<Level>().map_err(|_| {
                ProtocolError::ConfigError(format!("Invalid {ENV_LOG_LEVEL}: {level}"))
            })?;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.codec.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProtocolError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Wire format settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CodecSettings {
    /// Wire format used by the message adapter
    pub kind: CodecKind,

    /// Largest inbound message the message adapter accepts, in bytes
    pub max_message_size: usize,
}

impl Default for CodecSettings {
    fn default() -> Self {
        Self {
            kind: CodecKind::default(),
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }
}

impl CodecSettings {
    /// Validate codec settings
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_message_size == 0 {
            errors.push("Max message size cannot be 0".to_string());
        } else if self.max_message_size > 100 * 1024 * 1024 {
            errors.push(format!(
                "Max message size too large: {} bytes (maximum recommended: 100 MB)",
                self.max_message_size
            ));
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("packet-codec"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        level.as_str().to_ascii_lowercase().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
