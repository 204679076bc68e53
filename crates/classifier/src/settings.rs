//! Runtime configuration
//!
//! Loaded once at cold start from defaults overridden by `CORROSION_*`
//! environment variables, then shared read-only by every invocation.

use config::{Config, Environment};
use image_preprocess::{PreprocessConfig, DEFAULT_IMAGE_SIZE};
use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::filter::{EnvFilter, ParseError};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CORROSION";

/// Endpoint used when none is configured
pub const DEFAULT_ENDPOINT_NAME: &str = "corrosion-endpoint";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
    #[error("Invalid log_level: {0}")]
    LogLevel(#[from] ParseError),
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    Text,
}

/// Function configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Inference endpoint name
    pub endpoint_name: String,
    /// Model input edge length (pixels)
    pub image_size: u32,
    /// AWS region override; SDK default chain when unset
    pub region: Option<String>,
    /// Custom S3 endpoint (MinIO, localstack); forces path-style addressing
    pub s3_endpoint_url: Option<String>,
    /// `EnvFilter` directives, e.g. `info` or `classifier=debug,info`
    pub log_level: String,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("endpoint_name", DEFAULT_ENDPOINT_NAME)?
            .set_default("image_size", i64::from(DEFAULT_IMAGE_SIZE))?
            .set_default("log_level", "info")?
            .set_default("log_format", "json")?
            .add_source(env.try_parsing(true))
            .build()?;

        let app: AppConfig = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint_name.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint_name must not be empty"));
        }
        if self.image_size == 0 {
            return Err(ConfigError::Invalid("image_size must be positive"));
        }
        EnvFilter::try_new(&self.log_level)?;
        Ok(())
    }

    /// Square preprocessing target
    pub fn preprocess_config(&self) -> PreprocessConfig {
        PreprocessConfig::square(self.image_size)
    }
}
