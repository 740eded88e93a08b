use eyre::{eyre, Result, WrapErr};
use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use gravity_rs::codec::FIXED_FIELD_LEN;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(eyre!("LOG_FORMAT must be 'text' or 'json', got '{}'", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Tool configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Bridge deployment domain separator (GRAVITY_ID)
    pub gravity_id: Option<String>,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    /// Loads .env file if present, then reads from environment
    pub fn load() -> Result<Self> {
        Self::load_from_file(".env")
    }

    /// Load from a specific .env file path
    pub fn load_from_file(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            dotenvy::from_filename(path)
                .wrap_err_with(|| format!("Failed to load .env file from {}", path))?;
        }
        Self::load_from_env()
    }

    /// Load configuration from environment variables
    fn load_from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from a variable lookup (environment in production, a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        let config = Config {
            gravity_id: lookup("GRAVITY_ID"),
            log_format,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if let Some(gravity_id) = &self.gravity_id {
            validate_gravity_id(gravity_id)?;
        }
        Ok(())
    }

    /// Gravity ID bytes, with a command-line override taking precedence
    pub fn resolve_gravity_id(&self, flag: Option<&str>) -> Result<Vec<u8>> {
        let gravity_id = flag
            .map(str::to_string)
            .or_else(|| self.gravity_id.clone())
            .ok_or_else(|| {
                eyre!("GRAVITY_ID environment variable or --gravity-id flag is required")
            })?;

        validate_gravity_id(&gravity_id)?;
        Ok(gravity_id.into_bytes())
    }
}

fn validate_gravity_id(gravity_id: &str) -> Result<()> {
    if gravity_id.is_empty() {
        return Err(eyre!("gravity_id cannot be empty"));
    }
    if gravity_id.len() > FIXED_FIELD_LEN {
        return Err(eyre!(
            "gravity_id must be at most {} bytes, got {}",
            FIXED_FIELD_LEN,
            gravity_id.len()
        ));
    }
    Ok(())
}
