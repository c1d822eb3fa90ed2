use crate::core::NormalizationPolicy;
use crate::utils::error::{CheckError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub palindrome: NormalizationPolicy,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: LogFormat,
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string, after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CheckError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${NAME}` with the value of the environment variable `NAME`.
    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CheckError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}
