use crate::config::cli::{validate_assignments, Assignment};
use crate::config::{
    endpoint_url, LogFormat, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS,
};
use crate::core::ConfigProvider;
use crate::utils::error::{FalconeError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub endpoints: Option<EndpointsConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
            endpoints: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Full URLs that replace the `base_url`-derived ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointsConfig {
    pub planets: Option<String>,
    pub vehicles: Option<String>,
    pub token: Option<String>,
    pub find: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

impl TomlConfig {
    /// Load a config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FalconeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FalconeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expand `${VAR}` references; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FalconeError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn endpoint(&self, pick: impl Fn(&EndpointsConfig) -> Option<&String>, path: &str) -> String {
        self.api
            .endpoints
            .as_ref()
            .and_then(pick)
            .cloned()
            .unwrap_or_else(|| endpoint_url(&self.api.base_url, path))
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format)
            .unwrap_or_default()
    }

    /// `debug` or `trace` in `[logging].level` turns on verbose output.
    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .is_some_and(|level| matches!(level, "debug" | "trace"))
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("api.endpoints.planets", &self.planets_url())?;
        validate_url("api.endpoints.vehicles", &self.vehicles_url())?;
        validate_url("api.endpoints.token", &self.token_url())?;
        validate_url("api.endpoints.find", &self.find_url())?;
        validate_range(
            "api.timeout_seconds",
            self.timeout_seconds(),
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        validate_assignments("assignments", &self.assignments)?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn planets_url(&self) -> String {
        self.endpoint(|e| e.planets.as_ref(), "planets")
    }

    fn vehicles_url(&self) -> String {
        self.endpoint(|e| e.vehicles.as_ref(), "vehicles")
    }

    fn token_url(&self) -> String {
        self.endpoint(|e| e.token.as_ref(), "token")
    }

    fn find_url(&self) -> String {
        self.endpoint(|e| e.find.as_ref(), "find")
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
