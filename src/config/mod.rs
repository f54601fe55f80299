pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://findfalcone.geektrust.com";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Joins a base URL and an endpoint path without doubling the slash.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::*;
    use crate::config::cli::{validate_assignments, Assignment};
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_range, validate_url, Validate};
    use clap::Parser;
    use std::time::Duration;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "falcone-finder")]
    #[command(about = "Send search parties to four planets and ask where Falcone is hiding")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        pub base_url: String,

        #[arg(long, help = "TOML config file; its assignments apply when --assign is absent")]
        pub config: Option<String>,

        #[arg(
            long,
            value_delimiter = ',',
            help = "Destination as planet:vehicle, up to four"
        )]
        pub assign: Vec<Assignment>,

        #[arg(long, help = "Print planet and vehicle choices and exit")]
        pub list: bool,

        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
        pub timeout_seconds: u64,

        #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
        pub log_format: LogFormat,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// Flags given with a non-default value that a `--config` file replaces.
        pub fn flags_overridden_by_file(&self) -> Vec<&'static str> {
            let mut flags = Vec::new();
            if self.config.is_none() {
                return flags;
            }
            if self.base_url != DEFAULT_BASE_URL {
                flags.push("--base-url");
            }
            if self.timeout_seconds != DEFAULT_TIMEOUT_SECONDS {
                flags.push("--timeout-seconds");
            }
            flags
        }
    }

    impl ConfigProvider for CliConfig {
        fn planets_url(&self) -> String {
            endpoint_url(&self.base_url, "planets")
        }

        fn vehicles_url(&self) -> String {
            endpoint_url(&self.base_url, "vehicles")
        }

        fn token_url(&self) -> String {
            endpoint_url(&self.base_url, "token")
        }

        fn find_url(&self) -> String {
            endpoint_url(&self.base_url, "find")
        }

        fn request_timeout(&self) -> Duration {
            Duration::from_secs(self.timeout_seconds)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_url("base_url", &self.base_url)?;
            validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
            validate_assignments("assign", &self.assign)?;
            Ok(())
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joins_cleanly() {
        assert_eq!(endpoint_url("http://a/", "/token"), "http://a/token");
        assert_eq!(endpoint_url("http://a", "find"), "http://a/find");
    }
}
