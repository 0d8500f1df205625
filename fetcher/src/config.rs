//! Environment-driven settings for the API client and the CLI.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru";
pub const DEFAULT_AREA: u32 = 113;
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_USER_AGENT: &str = "hh-fetcher/0.1";

/// Settings for talking to the listing API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub area: u32,
    pub per_page: u32,
    pub user_agent: String,
    /// `None` leaves requests without a timeout.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            area: DEFAULT_AREA,
            per_page: DEFAULT_PER_PAGE,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ApiConfig {
    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn vacancies_url(&self) -> String {
        format!("{}/vacancies", self.base())
    }

    /// The id becomes a single path segment; reserved characters are escaped.
    pub fn employer_url(&self, employer_id: &str) -> String {
        format!(
            "{}/employers/{}",
            self.base(),
            utf8_percent_encode(employer_id, NON_ALPHANUMERIC)
        )
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Top-level configuration for the fetcher binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub output_dir: PathBuf,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url = env::var("HH_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let area = parse_var("HH_AREA", DEFAULT_AREA)?;
        let per_page = parse_var("HH_PER_PAGE", DEFAULT_PER_PAGE)?;
        if !(1..=100).contains(&per_page) {
            return Err(ConfigError::PerPageOutOfRange(per_page));
        }

        let timeout = match env::var("HH_TIMEOUT_SECS") {
            Ok(raw) => Some(Duration::from_secs(raw.trim().parse().map_err(|_| {
                ConfigError::InvalidNumber {
                    name: "HH_TIMEOUT_SECS",
                    value: raw.clone(),
                }
            })?)),
            Err(_) => None,
        };

        let user_agent =
            env::var("HH_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
        let output_dir = env::var("HH_OUTPUT_DIR").unwrap_or_else(|_| "data".to_string());
        let log_level = env::var("HH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            api: ApiConfig {
                base_url,
                area,
                per_page,
                user_agent,
                timeout,
            },
            output_dir: PathBuf::from(output_dir),
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_var(name: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value: raw }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a non-negative integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
    #[error("HH_PER_PAGE must be between 1 and 100, got {0}")]
    PerPageOutOfRange(u32),
}
