// config.rs
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::{AppError, Result};

/// Which sample data set, if any, is indexed at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleDataMode {
    None,
    #[default]
    Basic,
    PerformanceSmall,
    PerformanceLarge,
}

impl SampleDataMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleDataMode::None => "NONE",
            SampleDataMode::Basic => "BASIC",
            SampleDataMode::PerformanceSmall => "PERFORMANCE_SMALL",
            SampleDataMode::PerformanceLarge => "PERFORMANCE_LARGE",
        }
    }
}

impl FromStr for SampleDataMode {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_uppercase().replace('-', "_").as_str() {
            "NONE" => Ok(SampleDataMode::None),
            "BASIC" => Ok(SampleDataMode::Basic),
            "PERFORMANCE_SMALL" => Ok(SampleDataMode::PerformanceSmall),
            "PERFORMANCE_LARGE" => Ok(SampleDataMode::PerformanceLarge),
            other => Err(AppError::configuration(format!(
                "Unknown sample data mode '{}'. Must be one of: NONE, BASIC, PERFORMANCE_SMALL, PERFORMANCE_LARGE",
                other
            ))),
        }
    }
}

impl std::fmt::Display for SampleDataMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub elasticsearch_url: String,
    pub elasticsearch_username: Option<String>,
    pub elasticsearch_password: Option<String>,
    pub elasticsearch_timeout: Duration,
    pub host: String,
    pub port: u16,
    pub sample_data_mode: SampleDataMode,
    pub sample_data_records_per_type: usize,
    pub sample_data_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            elasticsearch_url: "http://localhost:9200".to_string(),
            elasticsearch_username: None,
            elasticsearch_password: None,
            elasticsearch_timeout: Duration::from_secs(30),
            host: "0.0.0.0".to_string(),
            port: 8080,
            sample_data_mode: SampleDataMode::Basic,
            sample_data_records_per_type: 10_000,
            sample_data_delay: Duration::from_secs(10),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let elasticsearch_url = lookup("ELASTICSEARCH_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.elasticsearch_url);

        let config = AppConfig {
            elasticsearch_url,
            elasticsearch_username: lookup("ELASTICSEARCH_USERNAME").filter(|v| !v.is_empty()),
            elasticsearch_password: lookup("ELASTICSEARCH_PASSWORD").filter(|v| !v.is_empty()),
            elasticsearch_timeout: match lookup("ELASTICSEARCH_TIMEOUT_SECS") {
                Some(raw) => Duration::from_secs(parse_number("ELASTICSEARCH_TIMEOUT_SECS", &raw)?),
                None => defaults.elasticsearch_timeout,
            },
            host: lookup("HOST").unwrap_or(defaults.host),
            port: match lookup("PORT") {
                Some(raw) => parse_number("PORT", &raw)?,
                None => defaults.port,
            },
            sample_data_mode: match lookup("SAMPLE_DATA_MODE") {
                Some(raw) => raw.parse()?,
                None => defaults.sample_data_mode,
            },
            sample_data_records_per_type: match lookup("SAMPLE_DATA_RECORDS_PER_TYPE") {
                Some(raw) => parse_number::<usize>("SAMPLE_DATA_RECORDS_PER_TYPE", &raw)?.max(1),
                None => defaults.sample_data_records_per_type,
            },
            sample_data_delay: match lookup("SAMPLE_DATA_DELAY_SECS") {
                Some(raw) => Duration::from_secs(parse_number("SAMPLE_DATA_DELAY_SECS", &raw)?),
                None => defaults.sample_data_delay,
            },
        };

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn get_config_info(&self) -> serde_json::Value {
        serde_json::json!({
            "elasticsearch_url": self.elasticsearch_url,
            "elasticsearch_auth": self.elasticsearch_username.is_some(),
            "elasticsearch_timeout_secs": self.elasticsearch_timeout.as_secs(),
            "sample_data_mode": self.sample_data_mode.as_str(),
            "sample_data_records_per_type": self.sample_data_records_per_type,
            "sample_data_delay_secs": self.sample_data_delay.as_secs(),
            "host": self.host,
            "port": self.port,
        })
    }
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::configuration(format!("{} must be a number, got '{}'", key, raw)))
}
