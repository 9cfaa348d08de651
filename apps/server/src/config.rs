//! Service configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded first when present.
//! Optional settings fall back to defaults; a value that is set but does
//! not parse is an error rather than silently defaulted.

use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use stockdesk_agent::DEFAULT_MODEL;
use stockdesk_market_data::provider::alpha_vantage::DEFAULT_BASE_URL as ALPHA_DEFAULT_BASE_URL;
use stockdesk_search::{elasticsearch::DEFAULT_HOST as ELASTICSEARCH_DEFAULT_HOST, DEFAULT_INDEX};
use thiserror::Error;

pub const QUOTES_DEFAULT_ADDR: &str = "0.0.0.0:8000";
pub const AGENT_DEFAULT_ADDR: &str = "0.0.0.0:8001";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Reads a variable by name. `std::env::var` in production, a map in tests.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Trimmed value, with empty strings treated as unset.
fn var(lookup: Lookup, name: &str) -> Option<String> {
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(lookup: Lookup, name: &'static str) -> Result<String, ConfigError> {
    var(lookup, name).ok_or(ConfigError::MissingVar(name))
}

fn parse_or<T>(lookup: Lookup, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match var(lookup, name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}

fn parse_bool_or(lookup: Lookup, name: &'static str, default: bool) -> Result<bool, ConfigError> {
    match var(lookup, name) {
        None => Ok(default),
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid {
                name,
                value,
                reason: "expected true or false".to_string(),
            }),
        },
    }
}

fn secs(lookup: Lookup, name: &'static str, default: u64) -> Result<Duration, ConfigError> {
    parse_or(lookup, name, default).map(Duration::from_secs)
}

/// HTTP settings shared by both services.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_lookup(lookup: Lookup, default_addr: &str) -> Result<Self, ConfigError> {
        let listen_addr: SocketAddr = match var(lookup, "STOCKDESK_LISTEN_ADDR") {
            Some(addr) => addr.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    name: "STOCKDESK_LISTEN_ADDR",
                    reason: e.to_string(),
                    value: addr,
                }
            })?,
            None => default_addr.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    name: "STOCKDESK_LISTEN_ADDR",
                    value: default_addr.to_string(),
                    reason: e.to_string(),
                }
            })?,
        };

        let cors_allow = var(lookup, "STOCKDESK_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let timeout_ms: u64 = parse_or(lookup, "STOCKDESK_REQUEST_TIMEOUT_MS", 30000)?;

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

/// Quote and search service settings.
pub struct QuoteConfig {
    pub server: Config,
    pub alpha_api_key: String,
    pub alpha_base_url: String,
    pub cache_ttl: Duration,
    pub upstream_timeout: Duration,
    pub elasticsearch_host: String,
    pub stocks_index: String,
    pub search_timeout: Duration,
}

impl QuoteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        Ok(Self {
            server: Config::from_lookup(lookup, QUOTES_DEFAULT_ADDR)?,
            alpha_api_key: required(lookup, "ALPHA_API_KEY")?,
            alpha_base_url: var(lookup, "ALPHA_BASE_URL")
                .unwrap_or_else(|| ALPHA_DEFAULT_BASE_URL.to_string()),
            cache_ttl: secs(lookup, "STOCKDESK_QUOTE_CACHE_TTL_SECS", 300)?,
            upstream_timeout: secs(lookup, "STOCKDESK_UPSTREAM_TIMEOUT_SECS", 30)?,
            elasticsearch_host: var(lookup, "ELASTICSEARCH_HOST")
                .unwrap_or_else(|| ELASTICSEARCH_DEFAULT_HOST.to_string()),
            stocks_index: var(lookup, "STOCKDESK_STOCKS_INDEX")
                .unwrap_or_else(|| DEFAULT_INDEX.to_string()),
            search_timeout: secs(lookup, "STOCKDESK_SEARCH_TIMEOUT_SECS", 5)?,
        })
    }
}

/// Agent service settings.
pub struct AgentConfig {
    pub server: Config,
    pub google_api_key: String,
    pub model: String,
    pub google_search: bool,
}

impl AgentConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        Ok(Self {
            server: Config::from_lookup(lookup, AGENT_DEFAULT_ADDR)?,
            google_api_key: required(lookup, "GOOGLE_API_KEY")?,
            model: var(lookup, "STOCKDESK_AGENT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            google_search: parse_bool_or(lookup, "STOCKDESK_AGENT_GOOGLE_SEARCH", true)?,
        })
    }
}

/// Stock indexer settings.
#[derive(Debug, Clone)]
pub struct IndexerConfig {
    pub elasticsearch_host: String,
    pub stocks_index: String,
    pub stocks_file: PathBuf,
    pub request_timeout: Duration,
}

impl IndexerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup(lookup: Lookup) -> Result<Self, ConfigError> {
        Ok(Self {
            elasticsearch_host: var(lookup, "ELASTICSEARCH_HOST")
                .unwrap_or_else(|| ELASTICSEARCH_DEFAULT_HOST.to_string()),
            stocks_index: var(lookup, "STOCKDESK_STOCKS_INDEX")
                .unwrap_or_else(|| DEFAULT_INDEX.to_string()),
            stocks_file: var(lookup, "STOCKDESK_STOCKS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("stocks.json")),
            request_timeout: Duration::from_secs(30),
        })
    }
}
