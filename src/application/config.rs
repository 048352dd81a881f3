use crate::constants::{BASE_URL, DEFAULT_API_KEY};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Authentication credentials for the MSP API
pub struct Credentials {
    /// API key sent as `Authorization: ApiKey <key>`
    pub api_key: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the MSP API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the MSP REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests (None = transport default)
    pub timeout: Option<u64>,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// Loads a `.env` file when present, then reads `MSP_API_KEY`,
    /// `MSP_REST_BASE_URL` and `MSP_REST_TIMEOUT`.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default("MSP_API_KEY", String::from(DEFAULT_API_KEY));
        if api_key == DEFAULT_API_KEY {
            error!("MSP_API_KEY not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { api_key },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("MSP_REST_BASE_URL", String::from(BASE_URL)),
                timeout: get_env_or_none("MSP_REST_TIMEOUT"),
            },
        }
    }

    /// Creates a configuration for the given API key with default REST settings
    ///
    /// Does not read the environment.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                api_key: api_key.into(),
            },
            rest_api: RestApiConfig::default(),
        }
    }

    /// Overrides the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Sets a request timeout in seconds
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = Some(timeout);
        self
    }
}
