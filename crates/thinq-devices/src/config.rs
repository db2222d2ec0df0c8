//! Cloud API and push channel configuration.

use crate::error::{DeviceError, DeviceResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default values.
pub mod defaults {
    /// Service phase sent as `x-service-phase`.
    pub const PHASE: &str = "OP";
    pub const TIMEOUT_SECS: u64 = 15;
    pub const MQTT_KEEP_ALIVE_SECS: u64 = 6;
    pub const MQTT_PORT: u16 = 8883;
}

/// Environment variables read by [`ApiConfig::from_env`].
pub mod env_vars {
    use super::defaults;

    pub const ACCESS_TOKEN: &str = "THINQ_ACCESS_TOKEN";
    pub const COUNTRY: &str = "THINQ_COUNTRY";
    pub const CLIENT_ID: &str = "THINQ_CLIENT_ID";
    pub const REGION: &str = "THINQ_REGION";
    pub const API_KEY: &str = "THINQ_API_KEY";
    pub const TIMEOUT_SECS: &str = "THINQ_TIMEOUT_SECS";
    pub const MOCK_RESPONSE: &str = "THINQ_MOCK_RESPONSE";

    /// Value of a mandatory variable, `None` when unset or empty.
    pub fn get(name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.trim().is_empty())
    }

    pub fn timeout_secs() -> u64 {
        std::env::var(TIMEOUT_SECS)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults::TIMEOUT_SECS)
    }

    pub fn mock_response() -> bool {
        std::env::var(MOCK_RESPONSE)
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false)
    }
}

fn default_phase() -> String {
    defaults::PHASE.to_string()
}

fn default_timeout_secs() -> u64 {
    defaults::TIMEOUT_SECS
}

fn default_keep_alive_secs() -> u64 {
    defaults::MQTT_KEEP_ALIVE_SECS
}

fn default_port() -> u16 {
    defaults::MQTT_PORT
}

/// REST API credentials and routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub access_token: String,
    /// ISO 3166 alpha-2 country code, sent as `x-country`.
    pub country_code: String,
    pub client_id: String,
    /// API region, e.g. `KIC`, `AIC` or `EIC`.
    pub region: String,
    pub api_key: String,
    #[serde(default = "default_phase")]
    pub phase: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Echo request bodies instead of calling the API.
    #[serde(default)]
    pub mock_response: bool,
}

impl ApiConfig {
    pub fn new(
        access_token: impl Into<String>,
        country_code: impl Into<String>,
        client_id: impl Into<String>,
        region: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            country_code: country_code.into(),
            client_id: client_id.into(),
            region: region.into(),
            api_key: api_key.into(),
            phase: default_phase(),
            timeout_secs: defaults::TIMEOUT_SECS,
            mock_response: false,
        }
    }

    /// Load from `THINQ_*` environment variables.
    pub fn from_env() -> DeviceResult<Self> {
        let required = |name: &str| {
            env_vars::get(name).ok_or_else(|| {
                DeviceError::Configuration(format!("environment variable {} is not set", name))
            })
        };

        Ok(Self {
            access_token: required(env_vars::ACCESS_TOKEN)?,
            country_code: required(env_vars::COUNTRY)?,
            client_id: required(env_vars::CLIENT_ID)?,
            region: required(env_vars::REGION)?,
            api_key: required(env_vars::API_KEY)?,
            phase: default_phase(),
            timeout_secs: env_vars::timeout_secs(),
            mock_response: env_vars::mock_response(),
        })
    }

    pub fn with_mock_response(mut self, mock: bool) -> Self {
        self.mock_response = mock;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `https://api-{region}.lgthinq.com`
    pub fn base_url(&self) -> String {
        format!("https://api-{}.lgthinq.com", self.region.to_lowercase())
    }
}

/// Push broker connection with client-certificate authentication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MqttConfig {
    /// Broker host name.
    pub server: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub client_id: String,
    pub topic: String,
    pub root_ca_pem: String,
    pub client_cert_pem: String,
    pub client_key_pem: String,
    #[serde(default = "default_keep_alive_secs")]
    pub keep_alive_secs: u64,
}

impl MqttConfig {
    /// Accepts `mqtts://host:port`, `host:port` or a bare host.
    pub fn with_server_url(mut self, url: &str) -> Self {
        let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
        match without_scheme.rsplit_once(':') {
            Some((host, port)) => {
                self.server = host.to_string();
                self.port = port.parse().unwrap_or(defaults::MQTT_PORT);
            }
            None => self.server = without_scheme.to_string(),
        }
        self
    }

    pub fn keep_alive(&self) -> Duration {
        Duration::from_secs(self.keep_alive_secs)
    }
}
