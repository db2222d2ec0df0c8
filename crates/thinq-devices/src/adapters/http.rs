//! REST client for the appliance cloud.
//!
//! Every request carries the common header set:
//!
//! | Header | Value |
//! |--------|-------|
//! | `Authorization` | `Bearer {access_token}` |
//! | `x-country` | country code |
//! | `x-message-id` | unpadded URL-safe base64 of a random UUID |
//! | `x-client-id` | client id |
//! | `x-api-key` | API key |
//! | `x-service-phase` | service phase, `OP` by default |
//!
//! Successful responses are unwrapped from their `response` field; failed
//! ones are decoded into an [`ApiError`].

use crate::config::ApiConfig;
use crate::transport::{ApiError, ThinqTransport, TransportError, TransportResult};
use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use reqwest::{Client, Method};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// Subscription length requested for event notifications.
const EVENT_EXPIRE_HOURS: u64 = 4464;

pub struct ThinqApi {
    config: ApiConfig,
    client: Client,
}

impl ThinqApi {
    pub fn new(config: ApiConfig) -> Self {
        let client = Client::builder()
            .use_rustls_tls()
            .build()
            .unwrap_or_default();
        Self { config, client }
    }

    /// Reuse an existing client, e.g. one shared with other adapters.
    pub fn with_client(config: ApiConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.config.base_url(), endpoint)
    }

    fn headers(&self, extra: &[(&str, &str)]) -> HashMap<String, String> {
        let mut headers = HashMap::from([
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.config.access_token),
            ),
            ("x-country".to_string(), self.config.country_code.clone()),
            ("x-message-id".to_string(), message_id()),
            ("x-client-id".to_string(), self.config.client_id.clone()),
            ("x-api-key".to_string(), self.config.api_key.clone()),
            ("x-service-phase".to_string(), self.config.phase.clone()),
        ]);
        for (key, value) in extra {
            headers.insert(key.to_string(), value.to_string());
        }
        headers
    }

    /// Send one request and unwrap its `response` field.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        extra_headers: &[(&str, &str)],
        timeout: Duration,
    ) -> TransportResult<Value> {
        let url = self.url(endpoint);
        let headers = self.headers(extra_headers);
        debug!(method = %method, url = %url, "ThinQ API request");

        if self.config.mock_response {
            return Ok(json!({
                "message": "Mock Response",
                "body": body.unwrap_or(Value::Null),
            }));
        }

        let mut request = self.client.request(method, &url).timeout(timeout);
        for (key, value) in &headers {
            request = request.header(key, value);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| request_error(e, timeout))?;
        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| TransportError::Decode(format!("invalid response body: {}", e)))?;

        if status.is_success() {
            return Ok(payload.get("response").cloned().unwrap_or(Value::Null));
        }

        let error = payload.get("error");
        let field = |name: &str, default: &str| {
            error
                .and_then(|e| e.get(name))
                .and_then(Value::as_str)
                .unwrap_or(default)
                .to_string()
        };
        let api_error = ApiError::new(
            field("code", "unknown error code"),
            field("message", "unknown error message"),
        )
        .with_headers(headers);
        debug!(status = %status, error = %api_error, "ThinQ API error");
        Err(TransportError::Api(api_error))
    }

    pub async fn post_push_subscribe(&self, device_id: &str, timeout: Duration) -> TransportResult<Value> {
        let endpoint = format!("push/{}/subscribe", device_id);
        self.request(Method::POST, &endpoint, None, &[], timeout).await
    }

    pub async fn delete_push_subscribe(&self, device_id: &str, timeout: Duration) -> TransportResult<Value> {
        let endpoint = format!("push/{}/unsubscribe", device_id);
        self.request(Method::DELETE, &endpoint, None, &[], timeout).await
    }

    pub async fn post_event_subscribe(&self, device_id: &str, timeout: Duration) -> TransportResult<Value> {
        let endpoint = format!("event/{}/subscribe", device_id);
        let body = json!({"expire": {"unit": "HOUR", "timer": EVENT_EXPIRE_HOURS}});
        self.request(Method::POST, &endpoint, Some(body), &[], timeout).await
    }

    pub async fn delete_event_subscribe(&self, device_id: &str, timeout: Duration) -> TransportResult<Value> {
        let endpoint = format!("event/{}/unsubscribe", device_id);
        self.request(Method::DELETE, &endpoint, None, &[], timeout).await
    }

    /// Broker and API domains for the account.
    pub async fn get_route(&self, timeout: Duration) -> TransportResult<Value> {
        self.request(Method::GET, "route", None, &[], timeout).await
    }
}

#[async_trait]
impl ThinqTransport for ThinqApi {
    async fn get_device_list(&self, timeout: Duration) -> TransportResult<Value> {
        self.request(Method::GET, "devices", None, &[], timeout).await
    }

    async fn get_device_profile(&self, device_id: &str, timeout: Duration) -> TransportResult<Value> {
        let endpoint = format!("devices/{}/profile", device_id);
        self.request(Method::GET, &endpoint, None, &[], timeout).await
    }

    async fn get_device_status(&self, device_id: &str, timeout: Duration) -> TransportResult<Value> {
        let endpoint = format!("devices/{}/state", device_id);
        self.request(Method::GET, &endpoint, None, &[], timeout).await
    }

    async fn post_device_control(
        &self,
        device_id: &str,
        payload: Value,
        timeout: Duration,
    ) -> TransportResult<Value> {
        let endpoint = format!("devices/{}/control", device_id);
        self.request(
            Method::POST,
            &endpoint,
            Some(payload),
            &[("x-conditional-control", "true")],
            timeout,
        )
        .await
    }
}

/// Unpadded URL-safe base64 of a random UUID.
pub fn message_id() -> String {
    URL_SAFE_NO_PAD.encode(Uuid::new_v4().as_bytes())
}

fn request_error(err: reqwest::Error, timeout: Duration) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(timeout)
    } else {
        TransportError::Connection(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_api() -> ThinqApi {
        ThinqApi::new(ApiConfig::new("token", "KR", "client", "KIC", "key").with_mock_response(true))
    }

    #[test]
    fn test_message_id_shape() {
        let id = message_id();
        assert_eq!(id.len(), 22);
        assert!(!id.contains('=') && !id.contains('+') && !id.contains('/'));
        assert_ne!(id, message_id());
    }

    #[test]
    fn test_common_headers() {
        let api = mock_api();
        let headers = api.headers(&[("x-conditional-control", "true")]);

        assert_eq!(headers["Authorization"], "Bearer token");
        assert_eq!(headers["x-country"], "KR");
        assert_eq!(headers["x-service-phase"], "OP");
        assert_eq!(headers["x-conditional-control"], "true");
        assert_eq!(api.url("devices"), "https://api-kic.lgthinq.com/devices");
    }

    #[tokio::test]
    async fn test_mock_response_echoes_body() {
        let api = mock_api();
        let response = api
            .post_device_control("dev-1", json!({"operation": {"power": "ON"}}), Duration::from_secs(1))
            .await
            .unwrap();

        assert_eq!(
            response,
            json!({"message": "Mock Response", "body": {"operation": {"power": "ON"}}})
        );
    }
}
