//! Transport collaborator interface.
//!
//! The engine never talks to the network directly. Everything goes through a
//! [`ThinqTransport`] handle that is shared by a device and all of its
//! sub-devices. The REST implementation lives in [`crate::adapters::http`];
//! tests plug in recording mocks.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Timeout applied to every outbound call unless a device overrides it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Vendor error codes and their symbolic names.
const ERROR_CODES: &[(&str, &str)] = &[
    ("0000", "UNKNOWN_ERROR"),
    ("1000", "BAD_REQUEST"),
    ("1101", "MISSING_PARAMETERS"),
    ("1102", "UNACCEPTABLE_PARAMETERS"),
    ("1103", "INVALID_TOKEN"),
    ("1104", "INVALID_MESSAGE_ID"),
    ("1201", "NOT_REGISTERED_ADMIN"),
    ("1202", "NOT_REGISTERED_USER"),
    ("1203", "NOT_REGISTERED_SERVICE"),
    ("1204", "NOT_SUBSCRIBED_EVENT"),
    ("1205", "NOT_REGISTERED_DEVICE"),
    ("1206", "NOT_SUBSCRIBED_PUSH"),
    ("1207", "ALREADY_SUBSCRIBED_PUSH"),
    ("1208", "NOT_REGISTERED_SERVICE_BY_ADMIN"),
    ("1209", "NOT_REGISTERED_USER_IN_SERVICE"),
    ("1210", "NOT_REGISTERED_DEVICE_IN_SERVICE"),
    ("1211", "NOT_REGISTERED_DEVICE_BY_USER"),
    ("1212", "NOT_OWNED_DEVICE"),
    ("1213", "NOT_REGISTERED_DEVICE"),
    ("1214", "NOT_SUBSCRIBABLE_DEVICE"),
    ("1216", "INCORRECT_HEADER"),
    ("1217", "ALREADY_DEVICE_DELETED"),
    ("1218", "INVALID_TOKEN_AGAIN"),
    ("1219", "NOT_SUPPORTED_MODEL"),
    ("1220", "NOT_SUPPORTED_FEATURE"),
    ("1221", "NOT_SUPPORTED_PRODUCT"),
    ("1222", "NOT_CONNECTED_DEVICE"),
    ("1223", "INVALID_STATUS_DEVICE"),
    ("1224", "INVALID_DEVICE_ID"),
    ("1225", "DUPLICATE_DEVICE_ID"),
    ("1301", "INVALID_SERVICE_KEY"),
    ("1302", "NOT_FOUND_TOKEN"),
    ("1303", "NOT_FOUND_USER"),
    ("1304", "NOT_ACCEPTABLE_TERMS"),
    ("1305", "NOT_ALLOWED_API"),
    ("1306", "EXCEEDED_API_CALLS"),
    ("1307", "NOT_SUPPORTED_COUNTRY"),
    ("1308", "NO_CONTROL_AUTHORITY"),
    ("1309", "NOT_ALLOWED_API_AGAIN"),
    ("1310", "NOT_SUPPORTED_DOMAIN"),
    ("1311", "BAD_REQUEST_FORMAT"),
    ("1312", "EXCEEDED_NUMBER_OF_EVENT_SUBSCRIPTION"),
    ("2000", "INTERNAL_SERVER_ERROR"),
    ("2101", "NOT_SUPPORTED_MODEL_AGAIN"),
    ("2201", "NOT_PROVIDED_FEATURE"),
    ("2202", "NOT_SUPPORTED_PRODUCT_AGAIN"),
    ("2203", "NOT_EXISTENT_MODEL_JSON"),
    ("2205", "INVALID_DEVICE_STATUS"),
    ("2207", "INVALID_COMMAND_ERROR"),
    ("2208", "FAIL_DEVICE_CONTROL"),
    ("2209", "DEVICE_RESPONSE_DELAY"),
    ("2210", "RETRY_REQUEST"),
    ("2212", "SYNCING"),
    ("2213", "RETRY_AFTER_DELETING_DEVICE"),
    ("2214", "FAIL_REQUEST"),
    ("2301", "COMMAND_NOT_SUPPORTED_IN_REMOTE_OFF"),
    ("2302", "COMMAND_NOT_SUPPORTED_IN_STATE"),
    ("2303", "COMMAND_NOT_SUPPORTED_IN_ERROR"),
    ("2304", "COMMAND_NOT_SUPPORTED_IN_POWER_OFF"),
    ("2305", "COMMAND_NOT_SUPPORTED_IN_MODE"),
];

/// Frequently matched codes.
pub mod codes {
    pub const UNKNOWN_ERROR: &str = "0000";
    pub const INVALID_TOKEN: &str = "1103";
    pub const NOT_CONNECTED_DEVICE: &str = "1222";
    pub const EXCEEDED_API_CALLS: &str = "1306";
    pub const DEVICE_RESPONSE_DELAY: &str = "2209";
    pub const COMMAND_NOT_SUPPORTED_IN_REMOTE_OFF: &str = "2301";
    pub const COMMAND_NOT_SUPPORTED_IN_MODE: &str = "2305";
}

/// Structured error returned by the vendor API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    /// Request headers that produced the error.
    pub headers: HashMap<String, String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            headers: HashMap::new(),
        }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Symbolic name of the code, `UNKNOWN_ERROR` when the code is not in the table.
    pub fn error_name(&self) -> &'static str {
        ERROR_CODES
            .iter()
            .find(|(code, _)| *code == self.code)
            .map(|(_, name)| *name)
            .unwrap_or("UNKNOWN_ERROR")
    }

    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.error_name(), self.code, self.message)
    }
}

/// Transport-level failures.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("ThinQ API error: {0}")]
    Api(ApiError),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TransportError {
    /// Vendor error code when the failure came from the API itself.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api(err) => Some(err.code.as_str()),
            _ => None,
        }
    }
}

pub type TransportResult<T> = Result<T, TransportError>;

/// Request/response access to the appliance cloud.
///
/// Every call carries its own timeout; implementations surface an elapsed
/// timeout as [`TransportError::Timeout`] and never retry.
#[async_trait]
pub trait ThinqTransport: Send + Sync {
    async fn get_device_list(&self, timeout: Duration) -> TransportResult<Value>;

    async fn get_device_profile(&self, device_id: &str, timeout: Duration)
        -> TransportResult<Value>;

    async fn get_device_status(&self, device_id: &str, timeout: Duration) -> TransportResult<Value>;

    async fn post_device_control(
        &self,
        device_id: &str,
        payload: Value,
        timeout: Duration,
    ) -> TransportResult<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_name_lookup() {
        let err = ApiError::new("1222", "device offline");
        assert_eq!(err.error_name(), "NOT_CONNECTED_DEVICE");
        assert!(err.is(codes::NOT_CONNECTED_DEVICE));
        assert_eq!(
            err.to_string(),
            "NOT_CONNECTED_DEVICE (1222) - device offline"
        );
    }

    #[test]
    fn test_unknown_code_maps_to_unknown_error() {
        let err = ApiError::new("9999", "??");
        assert_eq!(err.error_name(), "UNKNOWN_ERROR");
    }

    #[test]
    fn test_api_code_accessor() {
        let err = TransportError::Api(ApiError::new("2305", "mode"));
        assert_eq!(err.api_code(), Some("2305"));
        assert_eq!(TransportError::Timeout(DEFAULT_TIMEOUT).api_code(), None);
    }
}
