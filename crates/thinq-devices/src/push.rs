//! Push notifications delivered by the broker.

use crate::transport::{TransportError, TransportResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Push types sent by the cloud.
pub mod push_type {
    /// `report` is a partial status payload.
    pub const DEVICE_STATUS: &str = "DEVICE_STATUS";
    /// `pushCode` names a notification.
    pub const DEVICE_PUSH: &str = "DEVICE_PUSH";
    pub const DEVICE_REGISTERED: &str = "DEVICE_REGISTERED";
    pub const DEVICE_UNREGISTERED: &str = "DEVICE_UNREGISTERED";
    pub const DEVICE_ALIAS_CHANGED: &str = "DEVICE_ALIAS_CHANGED";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushMessage {
    pub device_id: String,
    pub push_type: String,
    #[serde(default)]
    pub report: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_code: Option<String>,
}

impl PushMessage {
    pub fn status(device_id: impl Into<String>, report: Value) -> Self {
        Self {
            device_id: device_id.into(),
            push_type: push_type::DEVICE_STATUS.to_string(),
            report,
            push_code: None,
        }
    }

    pub fn from_slice(payload: &[u8]) -> TransportResult<Self> {
        serde_json::from_slice(payload)
            .map_err(|e| TransportError::Decode(format!("invalid push message: {}", e)))
    }

    pub fn is_status(&self) -> bool {
        self.push_type == push_type::DEVICE_STATUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_camel_case() {
        let message = PushMessage::from_slice(
            br#"{"deviceId":"d1","pushType":"DEVICE_STATUS","report":{"operation":{"airConOperationMode":"POWER_OFF"}}}"#,
        )
        .unwrap();

        assert_eq!(message.device_id, "d1");
        assert!(message.is_status());
        assert_eq!(message.report["operation"]["airConOperationMode"], json!("POWER_OFF"));
        assert!(message.push_code.is_none());
    }

    #[test]
    fn test_decode_failure() {
        let err = PushMessage::from_slice(b"not json").unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }
}
