//! Error types for profile resolution, command building and transport calls.

use crate::transport::TransportError;
use thiserror::Error;

/// Result type for device operations.
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Errors raised by the device layer.
///
/// `Configuration` and `Validation` are raised synchronously before any network
/// call is made. `Transport` wraps whatever the transport collaborator returned
/// and is never retried here.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The profile document is malformed or a mandatory section is missing.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A command value violates the property's enum, range or writability constraints.
    #[error("Not support {property} : {reason}")]
    Validation { property: String, reason: String },

    /// No writable property or setter exists for the requested control.
    #[error("Unsupported control: {0}")]
    NotSupported(String),

    /// A location-scoped call named a location without a sub-device.
    #[error("Invalid location : {0}")]
    UnknownLocation(String),

    /// No managed device has this id.
    #[error("Unknown device: {0}")]
    UnknownDevice(String),

    /// The device type has no mapping table.
    #[error("Unsupported device type: {0}")]
    UnsupportedDeviceType(String),

    /// Failure reported by the transport collaborator.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl DeviceError {
    pub(crate) fn validation(property: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            property: property.to_string(),
            reason: reason.into(),
        }
    }

    /// True for errors the caller can fix by changing its input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::NotSupported(_) | Self::UnknownLocation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = DeviceError::validation("power", "MAYBE");
        assert_eq!(err.to_string(), "Not support power : MAYBE");
        assert!(err.is_validation());
    }

    #[test]
    fn test_transport_is_not_validation() {
        let err = DeviceError::from(TransportError::Connection("reset".into()));
        assert!(!err.is_validation());
        assert!(err.to_string().contains("reset"));
    }
}
