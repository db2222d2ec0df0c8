//! Shared fixtures for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thinq_devices::{ApiError, ThinqTransport, TransportError, TransportResult};
use tokio::sync::Notify;

/// Holds control requests until released.
#[derive(Default)]
struct ControlGate {
    entered: Notify,
    release: Notify,
}

/// In-memory transport that records every control request.
#[derive(Default)]
pub struct MockTransport {
    devices: Vec<Value>,
    profiles: HashMap<String, Value>,
    statuses: Mutex<HashMap<String, Value>>,
    controls: Mutex<Vec<(String, Value)>>,
    fail_control: Option<ApiError>,
    gate: Option<ControlGate>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device(mut self, device_id: &str, device_type: &str, profile: Value, status: Value) -> Self {
        self.devices.push(json!({
            "deviceId": device_id,
            "deviceInfo": {"deviceType": device_type, "modelName": "TEST", "alias": device_id}
        }));
        self.profiles.insert(device_id.to_string(), profile);
        self.statuses
            .lock()
            .unwrap()
            .insert(device_id.to_string(), status);
        self
    }

    pub fn with_list_entry(mut self, entry: Value) -> Self {
        self.devices.push(entry);
        self
    }

    pub fn failing_control(mut self, error: ApiError) -> Self {
        self.fail_control = Some(error);
        self
    }

    /// Block every control request until [`release_control`](Self::release_control).
    pub fn with_control_gate(mut self) -> Self {
        self.gate = Some(ControlGate::default());
        self
    }

    /// Wait until a control request is pending on the gate.
    pub async fn control_entered(&self) {
        if let Some(gate) = &self.gate {
            gate.entered.notified().await;
        }
    }

    pub fn release_control(&self) {
        if let Some(gate) = &self.gate {
            gate.release.notify_one();
        }
    }

    pub fn set_status(&self, device_id: &str, status: Value) {
        self.statuses
            .lock()
            .unwrap()
            .insert(device_id.to_string(), status);
    }

    pub fn controls(&self) -> Vec<(String, Value)> {
        self.controls.lock().unwrap().clone()
    }

    pub fn last_control(&self) -> Option<Value> {
        self.controls.lock().unwrap().last().map(|(_, payload)| payload.clone())
    }
}

#[async_trait]
impl ThinqTransport for MockTransport {
    async fn get_device_list(&self, _timeout: Duration) -> TransportResult<Value> {
        Ok(Value::Array(self.devices.clone()))
    }

    async fn get_device_profile(&self, device_id: &str, _timeout: Duration) -> TransportResult<Value> {
        self.profiles
            .get(device_id)
            .cloned()
            .ok_or_else(|| TransportError::Api(ApiError::new("1222", "not connected")))
    }

    async fn get_device_status(&self, device_id: &str, _timeout: Duration) -> TransportResult<Value> {
        self.statuses
            .lock()
            .unwrap()
            .get(device_id)
            .cloned()
            .ok_or_else(|| TransportError::Api(ApiError::new("1222", "not connected")))
    }

    async fn post_device_control(
        &self,
        device_id: &str,
        payload: Value,
        _timeout: Duration,
    ) -> TransportResult<Value> {
        if let Some(gate) = &self.gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        if let Some(error) = &self.fail_control {
            return Err(TransportError::Api(error.clone()));
        }
        self.controls
            .lock()
            .unwrap()
            .push((device_id.to_string(), payload));
        Ok(json!({}))
    }
}

pub fn shared(transport: MockTransport) -> (Arc<MockTransport>, Arc<dyn ThinqTransport>) {
    let mock = Arc::new(transport);
    let dyn_transport: Arc<dyn ThinqTransport> = mock.clone();
    (mock, dyn_transport)
}

/// `{"type": "enum", "mode": [...], "value": {"r": .., "w": ..}}`
pub fn enum_spec(read: &[&str], write: &[&str]) -> Value {
    let mut mode = vec!["r"];
    if !write.is_empty() {
        mode.push("w");
    }
    let mut value = json!({"r": read});
    if !write.is_empty() {
        value["w"] = json!(write);
    }
    json!({"type": "enum", "mode": mode, "value": value})
}

pub fn range_spec(min: i64, max: i64, step: i64) -> Value {
    json!({
        "type": "range",
        "mode": ["r", "w"],
        "value": {
            "r": {"min": min, "max": max, "step": step},
            "w": {"min": min, "max": max, "step": step}
        }
    })
}

pub fn number_spec(writable: bool) -> Value {
    let mode = if writable { json!(["r", "w"]) } else { json!(["r"]) };
    json!({"type": "number", "mode": mode})
}

pub fn dryer_profile() -> Value {
    json!({
        "property": {
            "runState": {"currentState": enum_spec(&["POWER_OFF", "DRYING", "END"], &[])},
            "operation": {"dryerOperationMode": enum_spec(&["START", "STOP", "POWER_OFF"], &["START", "STOP", "POWER_OFF"])},
            "remoteControlEnable": {"remoteControlEnabled": {"type": "boolean", "mode": ["r"]}},
            "timer": {
                "remainHour": number_spec(false),
                "remainMinute": number_spec(false),
                "relativeHourToStop": range_spec(0, 19, 1),
                "relativeHourToStart": number_spec(true)
            }
        },
        "notification": {"push": ["DRYING_IS_COMPLETE"]},
        "error": ["DOOR_OPEN_ERROR", "TEMPERATURE_SENSOR_ERROR"]
    })
}

pub fn air_conditioner_profile() -> Value {
    json!({
        "property": {
            "airConJobMode": {"currentJobMode": enum_spec(&["COOL", "AIR_DRY"], &["COOL", "AIR_DRY"])},
            "operation": {"airConOperationMode": enum_spec(&["POWER_ON", "POWER_OFF"], &["POWER_ON", "POWER_OFF"])},
            "temperature": {
                "currentTemperature": number_spec(false),
                "targetTemperature": {
                    "type": "range",
                    "mode": ["r", "w"],
                    "value": {"w": {"min": 18, "max": 30, "step": 1}}
                },
                "unit": enum_spec(&["C", "F"], &[])
            },
            "twoSetTemperature": {
                "heatTargetTemperature": range_spec(10, 30, 5),
                "coolTargetTemperature": range_spec(10, 30, 5),
                "unit": "C"
            },
            "timer": {
                "relativeHourToStart": number_spec(true),
                "relativeMinuteToStart": number_spec(true),
                "relativeHourToStop": number_spec(true),
                "relativeMinuteToStop": number_spec(true)
            },
            "sleepTimer": {
                "relativeHourToStop": number_spec(true),
                "relativeMinuteToStop": number_spec(true)
            }
        },
        "error": ["FAN_MOTOR_ERROR"]
    })
}
