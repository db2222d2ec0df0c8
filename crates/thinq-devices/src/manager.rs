//! Registry of the account's devices.
//!
//! The manager discovers devices through the transport, keeps them keyed by
//! device id and routes status refreshes and push messages to them.

use crate::device::{ConnectDevice, DeviceInfo};
use crate::devices::DeviceType;
use crate::error::{DeviceError, DeviceResult};
use crate::push::PushMessage;
use crate::transport::{ThinqTransport, DEFAULT_TIMEOUT};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, warn};

struct ManagedDevice {
    device: ConnectDevice,
    last_updated: DateTime<Utc>,
}

impl ManagedDevice {
    fn new(device: ConnectDevice) -> Self {
        Self {
            device,
            last_updated: Utc::now(),
        }
    }
}

pub struct DeviceManager {
    transport: Arc<dyn ThinqTransport>,
    devices: Arc<RwLock<HashMap<String, ManagedDevice>>>,
    timeout: Duration,
}

impl DeviceManager {
    pub fn new(transport: Arc<dyn ThinqTransport>) -> Self {
        Self {
            transport,
            devices: Arc::new(RwLock::new(HashMap::new())),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch the device list and register every supported device.
    ///
    /// Returns the ids registered by this call. Unsupported types and devices
    /// whose profile or status cannot be loaded are skipped.
    pub async fn discover(&self) -> DeviceResult<Vec<String>> {
        let list = self.transport.get_device_list(self.timeout).await?;
        let Some(entries) = list.as_array() else {
            return Err(DeviceError::Configuration(
                "device list is not an array".to_string(),
            ));
        };

        let mut added = Vec::new();
        for entry in entries {
            let Some(info) = device_info(entry) else {
                warn!(entry = %entry, "Skipping malformed device list entry");
                continue;
            };
            if let Err(e) = info.device_type.parse::<DeviceType>() {
                warn!(device_id = %info.device_id, "Skipping device: {}", e);
                continue;
            }

            let device_id = info.device_id.clone();
            match self.load(info).await {
                Ok(device) => {
                    self.add_device(device).await;
                    added.push(device_id);
                }
                Err(e) => warn!(device_id = %device_id, "Failed to load device: {}", e),
            }
        }

        info!(count = added.len(), "Discovered devices");
        Ok(added)
    }

    async fn load(&self, info: DeviceInfo) -> DeviceResult<ConnectDevice> {
        let profile = self
            .transport
            .get_device_profile(&info.device_id, self.timeout)
            .await?;
        let mut device = ConnectDevice::from_profile(info, &profile, Arc::clone(&self.transport))?
            .with_timeout(self.timeout);

        let status = self
            .transport
            .get_device_status(device.device_id(), self.timeout)
            .await?;
        device.set_status(&status);
        Ok(device)
    }

    /// Register a device built elsewhere, replacing one with the same id.
    pub async fn add_device(&self, device: ConnectDevice) {
        let device_id = device.device_id().to_string();
        debug!(device_id = %device_id, "Registering device");
        self.devices
            .write()
            .await
            .insert(device_id, ManagedDevice::new(device));
    }

    pub async fn remove_device(&self, device_id: &str) -> Option<ConnectDevice> {
        self.devices
            .write()
            .await
            .remove(device_id)
            .map(|managed| managed.device)
    }

    /// Fetch and apply a complete status snapshot.
    pub async fn refresh(&self, device_id: &str) -> DeviceResult<()> {
        if !self.devices.read().await.contains_key(device_id) {
            return Err(DeviceError::UnknownDevice(device_id.to_string()));
        }

        let status = self
            .transport
            .get_device_status(device_id, self.timeout)
            .await?;

        let mut devices = self.devices.write().await;
        let managed = devices
            .get_mut(device_id)
            .ok_or_else(|| DeviceError::UnknownDevice(device_id.to_string()))?;
        managed.device.set_status(&status);
        managed.last_updated = Utc::now();
        Ok(())
    }

    /// Apply a push message. Returns true when a device state changed.
    pub async fn handle_push(&self, message: &PushMessage) -> bool {
        if !message.is_status() {
            debug!(
                device_id = %message.device_id,
                push_type = %message.push_type,
                push_code = ?message.push_code,
                "Ignoring push message"
            );
            return false;
        }

        let mut devices = self.devices.write().await;
        let Some(managed) = devices.get_mut(&message.device_id) else {
            debug!(device_id = %message.device_id, "Push for unknown device");
            return false;
        };
        managed.device.update_status(&message.report);
        managed.last_updated = Utc::now();
        true
    }

    /// Apply push messages until the channel closes.
    pub async fn consume(&self, mut rx: broadcast::Receiver<PushMessage>) {
        loop {
            match rx.recv().await {
                Ok(message) => {
                    self.handle_push(&message).await;
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Push consumer lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }

    /// Run `f` against a device under the read lock.
    pub async fn with_device<R>(
        &self,
        device_id: &str,
        f: impl FnOnce(&ConnectDevice) -> R,
    ) -> Option<R> {
        self.devices
            .read()
            .await
            .get(device_id)
            .map(|managed| f(&managed.device))
    }

    /// Write a property through the device's setter.
    ///
    /// The registry lock is released before the control request is sent.
    pub async fn set_property(
        &self,
        device_id: &str,
        property: &str,
        value: impl Into<Value>,
    ) -> DeviceResult<Value> {
        let request = {
            let devices = self.devices.read().await;
            let managed = devices
                .get(device_id)
                .ok_or_else(|| DeviceError::UnknownDevice(device_id.to_string()))?;
            managed.device.property_request(property, value)?
        };
        request.send().await
    }

    pub async fn last_updated(&self, device_id: &str) -> Option<DateTime<Utc>> {
        self.devices
            .read()
            .await
            .get(device_id)
            .map(|managed| managed.last_updated)
    }

    /// Sorted ids of the registered devices.
    pub async fn device_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.devices.read().await.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub async fn len(&self) -> usize {
        self.devices.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.devices.read().await.is_empty()
    }
}

/// `{"deviceId": .., "deviceInfo": {..}}` list entry.
fn device_info(entry: &Value) -> Option<DeviceInfo> {
    let mut fields = entry.get("deviceInfo")?.as_object()?.clone();
    fields.insert("deviceId".to_string(), entry.get("deviceId")?.clone());
    serde_json::from_value(Value::Object(fields)).ok()
}
