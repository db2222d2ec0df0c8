//! Connected devices.
//!
//! A [`ConnectDevice`] binds a resolved [`DeviceProfile`] to a transport and
//! owns the live state of one appliance. Multi-zone appliances own one
//! sub-device per discovered location; the role of each instance decides how
//! it reads status payloads and routes its commands:
//!
//! | Role | Status payload | Commands |
//! |------|----------------|----------|
//! | `Standalone` | applied as-is | posted as built |
//! | `Main` | applied as-is, then fanned out to every sub-device | posted as built |
//! | `Sub` | only the record tagged with its location | location injected |
//!
//! A device whose mapping is bound to one location (a washcombo unit) has no
//! parent but still takes the `Sub` role.

use crate::command::{build_multi_payload, build_payload, inject_location, CommandKind, Payload};
use crate::devices::DeviceType;
use crate::error::{DeviceError, DeviceResult};
use crate::hooks::{HookRegistry, PayloadContext};
use crate::location::LocationScope;
use crate::mapping::{property, Location};
use crate::profile::DeviceProfile;
use crate::setters::SetterRef;
use crate::state::{ApplyMode, DeviceState, StatusApplier};
use crate::transport::{ThinqTransport, DEFAULT_TIMEOUT};
use crate::capability::PropertySpec;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Identity of a device as reported by the device list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub device_id: String,
    pub device_type: String,
    #[serde(default)]
    pub model_name: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub reportable: bool,
    /// Shared by the units of a combined appliance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl DeviceInfo {
    pub fn new(device_id: impl Into<String>, device_type: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            device_type: device_type.into(),
            model_name: String::new(),
            alias: String::new(),
            reportable: false,
            group_id: None,
        }
    }

    pub fn with_model(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    pub fn reportable(mut self, reportable: bool) -> Self {
        self.reportable = reportable;
        self
    }

    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }
}

/// Position of a device in the main/sub hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceRole {
    Standalone,
    Main,
    Sub(LocationScope),
}

/// Access to the resolved capability model.
pub trait HasProfile {
    fn profile(&self) -> &DeviceProfile;

    fn property_map(&self) -> &BTreeMap<String, PropertySpec> {
        self.profile().property_map()
    }

    fn writable_properties(&self) -> Vec<&str> {
        self.profile().writable_properties()
    }
}

/// Devices split into per-location sub-devices.
pub trait HasSubDevices {
    fn sub_device(&self, location: Location) -> Option<&ConnectDevice>;

    fn sub_device_mut(&mut self, location: Location) -> Option<&mut ConnectDevice>;

    fn locations(&self) -> Vec<Location>;
}

/// Devices bound to one location of a parent device.
pub trait HasLocationScoping {
    fn scope(&self) -> Option<&LocationScope>;

    fn location_key(&self) -> Option<&str> {
        self.scope().map(|s| s.key.as_str())
    }
}

/// A validated control payload bound to the device it targets.
///
/// Building the request only reads the device, so callers holding a lock on
/// the device can release it before the request goes out.
#[must_use = "a control request does nothing until sent"]
pub struct ControlRequest {
    device_id: String,
    payload: Value,
    transport: Arc<dyn ThinqTransport>,
    timeout: Duration,
}

impl fmt::Debug for ControlRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlRequest")
            .field("device_id", &self.device_id)
            .field("payload", &self.payload)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ControlRequest {
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub async fn send(self) -> DeviceResult<Value> {
        debug!(device_id = %self.device_id, payload = %self.payload, "posting control");
        let response = self
            .transport
            .post_device_control(&self.device_id, self.payload, self.timeout)
            .await?;
        Ok(response)
    }
}

pub struct ConnectDevice {
    info: Arc<DeviceInfo>,
    profile: Arc<DeviceProfile>,
    transport: Arc<dyn ThinqTransport>,
    hooks: Arc<HookRegistry>,
    role: DeviceRole,
    state: DeviceState,
    sub_devices: BTreeMap<Location, ConnectDevice>,
    timeout: Duration,
}

impl fmt::Debug for ConnectDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectDevice")
            .field("info", &self.info)
            .field("kind", &self.profile.kind())
            .field("role", &self.role)
            .field("state", &self.state)
            .field("sub_devices", &self.sub_devices)
            .finish()
    }
}

impl ConnectDevice {
    /// Build a device from an already resolved profile.
    ///
    /// One sub-device is created for every location the profile discovered.
    pub fn new(
        info: DeviceInfo,
        profile: Arc<DeviceProfile>,
        transport: Arc<dyn ThinqTransport>,
        hooks: Arc<HookRegistry>,
    ) -> Self {
        let info = Arc::new(info);
        let mut sub_devices = BTreeMap::new();
        let mut role = match profile.mapping().scope() {
            Some(scope) => DeviceRole::Sub(scope.clone()),
            None => DeviceRole::Standalone,
        };

        if let Some(layout) = profile.mapping().locations() {
            role = DeviceRole::Main;
            for location in profile.locations() {
                let (Some(sub_profile), Some(key)) =
                    (profile.sub_profile(location), profile.location_key_of(location))
                else {
                    continue;
                };
                sub_devices.insert(
                    location,
                    ConnectDevice {
                        info: Arc::clone(&info),
                        profile: Arc::clone(sub_profile),
                        transport: Arc::clone(&transport),
                        hooks: Arc::clone(&hooks),
                        role: DeviceRole::Sub(layout.scope(key)),
                        state: DeviceState::new(),
                        sub_devices: BTreeMap::new(),
                        timeout: DEFAULT_TIMEOUT,
                    },
                );
            }
        }

        Self {
            info,
            profile,
            transport,
            hooks,
            role,
            state: DeviceState::new(),
            sub_devices,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Resolve a profile document with the table of the device's type.
    pub fn from_profile(
        info: DeviceInfo,
        document: &Value,
        transport: Arc<dyn ThinqTransport>,
    ) -> DeviceResult<Self> {
        let device_type: DeviceType = info.device_type.parse()?;
        let hooks = HookRegistry::builtin();
        let mapping = device_type.mapping(document)?;
        let profile = DeviceProfile::resolve(document, Arc::new(mapping), &hooks)?;

        debug!(
            device_id = %info.device_id,
            device_type = %device_type,
            properties = profile.property_map().len(),
            locations = profile.locations().count(),
            "resolved device profile"
        );
        Ok(Self::new(info, Arc::new(profile), transport, hooks))
    }

    /// Timeout passed to the transport, applied to sub-devices as well.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.set_timeout(timeout);
        self
    }

    fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
        for sub in self.sub_devices.values_mut() {
            sub.set_timeout(timeout);
        }
    }

    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    pub fn device_id(&self) -> &str {
        &self.info.device_id
    }

    pub fn role(&self) -> &DeviceRole {
        &self.role
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Apply a complete status snapshot.
    pub fn set_status(&mut self, status: &Value) {
        self.apply_status(status, ApplyMode::Full);
    }

    /// Apply a partial status delta.
    pub fn update_status(&mut self, status: &Value) {
        self.apply_status(status, ApplyMode::Incremental);
    }

    fn apply_status(&mut self, status: &Value, mode: ApplyMode) {
        let applier = StatusApplier::new(&self.profile, &self.hooks);
        match &self.role {
            DeviceRole::Sub(scope) => applier.apply_scoped(&mut self.state, status, mode, scope),
            DeviceRole::Standalone | DeviceRole::Main => {
                applier.apply(&mut self.state, status, mode)
            }
        }
        for sub in self.sub_devices.values_mut() {
            sub.apply_status(status, mode);
        }
    }

    /// Current value of a readable property; `error` is always readable.
    pub fn get_status(&self, property: &str) -> Option<&Value> {
        if property == property::ERROR || self.profile.check_readable(property) {
            self.state.value(property)
        } else {
            None
        }
    }

    /// First readable value of a fixed property, e.g. the oven type.
    pub fn fixed_value(&self, property: &str) -> Option<&Value> {
        self.profile
            .descriptor(property)
            .and_then(|d| d.read_values.as_ref())
            .and_then(|v| v.as_set())
            .and_then(|v| v.first())
    }

    /// `{hour, minute[, second]}` view over timer properties.
    pub fn time_of(&self, hour: &str, minute: &str, second: Option<&str>) -> Value {
        let mut view = Map::new();
        let mut put = |label: &str, property: &str| {
            view.insert(
                label.to_string(),
                self.get_status(property).cloned().unwrap_or(Value::Null),
            );
        };
        put("hour", hour);
        put("minute", minute);
        if let Some(second) = second {
            put("second", second);
        }
        Value::Object(view)
    }

    pub async fn do_attribute_command(
        &self,
        property: &str,
        value: impl Into<Value>,
    ) -> DeviceResult<Value> {
        self.do_command(CommandKind::Plain, property, value.into()).await
    }

    pub async fn do_enum_attribute_command(
        &self,
        property: &str,
        value: impl Into<Value>,
    ) -> DeviceResult<Value> {
        self.do_command(CommandKind::Enum, property, value.into()).await
    }

    pub async fn do_range_attribute_command(
        &self,
        property: &str,
        value: impl Into<Value>,
    ) -> DeviceResult<Value> {
        self.do_command(CommandKind::Range, property, value.into()).await
    }

    /// Write several writable properties in one request.
    pub async fn do_multi_attribute_command(
        &self,
        attributes: &[(&str, Value)],
    ) -> DeviceResult<Value> {
        let payload = build_multi_payload(&self.profile, CommandKind::Plain, attributes)?;
        self.post(self.route(payload)).await
    }

    /// Write several range properties in one request.
    pub async fn do_multi_range_attribute_command(
        &self,
        attributes: &[(&str, Value)],
    ) -> DeviceResult<Value> {
        let payload = build_multi_payload(&self.profile, CommandKind::Range, attributes)?;
        self.post(self.route(payload)).await
    }

    async fn do_command(&self, kind: CommandKind, property: &str, value: Value) -> DeviceResult<Value> {
        self.command_request(kind, property, value)?.send().await
    }

    fn command_request(&self, kind: CommandKind, property: &str, value: Value) -> DeviceResult<ControlRequest> {
        let payload = build_payload(&self.profile, kind, property, &value)?;

        let payload = match self.hooks.payload_builder(self.profile.kind(), property) {
            Some(builder) => {
                let ctx = PayloadContext {
                    profile: &self.profile,
                    state: &self.state,
                    location: self.location_key(),
                    property,
                    value: &value,
                };
                builder(&ctx, payload)?
            }
            None => self.route(payload),
        };
        Ok(self.request(payload))
    }

    fn route(&self, payload: Payload) -> Payload {
        match &self.role {
            DeviceRole::Sub(scope) => inject_location(payload, &scope.key, scope.style),
            DeviceRole::Standalone | DeviceRole::Main => payload,
        }
    }

    fn request(&self, payload: Payload) -> ControlRequest {
        ControlRequest {
            device_id: self.info.device_id.clone(),
            payload: Value::Object(payload),
            transport: Arc::clone(&self.transport),
            timeout: self.timeout,
        }
    }

    async fn post(&self, payload: Payload) -> DeviceResult<Value> {
        self.request(payload).send().await
    }

    /// Name of the setter that writes `property`: the property itself or its group.
    pub fn setter_for<'a>(&'a self, property: &'a str) -> Option<&'a str> {
        match self.profile.mapping().setters().resolve(property)? {
            SetterRef::Single(_) => Some(property),
            SetterRef::Group(group) => Some(group.name.as_str()),
        }
    }

    /// Write one property through its registered setter.
    pub async fn set_property(&self, property: &str, value: impl Into<Value>) -> DeviceResult<Value> {
        self.property_request(property, value)?.send().await
    }

    /// Validate a setter write and build its request without sending it.
    pub fn property_request(
        &self,
        property: &str,
        value: impl Into<Value>,
    ) -> DeviceResult<ControlRequest> {
        let value = value.into();
        match self.profile.mapping().setters().resolve(property) {
            Some(SetterRef::Single(setter)) if setter.companions.is_empty() => {
                self.command_request(setter.kind, property, value)
            }
            Some(SetterRef::Single(setter)) => {
                let mut attributes = vec![(property, value)];
                for companion in &setter.companions {
                    let current = match self.get_status(companion) {
                        Some(current) if !current.is_null() => current.clone(),
                        _ => return Err(DeviceError::validation(companion, "current value unknown")),
                    };
                    attributes.push((companion.as_str(), current));
                }
                let payload = build_multi_payload(&self.profile, setter.kind, &attributes)?;
                Ok(self.request(self.route(payload)))
            }
            Some(SetterRef::Group(group)) => Err(DeviceError::NotSupported(format!(
                "{} is written through {}",
                property, group.name
            ))),
            None => Err(DeviceError::NotSupported(property.to_string())),
        }
    }

    /// Write a setter group, one value per member in declaration order.
    pub async fn set_group(&self, name: &str, values: &[Value]) -> DeviceResult<Value> {
        let group = self
            .profile
            .mapping()
            .setters()
            .group_named(name)
            .ok_or_else(|| DeviceError::NotSupported(name.to_string()))?;
        if values.len() != group.members.len() {
            return Err(DeviceError::validation(
                name,
                format!("expected {} values, got {}", group.members.len(), values.len()),
            ));
        }

        let attributes: Vec<(&str, Value)> = group
            .members
            .iter()
            .zip(values)
            .filter(|(member, value)| {
                !(group.omit_when_zero.as_deref() == Some(member.as_str())
                    && value.as_f64() == Some(0.0))
            })
            .map(|(member, value)| (member.as_str(), value.clone()))
            .collect();

        let payload = build_multi_payload(&self.profile, CommandKind::Plain, &attributes)?;
        self.post(self.route(payload)).await
    }

    /// Write a property of one location through the sub-device's setter.
    pub async fn set_location_property(
        &self,
        location: Location,
        property: &str,
        value: impl Into<Value>,
    ) -> DeviceResult<Value> {
        let sub = self
            .sub_devices
            .get(&location)
            .ok_or_else(|| DeviceError::UnknownLocation(location.to_string()))?;
        sub.set_property(property, value).await
    }
}

impl HasProfile for ConnectDevice {
    fn profile(&self) -> &DeviceProfile {
        &self.profile
    }
}

impl HasSubDevices for ConnectDevice {
    fn sub_device(&self, location: Location) -> Option<&ConnectDevice> {
        self.sub_devices.get(&location)
    }

    fn sub_device_mut(&mut self, location: Location) -> Option<&mut ConnectDevice> {
        self.sub_devices.get_mut(&location)
    }

    fn locations(&self) -> Vec<Location> {
        self.sub_devices.keys().copied().collect()
    }
}

impl HasLocationScoping for ConnectDevice {
    fn scope(&self) -> Option<&LocationScope> {
        match &self.role {
            DeviceRole::Sub(scope) => Some(scope),
            DeviceRole::Standalone | DeviceRole::Main => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_info_from_list_entry() {
        let info: DeviceInfo = serde_json::from_value(serde_json::json!({
            "deviceId": "abc",
            "deviceType": "DEVICE_WASHER",
            "modelName": "F_V8",
            "alias": "Laundry",
            "reportable": true
        }))
        .unwrap();

        assert_eq!(info.device_id, "abc");
        assert_eq!(info.device_type, "DEVICE_WASHER");
        assert!(info.reportable);
    }

    #[test]
    fn test_device_info_defaults() {
        let info: DeviceInfo = serde_json::from_value(serde_json::json!({
            "deviceId": "abc",
            "deviceType": "DEVICE_DRYER"
        }))
        .unwrap();
        assert_eq!(info, DeviceInfo::new("abc", "DEVICE_DRYER"));
    }
}
