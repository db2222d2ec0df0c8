//! Runtime status attributes and the engine that applies status payloads.
//!
//! Two application modes exist:
//!
//! | Mode | Resources visited | Missing sub-key |
//! |------|-------------------|-----------------|
//! | [`ApplyMode::Full`] | every mapped resource | property set to `null` |
//! | [`ApplyMode::Incremental`] | mapped resources present in the payload | property left untouched |

use crate::hooks::{HookRegistry, StatusContext};
use crate::location::{LocationScope, LocationTag};
use crate::mapping::{property, ResourceMapping};
use crate::profile::DeviceProfile;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::trace;

/// How a status payload is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// Complete snapshot: every declared property is written, `null` when absent.
    Full,
    /// Partial delta: only sub-keys present in the payload are written.
    Incremental,
}

/// Current value of every property of one device or sub-device.
///
/// A property that was cleared by a full snapshot holds `Value::Null`; a
/// property that was never written is absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceState {
    values: HashMap<String, Value>,
    hints: HashMap<String, Value>,
}

impl DeviceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value, including explicit `null`s.
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.values.get(property)
    }

    /// Stored value, `None` for both unset and `null`.
    pub fn value(&self, property: &str) -> Option<&Value> {
        self.values.get(property).filter(|v| !v.is_null())
    }

    pub fn set_internal(&mut self, property: &str, value: Value) {
        self.values.insert(property.to_string(), value);
    }

    /// Keep a value that is not a property, such as the last reported unit.
    pub fn remember(&mut self, key: &str, value: Value) {
        self.hints.insert(key.to_string(), value);
    }

    pub fn recall(&self, key: &str) -> Option<&Value> {
        self.hints.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn snapshot(&self) -> Map<String, Value> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Maps status payloads onto a [`DeviceState`] through a profile's mapping table.
pub struct StatusApplier<'a> {
    profile: &'a DeviceProfile,
    hooks: &'a HookRegistry,
}

impl<'a> StatusApplier<'a> {
    pub fn new(profile: &'a DeviceProfile, hooks: &'a HookRegistry) -> Self {
        Self { profile, hooks }
    }

    /// Apply an object-shaped payload. Any other shape is ignored.
    pub fn apply(&self, state: &mut DeviceState, status: &Value, mode: ApplyMode) {
        let Some(fields) = status.as_object() else {
            return;
        };

        if self.profile.error().is_some() {
            state.set_internal(
                property::ERROR,
                fields.get(property::ERROR).cloned().unwrap_or(Value::Null),
            );
        }

        let mapping = self.profile.mapping();
        match mode {
            ApplyMode::Full => {
                for resource in mapping.resources() {
                    self.apply_resource(state, resource, fields.get(&resource.key), mode);
                }
            }
            ApplyMode::Incremental => {
                for (key, fragment) in fields {
                    if let Some(resource) = mapping.resource(key) {
                        self.apply_resource(state, resource, Some(fragment), mode);
                    }
                }
            }
        }
    }

    /// Apply only the part of a payload that belongs to `scope`.
    ///
    /// Finding no matching record leaves the state untouched.
    pub fn apply_scoped(
        &self,
        state: &mut DeviceState,
        status: &Value,
        mode: ApplyMode,
        scope: &LocationScope,
    ) {
        if scope.tag == LocationTag::Section {
            match status.get(&scope.key).filter(|section| section.is_object()) {
                Some(section) => self.apply(state, section, mode),
                None => trace!(location = %scope.key, "no matching section in status payload"),
            }
            return;
        }

        match status {
            Value::Array(records) => {
                if let Some(record) = records.iter().find(|r| scope.matches(r)) {
                    self.apply(state, record, mode);
                }
            }
            Value::Object(_) if scope.accepts_unscoped => {
                // Single-unit payloads carry no tag; tagged ones must be ours.
                if scope.tag.name_of(status).is_none_or(|name| name == scope.key) {
                    self.apply(state, status, mode);
                }
            }
            Value::Object(fields) => {
                for resource in self.profile.mapping().custom_resources() {
                    let Some(records) = fields.get(&resource.key).and_then(Value::as_array) else {
                        continue;
                    };
                    if let Some(record) = records.iter().find(|r| scope.matches(r)) {
                        let mut wrapped = Map::new();
                        wrapped.insert(resource.key.clone(), record.clone());
                        self.apply(state, &Value::Object(wrapped), mode);
                        return;
                    }
                }
                trace!(location = %scope.key, "no matching location in status payload");
            }
            _ => {}
        }
    }

    fn apply_resource(
        &self,
        state: &mut DeviceState,
        resource: &ResourceMapping,
        fragment: Option<&Value>,
        mode: ApplyMode,
    ) {
        for (sub_key, prop) in &resource.properties {
            self.apply_property(state, resource, fragment, sub_key, prop, mode);
        }
    }

    fn apply_property(
        &self,
        state: &mut DeviceState,
        resource: &ResourceMapping,
        fragment: Option<&Value>,
        sub_key: &str,
        prop: &str,
        mode: ApplyMode,
    ) {
        if prop == property::LOCATION_NAME {
            return;
        }

        let Some(fragment) = fragment.filter(|f| !f.is_null()) else {
            state.set_internal(prop, Value::Null);
            return;
        };

        if resource.custom {
            if let Some(handler) = self
                .hooks
                .status_handler(self.profile.mapping().kind(), &resource.key)
            {
                let mut ctx = StatusContext {
                    resource,
                    sub_key,
                    property: prop,
                    mode,
                    state: &mut *state,
                };
                if handler(&mut ctx, fragment) {
                    return;
                }
            }
        }

        let fields = fragment.as_object();
        let value = fields
            .and_then(|f| f.get(sub_key))
            .cloned()
            .unwrap_or(Value::Null);

        if mode == ApplyMode::Incremental {
            if fields.is_some_and(|f| f.contains_key(sub_key)) {
                state.set_internal(prop, value);
            }
            return;
        }
        state.set_internal(prop, value);
    }
}
