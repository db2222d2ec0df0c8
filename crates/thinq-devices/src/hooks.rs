//! Registry of per-device-type hooks.
//!
//! Resources whose JSON shape does not fit the generic sub-key table are
//! resolved by hooks registered under `(mapping kind, resource key)`:
//!
//! - an **extractor** builds the descriptors of a custom resource while the
//!   profile is resolved;
//! - a **status handler** maps a custom resource fragment onto state and
//!   returns `true` when it handled the property;
//! - a **payload builder**, registered under `(mapping kind, property)`,
//!   reshapes a validated control payload.

use crate::capability::CapabilityDescriptor;
use crate::command::Payload;
use crate::error::DeviceResult;
use crate::mapping::ResourceMapping;
use crate::profile::DeviceProfile;
use crate::state::{ApplyMode, DeviceState};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Input of an extractor.
pub struct ExtractContext<'a> {
    pub resource: &'a ResourceMapping,
    /// Vendor location key when resolving a sub-profile.
    pub location: Option<&'a str>,
}

/// Output of an extractor.
#[derive(Debug, Default, Clone)]
pub struct Extraction {
    pub readable: Vec<String>,
    pub writable: Vec<String>,
    pub descriptors: Vec<(String, CapabilityDescriptor)>,
}

impl Extraction {
    pub fn record(&mut self, property: &str, descriptor: CapabilityDescriptor) {
        if descriptor.readable {
            self.readable.push(property.to_string());
        }
        if descriptor.writable {
            self.writable.push(property.to_string());
        }
        self.descriptors.push((property.to_string(), descriptor));
    }
}

/// Input of a status handler.
pub struct StatusContext<'a> {
    pub resource: &'a ResourceMapping,
    pub sub_key: &'a str,
    pub property: &'a str,
    pub mode: ApplyMode,
    pub state: &'a mut DeviceState,
}

/// Input of a payload builder.
pub struct PayloadContext<'a> {
    pub profile: &'a DeviceProfile,
    pub state: &'a DeviceState,
    /// Vendor location key of the issuing sub-device.
    pub location: Option<&'a str>,
    pub property: &'a str,
    pub value: &'a Value,
}

pub type ExtractHook = Arc<dyn Fn(&ExtractContext<'_>, &Value) -> Extraction + Send + Sync>;
pub type StatusHook = Arc<dyn Fn(&mut StatusContext<'_>, &Value) -> bool + Send + Sync>;
pub type PayloadHook =
    Arc<dyn Fn(&PayloadContext<'_>, Payload) -> DeviceResult<Payload> + Send + Sync>;

type HookKey = (String, String);

fn key(kind: &str, name: &str) -> HookKey {
    (kind.to_string(), name.to_string())
}

#[derive(Clone, Default)]
pub struct HookRegistry {
    extractors: HashMap<HookKey, ExtractHook>,
    status_handlers: HashMap<HookKey, StatusHook>,
    payload_builders: HashMap<HookKey, PayloadHook>,
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("extractors", &self.extractors.len())
            .field("status_handlers", &self.status_handlers.len())
            .field("payload_builders", &self.payload_builders.len())
            .finish()
    }
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hooks of every built-in device table.
    pub fn builtin() -> Arc<Self> {
        static BUILTIN: OnceLock<Arc<HookRegistry>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                let mut registry = HookRegistry::new();
                crate::devices::register_hooks(&mut registry);
                Arc::new(registry)
            })
            .clone()
    }

    pub fn register_extractor<F>(&mut self, kind: &str, resource_key: &str, hook: F)
    where
        F: Fn(&ExtractContext<'_>, &Value) -> Extraction + Send + Sync + 'static,
    {
        self.extractors.insert(key(kind, resource_key), Arc::new(hook));
    }

    pub fn register_status_handler<F>(&mut self, kind: &str, resource_key: &str, hook: F)
    where
        F: Fn(&mut StatusContext<'_>, &Value) -> bool + Send + Sync + 'static,
    {
        self.status_handlers
            .insert(key(kind, resource_key), Arc::new(hook));
    }

    pub fn register_payload_builder<F>(&mut self, kind: &str, property: &str, hook: F)
    where
        F: Fn(&PayloadContext<'_>, Payload) -> DeviceResult<Payload> + Send + Sync + 'static,
    {
        self.payload_builders
            .insert(key(kind, property), Arc::new(hook));
    }

    pub fn with_extractor<F>(mut self, kind: &str, resource_key: &str, hook: F) -> Self
    where
        F: Fn(&ExtractContext<'_>, &Value) -> Extraction + Send + Sync + 'static,
    {
        self.register_extractor(kind, resource_key, hook);
        self
    }

    pub fn with_status_handler<F>(mut self, kind: &str, resource_key: &str, hook: F) -> Self
    where
        F: Fn(&mut StatusContext<'_>, &Value) -> bool + Send + Sync + 'static,
    {
        self.register_status_handler(kind, resource_key, hook);
        self
    }

    pub fn with_payload_builder<F>(mut self, kind: &str, property: &str, hook: F) -> Self
    where
        F: Fn(&PayloadContext<'_>, Payload) -> DeviceResult<Payload> + Send + Sync + 'static,
    {
        self.register_payload_builder(kind, property, hook);
        self
    }

    pub fn extractor(&self, kind: &str, resource_key: &str) -> Option<&ExtractHook> {
        self.extractors.get(&key(kind, resource_key))
    }

    pub fn status_handler(&self, kind: &str, resource_key: &str) -> Option<&StatusHook> {
        self.status_handlers.get(&key(kind, resource_key))
    }

    pub fn payload_builder(&self, kind: &str, property: &str) -> Option<&PayloadHook> {
        self.payload_builders.get(&key(kind, property))
    }
}

// Strategies shared by several device tables.

/// Generic extraction of an object-shaped custom resource, units dropped.
pub fn extract_without_unit(ctx: &ExtractContext<'_>, fragment: &Value) -> Extraction {
    let mut extraction = Extraction::default();
    for (sub_key, prop) in &ctx.resource.properties {
        extraction.record(
            prop,
            CapabilityDescriptor::from_fragment(fragment, sub_key).without_unit(),
        );
    }
    extraction
}

/// Extraction of a list of `locationName`-tagged records: only the record of
/// the current location is read, units dropped.
pub fn extract_location_record(ctx: &ExtractContext<'_>, fragment: &Value) -> Extraction {
    location_record(ctx, fragment, false)
}

/// Like [`extract_location_record`], keeping each record's `unit`.
pub fn extract_location_record_with_unit(ctx: &ExtractContext<'_>, fragment: &Value) -> Extraction {
    location_record(ctx, fragment, true)
}

fn location_record(ctx: &ExtractContext<'_>, fragment: &Value, keep_unit: bool) -> Extraction {
    let mut extraction = Extraction::default();
    let (Some(location), Some(records)) = (ctx.location, fragment.as_array()) else {
        return extraction;
    };

    for record in records
        .iter()
        .filter(|r| r.get("locationName").and_then(Value::as_str) == Some(location))
    {
        for (sub_key, prop) in &ctx.resource.properties {
            let descriptor = CapabilityDescriptor::from_fragment(record, sub_key);
            let descriptor = if keep_unit { descriptor } else { descriptor.without_unit() };
            extraction.record(prop, descriptor);
        }
    }
    extraction
}

/// Incremental updates of per-unit target temperatures.
///
/// `targets` pairs each unit (`"C"`, `"F"`) with the property holding the
/// target in that unit. Only the property paired with the fragment's `unit`,
/// or the stored unit when the fragment has none, receives the value. When
/// both fragments arrive, the last one wins.
pub fn apply_active_unit_temperature(
    ctx: &mut StatusContext<'_>,
    fragment: &Value,
    unit_property: &str,
    targets: &[(&str, &str)],
) -> bool {
    if ctx.mode != ApplyMode::Incremental {
        return false;
    }
    let Some(&(target_unit, _)) = targets.iter().find(|(_, prop)| *prop == ctx.property) else {
        return false;
    };

    let current_unit = fragment
        .get("unit")
        .and_then(Value::as_str)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .or_else(|| {
            ctx.state
                .value(unit_property)
                .and_then(Value::as_str)
                .map(str::to_string)
        });

    if current_unit.as_deref() == Some(target_unit) {
        let value = fragment.get(ctx.sub_key).cloned().unwrap_or(Value::Null);
        ctx.state.set_internal(ctx.property, value);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{property, ProfileMapping};
    use serde_json::json;

    fn temperature_mapping() -> ProfileMapping {
        ProfileMapping::builder("zone")
            .custom_resource("temperatureInUnits", "temperature", &[
                ("targetTemperatureC", property::TARGET_TEMPERATURE_C),
                ("targetTemperatureF", property::TARGET_TEMPERATURE_F),
                ("unit", property::TEMPERATURE_UNIT),
            ])
            .build()
            .unwrap()
    }

    #[test]
    fn test_location_record_extraction() {
        let mapping = temperature_mapping();
        let resource = &mapping.resources()[0];
        let ctx = ExtractContext {
            resource,
            location: Some("FREEZER"),
        };
        let fragment = json!([
            {"locationName": "FRIDGE", "targetTemperatureC": {"type": "range", "mode": ["r", "w"], "unit": "C", "value": {"w": {"min": 1, "max": 7}}}},
            {"locationName": "FREEZER", "targetTemperatureC": {"type": "range", "mode": ["r"], "unit": "C", "value": {"r": {"min": -23, "max": -15}}}},
        ]);

        let extraction = extract_location_record(&ctx, &fragment);
        assert_eq!(extraction.readable, vec![property::TARGET_TEMPERATURE_C.to_string()]);
        assert!(extraction.writable.is_empty());
        let (_, desc) = &extraction.descriptors[0];
        assert_eq!(desc.unit, None);
    }

    #[test]
    fn test_active_unit_update() {
        let mapping = temperature_mapping();
        let resource = &mapping.resources()[0];
        let mut state = DeviceState::new();
        state.set_internal(property::TEMPERATURE_UNIT, json!("F"));
        let fragment = json!({"targetTemperatureC": 3, "targetTemperatureF": 37});

        for (sub_key, prop) in [
            ("targetTemperatureC", property::TARGET_TEMPERATURE_C),
            ("targetTemperatureF", property::TARGET_TEMPERATURE_F),
        ] {
            let mut ctx = StatusContext {
                resource,
                sub_key,
                property: prop,
                mode: ApplyMode::Incremental,
                state: &mut state,
            };
            assert!(apply_active_unit_temperature(
                &mut ctx,
                &fragment,
                property::TEMPERATURE_UNIT,
                &[("C", property::TARGET_TEMPERATURE_C), ("F", property::TARGET_TEMPERATURE_F)],
            ));
        }

        assert_eq!(state.get(property::TARGET_TEMPERATURE_C), None);
        assert_eq!(state.get(property::TARGET_TEMPERATURE_F), Some(&json!(37)));
    }

    #[test]
    fn test_active_unit_pairs_do_not_depend_on_names() {
        let mapping = ProfileMapping::builder("zone")
            .custom_resource("temperatureInUnits", "temperature", &[
                ("targetTemperatureC", "celsius_target"),
                ("targetTemperatureF", "fahrenheit_target"),
            ])
            .build()
            .unwrap();
        let resource = &mapping.resources()[0];
        let targets = [("C", "celsius_target"), ("F", "fahrenheit_target")];
        let mut state = DeviceState::new();
        let fragment = json!({"targetTemperatureC": 4, "targetTemperatureF": 39, "unit": "C"});

        for (sub_key, prop) in [
            ("targetTemperatureC", "celsius_target"),
            ("targetTemperatureF", "fahrenheit_target"),
        ] {
            let mut ctx = StatusContext {
                resource,
                sub_key,
                property: prop,
                mode: ApplyMode::Incremental,
                state: &mut state,
            };
            assert!(apply_active_unit_temperature(
                &mut ctx,
                &fragment,
                property::TEMPERATURE_UNIT,
                &targets,
            ));
        }

        assert_eq!(state.get("celsius_target"), Some(&json!(4)));
        assert_eq!(state.get("fahrenheit_target"), None);

        let mut ctx = StatusContext {
            resource,
            sub_key: "unit",
            property: property::TEMPERATURE_UNIT,
            mode: ApplyMode::Incremental,
            state: &mut state,
        };
        assert!(!apply_active_unit_temperature(&mut ctx, &fragment, property::TEMPERATURE_UNIT, &targets));
    }
}
