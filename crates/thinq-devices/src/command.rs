//! Control payload construction.
//!
//! A single-attribute payload is `{resource_key: {sub_key: value}}`. Several
//! attributes are merged one level deep so that sub-keys of the same resource
//! end up in one object and the server applies them in one request.

use crate::error::DeviceResult;
use crate::profile::DeviceProfile;
use serde_json::{json, Map, Value};

pub type Payload = Map<String, Value>;

/// Validation applied before a payload is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Property must be writable.
    Plain,
    /// Value must be one of the writable enum values.
    Enum,
    /// Value must satisfy the writable range.
    Range,
}

/// How a location-scoped command carries its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationStyle {
    /// `{"location": {"locationName": "UPPER"}, "cook": {...}}`
    TopLevel,
    /// `{"temperatureInUnits": {"locationName": "FRIDGE", ...}}`
    Embedded,
    /// `{"washer": {"operation": {...}}}`
    Wrapped,
}

/// Validate `value` and build the payload for one property.
pub fn build_payload(
    profile: &DeviceProfile,
    kind: CommandKind,
    property: &str,
    value: &Value,
) -> DeviceResult<Payload> {
    match kind {
        CommandKind::Plain => profile.attribute_payload(property, value),
        CommandKind::Enum => profile.enum_attribute_payload(property, value),
        CommandKind::Range => profile.range_attribute_payload(property, value),
    }
}

/// Validate every attribute and merge the payloads into one object.
///
/// Nothing is built if any attribute fails validation.
pub fn build_multi_payload(
    profile: &DeviceProfile,
    kind: CommandKind,
    attributes: &[(&str, Value)],
) -> DeviceResult<Payload> {
    let mut payload = Payload::new();
    for (property, value) in attributes {
        merge_payload(&mut payload, build_payload(profile, kind, property, value)?);
    }
    Ok(payload)
}

/// Merge `other` into `into`, combining resource objects that share a key.
pub fn merge_payload(into: &mut Payload, other: Payload) {
    for (key, value) in other {
        match (into.get_mut(&key), value) {
            (Some(Value::Object(existing)), Value::Object(fields)) => existing.extend(fields),
            (_, value) => {
                into.insert(key, value);
            }
        }
    }
}

/// Add the location routing field to a payload.
pub fn inject_location(mut payload: Payload, location_key: &str, style: LocationStyle) -> Payload {
    match style {
        LocationStyle::Wrapped => {
            let mut wrapped = Map::new();
            wrapped.insert(location_key.to_string(), Value::Object(payload));
            return wrapped;
        }
        LocationStyle::TopLevel => {
            payload.insert("location".into(), json!({ "locationName": location_key }));
        }
        LocationStyle::Embedded => {
            for fields in payload.values_mut().filter_map(Value::as_object_mut) {
                fields.insert("locationName".into(), Value::String(location_key.to_string()));
            }
        }
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_payload(value: Value) -> Payload {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_merge_same_resource() {
        let mut payload = as_payload(json!({"timer": {"relativeHourToStart": 5}}));
        merge_payload(&mut payload, as_payload(json!({"timer": {"relativeMinuteToStart": 10}})));

        assert_eq!(
            Value::Object(payload),
            json!({"timer": {"relativeHourToStart": 5, "relativeMinuteToStart": 10}})
        );
    }

    #[test]
    fn test_merge_distinct_resources() {
        let mut payload = as_payload(json!({"power": {"powerLevel": 3}}));
        merge_payload(&mut payload, as_payload(json!({"timer": {"remainHour": 1}})));
        assert_eq!(payload.len(), 2);
    }

    #[test]
    fn test_inject_top_level() {
        let payload = inject_location(
            as_payload(json!({"cook": {"cookMode": "BAKE"}})),
            "UPPER",
            LocationStyle::TopLevel,
        );
        assert_eq!(
            Value::Object(payload),
            json!({"location": {"locationName": "UPPER"}, "cook": {"cookMode": "BAKE"}})
        );
    }

    #[test]
    fn test_inject_embedded() {
        let payload = inject_location(
            as_payload(json!({"temperatureInUnits": {"targetTemperatureC": 3}})),
            "FRIDGE",
            LocationStyle::Embedded,
        );
        assert_eq!(
            Value::Object(payload),
            json!({"temperatureInUnits": {"locationName": "FRIDGE", "targetTemperatureC": 3}})
        );
    }

    #[test]
    fn test_inject_wrapped() {
        let payload = inject_location(
            as_payload(json!({"operation": {"washerOperationMode": "START"}})),
            "washer",
            LocationStyle::Wrapped,
        );
        assert_eq!(
            Value::Object(payload),
            json!({"washer": {"operation": {"washerOperationMode": "START"}}})
        );
    }
}
