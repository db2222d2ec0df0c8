//! Capability descriptors.
//!
//! A [`CapabilityDescriptor`] is the resolved metadata of one leaf attribute in a
//! device profile: its value type, whether it can be read or written, the
//! allowed values for each direction and an optional unit. Descriptors are
//! built once while the profile is resolved and are immutable afterwards.
//!
//! ## Profile fragment shapes
//!
//! ```text
//! "power": {"type": "enum", "mode": ["r", "w"], "value": {"r": ["ON", "OFF"], "w": ["ON", "OFF"]}}
//! "targetTemperature": {"type": "range", "mode": ["r", "w"], "value": {"w": {"min": 16, "max": 30, "step": 1}}}
//! "firmware": "1.2.3"
//! ```

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Number, Value};

/// Key of the read direction inside `mode` and `value`.
pub const READ_MODE: &str = "r";
/// Key of the write direction inside `mode` and `value`.
pub const WRITE_MODE: &str = "w";

/// Value type declared by the profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Enum,
    Range,
    List,
    Boolean,
    String,
    Number,
    Other(String),
}

impl PropertyKind {
    pub fn parse(s: &str) -> Self {
        match s {
            "enum" => Self::Enum,
            "range" => Self::Range,
            "list" => Self::List,
            "boolean" => Self::Boolean,
            "string" => Self::String,
            "number" => Self::Number,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Enum => "enum",
            Self::Range => "range",
            Self::List => "list",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Number => "number",
            Self::Other(s) => s,
        }
    }

    /// Kinds whose descriptors carry explicit read/write value sets.
    pub fn carries_values(&self) -> bool {
        matches!(self, Self::Enum | Self::Range | Self::List)
    }
}

impl Serialize for PropertyKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Numeric constraint of a range property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub min: Number,
    pub max: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<Number>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub except: Vec<Number>,
}

impl RangeSpec {
    const EPSILON: f64 = 1e-9;

    pub fn new(min: impl Into<Number>, max: impl Into<Number>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
            step: None,
            except: Vec::new(),
        }
    }

    pub fn with_step(mut self, step: impl Into<Number>) -> Self {
        self.step = Some(step.into());
        self
    }

    pub fn with_except(mut self, except: Vec<Number>) -> Self {
        self.except = except;
        self
    }

    /// `min <= v <= max`, `(v - min)` is a multiple of `step` (default 1) and
    /// `v` is not excluded.
    pub fn contains(&self, value: f64) -> bool {
        let (Some(min), Some(max)) = (self.min.as_f64(), self.max.as_f64()) else {
            return false;
        };
        let step = self.step.as_ref().and_then(Number::as_f64).unwrap_or(1.0);
        if step <= 0.0 || value < min || value > max {
            return false;
        }

        let steps = (value - min) / step;
        if (steps - steps.round()).abs() > Self::EPSILON {
            return false;
        }

        !self
            .except
            .iter()
            .filter_map(Number::as_f64)
            .any(|excluded| (excluded - value).abs() < Self::EPSILON)
    }
}

/// Allowed values for one direction of a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AllowedValues {
    /// enum and list properties
    Set(Vec<Value>),
    /// range properties
    Range(RangeSpec),
}

impl AllowedValues {
    /// Parse the `value.<r|w>` fragment. Empty or unparseable fragments yield `None`.
    fn from_fragment(fragment: Option<&Value>) -> Option<Self> {
        let parsed: Self = serde_json::from_value(fragment?.clone()).ok()?;
        match &parsed {
            Self::Set(values) if values.is_empty() => None,
            _ => Some(parsed),
        }
    }

    pub fn contains(&self, value: &Value) -> bool {
        match self {
            Self::Set(values) => values.contains(value),
            Self::Range(range) => value.as_f64().is_some_and(|v| range.contains(v)),
        }
    }

    pub fn as_set(&self) -> Option<&[Value]> {
        match self {
            Self::Set(values) => Some(values),
            Self::Range(_) => None,
        }
    }

    pub fn as_range(&self) -> Option<&RangeSpec> {
        match self {
            Self::Range(range) => Some(range),
            Self::Set(_) => None,
        }
    }

    fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Resolved metadata of one property.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CapabilityDescriptor {
    pub kind: Option<PropertyKind>,
    pub readable: bool,
    pub writable: bool,
    pub read_values: Option<AllowedValues>,
    pub write_values: Option<AllowedValues>,
    pub unit: Option<String>,
}

impl CapabilityDescriptor {
    /// Descriptor of a property the unit does not support.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Firmware-style fixed string reported instead of a spec object.
    pub fn readonly_string(value: &str) -> Self {
        Self {
            kind: Some(PropertyKind::String),
            readable: true,
            writable: false,
            read_values: Some(AllowedValues::Set(vec![Value::String(value.to_string())])),
            write_values: None,
            unit: None,
        }
    }

    /// Read-only enum, used for the profile-level `error` and `notification.push` lists.
    pub fn readonly_enum(values: Vec<Value>) -> Self {
        Self {
            kind: Some(PropertyKind::Enum),
            readable: true,
            writable: false,
            read_values: (!values.is_empty()).then_some(AllowedValues::Set(values)),
            write_values: None,
            unit: None,
        }
    }

    /// Derive the descriptor of `sub_key` inside a resource fragment.
    ///
    /// A missing unit on the property falls back to the resource-level `unit`.
    pub fn from_fragment(resource: &Value, sub_key: &str) -> Self {
        let spec = match resource.get(sub_key) {
            None | Some(Value::Null) => return Self::disabled(),
            Some(Value::String(fixed)) => return Self::readonly_string(fixed),
            Some(spec) => spec,
        };
        let Some(obj) = spec.as_object() else {
            // Scalars other than strings are reported values, never controls.
            return Self {
                readable: true,
                ..Self::default()
            };
        };

        let kind = obj
            .get("type")
            .and_then(Value::as_str)
            .map(PropertyKind::parse);
        let has_mode = |mode: &str| {
            obj.get("mode")
                .and_then(Value::as_array)
                .is_some_and(|modes| modes.iter().any(|m| m.as_str() == Some(mode)))
        };
        let readable = has_mode(READ_MODE);
        let writable = has_mode(WRITE_MODE);
        let unit = non_empty_str(obj.get("unit")).or_else(|| non_empty_str(resource.get("unit")));

        let (read_values, write_values) = match &kind {
            Some(k) if k.carries_values() => {
                let values = obj.get("value");
                (
                    readable
                        .then(|| AllowedValues::from_fragment(values.and_then(|v| v.get(READ_MODE))))
                        .flatten(),
                    writable
                        .then(|| AllowedValues::from_fragment(values.and_then(|v| v.get(WRITE_MODE))))
                        .flatten(),
                )
            }
            _ => (None, None),
        };

        Self {
            kind,
            readable,
            writable,
            read_values,
            write_values,
            unit,
        }
    }

    pub fn without_unit(mut self) -> Self {
        self.unit = None;
        self
    }

    pub fn is_supported(&self) -> bool {
        self.readable || self.writable
    }

    /// Writable and `value` is one of the writable values.
    pub fn accepts_enum(&self, value: &Value) -> bool {
        self.writable
            && self
                .write_values
                .as_ref()
                .and_then(AllowedValues::as_set)
                .is_some_and(|set| set.contains(value))
    }

    /// `value` satisfies the writable range.
    pub fn accepts_range(&self, value: &Value) -> bool {
        match (self.write_values.as_ref().and_then(AllowedValues::as_range), value.as_f64()) {
            (Some(range), Some(v)) => range.contains(v),
            _ => false,
        }
    }

    /// Public shape of the descriptor.
    ///
    /// Properties with explicit values expose them under `r`/`w`, the rest
    /// expose plain readability/writability flags.
    pub fn to_spec(&self) -> PropertySpec {
        if self.read_values.is_some() || self.write_values.is_some() {
            PropertySpec {
                kind: self.kind.clone(),
                read: Access::Values(self.values_or_sentinel(self.read_values.as_ref())),
                write: Access::Values(self.values_or_sentinel(self.write_values.as_ref())),
                unit: self.unit.clone(),
            }
        } else {
            PropertySpec {
                kind: self.kind.clone(),
                read: Access::Flag(self.readable),
                write: Access::Flag(self.writable),
                unit: None,
            }
        }
    }

    fn values_or_sentinel(&self, values: Option<&AllowedValues>) -> Value {
        match values {
            Some(values) => values.to_value(),
            None if self.kind == Some(PropertyKind::Range) => Value::Object(Default::default()),
            None => Value::Array(Vec::new()),
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// One direction of a public property description.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Access {
    Values(Value),
    Flag(bool),
}

/// Public-facing description of a property, as exposed by the profile's property map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySpec {
    #[serde(rename = "type")]
    pub kind: Option<PropertyKind>,
    #[serde(rename = "r")]
    pub read: Access,
    #[serde(rename = "w")]
    pub write: Access,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl PropertySpec {
    /// Readable values, if the description carries any.
    pub fn read_values(&self) -> Option<&Vec<Value>> {
        match &self.read {
            Access::Values(Value::Array(values)) => Some(values),
            _ => None,
        }
    }

    pub fn write_values(&self) -> Option<&Vec<Value>> {
        match &self.write {
            Access::Values(Value::Array(values)) => Some(values),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enum_descriptor() {
        let resource = json!({
            "power": {"mode": ["r", "w"], "type": "enum", "value": {"r": ["ON", "OFF"], "w": ["ON", "OFF"]}}
        });
        let desc = CapabilityDescriptor::from_fragment(&resource, "power");

        assert_eq!(desc.kind, Some(PropertyKind::Enum));
        assert!(desc.readable);
        assert!(desc.writable);
        assert_eq!(
            desc.write_values,
            Some(AllowedValues::Set(vec![json!("ON"), json!("OFF")]))
        );
        assert!(desc.accepts_enum(&json!("ON")));
        assert!(!desc.accepts_enum(&json!("MAYBE")));
    }

    #[test]
    fn test_read_only_mode_drops_write_values() {
        let resource = json!({
            "mode": {"mode": ["r"], "type": "enum", "value": {"r": ["A"], "w": ["A"]}}
        });
        let desc = CapabilityDescriptor::from_fragment(&resource, "mode");
        assert!(!desc.writable);
        assert_eq!(desc.write_values, None);
        assert!(!desc.accepts_enum(&json!("A")));
    }

    #[test]
    fn test_range_boundaries() {
        let range = RangeSpec::new(10, 30).with_step(5).with_except(vec![20.into()]);
        for ok in [10.0, 15.0, 25.0, 30.0] {
            assert!(range.contains(ok), "{ok} should be accepted");
        }
        for bad in [9.0, 11.0, 20.0, 31.0] {
            assert!(!range.contains(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_fractional_step() {
        let range = RangeSpec::new(serde_json::Number::from_f64(0.5).unwrap(), 5)
            .with_step(serde_json::Number::from_f64(0.5).unwrap());
        assert!(range.contains(1.5));
        assert!(!range.contains(1.2));
    }

    #[test]
    fn test_string_spec_is_readonly() {
        let desc = CapabilityDescriptor::from_fragment(&json!({"type": "OVEN"}), "type");
        assert_eq!(desc.kind, Some(PropertyKind::String));
        assert!(desc.readable);
        assert!(!desc.writable);
        assert_eq!(desc.to_spec().read_values(), Some(&vec![json!("OVEN")]));
    }

    #[test]
    fn test_unit_falls_back_to_resource() {
        let resource = json!({
            "unit": "C",
            "currentTemperature": {"type": "number", "mode": ["r"]}
        });
        let desc = CapabilityDescriptor::from_fragment(&resource, "currentTemperature");
        assert_eq!(desc.unit.as_deref(), Some("C"));
        assert!(desc.readable);
    }

    #[test]
    fn test_missing_sub_key_is_disabled() {
        let desc = CapabilityDescriptor::from_fragment(&json!({}), "absent");
        assert!(!desc.is_supported());
    }

    #[test]
    fn test_public_shape() {
        let flag = CapabilityDescriptor::from_fragment(
            &json!({"enabled": {"type": "boolean", "mode": ["r", "w"]}}),
            "enabled",
        );
        assert_eq!(
            serde_json::to_value(flag.to_spec()).unwrap(),
            json!({"type": "boolean", "r": true, "w": true})
        );

        let range = CapabilityDescriptor::from_fragment(
            &json!({"t": {"type": "range", "mode": ["w"], "unit": "C", "value": {"w": {"min": 16, "max": 30}}}}),
            "t",
        );
        assert_eq!(
            serde_json::to_value(range.to_spec()).unwrap(),
            json!({"type": "range", "r": {}, "w": {"min": 16, "max": 30}, "unit": "C"})
        );
    }
}
