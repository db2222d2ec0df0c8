//! Oven.
//!
//! The main profile only carries the oven type, read from
//! `extensionProperty`. Every cavity is a record of the `property` list tagged
//! with `location.locationName`.
//!
//! A cavity reports its target temperature in one unit at a time:
//!
//! ```text
//! profile: "temperature": [{"unit": "C", "targetTemperature": {...}},
//!                          {"unit": "F", "targetTemperature": {...}}]
//! status:  "temperature": {"unit": "F", "targetTemperature": 350}
//! state:   target_temperature_f = {"target_temperature": 350, "unit": "F"}
//!          target_temperature_c = {"target_temperature": null, "unit": "C"}
//! ```

use crate::capability::CapabilityDescriptor;
use crate::command::{LocationStyle, Payload};
use crate::error::DeviceResult;
use crate::hooks::{ExtractContext, Extraction, HookRegistry, PayloadContext, StatusContext};
use crate::location::{LocationLayout, LocationSource, LocationTag};
use crate::mapping::{property as p, resource as r, Location, ProfileMapping};
use crate::setters::SetterTable;
use serde_json::{json, Value};

pub const KIND: &str = "oven";
pub const CAVITY_KIND: &str = "oven_cavity";

/// Last unit reported by a cavity.
const UNIT_HINT: &str = "temperature.unit";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    let cavity = ProfileMapping::builder(CAVITY_KIND)
        .resource("runState", r::RUN_STATE, &[("currentState", p::CURRENT_STATE)])
        .resource("operation", r::OPERATION, &[("ovenOperationMode", p::OVEN_OPERATION_MODE)])
        .resource("cook", r::COOK, &[("cookMode", p::COOK_MODE)])
        .resource("remoteControlEnable", r::REMOTE_CONTROL_ENABLE, &[
            ("remoteControlEnabled", p::REMOTE_CONTROL_ENABLED),
        ])
        .custom_resource("temperature", r::TEMPERATURE, &[
            ("C", p::TARGET_TEMPERATURE_C),
            ("F", p::TARGET_TEMPERATURE_F),
        ])
        .resource("timer", r::TIMER, &[
            ("remainHour", p::REMAIN_HOUR),
            ("remainMinute", p::REMAIN_MINUTE),
            ("remainSecond", p::REMAIN_SECOND),
            ("targetHour", p::TARGET_HOUR),
            ("targetMinute", p::TARGET_MINUTE),
            ("targetSecond", p::TARGET_SECOND),
            ("timerHour", p::TIMER_HOUR),
            ("timerMinute", p::TIMER_MINUTE),
            ("timerSecond", p::TIMER_SECOND),
        ])
        .with_notification(false)
        .with_setters(
            SetterTable::new()
                .enumerated(p::OVEN_OPERATION_MODE)
                .enumerated(p::COOK_MODE)
                .range(p::TARGET_TEMPERATURE_C)
                .range(p::TARGET_TEMPERATURE_F),
        )
        .build()?;

    let layout = LocationLayout::new(LocationTag::Nested, cavity)
        .with_source(LocationSource::property_list(&[
            ("OVEN", Location::Oven),
            ("UPPER", Location::Upper),
            ("LOWER", Location::Lower),
        ]))
        .with_style(LocationStyle::TopLevel);

    ProfileMapping::builder(KIND)
        .resource("info", r::INFO, &[("type", p::OVEN_TYPE)])
        .with_extension_property(true)
        .with_locations(layout)
        .build()
}

/// One descriptor per listed unit, read from the entry's `targetTemperature`.
fn extract_temperature(ctx: &ExtractContext<'_>, fragment: &Value) -> Extraction {
    let mut extraction = Extraction::default();
    let Some(entries) = fragment.as_array() else {
        return extraction;
    };

    for entry in entries {
        let Some(property) = entry
            .get("unit")
            .and_then(Value::as_str)
            .and_then(|unit| ctx.resource.property_for(unit))
        else {
            continue;
        };
        extraction.record(
            property,
            CapabilityDescriptor::from_fragment(entry, "targetTemperature"),
        );
    }
    extraction
}

fn apply_temperature(ctx: &mut StatusContext<'_>, fragment: &Value) -> bool {
    let resource = ctx.resource;
    let value = fragment.get("targetTemperature").cloned().unwrap_or(Value::Null);
    let reported = fragment
        .get("unit")
        .and_then(Value::as_str)
        .filter(|u| !u.is_empty())
        .map(str::to_string);

    let Some(unit) = reported else {
        // no unit in the fragment: the value belongs to the last reported one
        let remembered = ctx
            .state
            .recall(UNIT_HINT)
            .and_then(Value::as_str)
            .map(str::to_string);
        if let Some((unit, target)) = remembered
            .and_then(|unit| resource.property_for(&unit).map(|target| (unit, target)))
        {
            ctx.state
                .set_internal(target, json!({"target_temperature": value, "unit": unit}));
        }
        return true;
    };

    if ctx.sub_key == unit {
        ctx.state.remember(UNIT_HINT, Value::String(unit.clone()));
        ctx.state
            .set_internal(ctx.property, json!({"target_temperature": value, "unit": unit}));
    } else {
        ctx.state.set_internal(
            ctx.property,
            json!({"target_temperature": null, "unit": ctx.sub_key}),
        );
    }
    true
}

/// `{"location": {...}, "temperature": {"targetTemperature": v, "unit": u}}`
fn temperature_payload(ctx: &PayloadContext<'_>, _validated: Payload) -> DeviceResult<Payload> {
    let unit = ctx.profile.descriptor(ctx.property).and_then(|d| d.unit.clone());

    let mut payload = Payload::new();
    if let Some(location) = ctx.location {
        payload.insert("location".into(), json!({ "locationName": location }));
    }
    payload.insert(
        "temperature".into(),
        json!({ "targetTemperature": ctx.value, "unit": unit }),
    );
    Ok(payload)
}

pub(crate) fn register_hooks(registry: &mut HookRegistry) {
    registry.register_extractor(CAVITY_KIND, "temperature", extract_temperature);
    registry.register_status_handler(CAVITY_KIND, "temperature", apply_temperature);
    registry.register_payload_builder(CAVITY_KIND, p::TARGET_TEMPERATURE_C, temperature_payload);
    registry.register_payload_builder(CAVITY_KIND, p::TARGET_TEMPERATURE_F, temperature_payload);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ApplyMode, DeviceState};

    fn status_ctx<'a>(
        resource: &'a crate::mapping::ResourceMapping,
        sub_key: &'a str,
        property: &'a str,
        state: &'a mut DeviceState,
    ) -> StatusContext<'a> {
        StatusContext {
            resource,
            sub_key,
            property,
            mode: ApplyMode::Full,
            state,
        }
    }

    #[test]
    fn test_active_unit_and_sibling() {
        let cavity = mapping().unwrap();
        let layout = cavity.locations().unwrap();
        let resource = layout.sub_mapping.resource("temperature").unwrap();
        let mut state = DeviceState::new();
        let fragment = json!({"targetTemperature": 350, "unit": "F"});

        apply_temperature(&mut status_ctx(resource, "C", p::TARGET_TEMPERATURE_C, &mut state), &fragment);
        apply_temperature(&mut status_ctx(resource, "F", p::TARGET_TEMPERATURE_F, &mut state), &fragment);

        assert_eq!(
            state.get(p::TARGET_TEMPERATURE_F),
            Some(&json!({"target_temperature": 350, "unit": "F"}))
        );
        assert_eq!(
            state.get(p::TARGET_TEMPERATURE_C),
            Some(&json!({"target_temperature": null, "unit": "C"}))
        );
    }

    #[test]
    fn test_missing_unit_reuses_last_one() {
        let cavity = mapping().unwrap();
        let resource = cavity.locations().unwrap().sub_mapping.resource("temperature").unwrap();
        let mut state = DeviceState::new();
        state.remember(UNIT_HINT, json!("C"));

        apply_temperature(
            &mut status_ctx(resource, "F", p::TARGET_TEMPERATURE_F, &mut state),
            &json!({"targetTemperature": 180}),
        );

        assert_eq!(
            state.get(p::TARGET_TEMPERATURE_C),
            Some(&json!({"target_temperature": 180, "unit": "C"}))
        );
        assert_eq!(state.get(p::TARGET_TEMPERATURE_F), None);
    }
}
