//! Cooktop.
//!
//! Burner commands always carry the burner's full power and timer setting,
//! with the written value replacing its current one.

use crate::command::{merge_payload, LocationStyle, Payload};
use crate::error::DeviceResult;
use crate::hooks::{HookRegistry, PayloadContext};
use crate::location::{LocationLayout, LocationSource, LocationTag};
use crate::mapping::{property as p, resource as r, Location, ProfileMapping};
use crate::setters::SetterTable;
use serde_json::{json, Value};

pub const KIND: &str = "cooktop";
pub const BURNER_KIND: &str = "cooktop_burner";

const BURNERS: [(&str, Location); 18] = [
    ("CENTER", Location::Center),
    ("CENTER_FRONT", Location::CenterFront),
    ("CENTER_REAR", Location::CenterRear),
    ("LEFT_FRONT", Location::LeftFront),
    ("LEFT_REAR", Location::LeftRear),
    ("RIGHT_FRONT", Location::RightFront),
    ("RIGHT_REAR", Location::RightRear),
    ("BURNER_1", Location::Burner1),
    ("BURNER_2", Location::Burner2),
    ("BURNER_3", Location::Burner3),
    ("BURNER_4", Location::Burner4),
    ("BURNER_5", Location::Burner5),
    ("BURNER_6", Location::Burner6),
    ("BURNER_7", Location::Burner7),
    ("BURNER_8", Location::Burner8),
    ("INDUCTION_1", Location::Induction1),
    ("INDUCTION_2", Location::Induction2),
    ("SOUSVIDE_1", Location::Sousvide1),
];

const BURNER_SETTINGS: [&str; 3] = [p::POWER_LEVEL, p::REMAIN_HOUR, p::REMAIN_MINUTE];

pub fn mapping(with_extension: bool) -> DeviceResult<ProfileMapping> {
    let burner = ProfileMapping::builder(BURNER_KIND)
        .resource("cookingZone", r::COOKING_ZONE, &[("currentState", p::CURRENT_STATE)])
        .resource("power", r::POWER, &[("powerLevel", p::POWER_LEVEL)])
        .resource("remoteControlEnable", r::REMOTE_CONTROL_ENABLE, &[
            ("remoteControlEnabled", p::REMOTE_CONTROL_ENABLED),
        ])
        .resource("timer", r::TIMER, &[
            ("remainHour", p::REMAIN_HOUR),
            ("remainMinute", p::REMAIN_MINUTE),
        ])
        .with_setters(
            SetterTable::new()
                .range(p::POWER_LEVEL)
                .range(p::REMAIN_HOUR)
                .range(p::REMAIN_MINUTE),
        )
        .build()?;

    let layout = LocationLayout::new(LocationTag::Nested, burner)
        .with_source(LocationSource::property_list(&BURNERS))
        .with_style(LocationStyle::TopLevel);

    let builder = ProfileMapping::builder(KIND).with_locations(layout);
    if with_extension {
        builder
            .resource("operation", r::OPERATION, &[("operationMode", p::OPERATION_MODE)])
            .with_extension_property(true)
            .with_setters(SetterTable::new().enumerated(p::OPERATION_MODE))
            .build()
    } else {
        builder.build()
    }
}

fn burner_payload(ctx: &PayloadContext<'_>, validated: Payload) -> DeviceResult<Payload> {
    let current = |property: &str| -> Value {
        if ctx.profile.check_readable(property) {
            ctx.state.value(property).cloned().unwrap_or(Value::Null)
        } else {
            Value::Null
        }
    };

    let mut payload = Payload::new();
    payload.insert("power".into(), json!({ "powerLevel": current(p::POWER_LEVEL) }));
    payload.insert(
        "timer".into(),
        json!({
            "remainHour": current(p::REMAIN_HOUR),
            "remainMinute": current(p::REMAIN_MINUTE),
        }),
    );
    if let Some(location) = ctx.location {
        payload.insert("location".into(), json!({ "locationName": location }));
    }
    merge_payload(&mut payload, validated);
    Ok(payload)
}

pub(crate) fn register_hooks(registry: &mut HookRegistry) {
    for setting in BURNER_SETTINGS {
        registry.register_payload_builder(BURNER_KIND, setting, burner_payload);
    }
}
