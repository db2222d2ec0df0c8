//! Refrigerator.
//!
//! Compartments are declared by the `doorStatus` and `temperatureInUnits`
//! lists of the main profile, each record tagged with a flat `locationName`.
//! Temperature commands carry the location inside the resource object.

use crate::command::LocationStyle;
use crate::error::DeviceResult;
use crate::hooks::{apply_active_unit_temperature, extract_location_record, HookRegistry, StatusContext};
use crate::location::{LocationLayout, LocationSource, LocationTag};
use crate::mapping::{property as p, resource as r, Location, ProfileMapping};
use crate::setters::SetterTable;
use serde_json::Value;

pub const KIND: &str = "refrigerator";
pub const COMPARTMENT_KIND: &str = "refrigerator_compartment";

pub(crate) const UNIT_TARGETS: [(&str, &str); 2] = [("C", p::TARGET_TEMPERATURE_C), ("F", p::TARGET_TEMPERATURE_F)];

pub fn mapping() -> DeviceResult<ProfileMapping> {
    let layout = LocationLayout::new(LocationTag::Flat, compartment_mapping()?)
        .with_source(LocationSource::resource_list("doorStatus", &[("MAIN", Location::Main)]))
        .with_source(LocationSource::resource_list("temperatureInUnits", &[
            ("FRIDGE", Location::Fridge),
            ("FREEZER", Location::Freezer),
            ("CONVERTIBLE", Location::Convertible),
        ]))
        .with_style(LocationStyle::Embedded);

    ProfileMapping::builder(KIND)
        .resource("powerSave", r::POWER_SAVE, &[("powerSaveEnabled", p::POWER_SAVE_ENABLED)])
        .resource("ecoFriendly", r::ECO_FRIENDLY, &[("ecoFriendlyMode", p::ECO_FRIENDLY_MODE)])
        .resource("sabbath", r::SABBATH, &[("sabbathMode", p::SABBATH_MODE)])
        .resource("refrigeration", r::REFRIGERATION, &[
            ("rapidFreeze", p::RAPID_FREEZE),
            ("expressMode", p::EXPRESS_MODE),
            ("expressModeName", p::EXPRESS_MODE_NAME),
            ("expressFridge", p::EXPRESS_FRIDGE),
            ("freshAirFilter", p::FRESH_AIR_FILTER),
        ])
        .resource("waterFilterInfo", r::WATER_FILTER_INFO, &[
            ("usedTime", p::USED_TIME),
            ("unit", p::WATER_FILTER_INFO_UNIT),
        ])
        .with_locations(layout)
        .with_setters(
            SetterTable::new()
                .plain(p::RAPID_FREEZE)
                .plain(p::EXPRESS_MODE)
                .enumerated(p::FRESH_AIR_FILTER),
        )
        .build()
}

fn compartment_mapping() -> DeviceResult<ProfileMapping> {
    ProfileMapping::builder(COMPARTMENT_KIND)
        .custom_resource("doorStatus", r::DOOR_STATUS, &[("doorState", p::DOOR_STATE)])
        .custom_resource("temperatureInUnits", r::TEMPERATURE, &[
            ("targetTemperatureC", p::TARGET_TEMPERATURE_C),
            ("targetTemperatureF", p::TARGET_TEMPERATURE_F),
            ("unit", p::TEMPERATURE_UNIT),
        ])
        .with_notification(false)
        .with_setters(
            SetterTable::new()
                .range(p::TARGET_TEMPERATURE_C)
                .range(p::TARGET_TEMPERATURE_F),
        )
        .build()
}

pub(crate) fn apply_temperature(ctx: &mut StatusContext<'_>, fragment: &Value) -> bool {
    apply_active_unit_temperature(ctx, fragment, p::TEMPERATURE_UNIT, &UNIT_TARGETS)
}

pub(crate) fn register_hooks(registry: &mut HookRegistry) {
    registry.register_extractor(COMPARTMENT_KIND, "doorStatus", extract_location_record);
    registry.register_extractor(COMPARTMENT_KIND, "temperatureInUnits", extract_location_record);
    registry.register_status_handler(COMPARTMENT_KIND, "temperatureInUnits", apply_temperature);
}
