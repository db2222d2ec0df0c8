//! Kimchi refrigerator.
//!
//! Compartments come from the `temperature` list, each record tagged with a
//! flat `locationName`. Unlike refrigerator compartments, a record holds a
//! single `targetTemperature` and keeps its unit.

use crate::command::LocationStyle;
use crate::error::DeviceResult;
use crate::hooks::{extract_location_record_with_unit, HookRegistry};
use crate::location::{LocationLayout, LocationSource, LocationTag};
use crate::mapping::{property as p, resource as r, Location, ProfileMapping};

pub const KIND: &str = "kimchi_refrigerator";
pub const COMPARTMENT_KIND: &str = "kimchi_refrigerator_compartment";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    let compartment = ProfileMapping::builder(COMPARTMENT_KIND)
        .custom_resource("temperature", r::TEMPERATURE, &[("targetTemperature", p::TARGET_TEMPERATURE)])
        .with_notification(false)
        .build()?;

    let layout = LocationLayout::new(LocationTag::Flat, compartment)
        .with_source(LocationSource::resource_list("temperature", &[
            ("TOP", Location::Top),
            ("MIDDLE", Location::Middle),
            ("BOTTOM", Location::Bottom),
            ("LEFT", Location::Left),
            ("RIGHT", Location::Right),
            ("SINGLE", Location::Single),
        ]))
        .with_style(LocationStyle::Embedded);

    ProfileMapping::builder(KIND)
        .resource("refrigeration", r::REFRIGERATION, &[
            ("oneTouchFilter", p::ONE_TOUCH_FILTER),
            ("freshAirFilter", p::FRESH_AIR_FILTER),
        ])
        .with_locations(layout)
        .build()
}

pub(crate) fn register_hooks(registry: &mut HookRegistry) {
    registry.register_extractor(COMPARTMENT_KIND, "temperature", extract_location_record_with_unit);
}
