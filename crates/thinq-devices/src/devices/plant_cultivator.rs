//! Plant cultivator.
//!
//! Shelves are `UPPER` and `LOWER` records of the `property` list. Each shelf
//! reports its own notifications.

use crate::error::DeviceResult;
use crate::location::{LocationLayout, LocationSource, LocationTag};
use crate::mapping::{property as p, resource as r, Location, ProfileMapping};

pub const KIND: &str = "plant_cultivator";
pub const SHELF_KIND: &str = "plant_cultivator_shelf";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    let shelf = ProfileMapping::builder(SHELF_KIND)
        .resource("runState", r::RUN_STATE, &[
            ("currentState", p::CURRENT_STATE),
            ("growthMode", p::GROWTH_MODE),
            ("windVolume", p::WIND_VOLUME),
        ])
        .resource("light", r::LIGHT, &[
            ("brightness", p::BRIGHTNESS),
            ("duration", p::DURATION),
            ("startHour", p::START_HOUR),
            ("startMinute", p::START_MINUTE),
        ])
        .resource("temperature", r::TEMPERATURE, &[
            ("dayTargetTemperature", p::DAY_TARGET_TEMPERATURE),
            ("nightTargetTemperature", p::NIGHT_TARGET_TEMPERATURE),
            ("temperatureState", p::TEMPERATURE_STATE),
        ])
        .build()?;

    let layout = LocationLayout::new(LocationTag::Nested, shelf).with_source(
        LocationSource::property_list(&[("UPPER", Location::Upper), ("LOWER", Location::Lower)]),
    );

    ProfileMapping::builder(KIND)
        .sub_profile_only()
        .with_locations(layout)
        .build()
}
