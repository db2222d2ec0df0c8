//! Wine cellar.
//!
//! Zones come from the `temperatureInUnits` list and follow the refrigerator
//! compartment rules.

use super::refrigerator::apply_temperature;
use crate::command::LocationStyle;
use crate::error::DeviceResult;
use crate::hooks::{extract_location_record, HookRegistry};
use crate::location::{LocationLayout, LocationSource, LocationTag};
use crate::mapping::{property as p, resource as r, Location, ProfileMapping};
use crate::setters::SetterTable;

pub const KIND: &str = "wine_cellar";
pub const ZONE_KIND: &str = "wine_cellar_zone";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    let zone = ProfileMapping::builder(ZONE_KIND)
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
        .build()?;

    let layout = LocationLayout::new(LocationTag::Flat, zone)
        .with_source(LocationSource::resource_list("temperatureInUnits", &[
            ("WINE_UPPER", Location::Upper),
            ("WINE_MIDDLE", Location::Middle),
            ("WINE_LOWER", Location::Lower),
        ]))
        .with_style(LocationStyle::Embedded);

    ProfileMapping::builder(KIND)
        .resource("operation", r::OPERATION, &[
            ("lightBrightness", p::LIGHT_BRIGHTNESS),
            ("optimalHumidity", p::OPTIMAL_HUMIDITY),
            ("sabbathMode", p::SABBATH_MODE),
            ("lightStatus", p::LIGHT_STATUS),
        ])
        .with_locations(layout)
        .with_setters(
            SetterTable::new()
                .enumerated(p::LIGHT_BRIGHTNESS)
                .enumerated(p::OPTIMAL_HUMIDITY)
                .range(p::LIGHT_STATUS),
        )
        .build()
}

pub(crate) fn register_hooks(registry: &mut HookRegistry) {
    registry.register_extractor(ZONE_KIND, "temperatureInUnits", extract_location_record);
    registry.register_status_handler(ZONE_KIND, "temperatureInUnits", apply_temperature);
}
