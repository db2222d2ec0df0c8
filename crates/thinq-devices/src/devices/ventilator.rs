//! Ventilator.
//!
//! The `temperature` resource is resolved without its unit; status updates
//! for it use the generic path.

use crate::error::DeviceResult;
use crate::hooks::{extract_without_unit, HookRegistry};
use crate::mapping::{property as p, resource as r, ProfileMapping};
use crate::setters::SetterTable;

pub const KIND: &str = "ventilator";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    ProfileMapping::builder(KIND)
        .resource("ventJobMode", r::VENTILATOR_JOB_MODE, &[("currentJobMode", p::CURRENT_JOB_MODE)])
        .resource("operation", r::OPERATION, &[("ventOperationMode", p::VENTILATOR_OPERATION_MODE)])
        .custom_resource("temperature", r::TEMPERATURE, &[
            ("currentTemperature", p::CURRENT_TEMPERATURE),
            ("unit", p::TEMPERATURE_UNIT),
        ])
        .resource("airQualitySensor", r::AIR_QUALITY_SENSOR, &[
            ("PM1", p::PM1),
            ("PM2", p::PM2),
            ("PM10", p::PM10),
            ("CO2", p::CO2),
        ])
        .resource("airFlow", r::AIR_FLOW, &[("windStrength", p::WIND_STRENGTH)])
        .resource("timer", r::TIMER, &[
            ("absoluteHourToStop", p::ABSOLUTE_HOUR_TO_STOP),
            ("absoluteMinuteToStop", p::ABSOLUTE_MINUTE_TO_STOP),
            ("absoluteHourToStart", p::ABSOLUTE_HOUR_TO_START),
            ("absoluteMinuteToStart", p::ABSOLUTE_MINUTE_TO_START),
            ("relativeHourToStop", p::RELATIVE_HOUR_TO_STOP),
            ("relativeMinuteToStop", p::RELATIVE_MINUTE_TO_STOP),
            ("relativeHourToStart", p::RELATIVE_HOUR_TO_START),
            ("relativeMinuteToStart", p::RELATIVE_MINUTE_TO_START),
        ])
        .resource("sleepTimer", r::SLEEP_TIMER, &[
            ("relativeHourToStop", p::SLEEP_TIMER_RELATIVE_HOUR_TO_STOP),
            ("relativeMinuteToStop", p::SLEEP_TIMER_RELATIVE_MINUTE_TO_STOP),
        ])
        .with_setters(
            SetterTable::new()
                .enumerated(p::CURRENT_JOB_MODE)
                .enumerated(p::VENTILATOR_OPERATION_MODE)
                .enumerated(p::WIND_STRENGTH)
                .group("relative_time_to_start", &[p::RELATIVE_HOUR_TO_START, p::RELATIVE_MINUTE_TO_START])
                .group_omitting_zero(
                    "relative_time_to_stop",
                    &[p::RELATIVE_HOUR_TO_STOP, p::RELATIVE_MINUTE_TO_STOP],
                    p::RELATIVE_MINUTE_TO_STOP,
                )
                .group("absolute_time_to_start", &[p::ABSOLUTE_HOUR_TO_START, p::ABSOLUTE_MINUTE_TO_START])
                .group("absolute_time_to_stop", &[p::ABSOLUTE_HOUR_TO_STOP, p::ABSOLUTE_MINUTE_TO_STOP])
                .group_omitting_zero(
                    "sleep_timer_relative_time_to_stop",
                    &[p::SLEEP_TIMER_RELATIVE_HOUR_TO_STOP, p::SLEEP_TIMER_RELATIVE_MINUTE_TO_STOP],
                    p::SLEEP_TIMER_RELATIVE_MINUTE_TO_STOP,
                ),
        )
        .build()
}

pub(crate) fn register_hooks(registry: &mut HookRegistry) {
    registry.register_extractor(KIND, "temperature", extract_without_unit);
}
