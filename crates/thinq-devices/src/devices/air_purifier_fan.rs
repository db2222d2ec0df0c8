//! Air purifier fan.

use crate::error::DeviceResult;
use crate::mapping::{property as p, resource as r, ProfileMapping};
use crate::setters::SetterTable;

pub const KIND: &str = "air_purifier_fan";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    ProfileMapping::builder(KIND)
        .resource("airFanJobMode", r::AIR_FAN_JOB_MODE, &[("currentJobMode", p::CURRENT_JOB_MODE)])
        .resource("operation", r::OPERATION, &[("airFanOperationMode", p::AIR_FAN_OPERATION_MODE)])
        .resource("timer", r::TIMER, &[
            ("absoluteHourToStart", p::ABSOLUTE_HOUR_TO_START),
            ("absoluteMinuteToStart", p::ABSOLUTE_MINUTE_TO_START),
            ("absoluteHourToStop", p::ABSOLUTE_HOUR_TO_STOP),
            ("absoluteMinuteToStop", p::ABSOLUTE_MINUTE_TO_STOP),
        ])
        .resource("sleepTimer", r::SLEEP_TIMER, &[
            ("relativeHourToStop", p::SLEEP_TIMER_RELATIVE_HOUR_TO_STOP),
            ("relativeMinuteToStop", p::SLEEP_TIMER_RELATIVE_MINUTE_TO_STOP),
        ])
        .resource("airFlow", r::AIR_FLOW, &[
            ("warmMode", p::WARM_MODE),
            ("windTemperature", p::WIND_TEMPERATURE),
            ("windStrength", p::WIND_STRENGTH),
            ("windAngle", p::WIND_ANGLE),
        ])
        .resource("airQualitySensor", r::AIR_QUALITY_SENSOR, &[
            ("monitoringEnabled", p::MONITORING_ENABLED),
            ("PM1", p::PM1),
            ("PM2", p::PM2),
            ("PM10", p::PM10),
            ("humidity", p::HUMIDITY),
            ("temperature", p::TEMPERATURE),
            ("odor", p::ODOR),
            ("odorLevel", p::ODOR_LEVEL),
            ("totalPollution", p::TOTAL_POLLUTION),
            ("totalPollutionLevel", p::TOTAL_POLLUTION_LEVEL),
        ])
        .resource("display", r::DISPLAY, &[("light", p::DISPLAY_LIGHT)])
        .resource("misc", r::MISC, &[("uvNano", p::UV_NANO)])
        .with_setters(
            SetterTable::new()
                .enumerated(p::CURRENT_JOB_MODE)
                .enumerated(p::AIR_FAN_OPERATION_MODE)
                .enumerated(p::WARM_MODE)
                .plain(p::WIND_TEMPERATURE)
                .enumerated(p::WIND_STRENGTH)
                .enumerated(p::WIND_ANGLE)
                .enumerated(p::DISPLAY_LIGHT)
                .enumerated(p::UV_NANO)
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
