//! Humidifier.
//!
//! `warmMode` sits under the `humidity` resource here, not under `airFlow`
//! as on the air purifier fan.

use crate::error::DeviceResult;
use crate::mapping::{property as p, resource as r, ProfileMapping};
use crate::setters::SetterTable;

pub const KIND: &str = "humidifier";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    ProfileMapping::builder(KIND)
        .resource("humidifierJobMode", r::HUMIDIFIER_JOB_MODE, &[("currentJobMode", p::CURRENT_JOB_MODE)])
        .resource("operation", r::OPERATION, &[
            ("humidifierOperationMode", p::HUMIDIFIER_OPERATION_MODE),
            ("autoMode", p::AUTO_MODE),
            ("sleepMode", p::SLEEP_MODE),
            ("hygieneDryMode", p::HYGIENE_DRY_MODE),
        ])
        .resource("timer", r::TIMER, &[
            ("absoluteHourToStart", p::ABSOLUTE_HOUR_TO_START),
            ("absoluteHourToStop", p::ABSOLUTE_HOUR_TO_STOP),
            ("absoluteMinuteToStart", p::ABSOLUTE_MINUTE_TO_START),
            ("absoluteMinuteToStop", p::ABSOLUTE_MINUTE_TO_STOP),
        ])
        .resource("sleepTimer", r::SLEEP_TIMER, &[
            ("relativeHourToStop", p::SLEEP_TIMER_RELATIVE_HOUR_TO_STOP),
            ("relativeMinuteToStop", p::SLEEP_TIMER_RELATIVE_MINUTE_TO_STOP),
        ])
        .resource("humidity", r::HUMIDITY, &[
            ("targetHumidity", p::TARGET_HUMIDITY),
            ("warmMode", p::WARM_MODE),
        ])
        .resource("airFlow", r::AIR_FLOW, &[("windStrength", p::WIND_STRENGTH)])
        .resource("airQualitySensor", r::AIR_QUALITY_SENSOR, &[
            ("monitoringEnabled", p::MONITORING_ENABLED),
            ("totalPollution", p::TOTAL_POLLUTION),
            ("totalPollutionLevel", p::TOTAL_POLLUTION_LEVEL),
            ("PM1", p::PM1),
            ("PM2", p::PM2),
            ("PM10", p::PM10),
            ("humidity", p::HUMIDITY),
            ("temperature", p::TEMPERATURE),
        ])
        .resource("display", r::DISPLAY, &[("light", p::DISPLAY_LIGHT)])
        .resource("moodLamp", r::MOOD_LAMP, &[("moodLampState", p::MOOD_LAMP_STATE)])
        .with_setters(
            SetterTable::new()
                .enumerated(p::CURRENT_JOB_MODE)
                .enumerated(p::HUMIDIFIER_OPERATION_MODE)
                .enumerated(p::AUTO_MODE)
                .enumerated(p::SLEEP_MODE)
                .enumerated(p::HYGIENE_DRY_MODE)
                .plain(p::TARGET_HUMIDITY)
                .enumerated(p::WARM_MODE)
                .enumerated(p::WIND_STRENGTH)
                .enumerated(p::DISPLAY_LIGHT)
                .enumerated(p::MOOD_LAMP_STATE)
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
