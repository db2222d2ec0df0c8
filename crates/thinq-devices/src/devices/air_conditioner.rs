//! Air conditioner.

use crate::error::DeviceResult;
use crate::mapping::{property as p, resource as r, ProfileMapping};
use crate::setters::SetterTable;

pub const KIND: &str = "air_conditioner";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    ProfileMapping::builder(KIND)
        .resource("airConJobMode", r::AIR_CON_JOB_MODE, &[("currentJobMode", p::CURRENT_JOB_MODE)])
        .resource("operation", r::OPERATION, &[
            ("airConOperationMode", p::AIR_CON_OPERATION_MODE),
            ("airCleanOperationMode", p::AIR_CLEAN_OPERATION_MODE),
        ])
        .resource("temperature", r::TEMPERATURE, &[
            ("currentTemperature", p::CURRENT_TEMPERATURE),
            ("targetTemperature", p::TARGET_TEMPERATURE),
            ("heatTargetTemperature", p::HEAT_TARGET_TEMPERATURE),
            ("coolTargetTemperature", p::COOL_TARGET_TEMPERATURE),
            ("unit", p::TEMPERATURE_UNIT),
        ])
        .resource("twoSetTemperature", r::TWO_SET_TEMPERATURE, &[
            ("currentTemperature", p::TWO_SET_CURRENT_TEMPERATURE),
            ("heatTargetTemperature", p::TWO_SET_HEAT_TARGET_TEMPERATURE),
            ("coolTargetTemperature", p::TWO_SET_COOL_TARGET_TEMPERATURE),
            ("unit", p::TWO_SET_TEMPERATURE_UNIT),
        ])
        .resource("timer", r::TIMER, &[
            ("relativeHourToStart", p::RELATIVE_HOUR_TO_START),
            ("relativeMinuteToStart", p::RELATIVE_MINUTE_TO_START),
            ("relativeHourToStop", p::RELATIVE_HOUR_TO_STOP),
            ("relativeMinuteToStop", p::RELATIVE_MINUTE_TO_STOP),
            ("absoluteHourToStart", p::ABSOLUTE_HOUR_TO_START),
            ("absoluteMinuteToStart", p::ABSOLUTE_MINUTE_TO_START),
            ("absoluteHourToStop", p::ABSOLUTE_HOUR_TO_STOP),
            ("absoluteMinuteToStop", p::ABSOLUTE_MINUTE_TO_STOP),
        ])
        .resource("sleepTimer", r::SLEEP_TIMER, &[
            ("relativeHourToStop", p::SLEEP_TIMER_RELATIVE_HOUR_TO_STOP),
            ("relativeMinuteToStop", p::SLEEP_TIMER_RELATIVE_MINUTE_TO_STOP),
        ])
        .resource("powerSave", r::POWER_SAVE, &[("powerSaveEnabled", p::POWER_SAVE_ENABLED)])
        .resource("airFlow", r::AIR_FLOW, &[
            ("windStrength", p::WIND_STRENGTH),
            ("windStep", p::WIND_STEP),
        ])
        .resource("airQualitySensor", r::AIR_QUALITY_SENSOR, &[
            ("PM1", p::PM1),
            ("PM2", p::PM2),
            ("PM10", p::PM10),
            ("odor", p::ODOR),
            ("odorLevel", p::ODOR_LEVEL),
            ("humidity", p::HUMIDITY),
            ("totalPollution", p::TOTAL_POLLUTION),
            ("totalPollutionLevel", p::TOTAL_POLLUTION_LEVEL),
            ("monitoringEnabled", p::MONITORING_ENABLED),
        ])
        .resource("filterInfo", r::FILTER_INFO, &[
            ("usedTime", p::USED_TIME),
            ("filterLifetime", p::FILTER_LIFETIME),
            ("filterRemainPercent", p::FILTER_REMAIN_PERCENT),
        ])
        .with_setters(setters())
        .build()
}

fn setters() -> SetterTable {
    SetterTable::new()
        .enumerated(p::CURRENT_JOB_MODE)
        .enumerated(p::AIR_CON_OPERATION_MODE)
        .enumerated(p::AIR_CLEAN_OPERATION_MODE)
        .range(p::TARGET_TEMPERATURE)
        .range(p::HEAT_TARGET_TEMPERATURE)
        .range(p::COOL_TARGET_TEMPERATURE)
        // the server expects both two-set targets in one write
        .paired(p::TWO_SET_HEAT_TARGET_TEMPERATURE, &[p::TWO_SET_COOL_TARGET_TEMPERATURE])
        .paired(p::TWO_SET_COOL_TARGET_TEMPERATURE, &[p::TWO_SET_HEAT_TARGET_TEMPERATURE])
        .group("relative_time_to_start", &[p::RELATIVE_HOUR_TO_START, p::RELATIVE_MINUTE_TO_START])
        .group_omitting_zero(
            "relative_time_to_stop",
            &[p::RELATIVE_HOUR_TO_STOP, p::RELATIVE_MINUTE_TO_STOP],
            p::RELATIVE_MINUTE_TO_STOP,
        )
        .group("absolute_time_to_start", &[p::ABSOLUTE_HOUR_TO_START, p::ABSOLUTE_MINUTE_TO_START])
        .group("absolute_time_to_stop", &[p::ABSOLUTE_HOUR_TO_STOP, p::ABSOLUTE_MINUTE_TO_STOP])
        .group(
            "sleep_timer_relative_time_to_stop",
            &[p::SLEEP_TIMER_RELATIVE_HOUR_TO_STOP, p::SLEEP_TIMER_RELATIVE_MINUTE_TO_STOP],
        )
        .plain(p::POWER_SAVE_ENABLED)
        .enumerated(p::WIND_STRENGTH)
        .range(p::WIND_STEP)
        .enumerated(p::MONITORING_ENABLED)
}
