use crate::error::DeviceResult;
use crate::mapping::{property as p, resource as r, ProfileMapping};
use crate::setters::SetterTable;

pub const KIND: &str = "air_purifier";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    ProfileMapping::builder(KIND)
        .resource("airPurifierJobMode", r::AIR_PURIFIER_JOB_MODE, &[
            ("currentJobMode", p::CURRENT_JOB_MODE),
            ("personalizationMode", p::PERSONALIZATION_MODE),
        ])
        .resource("operation", r::OPERATION, &[("airPurifierOperationMode", p::AIR_PURIFIER_OPERATION_MODE)])
        .resource("timer", r::TIMER, &[
            ("absoluteHourToStart", p::ABSOLUTE_HOUR_TO_START),
            ("absoluteMinuteToStart", p::ABSOLUTE_MINUTE_TO_START),
            ("absoluteHourToStop", p::ABSOLUTE_HOUR_TO_STOP),
            ("absoluteMinuteToStop", p::ABSOLUTE_MINUTE_TO_STOP),
        ])
        .resource("airFlow", r::AIR_FLOW, &[("windStrength", p::WIND_STRENGTH)])
        .resource("airQualitySensor", r::AIR_QUALITY_SENSOR, &[
            ("monitoringEnabled", p::MONITORING_ENABLED),
            ("PM1", p::PM1),
            ("PM2", p::PM2),
            ("PM10", p::PM10),
            ("odor", p::ODOR),
            ("odorLevel", p::ODOR_LEVEL),
            ("humidity", p::HUMIDITY),
            ("totalPollution", p::TOTAL_POLLUTION),
            ("totalPollutionLevel", p::TOTAL_POLLUTION_LEVEL),
        ])
        .resource("filterInfo", r::FILTER_INFO, &[("filterRemainPercent", p::FILTER_REMAIN_PERCENT)])
        .with_setters(
            SetterTable::new()
                .enumerated(p::CURRENT_JOB_MODE)
                .enumerated(p::AIR_PURIFIER_OPERATION_MODE)
                .enumerated(p::WIND_STRENGTH)
                .group("absolute_time_to_start", &[p::ABSOLUTE_HOUR_TO_START, p::ABSOLUTE_MINUTE_TO_START])
                .group("absolute_time_to_stop", &[p::ABSOLUTE_HOUR_TO_STOP, p::ABSOLUTE_MINUTE_TO_STOP]),
        )
        .build()
}
