use crate::error::DeviceResult;
use crate::mapping::{property as p, resource as r, ProfileMapping};
use crate::setters::SetterTable;

pub const KIND: &str = "robot_cleaner";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    ProfileMapping::builder(KIND)
        .resource("runState", r::RUN_STATE, &[("currentState", p::CURRENT_STATE)])
        .resource("robotCleanerJobMode", r::ROBOT_CLEANER_JOB_MODE, &[("currentJobMode", p::CURRENT_JOB_MODE)])
        .resource("operation", r::OPERATION, &[("cleanOperationMode", p::CLEAN_OPERATION_MODE)])
        .resource("battery", r::BATTERY, &[
            ("level", p::BATTERY_LEVEL),
            ("percent", p::BATTERY_PERCENT),
        ])
        .resource("timer", r::TIMER, &[
            ("absoluteHourToStart", p::ABSOLUTE_HOUR_TO_START),
            ("absoluteMinuteToStart", p::ABSOLUTE_MINUTE_TO_START),
            ("runningHour", p::RUNNING_HOUR),
            ("runningMinute", p::RUNNING_MINUTE),
        ])
        .with_setters(
            SetterTable::new()
                .enumerated(p::CLEAN_OPERATION_MODE)
                .group_omitting_zero(
                    "absolute_time_to_start",
                    &[p::ABSOLUTE_HOUR_TO_START, p::ABSOLUTE_MINUTE_TO_START],
                    p::ABSOLUTE_MINUTE_TO_START,
                ),
        )
        .build()
}
