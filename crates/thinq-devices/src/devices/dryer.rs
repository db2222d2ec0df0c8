use crate::error::DeviceResult;
use crate::mapping::{property as p, resource as r, ProfileMapping};
use crate::setters::SetterTable;

pub const KIND: &str = "dryer";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    ProfileMapping::builder(KIND)
        .resource("runState", r::RUN_STATE, &[("currentState", p::CURRENT_STATE)])
        .resource("operation", r::OPERATION, &[("dryerOperationMode", p::DRYER_OPERATION_MODE)])
        .resource("remoteControlEnable", r::REMOTE_CONTROL_ENABLE, &[
            ("remoteControlEnabled", p::REMOTE_CONTROL_ENABLED),
        ])
        .resource("timer", r::TIMER, &[
            ("remainHour", p::REMAIN_HOUR),
            ("remainMinute", p::REMAIN_MINUTE),
            ("totalHour", p::TOTAL_HOUR),
            ("totalMinute", p::TOTAL_MINUTE),
            ("relativeHourToStop", p::RELATIVE_HOUR_TO_STOP),
            ("relativeMinuteToStop", p::RELATIVE_MINUTE_TO_STOP),
            ("relativeHourToStart", p::RELATIVE_HOUR_TO_START),
            ("relativeMinuteToStart", p::RELATIVE_MINUTE_TO_START),
        ])
        .with_setters(
            SetterTable::new()
                .enumerated(p::DRYER_OPERATION_MODE)
                .plain(p::RELATIVE_HOUR_TO_START)
                .range(p::RELATIVE_HOUR_TO_STOP),
        )
        .build()
}
