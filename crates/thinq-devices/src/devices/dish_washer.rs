use crate::error::DeviceResult;
use crate::mapping::{property as p, resource as r, ProfileMapping};
use crate::setters::SetterTable;

pub const KIND: &str = "dish_washer";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    ProfileMapping::builder(KIND)
        .resource("runState", r::RUN_STATE, &[("currentState", p::CURRENT_STATE)])
        .resource("dishWashingStatus", r::DISH_WASHING_STATUS, &[("rinseRefill", p::RINSE_REFILL)])
        .resource("preference", r::PREFERENCE, &[
            ("rinseLevel", p::RINSE_LEVEL),
            ("softeningLevel", p::SOFTENING_LEVEL),
            ("mCReminder", p::MACHINE_CLEAN_REMINDER),
            ("signalLevel", p::SIGNAL_LEVEL),
            ("cleanLReminder", p::CLEAN_LIGHT_REMINDER),
        ])
        .resource("doorStatus", r::DOOR_STATUS, &[("doorState", p::DOOR_STATE)])
        .resource("operation", r::OPERATION, &[
            ("dishWasherOperationMode", p::DISH_WASHER_OPERATION_MODE),
        ])
        .resource("remoteControlEnable", r::REMOTE_CONTROL_ENABLE, &[
            ("remoteControlEnabled", p::REMOTE_CONTROL_ENABLED),
        ])
        .resource("timer", r::TIMER, &[
            ("relativeHourToStart", p::RELATIVE_HOUR_TO_START),
            ("relativeMinuteToStart", p::RELATIVE_MINUTE_TO_START),
            ("remainHour", p::REMAIN_HOUR),
            ("remainMinute", p::REMAIN_MINUTE),
            ("totalHour", p::TOTAL_HOUR),
            ("totalMinute", p::TOTAL_MINUTE),
        ])
        .resource("dishWashingCourse", r::DISH_WASHING_COURSE, &[
            ("currentDishWashingCourse", p::CURRENT_DISH_WASHING_COURSE),
        ])
        .with_setters(
            SetterTable::new()
                .enumerated(p::DISH_WASHER_OPERATION_MODE)
                .plain(p::RELATIVE_HOUR_TO_START),
        )
        .build()
}
