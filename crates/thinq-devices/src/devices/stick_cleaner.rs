use crate::error::DeviceResult;
use crate::mapping::{property as p, resource as r, ProfileMapping};

pub const KIND: &str = "stick_cleaner";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    ProfileMapping::builder(KIND)
        .resource("runState", r::RUN_STATE, &[("currentState", p::CURRENT_STATE)])
        .resource("stickCleanerJobMode", r::STICK_CLEANER_JOB_MODE, &[("currentJobMode", p::CURRENT_JOB_MODE)])
        .resource("battery", r::BATTERY, &[
            ("level", p::BATTERY_LEVEL),
            ("percent", p::BATTERY_PERCENT),
        ])
        .build()
}
