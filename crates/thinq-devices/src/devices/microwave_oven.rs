use super::hood::fan_and_lamp;
use crate::error::DeviceResult;
use crate::mapping::{property as p, resource as r, ProfileMapping};

pub const KIND: &str = "microwave_oven";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    ProfileMapping::builder(KIND)
        .resource("runState", r::RUN_STATE, &[("currentState", p::CURRENT_STATE)])
        .resource("timer", r::TIMER, &[
            ("remainMinute", p::REMAIN_MINUTE),
            ("remainSecond", p::REMAIN_SECOND),
        ])
        .resource("ventilation", r::VENTILATION, &[("fanSpeed", p::FAN_SPEED)])
        .resource("lamp", r::LAMP, &[("lampBrightness", p::LAMP_BRIGHTNESS)])
        .with_setters(fan_and_lamp())
        .build()
}
