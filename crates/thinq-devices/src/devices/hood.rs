//! Range hood.
//!
//! Fan speed and lamp brightness are always written together: changing one
//! re-sends the current value of the other.

use crate::error::DeviceResult;
use crate::mapping::{property as p, resource as r, ProfileMapping};
use crate::setters::SetterTable;

pub const KIND: &str = "hood";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    ProfileMapping::builder(KIND)
        .resource("ventilation", r::VENTILATION, &[("fanSpeed", p::FAN_SPEED)])
        .resource("lamp", r::LAMP, &[("lampBrightness", p::LAMP_BRIGHTNESS)])
        .resource("operation", r::OPERATION, &[("hoodOperationMode", p::HOOD_OPERATION_MODE)])
        .resource("timer", r::TIMER, &[
            ("remainMinute", p::REMAIN_MINUTE),
            ("remainSecond", p::REMAIN_SECOND),
        ])
        .with_setters(fan_and_lamp())
        .build()
}

/// Setters shared with the over-the-range microwave.
pub(crate) fn fan_and_lamp() -> SetterTable {
    SetterTable::new()
        .paired(p::FAN_SPEED, &[p::LAMP_BRIGHTNESS])
        .paired(p::LAMP_BRIGHTNESS, &[p::FAN_SPEED])
}
