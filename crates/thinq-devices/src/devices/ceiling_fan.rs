use crate::error::DeviceResult;
use crate::mapping::{property as p, resource as r, ProfileMapping};
use crate::setters::SetterTable;

pub const KIND: &str = "ceiling_fan";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    ProfileMapping::builder(KIND)
        .resource("airFlow", r::AIR_FLOW, &[("windStrength", p::WIND_STRENGTH)])
        .resource("operation", r::OPERATION, &[("ceilingfanOperationMode", p::CEILING_FAN_OPERATION_MODE)])
        .with_setters(
            SetterTable::new()
                .enumerated(p::WIND_STRENGTH)
                .enumerated(p::CEILING_FAN_OPERATION_MODE),
        )
        .build()
}
