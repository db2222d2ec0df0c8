use crate::error::DeviceResult;
use crate::mapping::{property as p, resource as r, ProfileMapping};
use crate::setters::SetterTable;

pub const KIND: &str = "dehumidifier";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    ProfileMapping::builder(KIND)
        .resource("operation", r::OPERATION, &[("dehumidifierOperationMode", p::DEHUMIDIFIER_OPERATION_MODE)])
        .resource("dehumidifierJobMode", r::DEHUMIDIFIER_JOB_MODE, &[("currentJobMode", p::CURRENT_JOB_MODE)])
        .resource("humidity", r::HUMIDITY, &[("currentHumidity", p::CURRENT_HUMIDITY)])
        .resource("airFlow", r::AIR_FLOW, &[("windStrength", p::WIND_STRENGTH)])
        .with_setters(
            SetterTable::new()
                .enumerated(p::DEHUMIDIFIER_OPERATION_MODE)
                .enumerated(p::WIND_STRENGTH),
        )
        .build()
}
