use crate::error::DeviceResult;
use crate::mapping::{property as p, resource as r, ProfileMapping};
use crate::setters::SetterTable;

pub const KIND: &str = "water_heater";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    ProfileMapping::builder(KIND)
        .resource("waterHeaterJobMode", r::WATER_HEATER_JOB_MODE, &[("currentJobMode", p::CURRENT_JOB_MODE)])
        .resource("operation", r::OPERATION, &[("waterHeaterOperationMode", p::WATER_HEATER_OPERATION_MODE)])
        .resource("temperature", r::TEMPERATURE, &[
            ("currentTemperature", p::CURRENT_TEMPERATURE),
            ("targetTemperature", p::TARGET_TEMPERATURE),
        ])
        .with_setters(
            SetterTable::new()
                .enumerated(p::CURRENT_JOB_MODE)
                .plain(p::TARGET_TEMPERATURE),
        )
        .build()
}
