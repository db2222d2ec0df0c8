use crate::error::DeviceResult;
use crate::mapping::{property as p, resource as r, ProfileMapping};
use crate::setters::SetterTable;

pub const KIND: &str = "system_boiler";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    ProfileMapping::builder(KIND)
        .resource("boilerJobMode", r::BOILER_JOB_MODE, &[("currentJobMode", p::CURRENT_JOB_MODE)])
        .resource("operation", r::OPERATION, &[
            ("boilerOperationMode", p::BOILER_OPERATION_MODE),
            ("hotWaterMode", p::HOT_WATER_MODE),
        ])
        .resource("temperature", r::TEMPERATURE, &[
            ("currentTemperature", p::CURRENT_TEMPERATURE),
            ("targetTemperature", p::TARGET_TEMPERATURE),
            ("heatTargetTemperature", p::HEAT_TARGET_TEMPERATURE),
            ("coolTargetTemperature", p::COOL_TARGET_TEMPERATURE),
            ("heatMaxTemperature", p::HEAT_MAX_TEMPERATURE),
            ("heatMinTemperature", p::HEAT_MIN_TEMPERATURE),
            ("coolMaxTemperature", p::COOL_MAX_TEMPERATURE),
            ("coolMinTemperature", p::COOL_MIN_TEMPERATURE),
            ("unit", p::TEMPERATURE_UNIT),
        ])
        .with_setters(
            SetterTable::new()
                .enumerated(p::BOILER_OPERATION_MODE)
                .enumerated(p::CURRENT_JOB_MODE)
                .enumerated(p::HOT_WATER_MODE)
                .plain(p::HEAT_TARGET_TEMPERATURE)
                .plain(p::COOL_TARGET_TEMPERATURE),
        )
        .build()
}
