//! Water purifier. Read only.

use crate::error::DeviceResult;
use crate::mapping::{property as p, resource as r, ProfileMapping};

pub const KIND: &str = "water_purifier";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    ProfileMapping::builder(KIND)
        .resource("runState", r::RUN_STATE, &[
            ("cockState", p::COCK_STATE),
            ("sterilizingState", p::STERILIZING_STATE),
        ])
        .resource("waterInfo", r::WATER_INFO, &[("waterType", p::WATER_TYPE)])
        .build()
}
