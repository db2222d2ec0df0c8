//! Washer.
//!
//! A washer has no properties of its own. Stacked units report a `property`
//! list with `MAIN` and `MINI` records; single-unit washers report one
//! untagged object, resolved as the `MAIN` unit.

use crate::command::LocationStyle;
use crate::error::DeviceResult;
use crate::location::{LocationLayout, LocationSource, LocationTag};
use crate::mapping::{property as p, resource as r, Location, ProfileMapping, ProfileMappingBuilder};
use crate::setters::SetterTable;

pub const KIND: &str = "washer";
pub const UNIT_KIND: &str = "washer_unit";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    let layout = LocationLayout::new(LocationTag::Nested, unit_builder(false).build()?)
        .with_source(LocationSource::property_list(&[
            ("MAIN", Location::Main),
            ("MINI", Location::Mini),
        ]))
        .with_style(LocationStyle::TopLevel)
        .accepting_unscoped();

    ProfileMapping::builder(KIND)
        .sub_profile_only()
        .with_locations(layout)
        .build()
}

/// One washing unit. Units of stacked washers leave notifications to the
/// parent; washtower and washcombo units report their own.
pub(crate) fn unit_builder(notification: bool) -> ProfileMappingBuilder {
    ProfileMapping::builder(UNIT_KIND)
        .resource("runState", r::RUN_STATE, &[("currentState", p::CURRENT_STATE)])
        .resource("operation", r::OPERATION, &[("washerOperationMode", p::WASHER_OPERATION_MODE)])
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
        .resource("detergent", r::DETERGENT, &[("detergentSetting", p::DETERGENT_SETTING)])
        .resource("cycle", r::CYCLE, &[("cycleCount", p::CYCLE_COUNT)])
        .with_notification(notification)
        .with_setters(
            SetterTable::new()
                .enumerated(p::WASHER_OPERATION_MODE)
                .range(p::RELATIVE_HOUR_TO_START)
                .range(p::RELATIVE_HOUR_TO_STOP),
        )
}
