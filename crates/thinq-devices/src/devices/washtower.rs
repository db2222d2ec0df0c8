//! Washtower.
//!
//! The profile holds a complete washer profile under `washer` and a dryer
//! profile under `dryer`; status payloads are split the same way. Commands
//! of each half are wrapped in its section key.

use super::{dryer, washer};
use crate::command::LocationStyle;
use crate::error::DeviceResult;
use crate::location::{LocationLayout, LocationSource, LocationTag};
use crate::mapping::{Location, ProfileMapping};

pub const KIND: &str = "washtower";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    let layout = LocationLayout::new(LocationTag::Section, washer::unit_builder(true).build()?)
        .with_source(LocationSource::section("washer", Location::Washer))
        .with_source(LocationSource::section("dryer", Location::Dryer).with_mapping(dryer::mapping()?))
        .with_style(LocationStyle::Wrapped);

    ProfileMapping::builder(KIND)
        .sub_profile_only()
        .with_notification(false)
        .with_locations(layout)
        .build()
}
