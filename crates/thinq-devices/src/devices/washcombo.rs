//! Washcombo units.
//!
//! Each half of a washcombo is listed as its own device, bound to the `MAIN`
//! or `MINI` location of a washer profile. Status records of the other half
//! are ignored and every command names the unit's location.

use super::washer;
use crate::command::LocationStyle;
use crate::error::DeviceResult;
use crate::location::{LocationScope, LocationTag};
use crate::mapping::ProfileMapping;

pub const MAIN: &str = "MAIN";
pub const MINI: &str = "MINI";

pub fn mapping(location_key: &str) -> DeviceResult<ProfileMapping> {
    washer::unit_builder(true)
        .bound_to(LocationScope::unit(location_key, LocationTag::Nested, LocationStyle::TopLevel))
        .build()
}
