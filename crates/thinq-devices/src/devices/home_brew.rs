//! Home brewing machine. Read only.

use crate::error::DeviceResult;
use crate::mapping::{property as p, resource as r, ProfileMapping};

pub const KIND: &str = "home_brew";

pub fn mapping() -> DeviceResult<ProfileMapping> {
    ProfileMapping::builder(KIND)
        .resource("runState", r::RUN_STATE, &[("currentState", p::CURRENT_STATE)])
        .resource("recipe", r::RECIPE, &[
            ("beerRemain", p::BEER_REMAIN),
            ("flavorInfo", p::FLAVOR_INFO),
            ("flavorCapsule1", p::FLAVOR_CAPSULE_1),
            ("flavorCapsule2", p::FLAVOR_CAPSULE_2),
            ("hopOilInfo", p::HOP_OIL_INFO),
            ("hopOilCapsule1", p::HOP_OIL_CAPSULE_1),
            ("hopOilCapsule2", p::HOP_OIL_CAPSULE_2),
            ("wortInfo", p::WORT_INFO),
            ("yeastInfo", p::YEAST_INFO),
            ("recipeName", p::RECIPE_NAME),
        ])
        .resource("timer", r::TIMER, &[
            ("elapsedDayState", p::ELAPSED_DAY_STATE),
            ("elapsedDayTotal", p::ELAPSED_DAY_TOTAL),
        ])
        .build()
}
