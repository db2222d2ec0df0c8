//! Declarative resource/property mapping tables.
//!
//! A [`ProfileMapping`] is the static description of one device type (or of one
//! location of a multi-zone device type): which vendor resource keys it reads,
//! which canonical resource each key stands for, and which canonical property
//! each vendor sub-key maps to.
//!
//! ```text
//! vendor profile                     ProfileMapping
//! ├─ "operation"         ──────→     operation
//! │   └─ "airConOperationMode" ─→        └─ air_con_operation_mode
//! └─ "temperature"       ──────→     temperature
//!     ├─ "targetTemperature" ───→        ├─ target_temperature
//!     └─ "unit"          ──────→         └─ temperature_unit
//! ```
//!
//! Unmapped vendor resources are ignored. A canonical property must appear
//! under exactly one resource; the only exception is a custom resource that
//! maps mutually exclusive unit variants onto the same property.

use crate::error::{DeviceError, DeviceResult};
use crate::location::{LocationLayout, LocationScope};
use crate::setters::SetterTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Canonical resource identifiers.
pub mod resource {
    pub const AIR_CON_JOB_MODE: &str = "air_con_job_mode";
    pub const AIR_FAN_JOB_MODE: &str = "air_fan_job_mode";
    pub const AIR_FLOW: &str = "air_flow";
    pub const AIR_PURIFIER_JOB_MODE: &str = "air_purifier_job_mode";
    pub const AIR_QUALITY_SENSOR: &str = "air_quality_sensor";
    pub const BATTERY: &str = "battery";
    pub const BOILER_JOB_MODE: &str = "boiler_job_mode";
    pub const COOK: &str = "cook";
    pub const COOKING_ZONE: &str = "cooking_zone";
    pub const CYCLE: &str = "cycle";
    pub const DEHUMIDIFIER_JOB_MODE: &str = "dehumidifier_job_mode";
    pub const DETERGENT: &str = "detergent";
    pub const DISH_WASHING_COURSE: &str = "dish_washing_course";
    pub const DISH_WASHING_STATUS: &str = "dish_washing_status";
    pub const DISPLAY: &str = "display";
    pub const DOOR_STATUS: &str = "door_status";
    pub const ECO_FRIENDLY: &str = "eco_friendly";
    pub const FILTER_INFO: &str = "filter_info";
    pub const HUMIDIFIER_JOB_MODE: &str = "humidifier_job_mode";
    pub const HUMIDITY: &str = "humidity";
    pub const INFO: &str = "info";
    pub const LAMP: &str = "lamp";
    pub const LIGHT: &str = "light";
    pub const MISC: &str = "misc";
    pub const MOOD_LAMP: &str = "mood_lamp";
    pub const OPERATION: &str = "operation";
    pub const POWER: &str = "power";
    pub const POWER_SAVE: &str = "power_save";
    pub const PREFERENCE: &str = "preference";
    pub const RECIPE: &str = "recipe";
    pub const REFRIGERATION: &str = "refrigeration";
    pub const REMOTE_CONTROL_ENABLE: &str = "remote_control_enable";
    pub const ROBOT_CLEANER_JOB_MODE: &str = "robot_cleaner_job_mode";
    pub const RUN_STATE: &str = "run_state";
    pub const SABBATH: &str = "sabbath";
    pub const SLEEP_TIMER: &str = "sleep_timer";
    pub const STICK_CLEANER_JOB_MODE: &str = "stick_cleaner_job_mode";
    pub const TEMPERATURE: &str = "temperature";
    pub const TIMER: &str = "timer";
    pub const TWO_SET_TEMPERATURE: &str = "two_set_temperature";
    pub const VENTILATION: &str = "ventilation";
    pub const VENTILATOR_JOB_MODE: &str = "ventilator_job_mode";
    pub const WATER_FILTER_INFO: &str = "water_filter_info";
    pub const WATER_HEATER_JOB_MODE: &str = "water_heater_job_mode";
    pub const WATER_INFO: &str = "water_info";
}

/// Canonical property identifiers.
pub mod property {
    // job modes and operations
    pub const CURRENT_JOB_MODE: &str = "current_job_mode";
    pub const CURRENT_STATE: &str = "current_state";
    pub const AIR_CON_OPERATION_MODE: &str = "air_con_operation_mode";
    pub const AIR_CLEAN_OPERATION_MODE: &str = "air_clean_operation_mode";
    pub const BOILER_OPERATION_MODE: &str = "boiler_operation_mode";
    pub const HOT_WATER_MODE: &str = "hot_water_mode";
    pub const DISH_WASHER_OPERATION_MODE: &str = "dish_washer_operation_mode";
    pub const DRYER_OPERATION_MODE: &str = "dryer_operation_mode";
    pub const WASHER_OPERATION_MODE: &str = "washer_operation_mode";
    pub const OVEN_OPERATION_MODE: &str = "oven_operation_mode";
    pub const VENTILATOR_OPERATION_MODE: &str = "ventilator_operation_mode";
    pub const OPERATION_MODE: &str = "operation_mode";
    pub const COOK_MODE: &str = "cook_mode";
    pub const OVEN_TYPE: &str = "oven_type";
    pub const REMOTE_CONTROL_ENABLED: &str = "remote_control_enabled";
    pub const POWER_LEVEL: &str = "power_level";
    pub const DOOR_STATE: &str = "door_state";
    pub const PERSONALIZATION_MODE: &str = "personalization_mode";
    pub const AIR_PURIFIER_OPERATION_MODE: &str = "air_purifier_operation_mode";
    pub const AIR_FAN_OPERATION_MODE: &str = "air_fan_operation_mode";
    pub const CEILING_FAN_OPERATION_MODE: &str = "ceiling_fan_operation_mode";
    pub const DEHUMIDIFIER_OPERATION_MODE: &str = "dehumidifier_operation_mode";
    pub const HUMIDIFIER_OPERATION_MODE: &str = "humidifier_operation_mode";
    pub const AUTO_MODE: &str = "auto_mode";
    pub const SLEEP_MODE: &str = "sleep_mode";
    pub const HYGIENE_DRY_MODE: &str = "hygiene_dry_mode";
    pub const HOOD_OPERATION_MODE: &str = "hood_operation_mode";
    pub const CLEAN_OPERATION_MODE: &str = "clean_operation_mode";
    pub const STYLER_OPERATION_MODE: &str = "styler_operation_mode";
    pub const WATER_HEATER_OPERATION_MODE: &str = "water_heater_operation_mode";

    // temperatures
    pub const CURRENT_TEMPERATURE: &str = "current_temperature";
    pub const TARGET_TEMPERATURE: &str = "target_temperature";
    pub const HEAT_TARGET_TEMPERATURE: &str = "heat_target_temperature";
    pub const COOL_TARGET_TEMPERATURE: &str = "cool_target_temperature";
    pub const HEAT_MAX_TEMPERATURE: &str = "heat_max_temperature";
    pub const HEAT_MIN_TEMPERATURE: &str = "heat_min_temperature";
    pub const COOL_MAX_TEMPERATURE: &str = "cool_max_temperature";
    pub const COOL_MIN_TEMPERATURE: &str = "cool_min_temperature";
    pub const TEMPERATURE_UNIT: &str = "temperature_unit";
    pub const TARGET_TEMPERATURE_C: &str = "target_temperature_c";
    pub const TARGET_TEMPERATURE_F: &str = "target_temperature_f";
    pub const TWO_SET_CURRENT_TEMPERATURE: &str = "two_set_current_temperature";
    pub const TWO_SET_HEAT_TARGET_TEMPERATURE: &str = "two_set_heat_target_temperature";
    pub const TWO_SET_COOL_TARGET_TEMPERATURE: &str = "two_set_cool_target_temperature";
    pub const TWO_SET_TEMPERATURE_UNIT: &str = "two_set_temperature_unit";
    pub const TEMPERATURE: &str = "temperature";
    pub const DAY_TARGET_TEMPERATURE: &str = "day_target_temperature";
    pub const NIGHT_TARGET_TEMPERATURE: &str = "night_target_temperature";
    pub const TEMPERATURE_STATE: &str = "temperature_state";

    // timers
    pub const REMAIN_HOUR: &str = "remain_hour";
    pub const REMAIN_MINUTE: &str = "remain_minute";
    pub const REMAIN_SECOND: &str = "remain_second";
    pub const TARGET_HOUR: &str = "target_hour";
    pub const TARGET_MINUTE: &str = "target_minute";
    pub const TARGET_SECOND: &str = "target_second";
    pub const TIMER_HOUR: &str = "timer_hour";
    pub const TIMER_MINUTE: &str = "timer_minute";
    pub const TIMER_SECOND: &str = "timer_second";
    pub const TOTAL_HOUR: &str = "total_hour";
    pub const TOTAL_MINUTE: &str = "total_minute";
    pub const RELATIVE_HOUR_TO_START: &str = "relative_hour_to_start";
    pub const RELATIVE_MINUTE_TO_START: &str = "relative_minute_to_start";
    pub const RELATIVE_HOUR_TO_STOP: &str = "relative_hour_to_stop";
    pub const RELATIVE_MINUTE_TO_STOP: &str = "relative_minute_to_stop";
    pub const ABSOLUTE_HOUR_TO_START: &str = "absolute_hour_to_start";
    pub const ABSOLUTE_MINUTE_TO_START: &str = "absolute_minute_to_start";
    pub const ABSOLUTE_HOUR_TO_STOP: &str = "absolute_hour_to_stop";
    pub const ABSOLUTE_MINUTE_TO_STOP: &str = "absolute_minute_to_stop";
    pub const SLEEP_TIMER_RELATIVE_HOUR_TO_STOP: &str = "sleep_timer_relative_hour_to_stop";
    pub const SLEEP_TIMER_RELATIVE_MINUTE_TO_STOP: &str = "sleep_timer_relative_minute_to_stop";
    pub const RUNNING_HOUR: &str = "running_hour";
    pub const RUNNING_MINUTE: &str = "running_minute";
    pub const ELAPSED_DAY_STATE: &str = "elapsed_day_state";
    pub const ELAPSED_DAY_TOTAL: &str = "elapsed_day_total";

    // air
    pub const POWER_SAVE_ENABLED: &str = "power_save_enabled";
    pub const WIND_STRENGTH: &str = "wind_strength";
    pub const WIND_STEP: &str = "wind_step";
    pub const PM1: &str = "pm1";
    pub const PM2: &str = "pm2";
    pub const PM10: &str = "pm10";
    pub const CO2: &str = "co2";
    pub const ODOR: &str = "odor";
    pub const ODOR_LEVEL: &str = "odor_level";
    pub const HUMIDITY: &str = "humidity";
    pub const TOTAL_POLLUTION: &str = "total_pollution";
    pub const TOTAL_POLLUTION_LEVEL: &str = "total_pollution_level";
    pub const MONITORING_ENABLED: &str = "monitoring_enabled";
    pub const USED_TIME: &str = "used_time";
    pub const FILTER_LIFETIME: &str = "filter_lifetime";
    pub const FILTER_REMAIN_PERCENT: &str = "filter_remain_percent";
    pub const WARM_MODE: &str = "warm_mode";
    pub const WIND_TEMPERATURE: &str = "wind_temperature";
    pub const WIND_ANGLE: &str = "wind_angle";
    pub const WIND_VOLUME: &str = "wind_volume";
    pub const DISPLAY_LIGHT: &str = "display_light";
    pub const UV_NANO: &str = "uv_nano";
    pub const CURRENT_HUMIDITY: &str = "current_humidity";
    pub const TARGET_HUMIDITY: &str = "target_humidity";
    pub const MOOD_LAMP_STATE: &str = "mood_lamp_state";
    pub const FAN_SPEED: &str = "fan_speed";
    pub const LAMP_BRIGHTNESS: &str = "lamp_brightness";

    // refrigeration
    pub const ECO_FRIENDLY_MODE: &str = "eco_friendly_mode";
    pub const SABBATH_MODE: &str = "sabbath_mode";
    pub const RAPID_FREEZE: &str = "rapid_freeze";
    pub const EXPRESS_MODE: &str = "express_mode";
    pub const EXPRESS_MODE_NAME: &str = "express_mode_name";
    pub const EXPRESS_FRIDGE: &str = "express_fridge";
    pub const FRESH_AIR_FILTER: &str = "fresh_air_filter";
    pub const WATER_FILTER_INFO_UNIT: &str = "water_filter_info_unit";
    pub const LIGHT_BRIGHTNESS: &str = "light_brightness";
    pub const OPTIMAL_HUMIDITY: &str = "optimal_humidity";
    pub const LIGHT_STATUS: &str = "light_status";
    pub const ONE_TOUCH_FILTER: &str = "one_touch_filter";

    // cleaning and care
    pub const BATTERY_LEVEL: &str = "battery_level";
    pub const BATTERY_PERCENT: &str = "battery_percent";
    pub const COCK_STATE: &str = "cock_state";
    pub const STERILIZING_STATE: &str = "sterilizing_state";
    pub const WATER_TYPE: &str = "water_type";

    // cultivation and brewing
    pub const GROWTH_MODE: &str = "growth_mode";
    pub const BRIGHTNESS: &str = "brightness";
    pub const DURATION: &str = "duration";
    pub const START_HOUR: &str = "start_hour";
    pub const START_MINUTE: &str = "start_minute";
    pub const BEER_REMAIN: &str = "beer_remain";
    pub const FLAVOR_INFO: &str = "flavor_info";
    pub const FLAVOR_CAPSULE_1: &str = "flavor_capsule_1";
    pub const FLAVOR_CAPSULE_2: &str = "flavor_capsule_2";
    pub const HOP_OIL_INFO: &str = "hop_oil_info";
    pub const HOP_OIL_CAPSULE_1: &str = "hop_oil_capsule_1";
    pub const HOP_OIL_CAPSULE_2: &str = "hop_oil_capsule_2";
    pub const WORT_INFO: &str = "wort_info";
    pub const YEAST_INFO: &str = "yeast_info";
    pub const RECIPE_NAME: &str = "recipe_name";

    // washing
    pub const DETERGENT_SETTING: &str = "detergent_setting";
    pub const CYCLE_COUNT: &str = "cycle_count";
    pub const RINSE_REFILL: &str = "rinse_refill";
    pub const RINSE_LEVEL: &str = "rinse_level";
    pub const SOFTENING_LEVEL: &str = "softening_level";
    pub const MACHINE_CLEAN_REMINDER: &str = "machine_clean_reminder";
    pub const SIGNAL_LEVEL: &str = "signal_level";
    pub const CLEAN_LIGHT_REMINDER: &str = "clean_light_reminder";
    pub const CURRENT_DISH_WASHING_COURSE: &str = "current_dish_washing_course";

    // pseudo properties
    pub const ERROR: &str = "error";
    pub const NOTIFICATION: &str = "notification";
    /// Location tags inside a fragment, never copied into state.
    pub const LOCATION_NAME: &str = "location_name";
}

/// Physical zone of a multi-zone appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Main,
    Mini,
    Oven,
    Upper,
    Middle,
    Lower,
    Fridge,
    Freezer,
    Convertible,
    Top,
    Bottom,
    Left,
    Right,
    Single,
    Washer,
    Dryer,
    Center,
    CenterFront,
    CenterRear,
    LeftFront,
    LeftRear,
    RightFront,
    RightRear,
    #[serde(rename = "burner_1")]
    Burner1,
    #[serde(rename = "burner_2")]
    Burner2,
    #[serde(rename = "burner_3")]
    Burner3,
    #[serde(rename = "burner_4")]
    Burner4,
    #[serde(rename = "burner_5")]
    Burner5,
    #[serde(rename = "burner_6")]
    Burner6,
    #[serde(rename = "burner_7")]
    Burner7,
    #[serde(rename = "burner_8")]
    Burner8,
    #[serde(rename = "induction_1")]
    Induction1,
    #[serde(rename = "induction_2")]
    Induction2,
    #[serde(rename = "sousvide_1")]
    Sousvide1,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Mini => "mini",
            Self::Oven => "oven",
            Self::Upper => "upper",
            Self::Middle => "middle",
            Self::Lower => "lower",
            Self::Fridge => "fridge",
            Self::Freezer => "freezer",
            Self::Convertible => "convertible",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Single => "single",
            Self::Washer => "washer",
            Self::Dryer => "dryer",
            Self::Center => "center",
            Self::CenterFront => "center_front",
            Self::CenterRear => "center_rear",
            Self::LeftFront => "left_front",
            Self::LeftRear => "left_rear",
            Self::RightFront => "right_front",
            Self::RightRear => "right_rear",
            Self::Burner1 => "burner_1",
            Self::Burner2 => "burner_2",
            Self::Burner3 => "burner_3",
            Self::Burner4 => "burner_4",
            Self::Burner5 => "burner_5",
            Self::Burner6 => "burner_6",
            Self::Burner7 => "burner_7",
            Self::Burner8 => "burner_8",
            Self::Induction1 => "induction_1",
            Self::Induction2 => "induction_2",
            Self::Sousvide1 => "sousvide_1",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One vendor resource key and the properties read from it.
#[derive(Debug, Clone)]
pub struct ResourceMapping {
    /// Vendor resource key, e.g. `airConJobMode`.
    pub key: String,
    /// Canonical resource identifier.
    pub resource: String,
    /// Vendor sub-key to canonical property, in declaration order.
    pub properties: Vec<(String, String)>,
    /// Irregular shape resolved by a registered hook instead of the generic path.
    pub custom: bool,
}

impl ResourceMapping {
    pub fn property_for(&self, sub_key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key == sub_key)
            .map(|(_, prop)| prop.as_str())
    }

    pub fn sub_key_for(&self, property: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(_, prop)| prop == property)
            .map(|(key, _)| key.as_str())
    }

    pub fn declares(&self, property: &str) -> bool {
        self.sub_key_for(property).is_some()
    }
}

/// Where and how the profile document is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileOptions {
    /// Read resources from `extensionProperty` instead of `property`.
    pub use_extension_property: bool,
    /// The main profile has no properties of its own, only sub-profiles.
    pub use_sub_profile_only: bool,
    /// Expose `notification.push` as a read-only enum.
    pub use_notification: bool,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            use_extension_property: false,
            use_sub_profile_only: false,
            use_notification: true,
        }
    }
}

impl ProfileOptions {
    pub fn property_section(&self) -> &'static str {
        if self.use_extension_property {
            "extensionProperty"
        } else {
            "property"
        }
    }
}

/// Static mapping of one device type or location.
#[derive(Debug, Clone)]
pub struct ProfileMapping {
    kind: String,
    resources: Vec<ResourceMapping>,
    options: ProfileOptions,
    locations: Option<LocationLayout>,
    bound: Option<LocationScope>,
    setters: SetterTable,
}

impl ProfileMapping {
    pub fn builder(kind: impl Into<String>) -> ProfileMappingBuilder {
        ProfileMappingBuilder {
            mapping: ProfileMapping {
                kind: kind.into(),
                resources: Vec::new(),
                options: ProfileOptions::default(),
                locations: None,
                bound: None,
                setters: SetterTable::default(),
            },
        }
    }

    /// Key used to look up hooks for this mapping.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn resources(&self) -> &[ResourceMapping] {
        &self.resources
    }

    pub fn resource(&self, key: &str) -> Option<&ResourceMapping> {
        self.resources.iter().find(|r| r.key == key)
    }

    pub fn options(&self) -> ProfileOptions {
        self.options
    }

    pub fn locations(&self) -> Option<&LocationLayout> {
        self.locations.as_ref()
    }

    /// Location a standalone unit of a combined appliance is bound to.
    pub fn scope(&self) -> Option<&LocationScope> {
        self.bound.as_ref()
    }

    pub fn setters(&self) -> &SetterTable {
        &self.setters
    }

    /// Reverse lookup: the resource and sub-key a property is read from.
    pub fn lookup(&self, property: &str) -> Option<(&ResourceMapping, &str)> {
        self.resources
            .iter()
            .find_map(|r| r.sub_key_for(property).map(|key| (r, key)))
    }

    pub fn custom_resources(&self) -> impl Iterator<Item = &ResourceMapping> {
        self.resources.iter().filter(|r| r.custom)
    }

    fn validate(&self) -> DeviceResult<()> {
        let mut keys = HashMap::new();
        let mut owners: HashMap<&str, &str> = HashMap::new();

        for r in &self.resources {
            if keys.insert(r.key.as_str(), ()).is_some() {
                return Err(DeviceError::Configuration(format!(
                    "{}: resource key '{}' declared twice",
                    self.kind, r.key
                )));
            }

            let mut seen_here = Vec::new();
            for (_, prop) in &r.properties {
                if seen_here.contains(&prop.as_str()) {
                    if r.custom {
                        continue;
                    }
                    return Err(DeviceError::Configuration(format!(
                        "{}: property '{}' mapped twice under '{}'",
                        self.kind, prop, r.key
                    )));
                }
                seen_here.push(prop.as_str());

                if let Some(owner) = owners.insert(prop.as_str(), r.key.as_str()) {
                    return Err(DeviceError::Configuration(format!(
                        "{}: property '{}' mapped under both '{}' and '{}'",
                        self.kind, prop, owner, r.key
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Builder for [`ProfileMapping`].
pub struct ProfileMappingBuilder {
    mapping: ProfileMapping,
}

impl ProfileMappingBuilder {
    fn push(mut self, key: &str, resource: &str, properties: &[(&str, &str)], custom: bool) -> Self {
        self.mapping.resources.push(ResourceMapping {
            key: key.to_string(),
            resource: resource.to_string(),
            properties: properties
                .iter()
                .map(|(k, p)| (k.to_string(), p.to_string()))
                .collect(),
            custom,
        });
        self
    }

    /// Map a resource resolved by the generic extraction.
    pub fn resource(self, key: &str, resource: &str, properties: &[(&str, &str)]) -> Self {
        self.push(key, resource, properties, false)
    }

    /// Map a resource resolved by a registered hook.
    pub fn custom_resource(self, key: &str, resource: &str, properties: &[(&str, &str)]) -> Self {
        self.push(key, resource, properties, true)
    }

    pub fn with_extension_property(mut self, enabled: bool) -> Self {
        self.mapping.options.use_extension_property = enabled;
        self
    }

    pub fn sub_profile_only(mut self) -> Self {
        self.mapping.options.use_sub_profile_only = true;
        self
    }

    pub fn with_notification(mut self, enabled: bool) -> Self {
        self.mapping.options.use_notification = enabled;
        self
    }

    pub fn with_locations(mut self, layout: LocationLayout) -> Self {
        self.mapping.locations = Some(layout);
        self
    }

    /// Bind the mapping to one location: status records of other locations
    /// are ignored and commands carry `scope`'s location.
    pub fn bound_to(mut self, scope: LocationScope) -> Self {
        self.mapping.bound = Some(scope);
        self
    }

    pub fn with_setters(mut self, setters: SetterTable) -> Self {
        self.mapping.setters = setters;
        self
    }

    /// Validate key and property uniqueness.
    pub fn build(self) -> DeviceResult<ProfileMapping> {
        self.mapping.validate()?;
        Ok(self.mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_lookup() {
        let mapping = ProfileMapping::builder("test")
            .resource("operation", resource::OPERATION, &[("power", "power")])
            .resource("timer", resource::TIMER, &[
                ("relativeHourToStart", property::RELATIVE_HOUR_TO_START),
                ("relativeMinuteToStart", property::RELATIVE_MINUTE_TO_START),
            ])
            .build()
            .unwrap();

        let (res, key) = mapping.lookup(property::RELATIVE_MINUTE_TO_START).unwrap();
        assert_eq!(res.key, "timer");
        assert_eq!(key, "relativeMinuteToStart");
        assert!(mapping.lookup("missing").is_none());
    }

    #[test]
    fn test_duplicate_property_rejected() {
        let result = ProfileMapping::builder("test")
            .resource("timer", resource::TIMER, &[("remainHour", property::REMAIN_HOUR)])
            .resource("sleepTimer", resource::SLEEP_TIMER, &[("remainHour", property::REMAIN_HOUR)])
            .build();
        assert!(matches!(result, Err(DeviceError::Configuration(_))));
    }

    #[test]
    fn test_duplicate_resource_key_rejected() {
        let result = ProfileMapping::builder("test")
            .resource("timer", resource::TIMER, &[])
            .resource("timer", resource::SLEEP_TIMER, &[])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_location_names() {
        assert_eq!(Location::Burner1.as_str(), "burner_1");
        assert_eq!(
            serde_json::to_value(Location::CenterFront).unwrap(),
            serde_json::json!("center_front")
        );
    }
}
