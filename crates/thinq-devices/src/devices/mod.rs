//! Built-in device tables.
//!
//! Every supported appliance type contributes a [`ProfileMapping`] and, when
//! its profile has irregular resources, a set of hooks.

pub mod air_conditioner;
pub mod air_purifier;
pub mod air_purifier_fan;
pub mod ceiling_fan;
pub mod cooktop;
pub mod dehumidifier;
pub mod dish_washer;
pub mod dryer;
pub mod home_brew;
pub mod hood;
pub mod humidifier;
pub mod kimchi_refrigerator;
pub mod microwave_oven;
pub mod oven;
pub mod plant_cultivator;
pub mod refrigerator;
pub mod robot_cleaner;
pub mod stick_cleaner;
pub mod styler;
pub mod system_boiler;
pub mod ventilator;
pub mod washcombo;
pub mod washer;
pub mod washtower;
pub mod water_heater;
pub mod water_purifier;
pub mod wine_cellar;

use crate::error::{DeviceError, DeviceResult};
use crate::hooks::HookRegistry;
use crate::mapping::ProfileMapping;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Appliance types with a mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    AirConditioner,
    AirPurifier,
    AirPurifierFan,
    CeilingFan,
    Cooktop,
    Dehumidifier,
    DishWasher,
    Dryer,
    HomeBrew,
    Hood,
    Humidifier,
    KimchiRefrigerator,
    MicrowaveOven,
    Oven,
    PlantCultivator,
    Refrigerator,
    RobotCleaner,
    StickCleaner,
    Styler,
    SystemBoiler,
    Ventilator,
    WashcomboMain,
    WashcomboMini,
    Washer,
    Washtower,
    WashtowerDryer,
    WashtowerWasher,
    WaterHeater,
    WaterPurifier,
    WineCellar,
}

impl DeviceType {
    pub const ALL: [DeviceType; 30] = [
        Self::AirConditioner,
        Self::AirPurifier,
        Self::AirPurifierFan,
        Self::CeilingFan,
        Self::Cooktop,
        Self::Dehumidifier,
        Self::DishWasher,
        Self::Dryer,
        Self::HomeBrew,
        Self::Hood,
        Self::Humidifier,
        Self::KimchiRefrigerator,
        Self::MicrowaveOven,
        Self::Oven,
        Self::PlantCultivator,
        Self::Refrigerator,
        Self::RobotCleaner,
        Self::StickCleaner,
        Self::Styler,
        Self::SystemBoiler,
        Self::Ventilator,
        Self::WashcomboMain,
        Self::WashcomboMini,
        Self::Washer,
        Self::Washtower,
        Self::WashtowerDryer,
        Self::WashtowerWasher,
        Self::WaterHeater,
        Self::WaterPurifier,
        Self::WineCellar,
    ];

    /// Vendor identifier, e.g. `DEVICE_AIR_CONDITIONER`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AirConditioner => "DEVICE_AIR_CONDITIONER",
            Self::AirPurifier => "DEVICE_AIR_PURIFIER",
            Self::AirPurifierFan => "DEVICE_AIR_PURIFIER_FAN",
            Self::CeilingFan => "DEVICE_CEILING_FAN",
            Self::Cooktop => "DEVICE_COOKTOP",
            Self::Dehumidifier => "DEVICE_DEHUMIDIFIER",
            Self::DishWasher => "DEVICE_DISH_WASHER",
            Self::Dryer => "DEVICE_DRYER",
            Self::HomeBrew => "DEVICE_HOME_BREW",
            Self::Hood => "DEVICE_HOOD",
            Self::Humidifier => "DEVICE_HUMIDIFIER",
            Self::KimchiRefrigerator => "DEVICE_KIMCHI_REFRIGERATOR",
            Self::MicrowaveOven => "DEVICE_MICROWAVE_OVEN",
            Self::Oven => "DEVICE_OVEN",
            Self::PlantCultivator => "DEVICE_PLANT_CULTIVATOR",
            Self::Refrigerator => "DEVICE_REFRIGERATOR",
            Self::RobotCleaner => "DEVICE_ROBOT_CLEANER",
            Self::StickCleaner => "DEVICE_STICK_CLEANER",
            Self::Styler => "DEVICE_STYLER",
            Self::SystemBoiler => "DEVICE_SYSTEM_BOILER",
            Self::Ventilator => "DEVICE_VENTILATOR",
            Self::WashcomboMain => "DEVICE_WASHCOMBO_MAIN",
            Self::WashcomboMini => "DEVICE_WASHCOMBO_MINI",
            Self::Washer => "DEVICE_WASHER",
            Self::Washtower => "DEVICE_WASHTOWER",
            Self::WashtowerDryer => "DEVICE_WASHTOWER_DRYER",
            Self::WashtowerWasher => "DEVICE_WASHTOWER_WASHER",
            Self::WaterHeater => "DEVICE_WATER_HEATER",
            Self::WaterPurifier => "DEVICE_WATER_PURIFIER",
            Self::WineCellar => "DEVICE_WINE_CELLAR",
        }
    }

    /// Mapping table for a profile document of this type.
    ///
    /// Only the cooktop table depends on the document: its main operation
    /// mode exists when the profile carries an `extensionProperty` section.
    /// Washtower halves listed as devices of their own use the plain washer
    /// and dryer tables.
    pub fn mapping(&self, document: &Value) -> DeviceResult<ProfileMapping> {
        match self {
            Self::AirConditioner => air_conditioner::mapping(),
            Self::AirPurifier => air_purifier::mapping(),
            Self::AirPurifierFan => air_purifier_fan::mapping(),
            Self::CeilingFan => ceiling_fan::mapping(),
            Self::Cooktop => cooktop::mapping(document.get("extensionProperty").is_some()),
            Self::Dehumidifier => dehumidifier::mapping(),
            Self::DishWasher => dish_washer::mapping(),
            Self::Dryer => dryer::mapping(),
            Self::HomeBrew => home_brew::mapping(),
            Self::Hood => hood::mapping(),
            Self::Humidifier => humidifier::mapping(),
            Self::KimchiRefrigerator => kimchi_refrigerator::mapping(),
            Self::MicrowaveOven => microwave_oven::mapping(),
            Self::Oven => oven::mapping(),
            Self::PlantCultivator => plant_cultivator::mapping(),
            Self::Refrigerator => refrigerator::mapping(),
            Self::RobotCleaner => robot_cleaner::mapping(),
            Self::StickCleaner => stick_cleaner::mapping(),
            Self::Styler => styler::mapping(),
            Self::SystemBoiler => system_boiler::mapping(),
            Self::Ventilator => ventilator::mapping(),
            Self::WashcomboMain => washcombo::mapping(washcombo::MAIN),
            Self::WashcomboMini => washcombo::mapping(washcombo::MINI),
            Self::Washer => washer::mapping(),
            Self::Washtower => washtower::mapping(),
            Self::WashtowerDryer => dryer::mapping(),
            Self::WashtowerWasher => washer::mapping(),
            Self::WaterHeater => water_heater::mapping(),
            Self::WaterPurifier => water_purifier::mapping(),
            Self::WineCellar => wine_cellar::mapping(),
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DeviceError::UnsupportedDeviceType(s.to_string()))
    }
}

/// Register the hooks of every built-in table.
pub fn register_hooks(registry: &mut HookRegistry) {
    ventilator::register_hooks(registry);
    refrigerator::register_hooks(registry);
    wine_cellar::register_hooks(registry);
    oven::register_hooks(registry);
    cooktop::register_hooks(registry);
    kimchi_refrigerator::register_hooks(registry);
}
