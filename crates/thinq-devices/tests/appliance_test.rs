//! Single-Unit Appliance Tests
//!
//! Resolution, status application and setters of the appliance tables that
//! have no locations:
//! - air care (purifier, purifier fan, ceiling fan, humidifier, dehumidifier)
//! - kitchen (hood, microwave oven, home brew, water heater, water purifier)
//! - cleaning and care (robot cleaner, stick cleaner, styler)

mod common;

use common::{enum_spec, number_spec, range_spec, shared, MockTransport};
use serde_json::{json, Value};
use std::sync::Arc;
use thinq_devices::mapping::property as p;
use thinq_devices::{ConnectDevice, DeviceError, DeviceInfo, DeviceRole, HasProfile, Location};

fn build(device_type: &str, profile: Value) -> (Arc<MockTransport>, ConnectDevice) {
    let (mock, transport) = shared(MockTransport::new());
    let device =
        ConnectDevice::from_profile(DeviceInfo::new("dev-1", device_type), &profile, transport)
            .unwrap();
    (mock, device)
}

fn absolute_timer() -> Value {
    json!({
        "absoluteHourToStart": number_spec(true),
        "absoluteMinuteToStart": number_spec(true),
        "absoluteHourToStop": number_spec(true),
        "absoluteMinuteToStop": number_spec(true)
    })
}

#[tokio::test]
async fn test_air_purifier() {
    let (mock, mut purifier) = build(
        "DEVICE_AIR_PURIFIER",
        json!({
            "property": {
                "airPurifierJobMode": {
                    "currentJobMode": enum_spec(&["CLEAN", "SLEEP"], &["CLEAN", "SLEEP"]),
                    "personalizationMode": enum_spec(&["PERSONALIZATION"], &[])
                },
                "operation": {"airPurifierOperationMode": enum_spec(&["POWER_ON", "POWER_OFF"], &["POWER_ON", "POWER_OFF"])},
                "timer": absolute_timer(),
                "airFlow": {"windStrength": enum_spec(&["LOW", "HIGH"], &["LOW", "HIGH"])},
                "airQualitySensor": {
                    "PM2": number_spec(false),
                    "totalPollutionLevel": enum_spec(&["GOOD", "BAD"], &[])
                },
                "filterInfo": {"filterRemainPercent": number_spec(false)}
            }
        }),
    );

    assert_eq!(purifier.role(), &DeviceRole::Standalone);
    assert!(purifier.profile().check_readable(p::PERSONALIZATION_MODE));
    assert!(!purifier.profile().check_readable(p::ODOR));

    purifier.set_status(&json!({
        "airQualitySensor": {"PM2": 12, "totalPollutionLevel": "GOOD"},
        "filterInfo": {"filterRemainPercent": 80}
    }));
    assert_eq!(purifier.get_status(p::PM2), Some(&json!(12)));
    assert_eq!(purifier.get_status(p::FILTER_REMAIN_PERCENT), Some(&json!(80)));

    purifier.set_property(p::WIND_STRENGTH, "HIGH").await.unwrap();
    purifier
        .set_group("absolute_time_to_start", &[json!(7), json!(0)])
        .await
        .unwrap();

    assert_eq!(
        mock.controls().into_iter().map(|(_, c)| c).collect::<Vec<_>>(),
        vec![
            json!({"airFlow": {"windStrength": "HIGH"}}),
            json!({"timer": {"absoluteHourToStart": 7, "absoluteMinuteToStart": 0}}),
        ]
    );
}

#[tokio::test]
async fn test_air_purifier_fan() {
    let (mock, mut fan) = build(
        "DEVICE_AIR_PURIFIER_FAN",
        json!({
            "property": {
                "airFanJobMode": {"currentJobMode": enum_spec(&["SPOT_CLEAN", "DIRECT_CLEAN"], &["SPOT_CLEAN", "DIRECT_CLEAN"])},
                "airFlow": {
                    "warmMode": enum_spec(&["WARM_ON", "WARM_OFF"], &["WARM_ON", "WARM_OFF"]),
                    "windTemperature": number_spec(true),
                    "windAngle": enum_spec(&["OFF", "ANGLE_45"], &["OFF", "ANGLE_45"])
                },
                "sleepTimer": {
                    "relativeHourToStop": number_spec(true),
                    "relativeMinuteToStop": number_spec(true)
                },
                "airQualitySensor": {"temperature": number_spec(false)},
                "display": {"light": enum_spec(&["LEVEL_1", "OFF"], &["LEVEL_1", "OFF"])},
                "misc": {"uvNano": enum_spec(&["ON", "OFF"], &["ON", "OFF"])}
            }
        }),
    );

    fan.update_status(&json!({"airQualitySensor": {"temperature": 22}, "display": {"light": "OFF"}}));
    assert_eq!(fan.get_status(p::TEMPERATURE), Some(&json!(22)));
    assert_eq!(fan.get_status(p::DISPLAY_LIGHT), Some(&json!("OFF")));

    fan.set_property(p::WIND_TEMPERATURE, 26).await.unwrap();
    fan.set_property(p::UV_NANO, "ON").await.unwrap();
    fan.set_group("sleep_timer_relative_time_to_stop", &[json!(2), json!(0)])
        .await
        .unwrap();

    assert_eq!(
        mock.controls().into_iter().map(|(_, c)| c).collect::<Vec<_>>(),
        vec![
            json!({"airFlow": {"windTemperature": 26}}),
            json!({"misc": {"uvNano": "ON"}}),
            json!({"sleepTimer": {"relativeHourToStop": 2}}),
        ]
    );

    let err = fan.set_property(p::WIND_ANGLE, "ANGLE_90").await.unwrap_err();
    assert_eq!(err.to_string(), "Not support wind_angle : ANGLE_90");
}

#[tokio::test]
async fn test_ceiling_fan_and_dehumidifier() {
    let (mock, fan) = build(
        "DEVICE_CEILING_FAN",
        json!({
            "property": {
                "airFlow": {"windStrength": enum_spec(&["LOW", "HIGH"], &["LOW", "HIGH"])},
                "operation": {"ceilingfanOperationMode": enum_spec(&["POWER_ON", "POWER_OFF"], &["POWER_ON", "POWER_OFF"])}
            }
        }),
    );
    fan.set_property(p::CEILING_FAN_OPERATION_MODE, "POWER_ON").await.unwrap();
    assert_eq!(
        mock.last_control(),
        Some(json!({"operation": {"ceilingfanOperationMode": "POWER_ON"}}))
    );

    let (_, mut dehumidifier) = build(
        "DEVICE_DEHUMIDIFIER",
        json!({
            "property": {
                "dehumidifierJobMode": {"currentJobMode": enum_spec(&["RAPID_DEHUMIDIFICATION"], &[])},
                "humidity": {"currentHumidity": number_spec(false)}
            }
        }),
    );
    dehumidifier.set_status(&json!({"humidity": {"currentHumidity": 55}}));
    assert_eq!(dehumidifier.get_status(p::CURRENT_HUMIDITY), Some(&json!(55)));
    assert_eq!(dehumidifier.get_status(p::CURRENT_JOB_MODE), None);

    let err = dehumidifier
        .set_property(p::CURRENT_JOB_MODE, "RAPID_DEHUMIDIFICATION")
        .await
        .unwrap_err();
    assert!(matches!(err, DeviceError::NotSupported(_)));
}

#[tokio::test]
async fn test_humidifier() {
    let (mock, mut humidifier) = build(
        "DEVICE_HUMIDIFIER",
        json!({
            "property": {
                "operation": {
                    "humidifierOperationMode": enum_spec(&["POWER_ON", "POWER_OFF"], &["POWER_ON", "POWER_OFF"]),
                    "hygieneDryMode": enum_spec(&["ON", "OFF"], &["ON", "OFF"])
                },
                "humidity": {
                    "targetHumidity": number_spec(true),
                    "warmMode": enum_spec(&["WARM_ON", "WARM_OFF"], &["WARM_ON", "WARM_OFF"])
                },
                "airQualitySensor": {"humidity": number_spec(false)},
                "moodLamp": {"moodLampState": enum_spec(&["ON", "OFF"], &["ON", "OFF"])}
            }
        }),
    );

    humidifier.set_status(&json!({
        "humidity": {"targetHumidity": 50, "warmMode": "WARM_OFF"},
        "airQualitySensor": {"humidity": 41}
    }));
    assert_eq!(humidifier.get_status(p::TARGET_HUMIDITY), Some(&json!(50)));
    assert_eq!(humidifier.get_status(p::HUMIDITY), Some(&json!(41)));

    humidifier.set_property(p::TARGET_HUMIDITY, 60).await.unwrap();
    humidifier.set_property(p::WARM_MODE, "WARM_ON").await.unwrap();
    humidifier.set_property(p::MOOD_LAMP_STATE, "ON").await.unwrap();

    assert_eq!(
        mock.controls().into_iter().map(|(_, c)| c).collect::<Vec<_>>(),
        vec![
            json!({"humidity": {"targetHumidity": 60}}),
            json!({"humidity": {"warmMode": "WARM_ON"}}),
            json!({"moodLamp": {"moodLampState": "ON"}}),
        ]
    );
}

fn hood_profile() -> Value {
    json!({
        "property": {
            "ventilation": {"fanSpeed": range_spec(0, 5, 1)},
            "lamp": {"lampBrightness": range_spec(0, 2, 1)},
            "operation": {"hoodOperationMode": enum_spec(&["POWER_ON", "POWER_OFF"], &[])},
            "timer": {"remainMinute": number_spec(false), "remainSecond": number_spec(false)}
        }
    })
}

#[tokio::test]
async fn test_hood_writes_fan_and_lamp_together() {
    let (mock, mut hood) = build("DEVICE_HOOD", hood_profile());
    hood.set_status(&json!({"ventilation": {"fanSpeed": 1}, "lamp": {"lampBrightness": 2}}));

    hood.set_property(p::FAN_SPEED, 4).await.unwrap();
    assert_eq!(
        mock.last_control(),
        Some(json!({"ventilation": {"fanSpeed": 4}, "lamp": {"lampBrightness": 2}}))
    );

    hood.set_property(p::LAMP_BRIGHTNESS, 0).await.unwrap();
    assert_eq!(
        mock.last_control(),
        Some(json!({"ventilation": {"fanSpeed": 1}, "lamp": {"lampBrightness": 0}}))
    );

    let err = hood.set_property(p::FAN_SPEED, 6).await.unwrap_err();
    assert_eq!(err.to_string(), "Not support fan_speed : 6");
    assert_eq!(mock.controls().len(), 2);
}

#[tokio::test]
async fn test_microwave_oven() {
    let (mock, mut microwave) = build(
        "DEVICE_MICROWAVE_OVEN",
        json!({
            "property": {
                "runState": {"currentState": enum_spec(&["IDLE", "COOKING"], &[])},
                "timer": {"remainMinute": number_spec(false), "remainSecond": number_spec(false)},
                "ventilation": {"fanSpeed": range_spec(0, 3, 1)},
                "lamp": {"lampBrightness": range_spec(0, 2, 1)}
            }
        }),
    );

    let err = microwave.set_property(p::LAMP_BRIGHTNESS, 1).await.unwrap_err();
    assert_eq!(err.to_string(), "Not support fan_speed : current value unknown");

    microwave.set_status(&json!({
        "runState": {"currentState": "COOKING"},
        "timer": {"remainMinute": 2, "remainSecond": 30},
        "ventilation": {"fanSpeed": 2},
        "lamp": {"lampBrightness": 0}
    }));
    assert_eq!(microwave.get_status(p::REMAIN_SECOND), Some(&json!(30)));
    assert_eq!(microwave.get_status(p::CURRENT_STATE), Some(&json!("COOKING")));

    microwave.set_property(p::LAMP_BRIGHTNESS, 1).await.unwrap();
    assert_eq!(
        mock.last_control(),
        Some(json!({"lamp": {"lampBrightness": 1}, "ventilation": {"fanSpeed": 2}}))
    );
}

#[tokio::test]
async fn test_home_brew_is_read_only() {
    let (_, mut brew) = build(
        "DEVICE_HOME_BREW",
        json!({
            "property": {
                "runState": {"currentState": enum_spec(&["FERMENTATION", "EXTRACTION"], &[])},
                "recipe": {
                    "recipeName": enum_spec(&["IPA", "PALE_ALE"], &[]),
                    "beerRemain": number_spec(false),
                    "flavorCapsule1": {"type": "string", "mode": ["r"]}
                },
                "timer": {"elapsedDayState": number_spec(false), "elapsedDayTotal": number_spec(false)}
            }
        }),
    );

    assert!(brew.writable_properties().is_empty());
    brew.set_status(&json!({
        "recipe": {"recipeName": "IPA", "beerRemain": 40, "flavorCapsule1": "CITRUS"},
        "timer": {"elapsedDayState": 3, "elapsedDayTotal": 14}
    }));
    assert_eq!(brew.get_status(p::RECIPE_NAME), Some(&json!("IPA")));
    assert_eq!(brew.get_status(p::FLAVOR_CAPSULE_1), Some(&json!("CITRUS")));
    assert_eq!(brew.get_status(p::ELAPSED_DAY_TOTAL), Some(&json!(14)));
    assert_eq!(brew.get_status(p::HOP_OIL_INFO), None);

    let err = brew.set_property(p::RECIPE_NAME, "IPA").await.unwrap_err();
    assert!(matches!(err, DeviceError::NotSupported(_)));
}

#[tokio::test]
async fn test_robot_cleaner() {
    let (mock, mut robot) = build(
        "DEVICE_ROBOT_CLEANER",
        json!({
            "property": {
                "runState": {"currentState": enum_spec(&["SLEEP", "CLEAN_SELECT"], &[])},
                "operation": {"cleanOperationMode": enum_spec(&["START", "HOMING"], &["START", "HOMING"])},
                "battery": {"level": enum_spec(&["HIGH", "LOW"], &[]), "percent": number_spec(false)},
                "timer": {
                    "absoluteHourToStart": number_spec(true),
                    "absoluteMinuteToStart": number_spec(true),
                    "runningHour": number_spec(false),
                    "runningMinute": number_spec(false)
                }
            }
        }),
    );

    robot.set_status(&json!({"battery": {"level": "HIGH", "percent": 90}, "timer": {"runningHour": 0, "runningMinute": 12}}));
    assert_eq!(robot.get_status(p::BATTERY_LEVEL), Some(&json!("HIGH")));
    assert_eq!(robot.get_status(p::BATTERY_PERCENT), Some(&json!(90)));

    robot.set_property(p::CLEAN_OPERATION_MODE, "HOMING").await.unwrap();
    robot
        .set_group("absolute_time_to_start", &[json!(9), json!(0)])
        .await
        .unwrap();
    assert_eq!(
        mock.controls().into_iter().map(|(_, c)| c).collect::<Vec<_>>(),
        vec![
            json!({"operation": {"cleanOperationMode": "HOMING"}}),
            json!({"timer": {"absoluteHourToStart": 9}}),
        ]
    );
}

#[tokio::test]
async fn test_stick_cleaner_and_water_purifier() {
    let (_, mut stick) = build(
        "DEVICE_STICK_CLEANER",
        json!({
            "property": {
                "stickCleanerJobMode": {"currentJobMode": enum_spec(&["TURBO", "NORMAL"], &[])},
                "battery": {"percent": number_spec(false)}
            }
        }),
    );
    stick.set_status(&json!({"stickCleanerJobMode": {"currentJobMode": "TURBO"}, "battery": {"percent": 70}}));
    assert_eq!(stick.get_status(p::CURRENT_JOB_MODE), Some(&json!("TURBO")));
    assert_eq!(stick.get_status(p::BATTERY_LEVEL), None);

    let (_, mut purifier) = build(
        "DEVICE_WATER_PURIFIER",
        json!({
            "property": {
                "runState": {
                    "cockState": enum_spec(&["CLOSE", "OPEN"], &[]),
                    "sterilizingState": enum_spec(&["WAITING", "STERILIZING"], &[])
                },
                "waterInfo": {"waterType": enum_spec(&["NORMAL", "COLD"], &[])}
            }
        }),
    );
    purifier.set_status(&json!({"runState": {"cockState": "OPEN", "sterilizingState": "WAITING"}}));
    purifier.update_status(&json!({"waterInfo": {"waterType": "COLD"}}));

    assert_eq!(purifier.get_status(p::COCK_STATE), Some(&json!("OPEN")));
    assert_eq!(purifier.get_status(p::WATER_TYPE), Some(&json!("COLD")));
    assert!(purifier.writable_properties().is_empty());
}

#[tokio::test]
async fn test_styler() {
    let (mock, styler) = build(
        "DEVICE_STYLER",
        json!({
            "property": {
                "runState": {"currentState": enum_spec(&["INITIAL", "RUNNING"], &[])},
                "operation": {"stylerOperationMode": enum_spec(&["START", "STOP"], &["START", "STOP"])},
                "timer": {"relativeHourToStop": range_spec(0, 12, 1), "remainHour": number_spec(false)}
            }
        }),
    );

    styler.set_property(p::RELATIVE_HOUR_TO_STOP, 3).await.unwrap();
    assert_eq!(mock.last_control(), Some(json!({"timer": {"relativeHourToStop": 3}})));

    let err = styler.set_property(p::RELATIVE_HOUR_TO_STOP, 13).await.unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_water_heater() {
    let (mock, mut heater) = build(
        "DEVICE_WATER_HEATER",
        json!({
            "property": {
                "waterHeaterJobMode": {"currentJobMode": enum_spec(&["HEAT_PUMP", "TURBO"], &["HEAT_PUMP", "TURBO"])},
                "operation": {"waterHeaterOperationMode": enum_spec(&["POWER_ON", "POWER_OFF"], &[])},
                "temperature": {
                    "currentTemperature": number_spec(false),
                    "targetTemperature": number_spec(true),
                    "unit": enum_spec(&["C"], &[])
                }
            }
        }),
    );

    heater.set_status(&json!({"temperature": {"currentTemperature": 48, "targetTemperature": 55}}));
    assert_eq!(heater.get_status(p::CURRENT_TEMPERATURE), Some(&json!(48)));

    heater.set_property(p::TARGET_TEMPERATURE, 60).await.unwrap();
    heater.set_property(p::CURRENT_JOB_MODE, "TURBO").await.unwrap();
    assert_eq!(
        mock.controls().into_iter().map(|(_, c)| c).collect::<Vec<_>>(),
        vec![
            json!({"temperature": {"targetTemperature": 60}}),
            json!({"waterHeaterJobMode": {"currentJobMode": "TURBO"}}),
        ]
    );
}

#[tokio::test]
async fn test_washtower_halves_listed_separately() {
    let unit = json!({
        "runState": {"currentState": enum_spec(&["INITIAL", "RUNNING"], &[])},
        "operation": {"washerOperationMode": enum_spec(&["START", "STOP"], &["START", "STOP"])}
    });
    let (mock, washer) = build("DEVICE_WASHTOWER_WASHER", json!({"property": unit}));
    assert_eq!(washer.role(), &DeviceRole::Main);

    washer
        .set_location_property(Location::Main, p::WASHER_OPERATION_MODE, "START")
        .await
        .unwrap();
    assert_eq!(
        mock.last_control(),
        Some(json!({"operation": {"washerOperationMode": "START"}, "location": {"locationName": "MAIN"}}))
    );

    let (_, dryer) = build("DEVICE_WASHTOWER_DRYER", common::dryer_profile());
    assert_eq!(dryer.role(), &DeviceRole::Standalone);
    assert!(dryer.profile().check_writable(p::DRYER_OPERATION_MODE));
}
