//! Lists the account's devices with their capabilities and current state.
//!
//! ```text
//! THINQ_ACCESS_TOKEN=.. THINQ_COUNTRY=KR THINQ_CLIENT_ID=.. THINQ_REGION=KIC \
//! THINQ_API_KEY=.. cargo run --example device_demo
//! ```
//!
//! Set `THINQ_LOG_JSON=true` for JSON logs and `RUST_LOG` to adjust levels.

use std::sync::Arc;
use thinq_devices::{ApiConfig, DeviceManager, HasProfile, HasSubDevices, ThinqApi};

fn init_tracing() {
    let json_logging = std::env::var("THINQ_LOG_JSON")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("thinq_devices=debug,info"));

    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .compact()
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ApiConfig::from_env()?;
    let timeout = config.timeout();
    let manager = DeviceManager::new(Arc::new(ThinqApi::new(config))).with_timeout(timeout);

    for device_id in manager.discover().await? {
        let summary = manager
            .with_device(&device_id, |device| {
                let mut lines = vec![format!(
                    "{} ({}, {})",
                    device.info().alias,
                    device.info().device_type,
                    device_id
                )];
                lines.push(format!("  writable: {:?}", device.writable_properties()));
                lines.push(format!(
                    "  state: {}",
                    serde_json::Value::Object(device.state().snapshot())
                ));
                for location in device.locations() {
                    if let Some(sub) = device.sub_device(location) {
                        lines.push(format!(
                            "  [{}] state: {}",
                            location,
                            serde_json::Value::Object(sub.state().snapshot())
                        ));
                    }
                }
                lines.join("\n")
            })
            .await;

        if let Some(summary) = summary {
            println!("{}", summary);
        }
    }

    Ok(())
}
