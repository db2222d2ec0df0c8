//! ThinQ Connect Device Crate
//!
//! Profile-driven capability resolution and state tracking for cloud-connected
//! home appliances.
//!
//! ## Features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `http` | ✅ | REST transport over reqwest |
//! | `mqtt` | ✅ | Push channel over rumqttc |
//! | `all` | ❌ | All features |
//!
//! ## Architecture
//!
//! - **ProfileMapping**: declarative table of a device type's resources and setters
//! - **DeviceProfile**: capabilities resolved from a profile document against a mapping
//! - **ConnectDevice**: live state plus validated commands, with per-location sub-devices
//! - **ThinqTransport**: request/response collaborator, implemented by `ThinqApi`
//! - **DeviceManager**: discovery, refresh and push routing for an account
//!
//! Irregular resources (per-unit temperatures, location-tagged records,
//! composite command payloads) are handled by hooks registered per device kind
//! in a [`HookRegistry`].

pub mod capability;
pub mod command;
pub mod config;
pub mod error;
pub mod hooks;
pub mod location;
pub mod mapping;
pub mod profile;
pub mod setters;
pub mod state;
pub mod transport;

pub mod device;
pub mod devices;
pub mod manager;
pub mod push;

// Cloud adapters (feature gated)
pub mod adapters;

pub use capability::{AllowedValues, CapabilityDescriptor, PropertyKind, PropertySpec, RangeSpec};
pub use command::{CommandKind, LocationStyle, Payload};
pub use config::{ApiConfig, MqttConfig};
pub use device::{
    ConnectDevice, ControlRequest, DeviceInfo, DeviceRole, HasLocationScoping, HasProfile, HasSubDevices,
};
pub use devices::DeviceType;
pub use error::{DeviceError, DeviceResult};
pub use hooks::HookRegistry;
pub use location::{LocationLayout, LocationScope, LocationTag};
pub use mapping::{Location, ProfileMapping, ResourceMapping};
pub use manager::DeviceManager;
pub use profile::DeviceProfile;
pub use push::PushMessage;
pub use setters::SetterTable;
pub use state::{ApplyMode, DeviceState};
pub use transport::{ApiError, ThinqTransport, TransportError, TransportResult, DEFAULT_TIMEOUT};

#[cfg(feature = "http")]
pub use adapters::ThinqApi;

#[cfg(feature = "mqtt")]
pub use adapters::PushClient;
