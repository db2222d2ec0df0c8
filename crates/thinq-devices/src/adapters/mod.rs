//! Cloud adapters.
//!
//! - [`http`]: REST client implementing [`ThinqTransport`](crate::transport::ThinqTransport)
//! - [`mqtt`]: push channel delivering [`PushMessage`](crate::push::PushMessage)s

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "mqtt")]
pub mod mqtt;

#[cfg(feature = "http")]
pub use http::ThinqApi;

#[cfg(feature = "mqtt")]
pub use mqtt::PushClient;
