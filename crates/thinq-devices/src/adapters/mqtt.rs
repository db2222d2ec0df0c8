//! Push channel over MQTT with client-certificate TLS.
//!
//! The broker publishes JSON [`PushMessage`]s on the client's topic. Each
//! decoded message is re-broadcast to every subscriber; feed
//! `DEVICE_STATUS` messages to
//! [`DeviceManager::handle_push`](crate::manager::DeviceManager::handle_push).

use crate::config::MqttConfig;
use crate::push::PushMessage;
use crate::transport::{TransportError, TransportResult};
use futures::Stream;
use rumqttc::{AsyncClient, Event, MqttOptions, Packet, QoS, TlsConfiguration, Transport};
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, error, info, warn};

const MAX_CONSECUTIVE_ERRORS: u32 = 5;
const CHANNEL_CAPACITY: usize = 256;

pub struct PushClient {
    config: MqttConfig,
    event_tx: broadcast::Sender<PushMessage>,
    running: Arc<AtomicBool>,
    client: RwLock<Option<AsyncClient>>,
}

impl PushClient {
    pub fn new(config: MqttConfig) -> Self {
        let (event_tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            config,
            event_tx,
            running: Arc::new(AtomicBool::new(false)),
            client: RwLock::new(None),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Connect, subscribe the push topic and spawn the event loop.
    pub async fn start(&self) -> TransportResult<()> {
        if self.is_running() {
            return Ok(());
        }

        let (client, mut eventloop) = AsyncClient::new(mqtt_options(&self.config), 10);
        client
            .subscribe(&self.config.topic, QoS::AtLeastOnce)
            .await
            .map_err(|e| {
                TransportError::Connection(format!("subscribe {} failed: {}", self.config.topic, e))
            })?;

        self.running.store(true, Ordering::Relaxed);
        *self.client.write().await = Some(client);

        let running = self.running.clone();
        let event_tx = self.event_tx.clone();
        let server = self.config.server.clone();

        tokio::spawn(async move {
            let mut error_count = 0;

            while running.load(Ordering::Relaxed) {
                match eventloop.poll().await {
                    Ok(event) => {
                        error_count = 0;
                        handle_event(event, &event_tx);
                    }
                    Err(e) => {
                        error_count += 1;
                        if error_count >= MAX_CONSECUTIVE_ERRORS {
                            error!(
                                "Push broker {} error count reached {}, stopping: {}",
                                server, MAX_CONSECUTIVE_ERRORS, e
                            );
                            break;
                        }
                        warn!(
                            "Push broker {} error ({}/{}): {}",
                            server, error_count, MAX_CONSECUTIVE_ERRORS, e
                        );
                        tokio::time::sleep(Duration::from_secs(1)).await;
                    }
                }
            }

            running.store(false, Ordering::Relaxed);
            info!("Push broker {} connection closed", server);
        });

        info!(server = %self.config.server, topic = %self.config.topic, "Push client started");
        Ok(())
    }

    pub async fn stop(&self) -> TransportResult<()> {
        self.running.store(false, Ordering::Relaxed);
        if let Some(client) = self.client.write().await.take() {
            client
                .disconnect()
                .await
                .map_err(|e| TransportError::Connection(format!("disconnect failed: {}", e)))?;
        }
        Ok(())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PushMessage> {
        self.event_tx.subscribe()
    }

    pub fn stream(&self) -> Pin<Box<dyn Stream<Item = PushMessage> + Send + '_>> {
        let rx = self.event_tx.subscribe();
        Box::pin(async_stream::stream! {
            let mut rx = rx;
            while let Ok(message) = rx.recv().await {
                yield message;
            }
        })
    }
}

fn mqtt_options(config: &MqttConfig) -> MqttOptions {
    let mut options = MqttOptions::new(&config.client_id, &config.server, config.port);
    options.set_keep_alive(config.keep_alive());
    options.set_clean_session(false);
    options.set_transport(Transport::Tls(TlsConfiguration::Simple {
        ca: config.root_ca_pem.clone().into_bytes(),
        alpn: None,
        client_auth: Some((
            config.client_cert_pem.clone().into_bytes(),
            config.client_key_pem.clone().into_bytes(),
        )),
    }));
    options
}

/// Decode a publish and broadcast it. Returns the decoded message.
fn handle_event(event: Event, event_tx: &broadcast::Sender<PushMessage>) -> Option<PushMessage> {
    match event {
        Event::Incoming(Packet::Publish(publish)) => {
            match PushMessage::from_slice(&publish.payload) {
                Ok(message) => {
                    debug!(
                        device_id = %message.device_id,
                        push_type = %message.push_type,
                        "Push message received"
                    );
                    // no subscribers is fine
                    let _ = event_tx.send(message.clone());
                    Some(message)
                }
                Err(e) => {
                    warn!(topic = %publish.topic, "Dropping push payload: {}", e);
                    None
                }
            }
        }
        Event::Incoming(Packet::ConnAck(_)) => {
            info!("Push broker connected");
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rumqttc::Publish;
    use serde_json::json;

    fn config() -> MqttConfig {
        serde_json::from_value(json!({
            "server": "broker.example.com",
            "client_id": "client-1",
            "topic": "app/clients/client-1/push",
            "root_ca_pem": "ca",
            "client_cert_pem": "cert",
            "client_key_pem": "key"
        }))
        .unwrap()
    }

    #[test]
    fn test_options() {
        let options = mqtt_options(&config());
        assert_eq!(options.keep_alive(), Duration::from_secs(6));
        assert!(!options.clean_session());
        assert_eq!(options.broker_address(), ("broker.example.com".to_string(), 8883));
    }

    #[tokio::test]
    async fn test_publish_is_broadcast() {
        let client = PushClient::new(config());
        let mut rx = client.subscribe();
        let payload = json!({
            "deviceId": "d1",
            "pushType": "DEVICE_STATUS",
            "report": {"operation": {"dryerOperationMode": "STOP"}}
        });
        let event = Event::Incoming(Packet::Publish(Publish::new(
            "app/clients/client-1/push",
            QoS::AtLeastOnce,
            serde_json::to_vec(&payload).unwrap(),
        )));

        let decoded = handle_event(event, &client.event_tx).unwrap();
        let received = rx.recv().await.unwrap();

        assert_eq!(decoded, received);
        assert_eq!(received.device_id, "d1");
    }

    #[test]
    fn test_malformed_publish_dropped() {
        let client = PushClient::new(config());
        let event = Event::Incoming(Packet::Publish(Publish::new(
            "t",
            QoS::AtLeastOnce,
            b"{".to_vec(),
        )));
        assert!(handle_event(event, &client.event_tx).is_none());
        assert!(!client.is_running());
    }
}
