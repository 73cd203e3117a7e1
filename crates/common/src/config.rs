use std::time::Duration;

use serde::Deserialize;

use crate::error::{PublishError, Result};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8888;
pub const DEFAULT_TOPIC: &str = "main.notifications.publish";
pub const DEFAULT_SUBSCRIPTION: &str = "backendapp_notifications_publish";

/// Destination of published notifications.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublisherConfig {
    /// Host of the pub/sub task endpoint
    pub host: String,

    /// Port of the pub/sub task endpoint
    pub port: u16,

    /// Topic path appended to `/_pubsub/task/`
    pub topic: String,

    /// Subscription name written into every envelope
    pub subscription: String,

    /// Request timeout in milliseconds, non-zero. `None` waits for the response indefinitely.
    pub timeout_ms: Option<u64>,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            topic: DEFAULT_TOPIC.to_string(),
            subscription: DEFAULT_SUBSCRIPTION.to_string(),
            timeout_ms: None,
        }
    }
}

impl PublisherConfig {
    /// Load configuration from environment variables, falling back to the defaults.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("PUBSUB_HOST").unwrap_or(defaults.host),
            port: match lookup("PUBSUB_PORT") {
                Some(port) => port.parse().map_err(|_| {
                    PublishError::Config("PUBSUB_PORT must be a valid u16".to_string())
                })?,
                None => defaults.port,
            },
            topic: lookup("PUBSUB_TOPIC").unwrap_or(defaults.topic),
            subscription: lookup("PUBSUB_SUBSCRIPTION").unwrap_or(defaults.subscription),
            timeout_ms: lookup("PUBSUB_TIMEOUT_MS")
                .map(|ms| match ms.parse::<u64>() {
                    Ok(0) => Err(PublishError::Config(
                        "PUBSUB_TIMEOUT_MS must be greater than 0".to_string(),
                    )),
                    Ok(ms) => Ok(ms),
                    Err(_) => Err(PublishError::Config(
                        "PUBSUB_TIMEOUT_MS must be a valid u64".to_string(),
                    )),
                })
                .transpose()?,
        })
    }

    /// Full URL of the pub/sub task endpoint.
    pub fn endpoint_url(&self) -> String {
        format!(
            "http://{}:{}/_pubsub/task/{}",
            self.host, self.port, self.topic
        )
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
