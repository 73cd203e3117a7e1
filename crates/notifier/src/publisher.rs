//! Pub/sub publisher — one POST per notification.
//!
//! The envelope is sent to `http://<host>:<port>/_pubsub/task/<topic>` and the
//! response is handed back untouched. A non-2xx status is still a response,
//! not an error; only a failed exchange surfaces as `PublishError::Transport`.
//! No retries, and no idle connections are kept between calls.

use std::fmt;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use pushnote_common::config::PublisherConfig;
use pushnote_common::error::{PublishError, Result};
use pushnote_common::types::Notification;

use crate::envelope;

/// Status and raw body returned by the pub/sub endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishResponse {
    pub status: u16,
    pub body: String,
}

impl PublishResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl fmt::Display for PublishResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status: {} body: {}", self.status, self.body)
    }
}

/// HTTP publisher bound to a single pub/sub endpoint.
pub struct Publisher {
    client: Client,
    config: PublisherConfig,
}

impl Publisher {
    pub fn new(config: PublisherConfig) -> Result<Self> {
        let mut builder = Client::builder().pool_max_idle_per_host(0).no_proxy();

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| PublishError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    /// Publish a notification and return the endpoint's response as received.
    pub async fn publish(&self, notification: &Notification) -> Result<PublishResponse> {
        let body = envelope::request_body(notification, &self.config.subscription)?;
        let url = self.config.endpoint_url();

        tracing::debug!(
            url = %url,
            subscription = %self.config.subscription,
            kind = %notification.kind,
            notifiable_ref_id = %notification.notifiable_ref_id,
            bytes = body.len(),
            "Publishing notification"
        );

        let response = match self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(url = %url, error = %e, "Publish request failed");
                return Err(e.into());
            }
        };

        let status = response.status().as_u16();
        let body = match response.bytes().await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                tracing::error!(url = %url, status, error = %e, "Failed to read publish response");
                return Err(e.into());
            }
        };

        let response = PublishResponse { status, body };

        if response.is_success() {
            tracing::info!(status, "Notification published");
        } else {
            tracing::warn!(status, body = %response.body, "Pub/sub endpoint returned non-success status");
        }

        Ok(response)
    }
}

/// One-shot publish with a throwaway [`Publisher`].
pub async fn publish(
    notification: &Notification,
    config: &PublisherConfig,
) -> Result<PublishResponse> {
    Publisher::new(config.clone())?.publish(notification).await
}
