//! Envelope encoding.
//!
//! The notification travels as standard padded base64 of its JSON form inside
//! `message.data`; `message.attributes` is always empty.

use std::collections::BTreeMap;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use pushnote_common::error::{PublishError, Result};
use pushnote_common::types::{EnvelopeMessage, Notification, PublishEnvelope};

/// Serialize a notification to JSON and base64-encode the bytes.
pub fn encode_notification(notification: &Notification) -> Result<String> {
    let json = serde_json::to_vec(notification)?;
    Ok(BASE64.encode(json))
}

/// Reverse of [`encode_notification`].
pub fn decode_notification(data: &str) -> Result<Notification> {
    let bytes = BASE64
        .decode(data)
        .map_err(|e| PublishError::Decode(format!("invalid base64 payload: {}", e)))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| PublishError::Decode(format!("invalid notification JSON: {}", e)))
}

pub fn build_envelope(notification: &Notification, subscription: &str) -> Result<PublishEnvelope> {
    Ok(PublishEnvelope {
        subscription: subscription.to_string(),
        message: EnvelopeMessage {
            attributes: BTreeMap::new(),
            data: encode_notification(notification)?,
        },
    })
}

/// Serialized envelope, ready to be sent as the request body.
pub fn request_body(notification: &Notification, subscription: &str) -> Result<Vec<u8>> {
    let envelope = build_envelope(notification, subscription)?;
    Ok(serde_json::to_vec(&envelope)?)
}
