use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A user-facing notification, carried base64-encoded inside a [`PublishEnvelope`].
///
/// All fields are required. Nothing is validated here; callers supply well-formed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Notification {
    /// Human-readable text (e.g., "Teodor Pripoae commented on your post")
    pub message: String,
    /// Avatar URL shown next to the message
    pub avatar: String,
    /// Opaque id of the object the notification refers to
    pub notifiable_ref_id: String,
    /// Classification tag (e.g., "post_comment")
    pub kind: String,
}

impl Notification {
    pub fn new(
        message: impl Into<String>,
        avatar: impl Into<String>,
        notifiable_ref_id: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            avatar: avatar.into(),
            notifiable_ref_id: notifiable_ref_id.into(),
            kind: kind.into(),
        }
    }

    /// The post comment notification sent by the stock publisher run.
    pub fn post_comment_sample() -> Self {
        Self::new(
            "Teodor Pripoae commented on your post",
            "https://avatars3.githubusercontent.com/u/393437?v=3&s=460",
            "9ebb963e-69fc-4ce3-88ce-4b8863e7a971",
            "post_comment",
        )
    }

    /// Notification fields from `NOTIFICATION_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a notification from an arbitrary variable source.
    ///
    /// Each unset field falls back to [`Notification::post_comment_sample`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let sample = Self::post_comment_sample();

        Self {
            message: lookup("NOTIFICATION_MESSAGE").unwrap_or(sample.message),
            avatar: lookup("NOTIFICATION_AVATAR").unwrap_or(sample.avatar),
            notifiable_ref_id: lookup("NOTIFICATION_REF_ID").unwrap_or(sample.notifiable_ref_id),
            kind: lookup("NOTIFICATION_KIND").unwrap_or(sample.kind),
        }
    }
}

/// Outer body of a pub/sub `publish` task request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishEnvelope {
    /// Destination subscription the pub/sub system routes the message to
    pub subscription: String,
    pub message: EnvelopeMessage,
}

/// The `message` part of a [`PublishEnvelope`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeMessage {
    /// Reserved for metadata. Always empty when built by the publisher.
    pub attributes: BTreeMap<String, String>,
    /// Standard padded base64 of the serialized [`Notification`]
    pub data: String,
}
