//! Publishes user notifications to the local pub/sub task endpoint.
//!
//! A [`Notification`](pushnote_common::types::Notification) is serialized,
//! base64-encoded and wrapped in a `publish` envelope (see [`envelope`]),
//! then POSTed once by the [`publisher::Publisher`].

pub mod envelope;
pub mod publisher;

pub use publisher::{PublishResponse, Publisher, publish};
