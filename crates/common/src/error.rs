use thiserror::Error;

/// Errors raised while building or publishing a notification.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The HTTP exchange could not be completed: refused connection, DNS
    /// failure, timeout, or a response body that could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PublishError {
    /// Whether the error happened on the wire rather than while preparing the request.
    pub fn is_transport(&self) -> bool {
        matches!(self, PublishError::Transport(_))
    }
}

pub type Result<T> = std::result::Result<T, PublishError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = PublishError::Config("PUBSUB_PORT must be a valid u16".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: PUBSUB_PORT must be a valid u16"
        );
        assert!(!err.is_transport());
    }

    #[test]
    fn test_encode_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PublishError = serde_err.into();
        assert!(matches!(err, PublishError::Encode(_)));
        assert!(err.to_string().starts_with("Encode error:"));
    }
}
