use thiserror::Error;

/// Errors for calls to the prediction service
#[derive(Debug, Error)]
pub enum PredictionClientError {
    /// Connection, DNS, or timeout failure before a response arrived
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// The response body could not be decoded
    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),
}

impl PredictionClientError {
    /// Stable label for log fields and metrics
    pub fn class(&self) -> &'static str {
        match self {
            PredictionClientError::Transport(_) => "transport",
            PredictionClientError::Status(_) => "status",
            PredictionClientError::Payload(_) => "payload",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = PredictionClientError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Unexpected status: 500 Internal Server Error");
        assert_eq!(err.class(), "status");
    }

    #[test]
    fn test_payload_error_class() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = PredictionClientError::from(json_err);
        assert_eq!(err.class(), "payload");
        assert!(err.to_string().starts_with("Payload error:"));
    }
}
