use thiserror::Error;

/// Failures raised by an [`HttpSession`](crate::session::HttpSession) or while
/// decoding its responses.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {status} returned for {url}")]
    Status { status: u16, url: String },
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum SonarQubeError {
    #[error("Failed to get SonarQube metrics: {0}")]
    MetricsRetrieval(#[source] SessionError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn metrics_error_embeds_and_keeps_source() {
        let err = SonarQubeError::MetricsRetrieval(SessionError::Other("boom".to_string()));
        assert_eq!(err.to_string(), "Failed to get SonarQube metrics: boom");
        assert_eq!(err.source().map(|s| s.to_string()), Some("boom".to_string()));
    }
}
