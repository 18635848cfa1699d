use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("failed to decode alert: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("alert has no rule id")]
    MissingRuleId,

    #[error("failed to read alert from {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("non-200 response from API: {status}, response body: {body}")]
    Delivery { status: u16, body: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl RelayError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            source_name: path.into().display().to_string(),
            source,
        }
    }

    pub fn stdin(source: std::io::Error) -> Self {
        Self::Io {
            source_name: "standard input".to_string(),
            source,
        }
    }

    /// True for errors caused by the alert payload itself rather than the
    /// downstream API or the local environment.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::MissingRuleId)
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_error_mentions_status_and_body() {
        let err = RelayError::Delivery {
            status: 500,
            body: "server error".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("server error"));
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_parse_errors_are_classified() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(RelayError::from(json_err).is_parse_error());
        assert!(RelayError::MissingRuleId.is_parse_error());
    }

    #[test]
    fn test_io_error_names_source() {
        let err = RelayError::io(
            "/tmp/missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("/tmp/missing.json"));
    }
}
