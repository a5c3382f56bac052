use thiserror::Error;

/// Message shown on the error page, whatever the underlying load failure was.
pub const GENERIC_LOAD_FAILURE: &str = "Failed to load data. Check console for details.";

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Network response was not ok: HTTP {status}")]
    HttpStatusError { status: u16 },

    #[error("Response parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Storage,
    Configuration,
}

impl FolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::NetworkError(_) | FolioError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            FolioError::ParseError(_) => ErrorCategory::Data,
            FolioError::IoError(_) => ErrorCategory::Storage,
            FolioError::ConfigError { .. }
            | FolioError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// True for failures that end the page load (network and parse).
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Network | ErrorCategory::Data
        )
    }

    pub fn user_friendly_message(&self) -> String {
        if self.is_load_failure() {
            return GENERIC_LOAD_FAILURE.to_string();
        }
        match self {
            FolioError::IoError(e) => format!("Could not write the page: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the endpoint URL and your connection, then run again",
            ErrorCategory::Data => "Make sure the endpoint returns { profile, experience, work } JSON",
            ErrorCategory::Storage => "Check that the output path exists and is writable",
            ErrorCategory::Configuration => "Fix the configuration value and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_failures_share_one_message() {
        let status = FolioError::HttpStatusError { status: 500 };
        let parse = FolioError::ParseError(serde_json::from_str::<u8>("nope").unwrap_err());

        assert!(status.is_load_failure());
        assert!(parse.is_load_failure());
        assert_eq!(status.user_friendly_message(), GENERIC_LOAD_FAILURE);
        assert_eq!(parse.user_friendly_message(), GENERIC_LOAD_FAILURE);
    }

    #[test]
    fn config_errors_are_not_load_failures() {
        let err = FolioError::InvalidConfigValueError {
            field: "links.email".to_string(),
            value: "nobody".to_string(),
            reason: "Expected an address like name@example.com".to_string(),
        };
        assert!(!err.is_load_failure());
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_friendly_message().contains("links.email"));
    }
}
