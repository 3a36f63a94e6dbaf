use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetConsoleError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request rejected with status {status}: {message}")]
    RejectedStatus { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field} '{value}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The remote service could not be reached or refused the request.
    Remote,
    Input,
    Configuration,
    System,
}

impl PetConsoleError {
    pub fn rejected(status: reqwest::StatusCode, message: impl Into<String>) -> Self {
        Self::RejectedStatus {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    pub fn invalid_input(field: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Transport(_) | Self::RejectedStatus { .. } | Self::Serialization(_) => {
                ErrorCategory::Remote
            }
            Self::InvalidInput { .. } => ErrorCategory::Input,
            Self::ConfigError { .. } | Self::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            Self::Io(_) => ErrorCategory::System,
        }
    }

    pub fn is_rejected_status(&self) -> bool {
        matches!(self, Self::RejectedStatus { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Transport(e) if e.is_timeout() => {
                "The pet service did not answer in time".to_string()
            }
            Self::Transport(e) if e.is_connect() => {
                "Could not connect to the pet service".to_string()
            }
            Self::RejectedStatus { status: 404, .. } => {
                "The pet service could not find that pet".to_string()
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PetConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_status_message() {
        let err = PetConsoleError::rejected(reqwest::StatusCode::NOT_FOUND, "Pet not found");
        assert_eq!(
            err.to_string(),
            "Request rejected with status 404: Pet not found"
        );
        assert!(err.is_rejected_status());
        assert_eq!(err.category(), ErrorCategory::Remote);
        assert_eq!(
            err.user_friendly_message(),
            "The pet service could not find that pet"
        );
    }

    #[test]
    fn test_invalid_input_category() {
        let err = PetConsoleError::invalid_input("id", "abc", "not an integer");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.to_string(), "Invalid id 'abc': not an integer");
    }

    #[test]
    fn test_config_error_category() {
        let err = PetConsoleError::ConfigError {
            message: "missing [api] table".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_friendly_message().contains("missing [api] table"));
    }
}
