//! Error types for Robolearn

use thiserror::Error;

/// Fallback message when an error response carries no usable body
pub const GENERIC_API_ERROR: &str = "An error occurred";

/// Message for requests that never received a usable response
pub const NETWORK_ERROR: &str = "Network error. Please check your connection.";

/// Classification of errors raised by the API access layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Rejected input or business rule (4xx other than 401/403)
    Validation,
    /// Authentication or authorization failure (401/403)
    Auth,
    /// No usable response: DNS, refused connection, timeout, malformed body
    Connectivity,
    /// Anything else the backend reports (5xx)
    Unknown,
}

impl ApiErrorKind {
    /// Classify an HTTP status code. Status 0 means no response was received.
    pub fn from_status(status: u16) -> Self {
        match status {
            0 => ApiErrorKind::Connectivity,
            401 | 403 => ApiErrorKind::Auth,
            400..=499 => ApiErrorKind::Validation,
            _ => ApiErrorKind::Unknown,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Structured error raised by the API access layer
    #[error("{message}")]
    Api {
        kind: ApiErrorKind,
        /// HTTP status code, or 0 when no response was received
        status: u16,
        message: String,
        /// Offending fields for validation errors, when the backend names them
        fields: Option<Vec<String>>,
    },

    #[error("Not logged in. Run 'robolearn login' first.")]
    NotAuthenticated,

    #[error("This action requires the {0} role")]
    Forbidden(String),

    #[error("Config file not found. Run 'robolearn init' first.")]
    ConfigNotFound,

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build a connectivity error (status 0, generic message)
    pub fn network() -> Self {
        Error::Api {
            kind: ApiErrorKind::Connectivity,
            status: 0,
            message: NETWORK_ERROR.to_string(),
            fields: None,
        }
    }

    /// Build a structured API error from an HTTP status and message
    pub fn api(status: u16, message: impl Into<String>, fields: Option<Vec<String>>) -> Self {
        Error::Api {
            kind: ApiErrorKind::from_status(status),
            status,
            message: message.into(),
            fields,
        }
    }

    /// HTTP status for API errors, None for local errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Error classification for API errors, None for local errors
    pub fn kind(&self) -> Option<ApiErrorKind> {
        match self {
            Error::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Field names attached to a validation error
    pub fn fields(&self) -> Option<&[String]> {
        match self {
            Error::Api { fields, .. } => fields.as_deref(),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(ApiErrorKind::from_status(0), ApiErrorKind::Connectivity);
        assert_eq!(ApiErrorKind::from_status(401), ApiErrorKind::Auth);
        assert_eq!(ApiErrorKind::from_status(403), ApiErrorKind::Auth);
        assert_eq!(ApiErrorKind::from_status(400), ApiErrorKind::Validation);
        assert_eq!(ApiErrorKind::from_status(404), ApiErrorKind::Validation);
        assert_eq!(ApiErrorKind::from_status(422), ApiErrorKind::Validation);
        assert_eq!(ApiErrorKind::from_status(500), ApiErrorKind::Unknown);
        assert_eq!(ApiErrorKind::from_status(503), ApiErrorKind::Unknown);
    }

    #[test]
    fn test_network_error_has_status_zero() {
        let err = Error::network();
        assert_eq!(err.status(), Some(0));
        assert_eq!(err.kind(), Some(ApiErrorKind::Connectivity));
        assert_eq!(err.to_string(), NETWORK_ERROR);
    }

    #[test]
    fn test_api_error_preserves_fields() {
        let err = Error::api(400, "Invalid input", Some(vec!["email".to_string()]));
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.kind(), Some(ApiErrorKind::Validation));
        assert_eq!(err.fields(), Some(&["email".to_string()][..]));
        assert_eq!(err.to_string(), "Invalid input");
    }
}
