use thiserror::Error;

/// Classification of a non-successful HTTP status returned by the scores API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    BadRequest,
    Forbidden,
    NotFound,
    RateLimited,
    /// Any non-2xx status outside the four mapped codes.
    Unclassified(u16),
}

impl ApiErrorKind {
    /// Maps an HTTP status code to its error kind.
    /// Returns `None` for 2xx statuses.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            400 => Some(Self::BadRequest),
            403 => Some(Self::Forbidden),
            404 => Some(Self::NotFound),
            429 => Some(Self::RateLimited),
            other => Some(Self::Unclassified(other)),
        }
    }

    /// The line shown to the user for this kind of failure.
    pub fn message(&self) -> String {
        match self {
            Self::BadRequest => "Invalid request. Check parameters.".to_string(),
            Self::Forbidden => "This resource is restricted".to_string(),
            Self::NotFound => "This resource does not exist. Check parameters".to_string(),
            Self::RateLimited => {
                "You have exceeded your allowed requests per minute/day".to_string()
            }
            Self::Unclassified(status) => {
                format!("The API returned an unexpected status (HTTP {status})")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", .kind.message())]
    Api { kind: ApiErrorKind, url: String },

    #[error("Failed to fetch data from API: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {0}")]
    ApiUnexpectedStructure(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a classified API error for a failed request
    pub fn api(kind: ApiErrorKind, url: impl Into<String>) -> Self {
        Self::Api {
            kind,
            url: url.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure(message.into())
    }

    /// Returns the API error kind when this error came from an HTTP status.
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            AppError::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Check if error indicates the requested resource does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::Api {
                kind: ApiErrorKind::NotFound,
                ..
            }
        )
    }
}
