use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Feed request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Template rendering error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    #[error("Feed error: {message}")]
    FeedError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
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
    Rendering,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MapError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MapError::ApiError(_) => ErrorCategory::Network,
            MapError::FeedError { .. } | MapError::SerializationError(_) => ErrorCategory::Data,
            MapError::TemplateError(_) => ErrorCategory::Rendering,
            MapError::ConfigError { .. }
            | MapError::ConfigValidationError { .. }
            | MapError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            MapError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Rendering | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MapError::ApiError(e) if e.is_timeout() => {
                "The feed did not answer in time; raise --timeout-seconds or try again later".to_string()
            }
            MapError::ApiError(_) => {
                "Check the network connection and that the feed URL is reachable".to_string()
            }
            MapError::FeedError { .. } | MapError::SerializationError(_) => {
                "Make sure the feed returns a GeoJSON FeatureCollection".to_string()
            }
            MapError::TemplateError(_) => "The map page template failed to render".to_string(),
            MapError::IoError(_) => {
                "Check that the feed file exists and the output directory is writable".to_string()
            }
            MapError::ConfigError { .. } | MapError::ConfigValidationError { .. } => {
                "Review the TOML configuration file".to_string()
            }
            MapError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch the earthquake feed: {}", self),
            ErrorCategory::Data => format!("The earthquake feed could not be read: {}", self),
            ErrorCategory::Rendering => format!("The map page could not be rendered: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
