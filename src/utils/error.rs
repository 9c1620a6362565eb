use crate::domain::model::Permission;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Permission not granted: {permission}")]
    PermissionDenied { permission: Permission },

    #[error("Weather fetch failed: {message}")]
    FetchFailure { message: String },

    #[error("No weather data for any location")]
    EmptyResult,

    #[error("Failed to enqueue data: {message}")]
    TransferFailure { message: String },

    #[error("Payload encoding failed: {message}")]
    EncodeError { message: String },

    #[error("Payload decoding failed: {message}")]
    DecodeError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Permission,
    Transfer,
    Fetch,
    Data,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PanelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PanelError::PermissionDenied { .. } => ErrorCategory::Permission,
            PanelError::TransferFailure { .. } | PanelError::IoError(_) => {
                ErrorCategory::Transfer
            }
            PanelError::ApiError(_) | PanelError::FetchFailure { .. } => ErrorCategory::Fetch,
            PanelError::EmptyResult
            | PanelError::SerializationError(_)
            | PanelError::EncodeError { .. }
            | PanelError::DecodeError { .. } => ErrorCategory::Data,
            PanelError::ConfigError { .. }
            | PanelError::InvalidConfigValueError { .. }
            | PanelError::MissingConfigError { .. }
            | PanelError::ConfigValidationError { .. } => ErrorCategory::Config,
        }
    }

    /// Low and Medium are logged as warnings, anything above as errors.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PanelError::EmptyResult => ErrorSeverity::Low,
            PanelError::TransferFailure { .. }
            | PanelError::IoError(_)
            | PanelError::DecodeError { .. } => ErrorSeverity::Medium,
            PanelError::ApiError(_)
            | PanelError::FetchFailure { .. }
            | PanelError::SerializationError(_)
            | PanelError::EncodeError { .. }
            | PanelError::PermissionDenied { .. } => ErrorSeverity::High,
            PanelError::ConfigError { .. }
            | PanelError::InvalidConfigValueError { .. }
            | PanelError::MissingConfigError { .. }
            | PanelError::ConfigValidationError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity() <= ErrorSeverity::Medium
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Permission => format!("Feature unavailable: {}", self),
            ErrorCategory::Transfer => format!("Could not hand data to the watch: {}", self),
            ErrorCategory::Fetch => format!("Could not fetch weather: {}", self),
            ErrorCategory::Data => format!("Unusable weather data: {}", self),
            ErrorCategory::Config => format!("Configuration problem: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PanelError::PermissionDenied { .. } => {
                "Grant the permission in the companion app settings"
            }
            PanelError::EmptyResult => "Check the configured locations; the next wake will retry",
            PanelError::ApiError(_) | PanelError::FetchFailure { .. } => {
                "Check network access and the weather endpoint; the next wake will retry"
            }
            PanelError::TransferFailure { .. } | PanelError::IoError(_) => {
                "Check that the outbox directory exists and is writable"
            }
            PanelError::SerializationError(_)
            | PanelError::EncodeError { .. }
            | PanelError::DecodeError { .. } => {
                "Make sure watch and companion run the same version"
            }
            _ => "Fix the configuration file and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, PanelError>;
