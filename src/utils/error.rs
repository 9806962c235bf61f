use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("JSON decode error: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("API reported status code {status_code} (expected 200)")]
    ApiStatusError { status_code: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No country matches selection '{selection}'")]
    SelectionError { selection: String },

    #[error("Background task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::HttpError(_) | AppError::HttpStatusError { .. } => ErrorCategory::Network,
            AppError::DecodeError(_) | AppError::ApiStatusError { .. } => ErrorCategory::Data,
            AppError::ConfigError { .. } | AppError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            AppError::SelectionError { .. } => ErrorCategory::Input,
            AppError::IoError(_) | AppError::TaskError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::HttpError(_) => "Check the network connection and the endpoint URL",
            AppError::HttpStatusError { .. } => "The service rejected the request, try again later",
            AppError::DecodeError(_) => "The endpoint returned an unexpected payload, check the endpoint URL",
            AppError::ApiStatusError { .. } => "The dataset service reported a failure, try again later",
            AppError::IoError(_) => "Check file permissions and that the path exists",
            AppError::ConfigError { .. } | AppError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line arguments"
            }
            AppError::SelectionError { .. } => "Pick a row number or a two-letter country code from the list",
            AppError::TaskError(_) => "Re-run the command",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::HttpError(_) | AppError::HttpStatusError { .. } => {
                "Could not reach the data service".to_string()
            }
            AppError::DecodeError(_) | AppError::ApiStatusError { .. } => {
                "The data service returned data that could not be used".to_string()
            }
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
