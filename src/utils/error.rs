use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Recipe catalog not found: {location}")]
    CatalogNotFound { location: String },

    #[error("Failed to fetch recipe catalog from {location}: {message}")]
    CatalogFetchError { location: String, message: String },

    #[error("Ingredient detection failed: {message}")]
    DetectionError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Catalog,
    Input,
    Output,
    Network,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MatchError::HttpError(_) => ErrorCategory::Network,
            MatchError::CsvError(_) | MatchError::SerializationError(_) => ErrorCategory::Output,
            MatchError::IoError(_) => ErrorCategory::Output,
            MatchError::ConfigError { .. }
            | MatchError::ConfigValidationError { .. }
            | MatchError::InvalidConfigValueError { .. }
            | MatchError::MissingConfigError { .. } => ErrorCategory::Configuration,
            MatchError::CatalogNotFound { .. } | MatchError::CatalogFetchError { .. } => {
                ErrorCategory::Catalog
            }
            MatchError::DetectionError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 目錄缺失會降級為空結果，不算致命
            MatchError::CatalogNotFound { .. } => ErrorSeverity::Low,
            MatchError::HttpError(_) | MatchError::CatalogFetchError { .. } => {
                ErrorSeverity::Medium
            }
            MatchError::DetectionError { .. }
            | MatchError::CsvError(_)
            | MatchError::SerializationError(_) => ErrorSeverity::High,
            MatchError::IoError(_)
            | MatchError::ConfigError { .. }
            | MatchError::ConfigValidationError { .. }
            | MatchError::InvalidConfigValueError { .. }
            | MatchError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MatchError::HttpError(_) | MatchError::CatalogFetchError { .. } => {
                "Check network connectivity and the catalog URL, then retry".to_string()
            }
            MatchError::CatalogNotFound { location } => {
                format!("Make sure the recipe catalog exists at '{}'", location)
            }
            MatchError::CsvError(_) | MatchError::SerializationError(_) => {
                "Try a different output format (json, csv or text)".to_string()
            }
            MatchError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            MatchError::ConfigError { .. } | MatchError::ConfigValidationError { .. } => {
                "Review the configuration file syntax and values".to_string()
            }
            MatchError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            MatchError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            MatchError::DetectionError { .. } => {
                "Supply ingredients directly with --ingredients".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Catalog => format!("Recipe catalog problem: {}", self),
            ErrorCategory::Input => format!("Could not read your ingredients: {}", self),
            ErrorCategory::Output => format!("Could not write recommendations: {}", self),
            ErrorCategory::Network => format!("Network problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
