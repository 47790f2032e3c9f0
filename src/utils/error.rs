use thiserror::Error;

#[derive(Error, Debug)]
pub enum VacancyError {
    #[error("{provider}: area '{area}' not found")]
    LocationNotFound { provider: String, area: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

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

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Network,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl VacancyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            VacancyError::LocationNotFound { .. } => ErrorCategory::Lookup,
            VacancyError::ApiError(_) => ErrorCategory::Network,
            VacancyError::CsvError(_)
            | VacancyError::IoError(_)
            | VacancyError::SerializationError(_) => ErrorCategory::Output,
            VacancyError::ConfigError { .. }
            | VacancyError::ConfigValidationError { .. }
            | VacancyError::InvalidConfigValueError { .. }
            | VacancyError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn is_location_not_found(&self) -> bool {
        matches!(self, VacancyError::LocationNotFound { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            VacancyError::LocationNotFound { provider, area } => {
                format!("{} does not know the area '{}'", provider, area)
            }
            VacancyError::ApiError(e) => match e.status() {
                Some(status) => format!("Job board API answered with HTTP {}", status),
                None => "Could not reach the job board API".to_string(),
            },
            VacancyError::CsvError(_) | VacancyError::SerializationError(_) => {
                "Failed to format the report".to_string()
            }
            VacancyError::IoError(e) => format!("Failed to write the report: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Lookup => "Check the spelling of the area name or run with --no-area",
            ErrorCategory::Network => "Check your network connection and API key, then retry",
            ErrorCategory::Output => "Check that standard output is writable",
            ErrorCategory::Configuration => "Review the command line flags or the TOML config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, VacancyError>;
