use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration '{field}'")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Conflict,
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

impl DirectoryError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        DirectoryError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DirectoryError::Conflict {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DirectoryError::NotFound { .. } => ErrorCategory::NotFound,
            DirectoryError::Conflict { .. } => ErrorCategory::Conflict,
            DirectoryError::ConfigError { .. }
            | DirectoryError::ConfigValidationError { .. }
            | DirectoryError::InvalidConfigValueError { .. }
            | DirectoryError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DirectoryError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::NotFound => ErrorSeverity::Low,
            ErrorCategory::Conflict => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DirectoryError::NotFound { entity, .. } => {
                format!("Check that the {} exists before retrying", entity.to_lowercase())
            }
            DirectoryError::Conflict { .. } => {
                "Remove the associated employees first, or use the with-employees delete"
                    .to_string()
            }
            DirectoryError::ConfigError { .. } | DirectoryError::ConfigValidationError { .. } => {
                "Check the configuration file syntax and section names".to_string()
            }
            DirectoryError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and restart", field)
            }
            DirectoryError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration", field)
            }
            DirectoryError::IoError(_) => {
                "Check that the file exists and the address is not already in use".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
