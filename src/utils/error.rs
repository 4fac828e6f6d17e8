use thiserror::Error;

pub const MISSING_PARAMETERS_MESSAGE: &str = "Missing required parameters";
pub const INVALID_DATE_MESSAGE: &str = "Invalid date format. Use YYYY-MM-DD.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Error, Debug)]
pub enum RateError {
    #[error("Missing required parameters")]
    MissingParameters,

    #[error("Invalid date format. Use YYYY-MM-DD. (got {value:?})")]
    InvalidDateFormat { value: String },

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data integrity error: {message}")]
    DataIntegrityError { message: String },

    #[error("Unexpected error: {message}")]
    Unexpected { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    Datastore,
    Configuration,
    Data,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RateError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RateError::MissingParameters | RateError::InvalidDateFormat { .. } => {
                ErrorCategory::Request
            }
            RateError::DatabaseError(_) => ErrorCategory::Datastore,
            RateError::ConfigError { .. }
            | RateError::MissingConfigError { .. }
            | RateError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RateError::CsvError(_)
            | RateError::IoError(_)
            | RateError::SerializationError(_)
            | RateError::DataIntegrityError { .. } => ErrorCategory::Data,
            RateError::Unexpected { .. } => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Request => ErrorSeverity::Low,
            ErrorCategory::Datastore => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    /// 對呼叫端可見的訊息 (HTTP body 的 `error` 欄位)
    pub fn public_message(&self) -> String {
        match self {
            RateError::MissingParameters => MISSING_PARAMETERS_MESSAGE.to_string(),
            RateError::InvalidDateFormat { .. } => INVALID_DATE_MESSAGE.to_string(),
            // 資料庫錯誤直接回傳底層訊息，僅適用於受信任的內部呼叫端
            RateError::DatabaseError(e) => e.to_string(),
            _ => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Request => self.public_message(),
            ErrorCategory::Datastore => format!("Could not query the rates database: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Data => format!("Could not load rate data: {}", self),
            ErrorCategory::Internal => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RateError::MissingParameters => {
                "Provide date_from, date_to, origin and destination query parameters"
            }
            RateError::InvalidDateFormat { .. } => "Use calendar dates formatted as YYYY-MM-DD",
            RateError::DatabaseError(_) => {
                "Check DATABASE_URL and that the database is reachable, then retry"
            }
            RateError::ConfigError { .. }
            | RateError::MissingConfigError { .. }
            | RateError::InvalidConfigValueError { .. } => {
                "Review the TOML file and command line flags"
            }
            RateError::CsvError(_) | RateError::IoError(_) | RateError::SerializationError(_) => {
                "Make sure the fixture files exist and have the expected headers"
            }
            RateError::DataIntegrityError { .. } => {
                "Remove duplicate region slugs or port codes from the fixture files"
            }
            RateError::Unexpected { .. } => "Retry the request; report the issue if it persists",
        }
    }
}

pub type Result<T> = std::result::Result<T, RateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_messages_are_stable() {
        assert_eq!(
            RateError::MissingParameters.public_message(),
            "Missing required parameters"
        );
        assert_eq!(
            RateError::InvalidDateFormat {
                value: "2024-13-01".to_string()
            }
            .public_message(),
            "Invalid date format. Use YYYY-MM-DD."
        );
        assert_eq!(
            RateError::Unexpected {
                message: "secret detail".to_string()
            }
            .public_message(),
            "An unexpected error occurred"
        );
    }

    #[test]
    fn test_database_error_exposes_underlying_message() {
        let err = RateError::from(sqlx::Error::Protocol("connection refused".to_string()));
        assert_eq!(err.category(), ErrorCategory::Datastore);
        assert!(err.public_message().contains("connection refused"));
        assert!(!err.public_message().starts_with("Database error"));
    }

    #[test]
    fn test_data_integrity_suggestion_names_duplicates() {
        let err = RateError::DataIntegrityError {
            message: "duplicate ports.code \"P1\"".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert!(err.recovery_suggestion().contains("duplicate"));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(RateError::MissingParameters.severity() < ErrorSeverity::Medium);
        assert_eq!(
            RateError::ConfigError {
                message: "x".to_string()
            }
            .severity(),
            ErrorSeverity::High
        );
    }
}
