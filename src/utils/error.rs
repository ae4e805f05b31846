use thiserror::Error;

#[derive(Error, Debug)]
pub enum LintError {
    #[error("Config request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Summary serialization error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Cannot parse color '{value}': {reason}")]
    ColorParseError { value: String, reason: String },

    #[error("Audit processing error: {message}")]
    ProcessingError { message: String },

    #[error("{count} accessibility checks failed")]
    ChecksFailed { count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Configuration,
    Data,
    Audit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LintError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LintError::ApiError(_) => ErrorCategory::Network,
            LintError::IoError(_) | LintError::ZipError(_) => ErrorCategory::Storage,
            LintError::ConfigError { .. }
            | LintError::InvalidConfigValueError { .. }
            | LintError::MissingConfigError { .. }
            | LintError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            LintError::SerializationError(_)
            | LintError::CsvError(_)
            | LintError::ColorParseError { .. } => ErrorCategory::Data,
            LintError::ProcessingError { .. } | LintError::ChecksFailed { .. } => {
                ErrorCategory::Audit
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路錯誤可以重試
            LintError::ApiError(_) => ErrorSeverity::Medium,
            LintError::IoError(_) => ErrorSeverity::Critical,
            LintError::ZipError(_)
            | LintError::SerializationError(_)
            | LintError::CsvError(_)
            | LintError::ColorParseError { .. }
            | LintError::ProcessingError { .. }
            | LintError::ChecksFailed { .. } => ErrorSeverity::High,
            LintError::ConfigError { .. }
            | LintError::InvalidConfigValueError { .. }
            | LintError::MissingConfigError { .. }
            | LintError::ConfigValidationError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LintError::ApiError(_) => {
                "Check the config URL and your network connection, then retry".to_string()
            }
            LintError::IoError(_) => {
                "Check that the config file exists and the output path is writable".to_string()
            }
            LintError::ZipError(_) => {
                "Check free disk space and permissions on the output path".to_string()
            }
            LintError::SerializationError(_) => {
                "Make sure the chart configuration is valid JSON with a 'palette' array"
                    .to_string()
            }
            LintError::CsvError(_) => {
                "The summary could not be rendered; re-run with --verbose for details".to_string()
            }
            LintError::ConfigError { .. }
            | LintError::ConfigValidationError { .. }
            | LintError::InvalidConfigValueError { .. } => {
                "Fix the reported configuration field and run again".to_string()
            }
            LintError::MissingConfigError { field } => {
                format!("Add the '{}' field to the configuration", field)
            }
            LintError::ColorParseError { .. } => {
                "Use 6-digit hex colors like #1f77b4 in the palette and background".to_string()
            }
            LintError::ProcessingError { .. } => {
                "Re-run with --verbose to see which audit stage failed".to_string()
            }
            LintError::ChecksFailed { .. } => {
                "Open failing.json in the report bundle to see which checkpoints failed"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LintError::ApiError(_) => "Could not fetch the chart configuration".to_string(),
            LintError::IoError(_) => "Could not read or write a file".to_string(),
            LintError::ZipError(_) => "Could not create the report bundle".to_string(),
            LintError::SerializationError(_) => {
                "The chart configuration is not valid JSON".to_string()
            }
            LintError::CsvError(_) => "Could not render the summary tables".to_string(),
            LintError::ConfigError { message } => message.clone(),
            LintError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            LintError::MissingConfigError { field } => {
                format!("Configuration field '{}' is missing", field)
            }
            LintError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            LintError::ColorParseError { value, .. } => {
                format!("'{}' is not a valid hex color", value)
            }
            LintError::ProcessingError { message } => message.clone(),
            LintError::ChecksFailed { count } => {
                format!("{} accessibility checks failed (strict mode)", count)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LintError>;
