use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum SurveyError {
    // Lookup errors
    #[error("unknown rating category '{category}'")]
    UnknownCategory {
        category: String,
        available: Vec<String>,
    },
    #[error("unknown dataset '{name}'")]
    UnknownDataset {
        name: String,
        available: Vec<String>,
    },

    // Configuration errors
    #[error("configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Parser errors
    #[error("parse error in {content_type}: {reason}")]
    ParseError {
        content_type: String,
        reason: String,
    },

    // Dataset validation
    #[error("validation failed with {} errors", .errors.len())]
    ValidationFailed {
        errors: Vec<String>,
    },

    // System errors
    #[error("system error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl SurveyError {
    pub fn unknown_category(category: &str, available: &[&str]) -> Self {
        Self::UnknownCategory {
            category: category.to_string(),
            available: available.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True for errors caused by a bad caller-supplied argument.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::UnknownCategory { .. } | Self::UnknownDataset { .. })
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } | Self::ValidationFailed { .. } => {
                ErrorSeverity::High
            }
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::UnknownCategory { .. }
            | Self::UnknownDataset { .. }
            | Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownCategory { category, available } => {
                let mut msg = format!("Rating category '{category}' not found");
                if !available.is_empty() {
                    msg.push_str(&format!("\n💡 Available categories: {}", available.join(", ")));
                }
                msg
            }
            Self::UnknownDataset { name, available } => {
                let mut msg = format!("Dataset '{name}' not found");
                if !available.is_empty() {
                    msg.push_str(&format!("\n💡 Available datasets: {}", available.join(", ")));
                }
                msg
            }
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {message}");
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!(
                    "Configuration file error at '{path}': {reason}\n\
                     💡 Check file permissions and syntax"
                )
            }
            Self::ParseError { content_type, reason } => {
                format!(
                    "Parse error in {content_type}: {reason}\n\
                     💡 Check the format and syntax of the input"
                )
            }
            Self::ValidationFailed { errors } => {
                let mut msg = format!("Validation failed with {} errors:", errors.len());
                for (i, error) in errors.iter().enumerate() {
                    msg.push_str(&format!("\n  {}. {}", i + 1, error));
                }
                msg
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {operation}: {reason}")
            }
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for survey operations
pub type SurveyResult<T> = Result<T, SurveyError>;

/// Error handler for consistent error reporting
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message.
    pub fn handle_error(error: &SurveyError) {
        let severity = error.severity();
        log::error!("[{}] {:?}", severity.name(), error);
        eprintln!("{} {}", severity.emoji(), error.user_message());
    }
}

impl From<std::io::Error> for SurveyError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for SurveyError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for SurveyError {
    fn from(error: toml::de::Error) -> Self {
        Self::ParseError {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<toml::ser::Error> for SurveyError {
    fn from(error: toml::ser::Error) -> Self {
        Self::ParseError {
            content_type: "TOML".to_string(),
            reason: error.to_string(),
        }
    }
}
