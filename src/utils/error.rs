use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("Resource not found: {path}")]
    ResourceNotFound { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Resource '{path}' is not valid UTF-8: {source}")]
    InvalidEncoding {
        path: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("Failed to dispatch message to {recipient}: {message}")]
    DispatchError { recipient: String, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Transport,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl GreeterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GreeterError::ResourceNotFound { .. }
            | GreeterError::IoError(_)
            | GreeterError::InvalidEncoding { .. } => ErrorCategory::Input,
            GreeterError::MalformedRow { .. } => ErrorCategory::Data,
            GreeterError::DispatchError { .. } | GreeterError::SerializationError(_) => {
                ErrorCategory::Transport
            }
            GreeterError::ConfigError { .. } | GreeterError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GreeterError::DispatchError { .. } => ErrorSeverity::Medium,
            GreeterError::ResourceNotFound { .. }
            | GreeterError::InvalidEncoding { .. }
            | GreeterError::MalformedRow { .. }
            | GreeterError::ConfigError { .. }
            | GreeterError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            GreeterError::IoError(_) | GreeterError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GreeterError::ResourceNotFound { path } => {
                format!("Check that '{}' exists or pass another file with --input", path)
            }
            GreeterError::IoError(_) => "Check file permissions and available disk".to_string(),
            GreeterError::InvalidEncoding { path, .. } => {
                format!("Re-save '{}' as UTF-8", path)
            }
            GreeterError::MalformedRow { .. } => {
                "Each row must read 'last, first, date, email'; use --skip-malformed to ignore bad rows"
                    .to_string()
            }
            GreeterError::DispatchError { .. } => {
                "Check the transport host and port, then run again".to_string()
            }
            GreeterError::SerializationError(_) => "Report this as a bug".to_string(),
            GreeterError::ConfigError { .. } | GreeterError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GreeterError::ResourceNotFound { path } => {
                format!("Employee file '{}' could not be found", path)
            }
            GreeterError::MalformedRow { line, reason } => {
                format!("Employee file has a bad row on line {}: {}", line, reason)
            }
            GreeterError::DispatchError { recipient, .. } => {
                format!("Greeting for {} could not be sent", recipient)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;
