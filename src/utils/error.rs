use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("No demo matches '{name}'")]
    UnknownDemo { name: String },

    #[error("Could not find {kind} {value}")]
    UnknownVariant { kind: String, value: String },

    #[error("No more input available for prompt '{prompt}'")]
    InputExhausted { prompt: String },

    #[error("Invalid answer '{value}' for '{prompt}': {reason}")]
    InvalidInput {
        prompt: String,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    InvalidOperation { message: String },

    #[error("Not enough money to buy ingredients! (needed {needed}, got {available})")]
    InsufficientFunds { needed: f64, available: f64 },

    #[error("Codec error: {message}")]
    CodecError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Demo,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    pub fn unknown_variant(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind: kind.into(),
            value: value.into(),
        }
    }

    pub fn codec(message: impl Into<String>) -> Self {
        Self::CodecError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::UnknownDemo { .. } => ErrorCategory::Configuration,
            Self::InputExhausted { .. } | Self::InvalidInput { .. } => ErrorCategory::Input,
            Self::UnknownVariant { .. }
            | Self::InvalidOperation { .. }
            | Self::InsufficientFunds { .. }
            | Self::CodecError { .. } => ErrorCategory::Demo,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 示範本身的失敗屬於預期中的教學輸出
            ErrorCategory::Demo => ErrorSeverity::Low,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::UnknownDemo { .. } => "Run `pattern-catalog list` to see the available demo names",
            Self::InputExhausted { .. } => {
                "Provide more answers with --input or the [inputs] table of the config file"
            }
            Self::InvalidInput { .. } => "Answer the prompt with one of the listed choices",
            Self::ConfigValidationError { .. } | Self::ConfigError { .. } => {
                "Check the TOML syntax and section names of the config file"
            }
            Self::InvalidConfigValueError { .. } | Self::MissingConfigError { .. } => {
                "Fix the reported setting and run again"
            }
            Self::IoError(_) => "Check that the scratch directory exists and is writable",
            Self::SerializationError(_) => "Report this as a bug",
            Self::UnknownVariant { .. }
            | Self::InvalidOperation { .. }
            | Self::InsufficientFunds { .. }
            | Self::CodecError { .. } => "This failure is part of the demo; no action needed",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Input problem: {}", self),
            ErrorCategory::Demo => format!("Demo stopped: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let err = CatalogError::UnknownDemo {
            name: "singleton-x".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);

        let err = CatalogError::InputExhausted {
            prompt: "Enter a email: ".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);

        let err = CatalogError::invalid_operation("Please open a file first.");
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.to_string(), "Please open a file first.");
    }

    #[test]
    fn test_unknown_variant_message() {
        let err = CatalogError::unknown_variant("shape", "triange");
        assert_eq!(err.to_string(), "Could not find shape triange");
        assert!(err.user_friendly_message().starts_with("Demo stopped"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: CatalogError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
