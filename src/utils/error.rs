use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteGenError {
    #[error("Failed to read input file '{path}': {source}")]
    InputReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input is not valid UTF-8: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("Cannot pick a route stop from an empty airport code list")]
    EmptyCodeList,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Malformed route file at line {line}: {reason}")]
    RouteFileError { line: usize, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RouteGenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputReadError { .. } | Self::OutputWriteError { .. } | Self::IoError(_) => {
                ErrorCategory::Io
            }
            Self::EncodingError(_) | Self::EmptyCodeList | Self::RouteFileError { .. } => {
                ErrorCategory::Data
            }
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 磁碟或權限問題
            Self::OutputWriteError { .. } | Self::IoError(_) => ErrorSeverity::Critical,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorSeverity::Medium,
            Self::InputReadError { .. }
            | Self::EncodingError(_)
            | Self::EmptyCodeList
            | Self::RouteFileError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InputReadError { .. } => {
                "Check that the airport code file exists and is readable, or pass --input"
            }
            Self::OutputWriteError { .. } | Self::IoError(_) => {
                "Check permissions and free space for the output location"
            }
            Self::EncodingError(_) => "Save the airport code file as UTF-8 text",
            Self::EmptyCodeList => "Add at least one airport code to the input file",
            Self::RouteFileError { .. } => {
                "Regenerate the route file; each header must be followed by its route lines"
            }
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => "Fix the configuration file or CLI arguments",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InputReadError { path, .. } => {
                format!("Could not read airport codes from '{}'", path)
            }
            Self::OutputWriteError { path, .. } => format!("Could not write routes to '{}'", path),
            Self::EmptyCodeList => {
                "The airport code list is empty, no routes can be built".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl ErrorSeverity {
    /// 依嚴重程度決定退出碼，失敗一律非零
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Medium => 2,
            Self::High => 1,
            Self::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, RouteGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let missing = RouteGenError::InputReadError {
            path: "airportcodes.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(missing.category(), ErrorCategory::Io);
        assert_eq!(missing.severity(), ErrorSeverity::High);
        assert!(missing.user_friendly_message().contains("airportcodes.txt"));

        let empty = RouteGenError::EmptyCodeList;
        assert_eq!(empty.category(), ErrorCategory::Data);

        let config = RouteGenError::MissingConfigError {
            field: "output.path".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_every_severity_has_failure_exit_code() {
        for severity in [ErrorSeverity::Medium, ErrorSeverity::High, ErrorSeverity::Critical] {
            assert_ne!(severity.exit_code(), 0);
        }
        assert_eq!(RouteGenError::EmptyCodeList.severity().exit_code(), 1);
    }

    #[test]
    fn test_write_failure_is_critical() {
        let err = RouteGenError::OutputWriteError {
            path: "routes.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
