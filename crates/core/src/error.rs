//! Error handling with codes, context, and recovery suggestions
//!
//! Every failure the ranker can report carries:
//! - An error code for programmatic handling
//! - Optional context and a recovery suggestion
//! - A mapping to a process exit code

use std::fmt;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // IO errors (2xxx)
    /// Any other read or write failure
    IoError = 2000,
    /// A path did not exist
    FileNotFound = 2001,
    /// A path could not be opened
    PermissionDenied = 2002,
    /// Standard output was closed by the reader
    BrokenPipe = 2005,

    // Configuration errors (3xxx)
    /// Config file could not be read
    ConfigError = 3000,
    /// Explicit config path does not exist
    ConfigNotFound = 3001,
    /// Config file is not valid TOML for the schema
    ConfigParseError = 3002,
    /// Config value out of range
    InvalidConfigValue = 3004,

    // Validation errors (6xxx)
    /// Reader options rejected at run time
    InvalidInput = 6001,
    /// Bad command line usage
    InvalidArguments = 6005,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {}", ctx)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self.code {
            ErrorCode::BrokenPipe => exit_codes::SUCCESS,
            ErrorCode::ConfigError
            | ErrorCode::ConfigNotFound
            | ErrorCode::ConfigParseError
            | ErrorCode::InvalidConfigValue => exit_codes::CONFIG_ERROR,
            _ => exit_codes::FAILURE,
        }
    }

    // Convenience constructors

    /// Generic configuration failure
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// An explicitly requested config file does not exist
    pub fn config_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create a .fuzzrank.toml file or pass --config with an existing path")
    }

    /// A config value parsed but is out of range
    pub fn invalid_config_value(field: &str, reason: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidConfigValue,
            format!("Invalid value for `{}`: {}", field, reason),
        )
    }

    /// Bad command line usage
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArguments, message)
            .with_suggestion("usage: fuzzrank [OPTIONS] <QUERY>")
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for CLI commands
pub mod exit_codes {
    /// Ranking finished (also used when the reader closes the pipe early)
    pub const SUCCESS: i32 = 0;
    /// Usage, input or output failure
    pub const FAILURE: i32 = 1;
    /// The configuration could not be found, parsed or validated
    pub const CONFIG_ERROR: i32 = 3;
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            std::io::ErrorKind::BrokenPipe => ErrorCode::BrokenPipe,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(ErrorCode::ConfigParseError, format!("TOML parse error: {}", err))
            .with_source(err)
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Attach context to the error, if any
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::FileNotFound.to_string(), "E2001");
        assert_eq!(ErrorCode::InvalidArguments.to_string(), "E6005");
    }

    #[test]
    fn test_error_code_numbers() {
        assert_eq!(ErrorCode::IoError.code(), 2000);
        assert_eq!(ErrorCode::ConfigParseError.code(), 3002);
    }

    #[test]
    fn test_invalid_arguments_exits_with_failure() {
        let err = Error::invalid_arguments("missing query");
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
        assert!(err.suggestion.as_deref().unwrap().contains("<QUERY>"));
    }

    #[test]
    fn test_config_errors_exit_with_config_code() {
        assert_eq!(Error::config_not_found("x.toml").exit_code(), exit_codes::CONFIG_ERROR);
        assert_eq!(
            Error::invalid_config_value("input.max_line_length", "must be at least 1").exit_code(),
            exit_codes::CONFIG_ERROR
        );
    }

    #[test]
    fn test_broken_pipe_is_not_a_failure() {
        let err: Error = std::io::Error::from(std::io::ErrorKind::BrokenPipe).into();
        assert_eq!(err.code, ErrorCode::BrokenPipe);
        assert_eq!(err.exit_code(), exit_codes::SUCCESS);
    }

    #[test]
    fn test_display_includes_context_and_suggestion() {
        let err = Error::config("read failed").with_context("While reading fuzzrank.toml");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[E3000] read failed"));
        assert!(rendered.contains("Context: While reading fuzzrank.toml"));
    }

    #[test]
    fn test_toml_error_is_a_parse_error() {
        let err: Error = toml::from_str::<toml::Value>("key = ").unwrap_err().into();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
        assert!(err.source.is_some());
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<()> = Err(Error::invalid_arguments("bad"));
        let err = result.context("During startup").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("During startup"));
    }
}
