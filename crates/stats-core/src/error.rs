use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the number-stats crates.
#[derive(Error, Debug)]
pub enum StatsError {
    /// The data source does not exist or could not be located.
    #[error("File not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// A non-blank line could not be parsed as a base-10 signed integer.
    #[error("Invalid integer value encountered in the file {path} at line {line_number}: {line:?}")]
    MalformedEntry {
        path: PathBuf,
        /// 1-based line number within the source.
        line_number: usize,
        /// The offending line, already trimmed.
        line: String,
    },

    /// Any other I/O failure while opening or reading the source.
    #[error("Unexpected error reading file {path}: {source}")]
    UnexpectedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A construction-time argument failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A report could not be serialized.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StatsError {
    /// Short, stable name of the error kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            StatsError::SourceNotFound { .. } => "source_not_found",
            StatsError::MalformedEntry { .. } => "malformed_entry",
            StatsError::UnexpectedIo { .. } => "unexpected_io",
            StatsError::InvalidConfiguration(_) => "invalid_configuration",
            StatsError::Serialize(_) => "serialize",
        }
    }
}

/// Convenience alias used throughout the number-stats crates.
pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_source_not_found() {
        let err = StatsError::SourceNotFound {
            path: PathBuf::from("/missing/numbers.txt"),
        };
        assert_eq!(err.to_string(), "File not found: /missing/numbers.txt");
        assert_eq!(err.kind(), "source_not_found");
    }

    #[test]
    fn test_error_display_malformed_entry() {
        let err = StatsError::MalformedEntry {
            path: PathBuf::from("data.txt"),
            line_number: 3,
            line: "abc".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid integer value"));
        assert!(msg.contains("data.txt"));
        assert!(msg.contains("line 3"));
        assert!(msg.contains("\"abc\""));
    }

    #[test]
    fn test_error_display_unexpected_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StatsError::UnexpectedIo {
            path: PathBuf::from("/secret/numbers.txt"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Unexpected error reading file"));
        assert!(msg.contains("/secret/numbers.txt"));
        assert!(msg.contains("denied"));
        assert_eq!(err.kind(), "unexpected_io");
    }

    #[test]
    fn test_error_display_invalid_configuration() {
        let err = StatsError::InvalidConfiguration("File path can't be blank".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: File path can't be blank"
        );
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err: StatsError = json_err.into();
        assert!(err.to_string().contains("Failed to serialize report"));
        assert_eq!(err.kind(), "serialize");
    }
}
