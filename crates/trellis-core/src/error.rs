//! Error types and exit codes for trellis
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing node or link)

use thiserror::Error;

/// Exit codes reported by the trellis binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing node or link (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during trellis operations
#[derive(Error, Debug)]
pub enum TrellisError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("no node with the given payload exists in the graph")]
    NodeNotFound,

    #[error("no link with the given endpoints exists in the graph")]
    LinkNotFound,

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl TrellisError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TrellisError::UnknownFormat(_) | TrellisError::UsageError(_) => ExitCode::Usage,
            TrellisError::NodeNotFound | TrellisError::LinkNotFound => ExitCode::Data,
            TrellisError::Json(_) | TrellisError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TrellisError::UnknownFormat(_) => "unknown_format",
            TrellisError::UsageError(_) => "usage_error",
            TrellisError::NodeNotFound => "node_not_found",
            TrellisError::LinkNotFound => "link_not_found",
            TrellisError::Json(_) => "json_error",
            TrellisError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for trellis operations
pub type Result<T> = std::result::Result<T, TrellisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(TrellisError::NodeNotFound.exit_code(), ExitCode::Data);
        assert_eq!(TrellisError::LinkNotFound.exit_code(), ExitCode::Data);
        assert_eq!(
            TrellisError::UsageError("bad".to_string()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            TrellisError::Other("boom".to_string()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_error_envelope() {
        let json = TrellisError::LinkNotFound.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "link_not_found");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("endpoints"));
    }
}
