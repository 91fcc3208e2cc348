use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not connect to Redis: {0}")]
    Connection(String),

    #[error("JSON file not found at: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not read the JSON file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("An error occurred during the write command: {0}")]
    Write(String),

    #[error("An error occurred during verification: {0}")]
    Verify(String),

    #[error("Verification failed: the write to '{key}' did not save any data")]
    VerificationFailed { key: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Render a Redis error with a hint about which layer failed.
pub(crate) fn describe_redis_error(e: &redis::RedisError) -> String {
    if e.is_timeout() {
        format!("Request timed out: {}", e)
    } else if e.is_connection_refusal() {
        format!("Connection refused: {}", e)
    } else if e.is_connection_dropped() {
        format!("Connection dropped: {}", e)
    } else if e.is_io_error() {
        format!("IO error: {}", e)
    } else {
        e.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_message() {
        let err = Error::FileNotFound(PathBuf::from("./missing.json"));
        assert_eq!(err.to_string(), "JSON file not found at: ./missing.json");
    }

    #[test]
    fn test_verification_failed_message() {
        let err = Error::VerificationFailed {
            key: "board".to_string(),
        };
        assert!(err.to_string().contains("'board'"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_describe_plain_redis_error() {
        let e = redis::RedisError::from((redis::ErrorKind::TypeError, "bad type"));
        assert!(describe_redis_error(&e).contains("bad type"));
    }
}
