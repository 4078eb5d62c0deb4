// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for the QGI validation environment.

use thiserror::Error;

/// Errors that can occur while loading data or writing artifacts.
///
/// Physics computations themselves are total (pure arithmetic on hardcoded
/// constants); errors arise only at the I/O boundary.
#[derive(Debug, Error)]
pub enum QgiError {
    /// I/O failure reading a data file or writing an artifact
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a data file or report
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A data file exists but its contents fail a sanity check
    #[error("data error: {0}")]
    Data(String),

    /// Figure rendering failure (backend or layout)
    #[error("figure error: {0}")]
    Figure(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QgiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: QgiError = io.into();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn data_error_message() {
        let err = QgiError::Data("empty event list".to_string());
        assert_eq!(err.to_string(), "data error: empty event list");
    }
}
