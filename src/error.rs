//! Error types for normalization and scoring.
//!
//! Errors are classified by origin:
//! - NormalizeError: malformed provider payloads, rejected at the parse boundary
//! - AnalyzerError: failures from the injected analyzer capability, passed
//!   through unchanged and never cached
//! - ScoreError: validation failures in the scoring core plus analyzer
//!   pass-through

use thiserror::Error;

/// Errors from the strict parse-and-validate normalizer boundary.
///
/// Malformed provider records are rejected with one of these rather than
/// silently defaulted into the canonical shape.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("Payload is not a valid {provider} message: {reason}")]
    MalformedPayload { provider: &'static str, reason: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unparseable timestamp: {0}")]
    BadTimestamp(String),
}

/// Errors raised by the injected analyzer capability.
///
/// The scoring core does not interpret these — they propagate verbatim to
/// the caller of `score_thread` and are never memoized.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Analyzer rate limit exceeded")]
    RateLimited,

    #[error("Analyzer network error: {0}")]
    Network(String),

    #[error("Analyzer returned a malformed response: {0}")]
    Malformed(String),

    #[error("{0}")]
    Upstream(String),
}

/// Errors from single-thread scoring.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Invalid input or invalid analyzer output.
    #[error("{0}")]
    Validation(String),

    /// Analyzer failure, propagated unchanged.
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),
}

impl ScoreError {
    /// Returns true if this error came from the analyzer capability
    /// (transient by nature) rather than from input validation.
    pub fn is_analyzer_failure(&self) -> bool {
        matches!(self, ScoreError::Analyzer(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer_error_passes_through_display() {
        let inner = AnalyzerError::Upstream("model overloaded".to_string());
        let err = ScoreError::from(inner);
        assert_eq!(err.to_string(), "model overloaded");
        assert!(err.is_analyzer_failure());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ScoreError::Validation("Thread id and subject are required".to_string());
        assert!(err.to_string().contains("required"));
        assert!(!err.is_analyzer_failure());
    }

    #[test]
    fn test_normalize_error_names_provider() {
        let err = NormalizeError::MalformedPayload {
            provider: "gmail",
            reason: "missing headers".to_string(),
        };
        assert!(err.to_string().contains("gmail"));
    }
}
