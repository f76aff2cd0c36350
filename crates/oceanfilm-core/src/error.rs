//! Error types for movie queries
//!
//! Every operation surfaces failures as values from this taxonomy;
//! transport problems, malformed payloads and upstream rejections stay
//! separately observable. Errors serialize to their display string so a
//! frontend bridge can pass them through unchanged.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all movie query operations
#[derive(Error, Debug)]
pub enum QueryError {
    /// Search term was blank or whitespace-only
    #[error("empty query")]
    EmptyQuery,

    /// Movie identifier was blank
    #[error("empty movie id")]
    InvalidId,

    /// Access token missing from the environment
    #[error("OMDB_API_KEY not set")]
    MissingApiKey,

    /// HTTP transport failed (DNS, timeout, connection refused)
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not decode as the expected payload
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Upstream answered but knows no movie for the given id
    #[error("movie not found: {0}")]
    NotFound(String),

    /// Upstream reported an error other than "no match"
    #[error("upstream error: {0}")]
    Upstream(String),
}

impl Serialize for QueryError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for movie query operations
pub type Result<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_empty_query() {
        let error = QueryError::EmptyQuery;
        assert_eq!(error.to_string(), "empty query");
    }

    #[test]
    fn test_error_display_invalid_id() {
        let error = QueryError::InvalidId;
        assert_eq!(error.to_string(), "empty movie id");
    }

    #[test]
    fn test_error_display_malformed_response() {
        let error = QueryError::MalformedResponse("expected value at line 1".to_string());
        assert_eq!(
            error.to_string(),
            "malformed response: expected value at line 1"
        );
    }

    #[test]
    fn test_error_display_not_found() {
        let error = QueryError::NotFound("Incorrect IMDb ID.".to_string());
        assert_eq!(error.to_string(), "movie not found: Incorrect IMDb ID.");
    }

    #[test]
    fn test_error_display_upstream() {
        let error = QueryError::Upstream("Invalid API key!".to_string());
        assert_eq!(error.to_string(), "upstream error: Invalid API key!");
    }

    #[test]
    fn test_error_serialize() {
        let error = QueryError::EmptyQuery;
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"empty query\"");
    }

    #[test]
    fn test_error_serialize_with_message() {
        let error = QueryError::NotFound("tt0000000".to_string());
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"movie not found: tt0000000\"");
    }
}
