//! Detail response parser
//!
//! The lookup endpoint returns the detail record and the status envelope
//! in one flat object, so the body is decoded twice: once for the status
//! fields, and once more as [`MovieDetail`] when the status is good. A
//! failed lookup never yields a partial or defaulted record.

use serde::Deserialize;

use crate::error::{QueryError, Result};
use crate::types::MovieDetail;

/// Upstream messages for a lookup whose id matched nothing
const UNKNOWN_ID_ERRORS: [&str; 2] = ["Incorrect IMDb ID.", "Error getting data."];

#[derive(Debug, Deserialize)]
struct DetailStatus {
    #[serde(rename = "Response")]
    response: String,

    #[serde(rename = "Error")]
    error: Option<String>,
}

/// Parses a lookup response body into a [`MovieDetail`]
///
/// # Errors
/// - `MalformedResponse` if the body is not the expected payload
/// - `NotFound` if upstream knows no movie for the requested id
/// - `Upstream` for any other upstream-reported error
pub fn parse_detail_response(body: &str) -> Result<MovieDetail> {
    let status: DetailStatus =
        serde_json::from_str(body).map_err(|e| QueryError::MalformedResponse(e.to_string()))?;

    match status.response.as_str() {
        "True" => {
            serde_json::from_str(body).map_err(|e| QueryError::MalformedResponse(e.to_string()))
        }
        "False" => {
            let message = status
                .error
                .unwrap_or_else(|| "unspecified upstream error".to_string());
            if UNKNOWN_ID_ERRORS.contains(&message.as_str()) {
                Err(QueryError::NotFound(message))
            } else {
                Err(QueryError::Upstream(message))
            }
        }
        other => Err(QueryError::MalformedResponse(format!(
            "unexpected Response value: {other:?}"
        ))),
    }
}
