//! Search response parser
//!
//! Decodes the search envelope and classifies it. A `"False"` envelope
//! carrying the upstream's no-match message is a successful query with
//! zero results, distinct from every failure mode.

use serde::Deserialize;

use crate::error::{QueryError, Result};
use crate::types::SearchResultItem;

/// Upstream message for a search that matched nothing
const NO_MATCH_ERROR: &str = "Movie not found!";

/// Classified search response
#[derive(Debug)]
pub enum SearchReply {
    /// Matched items, in upstream order
    Hits(Vec<SearchResultItem>),

    /// Upstream reachable but nothing matched
    NoMatch,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "Response")]
    response: String,

    #[serde(rename = "Search")]
    search: Option<Vec<SearchResultItem>>,

    #[serde(rename = "Error")]
    error: Option<String>,
}

/// Parses a search response body into a [`SearchReply`]
///
/// # Errors
/// - `MalformedResponse` if the body is not the expected envelope
/// - `Upstream` if the envelope reports an error other than no-match
pub fn parse_search_response(body: &str) -> Result<SearchReply> {
    let envelope: SearchEnvelope =
        serde_json::from_str(body).map_err(|e| QueryError::MalformedResponse(e.to_string()))?;

    match envelope.response.as_str() {
        "True" => {
            let items = envelope.search.ok_or_else(|| {
                QueryError::MalformedResponse("success envelope without Search items".to_string())
            })?;
            Ok(SearchReply::Hits(items))
        }
        "False" => {
            let message = envelope
                .error
                .unwrap_or_else(|| "unspecified upstream error".to_string());
            if message == NO_MATCH_ERROR {
                Ok(SearchReply::NoMatch)
            } else {
                Err(QueryError::Upstream(message))
            }
        }
        other => Err(QueryError::MalformedResponse(format!(
            "unexpected Response value: {other:?}"
        ))),
    }
}
