//! Core data types for movie queries
//!
//! Record shapes mirror the upstream payloads field-for-field; the only
//! normalization applied is the `"N/A"` poster sentinel, which is never
//! surfaced as a display image source. All types implement Serialize and
//! Deserialize so a frontend shell can consume them directly.

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Placeholder image shown in result lists when upstream has no poster
pub const LIST_POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/100x150?text=No+Image";

/// Placeholder image shown on the detail screen when upstream has no poster
pub const DETAIL_POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/300x450?text=No+Image";

/// Upstream sentinel meaning "field has no value"
const NOT_AVAILABLE: &str = "N/A";

/// One entry of a search response
///
/// Order and content are exactly as delivered by upstream; the
/// collection is never sorted, filtered or deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// Movie title
    #[serde(rename = "Title")]
    pub title: String,

    /// Release year as text (ranges like "2019–2021" occur for series)
    #[serde(rename = "Year")]
    pub year: String,

    /// Opaque identifier; the sole key accepted by the detail lookup
    #[serde(rename = "imdbID")]
    pub imdb_id: String,

    /// Media kind reported by upstream ("movie", "series", "episode")
    #[serde(rename = "Type")]
    pub media_type: String,

    /// Poster URL, or the literal "N/A" when upstream has no image
    #[serde(rename = "Poster")]
    pub poster: String,
}

impl SearchResultItem {
    /// Poster URL if upstream has one
    pub fn poster_url(&self) -> Option<&str> {
        (self.poster != NOT_AVAILABLE).then_some(self.poster.as_str())
    }

    /// Poster URL with the list placeholder substituted for "N/A"
    pub fn display_poster(&self) -> &str {
        self.poster_url().unwrap_or(LIST_POSTER_PLACEHOLDER)
    }
}

/// Full record returned by the lookup-by-id endpoint
///
/// Field values are strings as delivered by upstream, including numeric
/// ratings as text and "N/A" for absent values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Year")]
    pub year: String,

    #[serde(rename = "Genre")]
    pub genre: String,

    #[serde(rename = "Director")]
    pub director: String,

    #[serde(rename = "Actors")]
    pub actors: String,

    #[serde(rename = "Plot")]
    pub plot: String,

    /// Poster URL, or the literal "N/A" when upstream has no image
    #[serde(rename = "Poster")]
    pub poster: String,

    /// Community rating, numeric-as-text (e.g. "8.7")
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,

    #[serde(rename = "Runtime")]
    pub runtime: String,

    #[serde(rename = "Released")]
    pub released: String,

    #[serde(rename = "Country")]
    pub country: String,

    #[serde(rename = "Writer")]
    pub writer: String,

    #[serde(rename = "Language")]
    pub language: String,

    #[serde(rename = "Awards")]
    pub awards: String,

    /// Identifier echo, correlating the record to the originating search item
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
}

impl MovieDetail {
    /// Poster URL if upstream has one
    pub fn poster_url(&self) -> Option<&str> {
        (self.poster != NOT_AVAILABLE).then_some(self.poster.as_str())
    }

    /// Poster URL with the detail placeholder substituted for "N/A"
    pub fn display_poster(&self) -> &str {
        self.poster_url().unwrap_or(DETAIL_POSTER_PLACEHOLDER)
    }
}

/// Resolution of one query
///
/// Every operation resolves to exactly one terminal variant: results,
/// empty, or a typed failure. `Loading` is the state a view holds while
/// the future is pending; the service never returns it, and it is the
/// `Default` so view state can start there. Serializes with a
/// `state`/`data` tag pair a frontend can switch on.
#[derive(Debug, Default, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// Query dispatched, completion pending
    #[default]
    Loading,

    /// Upstream matched; items in upstream order
    Success(Vec<SearchResultItem>),

    /// Upstream reachable but nothing matched
    Empty,

    /// Query failed; see [`QueryError`] for the taxonomy
    Failure(QueryError),
}

impl QueryOutcome {
    /// Caps `Success` at `limit` items, preserving order
    ///
    /// Presentation post-processing for the carousel; other variants
    /// pass through untouched.
    pub fn truncated(self, limit: usize) -> Self {
        match self {
            QueryOutcome::Success(mut items) => {
                items.truncate(limit);
                QueryOutcome::Success(items)
            }
            other => other,
        }
    }

    /// Whether the query has resolved
    pub fn is_terminal(&self) -> bool {
        !matches!(self, QueryOutcome::Loading)
    }
}

impl From<QueryError> for QueryOutcome {
    fn from(err: QueryError) -> Self {
        QueryOutcome::Failure(err)
    }
}
