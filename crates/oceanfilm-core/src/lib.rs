//! Oceanfilm Core Library
//!
//! Async query layer for the movie metadata API behind the Oceanfilm
//! app: free-text search, a random-seeded suggestion carousel, and
//! per-title detail lookup, each resolving to a tagged outcome the view
//! layer renders directly.
//!
//! # Example
//!
//! ```no_run
//! use oceanfilm_core::{MovieService, OmdbConfig, QueryOutcome};
//!
//! #[tokio::main]
//! async fn main() -> oceanfilm_core::Result<()> {
//!     let service = MovieService::new(OmdbConfig::new("your-api-key"))?;
//!
//!     match service.search_movies("matrix").await {
//!         QueryOutcome::Success(items) => {
//!             for movie in &items {
//!                 println!("{} ({})", movie.title, movie.year);
//!             }
//!         }
//!         QueryOutcome::Empty => println!("no results"),
//!         QueryOutcome::Failure(err) => eprintln!("search failed: {err}"),
//!         QueryOutcome::Loading => {}
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Outcomes
//!
//! Every operation resolves to exactly one terminal state: results,
//! empty, or a typed failure. "Service reachable but nothing matched"
//! and "service unreachable" are distinct, separately observable
//! outcomes. [`QueryOutcome::Loading`] is the state a view holds while
//! the future is pending; the service never returns it.
//!
//! # Overlapping queries
//!
//! Completions can arrive out of order when the user re-queries quickly
//! and nothing in flight can be cancelled. [`QuerySession`] issues
//! monotonic tickets so stale completions are discarded instead of
//! overwriting newer results; see its module docs.

mod client;
mod error;
pub mod parser;
mod service;
mod session;
mod types;
pub mod url;

// Re-export client types
pub use client::{OmdbClient, OmdbConfig};

// Re-export error types
pub use error::{QueryError, Result};

// Re-export parser entry points
pub use parser::{SearchReply, parse_detail_response, parse_search_response};

// Re-export the main service API
pub use service::{CAROUSEL_LIMIT, MovieService, SEED_TERMS};

// Re-export the stale completion guard
pub use session::{QuerySession, QueryTicket};

// Re-export data types
pub use types::{
    DETAIL_POSTER_PLACEHOLDER, LIST_POSTER_PLACEHOLDER, MovieDetail, QueryOutcome,
    SearchResultItem,
};
