//! High-level movie query API
//!
//! Combines the HTTP client with the wire parsers into the three
//! operations the view layer consumes: free-text search, random-seeded
//! search for the suggestion carousel, and detail lookup by id. The
//! service holds no mutable state; every call produces an independent
//! result.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::client::{OmdbClient, OmdbConfig};
use crate::error::{QueryError, Result};
use crate::parser::{SearchReply, parse_detail_response, parse_search_response};
use crate::types::{MovieDetail, QueryOutcome};
use crate::url::{build_lookup_url, build_search_url};

/// Seed keywords for the suggestion carousel
///
/// The upstream API has no trending endpoint, so one keyword is picked
/// at random per refresh.
pub const SEED_TERMS: [&str; 5] = ["avengers", "batman", "spider", "star", "war"];

/// Maximum number of items the carousel displays
pub const CAROUSEL_LIMIT: usize = 5;

/// Movie query service
///
/// Stateless facade over the metadata API. Each operation suspends only
/// at its single network call and resolves to one terminal outcome.
pub struct MovieService {
    client: OmdbClient,
}

impl MovieService {
    /// Creates a service from the given configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: OmdbConfig) -> Result<Self> {
        Ok(Self {
            client: OmdbClient::new(config)?,
        })
    }

    /// Creates a service configured from the environment
    ///
    /// # Errors
    /// Returns `MissingApiKey` if `OMDB_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client: OmdbClient::from_env()?,
        })
    }

    /// Searches movies by free-text term
    ///
    /// A blank or whitespace-only term resolves to `Failure(EmptyQuery)`
    /// without touching the network. Otherwise exactly one request is
    /// made; results arrive in upstream order, never sorted, filtered or
    /// deduplicated.
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> oceanfilm_core::Result<()> {
    /// use oceanfilm_core::{MovieService, OmdbConfig, QueryOutcome};
    /// let service = MovieService::new(OmdbConfig::new("api-key"))?;
    /// if let QueryOutcome::Success(items) = service.search_movies("matrix").await {
    ///     for movie in &items {
    ///         println!("{} ({})", movie.title, movie.year);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_movies(&self, term: &str) -> QueryOutcome {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return QueryOutcome::Failure(QueryError::EmptyQuery);
        }

        match self.run_search(trimmed).await {
            Ok(SearchReply::Hits(items)) => {
                debug!(term = %trimmed, hits = items.len(), "search matched");
                QueryOutcome::Success(items)
            }
            Ok(SearchReply::NoMatch) => {
                debug!(term = %trimmed, "search matched nothing");
                QueryOutcome::Empty
            }
            Err(err) => {
                debug!(term = %trimmed, error = %err, "search failed");
                QueryOutcome::Failure(err)
            }
        }
    }

    async fn run_search(&self, term: &str) -> Result<SearchReply> {
        let config = self.client.config();
        let url = build_search_url(&config.base_url, &config.api_key, term);
        let body = self.client.fetch(&url).await?;
        parse_search_response(&body)
    }

    /// Populates the suggestion carousel
    ///
    /// Picks one keyword uniformly from [`SEED_TERMS`], searches it, and
    /// caps a `Success` at [`CAROUSEL_LIMIT`] items.
    pub async fn random_seed_search(&self) -> QueryOutcome {
        self.random_seed_search_with(&mut rand::thread_rng()).await
    }

    /// Seed search with a caller-supplied randomness source
    ///
    /// Lets tests pin the selected keyword; the delegation and the
    /// carousel truncation are identical to [`random_seed_search`].
    ///
    /// [`random_seed_search`]: MovieService::random_seed_search
    pub async fn random_seed_search_with<R: Rng + ?Sized>(&self, rng: &mut R) -> QueryOutcome {
        let term = SEED_TERMS.choose(rng).copied().unwrap_or(SEED_TERMS[0]);
        debug!(term = %term, "seed search");
        self.search_movies(term).await.truncated(CAROUSEL_LIMIT)
    }

    /// Fetches the full detail record for a previously returned id
    ///
    /// The id is not validated beyond non-emptiness. Failures never
    /// yield a partial record; the caller renders a failure state and
    /// offers a way back.
    ///
    /// # Errors
    /// - `InvalidId` if `id` is blank (no network call is made)
    /// - `NotFound` if upstream knows no movie for the id
    /// - `Http`, `MalformedResponse`, `Upstream` per the usual taxonomy
    pub async fn movie_detail(&self, id: &str) -> Result<MovieDetail> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(QueryError::InvalidId);
        }

        let config = self.client.config();
        let url = build_lookup_url(&config.base_url, &config.api_key, trimmed);
        debug!(id = %trimmed, "detail lookup");
        let body = self.client.fetch(&url).await?;
        parse_detail_response(&body)
    }
}
