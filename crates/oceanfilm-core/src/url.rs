//! URL helpers for the metadata API endpoints
//!
//! Both endpoints live at the API root and are selected purely by query
//! parameter: `s` carries a search term, `i` a movie id. The access
//! token rides along as `apikey` on every request.

/// Default API root; overridable through [`crate::OmdbConfig`]
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com";

/// Builds the search URL for a free-text term
///
/// # Example
/// ```
/// use oceanfilm_core::url::build_search_url;
/// let url = build_search_url("https://www.omdbapi.com", "k", "star wars");
/// assert_eq!(url, "https://www.omdbapi.com/?apikey=k&s=star%20wars");
/// ```
pub fn build_search_url(base_url: &str, api_key: &str, term: &str) -> String {
    format!(
        "{}/?apikey={}&s={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(api_key),
        urlencoding::encode(term)
    )
}

/// Builds the lookup-by-id URL for a movie detail request
///
/// # Example
/// ```
/// use oceanfilm_core::url::build_lookup_url;
/// let url = build_lookup_url("https://www.omdbapi.com", "k", "tt0133093");
/// assert_eq!(url, "https://www.omdbapi.com/?apikey=k&i=tt0133093");
/// ```
pub fn build_lookup_url(base_url: &str, api_key: &str, id: &str) -> String {
    format!(
        "{}/?apikey={}&i={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(api_key),
        urlencoding::encode(id)
    )
}
