//! Live search probe against the real API.
//!
//! Usage: OMDB_API_KEY=<token> cargo run --example search_probe -- "matrix"

use oceanfilm_core::{MovieService, QueryOutcome};

#[tokio::main]
async fn main() -> oceanfilm_core::Result<()> {
    let term = std::env::args().nth(1).unwrap_or_else(|| "matrix".to_string());
    let service = MovieService::from_env()?;

    match service.search_movies(&term).await {
        QueryOutcome::Success(items) => {
            for item in &items {
                println!(
                    "{}  {} ({}) [{}]",
                    item.imdb_id, item.title, item.year, item.media_type
                );
            }
        }
        QueryOutcome::Empty => println!("no results for {term:?}"),
        QueryOutcome::Failure(err) => eprintln!("search failed: {err}"),
        QueryOutcome::Loading => {}
    }

    Ok(())
}
