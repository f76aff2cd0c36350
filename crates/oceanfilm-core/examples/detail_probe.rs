//! Live detail lookup probe against the real API.
//!
//! Usage: OMDB_API_KEY=<token> cargo run --example detail_probe -- tt0133093

use oceanfilm_core::MovieService;

#[tokio::main]
async fn main() -> oceanfilm_core::Result<()> {
    let id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tt0133093".to_string());
    let service = MovieService::from_env()?;

    let detail = service.movie_detail(&id).await?;
    println!("{} ({})", detail.title, detail.year);
    println!("  rating:   {}", detail.imdb_rating);
    println!("  runtime:  {}", detail.runtime);
    println!("  genre:    {}", detail.genre);
    println!("  director: {}", detail.director);
    println!("  poster:   {}", detail.display_poster());
    println!();
    println!("{}", detail.plot);

    Ok(())
}
