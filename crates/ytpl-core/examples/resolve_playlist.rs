//! Resolve a playlist URL from the command line and print its items

use ytpl_core::PlaylistResolver;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://www.youtube.com/playlist?list=PLabc123".to_string());

    let api_key = std::env::var("YOUTUBE_API_KEY").ok();
    if api_key.is_none() {
        println!("YOUTUBE_API_KEY not set, using the scrape strategy\n");
    }

    let resolver = PlaylistResolver::new()?;
    let resolution = resolver.resolve(&input_url, api_key.as_deref()).await?;

    println!("source: {:?}", resolution.source);
    println!("{} item(s)\n", resolution.items.len());
    for item in &resolution.items {
        println!("{}\n  {}", item.title, item.url);
    }

    Ok(())
}
