mod client;
mod config;
mod csv_out;
mod error;

use crate::client::PageClient;
use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use clap::Parser;
use pfr_play_parser::query_selectors::game_links;
use pfr_play_parser::schema::GameTable;
use pfr_play_parser::BASE_URL;
use std::time::Duration;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	dotenv::dotenv().ok();
	tracing_subscriber::fmt::init();

	let config = ScrapeConfig::parse();
	let client = PageClient::new()?;

	let links = gather_links(&client, &config).await?;
	info!(games = links.len(), delay_secs = config.delay_secs, "starting scrape");

	let mut scraped = 0_usize;
	for (index, link) in links.iter().enumerate() {
		let game_id = u32::try_from(index + 1).unwrap_or(u32::MAX);

		match scrape_game(&client, link).await {
			Ok(game) => {
				csv_out::append_plays(&config.plays_file, game_id, &game)?;
				csv_out::append_game(&config.games_file, game_id, &game)?;
				info!(game_id, team1 = %game.team1, team2 = %game.team2, plays = game.plays.len(), "scraped game");
				scraped += 1;
			}
			Err(e) => warn!(link = %link, error = %e, "skipping game"),
		}

		// Fixed pause between requests so the source server is not hammered
		if index + 1 < links.len() {
			tokio::time::sleep(Duration::from_secs(config.delay_secs)).await;
		}
	}

	if scraped > 0 {
		let plays = csv_loader::load_table(&config.plays_file)?;
		info!(rows = plays.len(), columns = plays.headers().len(), "plays dataset ready");
	}

	Ok(())
}

async fn scrape_game(client: &PageClient, url: &str) -> Result<GameTable, ScrapeError> {
	let html = client.fetch(url).await?;
	Ok(GameTable::clean(&html, url)?)
}

async fn gather_links(client: &PageClient, config: &ScrapeConfig) -> Result<Vec<String>, ScrapeError> {
	if let Some(path) = &config.links_file {
		let contents = std::fs::read_to_string(path)?;
		return Ok(
			contents
				.lines()
				.map(str::trim)
				.filter(|line| !line.is_empty())
				.map(str::to_string)
				.collect(),
		);
	}

	if let Some(url) = &config.schedule_url {
		let html = client.fetch(url).await?;
		let links = game_links(&html, BASE_URL);
		if links.is_empty() {
			return Err(ScrapeError::empty_schedule_error(url));
		}
		return Ok(links);
	}

	Err(ScrapeError::NoInput)
}
