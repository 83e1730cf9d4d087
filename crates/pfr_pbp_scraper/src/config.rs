use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Clone, Debug, Serialize, Deserialize)]
#[command(name = "pfr_pbp_scraper")]
#[command(about = "Scrapes pro-football-reference play-by-play into CSV", long_about = None)]
pub struct ScrapeConfig {
    /// File with one boxscore URL per line
    #[arg(long, env = "GAME_LINKS_FILE")]
    pub links_file: Option<PathBuf>,

    /// Schedule page to enumerate boxscore links from, used when no links
    /// file is given
    #[arg(long, env = "SCHEDULE_URL")]
    pub schedule_url: Option<String>,

    /// Path to the output plays CSV file
    #[arg(long, env = "PLAYS_CSV", default_value = "plays.csv")]
    pub plays_file: PathBuf,

    /// Path to the output games CSV file
    #[arg(long, env = "GAMES_CSV", default_value = "games.csv")]
    pub games_file: PathBuf,

    /// Seconds to wait between requests, to keep off the server's back
    #[arg(long, env = "REQUEST_DELAY_SECS", default_value_t = 30)]
    pub delay_secs: u64,
}
