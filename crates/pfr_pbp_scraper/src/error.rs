use pfr_play_parser::error::PbpError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("No game links: pass --links-file or --schedule-url")]
    NoInput,

    #[error("Schedule page listed no games: {url}")]
    EmptySchedule { url: String },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Play-by-play error: {0}")]
    Pbp(#[from] PbpError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl ScrapeError {
    pub fn empty_schedule_error(url: &str) -> Self {
        ScrapeError::EmptySchedule { url: url.to_string() }
    }
}
