use crate::error::ScrapeError;
use csv::Writer;
use pfr_play_parser::schema::{CleanPlay, GameTable};
use std::fs::OpenOptions;
use std::path::Path;

pub const PLAYS_HEADER: &[&str] = &[
	"game_id",
	"quarter",
	"time",
	"down",
	"to_go",
	"location",
	"team1_score",
	"team2_score",
	"detail",
	"epb",
	"epa",
	"field_side",
	"yardline",
	"play_start_time",
	"play_type",
	"possession",
	"yardage",
];

pub const GAMES_HEADER: &[&str] = &["game_id", "team1", "team2", "link"];

fn open_appending(path: &Path) -> Result<(Writer<std::fs::File>, bool), ScrapeError> {
	let file = OpenOptions::new().append(true).create(true).open(path)?;
	let is_empty = file.metadata().map(|m| m.len() == 0).unwrap_or(true);
	Ok((Writer::from_writer(file), is_empty))
}

/// Appends one game's plays; the header goes in only when the file is new.
pub fn append_plays(path: &Path, game_id: u32, game: &GameTable) -> Result<(), ScrapeError> {
	let (mut wtr, is_empty) = open_appending(path)?;

	if is_empty {
		wtr.write_record(PLAYS_HEADER)?;
	}

	for play in &game.plays {
		wtr.write_record(play_record(game_id, play))?;
	}

	wtr.flush()?;
	Ok(())
}

/// Appends the per-game metadata row next to the plays file.
pub fn append_game(path: &Path, game_id: u32, game: &GameTable) -> Result<(), ScrapeError> {
	let (mut wtr, is_empty) = open_appending(path)?;

	if is_empty {
		wtr.write_record(GAMES_HEADER)?;
	}

	wtr.write_record(&[game_id.to_string(), game.team1.clone(), game.team2.clone(), game.url.clone()])?;

	wtr.flush()?;
	Ok(())
}

fn play_record(game_id: u32, play: &CleanPlay) -> Vec<String> {
	vec![
		game_id.to_string(),
		play.quarter.to_string(),
		play.clock.clone(),
		play.down.clone(),
		play.to_go.clone(),
		play.location.clone(),
		play.team1_score.clone(),
		play.team2_score.clone(),
		play.detail.clone(),
		play.epb.clone(),
		play.epa.clone(),
		play.field_side.map(|side| side.code().to_string()).unwrap_or_default(),
		play.yardline.map(|line| line.to_string()).unwrap_or_default(),
		play.play_start_time.to_string(),
		play.play_type.to_string(),
		play.possession.clone().unwrap_or_default(),
		play.yardage.map(|yards| yards.to_string()).unwrap_or_default(),
	]
}
