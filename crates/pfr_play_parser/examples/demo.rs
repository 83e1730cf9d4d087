use pfr_play_parser::schema::GameTable;
use std::fs;

fn main() {
	let file_path = "examples/boxscore.html";

	match fs::read_to_string(file_path) {
		Ok(html) => match GameTable::clean(&html, file_path) {
			Ok(game) => {
				println!("{} vs. {}, {} plays", game.team1, game.team2, game.plays.len());
				for play in &game.plays {
					println!("[{}] {} ({})", play.play_start_time, play.detail, play.play_type);
				}
			}
			Err(e) => eprintln!("Failed to clean the boxscore: {}", e),
		},
		Err(e) => {
			eprintln!("Failed to read the HTML file: {}", e);
		}
	}
}
