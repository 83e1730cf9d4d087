pub mod error;
pub mod query_selectors;
pub mod schema;
pub mod series;

use scraper::Html;

/// Site root the boxscore and schedule links are resolved against.
pub const BASE_URL: &str = "https://www.pro-football-reference.com";

pub fn parse_document(html: &str) -> Html {
	Html::parse_document(html)
}
