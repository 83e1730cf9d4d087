use crate::query_selectors::BoxscoreSelectors;
use scraper::{Html, Selector};

pub struct ScheduleSelectors {
	pub game_link: Selector,
}

impl ScheduleSelectors {
	pub fn new() -> Self {
		ScheduleSelectors {
			game_link: Selector::parse(BoxscoreSelectors::GameLink.selector()).unwrap(),
		}
	}
}

pub struct GameLinkIterator<'a> {
	link_iter: scraper::html::Select<'a, 'a>,
	base_url: &'a str,
}

impl<'a> GameLinkIterator<'a> {
	fn new(document: &'a Html, selectors: &'a ScheduleSelectors, base_url: &'a str) -> Self {
		GameLinkIterator {
			link_iter: document.select(&selectors.game_link),
			base_url,
		}
	}
}

impl<'a> Iterator for GameLinkIterator<'a> {
	type Item = String;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let link = self.link_iter.next()?;
			let Some(href) = link.value().attr("href") else {
				continue;
			};

			if href.starts_with("http") {
				return Some(href.to_string());
			}
			return Some(format!("{}{}", self.base_url, href));
		}
	}
}

pub fn parse_game_links<'a>(document: &'a Html, selectors: &'a ScheduleSelectors, base_url: &'a str) -> GameLinkIterator<'a> {
	GameLinkIterator::new(document, selectors, base_url)
}

/// Boxscore URLs listed on a schedule page, resolved against `base_url`.
pub fn game_links(html: &str, base_url: &str) -> Vec<String> {
	let document = Html::parse_document(html);
	let selectors = ScheduleSelectors::new();
	parse_game_links(&document, &selectors, base_url).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	const SCHEDULE: &str = r#"
		<div class="game_summary">
			<table><tbody><tr>
				<td class="gamelink"><a href="/boxscores/202309070kan.htm">Final</a></td>
			</tr></tbody></table>
		</div>
		<div class="game_summary">
			<table><tbody><tr>
				<td class="gamelink"><a href="/boxscores/202309100atl.htm">Final</a></td>
				<td><a href="/teams/atl/2023.htm">Falcons</a></td>
			</tr></tbody></table>
		</div>
	"#;

	#[test]
	fn test_game_links() {
		let links = game_links(SCHEDULE, "https://www.pro-football-reference.com");
		assert_eq!(
			links,
			vec![
				"https://www.pro-football-reference.com/boxscores/202309070kan.htm",
				"https://www.pro-football-reference.com/boxscores/202309100atl.htm",
			]
		);
	}

	#[test]
	fn test_game_links_empty_page() {
		assert!(game_links("<html><body></body></html>", "https://example.com").is_empty());
	}
}
