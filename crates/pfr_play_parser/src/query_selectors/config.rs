pub mod config {
	/// DOM hooks on a pro-football-reference boxscore page. The stat tables
	/// are shipped inside HTML comments under their wrapper divs.
	#[derive(Debug)]
	pub enum BoxscoreSelectors {
		PbpWrapper,
		PbpTable,
		HomeDrivesWrapper,
		HomeDrivesTable,
		VisDrivesWrapper,
		VisDrivesTable,
		DriveHeading,
		HeaderCell,
		BodyRow,
		RowCell,
		GameLink,
	}

	impl BoxscoreSelectors {
		pub fn selector(&self) -> &'static str {
			match self {
				BoxscoreSelectors::PbpWrapper => "div#all_pbp",
				BoxscoreSelectors::PbpTable => "table#pbp",
				BoxscoreSelectors::HomeDrivesWrapper => "div#all_home_drives",
				BoxscoreSelectors::HomeDrivesTable => "table#home_drives",
				BoxscoreSelectors::VisDrivesWrapper => "div#all_vis_drives",
				BoxscoreSelectors::VisDrivesTable => "table#vis_drives",
				BoxscoreSelectors::DriveHeading => "h2",
				BoxscoreSelectors::HeaderCell => "thead tr th",
				BoxscoreSelectors::BodyRow => "tbody tr",
				BoxscoreSelectors::RowCell => "th, td",
				BoxscoreSelectors::GameLink => "td.gamelink a",
			}
		}
	}
}
