use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use serde::Serialize;
use std::str::FromStr;

use crate::error::PbpError;
use crate::query_selectors::{extract_drive_table, extract_pbp_table, DriveSide, DriveTable, TableSelectors};
use crate::schema::{DriveChart, DriveRow, PlayType, Quarter, QuarterClock, TeamCode, Yardage};
use crate::series;

// Cell positions in the #pbp table
const QUARTER_COL: usize = 0;
const TIME_COL: usize = 1;
const DOWN_COL: usize = 2;
const TOGO_COL: usize = 3;
const LOCATION_COL: usize = 4;
const TEAM1_SCORE_COL: usize = 5;
const TEAM2_SCORE_COL: usize = 6;
const DETAIL_COL: usize = 7;
const EPB_COL: usize = 8;
const EPA_COL: usize = 9;

static FIELD_SIDE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z]{2,3})").unwrap());
static YARDLINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)").unwrap());
static RECEIVING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+) to receive the opening kickoff").unwrap());

/// One snap with its derived fields filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanPlay {
    pub quarter: u8,
    pub clock: String,
    pub down: String,
    pub to_go: String,
    pub location: String,
    pub team1_score: String,
    pub team2_score: String,
    pub detail: String,
    pub epb: String,
    pub epa: String,
    pub field_side: Option<TeamCode>,
    pub yardline: Option<u8>,
    pub play_start_time: u32,
    pub play_type: PlayType,
    pub possession: Option<String>,
    pub yardage: Option<i32>,
}

impl CleanPlay {
    fn derive(cells: &[String], quarter: Quarter, play_start_time: u32, drives: &DriveChart) -> Self {
        let detail = cells.get(DETAIL_COL).cloned().unwrap_or_default();
        let location = cells[LOCATION_COL].trim().to_string();

        let field_side = FIELD_SIDE_RE
            .captures(&location)
            .and_then(|caps| caps.get(1))
            .and_then(|side| TeamCode::from_str(side.as_str()).ok());
        let yardline = YARDLINE_RE
            .captures(&location)
            .and_then(|caps| caps.get(1))
            .and_then(|line| line.as_str().parse().ok());

        let play_type = PlayType::classify(&detail);
        // Yardage only means anything on scrimmage plays; kick and punt
        // distances are not offensive yards
        let yardage = match play_type {
            PlayType::Pass | PlayType::Run => detail.parse::<Yardage>().ok().map(|yards| yards.signed()),
            PlayType::SpecialTeams => None,
        };
        let possession = drives.possession_at(play_start_time).map(String::from);

        CleanPlay {
            quarter: quarter.number(),
            clock: cells[TIME_COL].trim().to_string(),
            down: cells[DOWN_COL].trim().to_string(),
            to_go: cells[TOGO_COL].trim().to_string(),
            location,
            team1_score: cells[TEAM1_SCORE_COL].trim().to_string(),
            team2_score: cells[TEAM2_SCORE_COL].trim().to_string(),
            detail,
            epb: cells.get(EPB_COL).map(|cell| cell.trim().to_string()).unwrap_or_default(),
            epa: cells.get(EPA_COL).map(|cell| cell.trim().to_string()).unwrap_or_default(),
            field_side,
            yardline,
            play_start_time,
            play_type,
            possession,
            yardage,
        }
    }
}

/// Cleaned play-by-play for one game, with the metadata pulled off the page.
#[derive(Debug, Clone)]
pub struct GameTable {
    pub url: String,
    pub team1: String,
    pub team2: String,
    pub receiving_team: Option<String>,
    pub plays: Vec<CleanPlay>,
}

impl GameTable {
    /// Runs the full cleaning pipeline over a boxscore page.
    pub fn clean(html: &str, url: &str) -> Result<Self, PbpError> {
        let document = crate::parse_document(html);
        let selectors = TableSelectors::new();
        Self::from_document(&document, &selectors, url)
    }

    pub fn from_document(document: &Html, selectors: &TableSelectors, url: &str) -> Result<Self, PbpError> {
        let home = extract_drive_table(document, selectors, DriveSide::Home)?;
        let vis = extract_drive_table(document, selectors, DriveSide::Vis)?;

        let mut rows = drive_rows(&home)?;
        rows.extend(drive_rows(&vis)?);
        let drives = DriveChart::assemble(rows);

        let pbp = extract_pbp_table(document, selectors)?;
        let team1 = team_label(&pbp.headers, TEAM1_SCORE_COL)?;
        let team2 = team_label(&pbp.headers, TEAM2_SCORE_COL)?;

        // The coin toss sits in the first body row and names the receiving team
        let receiving_team = pbp
            .rows
            .first()
            .and_then(|row| row.get(DETAIL_COL))
            .and_then(|detail| receiving_team(detail));

        // Keep rows that carry a real snap: timeouts, the coin toss and
        // quarter breaks all come through with an empty location
        let mut kept: Vec<(&[String], Quarter, u32)> = Vec::new();
        for row in &pbp.rows {
            if row.len() <= DETAIL_COL || row[LOCATION_COL].trim().is_empty() {
                continue;
            }
            let Ok(quarter) = row[QUARTER_COL].parse::<Quarter>() else {
                continue;
            };
            let Ok(clock) = row[TIME_COL].parse::<QuarterClock>() else {
                continue;
            };
            kept.push((row.as_slice(), quarter, clock.seconds_remaining()));
        }

        let clocks: Vec<u32> = kept.iter().map(|(_, _, secs)| *secs).collect();
        let starts = series::game_times(&series::elapsed_times(&clocks));

        let plays = kept
            .iter()
            .zip(starts)
            .map(|((cells, quarter, _), start)| CleanPlay::derive(cells, *quarter, start, &drives))
            .collect();

        Ok(GameTable {
            url: url.to_string(),
            team1,
            team2,
            receiving_team,
            plays,
        })
    }
}

fn team_label(headers: &[String], col: usize) -> Result<String, PbpError> {
    let header = headers.get(col).ok_or(PbpError::MissingHeader)?;
    Ok(
        TeamCode::from_str(header)
            .map(|code| code.nickname().to_string())
            .unwrap_or_else(|_| header.clone()),
    )
}

fn receiving_team(detail: &str) -> Option<String> {
    RECEIVING_RE
        .captures(detail)
        .and_then(|caps| caps.get(1))
        .map(|team| team.as_str().to_string())
}

fn drive_rows(drive_table: &DriveTable) -> Result<Vec<DriveRow>, PbpError> {
    let quarter_col = drive_table
        .table
        .column_index("Quarter")
        .ok_or_else(|| PbpError::missing_column_error("Quarter"))?;
    let time_col = drive_table
        .table
        .column_index("Time")
        .ok_or_else(|| PbpError::missing_column_error("Time"))?;

    let rows = drive_table
        .table
        .rows
        .iter()
        .filter_map(|row| {
            let quarter = row.get(quarter_col)?.parse::<Quarter>().ok()?;
            let clock = row.get(time_col)?.parse::<QuarterClock>().ok()?;
            Some(DriveRow {
                quarter,
                clock,
                team: drive_table.team.clone(),
            })
        })
        .collect();
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOXSCORE: &str = r#"
        <div class="table_wrapper" id="all_vis_drives">
            <h2>Chiefs Drive Chart</h2>
            <!--
            <table id="vis_drives">
                <thead><tr><th>#</th><th>Quarter</th><th>Time</th><th>LOS</th><th>Result</th></tr></thead>
                <tbody>
                    <tr><th>1</th><td>1</td><td>15:00</td><td>KAN 25</td><td>Punt</td></tr>
                </tbody>
            </table>
            -->
        </div>
        <div class="table_wrapper" id="all_home_drives">
            <h2>Lions Drive Chart</h2>
            <!--
            <table id="home_drives">
                <thead><tr><th>#</th><th>Quarter</th><th>Time</th><th>LOS</th><th>Result</th></tr></thead>
                <tbody>
                    <tr><th>1</th><td>1</td><td>10:00</td><td>DET 30</td><td>Punt</td></tr>
                    <tr><th>2</th><td>2</td><td>14:30</td><td>DET 20</td><td>Field Goal</td></tr>
                </tbody>
            </table>
            -->
        </div>
        <div class="table_wrapper" id="all_pbp">
            <h2>Full Play-By-Play Table</h2>
            <!--
            <table id="pbp">
                <thead><tr>
                    <th>Quarter</th><th>Time</th><th>Down</th><th>ToGo</th><th>Location</th>
                    <th>DET</th><th>KAN</th><th>Detail</th><th>EPB</th><th>EPA</th>
                </tr></thead>
                <tbody>
                    <tr><th>1</th><td>15:00</td><td></td><td></td><td></td><td>0</td><td>0</td>
                        <td>Lions won the toss, Chiefs to receive the opening kickoff.</td><td></td><td></td></tr>
                    <tr><th>1</th><td>15:00</td><td></td><td></td><td>DET 35</td><td>0</td><td>0</td>
                        <td>R.Patterson kicks 65 yards from DET 35, touchback.</td><td>0.00</td><td>0.00</td></tr>
                    <tr><th>1</th><td>14:55</td><td>1</td><td>10</td><td>KAN 25</td><td>0</td><td>0</td>
                        <td>P.Mahomes pass short right to T.Kelce for 12 yards (A.Anzalone).</td><td>0.51</td><td>1.23</td></tr>
                    <tr><th>1</th><td>14:20</td><td>2</td><td>4</td><td>KAN 37</td><td>0</td><td>0</td>
                        <td>I.Pacheco right tackle for no gain (A.McNeill).</td><td>1.23</td><td>0.77</td></tr>
                    <tr class="thead"><td colspan="10">2nd Quarter</td></tr>
                    <tr><th>2</th><td>14:30</td><td>1</td><td>10</td><td>DET 40</td><td>7</td><td>0</td>
                        <td>J.Goff pass incomplete deep left intended for A.St. Brown.</td><td>1.02</td><td>0.48</td></tr>
                    <tr><th>2</th><td>14:30</td><td></td><td></td><td></td><td>7</td><td>0</td>
                        <td>Timeout #1 by DET at 14:30.</td><td></td><td></td></tr>
                </tbody>
            </table>
            -->
        </div>
    "#;

    #[test]
    fn test_clean_game() {
        let game = GameTable::clean(BOXSCORE, "https://example.com/boxscores/test.htm").unwrap();

        assert_eq!(game.team1, "Lions");
        assert_eq!(game.team2, "Chiefs");
        assert_eq!(game.receiving_team.as_deref(), Some("Chiefs"));

        // Coin toss, separator and timeout rows are dropped
        assert_eq!(game.plays.len(), 4);

        let kickoff = &game.plays[0];
        assert_eq!(kickoff.play_type, PlayType::SpecialTeams);
        assert_eq!(kickoff.yardage, None);
        assert_eq!(kickoff.play_start_time, 0);
        assert_eq!(kickoff.possession.as_deref(), Some("Chiefs"));
        assert_eq!(kickoff.field_side, Some(TeamCode::DET));
        assert_eq!(kickoff.yardline, Some(35));

        let pass = &game.plays[1];
        assert_eq!(pass.play_type, PlayType::Pass);
        assert_eq!(pass.yardage, Some(12));
        assert_eq!(pass.play_start_time, 5);
        assert_eq!(pass.possession.as_deref(), Some("Chiefs"));

        let run = &game.plays[2];
        assert_eq!(run.play_type, PlayType::Run);
        assert_eq!(run.yardage, Some(0));
        assert_eq!(run.quarter, 1);

        // 14:20 in Q1 to 14:30 in Q2 wraps the quarter clock
        let incomplete = &game.plays[3];
        assert_eq!(incomplete.quarter, 2);
        assert_eq!(incomplete.play_start_time, 930);
        assert_eq!(incomplete.play_type, PlayType::Pass);
        assert_eq!(incomplete.yardage, Some(0));
        assert_eq!(incomplete.possession.as_deref(), Some("Lions"));
    }

    #[test]
    fn test_clean_requires_drive_charts() {
        let result = GameTable::clean("<html><body><div id=\"all_pbp\"></div></body></html>", "url");
        assert!(result.is_err());
    }

    #[test]
    fn test_receiving_team() {
        assert_eq!(
            receiving_team("Lions won the toss, Chiefs to receive the opening kickoff."),
            Some("Chiefs".to_string())
        );
        assert_eq!(receiving_team("J.Goff pass incomplete."), None);
    }
}
