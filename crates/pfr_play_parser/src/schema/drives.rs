use serde::Serialize;

use crate::schema::{Quarter, QuarterClock};
use crate::series;

/// One row of a drive chart table, before the kickoff-relative start time
/// has been derived.
#[derive(Debug, Clone)]
pub struct DriveRow {
    pub quarter: Quarter,
    pub clock: QuarterClock,
    pub team: String,
}

/// Start of a drive on the real game clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriveBoundary {
    pub start_time: u32,
    pub team: String,
}

/// Ordered drive boundaries for one game. Start times are non-decreasing;
/// they come out of a cumulative sum of non-negative elapsed spans.
#[derive(Debug, Clone, Default)]
pub struct DriveChart {
    drives: Vec<DriveBoundary>,
}

impl DriveChart {
    pub fn new(drives: Vec<DriveBoundary>) -> Self {
        DriveChart { drives }
    }

    /// Builds the chart from the home and visitor drive rows. Rows are
    /// ordered by quarter and countdown clock before the start times are
    /// accumulated, since the two tables interleave on the game clock.
    pub fn assemble(mut rows: Vec<DriveRow>) -> Self {
        rows.sort_by(|a, b| {
            a.quarter
                .cmp(&b.quarter)
                .then(b.clock.seconds_remaining().cmp(&a.clock.seconds_remaining()))
        });

        let clocks: Vec<u32> = rows.iter().map(|row| row.clock.seconds_remaining()).collect();
        let starts = series::game_times(&series::elapsed_times(&clocks));

        let drives = rows
            .into_iter()
            .zip(starts)
            .map(|(row, start_time)| DriveBoundary { start_time, team: row.team })
            .collect();
        DriveChart { drives }
    }

    /// Team possessing the ball at `play_start`: the latest drive whose
    /// start time is at or before it. `None` when the play precedes every
    /// drive in the chart.
    pub fn possession_at(&self, play_start: u32) -> Option<&str> {
        let mut closest = None;
        for drive in &self.drives {
            if drive.start_time <= play_start {
                closest = Some(drive.team.as_str());
            } else {
                break;
            }
        }
        closest
    }

    pub fn drives(&self) -> &[DriveBoundary] {
        &self.drives
    }

    pub fn len(&self) -> usize {
        self.drives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drives.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn chart(entries: &[(u32, &str)]) -> DriveChart {
        DriveChart::new(
            entries
                .iter()
                .map(|(start_time, team)| DriveBoundary {
                    start_time: *start_time,
                    team: (*team).to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_possession_at() {
        let drives = chart(&[(0, "Lions"), (180, "Chiefs"), (400, "Lions")]);

        assert_eq!(drives.possession_at(200), Some("Chiefs"));
        assert_eq!(drives.possession_at(50), Some("Lions"));
        assert_eq!(drives.possession_at(400), Some("Lions"));
        assert_eq!(drives.possession_at(600), Some("Lions"));
    }

    #[test]
    fn test_possession_before_first_drive() {
        let drives = chart(&[(30, "Bills"), (210, "Jets")]);
        assert_eq!(drives.possession_at(10), None);

        let empty = DriveChart::default();
        assert_eq!(empty.possession_at(500), None);
    }

    #[test]
    fn test_assemble_orders_and_accumulates() {
        // Visitor rows arrive after home rows; assemble must interleave them
        let rows = vec![
            DriveRow {
                quarter: Quarter::First,
                clock: QuarterClock::from_str("15:00").unwrap(),
                team: "Lions".to_string(),
            },
            DriveRow {
                quarter: Quarter::Second,
                clock: QuarterClock::from_str("10:00").unwrap(),
                team: "Lions".to_string(),
            },
            DriveRow {
                quarter: Quarter::First,
                clock: QuarterClock::from_str("8:20").unwrap(),
                team: "Chiefs".to_string(),
            },
        ];

        let drive_chart = DriveChart::assemble(rows);
        let boundaries = drive_chart.drives();

        assert_eq!(boundaries.len(), 3);
        assert_eq!(boundaries[0], DriveBoundary { start_time: 0, team: "Lions".to_string() });
        // 15:00 -> 8:20 burns 400 seconds
        assert_eq!(boundaries[1], DriveBoundary { start_time: 400, team: "Chiefs".to_string() });
        // 8:20 -> 10:00 wraps into the second quarter: 500 + 300
        assert_eq!(boundaries[2], DriveBoundary { start_time: 1200, team: "Lions".to_string() });

        for pair in boundaries.windows(2) {
            assert!(pair[0].start_time <= pair[1].start_time);
        }
    }
}
