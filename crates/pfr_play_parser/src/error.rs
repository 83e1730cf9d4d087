use thiserror::Error;
use std::num::ParseIntError;


#[derive(Debug, Error, PartialEq)]
pub enum GameClockError {
    #[error("Invalid quarter: {quarter}")]
    InvalidQuarter { quarter: String },

    #[error("Invalid minutes: {minutes}, must be between 0 and 15")]
    InvalidMinutes { minutes: u8 },

    #[error("Invalid seconds: {seconds}, must be between 0 and 59")]
    InvalidSeconds { seconds: u8 },

    #[error("Invalid time format: {time}")]
    InvalidTimeFormat { time: String },

    #[error("Parse error occurred for number: {source}")]
    ParseError {
        #[from]
        source: ParseIntError,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum TeamCodeError {
    #[error("Invalid team code: {0}")]
    InvalidTeamCode(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum YardageError {
    #[error("Invalid yardage value: {value}, must be between 0 and 100")]
    InvalidYardage { value: u16 },

    #[error("Invalid yardage description: {0}")]
    InvalidYardageFormat(String),

    #[error("No yardage information found in the play description")]
    NoYardageInfo,
}

#[derive(Debug, Error, PartialEq)]
pub enum PbpError {
    #[error("Missing table in the document: {id}")]
    MissingTable { id: String },

    #[error("Missing column in table: {name}")]
    MissingColumn { name: String },

    #[error("Missing drive heading for: {id}")]
    MissingDriveHeading { id: String },

    #[error("Play-by-play table has no header row")]
    MissingHeader,

    #[error("Game clock error: {0}")]
    GameClock(#[from] GameClockError),
}

impl GameClockError {
    // Specific error creation helpers

    pub fn invalid_quarter_error(quarter: &str) -> Self {
        GameClockError::InvalidQuarter {
            quarter: quarter.to_string(),
        }
    }

    pub fn invalid_minutes_error(minutes: u8) -> Self {
        GameClockError::InvalidMinutes { minutes }
    }

    pub fn invalid_seconds_error(seconds: u8) -> Self {
        GameClockError::InvalidSeconds { seconds }
    }

    pub fn invalid_time_format_error(time: &str) -> Self {
        GameClockError::InvalidTimeFormat {
            time: time.to_string(),
        }
    }
}

impl PbpError {
    pub fn missing_table_error(id: &str) -> Self {
        PbpError::MissingTable { id: id.to_string() }
    }

    pub fn missing_column_error(name: &str) -> Self {
        PbpError::MissingColumn { name: name.to_string() }
    }

    pub fn missing_drive_heading_error(id: &str) -> Self {
        PbpError::MissingDriveHeading { id: id.to_string() }
    }
}
