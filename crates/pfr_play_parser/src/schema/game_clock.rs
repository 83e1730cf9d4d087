use std::str::FromStr;
use crate::error::GameClockError;
use crate::series::QUARTER_SECS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Quarter {
    First,
    Second,
    Third,
    Fourth,
    OT,
}

impl Quarter {
    pub fn number(self) -> u8 {
        match self {
            Quarter::First => 1,
            Quarter::Second => 2,
            Quarter::Third => 3,
            Quarter::Fourth => 4,
            Quarter::OT => 5,
        }
    }
}

/// Struct to represent minutes (valid range: 0-15)
#[derive(Debug, Clone, PartialEq)]
pub struct Minutes(u8);

impl Minutes {
    pub fn new(value: u8) -> Result<Self, GameClockError> {
        if value > 15 {
            Err(GameClockError::invalid_minutes_error(value))
        } else {
            Ok(Minutes(value))
        }
    }
}

impl FromStr for Minutes {
    type Err = GameClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<u8>()?;
        Minutes::new(value)
    }
}

/// Struct to represent seconds (valid range: 0-59)
#[derive(Debug, Clone, PartialEq)]
pub struct Seconds(u8);

impl Seconds {
    pub fn new(value: u8) -> Result<Self, GameClockError> {
        if value >= 60 {
            Err(GameClockError::invalid_seconds_error(value))
        } else {
            Ok(Seconds(value))
        }
    }
}

impl FromStr for Seconds {
    type Err = GameClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<u8>()?;
        Seconds::new(value)
    }
}

/// Time left on the quarter clock, as shown in the boxscore "Time" column.
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterClock {
    minutes: Minutes,
    seconds: Seconds,
}

impl QuarterClock {
    pub fn new(minutes: Minutes, seconds: Seconds) -> Self {
        QuarterClock { minutes, seconds }
    }

    /// Seconds remaining in the quarter, at most [`QUARTER_SECS`].
    pub fn seconds_remaining(&self) -> u32 {
        u32::from(self.minutes.0) * 60 + u32::from(self.seconds.0)
    }
}

impl FromStr for QuarterClock {
    type Err = GameClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (minutes_str, seconds_str) = s.trim()
            .split_once(':')
            .ok_or_else(|| GameClockError::invalid_time_format_error(s))?;

        let minutes = minutes_str.parse::<Minutes>()?;
        let seconds = seconds_str.parse::<Seconds>()?;

        Ok(QuarterClock::new(minutes, seconds))
    }
}

impl FromStr for Quarter {
    type Err = GameClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "1st" => Ok(Quarter::First),
            "2" | "2nd" => Ok(Quarter::Second),
            "3" | "3rd" => Ok(Quarter::Third),
            "4" | "4th" => Ok(Quarter::Fourth),
            "5" | "OT" => Ok(Quarter::OT),
            _ => Err(GameClockError::invalid_quarter_error(s)),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_from_str() {
        assert_eq!(Quarter::from_str("1"), Ok(Quarter::First));
        assert_eq!(Quarter::from_str("2"), Ok(Quarter::Second));
        assert_eq!(Quarter::from_str("3rd"), Ok(Quarter::Third));
        assert_eq!(Quarter::from_str("4"), Ok(Quarter::Fourth));
        assert_eq!(Quarter::from_str("OT"), Ok(Quarter::OT));
        assert!(Quarter::from_str("5th").is_err());
        assert!(Quarter::from_str("").is_err());
    }

    #[test]
    fn test_quarter_clock_from_str() {
        let test_cases = vec![
            ("14:32", Ok(QuarterClock { minutes: Minutes(14), seconds: Seconds(32) })),
            ("0:05", Ok(QuarterClock { minutes: Minutes(0), seconds: Seconds(5) })),
            ("15:00", Ok(QuarterClock { minutes: Minutes(15), seconds: Seconds(0) })),
            ("16:00", Err(GameClockError::invalid_minutes_error(16))),
            ("14:60", Err(GameClockError::invalid_seconds_error(60))),
            ("1432", Err(GameClockError::invalid_time_format_error("1432"))),
        ];

        for (input, expected) in test_cases {
            assert_eq!(QuarterClock::from_str(input), expected, "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_seconds_remaining() {
        let clock = QuarterClock::from_str("12:00").unwrap();
        assert_eq!(clock.seconds_remaining(), 720);

        let kickoff = QuarterClock::from_str("15:00").unwrap();
        assert_eq!(kickoff.seconds_remaining(), QUARTER_SECS);
    }
}
