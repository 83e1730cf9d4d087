use crate::error::YardageError;
use regex::Regex;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum YardageKind {
	Gain,
	Loss,
	NoGain,
}

/// Yards gained or lost on a single play, pulled out of the free-text detail.
#[derive(Debug, Clone, PartialEq)]
pub struct Yardage {
	pub value: u16,
	pub kind: YardageKind,
}

impl Yardage {
	pub fn new(value: u16, kind: YardageKind) -> Result<Self, YardageError> {
		if value <= 100 {
			Ok(Self { value, kind })
		} else {
			Err(YardageError::InvalidYardage { value })
		}
	}

	/// Net yards with the gain-positive sign convention.
	pub fn signed(&self) -> i32 {
		match self.kind {
			YardageKind::Gain => i32::from(self.value),
			YardageKind::Loss => -i32::from(self.value),
			YardageKind::NoGain => 0,
		}
	}
}

impl FromStr for Yardage {
	type Err = YardageError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		// Regular expression to match yard gains/losses
		let re = Regex::new(r"for (-?\d+) yards?|for no gain").unwrap();

		if let Some(caps) = re.captures(s) {
			if let Some(yards_match) = caps.get(1) {
				// Yards gained or lost
				let value: i32 = yards_match.as_str().parse().map_err(|_| YardageError::InvalidYardageFormat(s.to_string()))?;
				let (value, kind) = if value > 0 {
					(u16::try_from(value).map_err(|_| YardageError::InvalidYardageFormat(s.to_string()))?, YardageKind::Gain)
				} else if value < 0 {
					(u16::try_from(value.unsigned_abs()).map_err(|_| YardageError::InvalidYardageFormat(s.to_string()))?, YardageKind::Loss)
				} else {
					(0, YardageKind::NoGain)
				};
				Yardage::new(value, kind)
			} else {
				// "for no gain" case
				Yardage::new(0, YardageKind::NoGain)
			}
		} else if s.contains("pass incomplete") {
			// Treat incomplete passes as no gain
			Yardage::new(0, YardageKind::NoGain)
		} else {
			Err(YardageError::NoYardageInfo)
		}
	}
}
