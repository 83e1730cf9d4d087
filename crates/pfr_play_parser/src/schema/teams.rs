use crate::error::TeamCodeError;
use serde::Serialize;

/// Team codes as pro-football-reference uses them in boxscore tables.
/// These differ from the broadcast abbreviations for a handful of clubs
/// (KAN not KC, GNB not GB, TAM not TB, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TeamCode {
    ARI, // Arizona Cardinals
    ATL, // Atlanta Falcons
    BAL, // Baltimore Ravens
    BUF, // Buffalo Bills
    CAR, // Carolina Panthers
    CHI, // Chicago Bears
    CIN, // Cincinnati Bengals
    CLE, // Cleveland Browns
    DAL, // Dallas Cowboys
    DEN, // Denver Broncos
    DET, // Detroit Lions
    GNB, // Green Bay Packers
    HOU, // Houston Texans
    IND, // Indianapolis Colts
    JAX, // Jacksonville Jaguars
    KAN, // Kansas City Chiefs
    LAC, // Los Angeles Chargers
    LAR, // Los Angeles Rams
    LVR, // Las Vegas Raiders
    MIA, // Miami Dolphins
    MIN, // Minnesota Vikings
    NOR, // New Orleans Saints
    NWE, // New England Patriots
    NYG, // New York Giants
    NYJ, // New York Jets
    PHI, // Philadelphia Eagles
    PIT, // Pittsburgh Steelers
    SEA, // Seattle Seahawks
    SFO, // San Francisco 49ers
    TAM, // Tampa Bay Buccaneers
    TEN, // Tennessee Titans
    WAS, // Washington Commanders
}

impl TeamCode {
    /// Club nickname, as the drive chart headings spell it.
    pub fn nickname(self) -> &'static str {
        match self {
            TeamCode::ARI => "Cardinals",
            TeamCode::ATL => "Falcons",
            TeamCode::BAL => "Ravens",
            TeamCode::BUF => "Bills",
            TeamCode::CAR => "Panthers",
            TeamCode::CHI => "Bears",
            TeamCode::CIN => "Bengals",
            TeamCode::CLE => "Browns",
            TeamCode::DAL => "Cowboys",
            TeamCode::DEN => "Broncos",
            TeamCode::DET => "Lions",
            TeamCode::GNB => "Packers",
            TeamCode::HOU => "Texans",
            TeamCode::IND => "Colts",
            TeamCode::JAX => "Jaguars",
            TeamCode::KAN => "Chiefs",
            TeamCode::LAC => "Chargers",
            TeamCode::LAR => "Rams",
            TeamCode::LVR => "Raiders",
            TeamCode::MIA => "Dolphins",
            TeamCode::MIN => "Vikings",
            TeamCode::NOR => "Saints",
            TeamCode::NWE => "Patriots",
            TeamCode::NYG => "Giants",
            TeamCode::NYJ => "Jets",
            TeamCode::PHI => "Eagles",
            TeamCode::PIT => "Steelers",
            TeamCode::SEA => "Seahawks",
            TeamCode::SFO => "49ers",
            TeamCode::TAM => "Buccaneers",
            TeamCode::TEN => "Titans",
            TeamCode::WAS => "Commanders",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            TeamCode::ARI => "ARI",
            TeamCode::ATL => "ATL",
            TeamCode::BAL => "BAL",
            TeamCode::BUF => "BUF",
            TeamCode::CAR => "CAR",
            TeamCode::CHI => "CHI",
            TeamCode::CIN => "CIN",
            TeamCode::CLE => "CLE",
            TeamCode::DAL => "DAL",
            TeamCode::DEN => "DEN",
            TeamCode::DET => "DET",
            TeamCode::GNB => "GNB",
            TeamCode::HOU => "HOU",
            TeamCode::IND => "IND",
            TeamCode::JAX => "JAX",
            TeamCode::KAN => "KAN",
            TeamCode::LAC => "LAC",
            TeamCode::LAR => "LAR",
            TeamCode::LVR => "LVR",
            TeamCode::MIA => "MIA",
            TeamCode::MIN => "MIN",
            TeamCode::NOR => "NOR",
            TeamCode::NWE => "NWE",
            TeamCode::NYG => "NYG",
            TeamCode::NYJ => "NYJ",
            TeamCode::PHI => "PHI",
            TeamCode::PIT => "PIT",
            TeamCode::SEA => "SEA",
            TeamCode::SFO => "SFO",
            TeamCode::TAM => "TAM",
            TeamCode::TEN => "TEN",
            TeamCode::WAS => "WAS",
        }
    }
}

impl std::str::FromStr for TeamCode {
    type Err = TeamCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ARI" => Ok(TeamCode::ARI),
            "ATL" => Ok(TeamCode::ATL),
            "BAL" => Ok(TeamCode::BAL),
            "BUF" => Ok(TeamCode::BUF),
            "CAR" => Ok(TeamCode::CAR),
            "CHI" => Ok(TeamCode::CHI),
            "CIN" => Ok(TeamCode::CIN),
            "CLE" => Ok(TeamCode::CLE),
            "DAL" => Ok(TeamCode::DAL),
            "DEN" => Ok(TeamCode::DEN),
            "DET" => Ok(TeamCode::DET),
            "GNB" => Ok(TeamCode::GNB),
            "HOU" => Ok(TeamCode::HOU),
            "IND" => Ok(TeamCode::IND),
            "JAX" => Ok(TeamCode::JAX),
            "KAN" => Ok(TeamCode::KAN),
            "LAC" => Ok(TeamCode::LAC),
            "LAR" => Ok(TeamCode::LAR),
            "LVR" => Ok(TeamCode::LVR),
            "MIA" => Ok(TeamCode::MIA),
            "MIN" => Ok(TeamCode::MIN),
            "NOR" => Ok(TeamCode::NOR),
            "NWE" => Ok(TeamCode::NWE),
            "NYG" => Ok(TeamCode::NYG),
            "NYJ" => Ok(TeamCode::NYJ),
            "PHI" => Ok(TeamCode::PHI),
            "PIT" => Ok(TeamCode::PIT),
            "SEA" => Ok(TeamCode::SEA),
            "SFO" => Ok(TeamCode::SFO),
            "TAM" => Ok(TeamCode::TAM),
            "TEN" => Ok(TeamCode::TEN),
            "WAS" => Ok(TeamCode::WAS),
            _ => Err(TeamCodeError::InvalidTeamCode(s.to_string())),
        }
    }
}

impl std::fmt::Display for TeamCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_team_code_from_str() {
        assert_eq!(TeamCode::from_str("KAN"), Ok(TeamCode::KAN));
        assert_eq!(TeamCode::from_str("GNB"), Ok(TeamCode::GNB));
        assert!(TeamCode::from_str("KC").is_err());
        assert!(TeamCode::from_str("").is_err());
    }

    #[test]
    fn test_nickname() {
        assert_eq!(TeamCode::KAN.nickname(), "Chiefs");
        assert_eq!(TeamCode::TAM.nickname(), "Buccaneers");
        assert_eq!(TeamCode::SFO.nickname(), "49ers");
    }
}
