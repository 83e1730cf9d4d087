use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayType {
    Pass,
    Run,
    SpecialTeams,
}

/// Keyword table checked in order against the lowercased description; the
/// first hit wins. Scrambles count as pass plays since the call was a pass.
const KEYWORDS: &[(&str, PlayType)] = &[
    ("pass", PlayType::Pass),
    ("scrambles", PlayType::Pass),
    ("kicks", PlayType::SpecialTeams),
    ("punts", PlayType::SpecialTeams),
];

impl PlayType {
    /// Best-effort classification of a play description. Anything that is
    /// not recognizably a pass or a kicking play is treated as a run.
    pub fn classify(description: &str) -> Self {
        let lowercase = description.to_lowercase();
        for (keyword, play_type) in KEYWORDS {
            if lowercase.contains(keyword) {
                return *play_type;
            }
        }
        PlayType::Run
    }
}

impl From<&str> for PlayType {
    fn from(description: &str) -> Self {
        PlayType::classify(description)
    }
}

impl fmt::Display for PlayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlayType::Pass => "Pass",
            PlayType::Run => "Run",
            PlayType::SpecialTeams => "Special Teams",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let test_cases = vec![
            ("John Smith pass complete to WR for 40 yards", PlayType::Pass),
            ("(Shotgun) L.Jackson pass short middle to M.Andrews to BAL 45 for 10 yards (M.Fitzpatrick).", PlayType::Pass),
            ("L.Jackson scrambles left end to BAL 48 for 3 yards (V.Williams).", PlayType::Pass),
            ("J.Tucker kicks 65 yards from BAL 35 to end zone, Touchback.", PlayType::SpecialTeams),
            ("S.Koch punts 45 yards to PIT 15, Center-N.Moore.", PlayType::SpecialTeams),
            ("J.Dobbins right end to BAL 40 for 5 yards (T.Edmunds).", PlayType::Run),
            ("Run up the middle", PlayType::Run),
        ];

        for (input, expected) in test_cases {
            assert_eq!(PlayType::classify(input), expected, "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_classify_case_insensitivity() {
        assert_eq!(PlayType::classify("P.Mahomes PASS deep right"), PlayType::Pass);
        assert_eq!(PlayType::classify("T.Bass KICKS 65 yards"), PlayType::SpecialTeams);
    }

    #[test]
    fn test_display() {
        assert_eq!(PlayType::Pass.to_string(), "Pass");
        assert_eq!(PlayType::SpecialTeams.to_string(), "Special Teams");
    }
}
