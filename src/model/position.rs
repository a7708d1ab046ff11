//! Position-category membership rules.
//!
//! Categories overlap: "CB" is a defender and a center defender, "LWB" is a
//! defender and a left defender. Each rule is an independent predicate and the
//! side splits are intersections with the defender rule.

use super::columns::{GK, OVERALL};
use std::fmt;
use std::str::FromStr;

/// Codes counted as attackers (exact match)
pub const ATTACKER_CODES: [&str; 6] = ["CF", "SS", "LW", "RW", "ST", "FW"];

pub fn is_attacker(code: &str) -> bool {
    ATTACKER_CODES.contains(&code)
}

pub fn is_midfielder(code: &str) -> bool {
    code.contains('M')
}

pub fn is_defender(code: &str) -> bool {
    code.contains('B') || code == "SW"
}

pub fn is_left_defender(code: &str) -> bool {
    is_defender(code) && code.contains('L')
}

pub fn is_center_defender(code: &str) -> bool {
    is_defender(code) && code.contains('C')
}

pub fn is_right_defender(code: &str) -> bool {
    is_defender(code) && code.contains('R')
}

pub fn is_goalkeeper(code: &str) -> bool {
    code == "GK"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionCategory {
    Attackers,
    Midfielders,
    Defenders,
    LeftDefenders,
    CenterDefenders,
    RightDefenders,
    Goalkeepers,
}

impl PositionCategory {
    pub const ALL: [PositionCategory; 7] = [
        PositionCategory::Attackers,
        PositionCategory::Midfielders,
        PositionCategory::Defenders,
        PositionCategory::LeftDefenders,
        PositionCategory::CenterDefenders,
        PositionCategory::RightDefenders,
        PositionCategory::Goalkeepers,
    ];

    pub fn matches(&self, code: &str) -> bool {
        match self {
            PositionCategory::Attackers => is_attacker(code),
            PositionCategory::Midfielders => is_midfielder(code),
            PositionCategory::Defenders => is_defender(code),
            PositionCategory::LeftDefenders => is_left_defender(code),
            PositionCategory::CenterDefenders => is_center_defender(code),
            PositionCategory::RightDefenders => is_right_defender(code),
            PositionCategory::Goalkeepers => is_goalkeeper(code),
        }
    }

    /// Sort keys for the category leaderboard, most significant first
    pub fn sort_columns(&self) -> &'static [&'static str] {
        match self {
            PositionCategory::Goalkeepers => &[GK, OVERALL],
            _ => &[OVERALL],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PositionCategory::Attackers => "attackers",
            PositionCategory::Midfielders => "midfielders",
            PositionCategory::Defenders => "defenders",
            PositionCategory::LeftDefenders => "left-defenders",
            PositionCategory::CenterDefenders => "center-defenders",
            PositionCategory::RightDefenders => "right-defenders",
            PositionCategory::Goalkeepers => "goalkeepers",
        }
    }
}

impl fmt::Display for PositionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PositionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "attackers" | "att" | "attk" => Ok(PositionCategory::Attackers),
            "midfielders" | "mid" => Ok(PositionCategory::Midfielders),
            "defenders" | "def" | "deff" => Ok(PositionCategory::Defenders),
            "left-defenders" | "left" => Ok(PositionCategory::LeftDefenders),
            "center-defenders" | "centre-defenders" | "center" => {
                Ok(PositionCategory::CenterDefenders)
            }
            "right-defenders" | "right" => Ok(PositionCategory::RightDefenders),
            "goalkeepers" | "gk" => Ok(PositionCategory::Goalkeepers),
            _ => Err(format!("unknown position category: {}", s)),
        }
    }
}
