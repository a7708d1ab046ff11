//! Column names the queries rely on. Names are case-sensitive.

pub const NAME: &str = "Name";
pub const CLUB: &str = "Club";
pub const NATION: &str = "Nation";
pub const POSITION: &str = "Position";
pub const OVERALL: &str = "Overall";
/// Goalkeeping rating
pub const GK: &str = "GK";

pub const PACE: &str = "Pace";
pub const SHOOTING: &str = "Shooting";
pub const PASSING: &str = "Passing";
pub const DRIBBLING: &str = "Dribbling";
pub const DEFENDING: &str = "Defending";
pub const PHYSICALITY: &str = "Physicality";

/// Radar attributes, in chart order
pub const ATTRIBUTES: [&str; 6] = [PACE, SHOOTING, PASSING, DRIBBLING, DEFENDING, PHYSICALITY];

// Summary output columns
pub const PLAYER_COUNT: &str = "Player";
pub const ATTACK_MEAN: &str = "ATTK";
pub const MIDFIELD_MEAN: &str = "MID";
pub const DEFENSE_MEAN: &str = "DEFF";

// Match records
pub const HOME_TEAM: &str = "home_team";
pub const AWAY_TEAM: &str = "away_team";
pub const HOME_SCORE: &str = "home_score";
pub const AWAY_SCORE: &str = "away_score";
pub const RESULT: &str = "result";
