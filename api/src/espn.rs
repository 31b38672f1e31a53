/// ESPN API raw wire types: serde shapes for the NFL scoreboard endpoint.
/// Only the fields the game projection reads are modelled; everything else in
/// the response is ignored here and kept verbatim in the cache.
use serde::Deserialize;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Scoreboard  (site v2 API, ?week=N)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone)]
pub struct ScoreboardResponse {
    pub week: EspnWeek,
    pub events: Vec<EspnEvent>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnWeek {
    pub number: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnEvent {
    pub id: String,
    pub date: String, // "2023-09-08T00:20Z"
    #[serde(rename = "shortName")]
    pub short_name: String, // "DET @ KC"
    pub competitions: Vec<EspnCompetition>,
    pub status: EspnStatus,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatus {
    #[serde(rename = "type")]
    pub status_type: EspnStatusType,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatusType {
    pub state: String, // "pre" | "in" | "post"
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnCompetition {
    pub attendance: Value,
    pub competitors: Vec<EspnCompetitor>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnCompetitor {
    pub team: EspnTeam,
    pub score: Value, // ESPN sends scores as strings
    /// Only present once the game has a result.
    pub winner: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnTeam {
    pub abbreviation: String,
}
