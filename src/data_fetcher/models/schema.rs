//! Raw payload shapes, one struct per known API schema version.
//!
//! Goal fields are `Option<i64>` because unplayed fixtures carry either
//! `null` or a negative sentinel depending on the API generation.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Href {
    pub href: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureLinks {
    #[serde(default)]
    pub soccerseason: Option<Href>,
    #[serde(default)]
    pub competition: Option<Href>,
}

impl FixtureLinks {
    /// League id taken from the last path segment of the season link.
    pub fn league_id(&self) -> Option<u32> {
        self.soccerseason
            .as_ref()
            .or(self.competition.as_ref())
            .and_then(|link| link.href.trim_end_matches('/').rsplit('/').next())
            .and_then(|segment| segment.parse().ok())
    }
}

/// Alpha API and live feed: goals at the top level.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatFixture {
    pub home_team_name: String,
    pub away_team_name: String,
    #[serde(default)]
    pub goals_home_team: Option<i64>,
    #[serde(default)]
    pub goals_away_team: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "_links")]
    pub links: FixtureLinks,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedGoals {
    #[serde(default)]
    pub goals_home_team: Option<i64>,
    #[serde(default)]
    pub goals_away_team: Option<i64>,
}

/// v1 API: goals under `result`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedFixture {
    pub home_team_name: String,
    pub away_team_name: String,
    #[serde(default)]
    pub result: NestedGoals,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "_links")]
    pub links: FixtureLinks,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdRef {
    pub id: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreLine {
    #[serde(default)]
    pub home_team: Option<i64>,
    #[serde(default)]
    pub away_team: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBlock {
    #[serde(default)]
    pub full_time: ScoreLine,
}

/// v2 API: team objects and a `score.fullTime` block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreObjectFixture {
    pub home_team: NamedRef,
    pub away_team: NamedRef,
    #[serde(default)]
    pub score: ScoreBlock,
    #[serde(default)]
    pub utc_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub competition: Option<IdRef>,
}

/// Entry of the live-scores feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveGame {
    pub league: String,
    pub home_team_name: String,
    pub away_team_name: String,
    #[serde(default)]
    pub goals_home_team: Option<i64>,
    #[serde(default)]
    pub goals_away_team: Option<i64>,
    /// Kick-off or match clock; `null` before the feed has one.
    #[serde(default)]
    pub time: Option<String>,
}

/// v1 league table row.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamNameStanding {
    pub position: u32,
    pub team_name: String,
    pub played_games: u32,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
}

/// v2 league table row.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamObjectStanding {
    pub position: u32,
    pub team: NamedRef,
    pub played_games: u32,
    #[serde(default)]
    pub goals_for: u32,
    #[serde(default)]
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JerseyPlayer {
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub jersey_number: Option<u32>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub market_value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShirtPlayer {
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub shirt_number: Option<u32>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}
