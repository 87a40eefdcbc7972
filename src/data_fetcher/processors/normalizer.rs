//! Converts raw API payloads into the canonical result types.
//!
//! The scores API has shipped several incompatible payload layouts. Each one
//! gets its own serde struct in [`schema`](crate::data_fetcher::models::schema);
//! the layout is chosen by probing for a marker key, never by trying one
//! decoder after another.

use crate::data_fetcher::models::schema::{
    FlatFixture, JerseyPlayer, LiveGame, NestedFixture, ScoreObjectFixture, ShirtPlayer,
    TeamNameStanding, TeamObjectStanding,
};
use crate::data_fetcher::models::{
    Fixture, FixtureStatus, LiveScore, MatchResult, Player, Score, StandingRow,
};
use crate::error::AppError;
use crate::leagues::LeagueZoneBounds;
use serde::Deserialize;
use serde_json::Value;

/// Known fixture payload layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureSchema {
    /// Goals at the top level (`goalsHomeTeam`), used by the live feed and the alpha API.
    Flat,
    /// Goals under a `result` object (v1).
    NestedResult,
    /// Team objects and a `score.fullTime` block (v2).
    ScoreObject,
}

impl FixtureSchema {
    /// Picks the layout of a single fixture object.
    pub fn detect(raw: &Value) -> Result<Self, AppError> {
        if raw.get("score").is_some_and(Value::is_object) {
            Ok(Self::ScoreObject)
        } else if raw.get("result").is_some_and(Value::is_object) {
            Ok(Self::NestedResult)
        } else if raw.get("goalsHomeTeam").is_some() {
            Ok(Self::Flat)
        } else {
            Err(AppError::api_unexpected_structure(
                "fixture has no score, result or goalsHomeTeam field",
            ))
        }
    }
}

enum RawFixture {
    Flat(FlatFixture),
    Nested(NestedFixture),
    ScoreObject(ScoreObjectFixture),
}

impl RawFixture {
    fn decode(raw: &Value) -> Result<Self, AppError> {
        Ok(match FixtureSchema::detect(raw)? {
            FixtureSchema::Flat => Self::Flat(FlatFixture::deserialize(raw)?),
            FixtureSchema::NestedResult => Self::Nested(NestedFixture::deserialize(raw)?),
            FixtureSchema::ScoreObject => {
                Self::ScoreObject(ScoreObjectFixture::deserialize(raw)?)
            }
        })
    }

    fn result(&self) -> MatchResult {
        match self {
            Self::Flat(f) => MatchResult::new(
                &f.home_team_name,
                Score::from_raw(f.goals_home_team),
                &f.away_team_name,
                Score::from_raw(f.goals_away_team),
            ),
            Self::Nested(f) => MatchResult::new(
                &f.home_team_name,
                Score::from_raw(f.result.goals_home_team),
                &f.away_team_name,
                Score::from_raw(f.result.goals_away_team),
            ),
            Self::ScoreObject(f) => MatchResult::new(
                &f.home_team.name,
                Score::from_raw(f.score.full_time.home_team),
                &f.away_team.name,
                Score::from_raw(f.score.full_time.away_team),
            ),
        }
    }

    fn league_id(&self) -> Option<u32> {
        match self {
            Self::Flat(f) => f.links.league_id(),
            Self::Nested(f) => f.links.league_id(),
            Self::ScoreObject(f) => f.competition.as_ref().map(|c| c.id),
        }
    }

    fn date(&self) -> Option<&str> {
        match self {
            Self::Flat(f) => f.date.as_deref(),
            Self::Nested(f) => f.date.as_deref(),
            Self::ScoreObject(f) => f.utc_date.as_deref(),
        }
    }

    fn status(&self) -> Option<&str> {
        match self {
            Self::Flat(f) => f.status.as_deref(),
            Self::Nested(f) => f.status.as_deref(),
            Self::ScoreObject(f) => f.status.as_deref(),
        }
    }
}

/// Extracts the teams and goals of one fixture object.
pub fn parse_match(raw: &Value) -> Result<MatchResult, AppError> {
    Ok(RawFixture::decode(raw)?.result())
}

/// Parses one fixture object, including league id, date and status.
pub fn parse_fixture(raw: &Value) -> Result<Fixture, AppError> {
    let fixture = RawFixture::decode(raw)?;
    let status = match fixture.status() {
        Some(status) => FixtureStatus::from_api(status),
        None => FixtureStatus::Other(String::new()),
    };

    Ok(Fixture {
        league_id: fixture.league_id(),
        date: fixture.date().unwrap_or_default().to_string(),
        status,
        result: fixture.result(),
    })
}

/// Returns the fixture array of a fixtures response (`fixtures` in v1,
/// `matches` in v2).
pub fn fixture_list(body: &Value) -> Result<&[Value], AppError> {
    body.get("fixtures")
        .or_else(|| body.get("matches"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| {
            AppError::api_unexpected_structure("response has no fixtures or matches array")
        })
}

/// Parses every fixture of a fixtures response, preserving feed order.
pub fn parse_fixtures(body: &Value) -> Result<Vec<Fixture>, AppError> {
    fixture_list(body)?.iter().map(parse_fixture).collect()
}

/// Parses one entry of the live-scores feed.
pub fn parse_live_score(raw: &Value) -> Result<LiveScore, AppError> {
    let game = LiveGame::deserialize(raw)?;
    Ok(LiveScore {
        league: game.league,
        result: MatchResult::new(
            game.home_team_name,
            Score::from_raw(game.goals_home_team),
            game.away_team_name,
            Score::from_raw(game.goals_away_team),
        ),
        time: game.time.unwrap_or_default(),
    })
}

/// Parses one league table row and classifies its position into a tier.
pub fn parse_standing(raw: &Value, zones: &LeagueZoneBounds) -> Result<StandingRow, AppError> {
    let row = if raw.get("team").is_some_and(Value::is_object) {
        let entry = TeamObjectStanding::deserialize(raw)?;
        StandingRow {
            position: entry.position,
            team_name: entry.team.name,
            played: entry.played_games,
            goals_for: entry.goals_for,
            goals_against: entry.goals_against,
            goal_difference: entry.goal_difference,
            points: entry.points,
            tier: zones.classify(entry.position),
        }
    } else {
        let entry = TeamNameStanding::deserialize(raw)?;
        StandingRow {
            position: entry.position,
            team_name: entry.team_name,
            played: entry.played_games,
            goals_for: entry.goals,
            goals_against: entry.goals_against,
            goal_difference: entry.goal_difference,
            points: entry.points,
            tier: zones.classify(entry.position),
        }
    };
    Ok(row)
}

fn standings_table(body: &Value) -> Option<&Vec<Value>> {
    if let Some(rows) = body.get("standing").and_then(Value::as_array) {
        return Some(rows);
    }

    let groups = body.get("standings").and_then(Value::as_array)?;
    groups
        .iter()
        .find(|group| group.get("type").and_then(Value::as_str) == Some("TOTAL"))
        .or_else(|| groups.first())
        .and_then(|group| group.get("table"))
        .and_then(Value::as_array)
}

/// Parses a league table response (`standing` in v1, the `TOTAL` group of
/// `standings` in v2).
pub fn parse_standings(
    body: &Value,
    zones: &LeagueZoneBounds,
) -> Result<Vec<StandingRow>, AppError> {
    standings_table(body)
        .ok_or_else(|| AppError::api_unexpected_structure("response has no standings table"))?
        .iter()
        .map(|raw| parse_standing(raw, zones))
        .collect()
}

/// Parses one squad member.
pub fn parse_player(raw: &Value) -> Result<Player, AppError> {
    if raw.get("shirtNumber").is_some() {
        let player = ShirtPlayer::deserialize(raw)?;
        return Ok(Player {
            jersey_number: player.shirt_number,
            name: player.name,
            position: player.position,
            nationality: player.nationality,
            date_of_birth: player.date_of_birth,
            market_value: None,
        });
    }

    let player = JerseyPlayer::deserialize(raw)?;
    Ok(Player {
        jersey_number: player.jersey_number,
        name: player.name,
        position: player.position,
        nationality: player.nationality,
        date_of_birth: player.date_of_birth,
        market_value: player.market_value,
    })
}

/// Parses a roster response (`players` in v1, `squad` in v2).
pub fn parse_players(body: &Value) -> Result<Vec<Player>, AppError> {
    body.get("players")
        .or_else(|| body.get("squad"))
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::api_unexpected_structure("response has no players array"))?
        .iter()
        .map(parse_player)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::Outcome;
    use crate::leagues::{LEAGUES, Tier};
    use serde_json::json;

    #[test]
    fn test_detect_schema() {
        assert_eq!(
            FixtureSchema::detect(&json!({"score": {}})).unwrap(),
            FixtureSchema::ScoreObject
        );
        assert_eq!(
            FixtureSchema::detect(&json!({"result": {}})).unwrap(),
            FixtureSchema::NestedResult
        );
        assert_eq!(
            FixtureSchema::detect(&json!({"goalsHomeTeam": 1})).unwrap(),
            FixtureSchema::Flat
        );
        assert!(matches!(
            FixtureSchema::detect(&json!({"homeTeamName": "A"})),
            Err(AppError::ApiUnexpectedStructure(_))
        ));
    }

    #[test]
    fn test_parse_nested_fixture() {
        let raw = json!({
            "_links": {"soccerseason": {"href": "http://api.football-data.org/v1/soccerseasons/426"}},
            "date": "2016-04-17T15:00:00Z",
            "status": "FINISHED",
            "homeTeamName": "Arsenal FC",
            "awayTeamName": "Chelsea FC",
            "result": {"goalsHomeTeam": 2, "goalsAwayTeam": 1}
        });
        let fixture = parse_fixture(&raw).unwrap();
        assert_eq!(fixture.league_id, Some(426));
        assert_eq!(fixture.date, "2016-04-17T15:00:00Z");
        assert_eq!(fixture.status, FixtureStatus::Finished);
        assert_eq!(fixture.result.home_goals, Score::Goals(2));
        assert_eq!(fixture.result.outcome(), Outcome::HomeWin);
    }

    #[test]
    fn test_parse_unplayed_nested_fixture_uses_sentinel() {
        let raw = json!({
            "homeTeamName": "A",
            "awayTeamName": "B",
            "status": "TIMED",
            "result": {"goalsHomeTeam": -1, "goalsAwayTeam": -1}
        });
        let result = parse_match(&raw).unwrap();
        assert_eq!(result.home_goals, Score::Unscored);
        assert_eq!(result.away_goals, Score::Unscored);
    }

    #[test]
    fn test_parse_score_object_fixture() {
        let raw = json!({
            "competition": {"id": 2021, "name": "Premier League"},
            "utcDate": "2019-08-09T19:00:00Z",
            "status": "FINISHED",
            "homeTeam": {"id": 64, "name": "Liverpool FC"},
            "awayTeam": {"id": 68, "name": "Norwich City FC"},
            "score": {"fullTime": {"homeTeam": 4, "awayTeam": 1}}
        });
        let fixture = parse_fixture(&raw).unwrap();
        assert_eq!(fixture.league_id, Some(2021));
        assert_eq!(fixture.date, "2019-08-09T19:00:00Z");
        assert_eq!(fixture.result.home_team, "Liverpool FC");
        assert_eq!(fixture.result.away_goals, Score::Goals(1));
    }

    #[test]
    fn test_parse_score_object_null_goals() {
        let raw = json!({
            "homeTeam": {"name": "A"},
            "awayTeam": {"name": "B"},
            "score": {"fullTime": {"homeTeam": null, "awayTeam": null}}
        });
        assert_eq!(parse_match(&raw).unwrap().outcome(), Outcome::Unplayed);
    }

    #[test]
    fn test_parse_fixtures_envelopes() {
        let v1 = json!({"fixtures": [
            {"homeTeamName": "A", "awayTeamName": "B", "goalsHomeTeam": 0, "goalsAwayTeam": 0}
        ]});
        let v2 = json!({"matches": []});
        assert_eq!(parse_fixtures(&v1).unwrap().len(), 1);
        assert!(parse_fixtures(&v2).unwrap().is_empty());
        assert!(matches!(
            parse_fixtures(&json!({"count": 0})),
            Err(AppError::ApiUnexpectedStructure(_))
        ));
    }

    #[test]
    fn test_parse_live_score() {
        let raw = json!({
            "league": "EPL",
            "homeTeamName": "Arsenal",
            "goalsHomeTeam": 1,
            "goalsAwayTeam": 1,
            "awayTeamName": "Chelsea",
            "time": "63'"
        });
        let live = parse_live_score(&raw).unwrap();
        assert_eq!(live.league, "EPL");
        assert_eq!(live.time, "63'");
        assert_eq!(live.result.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_parse_live_score_without_time() {
        let mut raw = json!({
            "league": "SA",
            "homeTeamName": "Roma",
            "goalsHomeTeam": 0,
            "goalsAwayTeam": 0,
            "awayTeamName": "Lazio",
            "time": null
        });
        assert_eq!(parse_live_score(&raw).unwrap().time, "");

        raw.as_object_mut().unwrap().remove("time");
        assert_eq!(parse_live_score(&raw).unwrap().time, "");
    }

    #[test]
    fn test_parse_v1_standings_classifies_tiers() {
        let zones = &LEAGUES.by_code("EPL").unwrap().zones;
        let body = json!({"standing": [
            {"position": 1, "teamName": "Leicester", "playedGames": 34, "goals": 60,
             "goalsAgainst": 32, "goalDifference": 28, "points": 73},
            {"position": 20, "teamName": "Aston Villa", "playedGames": 34, "goals": 24,
             "goalsAgainst": 66, "goalDifference": -42, "points": 16}
        ]});
        let rows = parse_standings(&body, zones).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tier, Tier::Champions);
        assert_eq!(rows[0].goals_for, 60);
        assert_eq!(rows[1].tier, Tier::Relegation);
        assert_eq!(rows[1].goal_difference, -42);
    }

    #[test]
    fn test_parse_v2_standings_picks_total_table() {
        let zones = LeagueZoneBounds::default();
        let body = json!({"standings": [
            {"type": "HOME", "table": []},
            {"type": "TOTAL", "table": [
                {"position": 1, "team": {"name": "Liverpool FC"}, "playedGames": 38,
                 "goalsFor": 85, "goalsAgainst": 33, "goalDifference": 52, "points": 99}
            ]}
        ]});
        let rows = parse_standings(&body, &zones).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].team_name, "Liverpool FC");
        assert_eq!(rows[0].tier, Tier::MidTable);
    }

    #[test]
    fn test_parse_players_both_versions() {
        let v1 = json!({"players": [{
            "name": "Petr Cech", "position": "Keeper", "jerseyNumber": 33,
            "dateOfBirth": "1982-05-20", "nationality": "Czech Republic",
            "marketValue": "7,000,000 €"
        }]});
        let players = parse_players(&v1).unwrap();
        assert_eq!(players[0].jersey_number, Some(33));
        assert_eq!(players[0].market_value.as_deref(), Some("7,000,000 €"));

        let v2 = json!({"squad": [{
            "name": "Alisson", "position": "Goalkeeper", "shirtNumber": 1,
            "dateOfBirth": "1992-10-02", "nationality": "Brazil"
        }]});
        let players = parse_players(&v2).unwrap();
        assert_eq!(players[0].jersey_number, Some(1));
        assert_eq!(players[0].market_value, None);
    }
}
