//! Flat row shapes shared by the CSV and JSON writers.
//!
//! JSON takes the serde field names (camelCase, unscored goals as `null`);
//! CSV takes [`Record::HEADER`] and [`Record::csv_row`], where unscored goals
//! are written as `-`.

use crate::data_fetcher::models::{
    Fixture, LeagueGroup, LiveScore, MatchResult, Player, Score, StandingRow, TimeWindow,
};
use serde::Serialize;

pub trait Record: Serialize {
    const HEADER: &'static [&'static str];

    fn csv_row(&self) -> Vec<String>;
}

fn opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

/// A score line labelled with its league, used for live and league reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueFixtureRecord {
    pub league: String,
    pub home_team_name: String,
    pub home_team_goals: Score,
    pub away_team_goals: Score,
    pub away_team_name: String,
}

impl LeagueFixtureRecord {
    fn new(league: &str, result: &MatchResult) -> Self {
        Self {
            league: league.to_string(),
            home_team_name: result.home_team.clone(),
            home_team_goals: result.home_goals,
            away_team_goals: result.away_goals,
            away_team_name: result.away_team.clone(),
        }
    }
}

impl Record for LeagueFixtureRecord {
    const HEADER: &'static [&'static str] = &[
        "League",
        "Home Team Name",
        "Home Team Goals",
        "Away Team Goals",
        "Away Team Name",
    ];

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.league.clone(),
            self.home_team_name.clone(),
            self.home_team_goals.to_string(),
            self.away_team_goals.to_string(),
            self.away_team_name.clone(),
        ]
    }
}

/// A score line labelled with its match date, used for team reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatedFixtureRecord {
    pub date: String,
    pub home_team_name: String,
    pub home_team_goals: Score,
    pub away_team_goals: Score,
    pub away_team_name: String,
}

impl Record for DatedFixtureRecord {
    const HEADER: &'static [&'static str] = &[
        "Date",
        "Home Team Name",
        "Home Team Goals",
        "Away Team Goals",
        "Away Team Name",
    ];

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.home_team_name.clone(),
            self.home_team_goals.to_string(),
            self.away_team_goals.to_string(),
            self.away_team_name.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRecord {
    pub position: u32,
    pub team_name: String,
    pub played_games: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
}

impl Record for StandingRecord {
    const HEADER: &'static [&'static str] = &[
        "Position",
        "Team Name",
        "Games Played",
        "Goals For",
        "Goals Against",
        "Goal Difference",
        "Points",
    ];

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.position.to_string(),
            self.team_name.clone(),
            self.played_games.to_string(),
            self.goals_for.to_string(),
            self.goals_against.to_string(),
            self.goal_difference.to_string(),
            self.points.to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub jersey_number: Option<u32>,
    pub name: String,
    pub position: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<String>,
    pub market_value: Option<String>,
}

impl Record for PlayerRecord {
    const HEADER: &'static [&'static str] = &[
        "Jersey Number",
        "Name",
        "Position",
        "Nationality",
        "Date of Birth",
        "Market Value",
    ];

    fn csv_row(&self) -> Vec<String> {
        vec![
            opt(&self.jersey_number),
            self.name.clone(),
            opt(&self.position),
            opt(&self.nationality),
            opt(&self.date_of_birth),
            opt(&self.market_value),
        ]
    }
}

pub fn live_records(games: &[LiveScore]) -> Vec<LeagueFixtureRecord> {
    games
        .iter()
        .map(|game| LeagueFixtureRecord::new(&game.league, &game.result))
        .collect()
}

/// Team fixtures that fall into `window`, in feed order.
pub fn team_records(fixtures: &[Fixture], window: TimeWindow) -> Vec<DatedFixtureRecord> {
    fixtures
        .iter()
        .filter(|fixture| window.includes(fixture))
        .map(|fixture| DatedFixtureRecord {
            date: fixture.date_only().to_string(),
            home_team_name: fixture.result.home_team.clone(),
            home_team_goals: fixture.result.home_goals,
            away_team_goals: fixture.result.away_goals,
            away_team_name: fixture.result.away_team.clone(),
        })
        .collect()
}

pub fn league_records(groups: &[LeagueGroup]) -> Vec<LeagueFixtureRecord> {
    groups
        .iter()
        .flat_map(|group| {
            group
                .fixtures
                .iter()
                .map(|fixture| LeagueFixtureRecord::new(&group.code, &fixture.result))
        })
        .collect()
}

pub fn standing_records(rows: &[StandingRow]) -> Vec<StandingRecord> {
    rows.iter()
        .map(|row| StandingRecord {
            position: row.position,
            team_name: row.team_name.clone(),
            played_games: row.played,
            goals_for: row.goals_for,
            goals_against: row.goals_against,
            goal_difference: row.goal_difference,
            points: row.points,
        })
        .collect()
}

pub fn player_records(players: &[Player]) -> Vec<PlayerRecord> {
    players
        .iter()
        .map(|player| PlayerRecord {
            jersey_number: player.jersey_number,
            name: player.name.clone(),
            position: player.position.clone(),
            nationality: player.nationality.clone(),
            date_of_birth: player.date_of_birth.clone(),
            market_value: player.market_value.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::FixtureStatus;

    fn fixture(status: FixtureStatus, home: Score, away: Score) -> Fixture {
        Fixture {
            league_id: Some(426),
            date: "2016-04-17T15:00:00Z".to_string(),
            status,
            result: MatchResult::new("Arsenal FC", home, "Chelsea FC", away),
        }
    }

    #[test]
    fn test_team_records_filter_by_window() {
        let fixtures = vec![
            fixture(FixtureStatus::Finished, Score::Goals(2), Score::Goals(0)),
            fixture(FixtureStatus::Scheduled, Score::Unscored, Score::Unscored),
        ];
        let past = team_records(&fixtures, TimeWindow::past(6));
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].date, "2016-04-17");

        let upcoming = team_records(&fixtures, TimeWindow::upcoming(6));
        assert_eq!(upcoming.len(), 2);
    }

    #[test]
    fn test_unscored_csv_row_uses_dash() {
        let fixtures = vec![fixture(
            FixtureStatus::Scheduled,
            Score::Unscored,
            Score::Unscored,
        )];
        let records = team_records(&fixtures, TimeWindow::upcoming(3));
        assert_eq!(
            records[0].csv_row(),
            vec!["2016-04-17", "Arsenal FC", "-", "-", "Chelsea FC"]
        );
    }

    #[test]
    fn test_player_csv_row_blanks_missing_fields() {
        let record = PlayerRecord {
            jersey_number: None,
            name: "Alisson".to_string(),
            position: Some("Goalkeeper".to_string()),
            nationality: None,
            date_of_birth: None,
            market_value: None,
        };
        assert_eq!(record.csv_row(), vec!["", "Alisson", "Goalkeeper", "", "", ""]);
        assert_eq!(record.csv_row().len(), PlayerRecord::HEADER.len());
    }

    #[test]
    fn test_league_records_take_group_code() {
        let groups = vec![LeagueGroup {
            code: "EPL".to_string(),
            name: "Premier League".to_string(),
            fixtures: vec![fixture(
                FixtureStatus::Finished,
                Score::Goals(1),
                Score::Goals(1),
            )],
        }];
        let records = league_records(&groups);
        assert_eq!(records[0].league, "EPL");
        assert_eq!(records[0].home_team_goals, Score::Goals(1));
    }
}
