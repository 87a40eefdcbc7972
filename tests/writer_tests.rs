//! File output tests for the CSV and JSON writers.

use serde_json::Value;
use soccer_cli::data_fetcher::models::{
    Fixture, FixtureStatus, LeagueGroup, MatchResult, Player, Score, StandingRow, TimeWindow,
};
use soccer_cli::leagues::Tier;
use soccer_cli::writers::{OutputFormat, OutputTarget, OutputWriter, Writer};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn standings() -> Vec<StandingRow> {
    vec![
        StandingRow {
            position: 1,
            team_name: "Leicester City FC".to_string(),
            played: 34,
            goals_for: 60,
            goals_against: 32,
            goal_difference: 28,
            points: 73,
            tier: Tier::Champions,
        },
        StandingRow {
            position: 2,
            team_name: "Tottenham Hotspur FC".to_string(),
            played: 34,
            goals_for: 64,
            goals_against: 25,
            goal_difference: 39,
            points: 68,
            tier: Tier::Champions,
        },
        StandingRow {
            position: 20,
            team_name: "Aston Villa FC".to_string(),
            played: 34,
            goals_for: 24,
            goals_against: 66,
            goal_difference: -42,
            points: 16,
            tier: Tier::Relegation,
        },
    ]
}

fn league_groups() -> Vec<LeagueGroup> {
    vec![LeagueGroup {
        code: "EPL".to_string(),
        name: "Premier League".to_string(),
        fixtures: vec![
            Fixture {
                league_id: Some(426),
                date: "2016-04-17T15:00:00Z".to_string(),
                status: FixtureStatus::Finished,
                result: MatchResult::new(
                    "Arsenal FC",
                    Score::Goals(1),
                    "Crystal Palace FC",
                    Score::Goals(1),
                ),
            },
            Fixture {
                league_id: Some(426),
                date: "2016-04-24T15:00:00Z".to_string(),
                status: FixtureStatus::Scheduled,
                result: MatchResult::new(
                    "Sunderland AFC",
                    Score::Unscored,
                    "Arsenal FC",
                    Score::Unscored,
                ),
            },
        ],
    }]
}

fn file_writer(format: OutputFormat, path: &Path) -> OutputWriter {
    OutputWriter::new(format, OutputTarget::File(path.to_path_buf()), false)
}

#[test]
fn test_standings_csv_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("standings.csv");
    let rows = standings();

    file_writer(OutputFormat::Csv, &path)
        .standings(&rows, "EPL")
        .unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    assert_eq!(
        reader.headers().unwrap().iter().collect::<Vec<_>>(),
        vec![
            "Position",
            "Team Name",
            "Games Played",
            "Goals For",
            "Goals Against",
            "Goal Difference",
            "Points"
        ]
    );

    let parsed: Vec<(u32, String, u32, u32, u32, i32, u32)> = reader
        .records()
        .map(|record| {
            let record = record.unwrap();
            (
                record[0].parse().unwrap(),
                record[1].to_string(),
                record[2].parse().unwrap(),
                record[3].parse().unwrap(),
                record[4].parse().unwrap(),
                record[5].parse().unwrap(),
                record[6].parse().unwrap(),
            )
        })
        .collect();

    let expected: Vec<_> = rows
        .iter()
        .map(|row| {
            (
                row.position,
                row.team_name.clone(),
                row.played,
                row.goals_for,
                row.goals_against,
                row.goal_difference,
                row.points,
            )
        })
        .collect();
    assert_eq!(parsed, expected);
}

#[test]
fn test_league_scores_csv_writes_dash_for_unscored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("league.csv");

    file_writer(OutputFormat::Csv, &path)
        .league_scores(&league_groups(), TimeWindow::past(6))
        .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "League,Home Team Name,Home Team Goals,Away Team Goals,Away Team Name"
    );
    assert_eq!(lines[1], "EPL,Arsenal FC,1,1,Crystal Palace FC");
    assert_eq!(lines[2], "EPL,Sunderland AFC,-,-,Arsenal FC");
}

#[test]
fn test_json_output_is_idempotent() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");
    let rows = standings();

    file_writer(OutputFormat::Json, &first)
        .standings(&rows, "EPL")
        .unwrap();
    file_writer(OutputFormat::Json, &second)
        .standings(&rows, "EPL")
        .unwrap();

    let first_text = fs::read_to_string(&first).unwrap();
    assert_eq!(first_text, fs::read_to_string(&second).unwrap());

    // Re-reading and writing the same rows again gives the same document
    let value: Value = serde_json::from_str(&first_text).unwrap();
    file_writer(OutputFormat::Json, &first)
        .standings(&rows, "EPL")
        .unwrap();
    let rewritten: Value = serde_json::from_str(&fs::read_to_string(&first).unwrap()).unwrap();
    assert_eq!(value, rewritten);
    assert_eq!(value.as_object().unwrap().len(), 1);
    assert_eq!(value["standings"][2]["goalDifference"], -42);
    assert_eq!(value["standings"][0]["teamName"], "Leicester City FC");
}

#[test]
fn test_json_league_scores_unscored_is_null() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("league.json");

    file_writer(OutputFormat::Json, &path)
        .league_scores(&league_groups(), TimeWindow::past(6))
        .unwrap();

    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let scores = value["league_scores"].as_array().unwrap();
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0]["homeTeamGoals"], 1);
    assert!(scores[1]["homeTeamGoals"].is_null());
    assert!(scores[1]["awayTeamGoals"].is_null());
}

#[test]
fn test_team_scores_file_respects_window() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("team.json");
    let fixtures = league_groups().remove(0).fixtures;

    file_writer(OutputFormat::Json, &path)
        .team_scores(&fixtures, TimeWindow::past(6))
        .unwrap();
    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["team_scores"].as_array().unwrap().len(), 1);
    assert_eq!(value["team_scores"][0]["date"], "2016-04-17");

    file_writer(OutputFormat::Json, &path)
        .team_scores(&fixtures, TimeWindow::upcoming(6))
        .unwrap();
    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["team_scores"].as_array().unwrap().len(), 2);
}

#[test]
fn test_players_csv_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("players.csv");
    let players = vec![Player {
        jersey_number: Some(1),
        name: "David De Gea".to_string(),
        position: Some("Keeper".to_string()),
        nationality: Some("Spain".to_string()),
        date_of_birth: Some("1990-11-07".to_string()),
        market_value: None,
    }];

    file_writer(OutputFormat::Csv, &path)
        .team_players(&players)
        .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "Jersey Number,Name,Position,Nationality,Date of Birth,Market Value\n\
         1,David De Gea,Keeper,Spain,1990-11-07,\n"
    );
}

#[test]
fn test_unwritable_target_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing_dir").join("standings.csv");

    let result = file_writer(OutputFormat::Csv, &path).standings(&standings(), "EPL");
    assert!(result.is_err());
    assert!(!path.exists());
}

#[test]
fn test_format_inferred_from_file_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inferred.json");
    let format = OutputFormat::resolve(None, Some(&path));
    assert_eq!(format, OutputFormat::Json);

    file_writer(format, &path)
        .standings(&standings(), "EPL")
        .unwrap();
    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(value.get("standings").is_some());
}
