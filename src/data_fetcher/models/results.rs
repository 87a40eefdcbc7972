use crate::constants::{UNSCORED_SENTINEL, console::UNSCORED_GLYPH};
use crate::leagues::Tier;
use serde::{Serialize, Serializer};
use std::fmt;

/// Goals scored by one side, or the marker for a fixture without a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Score {
    Goals(u32),
    Unscored,
}

impl Score {
    /// Converts a raw API goal value. Missing values, `null`, and the
    /// API's "not played" sentinel all become `Unscored`.
    pub fn from_raw(raw: Option<i64>) -> Self {
        match raw {
            Some(UNSCORED_SENTINEL) | None => Score::Unscored,
            Some(goals) => u32::try_from(goals)
                .map(Score::Goals)
                .unwrap_or(Score::Unscored),
        }
    }

    pub fn goals(&self) -> Option<u32> {
        match self {
            Score::Goals(goals) => Some(*goals),
            Score::Unscored => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // pad() keeps width/alignment flags working in format strings
            Score::Goals(goals) => f.pad(&goals.to_string()),
            Score::Unscored => f.pad(UNSCORED_GLYPH),
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Score::Goals(goals) => serializer.serialize_some(goals),
            Score::Unscored => serializer.serialize_none(),
        }
    }
}

/// Result of comparing the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
    Unplayed,
}

/// Canonical result shape shared by every feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub home_team: String,
    pub home_goals: Score,
    pub away_team: String,
    pub away_goals: Score,
}

impl MatchResult {
    /// Builds a result, collapsing a half-known score to both sides unscored.
    pub fn new(
        home_team: impl Into<String>,
        home_goals: Score,
        away_team: impl Into<String>,
        away_goals: Score,
    ) -> Self {
        let (home_goals, away_goals) = match (home_goals, away_goals) {
            (Score::Goals(h), Score::Goals(a)) => (Score::Goals(h), Score::Goals(a)),
            _ => (Score::Unscored, Score::Unscored),
        };
        Self {
            home_team: home_team.into(),
            home_goals,
            away_team: away_team.into(),
            away_goals,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match (self.home_goals, self.away_goals) {
            (Score::Goals(h), Score::Goals(a)) if h > a => Outcome::HomeWin,
            (Score::Goals(h), Score::Goals(a)) if h < a => Outcome::AwayWin,
            (Score::Goals(_), Score::Goals(_)) => Outcome::Draw,
            _ => Outcome::Unplayed,
        }
    }
}

/// Lifecycle state of a fixture as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureStatus {
    Scheduled,
    InPlay,
    Finished,
    Postponed,
    Other(String),
}

impl FixtureStatus {
    pub fn from_api(status: &str) -> Self {
        match status {
            "SCHEDULED" | "TIMED" => FixtureStatus::Scheduled,
            "IN_PLAY" | "PAUSED" | "LIVE" => FixtureStatus::InPlay,
            "FINISHED" | "AWARDED" => FixtureStatus::Finished,
            "POSTPONED" | "SUSPENDED" | "CANCELED" | "CANCELLED" => FixtureStatus::Postponed,
            other => FixtureStatus::Other(other.to_string()),
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, FixtureStatus::Finished)
    }
}

/// A scheduled or completed match from the fixtures endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// League id from the fixture's competition reference, when present.
    pub league_id: Option<u32>,
    /// Kick-off as reported by the API (UTC, ISO-8601).
    pub date: String,
    pub status: FixtureStatus,
    pub result: MatchResult,
}

impl Fixture {
    /// The calendar part of the kick-off timestamp.
    pub fn date_only(&self) -> &str {
        self.date.split('T').next().unwrap_or(&self.date)
    }
}

/// A match from the live-scores feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveScore {
    pub league: String,
    pub result: MatchResult,
    /// Kick-off or match clock, in whatever encoding the feed used.
    pub time: String,
}

/// One team's row in a league table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingRow {
    pub position: u32,
    pub team_name: String,
    pub played: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
    pub tier: Tier,
}

/// A squad member from the roster endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Player {
    pub jersey_number: Option<u32>,
    pub name: String,
    pub position: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<String>,
    pub market_value: Option<String>,
}

/// Fixtures of one league, in feed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueGroup {
    pub code: String,
    pub name: String,
    pub fixtures: Vec<Fixture>,
}

/// The `--time`/`--upcoming` pair echoed back to the writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub days: u32,
    pub upcoming: bool,
}

impl TimeWindow {
    pub fn past(days: u32) -> Self {
        Self {
            days,
            upcoming: false,
        }
    }

    pub fn upcoming(days: u32) -> Self {
        Self {
            days,
            upcoming: true,
        }
    }

    /// The API `timeFrame` query value, e.g. `p6` or `n3`.
    pub fn time_frame(&self) -> String {
        let direction = if self.upcoming { 'n' } else { 'p' };
        format!("{direction}{}", self.days)
    }

    /// Whether a team fixture belongs in a report for this window.
    pub fn includes(&self, fixture: &Fixture) -> bool {
        self.upcoming || fixture.status.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_from_raw() {
        assert_eq!(Score::from_raw(Some(3)), Score::Goals(3));
        assert_eq!(Score::from_raw(Some(0)), Score::Goals(0));
        assert_eq!(Score::from_raw(Some(-1)), Score::Unscored);
        assert_eq!(Score::from_raw(None), Score::Unscored);
    }

    #[test]
    fn test_score_display_never_shows_sentinel() {
        assert_eq!(Score::Goals(2).to_string(), "2");
        assert_eq!(Score::Unscored.to_string(), "-");
        assert_eq!(format!("{:>2}", Score::Unscored), " -");
        assert_eq!(format!("{:>2}", Score::Goals(1)), " 1");
    }

    #[test]
    fn test_score_serializes_as_number_or_null() {
        assert_eq!(serde_json::to_string(&Score::Goals(4)).unwrap(), "4");
        assert_eq!(serde_json::to_string(&Score::Unscored).unwrap(), "null");
    }

    #[test]
    fn test_half_known_score_collapses_to_unscored() {
        let result = MatchResult::new("Arsenal", Score::Goals(1), "Chelsea", Score::Unscored);
        assert_eq!(result.home_goals, Score::Unscored);
        assert_eq!(result.away_goals, Score::Unscored);
        assert_eq!(result.outcome(), Outcome::Unplayed);
    }

    #[test]
    fn test_outcome_is_exactly_one_comparison() {
        for home in 0..4 {
            for away in 0..4 {
                let result =
                    MatchResult::new("H", Score::Goals(home), "A", Score::Goals(away));
                let expected = if home > away {
                    Outcome::HomeWin
                } else if home < away {
                    Outcome::AwayWin
                } else {
                    Outcome::Draw
                };
                assert_eq!(result.outcome(), expected, "{home}-{away}");
            }
        }
    }

    #[test]
    fn test_fixture_status_mapping() {
        assert_eq!(FixtureStatus::from_api("FINISHED"), FixtureStatus::Finished);
        assert_eq!(FixtureStatus::from_api("TIMED"), FixtureStatus::Scheduled);
        assert_eq!(FixtureStatus::from_api("IN_PLAY"), FixtureStatus::InPlay);
        assert_eq!(FixtureStatus::from_api("POSTPONED"), FixtureStatus::Postponed);
        assert_eq!(
            FixtureStatus::from_api("WEIRD"),
            FixtureStatus::Other("WEIRD".to_string())
        );
    }

    #[test]
    fn test_time_window() {
        assert_eq!(TimeWindow::past(6).time_frame(), "p6");
        assert_eq!(TimeWindow::upcoming(3).time_frame(), "n3");

        let scheduled = Fixture {
            league_id: None,
            date: "2016-04-17T08:00:00Z".to_string(),
            status: FixtureStatus::Scheduled,
            result: MatchResult::new("H", Score::Unscored, "A", Score::Unscored),
        };
        assert!(!TimeWindow::past(6).includes(&scheduled));
        assert!(TimeWindow::upcoming(6).includes(&scheduled));
        assert_eq!(scheduled.date_only(), "2016-04-17");
    }
}
