pub mod results;
pub mod schema;

pub use results::{
    Fixture, FixtureStatus, LeagueGroup, LiveScore, MatchResult, Outcome, Player, Score,
    StandingRow, TimeWindow,
};
