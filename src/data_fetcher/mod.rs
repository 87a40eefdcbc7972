pub mod api;
pub mod models;
pub mod processors;

pub use api::{ApiGateway, Transport};
pub use models::{Fixture, LeagueGroup, LiveScore, MatchResult, Player, Score, StandingRow};
