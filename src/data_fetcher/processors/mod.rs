pub mod grouping;
pub mod normalizer;
pub mod time_formatting;

pub use grouping::group_by_league;
pub use normalizer::{
    FixtureSchema, fixture_list, parse_fixture, parse_fixtures, parse_live_score, parse_match,
    parse_player, parse_players, parse_standing, parse_standings,
};
pub use time_formatting::{to_local, to_local_with_offset};
