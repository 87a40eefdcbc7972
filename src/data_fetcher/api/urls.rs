//! URL building utilities for the scores API endpoints
//!
//! Paths are relative to the API base URL, which carries the version
//! segment and a trailing slash (`http://api.football-data.org/v1/`).

/// Joins a base URL and a relative endpoint path with exactly one slash.
///
/// # Example
/// ```
/// use soccer_cli::data_fetcher::api::join_url;
///
/// assert_eq!(join_url("http://host/v1/", "fixtures"), "http://host/v1/fixtures");
/// assert_eq!(join_url("http://host/v1", "/fixtures"), "http://host/v1/fixtures");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Fixtures of one team within a time frame.
///
/// # Example
/// ```
/// use soccer_cli::data_fetcher::api::build_team_fixtures_path;
///
/// assert_eq!(build_team_fixtures_path(57, "p6"), "teams/57/fixtures?timeFrame=p6");
/// ```
pub fn build_team_fixtures_path(team_id: u32, time_frame: &str) -> String {
    format!("teams/{team_id}/fixtures?timeFrame={time_frame}")
}

/// Squad of one team.
pub fn build_team_players_path(team_id: u32) -> String {
    format!("teams/{team_id}/players")
}

/// Current table of one league.
///
/// # Example
/// ```
/// use soccer_cli::data_fetcher::api::build_league_table_path;
///
/// assert_eq!(build_league_table_path(426), "soccerseasons/426/leagueTable");
/// ```
pub fn build_league_table_path(league_id: u32) -> String {
    format!("soccerseasons/{league_id}/leagueTable")
}

/// Fixtures of one league within a time frame.
pub fn build_league_fixtures_path(league_id: u32, time_frame: &str) -> String {
    format!("soccerseasons/{league_id}/fixtures?timeFrame={time_frame}")
}

/// Fixtures of every league within a time frame.
pub fn build_all_fixtures_path(time_frame: &str) -> String {
    format!("fixtures?timeFrame={time_frame}")
}
