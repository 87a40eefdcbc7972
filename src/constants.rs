//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers, endpoint defaults and column
//! widths so the writers and the gateway agree on them.

/// Default base URL of the scores API (v1 layout, trailing slash included)
pub const DEFAULT_API_BASE_URL: &str = "http://api.football-data.org/v1/";

/// Default URL of the unauthenticated live-scores feed
pub const DEFAULT_LIVE_URL: &str = "http://soccer-cli.appspot.com/";

/// Header carrying the API token on authenticated requests
pub const AUTH_HEADER: &str = "X-Auth-Token";

/// Number of days looked back (or ahead) when `--time` is not given
pub const DEFAULT_TIME_WINDOW_DAYS: u32 = 6;

/// Goal value the scores API uses for a fixture that has not been played
pub const UNSCORED_SENTINEL: i64 = -1;

/// Log file name used when no custom log path is configured
pub const LOG_FILE_NAME: &str = "soccer_cli.log";

/// Console layout constants
pub mod console {
    /// Width the home and away team names are padded to
    pub const TEAM_NAME_WIDTH: usize = 25;

    /// Width of a goal count column
    pub const GOALS_WIDTH: usize = 2;

    /// Total width of a league banner
    pub const LEAGUE_HEADER_WIDTH: usize = 62;

    /// Fill character for league banners
    pub const LEAGUE_HEADER_FILL: char = '=';

    /// Glyph shown instead of a goal count for unplayed fixtures
    pub const UNSCORED_GLYPH: &str = "-";
}

/// Environment variable names
pub mod env_vars {
    /// API token override
    pub const API_TOKEN: &str = "SOCCER_CLI_API_TOKEN";

    /// Scores API base URL override
    pub const API_URL: &str = "SOCCER_CLI_API_URL";

    /// Log file path override
    pub const LOG_FILE: &str = "SOCCER_CLI_LOG_FILE";

    /// HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "SOCCER_CLI_HTTP_TIMEOUT";
}
