//! One operation per report: resolve codes, fetch once, normalize, render.
//!
//! API failures and empty results are not errors here. They come back as a
//! [`CommandOutcome`] carrying the line to show the user, and nothing is
//! written. Only writer failures propagate as `Err`.

use crate::data_fetcher::api::{
    ApiGateway, Transport, build_all_fixtures_path, build_league_fixtures_path,
    build_league_table_path, build_team_fixtures_path, build_team_players_path,
};
use crate::data_fetcher::models::{LeagueGroup, TimeWindow};
use crate::data_fetcher::processors::{
    group_by_league, parse_fixtures, parse_live_score, parse_players, parse_standings,
};
use crate::error::AppError;
use crate::leagues::{LEAGUES, TEAMS};
use crate::writers::Writer;
use tracing::{info, warn};

pub const TEAM_CODE_INVALID: &str = "Team code is not correct.";
pub const LEAGUE_CODE_INVALID: &str = "League code is not correct.";

/// What happened to a report request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The writer received the results.
    Rendered,
    /// The request succeeded but had nothing to show.
    Empty(String),
    /// The request could not be served.
    Failed(String),
}

impl CommandOutcome {
    /// The advisory line for non-rendered outcomes.
    pub fn message(&self) -> Option<&str> {
        match self {
            CommandOutcome::Rendered => None,
            CommandOutcome::Empty(message) | CommandOutcome::Failed(message) => Some(message),
        }
    }

    fn empty(message: impl Into<String>) -> Self {
        CommandOutcome::Empty(message.into())
    }

    fn failed(message: impl Into<String>) -> Self {
        CommandOutcome::Failed(message.into())
    }
}

pub struct RequestHandler<T: Transport, W: Writer> {
    gateway: ApiGateway<T>,
    writer: W,
}

impl<T: Transport, W: Writer> RequestHandler<T, W> {
    pub fn new(gateway: ApiGateway<T>, writer: W) -> Self {
        Self { gateway, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn get_live_scores(&mut self) -> Result<CommandOutcome, AppError> {
        let games = self.gateway.fetch_live().and_then(|raw| {
            raw.iter()
                .map(parse_live_score)
                .collect::<Result<Vec<_>, _>>()
        });
        let games = match games {
            Ok(games) => games,
            Err(e) => {
                warn!("Live scores request failed: {e}");
                return Ok(CommandOutcome::failed(
                    "There was problem getting live scores",
                ));
            }
        };

        if games.is_empty() {
            return Ok(CommandOutcome::empty("No live action currently"));
        }

        info!("Rendering {} live games", games.len());
        self.writer.live_scores(&games)?;
        Ok(CommandOutcome::Rendered)
    }

    pub fn get_team_scores(
        &mut self,
        team_code: &str,
        window: TimeWindow,
    ) -> Result<CommandOutcome, AppError> {
        let Some(team_id) = TEAMS.id_for(team_code) else {
            return Ok(CommandOutcome::failed(TEAM_CODE_INVALID));
        };

        let path = build_team_fixtures_path(team_id, &window.time_frame());
        let fixtures = match self.gateway.fetch(&path).and_then(|body| parse_fixtures(&body)) {
            Ok(fixtures) => fixtures,
            Err(e) => {
                warn!("Team scores request for {team_code} failed: {e}");
                // Api errors display as their kind message
                return Ok(CommandOutcome::failed(e.to_string()));
            }
        };

        let fixtures: Vec<_> = fixtures
            .into_iter()
            .filter(|fixture| window.includes(fixture))
            .collect();
        if fixtures.is_empty() {
            return Ok(CommandOutcome::empty(
                "No action during past week. Change the time parameter to get more fixtures.",
            ));
        }

        self.writer.team_scores(&fixtures, window)?;
        Ok(CommandOutcome::Rendered)
    }

    pub fn get_standings(&mut self, league_code: &str) -> Result<CommandOutcome, AppError> {
        let Some(league) = LEAGUES.by_code(league_code) else {
            return Ok(CommandOutcome::failed(LEAGUE_CODE_INVALID));
        };
        let unavailable = format!("No standings available for {}.", league.code);

        let path = build_league_table_path(league.id);
        let rows = match self
            .gateway
            .fetch(&path)
            .and_then(|body| parse_standings(&body, &league.zones))
        {
            Ok(rows) => rows,
            Err(e) => {
                warn!("Standings request for {} failed: {e}", league.code);
                return Ok(CommandOutcome::Failed(unavailable));
            }
        };

        if rows.is_empty() {
            return Ok(CommandOutcome::Empty(unavailable));
        }

        self.writer.standings(&rows, league.code)?;
        Ok(CommandOutcome::Rendered)
    }

    /// Fixtures of one league, or of every supported league when `league_code`
    /// is `None`.
    pub fn get_league_scores(
        &mut self,
        league_code: Option<&str>,
        window: TimeWindow,
    ) -> Result<CommandOutcome, AppError> {
        let time_frame = window.time_frame();

        let groups = match league_code {
            Some(code) => {
                let Some(league) = LEAGUES.by_code(code) else {
                    return Ok(CommandOutcome::failed(LEAGUE_CODE_INVALID));
                };

                let path = build_league_fixtures_path(league.id, &time_frame);
                let fixtures =
                    match self.gateway.fetch(&path).and_then(|body| parse_fixtures(&body)) {
                        Ok(fixtures) => fixtures,
                        Err(e) => {
                            warn!("League scores request for {} failed: {e}", league.code);
                            return Ok(CommandOutcome::failed("No data for the given league."));
                        }
                    };

                if fixtures.is_empty() {
                    return Ok(CommandOutcome::Empty(format!(
                        "No {} matches in the past week.",
                        league.code
                    )));
                }

                // The endpoint is already scoped to one league
                vec![LeagueGroup {
                    code: league.code.to_string(),
                    name: league.name.to_string(),
                    fixtures,
                }]
            }
            None => {
                let path = build_all_fixtures_path(&time_frame);
                let fixtures =
                    match self.gateway.fetch(&path).and_then(|body| parse_fixtures(&body)) {
                        Ok(fixtures) => fixtures,
                        Err(e) => {
                            warn!("League scores request failed: {e}");
                            return Ok(CommandOutcome::failed("No data available."));
                        }
                    };

                let groups = group_by_league(fixtures, &LEAGUES);
                if groups.is_empty() {
                    return Ok(CommandOutcome::empty(
                        "No matches found for the supported leagues.",
                    ));
                }
                groups
            }
        };

        self.writer.league_scores(&groups, window)?;
        Ok(CommandOutcome::Rendered)
    }

    pub fn get_team_players(&mut self, team_code: &str) -> Result<CommandOutcome, AppError> {
        let Some(team_id) = TEAMS.id_for(team_code) else {
            return Ok(CommandOutcome::failed(TEAM_CODE_INVALID));
        };

        let path = build_team_players_path(team_id);
        let players = match self.gateway.fetch(&path).and_then(|body| parse_players(&body)) {
            Ok(players) => players,
            Err(e) => {
                warn!("Roster request for {team_code} failed: {e}");
                return Ok(CommandOutcome::failed(
                    "No data for the team. Please check the team code.",
                ));
            }
        };

        if players.is_empty() {
            return Ok(CommandOutcome::empty("No players found for this team"));
        }

        self.writer.team_players(&players)?;
        Ok(CommandOutcome::Rendered)
    }
}
