use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::api::{ApiGateway, Transport};
use crate::error::AppError;
use crate::request_handler::{CommandOutcome, RequestHandler};
use crate::writers::{OutputWriter, Writer};
use crossterm::execute;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{Write, stdout};
use tracing::info;

pub const STANDINGS_NEEDS_LEAGUE: &str = "Please specify a league. Example --standings --league=EPL";
pub const PLAYERS_NEEDS_TEAM: &str = "Please specify a team. Example --players --team=MUFC";

/// Returns the usage notice for flag combinations that cannot run.
pub fn usage_notice(args: &Args) -> Option<&'static str> {
    if args.live {
        None
    } else if args.standings && args.league.is_none() {
        Some(STANDINGS_NEEDS_LEAGUE)
    } else if args.players && args.team.is_none() {
        Some(PLAYERS_NEEDS_TEAM)
    } else {
        None
    }
}

/// Loads configuration, letting `--apikey` replace the stored token.
pub fn load_config(args: &Args) -> Result<Config, AppError> {
    match &args.apikey {
        Some(token) => Config::load_with_token(token.clone()),
        None => Config::load(),
    }
}

/// Handles the --list-config command.
pub fn handle_list_config_command() -> Result<(), AppError> {
    Config::display()
}

/// Prints one bold red advisory line.
pub fn print_notice(out: &mut impl Write, message: &str) -> Result<(), AppError> {
    execute!(
        out,
        SetForegroundColor(Color::Red),
        SetAttribute(Attribute::Bold),
        Print(message),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("\n")
    )?;
    Ok(())
}

/// Runs the single report selected by the flags.
///
/// Precedence: live scores, standings, team reports, then league fixtures.
pub fn dispatch<T: Transport, W: Writer>(
    handler: &mut RequestHandler<T, W>,
    args: &Args,
) -> Result<CommandOutcome, AppError> {
    let window = args.time_window();

    if args.live {
        return handler.get_live_scores();
    }

    if args.standings {
        return match &args.league {
            Some(league) => handler.get_standings(league),
            None => Ok(CommandOutcome::Failed(STANDINGS_NEEDS_LEAGUE.to_string())),
        };
    }

    if let Some(team) = &args.team {
        return if args.players {
            handler.get_team_players(team)
        } else {
            handler.get_team_scores(team, window)
        };
    }

    if args.players {
        return Ok(CommandOutcome::Failed(PLAYERS_NEEDS_TEAM.to_string()));
    }

    handler.get_league_scores(args.league.as_deref(), window)
}

/// Builds the gateway and writer for this invocation and runs the report.
/// Advisory outcomes are printed; only writer failures are returned.
pub fn run(args: &Args, config: &Config) -> Result<(), AppError> {
    let gateway = ApiGateway::from_config(config)?;
    let writer = OutputWriter::new(
        args.output_format(),
        args.output_target(),
        args.use_12_hour,
    );
    let mut handler = RequestHandler::new(gateway, writer);

    let outcome = dispatch(&mut handler, args)?;
    info!("Report finished: {outcome:?}");

    if let Some(message) = outcome.message() {
        print_notice(&mut stdout(), message)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_notice() {
        let args = Args {
            standings: true,
            ..Args::default()
        };
        assert_eq!(usage_notice(&args), Some(STANDINGS_NEEDS_LEAGUE));

        let args = Args {
            players: true,
            ..Args::default()
        };
        assert_eq!(usage_notice(&args), Some(PLAYERS_NEEDS_TEAM));

        let args = Args {
            standings: true,
            league: Some("EPL".to_string()),
            ..Args::default()
        };
        assert_eq!(usage_notice(&args), None);
    }

    #[test]
    fn test_print_notice_is_one_line() {
        let mut out = Vec::new();
        print_notice(&mut out, "No live action currently").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No live action currently"));
        assert!(text.ends_with('\n'));
        assert_eq!(text.matches('\n').count(), 1);
    }
}
