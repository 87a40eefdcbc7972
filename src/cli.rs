use crate::constants::DEFAULT_TIME_WINDOW_DAYS;
use crate::data_fetcher::models::TimeWindow;
use crate::writers::{OutputFormat, OutputTarget};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Football scores, standings and rosters in your terminal
///
/// Without a report flag, recent fixtures of every supported league are shown.
///
/// Supported leagues: EPL, BL, LLIGA, SA, PPL, FL, DED, CL.
///
/// Reports can be printed in color, or exported as CSV or JSON to standard
/// output or to a file.
#[derive(Parser, Debug, Default)]
#[command(name = "soccer", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show live scores from matches currently in play.
    #[arg(long, help_heading = "Reports")]
    pub live: bool,

    /// Show the league table. Requires --league.
    #[arg(long, help_heading = "Reports")]
    pub standings: bool,

    /// League code, e.g. EPL. Shows that league's fixtures, or its table with --standings.
    #[arg(short = 'l', long, value_name = "CODE", help_heading = "Reports")]
    pub league: Option<String>,

    /// Team code, e.g. MUFC. Shows the team's fixtures, or its squad with --players.
    #[arg(short = 't', long, value_name = "CODE", help_heading = "Reports")]
    pub team: Option<String>,

    /// Show the squad of the team given with --team.
    #[arg(long, help_heading = "Reports")]
    pub players: bool,

    /// Number of days to look back, or ahead with --upcoming.
    #[arg(long, value_name = "DAYS", default_value_t = DEFAULT_TIME_WINDOW_DAYS, help_heading = "Time")]
    pub time: u32,

    /// Show fixtures in the coming days instead of past results.
    #[arg(long, help_heading = "Time")]
    pub upcoming: bool,

    /// Show kick-off times in 12-hour format.
    #[arg(long = "use12hour", help_heading = "Time")]
    pub use_12_hour: bool,

    /// Output format. Inferred from a .csv or .json --output-file when omitted.
    #[arg(short = 'o', long, value_enum, help_heading = "Output")]
    pub output_format: Option<OutputFormat>,

    /// Write CSV or JSON output to this file instead of standard output.
    /// The file is overwritten.
    #[arg(long, value_name = "PATH", help_heading = "Output")]
    pub output_file: Option<PathBuf>,

    /// API token to use for this run instead of the configured one.
    #[arg(long, value_name = "TOKEN", help_heading = "Configuration")]
    pub apikey: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", help_heading = "Configuration")]
    pub list_config: bool,

    /// Also print log records to standard error.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    pub fn time_window(&self) -> TimeWindow {
        if self.upcoming {
            TimeWindow::upcoming(self.time)
        } else {
            TimeWindow::past(self.time)
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::resolve(self.output_format, self.output_file.as_deref())
    }

    pub fn output_target(&self) -> OutputTarget {
        OutputTarget::from_option(self.output_file.clone())
    }
}
