//! Output sinks for every report.
//!
//! [`OutputWriter`] is the closed set of sinks chosen once per invocation
//! from the CLI flags. Console output always goes to standard output; CSV
//! and JSON go either to standard output or to a file, never both.

pub mod colors;
pub mod console;
pub mod csv_writer;
pub mod json_writer;
pub mod records;

use crate::data_fetcher::models::{
    Fixture, LeagueGroup, LiveScore, Player, StandingRow, TimeWindow,
};
use crate::error::AppError;
use clap::ValueEnum;
use std::fs;
use std::io::{Stdout, Write, stdout};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub use console::ConsoleWriter;
pub use csv_writer::CsvWriter;
pub use json_writer::JsonWriter;

/// Renders normalized results. Every operation is called at most once per
/// invocation and only with non-empty input.
pub trait Writer {
    fn live_scores(&mut self, games: &[LiveScore]) -> Result<(), AppError>;

    fn team_scores(&mut self, fixtures: &[Fixture], window: TimeWindow) -> Result<(), AppError>;

    fn standings(&mut self, rows: &[StandingRow], league_code: &str) -> Result<(), AppError>;

    fn league_scores(&mut self, groups: &[LeagueGroup], window: TimeWindow)
    -> Result<(), AppError>;

    fn team_players(&mut self, players: &[Player]) -> Result<(), AppError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colorized terminal output
    #[default]
    Stdout,
    Csv,
    Json,
}

impl OutputFormat {
    /// Infers a format from a `.csv` or `.json` file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }

    /// An explicit format wins; otherwise the output file extension decides,
    /// falling back to console output.
    pub fn resolve(explicit: Option<Self>, output_file: Option<&Path>) -> Self {
        explicit
            .or_else(|| output_file.and_then(Self::from_path))
            .unwrap_or_default()
    }
}

/// Where CSV and JSON reports are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    /// Overwritten in full on every write.
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map(Self::File).unwrap_or(Self::Stdout)
    }

    /// Sends a rendered report to the target.
    pub fn emit(&self, bytes: &[u8]) -> Result<(), AppError> {
        match self {
            OutputTarget::Stdout => {
                let mut out = stdout().lock();
                out.write_all(bytes)?;
                out.flush()?;
            }
            OutputTarget::File(path) => {
                fs::write(path, bytes)?;
                info!("Wrote {} bytes to {}", bytes.len(), path.display());
            }
        }
        Ok(())
    }
}

pub enum OutputWriter {
    Console(ConsoleWriter<Stdout>),
    Csv(CsvWriter),
    Json(JsonWriter),
}

impl OutputWriter {
    pub fn new(format: OutputFormat, target: OutputTarget, use_12_hour: bool) -> Self {
        match format {
            OutputFormat::Stdout => {
                if let OutputTarget::File(path) = &target {
                    warn!(
                        "Console output ignores output file {}; use --output-format csv or json",
                        path.display()
                    );
                }
                OutputWriter::Console(ConsoleWriter::stdout(use_12_hour))
            }
            OutputFormat::Csv => OutputWriter::Csv(CsvWriter::new(target)),
            OutputFormat::Json => OutputWriter::Json(JsonWriter::new(target)),
        }
    }

    fn inner(&mut self) -> &mut dyn Writer {
        match self {
            OutputWriter::Console(writer) => writer,
            OutputWriter::Csv(writer) => writer,
            OutputWriter::Json(writer) => writer,
        }
    }
}

impl Writer for OutputWriter {
    fn live_scores(&mut self, games: &[LiveScore]) -> Result<(), AppError> {
        self.inner().live_scores(games)
    }

    fn team_scores(&mut self, fixtures: &[Fixture], window: TimeWindow) -> Result<(), AppError> {
        self.inner().team_scores(fixtures, window)
    }

    fn standings(&mut self, rows: &[StandingRow], league_code: &str) -> Result<(), AppError> {
        self.inner().standings(rows, league_code)
    }

    fn league_scores(
        &mut self,
        groups: &[LeagueGroup],
        window: TimeWindow,
    ) -> Result<(), AppError> {
        self.inner().league_scores(groups, window)
    }

    fn team_players(&mut self, players: &[Player]) -> Result<(), AppError> {
        self.inner().team_players(players)
    }
}
