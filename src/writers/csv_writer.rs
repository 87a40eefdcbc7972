use crate::data_fetcher::models::{
    Fixture, LeagueGroup, LiveScore, Player, StandingRow, TimeWindow,
};
use crate::error::AppError;
use crate::writers::records::{
    Record, league_records, live_records, player_records, standing_records, team_records,
};
use crate::writers::{OutputTarget, Writer};
use std::io;

/// Writes each report as a header row plus one record per result.
#[derive(Debug, Clone)]
pub struct CsvWriter {
    target: OutputTarget,
}

impl CsvWriter {
    pub fn new(target: OutputTarget) -> Self {
        Self { target }
    }

    /// Renders records into CSV bytes without touching the target.
    pub fn render<R: Record>(records: &[R]) -> Result<Vec<u8>, AppError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(R::HEADER)?;
        for record in records {
            writer.write_record(record.csv_row())?;
        }
        writer.into_inner().map_err(|e| {
            let cause = e.error();
            AppError::Io(io::Error::new(cause.kind(), cause.to_string()))
        })
    }

    fn write<R: Record>(&self, records: &[R]) -> Result<(), AppError> {
        self.target.emit(&Self::render(records)?)
    }
}

impl Writer for CsvWriter {
    fn live_scores(&mut self, games: &[LiveScore]) -> Result<(), AppError> {
        self.write(&live_records(games))
    }

    fn team_scores(&mut self, fixtures: &[Fixture], window: TimeWindow) -> Result<(), AppError> {
        self.write(&team_records(fixtures, window))
    }

    fn standings(&mut self, rows: &[StandingRow], _league_code: &str) -> Result<(), AppError> {
        self.write(&standing_records(rows))
    }

    fn league_scores(
        &mut self,
        groups: &[LeagueGroup],
        _window: TimeWindow,
    ) -> Result<(), AppError> {
        self.write(&league_records(groups))
    }

    fn team_players(&mut self, players: &[Player]) -> Result<(), AppError> {
        self.write(&player_records(players))
    }
}
