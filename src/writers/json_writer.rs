use crate::data_fetcher::models::{
    Fixture, LeagueGroup, LiveScore, Player, StandingRow, TimeWindow,
};
use crate::error::AppError;
use crate::writers::records::{
    league_records, live_records, player_records, standing_records, team_records,
};
use crate::writers::{OutputTarget, Writer};
use serde::Serialize;
use std::collections::BTreeMap;

/// Writes each report as one pretty-printed object with a single key.
#[derive(Debug, Clone)]
pub struct JsonWriter {
    target: OutputTarget,
}

impl JsonWriter {
    pub fn new(target: OutputTarget) -> Self {
        Self { target }
    }

    /// Renders `{ key: [records...] }` without touching the target.
    /// Record fields keep their declared order.
    pub fn render<T: Serialize>(key: &str, records: &[T]) -> Result<Vec<u8>, AppError> {
        let report = BTreeMap::from([(key, records)]);

        let mut text = serde_json::to_string_pretty(&report)?;
        text.push('\n');
        Ok(text.into_bytes())
    }

    fn write<T: Serialize>(&self, key: &str, records: &[T]) -> Result<(), AppError> {
        self.target.emit(&Self::render(key, records)?)
    }
}

impl Writer for JsonWriter {
    fn live_scores(&mut self, games: &[LiveScore]) -> Result<(), AppError> {
        self.write("live_scores", &live_records(games))
    }

    fn team_scores(&mut self, fixtures: &[Fixture], window: TimeWindow) -> Result<(), AppError> {
        self.write("team_scores", &team_records(fixtures, window))
    }

    fn standings(&mut self, rows: &[StandingRow], _league_code: &str) -> Result<(), AppError> {
        self.write("standings", &standing_records(rows))
    }

    fn league_scores(
        &mut self,
        groups: &[LeagueGroup],
        _window: TimeWindow,
    ) -> Result<(), AppError> {
        self.write("league_scores", &league_records(groups))
    }

    fn team_players(&mut self, players: &[Player]) -> Result<(), AppError> {
        self.write("players", &player_records(players))
    }
}
