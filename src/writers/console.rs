use crate::constants::console::{
    GOALS_WIDTH, LEAGUE_HEADER_FILL, LEAGUE_HEADER_WIDTH, TEAM_NAME_WIDTH,
};
use crate::data_fetcher::models::{
    Fixture, LeagueGroup, LiveScore, MatchResult, Player, StandingRow, TimeWindow,
};
use crate::data_fetcher::processors::to_local;
use crate::error::AppError;
use crate::writers::Writer;
use crate::writers::colors::{misc_fg, result_tints, tier_fg, time_fg};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{Stdout, Write, stdout};

/// Colorized terminal rendering of every report.
pub struct ConsoleWriter<W: Write> {
    out: W,
    use_12_hour: bool,
}

impl ConsoleWriter<Stdout> {
    pub fn stdout(use_12_hour: bool) -> Self {
        Self::new(stdout(), use_12_hour)
    }
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(out: W, use_12_hour: bool) -> Self {
        Self { out, use_12_hour }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn tinted(&mut self, color: Color, text: &str) -> Result<(), AppError> {
        queue!(self.out, SetForegroundColor(color), Print(text), ResetColor)?;
        Ok(())
    }

    fn plain(&mut self, text: &str) -> Result<(), AppError> {
        queue!(self.out, Print(text))?;
        Ok(())
    }

    fn newline(&mut self) -> Result<(), AppError> {
        self.plain("\n")
    }

    fn finish(&mut self) -> Result<(), AppError> {
        self.out.flush()?;
        Ok(())
    }

    /// `Home                       2 vs  1                     Away`, without
    /// a trailing newline.
    fn score_line(&mut self, result: &MatchResult) -> Result<(), AppError> {
        let (home_tint, away_tint) = result_tints(result.outcome());
        let home = format!(
            "{:<name$} {:>goals$}",
            result.home_team,
            result.home_goals,
            name = TEAM_NAME_WIDTH,
            goals = GOALS_WIDTH
        );
        let away = format!(
            "{:>goals$} {:>name$}",
            result.away_goals,
            result.away_team,
            name = TEAM_NAME_WIDTH,
            goals = GOALS_WIDTH
        );

        self.tinted(home_tint, &home)?;
        self.plain(" vs ")?;
        self.tinted(away_tint, &away)
    }

    fn kickoff(&mut self, time: &str) -> Result<(), AppError> {
        self.tinted(time_fg(), &format!("   {time}"))
    }

    fn league_header(&mut self, name: &str) -> Result<(), AppError> {
        self.newline()?;
        self.tinted(misc_fg(), &league_banner(name))?;
        self.newline()?;
        self.newline()
    }
}

/// Centres ` {name} ` in a fixed-width banner of fill characters. Odd
/// padding puts the extra fill on the right.
pub fn league_banner(name: &str) -> String {
    let label = format!(" {name} ");
    let pad = LEAGUE_HEADER_WIDTH.saturating_sub(label.chars().count());
    let left = pad / 2;
    let fill = |n: usize| LEAGUE_HEADER_FILL.to_string().repeat(n);
    format!("{}{label}{}", fill(left), fill(pad - left))
}

/// Goal difference column value; non-negative values get a leading space
/// so they line up with negative ones.
fn goal_difference(value: i32) -> String {
    if value >= 0 {
        format!(" {value}")
    } else {
        value.to_string()
    }
}

fn standings_line(
    position: &str,
    club: &str,
    played: &str,
    goal_diff: &str,
    points: &str,
) -> String {
    format!("{position:<6}  {club:<30}    {played:<9}    {goal_diff:<11}    {points:<10}")
}

fn roster_line(
    number: &str,
    name: &str,
    position: &str,
    nationality: &str,
    birthday: &str,
    value: &str,
) -> String {
    format!(
        "{number:<4} {name:<25}    {position:<20}    {nationality:<20}    {birthday:<15}    {value:<10}"
    )
}

impl<W: Write> Writer for ConsoleWriter<W> {
    fn live_scores(&mut self, games: &[LiveScore]) -> Result<(), AppError> {
        let mut current: Option<&str> = None;
        for game in games {
            if current != Some(game.league.as_str()) {
                self.league_header(&game.league)?;
                current = Some(game.league.as_str());
            }
            self.score_line(&game.result)?;
            let time = to_local(&game.time, self.use_12_hour, false);
            self.kickoff(&time)?;
            self.newline()?;
        }
        self.finish()
    }

    fn team_scores(&mut self, fixtures: &[Fixture], window: TimeWindow) -> Result<(), AppError> {
        for fixture in fixtures.iter().filter(|f| window.includes(f)) {
            if window.upcoming {
                self.score_line(&fixture.result)?;
                let time = to_local(&fixture.date, self.use_12_hour, true);
                self.kickoff(&time)?;
            } else {
                self.tinted(misc_fg(), &format!("{}\t", fixture.date_only()))?;
                self.score_line(&fixture.result)?;
            }
            self.newline()?;
        }
        self.finish()
    }

    fn standings(&mut self, rows: &[StandingRow], _league_code: &str) -> Result<(), AppError> {
        let header = format!(
            "{:<6}  {:<30}    {:<10}    {:<10}    {:<10}",
            "POS", "CLUB", "PLAYED", "GOAL DIFF", "POINTS"
        );
        self.tinted(misc_fg(), &header)?;
        self.newline()?;

        for row in rows {
            let line = standings_line(
                &row.position.to_string(),
                &row.team_name,
                &row.played.to_string(),
                &goal_difference(row.goal_difference),
                &row.points.to_string(),
            );
            self.tinted(tier_fg(row.tier), &line)?;
            self.newline()?;
        }
        self.finish()
    }

    fn league_scores(
        &mut self,
        groups: &[LeagueGroup],
        window: TimeWindow,
    ) -> Result<(), AppError> {
        for group in groups {
            self.league_header(&group.name)?;
            for fixture in &group.fixtures {
                self.score_line(&fixture.result)?;
                if window.upcoming {
                    let time = to_local(&fixture.date, self.use_12_hour, true);
                    self.kickoff(&time)?;
                }
                self.newline()?;
            }
        }
        self.finish()
    }

    fn team_players(&mut self, players: &[Player]) -> Result<(), AppError> {
        let header = roster_line(
            "N.",
            "NAME",
            "POSITION",
            "NATIONALITY",
            "BIRTHDAY",
            "MARKET VALUE",
        );
        self.tinted(misc_fg(), &header)?;
        self.newline()?;

        for player in players {
            let number = player
                .jersey_number
                .map(|n| n.to_string())
                .unwrap_or_default();
            let line = roster_line(
                &number,
                &player.name,
                player.position.as_deref().unwrap_or_default(),
                player.nationality.as_deref().unwrap_or_default(),
                player.date_of_birth.as_deref().unwrap_or_default(),
                player.market_value.as_deref().unwrap_or_default(),
            );
            self.plain(&line)?;
            self.newline()?;
        }
        self.finish()
    }
}
