use crate::data_fetcher::models::Outcome;
use crate::leagues::Tier;
use crossterm::style::Color;

// Match result tints
pub fn win_fg() -> Color {
    Color::Red
}
pub fn lose_fg() -> Color {
    Color::Blue
}
pub fn tie_fg() -> Color {
    Color::Yellow
}

// Kick-off time or match clock
pub fn time_fg() -> Color {
    Color::Yellow
}

// Headers, banners and dates
pub fn misc_fg() -> Color {
    Color::Green
}

// Standings tiers
pub fn champions_fg() -> Color {
    Color::Green
}
pub fn europa_fg() -> Color {
    Color::Yellow
}
pub fn relegation_fg() -> Color {
    Color::Red
}
pub fn mid_table_fg() -> Color {
    Color::Blue
}

pub fn tier_fg(tier: Tier) -> Color {
    match tier {
        Tier::Champions => champions_fg(),
        Tier::Europa => europa_fg(),
        Tier::Relegation => relegation_fg(),
        Tier::MidTable => mid_table_fg(),
    }
}

/// Tints for the home and away halves of a score line.
pub fn result_tints(outcome: Outcome) -> (Color, Color) {
    match outcome {
        Outcome::HomeWin => (win_fg(), lose_fg()),
        Outcome::AwayWin => (lose_fg(), win_fg()),
        Outcome::Draw | Outcome::Unplayed => (tie_fg(), tie_fg()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_tints_cover_every_outcome() {
        assert_eq!(result_tints(Outcome::HomeWin), (Color::Red, Color::Blue));
        assert_eq!(result_tints(Outcome::AwayWin), (Color::Blue, Color::Red));
        assert_eq!(result_tints(Outcome::Draw), (Color::Yellow, Color::Yellow));
        assert_eq!(result_tints(Outcome::Unplayed), (Color::Yellow, Color::Yellow));
    }

    #[test]
    fn test_tier_tints() {
        assert_eq!(tier_fg(Tier::Champions), Color::Green);
        assert_eq!(tier_fg(Tier::Europa), Color::Yellow);
        assert_eq!(tier_fg(Tier::Relegation), Color::Red);
        assert_eq!(tier_fg(Tier::MidTable), Color::Blue);
    }
}
