use crate::data_fetcher::models::{Fixture, LeagueGroup};
use crate::leagues::{League, LeagueTable};

/// Groups a multi-league fixture list into one group per supported league.
///
/// Fixtures without a league id, or with an id the table does not know, are
/// dropped. v1 season ids and v2 competition ids of the same league land in
/// one group. Groups come out in ascending season id order; inside a group
/// the feed order is kept.
pub fn group_by_league(fixtures: Vec<Fixture>, leagues: &LeagueTable) -> Vec<LeagueGroup> {
    let total = fixtures.len();
    let mut known: Vec<(&League, Fixture)> = fixtures
        .into_iter()
        .filter_map(|fixture| Some((leagues.by_id(fixture.league_id?)?, fixture)))
        .collect();

    if known.len() < total {
        tracing::debug!(
            "Dropped {} fixtures from unsupported leagues",
            total - known.len()
        );
    }

    // sort_by_key is stable
    known.sort_by_key(|(league, _)| league.id);

    let mut groups: Vec<LeagueGroup> = Vec::new();
    for (league, fixture) in known {
        match groups.last_mut() {
            Some(group) if group.code == league.code => group.fixtures.push(fixture),
            _ => groups.push(LeagueGroup {
                code: league.code.to_string(),
                name: league.name.to_string(),
                fixtures: vec![fixture],
            }),
        }
    }

    groups
}
