//! Static league and team lookup tables.
//!
//! Both tables are built once per process and never mutated.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Display tier of a standings position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Champions,
    Europa,
    Relegation,
    MidTable,
}

/// Position ranges that earn a distinct tint in the standings view.
/// Any range may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeagueZoneBounds {
    pub champions: Option<RangeInclusive<u32>>,
    pub europa: Option<RangeInclusive<u32>>,
    pub relegation: Option<RangeInclusive<u32>>,
}

impl LeagueZoneBounds {
    /// Classifies a table position. Zones are checked in the order
    /// champions, europa, relegation; the first containing zone wins.
    pub fn classify(&self, position: u32) -> Tier {
        let zones = [
            (&self.champions, Tier::Champions),
            (&self.europa, Tier::Europa),
            (&self.relegation, Tier::Relegation),
        ];
        zones
            .into_iter()
            .find_map(|(zone, tier)| {
                zone.as_ref()
                    .filter(|range| range.contains(&position))
                    .map(|_| tier)
            })
            .unwrap_or(Tier::MidTable)
    }
}

/// A league the API knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct League {
    pub code: &'static str,
    /// Season id used by the v1 API and in `_links.soccerseason`.
    pub id: u32,
    /// Competition id used by the v2 API in `competition.id`.
    pub competition_id: u32,
    pub name: &'static str,
    pub zones: LeagueZoneBounds,
}

/// The set of supported leagues, addressable by code or by API id.
#[derive(Debug, Clone)]
pub struct LeagueTable {
    leagues: Vec<League>,
}

impl LeagueTable {
    pub fn new(leagues: Vec<League>) -> Self {
        Self { leagues }
    }

    pub fn by_code(&self, code: &str) -> Option<&League> {
        self.leagues
            .iter()
            .find(|league| league.code.eq_ignore_ascii_case(code))
    }

    /// Looks a league up by either its v1 season id or its v2 competition id.
    pub fn by_id(&self, id: u32) -> Option<&League> {
        self.leagues
            .iter()
            .find(|league| league.id == id || league.competition_id == id)
    }

    pub fn contains_id(&self, id: u32) -> bool {
        self.by_id(id).is_some()
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.leagues.iter().map(|league| league.code)
    }
}

fn zones(
    champions: RangeInclusive<u32>,
    europa: Option<RangeInclusive<u32>>,
    relegation: RangeInclusive<u32>,
) -> LeagueZoneBounds {
    LeagueZoneBounds {
        champions: Some(champions),
        europa,
        relegation: Some(relegation),
    }
}

/// Leagues supported by the scores API, with their table zones.
pub static LEAGUES: Lazy<LeagueTable> = Lazy::new(|| {
    LeagueTable::new(vec![
        League {
            code: "EPL",
            id: 426,
            competition_id: 2021,
            name: "Premier League",
            zones: zones(1..=4, Some(5..=7), 18..=20),
        },
        League {
            code: "BL",
            id: 430,
            competition_id: 2002,
            name: "Bundesliga",
            zones: zones(1..=4, None, 16..=18),
        },
        League {
            code: "DED",
            id: 433,
            competition_id: 2003,
            name: "Eredivisie",
            zones: zones(1..=2, None, 16..=18),
        },
        League {
            code: "FL",
            id: 434,
            competition_id: 2015,
            name: "Ligue 1",
            zones: zones(1..=3, None, 19..=20),
        },
        League {
            code: "LLIGA",
            id: 436,
            competition_id: 2014,
            name: "La Liga",
            zones: zones(1..=4, None, 18..=20),
        },
        League {
            code: "SA",
            id: 438,
            competition_id: 2019,
            name: "Serie A",
            zones: zones(1..=3, None, 18..=20),
        },
        League {
            code: "PPL",
            id: 439,
            competition_id: 2017,
            name: "Primeira Liga",
            zones: zones(1..=3, None, 17..=18),
        },
        League {
            code: "CL",
            id: 440,
            competition_id: 2001,
            name: "Champions League",
            zones: LeagueZoneBounds::default(),
        },
    ])
});

#[derive(Debug, Deserialize)]
struct TeamEntry {
    code: String,
    id: u32,
}

/// Lookup from the short team codes accepted on the command line to API ids.
#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    ids: BTreeMap<String, u32>,
}

impl TeamDirectory {
    /// Parses a JSON array of `{"code", "id"}` entries.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<TeamEntry> = serde_json::from_str(json)?;
        Ok(Self {
            ids: entries
                .into_iter()
                .map(|entry| (entry.code.to_ascii_uppercase(), entry.id))
                .collect(),
        })
    }

    pub fn id_for(&self, code: &str) -> Option<u32> {
        self.ids.get(&code.to_ascii_uppercase()).copied()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.ids.keys().map(String::as_str)
    }
}

/// Team codes shipped with the binary.
pub static TEAMS: Lazy<TeamDirectory> = Lazy::new(|| {
    TeamDirectory::from_json(include_str!("teams.json")).unwrap_or_else(|e| {
        tracing::error!("Embedded team table is invalid: {e}");
        TeamDirectory::default()
    })
});
