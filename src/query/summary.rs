//! Headline statistics and the choice lists offered to the user.

use std::collections::HashSet;

use serde::Serialize;

use crate::dataset::{Games, UNOFFICIAL_EDITION_YEAR};

use super::Filter;

/// Values a user may pick in the medal tally filters, each list headed by `Overall`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChoices {
    pub years: Vec<Filter<i64>>,
    pub countries: Vec<Filter<String>>,
}

/// Year and country choices, ascending after the leading `Overall`.
pub fn filter_choices(games: &Games) -> FilterChoices {
    let years = std::iter::once(Filter::Overall)
        .chain(games.years().into_iter().map(Filter::Only))
        .collect();
    let countries = std::iter::once(Filter::Overall)
        .chain(games.regions().into_iter().map(Filter::only))
        .collect();
    FilterChoices { years, countries }
}

/// `Overall` followed by every sport, ascending.
pub fn sport_choices(games: &Games) -> Vec<Filter<String>> {
    std::iter::once(Filter::Overall)
        .chain(games.sports().into_iter().map(Filter::only))
        .collect()
}

/// Distinct-value counts shown at the top of the overall analysis page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TopStatistics {
    /// Editions held, not counting the 1906 Intercalated Games.
    pub editions: usize,
    pub host_cities: usize,
    pub sports: usize,
    pub events: usize,
    /// Distinct athlete names.
    pub athletes: usize,
    /// Distinct regions; records without a region are not a nation.
    pub nations: usize,
}

pub fn top_statistics(games: &Games) -> TopStatistics {
    let distinct = |f: fn(&crate::dataset::EventRecord) -> &str| {
        games.iter().map(f).collect::<HashSet<_>>().len()
    };

    let stats = TopStatistics {
        editions: games
            .years()
            .into_iter()
            .filter(|&y| y != UNOFFICIAL_EDITION_YEAR)
            .count(),
        host_cities: distinct(|r| r.city.as_str()),
        sports: games.sports().len(),
        events: distinct(|r| r.event.as_str()),
        athletes: distinct(|r| r.name.as_str()),
        nations: games.regions().len(),
    };
    tracing::debug!(?stats, "top_statistics");
    stats
}
