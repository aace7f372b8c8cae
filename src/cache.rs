//! Memoised query results.
//!
//! [`Games`] never changes after it is built, so a result keyed by the query and its
//! arguments stays valid for the life of the process.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::dataset::{Column, Games};
use crate::processing::PivotTable;
use crate::query::{self, Filter};
use crate::types::DataSet;

/// A table-producing query together with its filter arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    MedalTally {
        year: Filter<i64>,
        country: Filter<String>,
    },
    OverallMedalTally,
    DataOverTime(Column),
    EventDensity,
    MostSuccessful(Filter<String>),
    MostSuccessfulInCountry(String),
    YearwiseMedalTally(String),
    CountryEventHeatmap(String),
    WeightVsHeight(Filter<String>),
    MenVsWomen,
}

impl QueryKey {
    /// Run the query against `games`.
    pub fn run(&self, games: &Games) -> QueryOutput {
        match self {
            QueryKey::MedalTally { year, country } => {
                QueryOutput::Table(query::fetch_medal_tally(games, year, country))
            }
            QueryKey::OverallMedalTally => QueryOutput::Table(query::overall_medal_tally(games)),
            QueryKey::DataOverTime(column) => QueryOutput::Table(query::data_over_time(games, *column)),
            QueryKey::EventDensity => QueryOutput::Pivot(query::event_density_pivot(games)),
            QueryKey::MostSuccessful(sport) => QueryOutput::Table(query::most_successful(games, sport)),
            QueryKey::MostSuccessfulInCountry(country) => {
                QueryOutput::Table(query::most_successful_athletes_country(games, country))
            }
            QueryKey::YearwiseMedalTally(country) => {
                QueryOutput::Table(query::yearwise_medal_tally(games, country))
            }
            QueryKey::CountryEventHeatmap(country) => query::country_event_heatmap(games, country)
                .map_or(QueryOutput::NoData, QueryOutput::Pivot),
            QueryKey::WeightVsHeight(sport) => QueryOutput::Table(query::weight_vs_height(games, sport)),
            QueryKey::MenVsWomen => QueryOutput::Table(query::men_vs_women(games)),
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::MedalTally { year, country } => write!(f, "medal_tally({year}, {country})"),
            QueryKey::OverallMedalTally => f.write_str("overall_medal_tally"),
            QueryKey::DataOverTime(column) => write!(f, "data_over_time({column})"),
            QueryKey::EventDensity => f.write_str("event_density"),
            QueryKey::MostSuccessful(sport) => write!(f, "most_successful({sport})"),
            QueryKey::MostSuccessfulInCountry(c) => write!(f, "most_successful_in_country({c})"),
            QueryKey::YearwiseMedalTally(c) => write!(f, "yearwise_medal_tally({c})"),
            QueryKey::CountryEventHeatmap(c) => write!(f, "country_event_heatmap({c})"),
            QueryKey::WeightVsHeight(sport) => write!(f, "weight_vs_height({sport})"),
            QueryKey::MenVsWomen => f.write_str("men_vs_women"),
        }
    }
}

/// What a [`QueryKey`] produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    Table(DataSet),
    Pivot(PivotTable),
    /// The country heatmap found no medals.
    NoData,
}

impl QueryOutput {
    /// Row count of the result; `0` for [`QueryOutput::NoData`].
    pub fn row_count(&self) -> usize {
        match self {
            QueryOutput::Table(t) => t.row_count(),
            QueryOutput::Pivot(p) => p.rows.len(),
            QueryOutput::NoData => 0,
        }
    }
}

/// Shares one dataset between callers and remembers every result it computes.
pub struct QueryCache {
    games: Arc<Games>,
    entries: Mutex<HashMap<QueryKey, Arc<QueryOutput>>>,
}

impl QueryCache {
    pub fn new(games: Arc<Games>) -> Self {
        Self {
            games,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn games(&self) -> &Games {
        &self.games
    }

    /// Cached result for `key`, computing it on first use.
    pub fn get(&self, key: &QueryKey) -> Arc<QueryOutput> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(hit) = entries.get(key) {
            tracing::trace!(%key, "query cache hit");
            return Arc::clone(hit);
        }

        let out = Arc::new(key.run(&self.games));
        tracing::debug!(%key, rows = out.row_count(), "query cache miss");
        entries.insert(key.clone(), Arc::clone(&out));
        out
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCache")
            .field("records", &self.games.len())
            .field("entries", &self.len())
            .finish()
    }
}
