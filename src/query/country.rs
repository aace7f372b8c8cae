//! Single-country medal timeline and sport heatmap.

use std::collections::BTreeMap;

use crate::dataset::{Column, EventRecord, Games};
use crate::processing::{dedup_by, keys, PivotTable};
use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Medal rows of `country`, one per [`keys::COUNTRY_MEDAL_UNIT`].
fn country_medal_units<'a>(games: &'a Games, country: &str) -> Vec<&'a EventRecord> {
    dedup_by(games.iter().filter(|r| r.has_medal()), keys::COUNTRY_MEDAL_UNIT)
        .into_iter()
        .filter(|r| r.is_from(country))
        .collect()
}

/// Medals won by `country` per year, ascending. Columns: `[Year, Medal]`.
///
/// Years without a medal are absent.
pub fn yearwise_medal_tally(games: &Games, country: &str) -> DataSet {
    let mut per_year: BTreeMap<i64, i64> = BTreeMap::new();
    for r in country_medal_units(games, country) {
        *per_year.entry(r.year).or_insert(0) += 1;
    }

    let schema = Schema::new(vec![
        Column::Year.field(),
        Field::new(Column::Medal.name(), DataType::Int64),
    ]);
    let rows = per_year
        .into_iter()
        .map(|(year, n)| vec![Value::Int64(year), Value::Int64(n)])
        .collect();
    let out = DataSet::new(schema, rows);

    tracing::debug!(country, rows = out.row_count(), "yearwise_medal_tally");
    out
}

/// Medals won by `country` per sport per year.
///
/// Returns `None` when the country has no medals at all, so callers can show a "no data"
/// state instead of an empty chart.
pub fn country_event_heatmap(games: &Games, country: &str) -> Option<PivotTable> {
    let units = country_medal_units(games, country);
    if units.is_empty() {
        tracing::debug!(country, "country_event_heatmap: no medals");
        return None;
    }

    let out = PivotTable::count(
        Column::Sport.name(),
        units.into_iter().map(|r| (r.sport.as_str(), r.year)),
    );
    tracing::debug!(country, sports = out.rows.len(), "country_event_heatmap");
    Some(out)
}
