//! Gold/Silver/Bronze/Total tallies counted per medal-award unit.

use std::collections::BTreeMap;

use crate::dataset::{Column, EventRecord, Games, Medal};
use crate::processing::{dedup_by, keys};
use crate::types::{DataSet, DataType, Field, Schema, Value};

use super::Filter;

/// Per-group medal counters indexed by [`Medal`] (Gold, Silver, Bronze).
#[derive(Debug, Clone, Copy, Default)]
struct Tally([i64; 3]);

impl Tally {
    fn add(&mut self, medal: Option<Medal>) {
        if let Some(m) = medal {
            self.0[m as usize] += 1;
        }
    }

    fn gold(&self) -> i64 {
        self.0[Medal::Gold as usize]
    }

    fn row(&self, key: Value) -> Vec<Value> {
        let [gold, silver, bronze] = self.0;
        vec![
            key,
            Value::Int64(gold),
            Value::Int64(silver),
            Value::Int64(bronze),
            Value::Int64(gold + silver + bronze),
        ]
    }
}

fn tally_schema(key: Field) -> Schema {
    Schema::new(vec![
        key,
        Field::new("Gold", DataType::Int64),
        Field::new("Silver", DataType::Int64),
        Field::new("Bronze", DataType::Int64),
        Field::new("Total", DataType::Int64),
    ])
}

/// Medal table for the given year and country filters.
///
/// Rows are deduplicated on [`keys::MEDAL_AWARD_UNIT`] first, so a relay or team-sport
/// medal counts once however many athletes shared it.
///
/// - `country` is `Overall`: one row per region, most golds first (ties keep region order).
/// - `country` is a region: one row per year, ascending, which reads as that country's
///   timeline.
///
/// Groups with participants but no medals appear with zero counts. Records without a
/// region never contribute to a region row.
pub fn fetch_medal_tally(games: &Games, year: &Filter<i64>, country: &Filter<String>) -> DataSet {
    let units = dedup_by(games, keys::MEDAL_AWARD_UNIT);
    let selected = units
        .into_iter()
        .filter(|r| year.admits(r.year) && country.admits(r.region.as_deref()));

    let out = match country {
        Filter::Overall => rank_by_region(selected),
        Filter::Only(_) => {
            let mut by_year: BTreeMap<i64, Tally> = BTreeMap::new();
            for r in selected {
                by_year.entry(r.year).or_default().add(r.medal);
            }
            let rows = by_year
                .into_iter()
                .map(|(y, t)| t.row(Value::Int64(y)))
                .collect();
            DataSet::new(tally_schema(Column::Year.field()), rows)
        }
    };

    tracing::debug!(%year, %country, rows = out.row_count(), "fetch_medal_tally");
    out
}

/// All-time national ranking over [`keys::SPORT_MEDAL_UNIT`].
///
/// Same shape as [`fetch_medal_tally`] with both filters at `Overall`, but the medal unit
/// also distinguishes sport.
pub fn overall_medal_tally(games: &Games) -> DataSet {
    let out = rank_by_region(dedup_by(games, keys::SPORT_MEDAL_UNIT));
    tracing::debug!(rows = out.row_count(), "overall_medal_tally");
    out
}

fn rank_by_region<'a>(records: impl IntoIterator<Item = &'a EventRecord>) -> DataSet {
    let mut by_region: BTreeMap<&str, Tally> = BTreeMap::new();
    for r in records {
        if let Some(region) = r.region.as_deref() {
            by_region.entry(region).or_default().add(r.medal);
        }
    }

    let mut ranked: Vec<(&str, Tally)> = by_region.into_iter().collect();
    ranked.sort_by(|a, b| b.1.gold().cmp(&a.1.gold()));

    let rows = ranked
        .into_iter()
        .map(|(region, t)| t.row(Value::from(region)))
        .collect();
    DataSet::new(tally_schema(Column::Region.field()), rows)
}
