//! Per-athlete demographic views.
//!
//! All three queries first reduce the dataset to one record per
//! [`keys::ATHLETE_IDENTITY`], i.e. per `(name, region)`, keeping each athlete's first
//! record.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dataset::{Column, EventRecord, Games, Medal, Sex};
use crate::processing::{dedup_by, filter, keys, map};
use crate::types::{DataSet, DataType, Field, Schema, Value};

use super::Filter;

/// Medal label substituted for athletes without a medal in [`weight_vs_height`].
pub const NO_MEDAL: &str = "No Medal";

fn athletes(games: &Games) -> Vec<&EventRecord> {
    dedup_by(games, keys::ATHLETE_IDENTITY)
}

/// One row per athlete with every record column, for scatter plots.
///
/// Absent medals read [`NO_MEDAL`]. With `sport` set, only athletes whose first record is
/// in that sport are kept. Height and weight stay null where unknown.
pub fn weight_vs_height(games: &Games, sport: &Filter<String>) -> DataSet {
    let schema = Schema::new(Column::ALL.iter().map(|c| c.field()).collect());
    let rows = athletes(games)
        .into_iter()
        .map(|r| Column::ALL.iter().map(|&c| r.value(c)).collect())
        .collect();
    let table = DataSet::new(schema, rows);

    let medal_idx = table.schema.index_of(Column::Medal.name());
    let table = map(&table, |row| {
        let mut out = row.to_vec();
        if let Some(i) = medal_idx.filter(|&i| out[i].is_null()) {
            out[i] = Value::from(NO_MEDAL);
        }
        out
    });

    let out = match sport.as_only() {
        None => table,
        Some(s) => {
            let sport_idx = table.schema.index_of(Column::Sport.name());
            filter(&table, |row| {
                sport_idx.is_some_and(|i| row[i].as_str() == Some(s.as_str()))
            })
        }
    };

    tracing::debug!(%sport, rows = out.row_count(), "weight_vs_height");
    out
}

/// Distinct athletes per year split by sex. Columns: `[Year, Male, Female]`.
///
/// Years where only one sex took part report `0` for the other.
pub fn men_vs_women(games: &Games) -> DataSet {
    let mut per_year: BTreeMap<i64, [i64; 2]> = BTreeMap::new();
    for r in athletes(games) {
        let slot = match r.sex {
            Sex::Male => 0,
            Sex::Female => 1,
        };
        per_year.entry(r.year).or_default()[slot] += 1;
    }

    let schema = Schema::new(vec![
        Column::Year.field(),
        Field::new("Male", DataType::Int64),
        Field::new("Female", DataType::Int64),
    ]);
    let rows = per_year
        .into_iter()
        .map(|(year, [m, f])| vec![Value::Int64(year), Value::Int64(m), Value::Int64(f)])
        .collect();
    let out = DataSet::new(schema, rows);

    tracing::debug!(rows = out.row_count(), "men_vs_women");
    out
}

/// Athlete ages for density plots, overall and per medal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgeDistribution {
    pub overall: Vec<f64>,
    pub gold: Vec<f64>,
    pub silver: Vec<f64>,
    pub bronze: Vec<f64>,
}

/// Ages of all athletes and of gold/silver/bronze medallists. Unknown ages are skipped.
pub fn age_distribution(games: &Games) -> AgeDistribution {
    let mut out = AgeDistribution::default();
    for r in athletes(games) {
        let Some(age) = r.age else { continue };
        out.overall.push(age);
        match r.medal {
            Some(Medal::Gold) => out.gold.push(age),
            Some(Medal::Silver) => out.silver.push(age),
            Some(Medal::Bronze) => out.bronze.push(age),
            None => {}
        }
    }
    tracing::debug!(athletes = out.overall.len(), "age_distribution");
    out
}
