//! Per-edition counts and the sport × year event density pivot.

use std::collections::BTreeMap;

use crate::dataset::{Column, Games, KeyPart};
use crate::processing::{dedup_by, keys, PivotTable};
use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Header of the edition-year column in time-series outputs.
pub const EDITION: &str = "Edition";

/// Number of distinct `column` values per edition, ascending by year.
///
/// Output columns are `[Edition, <column name>]`. Editions where nothing was counted are
/// absent rather than zero, and absent values (e.g. an unmapped region) are not counted
/// as an entity.
pub fn data_over_time(games: &Games, column: Column) -> DataSet {
    let mut per_year: BTreeMap<i64, i64> = BTreeMap::new();
    for r in dedup_by(games, &[Column::Year, column]) {
        if r.key(column) != KeyPart::Missing {
            *per_year.entry(r.year).or_insert(0) += 1;
        }
    }

    let schema = Schema::new(vec![
        Field::new(EDITION, DataType::Int64),
        Field::new(column.name(), DataType::Int64),
    ]);
    let rows = per_year
        .into_iter()
        .map(|(year, n)| vec![Value::Int64(year), Value::Int64(n)])
        .collect();
    let out = DataSet::new(schema, rows);

    tracing::debug!(%column, rows = out.row_count(), "data_over_time");
    out
}

/// Distinct events per sport per edition.
pub fn event_density_pivot(games: &Games) -> PivotTable {
    let events = dedup_by(games, keys::EVENT_EDITION);
    let out = PivotTable::count(
        Column::Sport.name(),
        events.into_iter().map(|r| (r.sport.as_str(), r.year)),
    );
    tracing::debug!(sports = out.rows.len(), years = out.years.len(), "event_density_pivot");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::rec;

    fn games() -> Games {
        let mut unmapped = rec("Nobody", "Nowhere", 1900, "Polo", "Polo Men's Polo");
        unmapped.region = None;
        Games::new(vec![
            rec("Ahlgren", "Sweden", 1896, "Wrestling", "Wrestling Men's Open"),
            rec("Schuhmann", "Germany", 1896, "Wrestling", "Wrestling Men's Open"),
            rec("Schuhmann", "Germany", 1896, "Gymnastics", "Gymnastics Men's Vault"),
            rec("Ahlgren", "Sweden", 1904, "Wrestling", "Wrestling Men's Open"),
            unmapped,
        ])
    }

    #[test]
    fn counts_distinct_nations_per_edition() {
        let out = data_over_time(&games(), Column::Region);
        assert_eq!(
            out.schema.field_names().collect::<Vec<_>>(),
            vec!["Edition", "region"]
        );
        assert_eq!(
            out.rows,
            vec![
                vec![Value::Int64(1896), Value::Int64(2)],
                vec![Value::Int64(1904), Value::Int64(1)],
            ]
        );
    }

    #[test]
    fn row_count_bounded_by_distinct_years() {
        let g = games();
        for column in [Column::Region, Column::Event, Column::Name] {
            assert!(data_over_time(&g, column).row_count() <= g.years().len());
        }
    }

    #[test]
    fn counts_events_once_per_edition() {
        let out = data_over_time(&games(), Column::Event);
        let counts: Vec<i64> = out.column("Event").unwrap().filter_map(Value::as_i64).collect();
        assert_eq!(counts, vec![2, 1, 1]);
    }

    #[test]
    fn pivots_events_by_sport_and_year() {
        let pt = event_density_pivot(&games());
        assert_eq!(pt.rows, vec!["Gymnastics", "Polo", "Wrestling"]);
        assert_eq!(pt.years, vec![1896, 1900, 1904]);
        assert_eq!(pt.get("Wrestling", 1896), 1);
        assert_eq!(pt.get("Wrestling", 1904), 1);
        assert_eq!(pt.get("Gymnastics", 1904), 0);
        assert_eq!(pt.total(), 4);
    }

    #[test]
    fn empty_games_give_empty_outputs() {
        let empty = Games::default();
        let out = data_over_time(&empty, Column::Region);
        assert_eq!(out.schema.field_names().collect::<Vec<_>>(), vec!["Edition", "region"]);
        assert_eq!(out.row_count(), 0);

        let pt = event_density_pivot(&empty);
        assert!(pt.is_empty());
        assert!(pt.years.is_empty());
        assert_eq!(pt.to_dataset().schema.field_names().collect::<Vec<_>>(), vec!["Sport"]);
    }
}
