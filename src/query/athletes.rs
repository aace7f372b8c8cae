//! Athletes ranked by personal medal count.

use std::collections::{HashMap, HashSet};

use crate::dataset::{Column, EventRecord, Games};
use crate::types::{DataSet, DataType, Field, Schema, Value};

use super::Filter;

/// Row limit of [`most_successful`].
pub const TOP_ATHLETES: usize = 15;
/// Row limit of [`most_successful_athletes_country`].
pub const TOP_ATHLETES_BY_COUNTRY: usize = 10;

const MEDAL_COUNT: &str = "Medal_Count";

/// Top athletes by number of medal rows, optionally within one sport.
///
/// Counts are per athlete row, not per medal-award unit: a swimmer with three relay golds
/// counts three. `Sport` and `region` come from the athlete's first record in the whole
/// dataset. Columns: `[Name, Medal_Count, Sport, region]`.
pub fn most_successful(games: &Games, sport: &Filter<String>) -> DataSet {
    let medalled = games
        .iter()
        .filter(|r| r.has_medal() && sport.admits(Some(r.sport.as_str())));
    let ranked = rank_athletes(games, medalled, TOP_ATHLETES);

    let schema = Schema::new(vec![
        Column::Name.field(),
        Field::new(MEDAL_COUNT, DataType::Int64),
        Column::Sport.field(),
        Column::Region.field(),
    ]);
    let rows = ranked
        .into_iter()
        .map(|(count, first)| {
            vec![
                first.value(Column::Name),
                Value::Int64(count),
                first.value(Column::Sport),
                first.value(Column::Region),
            ]
        })
        .collect();
    let out = DataSet::new(schema, rows);

    tracing::debug!(%sport, rows = out.row_count(), "most_successful");
    out
}

/// Top athletes of one region by number of medal rows.
///
/// Columns: `[Name, Medal_Count, Sport]`.
pub fn most_successful_athletes_country(games: &Games, country: &str) -> DataSet {
    let medalled = games.iter().filter(|r| r.has_medal() && r.is_from(country));
    let ranked = rank_athletes(games, medalled, TOP_ATHLETES_BY_COUNTRY);

    let schema = Schema::new(vec![
        Column::Name.field(),
        Field::new(MEDAL_COUNT, DataType::Int64),
        Column::Sport.field(),
    ]);
    let rows = ranked
        .into_iter()
        .map(|(count, first)| {
            vec![
                first.value(Column::Name),
                Value::Int64(count),
                first.value(Column::Sport),
            ]
        })
        .collect();
    let out = DataSet::new(schema, rows);

    tracing::debug!(country, rows = out.row_count(), "most_successful_athletes_country");
    out
}

/// Count `medalled` rows per name, keep the `limit` highest counts and pair each with the
/// first record in `games` carrying that name.
///
/// Ties keep first-appearance order. Fewer than `limit` athletes are returned as-is.
fn rank_athletes<'a>(
    games: &'a Games,
    medalled: impl Iterator<Item = &'a EventRecord>,
    limit: usize,
) -> Vec<(i64, &'a EventRecord)> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, i64)> = Vec::new();
    for r in medalled {
        let slot = *slots.entry(r.name.as_str()).or_insert_with(|| {
            counts.push((r.name.as_str(), 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);

    let wanted: HashSet<&str> = counts.iter().map(|&(name, _)| name).collect();
    let mut first: HashMap<&str, &EventRecord> = HashMap::with_capacity(wanted.len());
    for r in games {
        if wanted.contains(r.name.as_str()) {
            first.entry(r.name.as_str()).or_insert(r);
        }
    }

    counts
        .into_iter()
        .filter_map(|(name, n)| first.get(name).map(|&r| (n, r)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Medal;
    use crate::query::fixtures::{medal, rec};

    fn games() -> Games {
        let mut records = vec![
            // First record for Spitz is a non-medal water polo entry.
            rec("Spitz", "USA", 1964, "Water Polo", "Water Polo Men's Water Polo"),
        ];
        for ev in ["100 Free", "200 Free", "100 Fly", "200 Fly", "Relay"] {
            records.push(medal(rec("Spitz", "USA", 1972, "Swimming", ev), Medal::Gold));
        }
        records.push(medal(rec("Latynina", "Russia", 1956, "Gymnastics", "Vault"), Medal::Gold));
        records.push(medal(rec("Latynina", "Russia", 1956, "Gymnastics", "Floor"), Medal::Silver));
        records.push(medal(rec("Biondi", "USA", 1988, "Swimming", "Relay"), Medal::Gold));
        records.push(rec("Unknown", "USA", 1988, "Swimming", "Relay"));
        Games::new(records)
    }

    #[test]
    fn swimming_ranking_counts_personal_medals() {
        let out = most_successful(&games(), &Filter::only("Swimming"));
        assert_eq!(
            out.schema.field_names().collect::<Vec<_>>(),
            vec!["Name", "Medal_Count", "Sport", "region"]
        );
        assert_eq!(
            out.rows[0],
            vec![
                Value::from("Spitz"),
                Value::Int64(5),
                Value::from("Water Polo"),
                Value::from("USA"),
            ]
        );
        assert_eq!(out.row_count(), 2);
    }

    #[test]
    fn overall_ranking_returns_all_when_fewer_than_limit() {
        let out = most_successful(&games(), &Filter::Overall);
        let names: Vec<&str> = out.column("Name").unwrap().filter_map(Value::as_str).collect();
        assert_eq!(names, vec!["Spitz", "Latynina", "Biondi"]);
    }

    #[test]
    fn ranking_truncates_to_limit() {
        let records: Vec<_> = (0..20)
            .map(|i| medal(rec(&format!("A{i:02}"), "Chile", 2000, "Judo", "Judo"), Medal::Bronze))
            .collect();
        let g = Games::new(records);
        assert_eq!(most_successful(&g, &Filter::Overall).row_count(), TOP_ATHLETES);
        assert_eq!(
            most_successful_athletes_country(&g, "Chile").row_count(),
            TOP_ATHLETES_BY_COUNTRY
        );
    }

    #[test]
    fn country_ranking_drops_region_column() {
        let out = most_successful_athletes_country(&games(), "USA");
        assert_eq!(
            out.schema.field_names().collect::<Vec<_>>(),
            vec!["Name", "Medal_Count", "Sport"]
        );
        let counts: Vec<i64> = out.column("Medal_Count").unwrap().filter_map(Value::as_i64).collect();
        assert_eq!(counts, vec![5, 1]);
        assert!(most_successful_athletes_country(&games(), "Atlantis").is_empty());
    }

    #[test]
    fn empty_games_give_empty_rankings() {
        let empty = Games::default();

        let out = most_successful(&empty, &Filter::Overall);
        assert_eq!(
            out.schema.field_names().collect::<Vec<_>>(),
            vec!["Name", "Medal_Count", "Sport", "region"]
        );
        assert_eq!(out.row_count(), 0);

        let out = most_successful_athletes_country(&empty, "USA");
        assert_eq!(
            out.schema.field_names().collect::<Vec<_>>(),
            vec!["Name", "Medal_Count", "Sport"]
        );
        assert_eq!(out.row_count(), 0);
    }
}
