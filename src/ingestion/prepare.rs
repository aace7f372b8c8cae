//! Turn the raw athlete-event and NOC-region tables into the typed [`Games`] dataset.

use std::collections::HashMap;
use std::str::FromStr;

use crate::dataset::{Column, EventRecord, Games, Season, UnknownLiteral};
use crate::error::{IngestionError, IngestionResult};
use crate::processing::dedup_by;
use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Columns read from the athlete-events file. `region` is joined in later.
pub fn athlete_events_schema() -> Schema {
    Schema::new(
        Column::ALL
            .iter()
            .filter(|&&c| c != Column::Region)
            .map(|c| c.field())
            .collect(),
    )
}

/// Columns read from the NOC-regions file.
pub fn noc_regions_schema() -> Schema {
    Schema::new(vec![
        Field::new(Column::Noc.name(), DataType::Utf8),
        Field::new(Column::Region.name(), DataType::Utf8),
    ])
}

/// NOC code → region name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionLookup {
    regions: HashMap<String, String>,
}

impl RegionLookup {
    /// Build from a table shaped like [`noc_regions_schema`].
    ///
    /// Rows with a null region are skipped, so their NOC stays unmapped. The first
    /// mapping wins if a NOC is listed twice.
    pub fn from_dataset(ds: &DataSet) -> IngestionResult<Self> {
        let column = |name: &str| {
            ds.schema.index_of(name).ok_or_else(|| IngestionError::SchemaMismatch {
                message: format!("noc regions table has no '{name}' column"),
            })
        };
        let noc_idx = column(Column::Noc.name())?;
        let region_idx = column(Column::Region.name())?;

        let mut regions = HashMap::new();
        for row in &ds.rows {
            if let (Some(noc), Some(region)) = (row[noc_idx].as_str(), row[region_idx].as_str()) {
                regions
                    .entry(noc.to_owned())
                    .or_insert_with(|| region.to_owned());
            }
        }
        Ok(Self { regions })
    }

    pub fn get(&self, noc: &str) -> Option<&str> {
        self.regions.get(noc).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl FromIterator<(String, String)> for RegionLookup {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut regions = HashMap::new();
        for (noc, region) in iter {
            regions.entry(noc).or_insert(region);
        }
        Self { regions }
    }
}

/// Options controlling [`prepare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepareOptions {
    /// Keep only this season; `None` keeps both.
    pub season: Option<Season>,
    /// Drop rows identical in every column, keeping the first.
    pub drop_duplicate_rows: bool,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            season: Some(Season::Summer),
            drop_duplicate_rows: true,
        }
    }
}

/// Build the immutable dataset from a raw athlete-events table.
///
/// Each row becomes an [`EventRecord`] with `region` resolved through `regions`. Rows of
/// other seasons are dropped, then exact duplicates if requested.
pub fn prepare(
    events: &DataSet,
    regions: &RegionLookup,
    options: &PrepareOptions,
) -> IngestionResult<Games> {
    let layout = Layout::new(&events.schema)?;

    let mut records = Vec::with_capacity(events.row_count());
    for (idx0, row) in events.rows.iter().enumerate() {
        let reader = RowReader {
            row,
            layout: &layout,
            line: idx0 + 2,
        };
        let record = reader.record(regions)?;
        if options.season.is_none_or(|s| s == record.season) {
            records.push(record);
        }
    }

    let kept = records.len();
    let games = if options.drop_duplicate_rows {
        dedup_by(&records, &Column::ALL).into_iter().cloned().collect()
    } else {
        Games::new(records)
    };

    tracing::debug!(
        input = events.row_count(),
        in_season = kept,
        kept = games.len(),
        mapped_nocs = regions.len(),
        "prepared dataset"
    );
    Ok(games)
}

/// Column positions of every record attribute except `region`.
struct Layout {
    idx: HashMap<Column, usize>,
}

impl Layout {
    fn new(schema: &Schema) -> IngestionResult<Self> {
        let mut idx = HashMap::new();
        for column in Column::ALL.into_iter().filter(|&c| c != Column::Region) {
            let pos = schema
                .index_of(column.name())
                .ok_or_else(|| IngestionError::SchemaMismatch {
                    message: format!("athlete events table has no '{column}' column"),
                })?;
            idx.insert(column, pos);
        }
        Ok(Self { idx })
    }
}

static NULL: Value = Value::Null;

struct RowReader<'a> {
    row: &'a [Value],
    layout: &'a Layout,
    line: usize,
}

impl RowReader<'_> {
    fn cell(&self, column: Column) -> &Value {
        self.layout
            .idx
            .get(&column)
            .and_then(|&i| self.row.get(i))
            .unwrap_or(&NULL)
    }

    fn invalid(&self, message: String) -> IngestionError {
        IngestionError::InvalidRecord {
            row: self.line,
            message,
        }
    }

    fn text(&self, column: Column) -> IngestionResult<String> {
        match self.cell(column) {
            Value::Utf8(s) => Ok(s.clone()),
            Value::Null => Err(self.invalid(format!("'{column}' is required"))),
            other => Err(self.invalid(format!("'{column}' is not text: {other:?}"))),
        }
    }

    fn number(&self, column: Column) -> Option<f64> {
        self.cell(column).as_f64()
    }

    fn literal<T>(&self, column: Column) -> IngestionResult<Option<T>>
    where
        T: FromStr<Err = UnknownLiteral>,
    {
        match self.cell(column).as_str() {
            None => Ok(None),
            Some(s) => s.parse().map(Some).map_err(|e: UnknownLiteral| self.invalid(e.to_string())),
        }
    }

    fn required<T>(&self, column: Column) -> IngestionResult<T>
    where
        T: FromStr<Err = UnknownLiteral>,
    {
        self.literal(column)?
            .ok_or_else(|| self.invalid(format!("'{column}' is required")))
    }

    fn record(&self, regions: &RegionLookup) -> IngestionResult<EventRecord> {
        let noc = self.text(Column::Noc)?;
        let year = self
            .cell(Column::Year)
            .as_i64()
            .ok_or_else(|| self.invalid("'Year' is required".to_string()))?;
        Ok(EventRecord {
            name: self.text(Column::Name)?,
            sex: self.required(Column::Sex)?,
            age: self.number(Column::Age),
            height_cm: self.number(Column::Height),
            weight_kg: self.number(Column::Weight),
            team: self.text(Column::Team)?,
            region: regions.get(&noc).map(str::to_owned),
            noc,
            games: self.text(Column::Games)?,
            year,
            season: self.required(Column::Season)?,
            city: self.text(Column::City)?,
            sport: self.text(Column::Sport)?,
            event: self.text(Column::Event)?,
            medal: self.literal(Column::Medal)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Medal, Sex};

    fn raw(rows: Vec<[&str; 14]>) -> DataSet {
        let schema = athlete_events_schema();
        let rows = rows
            .into_iter()
            .map(|cells| {
                schema
                    .fields
                    .iter()
                    .zip(cells)
                    .map(|(f, c)| match (f.data_type, c) {
                        (_, "") => Value::Null,
                        (DataType::Int64, c) => Value::Int64(c.parse().unwrap()),
                        (DataType::Float64, c) => Value::Float64(c.parse().unwrap()),
                        (_, c) => Value::from(c),
                    })
                    .collect()
            })
            .collect();
        DataSet::new(schema, rows)
    }

    fn lookup() -> RegionLookup {
        [("URS", "Russia"), ("RUS", "Russia")]
            .into_iter()
            .map(|(n, r)| (n.to_string(), r.to_string()))
            .collect()
    }

    const LATYNINA: [&str; 14] = [
        "Larysa Latynina", "F", "21", "161", "", "Soviet Union", "URS", "1956 Summer", "1956",
        "Summer", "Melbourne", "Gymnastics", "Gymnastics Women's Floor Exercise", "Gold",
    ];

    #[test]
    fn joins_region_and_parses_literals() {
        let mut unmapped = LATYNINA;
        unmapped[6] = "XXX";
        let games = prepare(&raw(vec![LATYNINA, unmapped]), &lookup(), &PrepareOptions::default())
            .unwrap();
        let r = &games.records()[0];
        assert_eq!(r.sex, Sex::Female);
        assert_eq!(r.region.as_deref(), Some("Russia"));
        assert_eq!(r.medal, Some(Medal::Gold));
        assert_eq!(r.weight_kg, None);
        assert_eq!(games.records()[1].region, None);
    }

    #[test]
    fn filters_season_and_exact_duplicates() {
        let mut winter = LATYNINA;
        winter[9] = "Winter";
        let ds = raw(vec![LATYNINA, LATYNINA, winter]);

        let games = prepare(&ds, &lookup(), &PrepareOptions::default()).unwrap();
        assert_eq!(games.len(), 1);

        let all = PrepareOptions {
            season: None,
            drop_duplicate_rows: false,
        };
        assert_eq!(prepare(&ds, &lookup(), &all).unwrap().len(), 3);
    }

    #[test]
    fn rejects_unknown_sex() {
        let mut bad = LATYNINA;
        bad[1] = "X";
        let err = prepare(&raw(vec![bad]), &lookup(), &PrepareOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "invalid record at row 2: unknown sex 'X'");
    }

    #[test]
    fn region_lookup_skips_null_regions() {
        let ds = DataSet::new(
            noc_regions_schema(),
            vec![
                vec![Value::from("ROT"), Value::Null],
                vec![Value::from("NOR"), Value::from("Norway")],
            ],
        );
        let lookup = RegionLookup::from_dataset(&ds).unwrap();
        assert_eq!(lookup.get("NOR"), Some("Norway"));
        assert_eq!(lookup.get("ROT"), None);
        assert_eq!(lookup.len(), 1);
    }
}
