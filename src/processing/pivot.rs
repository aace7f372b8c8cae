//! Dense `label × year` count tables for heat-map rendering.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::types::{DataSet, DataType, Field, Schema, Value};

/// A cross-tab of counts: one row per label (e.g. sport), one column per year.
///
/// Labels and years are sorted ascending. Combinations that never occurred hold `0`, so
/// every cell is present and non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PivotTable {
    /// Name of the label dimension, used as the first column header.
    pub row_header: String,
    pub rows: Vec<String>,
    pub years: Vec<i64>,
    /// `cells[row][col]` is the count for `rows[row]` in `years[col]`.
    pub cells: Vec<Vec<i64>>,
}

impl PivotTable {
    /// Count `(label, year)` observations.
    pub fn count<'a, I>(row_header: impl Into<String>, observations: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        let mut counts: BTreeMap<(&str, i64), i64> = BTreeMap::new();
        let mut years = BTreeSet::new();
        for (label, year) in observations {
            *counts.entry((label, year)).or_insert(0) += 1;
            years.insert(year);
        }

        let years: Vec<i64> = years.into_iter().collect();
        let mut rows: Vec<String> = Vec::new();
        let mut cells: Vec<Vec<i64>> = Vec::new();
        for ((label, year), n) in counts {
            if rows.last().map(String::as_str) != Some(label) {
                rows.push(label.to_owned());
                cells.push(vec![0; years.len()]);
            }
            // `years` holds every year seen above, so the search always succeeds.
            if let (Ok(col), Some(row)) = (years.binary_search(&year), cells.last_mut()) {
                row[col] = n;
            }
        }

        Self {
            row_header: row_header.into(),
            rows,
            years,
            cells,
        }
    }

    /// Count for one label and year; `0` for unknown combinations.
    pub fn get(&self, label: &str, year: i64) -> i64 {
        let row = self.rows.iter().position(|r| r == label);
        let col = self.years.binary_search(&year).ok();
        match (row, col) {
            (Some(r), Some(c)) => self.cells[r][c],
            _ => 0,
        }
    }

    /// Sum over all cells.
    pub fn total(&self) -> i64 {
        self.cells.iter().flatten().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Flatten into a [`DataSet`] with columns `[row_header, <year>, <year>, ...]`.
    pub fn to_dataset(&self) -> DataSet {
        let mut fields = vec![Field::new(self.row_header.clone(), DataType::Utf8)];
        fields.extend(
            self.years
                .iter()
                .map(|y| Field::new(y.to_string(), DataType::Int64)),
        );
        let rows = self
            .rows
            .iter()
            .zip(&self.cells)
            .map(|(label, counts)| {
                std::iter::once(Value::from(label.as_str()))
                    .chain(counts.iter().map(|&n| Value::Int64(n)))
                    .collect()
            })
            .collect();
        DataSet::new(Schema::new(fields), rows)
    }
}
