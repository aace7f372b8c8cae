//! CSV ingestion implementation.

use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{DataSet, DataType, Schema, Value};

/// Ingest a CSV file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain all schema fields (order can differ, extra columns are ignored).
/// - Each value is parsed according to the schema field type.
/// - Empty cells and cells equal to one of `null_values` become [`Value::Null`].
pub fn ingest_csv_from_path(
    path: impl AsRef<Path>,
    schema: &Schema,
    null_values: &[String],
) -> IngestionResult<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr, schema, null_values)
}

/// Ingest CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    schema: &Schema,
    null_values: &[String],
) -> IngestionResult<DataSet> {
    let headers = rdr.headers()?.clone();

    // Map schema fields -> CSV column indexes (allows re-ordered CSV columns).
    let mut col_idxs = Vec::with_capacity(schema.fields.len());
    for field in &schema.fields {
        match headers.iter().position(|h| h == field.name) {
            Some(idx) => col_idxs.push(idx),
            None => {
                return Err(IngestionError::SchemaMismatch {
                    message: format!(
                        "missing required column '{field}'. headers={:?}",
                        headers.iter().collect::<Vec<_>>(),
                        field = field.name
                    ),
                });
            }
        }
    }

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let mut row: Vec<Value> = Vec::with_capacity(schema.fields.len());
        for (field, &csv_idx) in schema.fields.iter().zip(col_idxs.iter()) {
            let raw = record.get(csv_idx).unwrap_or("");
            row.push(parse_typed_value(
                user_row,
                &field.name,
                field.data_type,
                raw,
                null_values,
            )?);
        }
        rows.push(row);
    }

    Ok(DataSet::new(schema.clone(), rows))
}

fn parse_typed_value(
    row: usize,
    column: &str,
    data_type: DataType,
    raw: &str,
    null_values: &[String],
) -> IngestionResult<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || null_values.iter().any(|n| n == trimmed) {
        return Ok(Value::Null);
    }

    let parse_error = |message: String| IngestionError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message,
    };

    match data_type {
        DataType::Utf8 => Ok(Value::Utf8(trimmed.to_owned())),
        DataType::Int64 => trimmed
            .parse::<i64>()
            .map(Value::Int64)
            .map_err(|e| parse_error(e.to_string())),
        DataType::Float64 => trimmed
            .parse::<f64>()
            .map(Value::Float64)
            .map_err(|e| parse_error(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Field;

    fn read(input: &str, schema: &Schema) -> IngestionResult<DataSet> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input.as_bytes());
        ingest_csv_from_reader(&mut rdr, schema, &["NA".to_string()])
    }

    #[test]
    fn null_markers_become_null() {
        let schema = Schema::new(vec![
            Field::new("Age", DataType::Float64),
            Field::new("Medal", DataType::Utf8),
        ]);
        let ds = read("Age,Medal\nNA,Gold\n24,NA\n", &schema).unwrap();
        assert_eq!(
            ds.rows,
            vec![
                vec![Value::Null, Value::from("Gold")],
                vec![Value::Float64(24.0), Value::Null],
            ]
        );
    }

    #[test]
    fn reports_row_and_column_of_bad_number() {
        let schema = Schema::new(vec![
            Field::new("Name", DataType::Utf8),
            Field::new("Year", DataType::Int64),
        ]);
        let err = read("Name,Year\nLouis,1896\nBurke,eighteen\n", &schema).unwrap_err();
        match err {
            IngestionError::ParseError { row, column, raw, .. } => {
                assert_eq!(row, 3);
                assert_eq!(column, "Year");
                assert_eq!(raw, "eighteen");
            }
            other => panic!("expected ParseError, got {other:?}"),
        }
    }
}
