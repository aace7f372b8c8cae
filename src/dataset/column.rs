//! Column names of the event dataset and hashable key components.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::record::UnknownLiteral;
use crate::types::{DataType, Field};

/// One attribute of an [`super::EventRecord`].
///
/// [`Column::name`] is the header used by the source CSV and by every output table, so a
/// query result column named after a record attribute always uses this spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Column {
    Name,
    Sex,
    Age,
    Height,
    Weight,
    Team,
    Noc,
    Region,
    Games,
    Year,
    Season,
    City,
    Sport,
    Event,
    Medal,
}

impl Column {
    /// Every column, in source-file order.
    pub const ALL: [Column; 15] = [
        Column::Name,
        Column::Sex,
        Column::Age,
        Column::Height,
        Column::Weight,
        Column::Team,
        Column::Noc,
        Column::Region,
        Column::Games,
        Column::Year,
        Column::Season,
        Column::City,
        Column::Sport,
        Column::Event,
        Column::Medal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Sex => "Sex",
            Column::Age => "Age",
            Column::Height => "Height",
            Column::Weight => "Weight",
            Column::Team => "Team",
            Column::Noc => "NOC",
            Column::Region => "region",
            Column::Games => "Games",
            Column::Year => "Year",
            Column::Season => "Season",
            Column::City => "City",
            Column::Sport => "Sport",
            Column::Event => "Event",
            Column::Medal => "Medal",
        }
    }

    pub fn data_type(self) -> DataType {
        match self {
            Column::Age | Column::Height | Column::Weight => DataType::Float64,
            Column::Year => DataType::Int64,
            _ => DataType::Utf8,
        }
    }

    pub fn field(self) -> Field {
        Field::new(self.name(), self.data_type())
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Column {
    type Err = UnknownLiteral;

    /// Case-insensitive match on the column header.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLiteral {
                kind: "column",
                value: s.to_owned(),
            })
    }
}

/// A borrowed attribute value that can be hashed and compared for deduplication.
///
/// Absent optional values compare equal to each other, so two rows that both lack a region
/// share a key on that column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPart<'a> {
    Missing,
    Int(i64),
    /// Bit pattern of a finite float; `-0.0` is normalised to `0.0`.
    Float(u64),
    Text(&'a str),
}

impl KeyPart<'_> {
    pub(crate) fn from_float(v: Option<f64>) -> Self {
        match v {
            Some(f) if f == 0.0 => KeyPart::Float(0f64.to_bits()),
            Some(f) => KeyPart::Float(f.to_bits()),
            None => KeyPart::Missing,
        }
    }
}
