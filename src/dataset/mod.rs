//! The immutable Olympic event dataset.
//!
//! [`Games`] is built once (see [`crate::ingestion::load_games`]) and then passed by shared
//! reference into every query in [`crate::query`]. Nothing in the crate mutates it after
//! construction.

mod column;
mod record;

use std::collections::BTreeSet;

pub use column::{Column, KeyPart};
pub use record::{EventRecord, Medal, Season, Sex, UnknownLiteral};

/// Year of the 1906 Intercalated Games, which is not counted as an official edition.
pub const UNOFFICIAL_EDITION_YEAR: i64 = 1906;

/// Read-only collection of [`EventRecord`]s, one per athlete-event participation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Games {
    records: Vec<EventRecord>,
}

impl Games {
    pub fn new(records: Vec<EventRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct edition years, ascending.
    pub fn years(&self) -> BTreeSet<i64> {
        self.records.iter().map(|r| r.year).collect()
    }

    /// Distinct non-absent regions, ascending.
    pub fn regions(&self) -> BTreeSet<&str> {
        self.records.iter().filter_map(|r| r.region.as_deref()).collect()
    }

    /// Distinct sports, ascending.
    pub fn sports(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.sport.as_str()).collect()
    }
}

impl FromIterator<EventRecord> for Games {
    fn from_iter<I: IntoIterator<Item = EventRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Games {
    type Item = &'a EventRecord;
    type IntoIter = std::slice::Iter<'a, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
